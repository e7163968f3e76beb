//! User tools: the authenticated user's own account.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::models::UserOut;
use crate::domains::homebox::{ClientError, HomeboxClient};

use super::common::{self, EmptyParams, NoContent};

/// Parameters for updating the current user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateUserParams {
    pub name: String,
    pub email: String,
}

/// Parameters for changing the current user's password.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChangePasswordParams {
    #[serde(rename = "current")]
    #[schemars(description = "The current password")]
    pub current_password: String,
    #[serde(rename = "new")]
    #[schemars(description = "The new password")]
    pub new_password: String,
}

/// Parameters for registering a new user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Group invite token; empty creates a new group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

pub struct GetCurrentUserTool;

impl GetCurrentUserTool {
    pub const NAME: &'static str = "get_current_user";
    pub const DESCRIPTION: &'static str = "Fetch the profile of the authenticated user.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<EmptyParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        _params: EmptyParams,
    ) -> Result<UserOut, ClientError> {
        client.get_json("users/self").await
    }
}

pub struct UpdateCurrentUserTool;

impl UpdateCurrentUserTool {
    pub const NAME: &'static str = "update_current_user";
    pub const DESCRIPTION: &'static str = "Update the authenticated user's name and email.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<UpdateUserParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: UpdateUserParams,
    ) -> Result<UserOut, ClientError> {
        client.put_json("users/self", &params).await
    }
}

pub struct DeleteCurrentUserTool;

impl DeleteCurrentUserTool {
    pub const NAME: &'static str = "delete_current_user";
    pub const DESCRIPTION: &'static str = "Delete the authenticated user's account.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<EmptyParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        _params: EmptyParams,
    ) -> Result<NoContent, ClientError> {
        client.delete("users/self").await?;
        Ok(NoContent::default())
    }
}

pub struct ChangePasswordTool;

impl ChangePasswordTool {
    pub const NAME: &'static str = "change_password";
    pub const DESCRIPTION: &'static str = "Change the authenticated user's password.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<ChangePasswordParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: ChangePasswordParams,
    ) -> Result<UserOut, ClientError> {
        client.put_json("users/change-password", &params).await
    }
}

pub struct RegisterUserTool;

impl RegisterUserTool {
    pub const NAME: &'static str = "register_user";
    pub const DESCRIPTION: &'static str =
        "Register a new user account, optionally joining an existing group via invite token.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<RegisterUserParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: RegisterUserParams,
    ) -> Result<UserOut, ClientError> {
        client.post_json("users/register", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_password_wire_names() {
        let params: ChangePasswordParams =
            serde_json::from_str(r#"{"current": "old", "new": "new"}"#).unwrap();
        assert_eq!(params.current_password, "old");
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["current"], "old");
        assert_eq!(body["new"], "new");
    }

    #[test]
    fn test_register_user_token_optional() {
        let params: RegisterUserParams = serde_json::from_str(
            r#"{"name": "New User", "email": "new@example.com", "password": "pw"}"#,
        )
        .unwrap();
        assert!(params.token.is_none());
    }
}
