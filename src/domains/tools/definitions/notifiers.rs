//! Notifier tools: webhook-style notification targets for the group.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::models::NotifierOut;
use crate::domains::homebox::{ClientError, HomeboxClient, encode_query};

use super::common::{self, EmptyParams, NoContent};

/// Parameters for creating a notifier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotifierParams {
    pub name: String,
    #[schemars(description = "Shoutrrr-style notification URL")]
    pub url: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Parameters for updating a notifier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotifierParams {
    #[serde(skip_serializing)]
    #[schemars(description = "ID of the notifier to update")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Parameters identifying a notifier.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NotifierIdParams {
    #[schemars(description = "ID of the notifier")]
    pub id: String,
}

/// Parameters for testing a notification URL.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TestNotifierParams {
    #[schemars(description = "Notification URL to send a test message to")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetNotifiersOutput {
    pub notifiers: Vec<NotifierOut>,
}

pub struct GetNotifiersTool;

impl GetNotifiersTool {
    pub const NAME: &'static str = "get_notifiers";
    pub const DESCRIPTION: &'static str = "List all configured notifiers.";

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
    ) -> Result<GetNotifiersOutput, ClientError> {
        let notifiers = client.get_json("notifiers").await?;
        Ok(GetNotifiersOutput { notifiers })
    }
}

pub struct CreateNotifierTool;

impl CreateNotifierTool {
    pub const NAME: &'static str = "create_notifier";
    pub const DESCRIPTION: &'static str = "Create a new notifier for maintenance reminders.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<CreateNotifierParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: CreateNotifierParams,
    ) -> Result<NotifierOut, ClientError> {
        client.post_json("notifiers", &params).await
    }
}

pub struct UpdateNotifierTool;

impl UpdateNotifierTool {
    pub const NAME: &'static str = "update_notifier";
    pub const DESCRIPTION: &'static str = "Update a notifier's name, URL, or active flag.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<UpdateNotifierParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: UpdateNotifierParams,
    ) -> Result<NotifierOut, ClientError> {
        client
            .put_json(&format!("notifiers/{}", params.id), &params)
            .await
    }
}

pub struct DeleteNotifierTool;

impl DeleteNotifierTool {
    pub const NAME: &'static str = "delete_notifier";
    pub const DESCRIPTION: &'static str = "Delete a notifier by ID.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<NotifierIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: NotifierIdParams,
    ) -> Result<NoContent, ClientError> {
        client.delete(&format!("notifiers/{}", params.id)).await?;
        Ok(NoContent::default())
    }
}

pub struct TestNotifierTool;

impl TestNotifierTool {
    pub const NAME: &'static str = "test_notifier";
    pub const DESCRIPTION: &'static str = "Send a test message to a notification URL.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<TestNotifierParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: TestNotifierParams,
    ) -> Result<NoContent, ClientError> {
        let query = encode_query(&[("url", params.url.as_str())])?;
        client
            .post_no_content(&format!("notifiers/test?{}", query))
            .await?;
        Ok(NoContent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_notifier_id_not_in_body() {
        let params: UpdateNotifierParams =
            serde_json::from_str(r#"{"id": "n1", "isActive": true}"#).unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["isActive"], true);
    }
}
