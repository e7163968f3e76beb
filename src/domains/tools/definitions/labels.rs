//! Label tools: the tags used to categorize items.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::models::LabelOut;
use crate::domains::homebox::{ClientError, HomeboxClient};

use super::common::{self, EmptyParams, NoContent};

/// Parameters identifying a single label.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LabelIdParams {
    #[schemars(description = "ID of the label")]
    pub id: String,
}

/// Parameters for creating a label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    #[schemars(description = "Name of the new label")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Display color (e.g. #ff0000)")]
    pub color: Option<String>,
}

/// Parameters for updating a label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateLabelParams {
    #[schemars(description = "ID of the label to update")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetLabelsOutput {
    pub labels: Vec<LabelOut>,
}

pub struct GetLabelsTool;

impl GetLabelsTool {
    pub const NAME: &'static str = "get_labels";
    pub const DESCRIPTION: &'static str = "List all labels.";

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
    ) -> Result<GetLabelsOutput, ClientError> {
        let labels = client.get_json("labels").await?;
        Ok(GetLabelsOutput { labels })
    }
}

pub struct CreateLabelTool;

impl CreateLabelTool {
    pub const NAME: &'static str = "create_label";
    pub const DESCRIPTION: &'static str = "Create a new label for categorizing items.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<CreateLabelParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: CreateLabelParams,
    ) -> Result<LabelOut, ClientError> {
        client.post_json("labels", &params).await
    }
}

pub struct GetLabelTool;

impl GetLabelTool {
    pub const NAME: &'static str = "get_label";
    pub const DESCRIPTION: &'static str = "Fetch a single label by ID.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<LabelIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: LabelIdParams,
    ) -> Result<LabelOut, ClientError> {
        client.get_json(&format!("labels/{}", params.id)).await
    }
}

pub struct UpdateLabelTool;

impl UpdateLabelTool {
    pub const NAME: &'static str = "update_label";
    pub const DESCRIPTION: &'static str = "Rename or recolor a label.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<UpdateLabelParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: UpdateLabelParams,
    ) -> Result<LabelOut, ClientError> {
        client
            .put_json(&format!("labels/{}", params.id), &params)
            .await
    }
}

pub struct DeleteLabelTool;

impl DeleteLabelTool {
    pub const NAME: &'static str = "delete_label";
    pub const DESCRIPTION: &'static str = "Delete a label by ID.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<LabelIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: LabelIdParams,
    ) -> Result<NoContent, ClientError> {
        client.delete(&format!("labels/{}", params.id)).await?;
        Ok(NoContent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_label_params_optional_color() {
        let params: CreateLabelParams =
            serde_json::from_str(r##"{"name": "tools", "color": "#00ff00"}"##).unwrap();
        assert_eq!(params.color.as_deref(), Some("#00ff00"));
        let minimal: CreateLabelParams = serde_json::from_str(r#"{"name": "tools"}"#).unwrap();
        assert!(minimal.color.is_none());
    }
}
