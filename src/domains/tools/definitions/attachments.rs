//! Attachment tools: files stored against items.
//!
//! Binary content crosses the MCP boundary as base64 text in both
//! directions; bytes are decoded just before the multipart upload and
//! re-encoded straight from the response body on download.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::models::{ItemAttachment, ItemOut};
use crate::domains::homebox::{ClientError, HomeboxClient, decode_base64};

use super::common::{self, NoContent};

/// Parameters identifying an attachment on an item.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AttachmentIdParams {
    #[serde(rename = "item_id")]
    #[schemars(description = "ID of the item the attachment belongs to")]
    pub item_id: String,
    #[serde(rename = "attachment_id")]
    #[schemars(description = "ID of the attachment")]
    pub attachment_id: String,
}

/// Parameters for uploading a new attachment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAttachmentParams {
    #[serde(rename = "item_id")]
    #[schemars(description = "ID of the item to attach the file to")]
    pub item_id: String,
    #[schemars(description = "Base64 encoded file content")]
    pub file_content: String,
    #[schemars(description = "Filename for the upload")]
    pub file_name: String,
    /// Attachment type (photo, manual, warranty, receipt, attachment).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    #[schemars(description = "Mark the attachment as the item's primary photo")]
    pub primary: bool,
}

/// Parameters for updating attachment metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateAttachmentParams {
    #[serde(rename = "item_id", skip_serializing)]
    pub item_id: String,
    #[serde(rename = "attachment_id", skip_serializing)]
    pub attachment_id: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetAttachmentOutput {
    /// Base64-encoded file bytes, exactly as returned by the server.
    pub file_content: String,
}

pub struct CreateItemAttachmentTool;

impl CreateItemAttachmentTool {
    pub const NAME: &'static str = "create_item_attachment";
    pub const DESCRIPTION: &'static str =
        "Upload a file attachment (photo, manual, receipt, ...) to an item. Content must be base64 encoded.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<CreateAttachmentParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: CreateAttachmentParams,
    ) -> Result<ItemOut, ClientError> {
        let bytes = decode_base64(&params.file_content)?;
        let mut fields = Vec::new();
        if let Some(kind) = params.kind {
            fields.push(("type".to_string(), kind));
        }
        if params.primary {
            fields.push(("primary".to_string(), "true".to_string()));
        }
        client
            .post_file(
                &format!("items/{}/attachments", params.item_id),
                params.file_name,
                bytes,
                fields,
            )
            .await
    }
}

pub struct GetItemAttachmentTool;

impl GetItemAttachmentTool {
    pub const NAME: &'static str = "get_item_attachment";
    pub const DESCRIPTION: &'static str =
        "Download an item attachment. The file content is returned as base64 text.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<AttachmentIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: AttachmentIdParams,
    ) -> Result<GetAttachmentOutput, ClientError> {
        let file_content = client
            .get_base64(&format!(
                "items/{}/attachments/{}",
                params.item_id, params.attachment_id
            ))
            .await?;
        Ok(GetAttachmentOutput { file_content })
    }
}

pub struct UpdateItemAttachmentTool;

impl UpdateItemAttachmentTool {
    pub const NAME: &'static str = "update_item_attachment";
    pub const DESCRIPTION: &'static str =
        "Update attachment metadata: title, type, or primary-photo flag.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<UpdateAttachmentParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: UpdateAttachmentParams,
    ) -> Result<ItemAttachment, ClientError> {
        client
            .put_json(
                &format!(
                    "items/{}/attachments/{}",
                    params.item_id, params.attachment_id
                ),
                &params,
            )
            .await
    }
}

pub struct DeleteItemAttachmentTool;

impl DeleteItemAttachmentTool {
    pub const NAME: &'static str = "delete_item_attachment";
    pub const DESCRIPTION: &'static str = "Delete an attachment from an item.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<AttachmentIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: AttachmentIdParams,
    ) -> Result<NoContent, ClientError> {
        client
            .delete(&format!(
                "items/{}/attachments/{}",
                params.item_id, params.attachment_id
            ))
            .await?;
        Ok(NoContent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_attachment_rejects_bad_base64() {
        let params = CreateAttachmentParams {
            item_id: "i1".to_string(),
            file_content: "%%%not base64%%%".to_string(),
            file_name: "photo.jpg".to_string(),
            kind: None,
            primary: false,
        };
        let err = decode_base64(&params.file_content).expect_err("expected decode failure");
        assert!(matches!(err, ClientError::DecodeFailed(_)));
    }

    #[test]
    fn test_update_attachment_ids_stay_out_of_body() {
        let params: UpdateAttachmentParams = serde_json::from_str(
            r#"{"item_id": "i1", "attachment_id": "a1", "title": "front", "primary": true}"#,
        )
        .unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert!(body.get("item_id").is_none());
        assert!(body.get("attachment_id").is_none());
        assert_eq!(body["title"], "front");
        assert_eq!(body["primary"], true);
    }
}
