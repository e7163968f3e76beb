//! Item tools: CRUD, duplication, ancestry, CSV import/export, and custom
//! field lookups.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::models::{ItemField, ItemOut, ItemPath, PaginatedItems};
use crate::domains::homebox::{ClientError, HomeboxClient, decode_base64};

use super::common::{self, EmptyParams, NoContent};

// ============================================================================
// Parameters
// ============================================================================

/// Parameters identifying a single item.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ItemIdParams {
    /// The item ID.
    #[schemars(description = "ID of the item")]
    pub id: String,
}

/// Parameters identifying items by their printed asset tag.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AssetIdParams {
    /// The asset ID printed on the item's asset tag.
    #[schemars(description = "The printed asset ID (asset tag number), e.g. 000-001")]
    pub asset_id: String,
}

/// Parameters for creating an item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemParams {
    #[schemars(description = "Name of the new item")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "IDs of labels to attach")]
    pub label_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "ID of the location holding the item")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// Parameters for updating an item. The update replaces the stored item,
/// so `name` is required even when unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemParams {
    #[schemars(description = "ID of the item to update")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<ItemField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime_warranty: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_child_items_locations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expires: Option<String>,
}

/// Parameters for duplicating an item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateItemParams {
    #[schemars(description = "ID of the item to duplicate")]
    #[serde(skip_serializing)]
    pub id: String,
    #[serde(default)]
    pub copy_attachments: bool,
    #[serde(default)]
    pub copy_custom_fields: bool,
    #[serde(default)]
    pub copy_maintenance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Prefix prepended to the copy's name")]
    pub copy_prefix: Option<String>,
}

/// Parameters for importing items from a CSV file.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImportItemsParams {
    /// Base64-encoded CSV content.
    #[schemars(description = "Base64 encoded CSV file content")]
    pub file_content: String,
    /// Filename reported to the server.
    #[schemars(description = "Filename for the upload (e.g. items.csv)")]
    pub file_name: String,
}

// ============================================================================
// Outputs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GetItemPathOutput {
    pub path: Vec<ItemPath>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportItemsOutput {
    pub csv_data: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetItemFieldsOutput {
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetItemFieldValuesOutput {
    pub values: Vec<String>,
}

// ============================================================================
// Tools
// ============================================================================

pub struct GetItemsTool;

impl GetItemsTool {
    pub const NAME: &'static str = "get_items";
    pub const DESCRIPTION: &'static str =
        "List all inventory items with their labels, locations and prices (paginated summary).";

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
    ) -> Result<PaginatedItems, ClientError> {
        client.get_json("items").await
    }
}

pub struct CreateItemTool;

impl CreateItemTool {
    pub const NAME: &'static str = "create_item";
    pub const DESCRIPTION: &'static str =
        "Create a new inventory item. Only the name is required; location, labels, parent and quantity are optional.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<CreateItemParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: CreateItemParams,
    ) -> Result<ItemOut, ClientError> {
        client.post_json("items", &params).await
    }
}

pub struct GetItemTool;

impl GetItemTool {
    pub const NAME: &'static str = "get_item";
    pub const DESCRIPTION: &'static str =
        "Fetch a single inventory item by ID, including attachments, custom fields and warranty details.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<ItemIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: ItemIdParams,
    ) -> Result<ItemOut, ClientError> {
        client.get_json(&format!("items/{}", params.id)).await
    }
}

pub struct UpdateItemTool;

impl UpdateItemTool {
    pub const NAME: &'static str = "update_item";
    pub const DESCRIPTION: &'static str =
        "Update an inventory item. This is a full replacement: include every field that should be kept.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<UpdateItemParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: UpdateItemParams,
    ) -> Result<ItemOut, ClientError> {
        client
            .put_json(&format!("items/{}", params.id), &params)
            .await
    }
}

pub struct DeleteItemTool;

impl DeleteItemTool {
    pub const NAME: &'static str = "delete_item";
    pub const DESCRIPTION: &'static str = "Delete an inventory item by ID.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<ItemIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: ItemIdParams,
    ) -> Result<NoContent, ClientError> {
        client.delete(&format!("items/{}", params.id)).await?;
        Ok(NoContent::default())
    }
}

pub struct DuplicateItemTool;

impl DuplicateItemTool {
    pub const NAME: &'static str = "duplicate_item";
    pub const DESCRIPTION: &'static str =
        "Duplicate an inventory item, optionally copying attachments, custom fields and maintenance history.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<DuplicateItemParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: DuplicateItemParams,
    ) -> Result<ItemOut, ClientError> {
        client
            .post_json(&format!("items/{}/duplicate", params.id), &params)
            .await
    }
}

pub struct GetItemPathTool;

impl GetItemPathTool {
    pub const NAME: &'static str = "get_item_path";
    pub const DESCRIPTION: &'static str =
        "Get the ancestry of an item: the chain of locations and parent items leading to it.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<ItemIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: ItemIdParams,
    ) -> Result<GetItemPathOutput, ClientError> {
        let path = client.get_json(&format!("items/{}/path", params.id)).await?;
        Ok(GetItemPathOutput { path })
    }
}

pub struct GetItemByAssetIdTool;

impl GetItemByAssetIdTool {
    pub const NAME: &'static str = "get_item_by_asset_id";
    pub const DESCRIPTION: &'static str =
        "Look up items by their asset ID (the printed asset tag number).";

    pub fn to_tool() -> Tool {
        common::tool_meta::<AssetIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: AssetIdParams,
    ) -> Result<PaginatedItems, ClientError> {
        client.get_json(&format!("assets/{}", params.asset_id)).await
    }
}

pub struct ExportItemsTool;

impl ExportItemsTool {
    pub const NAME: &'static str = "export_items";
    pub const DESCRIPTION: &'static str = "Export the full inventory as CSV data.";

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
    ) -> Result<ExportItemsOutput, ClientError> {
        let csv_data = client.get_text("items/export").await?;
        Ok(ExportItemsOutput { csv_data })
    }
}

pub struct ImportItemsTool;

impl ImportItemsTool {
    pub const NAME: &'static str = "import_items";
    pub const DESCRIPTION: &'static str =
        "Import items from a CSV file. The file content must be supplied as base64 text.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<ImportItemsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: ImportItemsParams,
    ) -> Result<NoContent, ClientError> {
        // Decode before any request is built so malformed input never
        // reaches the wire.
        let bytes = decode_base64(&params.file_content)?;
        client
            .post_file_no_content("items/import", params.file_name, bytes)
            .await?;
        Ok(NoContent::default())
    }
}

pub struct GetItemFieldsTool;

impl GetItemFieldsTool {
    pub const NAME: &'static str = "get_item_fields";
    pub const DESCRIPTION: &'static str = "List the names of all custom fields in use.";

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
    ) -> Result<GetItemFieldsOutput, ClientError> {
        let fields = client.get_json("items/fields").await?;
        Ok(GetItemFieldsOutput { fields })
    }
}

pub struct GetItemFieldValuesTool;

impl GetItemFieldValuesTool {
    pub const NAME: &'static str = "get_item_field_values";
    pub const DESCRIPTION: &'static str = "List the distinct values of all custom fields in use.";

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
    ) -> Result<GetItemFieldValuesOutput, ClientError> {
        let values = client.get_json("items/fields/values").await?;
        Ok(GetItemFieldValuesOutput { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_item_params_minimal() {
        let params: CreateItemParams = serde_json::from_str(r#"{"name": "Drill"}"#).unwrap();
        assert_eq!(params.name, "Drill");
        assert!(params.location_id.is_none());
        // Unset optionals are omitted from the outbound body
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Drill"}));
    }

    #[test]
    fn test_asset_id_lookup_has_its_own_schema() {
        let params: AssetIdParams = serde_json::from_str(r#"{"asset_id": "000-001"}"#).unwrap();
        assert_eq!(params.asset_id, "000-001");

        let tool = GetItemByAssetIdTool::to_tool();
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        let description = schema["properties"]["asset_id"]["description"]
            .as_str()
            .unwrap();
        assert!(description.contains("asset"));
        assert!(schema["properties"].get("id").is_none());
    }

    #[test]
    fn test_update_item_params_requires_name() {
        let result = serde_json::from_str::<UpdateItemParams>(r#"{"id": "123"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_params_id_not_serialized_into_body() {
        let params: DuplicateItemParams =
            serde_json::from_str(r#"{"id": "123", "copyAttachments": true}"#).unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["copyAttachments"], true);
    }

    #[test]
    fn test_import_params_require_content_and_name() {
        assert!(serde_json::from_str::<ImportItemsParams>(r#"{"file_name": "x.csv"}"#).is_err());
        let params: ImportItemsParams =
            serde_json::from_str(r#"{"file_content": "YWJj", "file_name": "x.csv"}"#).unwrap();
        assert_eq!(params.file_content, "YWJj");
    }
}
