//! Typed shapes of the Homebox v1 API.
//!
//! These mirror the documented JSON responses. Every struct is fully
//! defaulted on the decode side so partial bodies (older server versions,
//! minimal test fixtures) still decode; fields the server omitted simply
//! come back empty.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Short label form embedded in items and locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Short location form embedded in items and location trees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Item as returned in list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub archived: bool,
    pub asset_id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    pub insured: bool,
    pub labels: Vec<LabelSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationSummary>,
    pub purchase_price: f64,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_id: Option<String>,
    pub updated_at: String,
}

/// Attachment metadata on an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemAttachment {
    pub id: String,
    pub created_at: String,
    pub mime_type: String,
    pub path: String,
    pub primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Box<ItemAttachment>>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: String,
}

/// Custom field attached to an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemField {
    pub id: String,
    pub boolean_value: bool,
    pub name: String,
    pub number_value: i64,
    pub text_value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Full item as returned by single-item endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemOut {
    pub id: String,
    pub archived: bool,
    pub asset_id: String,
    pub attachments: Vec<ItemAttachment>,
    pub created_at: String,
    pub description: String,
    pub fields: Vec<ItemField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    pub insured: bool,
    pub labels: Vec<LabelSummary>,
    pub lifetime_warranty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationSummary>,
    pub manufacturer: String,
    pub model_number: String,
    pub name: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<ItemSummary>>,
    pub purchase_from: String,
    pub purchase_price: f64,
    pub purchase_time: String,
    pub quantity: i64,
    pub serial_number: String,
    pub sold_notes: String,
    pub sold_price: f64,
    pub sold_time: String,
    pub sold_to: String,
    pub sync_child_items_locations: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_id: Option<String>,
    pub updated_at: String,
    pub warranty_details: String,
    pub warranty_expires: String,
}

/// Location with its item count, as returned by the location list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationOutCount {
    pub id: String,
    pub name: String,
    pub description: String,
    pub item_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Full location with parent/children links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationOut {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<LocationSummary>,
    pub children: Vec<LocationSummary>,
    pub total_price: f64,
    pub created_at: String,
    pub updated_at: String,
}

/// Full label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelOut {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Maintenance entry as returned by the per-item log, with item context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaintenanceEntryWithDetails {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "itemID")]
    pub item_id: String,
    pub item_name: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
}

/// Maintenance entry as returned by create/update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaintenanceEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
}

/// One step of an item's ancestry (location or parent item).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemPath {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Paginated item list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginatedItems {
    pub items: Vec<ItemSummary>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
}

/// Result of a bulk maintenance action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionAmount {
    pub completed: i64,
}

/// Build metadata reported by the status endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Build {
    pub build_time: String,
    pub commit: String,
    pub version: String,
}

/// Latest released version reported by the status endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Latest {
    pub date: String,
    pub version: String,
}

/// Status summary of a Homebox instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiSummary {
    pub allow_registration: bool,
    pub build: Build,
    pub demo: bool,
    pub health: bool,
    pub label_printing: bool,
    pub latest: Latest,
    pub message: String,
    pub title: String,
    pub versions: Vec<String>,
}

/// Currency supported by the instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub local: String,
    pub name: String,
    pub symbol: String,
}

/// The group (household) the authenticated user belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Aggregate statistics for the group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupStatistics {
    pub total_item_price: f64,
    pub total_items: i64,
    pub total_labels: i64,
    pub total_locations: i64,
    pub total_users: i64,
    pub total_with_warranty: i64,
}

/// Total value grouped by a label or location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TotalsByOrganizer {
    pub id: String,
    pub name: String,
    pub total: f64,
}

/// One point of the purchase-price-over-time series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueOverTimeEntry {
    pub date: String,
    pub name: String,
    pub value: f64,
}

/// Purchase price development over a date range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueOverTime {
    pub end: String,
    pub entries: Vec<ValueOverTimeEntry>,
    pub start: String,
    pub value_at_end: f64,
    pub value_at_start: f64,
}

/// Configured notifier (webhook-style notification target).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotifierOut {
    pub id: String,
    pub name: String,
    pub url: String,
    pub is_active: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "groupId")]
    pub group_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Item template suggested by a barcode lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarcodeProductItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "labelIds")]
    pub label_ids: Vec<String>,
    #[serde(rename = "locationId", skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub quantity: i64,
}

/// Product information matched from a barcode search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarcodeProduct {
    pub barcode: String,
    pub image_base64: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub item: BarcodeProductItem,
    pub manufacturer: String,
    pub model_number: String,
    pub notes: String,
    #[serde(rename = "search_engine_name")]
    pub search_engine_name: String,
}

/// Authenticated user profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserOut {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_superuser: bool,
    pub is_owner: bool,
    #[serde(rename = "groupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(rename = "groupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_item_body_decodes() {
        let item: ItemOut = serde_json::from_str(r#"{"id":"123","name":"Drill"}"#).unwrap();
        assert_eq!(item.id, "123");
        assert_eq!(item.name, "Drill");
        assert!(item.attachments.is_empty());
        assert!(item.location.is_none());
    }

    #[test]
    fn test_item_summary_decodes_camel_case() {
        let json = r#"{
            "id": "a1",
            "name": "Drill",
            "assetId": "000-001",
            "purchasePrice": 99.5,
            "quantity": 2,
            "labels": [{"id": "l1", "name": "tools"}],
            "location": {"id": "loc1", "name": "Garage"},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#;
        let item: ItemSummary = serde_json::from_str(json).unwrap();
        assert_eq!(item.asset_id, "000-001");
        assert_eq!(item.purchase_price, 99.5);
        assert_eq!(item.labels[0].name, "tools");
        assert_eq!(item.location.unwrap().name, "Garage");
    }

    #[test]
    fn test_maintenance_entry_item_id_casing() {
        let json = r#"{"id":"m1","itemID":"i1","itemName":"Drill","name":"oiling"}"#;
        let entry: MaintenanceEntryWithDetails = serde_json::from_str(json).unwrap();
        assert_eq!(entry.item_id, "i1");
        assert_eq!(entry.item_name, "Drill");
    }

    #[test]
    fn test_attachment_type_field_round_trip() {
        let json = r#"{"id":"a1","type":"photo","title":"front","primary":true}"#;
        let attachment: ItemAttachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.kind, "photo");
        let back = serde_json::to_value(&attachment).unwrap();
        assert_eq!(back["type"], "photo");
    }
}
