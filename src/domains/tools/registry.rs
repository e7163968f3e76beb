//! Tool Registry - central listing of all available tools.
//!
//! The registry is the single source of truth for tool metadata. The router
//! builds its routes from the same definitions, and the tests cross-check the
//! two so a tool cannot be registered in one place and forgotten in the other.

use rmcp::model::Tool;

use super::definitions::{
    ChangePasswordTool, CreateItemAttachmentTool, CreateItemTool, CreateLabelTool,
    CreateLocationTool, CreateMaintenanceEntryTool, CreateMissingThumbnailsTool,
    CreateNotifierTool, CreateQrCodeTool, DeleteCurrentUserTool, DeleteItemAttachmentTool,
    DeleteItemTool, DeleteLabelTool, DeleteLocationTool, DeleteMaintenanceEntryTool,
    DeleteNotifierTool, DuplicateItemTool, EnsureAssetIdsTool, EnsureImportRefsTool,
    ExportBillOfMaterialsTool, ExportItemsTool, GetAssetLabelTool, GetCurrenciesTool,
    GetCurrentUserTool, GetGroupStatisticsTool, GetGroupTool, GetItemAttachmentTool,
    GetItemByAssetIdTool, GetItemFieldValuesTool, GetItemFieldsTool, GetItemLabelTool,
    GetItemPathTool, GetItemTool, GetItemsTool, GetLabelStatisticsTool, GetLabelTool,
    GetLabelsTool, GetLocationLabelTool, GetLocationStatisticsTool, GetLocationTool,
    GetLocationsTool, GetMaintenanceLogTool, GetNotifiersTool, GetPurchasePriceStatisticsTool,
    GetStatusTool, ImportItemsTool, RegisterUserTool, SearchFromBarcodeTool, SetPrimaryPhotosTool,
    TestNotifierTool, UpdateCurrentUserTool, UpdateGroupTool, UpdateItemAttachmentTool,
    UpdateItemTool, UpdateLabelTool, UpdateLocationTool, UpdateMaintenanceEntryTool,
    UpdateNotifierTool, ZeroItemTimeFieldsTool,
};

/// Tool registry - lists every available tool.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetItemsTool::NAME,
            CreateItemTool::NAME,
            GetItemTool::NAME,
            UpdateItemTool::NAME,
            DeleteItemTool::NAME,
            DuplicateItemTool::NAME,
            GetItemPathTool::NAME,
            GetItemByAssetIdTool::NAME,
            ExportItemsTool::NAME,
            ImportItemsTool::NAME,
            GetItemFieldsTool::NAME,
            GetItemFieldValuesTool::NAME,
            GetLocationsTool::NAME,
            CreateLocationTool::NAME,
            GetLocationTool::NAME,
            UpdateLocationTool::NAME,
            DeleteLocationTool::NAME,
            GetLabelsTool::NAME,
            CreateLabelTool::NAME,
            GetLabelTool::NAME,
            UpdateLabelTool::NAME,
            DeleteLabelTool::NAME,
            GetMaintenanceLogTool::NAME,
            CreateMaintenanceEntryTool::NAME,
            UpdateMaintenanceEntryTool::NAME,
            DeleteMaintenanceEntryTool::NAME,
            CreateItemAttachmentTool::NAME,
            GetItemAttachmentTool::NAME,
            UpdateItemAttachmentTool::NAME,
            DeleteItemAttachmentTool::NAME,
            GetAssetLabelTool::NAME,
            GetItemLabelTool::NAME,
            GetLocationLabelTool::NAME,
            CreateQrCodeTool::NAME,
            GetCurrentUserTool::NAME,
            UpdateCurrentUserTool::NAME,
            DeleteCurrentUserTool::NAME,
            ChangePasswordTool::NAME,
            RegisterUserTool::NAME,
            GetGroupTool::NAME,
            UpdateGroupTool::NAME,
            GetGroupStatisticsTool::NAME,
            GetLabelStatisticsTool::NAME,
            GetLocationStatisticsTool::NAME,
            GetPurchasePriceStatisticsTool::NAME,
            GetNotifiersTool::NAME,
            CreateNotifierTool::NAME,
            UpdateNotifierTool::NAME,
            DeleteNotifierTool::NAME,
            TestNotifierTool::NAME,
            CreateMissingThumbnailsTool::NAME,
            EnsureAssetIdsTool::NAME,
            EnsureImportRefsTool::NAME,
            SetPrimaryPhotosTool::NAME,
            ZeroItemTimeFieldsTool::NAME,
            GetStatusTool::NAME,
            GetCurrenciesTool::NAME,
            SearchFromBarcodeTool::NAME,
            ExportBillOfMaterialsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetItemsTool::to_tool(),
            CreateItemTool::to_tool(),
            GetItemTool::to_tool(),
            UpdateItemTool::to_tool(),
            DeleteItemTool::to_tool(),
            DuplicateItemTool::to_tool(),
            GetItemPathTool::to_tool(),
            GetItemByAssetIdTool::to_tool(),
            ExportItemsTool::to_tool(),
            ImportItemsTool::to_tool(),
            GetItemFieldsTool::to_tool(),
            GetItemFieldValuesTool::to_tool(),
            GetLocationsTool::to_tool(),
            CreateLocationTool::to_tool(),
            GetLocationTool::to_tool(),
            UpdateLocationTool::to_tool(),
            DeleteLocationTool::to_tool(),
            GetLabelsTool::to_tool(),
            CreateLabelTool::to_tool(),
            GetLabelTool::to_tool(),
            UpdateLabelTool::to_tool(),
            DeleteLabelTool::to_tool(),
            GetMaintenanceLogTool::to_tool(),
            CreateMaintenanceEntryTool::to_tool(),
            UpdateMaintenanceEntryTool::to_tool(),
            DeleteMaintenanceEntryTool::to_tool(),
            CreateItemAttachmentTool::to_tool(),
            GetItemAttachmentTool::to_tool(),
            UpdateItemAttachmentTool::to_tool(),
            DeleteItemAttachmentTool::to_tool(),
            GetAssetLabelTool::to_tool(),
            GetItemLabelTool::to_tool(),
            GetLocationLabelTool::to_tool(),
            CreateQrCodeTool::to_tool(),
            GetCurrentUserTool::to_tool(),
            UpdateCurrentUserTool::to_tool(),
            DeleteCurrentUserTool::to_tool(),
            ChangePasswordTool::to_tool(),
            RegisterUserTool::to_tool(),
            GetGroupTool::to_tool(),
            UpdateGroupTool::to_tool(),
            GetGroupStatisticsTool::to_tool(),
            GetLabelStatisticsTool::to_tool(),
            GetLocationStatisticsTool::to_tool(),
            GetPurchasePriceStatisticsTool::to_tool(),
            GetNotifiersTool::to_tool(),
            CreateNotifierTool::to_tool(),
            UpdateNotifierTool::to_tool(),
            DeleteNotifierTool::to_tool(),
            TestNotifierTool::to_tool(),
            CreateMissingThumbnailsTool::to_tool(),
            EnsureAssetIdsTool::to_tool(),
            EnsureImportRefsTool::to_tool(),
            SetPrimaryPhotosTool::to_tool(),
            ZeroItemTimeFieldsTool::to_tool(),
            GetStatusTool::to_tool(),
            GetCurrenciesTool::to_tool(),
            SearchFromBarcodeTool::to_tool(),
            ExportBillOfMaterialsTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 59);
        assert!(names.contains(&"get_items"));
        assert!(names.contains(&"create_item"));
        assert!(names.contains(&"duplicate_item"));
        assert!(names.contains(&"get_item_by_asset_id"));
        assert!(names.contains(&"get_maintenance_log"));
        assert!(names.contains(&"create_item_attachment"));
        assert!(names.contains(&"create_qr_code"));
        assert!(names.contains(&"register_user"));
        assert!(names.contains(&"get_group_statistics"));
        assert!(names.contains(&"test_notifier"));
        assert!(names.contains(&"ensure_asset_ids"));
        assert!(names.contains(&"search_from_barcode"));
    }

    #[test]
    fn test_registry_names_match_metadata() {
        let names = ToolRegistry::tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(names.len(), tools.len());
        for tool in tools {
            assert!(
                names.contains(&tool.name.as_ref()),
                "metadata without name entry: {}",
                tool.name
            );
        }
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "missing description: {}", tool.name);
        }
    }
}
