//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Registration happens exactly once at startup and the router is immutable
//! afterwards. Every route shares the one `HomeboxClient`, so concurrent
//! invocations reuse its connection pool without sharing any per-call state.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::homebox::HomeboxClient;

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

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<HomeboxClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        // items
        .with_route(GetItemsTool::create_route(client.clone()))
        .with_route(CreateItemTool::create_route(client.clone()))
        .with_route(GetItemTool::create_route(client.clone()))
        .with_route(UpdateItemTool::create_route(client.clone()))
        .with_route(DeleteItemTool::create_route(client.clone()))
        .with_route(DuplicateItemTool::create_route(client.clone()))
        .with_route(GetItemPathTool::create_route(client.clone()))
        .with_route(GetItemByAssetIdTool::create_route(client.clone()))
        .with_route(ExportItemsTool::create_route(client.clone()))
        .with_route(ImportItemsTool::create_route(client.clone()))
        .with_route(GetItemFieldsTool::create_route(client.clone()))
        .with_route(GetItemFieldValuesTool::create_route(client.clone()))
        // locations
        .with_route(GetLocationsTool::create_route(client.clone()))
        .with_route(CreateLocationTool::create_route(client.clone()))
        .with_route(GetLocationTool::create_route(client.clone()))
        .with_route(UpdateLocationTool::create_route(client.clone()))
        .with_route(DeleteLocationTool::create_route(client.clone()))
        // labels
        .with_route(GetLabelsTool::create_route(client.clone()))
        .with_route(CreateLabelTool::create_route(client.clone()))
        .with_route(GetLabelTool::create_route(client.clone()))
        .with_route(UpdateLabelTool::create_route(client.clone()))
        .with_route(DeleteLabelTool::create_route(client.clone()))
        // maintenance
        .with_route(GetMaintenanceLogTool::create_route(client.clone()))
        .with_route(CreateMaintenanceEntryTool::create_route(client.clone()))
        .with_route(UpdateMaintenanceEntryTool::create_route(client.clone()))
        .with_route(DeleteMaintenanceEntryTool::create_route(client.clone()))
        // attachments
        .with_route(CreateItemAttachmentTool::create_route(client.clone()))
        .with_route(GetItemAttachmentTool::create_route(client.clone()))
        .with_route(UpdateItemAttachmentTool::create_route(client.clone()))
        .with_route(DeleteItemAttachmentTool::create_route(client.clone()))
        // label maker
        .with_route(GetAssetLabelTool::create_route(client.clone()))
        .with_route(GetItemLabelTool::create_route(client.clone()))
        .with_route(GetLocationLabelTool::create_route(client.clone()))
        .with_route(CreateQrCodeTool::create_route(client.clone()))
        // users
        .with_route(GetCurrentUserTool::create_route(client.clone()))
        .with_route(UpdateCurrentUserTool::create_route(client.clone()))
        .with_route(DeleteCurrentUserTool::create_route(client.clone()))
        .with_route(ChangePasswordTool::create_route(client.clone()))
        .with_route(RegisterUserTool::create_route(client.clone()))
        // group
        .with_route(GetGroupTool::create_route(client.clone()))
        .with_route(UpdateGroupTool::create_route(client.clone()))
        .with_route(GetGroupStatisticsTool::create_route(client.clone()))
        .with_route(GetLabelStatisticsTool::create_route(client.clone()))
        .with_route(GetLocationStatisticsTool::create_route(client.clone()))
        .with_route(GetPurchasePriceStatisticsTool::create_route(client.clone()))
        // notifiers
        .with_route(GetNotifiersTool::create_route(client.clone()))
        .with_route(CreateNotifierTool::create_route(client.clone()))
        .with_route(UpdateNotifierTool::create_route(client.clone()))
        .with_route(DeleteNotifierTool::create_route(client.clone()))
        .with_route(TestNotifierTool::create_route(client.clone()))
        // actions
        .with_route(CreateMissingThumbnailsTool::create_route(client.clone()))
        .with_route(EnsureAssetIdsTool::create_route(client.clone()))
        .with_route(EnsureImportRefsTool::create_route(client.clone()))
        .with_route(SetPrimaryPhotosTool::create_route(client.clone()))
        .with_route(ZeroItemTimeFieldsTool::create_route(client.clone()))
        // system
        .with_route(GetStatusTool::create_route(client.clone()))
        .with_route(GetCurrenciesTool::create_route(client.clone()))
        .with_route(SearchFromBarcodeTool::create_route(client.clone()))
        .with_route(ExportBillOfMaterialsTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::HomeboxConfig;

    struct TestServer {}

    fn test_client() -> Arc<HomeboxClient> {
        Arc::new(HomeboxClient::new(HomeboxConfig::default()).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 59);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_item"));
        assert!(names.contains(&"create_item"));
        assert!(names.contains(&"import_items"));
        assert!(names.contains(&"create_item_attachment"));
        assert!(names.contains(&"get_asset_label"));
        assert!(names.contains(&"change_password"));
        assert!(names.contains(&"get_purchase_price_statistics"));
        assert!(names.contains(&"zero_item_time_fields"));
        assert!(names.contains(&"export_bill_of_materials"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name), "missing from router: {name}");
        }
    }

    #[test]
    fn test_tool_names_are_unique() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        let mut names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
