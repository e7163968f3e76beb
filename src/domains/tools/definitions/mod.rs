//! Tool definitions module.
//!
//! Tools are grouped by the Homebox resource they operate on, one file per
//! group. Shared routing plumbing lives in `common.rs`.

pub mod actions;
pub mod attachments;
pub mod common;
pub mod group;
pub mod items;
pub mod labelmaker;
pub mod labels;
pub mod locations;
pub mod maintenance;
pub mod notifiers;
pub mod system;
pub mod users;

pub use actions::{
    CreateMissingThumbnailsTool, EnsureAssetIdsTool, EnsureImportRefsTool, SetPrimaryPhotosTool,
    ZeroItemTimeFieldsTool,
};
pub use attachments::{
    CreateItemAttachmentTool, DeleteItemAttachmentTool, GetItemAttachmentTool,
    UpdateItemAttachmentTool,
};
pub use group::{
    GetGroupStatisticsTool, GetGroupTool, GetLabelStatisticsTool, GetLocationStatisticsTool,
    GetPurchasePriceStatisticsTool, UpdateGroupTool,
};
pub use items::{
    CreateItemTool, DeleteItemTool, DuplicateItemTool, ExportItemsTool, GetItemByAssetIdTool,
    GetItemFieldValuesTool, GetItemFieldsTool, GetItemPathTool, GetItemTool, GetItemsTool,
    ImportItemsTool, UpdateItemTool,
};
pub use labelmaker::{CreateQrCodeTool, GetAssetLabelTool, GetItemLabelTool, GetLocationLabelTool};
pub use labels::{CreateLabelTool, DeleteLabelTool, GetLabelTool, GetLabelsTool, UpdateLabelTool};
pub use locations::{
    CreateLocationTool, DeleteLocationTool, GetLocationTool, GetLocationsTool, UpdateLocationTool,
};
pub use maintenance::{
    CreateMaintenanceEntryTool, DeleteMaintenanceEntryTool, GetMaintenanceLogTool,
    UpdateMaintenanceEntryTool,
};
pub use notifiers::{
    CreateNotifierTool, DeleteNotifierTool, GetNotifiersTool, TestNotifierTool, UpdateNotifierTool,
};
pub use system::{
    ExportBillOfMaterialsTool, GetCurrenciesTool, GetStatusTool, SearchFromBarcodeTool,
};
pub use users::{
    ChangePasswordTool, DeleteCurrentUserTool, GetCurrentUserTool, RegisterUserTool,
    UpdateCurrentUserTool,
};
