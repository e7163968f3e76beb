//! Bulk maintenance actions.
//!
//! Each action is a parameterless POST that sweeps the whole inventory on
//! the server side and reports how many records it touched.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};

use crate::domains::homebox::models::ActionAmount;
use crate::domains::homebox::{ClientError, HomeboxClient};

use super::common::{self, EmptyParams};

/// Expand one action tool struct; all five share the exact shape.
macro_rules! action_tool {
    ($tool:ident, $name:literal, $path:literal, $description:literal) => {
        pub struct $tool;

        impl $tool {
            pub const NAME: &'static str = $name;
            pub const DESCRIPTION: &'static str = $description;

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
            ) -> Result<ActionAmount, ClientError> {
                client.post_action(concat!("actions/", $path)).await
            }
        }
    };
}

action_tool!(
    CreateMissingThumbnailsTool,
    "create_missing_thumbnails",
    "create-missing-thumbnails",
    "Generate thumbnails for item photos that are missing one. Returns the number of thumbnails created."
);

action_tool!(
    EnsureAssetIdsTool,
    "ensure_asset_ids",
    "ensure-asset-ids",
    "Assign asset IDs to all items that do not have one. Returns the number of items updated."
);

action_tool!(
    EnsureImportRefsTool,
    "ensure_import_refs",
    "ensure-import-refs",
    "Assign import references to all items that do not have one. Returns the number of items updated."
);

action_tool!(
    SetPrimaryPhotosTool,
    "set_primary_photos",
    "set-primary-photos",
    "Set a primary photo on every item with photo attachments but no primary. Returns the number of items updated."
);

action_tool!(
    ZeroItemTimeFieldsTool,
    "zero_item_time_fields",
    "zero-item-time-fields",
    "Truncate item date-time fields to whole dates. Returns the number of items updated."
);
