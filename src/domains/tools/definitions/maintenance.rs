//! Maintenance tools: the per-item service log.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::models::{MaintenanceEntry, MaintenanceEntryWithDetails};
use crate::domains::homebox::{ClientError, HomeboxClient};

use super::common::{self, NoContent};

/// Parameters for reading an item's maintenance log.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetMaintenanceLogParams {
    #[serde(rename = "item_id")]
    #[schemars(description = "ID of the item whose log to read")]
    pub item_id: String,
}

/// Parameters for creating a maintenance entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceEntryParams {
    #[serde(rename = "item_id", skip_serializing)]
    #[schemars(description = "ID of the item the entry belongs to")]
    pub item_id: String,
    #[schemars(description = "Short name of the work done or planned")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Date the work was completed (ISO 8601)")]
    pub completed_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Date the work is scheduled for (ISO 8601)")]
    pub scheduled_date: Option<String>,
}

/// Parameters for updating a maintenance entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceEntryParams {
    #[schemars(description = "ID of the maintenance entry to update")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
}

/// Parameters identifying a maintenance entry.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MaintenanceEntryIdParams {
    #[schemars(description = "ID of the maintenance entry")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetMaintenanceLogOutput {
    pub entries: Vec<MaintenanceEntryWithDetails>,
}

pub struct GetMaintenanceLogTool;

impl GetMaintenanceLogTool {
    pub const NAME: &'static str = "get_maintenance_log";
    pub const DESCRIPTION: &'static str =
        "Read the maintenance log of an item: completed and scheduled service entries with costs.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<GetMaintenanceLogParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: GetMaintenanceLogParams,
    ) -> Result<GetMaintenanceLogOutput, ClientError> {
        let entries = client
            .get_json(&format!("items/{}/maintenance", params.item_id))
            .await?;
        Ok(GetMaintenanceLogOutput { entries })
    }
}

pub struct CreateMaintenanceEntryTool;

impl CreateMaintenanceEntryTool {
    pub const NAME: &'static str = "create_maintenance_entry";
    pub const DESCRIPTION: &'static str =
        "Add a maintenance entry to an item's log, either completed or scheduled.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<CreateMaintenanceEntryParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: CreateMaintenanceEntryParams,
    ) -> Result<MaintenanceEntry, ClientError> {
        client
            .post_json(&format!("items/{}/maintenance", params.item_id), &params)
            .await
    }
}

pub struct UpdateMaintenanceEntryTool;

impl UpdateMaintenanceEntryTool {
    pub const NAME: &'static str = "update_maintenance_entry";
    pub const DESCRIPTION: &'static str = "Update a maintenance entry by ID.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<UpdateMaintenanceEntryParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: UpdateMaintenanceEntryParams,
    ) -> Result<MaintenanceEntry, ClientError> {
        client
            .put_json(&format!("maintenance/{}", params.id), &params)
            .await
    }
}

pub struct DeleteMaintenanceEntryTool;

impl DeleteMaintenanceEntryTool {
    pub const NAME: &'static str = "delete_maintenance_entry";
    pub const DESCRIPTION: &'static str = "Delete a maintenance entry by ID.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<MaintenanceEntryIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: MaintenanceEntryIdParams,
    ) -> Result<NoContent, ClientError> {
        client.delete(&format!("maintenance/{}", params.id)).await?;
        Ok(NoContent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_entry_item_id_stays_out_of_body() {
        let params: CreateMaintenanceEntryParams =
            serde_json::from_str(r#"{"item_id": "i1", "name": "oiling", "cost": "12.50"}"#)
                .unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert!(body.get("item_id").is_none());
        assert_eq!(body["name"], "oiling");
        assert_eq!(body["cost"], "12.50");
    }

    #[test]
    fn test_update_entry_dates_camel_case() {
        let params: UpdateMaintenanceEntryParams =
            serde_json::from_str(r#"{"id": "m1", "completedDate": "2024-05-01"}"#).unwrap();
        assert_eq!(params.completed_date.as_deref(), Some("2024-05-01"));
    }
}
