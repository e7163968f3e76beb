//! Location tools: the storage places items live in.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::models::{LocationOut, LocationOutCount};
use crate::domains::homebox::{ClientError, HomeboxClient};

use super::common::{self, EmptyParams, NoContent};

/// Parameters identifying a single location.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LocationIdParams {
    #[schemars(description = "ID of the location")]
    pub id: String,
}

/// Parameters for creating a location.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationParams {
    #[schemars(description = "Name of the new location")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "ID of the parent location, for nested storage")]
    pub parent_id: Option<String>,
}

/// Parameters for updating a location.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationParams {
    #[schemars(description = "ID of the location to update")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetLocationsOutput {
    pub locations: Vec<LocationOutCount>,
}

pub struct GetLocationsTool;

impl GetLocationsTool {
    pub const NAME: &'static str = "get_locations";
    pub const DESCRIPTION: &'static str =
        "List all storage locations with the number of items in each.";

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
    ) -> Result<GetLocationsOutput, ClientError> {
        let locations = client.get_json("locations").await?;
        Ok(GetLocationsOutput { locations })
    }
}

pub struct CreateLocationTool;

impl CreateLocationTool {
    pub const NAME: &'static str = "create_location";
    pub const DESCRIPTION: &'static str =
        "Create a new storage location, optionally nested under a parent location.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<CreateLocationParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: CreateLocationParams,
    ) -> Result<LocationOut, ClientError> {
        client.post_json("locations", &params).await
    }
}

pub struct GetLocationTool;

impl GetLocationTool {
    pub const NAME: &'static str = "get_location";
    pub const DESCRIPTION: &'static str =
        "Fetch a single location by ID, including its parent and child locations.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<LocationIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: LocationIdParams,
    ) -> Result<LocationOut, ClientError> {
        client.get_json(&format!("locations/{}", params.id)).await
    }
}

pub struct UpdateLocationTool;

impl UpdateLocationTool {
    pub const NAME: &'static str = "update_location";
    pub const DESCRIPTION: &'static str = "Rename or re-parent a storage location.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<UpdateLocationParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: UpdateLocationParams,
    ) -> Result<LocationOut, ClientError> {
        client
            .put_json(&format!("locations/{}", params.id), &params)
            .await
    }
}

pub struct DeleteLocationTool;

impl DeleteLocationTool {
    pub const NAME: &'static str = "delete_location";
    pub const DESCRIPTION: &'static str = "Delete a storage location by ID.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<LocationIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: LocationIdParams,
    ) -> Result<NoContent, ClientError> {
        client.delete(&format!("locations/{}", params.id)).await?;
        Ok(NoContent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_location_params_minimal() {
        let params: CreateLocationParams = serde_json::from_str(r#"{"name": "Garage"}"#).unwrap();
        assert_eq!(params.name, "Garage");
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Garage"}));
    }

    #[test]
    fn test_update_location_params_parent_id_casing() {
        let params: UpdateLocationParams =
            serde_json::from_str(r#"{"id": "1", "name": "Attic", "parentId": "2"}"#).unwrap();
        assert_eq!(params.parent_id.as_deref(), Some("2"));
    }
}
