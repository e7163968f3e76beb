//! Group tools: the household the user belongs to, and its statistics.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::models::{Group, GroupStatistics, TotalsByOrganizer, ValueOverTime};
use crate::domains::homebox::{ClientError, HomeboxClient, encode_query};

use super::common::{self, EmptyParams};

/// Parameters for updating the group.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateGroupParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Currency code (e.g. usd, eur)")]
    pub currency: Option<String>,
}

/// Parameters for the purchase price statistics range.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PurchasePriceStatisticsParams {
    #[serde(default)]
    #[schemars(description = "Range start date (YYYY-MM-DD)")]
    pub start: Option<String>,
    #[serde(default)]
    #[schemars(description = "Range end date (YYYY-MM-DD)")]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsByOrganizerOutput {
    pub totals: Vec<TotalsByOrganizer>,
}

pub struct GetGroupTool;

impl GetGroupTool {
    pub const NAME: &'static str = "get_group";
    pub const DESCRIPTION: &'static str = "Fetch the current group (household) and its currency.";

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
    ) -> Result<Group, ClientError> {
        client.get_json("groups").await
    }
}

pub struct UpdateGroupTool;

impl UpdateGroupTool {
    pub const NAME: &'static str = "update_group";
    pub const DESCRIPTION: &'static str = "Rename the group or change its currency.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<UpdateGroupParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: UpdateGroupParams,
    ) -> Result<Group, ClientError> {
        client.put_json("groups", &params).await
    }
}

pub struct GetGroupStatisticsTool;

impl GetGroupStatisticsTool {
    pub const NAME: &'static str = "get_group_statistics";
    pub const DESCRIPTION: &'static str =
        "Get aggregate statistics: total items, labels, locations, users, and item value.";

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
    ) -> Result<GroupStatistics, ClientError> {
        client.get_json("groups/statistics").await
    }
}

pub struct GetLabelStatisticsTool;

impl GetLabelStatisticsTool {
    pub const NAME: &'static str = "get_label_statistics";
    pub const DESCRIPTION: &'static str = "Get the total item value grouped by label.";

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
    ) -> Result<TotalsByOrganizerOutput, ClientError> {
        let totals = client.get_json("groups/statistics/labels").await?;
        Ok(TotalsByOrganizerOutput { totals })
    }
}

pub struct GetLocationStatisticsTool;

impl GetLocationStatisticsTool {
    pub const NAME: &'static str = "get_location_statistics";
    pub const DESCRIPTION: &'static str = "Get the total item value grouped by location.";

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
    ) -> Result<TotalsByOrganizerOutput, ClientError> {
        let totals = client.get_json("groups/statistics/locations").await?;
        Ok(TotalsByOrganizerOutput { totals })
    }
}

pub struct GetPurchasePriceStatisticsTool;

impl GetPurchasePriceStatisticsTool {
    pub const NAME: &'static str = "get_purchase_price_statistics";
    pub const DESCRIPTION: &'static str =
        "Get the development of total purchase price over time, optionally within a date range.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<PurchasePriceStatisticsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: PurchasePriceStatisticsParams,
    ) -> Result<ValueOverTime, ClientError> {
        let mut pairs = Vec::new();
        if let Some(start) = params.start.as_deref() {
            pairs.push(("start", start));
        }
        if let Some(end) = params.end.as_deref() {
            pairs.push(("end", end));
        }
        let path = if pairs.is_empty() {
            "groups/statistics/purchase-price".to_string()
        } else {
            format!(
                "groups/statistics/purchase-price?{}",
                encode_query(&pairs)?
            )
        };
        client.get_json(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_price_params_default_to_open_range() {
        let params: PurchasePriceStatisticsParams = serde_json::from_str("{}").unwrap();
        assert!(params.start.is_none());
        assert!(params.end.is_none());
    }

    #[test]
    fn test_update_group_omits_unset_fields() {
        let params: UpdateGroupParams = serde_json::from_str(r#"{"currency": "eur"}"#).unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({"currency": "eur"}));
    }
}
