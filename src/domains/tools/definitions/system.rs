//! System tools: instance status, currencies, barcode lookup, and reporting.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::models::{ApiSummary, BarcodeProduct, Currency};
use crate::domains::homebox::{ClientError, HomeboxClient, encode_query};

use super::common::{self, EmptyParams};

/// Parameters for a barcode search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchFromBarcodeParams {
    #[schemars(description = "The barcode digits (EAN/UPC)")]
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetCurrenciesOutput {
    pub currencies: Vec<Currency>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchFromBarcodeOutput {
    pub products: Vec<BarcodeProduct>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportBillOfMaterialsOutput {
    pub csv_data: String,
}

pub struct GetStatusTool;

impl GetStatusTool {
    pub const NAME: &'static str = "get_status";
    pub const DESCRIPTION: &'static str =
        "Get the status summary of the Homebox instance: version, health, and enabled features.";

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
    ) -> Result<ApiSummary, ClientError> {
        client.get_json("status").await
    }
}

pub struct GetCurrenciesTool;

impl GetCurrenciesTool {
    pub const NAME: &'static str = "get_currencies";
    pub const DESCRIPTION: &'static str = "List the currencies supported by the instance.";

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
    ) -> Result<GetCurrenciesOutput, ClientError> {
        let currencies = client.get_json("currency").await?;
        Ok(GetCurrenciesOutput { currencies })
    }
}

pub struct SearchFromBarcodeTool;

impl SearchFromBarcodeTool {
    pub const NAME: &'static str = "search_from_barcode";
    pub const DESCRIPTION: &'static str =
        "Look up product information for a barcode and get a ready-to-create item suggestion.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<SearchFromBarcodeParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: SearchFromBarcodeParams,
    ) -> Result<SearchFromBarcodeOutput, ClientError> {
        let query = encode_query(&[("data", params.data.as_str())])?;
        let products = client
            .get_json(&format!("products/search-from-barcode?{}", query))
            .await?;
        Ok(SearchFromBarcodeOutput { products })
    }
}

pub struct ExportBillOfMaterialsTool;

impl ExportBillOfMaterialsTool {
    pub const NAME: &'static str = "export_bill_of_materials";
    pub const DESCRIPTION: &'static str =
        "Export a bill of materials for the inventory as CSV data.";

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
    ) -> Result<ExportBillOfMaterialsOutput, ClientError> {
        let csv_data = client.get_text("reporting/bill-of-materials").await?;
        Ok(ExportBillOfMaterialsOutput { csv_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_params_required() {
        assert!(serde_json::from_str::<SearchFromBarcodeParams>("{}").is_err());
        let params: SearchFromBarcodeParams =
            serde_json::from_str(r#"{"data": "4006381333931"}"#).unwrap();
        assert_eq!(params.data, "4006381333931");
    }
}
