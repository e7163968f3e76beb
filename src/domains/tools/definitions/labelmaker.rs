//! Label maker tools: printable label and QR code images.
//!
//! These endpoints return raw image bytes. The bytes are never interpreted,
//! only re-encoded as base64 so they fit the JSON tool result.

use std::sync::Arc;

use rmcp::{handler::server::tool::ToolRoute, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::homebox::{ClientError, HomeboxClient, encode_query};

use super::common;

/// Parameters identifying the entity to render a label for.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LabelTargetParams {
    #[schemars(description = "ID of the asset, item, or location")]
    pub id: String,
}

/// Parameters for generating a QR code.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateQrCodeParams {
    #[schemars(description = "Text to encode into the QR code")]
    pub data: String,
}

/// A label or QR code image, base64 encoded.
#[derive(Debug, Clone, Serialize)]
pub struct LabelImageOutput {
    pub image: String,
}

async fn fetch_image(
    client: &HomeboxClient,
    path: &str,
) -> Result<LabelImageOutput, ClientError> {
    let image = client.get_base64(path).await?;
    Ok(LabelImageOutput { image })
}

pub struct GetAssetLabelTool;

impl GetAssetLabelTool {
    pub const NAME: &'static str = "get_asset_label";
    pub const DESCRIPTION: &'static str =
        "Render the printable label image for an asset ID. Returns the image as base64.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<LabelTargetParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: LabelTargetParams,
    ) -> Result<LabelImageOutput, ClientError> {
        fetch_image(&client, &format!("labelmaker/assets/{}", params.id)).await
    }
}

pub struct GetItemLabelTool;

impl GetItemLabelTool {
    pub const NAME: &'static str = "get_item_label";
    pub const DESCRIPTION: &'static str =
        "Render the printable label image for an item. Returns the image as base64.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<LabelTargetParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: LabelTargetParams,
    ) -> Result<LabelImageOutput, ClientError> {
        fetch_image(&client, &format!("labelmaker/item/{}", params.id)).await
    }
}

pub struct GetLocationLabelTool;

impl GetLocationLabelTool {
    pub const NAME: &'static str = "get_location_label";
    pub const DESCRIPTION: &'static str =
        "Render the printable label image for a location. Returns the image as base64.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<LabelTargetParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: LabelTargetParams,
    ) -> Result<LabelImageOutput, ClientError> {
        fetch_image(&client, &format!("labelmaker/location/{}", params.id)).await
    }
}

pub struct CreateQrCodeTool;

impl CreateQrCodeTool {
    pub const NAME: &'static str = "create_qr_code";
    pub const DESCRIPTION: &'static str =
        "Generate a QR code image for arbitrary text. Returns the image as base64.";

    pub fn to_tool() -> Tool {
        common::tool_meta::<CreateQrCodeParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<HomeboxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        common::route(Self::to_tool(), client, Self::run)
    }

    pub async fn run(
        client: Arc<HomeboxClient>,
        params: CreateQrCodeParams,
    ) -> Result<LabelImageOutput, ClientError> {
        let query = encode_query(&[("data", params.data.as_str())])?;
        fetch_image(&client, &format!("qrcode?{}", query)).await
    }
}
