//! Shared plumbing for tool definitions.
//!
//! Every tool in this crate is the same four-step translation: decode typed
//! arguments, issue one request through the Homebox client, and hand back
//! either the JSON-serialized result or the client error as tool output.
//! `route` captures that shape once, so each definition contributes only its
//! name, description, params struct, and handler body.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::homebox::{ClientError, HomeboxClient};
use crate::domains::tools::error::ToolError;

/// Parameters for tools that take no input.
#[derive(Debug, Default, Clone, serde::Deserialize, JsonSchema)]
pub struct EmptyParams {}

/// Output for operations whose success response has no payload (204).
#[derive(Debug, Default, Clone, Serialize)]
pub struct NoContent {}

/// Build the metadata record registered for a tool.
pub(crate) fn tool_meta<P: JsonSchema + 'static>(
    name: &'static str,
    description: &'static str,
) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Wrap an async handler into a ToolRoute.
///
/// Argument decode failures are protocol-level invalid-params errors; client
/// errors are reported as error tool results so the caller sees the message
/// verbatim.
pub(crate) fn route<S, P, T, F, Fut>(
    tool: Tool,
    client: Arc<HomeboxClient>,
    handler: F,
) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    T: Serialize + Send + 'static,
    F: Fn(Arc<HomeboxClient>, P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        match serde_json::from_value::<P>(serde_json::Value::Object(args)) {
            Ok(params) => {
                let fut = handler(client.clone(), params);
                async move {
                    match fut.await {
                        Ok(output) => success_result(&output),
                        Err(e) => Ok(error_result(&ToolError::from(e))),
                    }
                }
                .boxed()
            }
            Err(e) => {
                let err = ToolError::invalid_arguments(e.to_string());
                let err = McpError::invalid_params(err.to_string(), None);
                async move { Err(err) }.boxed()
            }
        }
    })
}

/// Serialize a handler output into a success result.
fn success_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(output)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Report a failed tool call as an error tool result.
fn error_result(err: &ToolError) -> CallToolResult {
    warn!("{}", err);
    CallToolResult::error(vec![Content::text(err.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_empty_params_accepts_empty_object() {
        let params: EmptyParams = serde_json::from_str("{}").unwrap();
        let _ = params;
    }

    #[test]
    fn test_no_content_serializes_to_empty_object() {
        let json = serde_json::to_string(&NoContent::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_error_result_carries_message() {
        let err = ToolError::from(ClientError::UnexpectedStatus {
            status: 500,
            body: "boom".to_string(),
        });
        let result = error_result(&err);
        assert_eq!(result.is_error, Some(true));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("500"));
            assert!(text.text.contains("boom"));
        } else {
            panic!("expected text content");
        }
    }
}
