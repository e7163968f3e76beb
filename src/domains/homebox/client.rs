//! HTTP client for the Homebox API.
//!
//! Every tool call funnels through a single generic executor: resolve
//! credentials, build the request, send it, read the full body, check the
//! expected status, then decode according to the endpoint's decode mode.
//! The typed wrappers (`get_json`, `post_json`, `get_base64`, ...) are thin
//! specializations of that one path; individual tools differ only in verb,
//! path, expected status, and shape.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Method, StatusCode, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::core::config::HomeboxConfig;

use super::error::ClientError;

/// Outbound request payload. Exactly one variant per request by construction.
enum Payload {
    /// No body.
    Empty,
    /// JSON body, already serialized to a value.
    Json(serde_json::Value),
    /// Multipart form with one part named `file` plus optional text fields.
    File {
        filename: String,
        bytes: Vec<u8>,
        fields: Vec<(String, String)>,
    },
}

/// Client for a single Homebox instance.
///
/// Holds the connection configuration and a shared connection pool. The
/// client itself carries no per-call state, so it can be shared freely
/// across concurrent tool invocations behind an `Arc`.
pub struct HomeboxClient {
    http: reqwest::Client,
    config: HomeboxConfig,
}

impl HomeboxClient {
    /// Create a new client from connection configuration.
    ///
    /// Missing credentials are not an error here; they are reported per
    /// call so the server can start without a configured upstream.
    pub fn new(config: HomeboxConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::request(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Resolve the configured base URL and bearer token, failing closed
    /// before any network activity when either is absent or empty.
    fn credentials(&self) -> Result<(&str, &str), ClientError> {
        let base_url = self.config.base_url.as_deref().filter(|s| !s.is_empty());
        let token = self.config.token.as_deref().filter(|s| !s.is_empty());
        match (base_url, token) {
            (Some(base_url), Some(token)) => Ok((base_url, token)),
            (base_url, token) => {
                let mut missing = Vec::new();
                if base_url.is_none() {
                    missing.push("HOMEBOX_URL");
                }
                if token.is_none() {
                    missing.push("HOMEBOX_TOKEN");
                }
                Err(ClientError::MissingCredentials {
                    missing: missing.join(", "),
                })
            }
        }
    }

    /// Issue one request and return the raw body if the response status
    /// matches `expected`.
    ///
    /// The body is always read in full before the status is inspected, so
    /// error responses carry their body text for diagnostics.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
        expected: StatusCode,
    ) -> Result<Vec<u8>, ClientError> {
        let (base_url, token) = self.credentials()?;
        let url = join_url(base_url, path);

        debug!(%method, %url, "sending request to Homebox");

        let mut request = self.http.request(method, &url).bearer_auth(token);
        request = match payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(&body),
            Payload::File {
                filename,
                bytes,
                fields,
            } => {
                let part = multipart::Part::bytes(bytes).file_name(filename);
                let mut form = multipart::Form::new().part("file", part);
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                request.multipart(form)
            }
        };

        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                ClientError::request(e.to_string())
            } else {
                ClientError::transport(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;

        if status != expected {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(%url, status = status.as_u16(), "unexpected status from Homebox");
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body.to_vec())
    }

    /// GET a JSON resource, expecting 200.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let body = self
            .execute(Method::GET, path, Payload::Empty, StatusCode::OK)
            .await?;
        decode_json(&body)
    }

    /// GET a plain-text resource (e.g., a CSV export), expecting 200.
    pub async fn get_text(&self, path: &str) -> Result<String, ClientError> {
        let body = self
            .execute(Method::GET, path, Payload::Empty, StatusCode::OK)
            .await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// GET binary content (label images, QR codes), expecting 200. The raw
    /// bytes are re-encoded as base64 for the JSON-friendly tool result;
    /// the content is never interpreted.
    pub async fn get_base64(&self, path: &str) -> Result<String, ClientError> {
        let body = self
            .execute(Method::GET, path, Payload::Empty, StatusCode::OK)
            .await?;
        Ok(BASE64.encode(&body))
    }

    /// POST a JSON body to a creation endpoint, expecting 201.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let payload = json_payload(body)?;
        let body = self
            .execute(Method::POST, path, payload, StatusCode::CREATED)
            .await?;
        decode_json(&body)
    }

    /// PUT a JSON body to an update endpoint, expecting 200.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let payload = json_payload(body)?;
        let body = self
            .execute(Method::PUT, path, payload, StatusCode::OK)
            .await?;
        decode_json(&body)
    }

    /// POST with no body to an action endpoint, expecting 200 with a JSON
    /// result.
    pub async fn post_action<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let body = self
            .execute(Method::POST, path, Payload::Empty, StatusCode::OK)
            .await?;
        decode_json(&body)
    }

    /// POST with no body, expecting 204 and no payload.
    pub async fn post_no_content(&self, path: &str) -> Result<(), ClientError> {
        self.execute(Method::POST, path, Payload::Empty, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    /// DELETE a resource, expecting 204. The body, if any, is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.execute(Method::DELETE, path, Payload::Empty, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    /// Upload a file as a multipart form, expecting 201 with a JSON result.
    /// Extra text fields ride along in the same form.
    pub async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: impl Into<String>,
        bytes: Vec<u8>,
        fields: Vec<(String, String)>,
    ) -> Result<T, ClientError> {
        let payload = Payload::File {
            filename: filename.into(),
            bytes,
            fields,
        };
        let body = self
            .execute(Method::POST, path, payload, StatusCode::CREATED)
            .await?;
        decode_json(&body)
    }

    /// Upload a file as a multipart form, expecting 204 and no payload.
    pub async fn post_file_no_content(
        &self,
        path: &str,
        filename: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), ClientError> {
        let payload = Payload::File {
            filename: filename.into(),
            bytes,
            fields: Vec::new(),
        };
        self.execute(Method::POST, path, payload, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }
}

/// Join the configured base URL with an endpoint path under the versioned
/// API prefix. A trailing slash on the base URL is tolerated.
fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/api/v1/{}", base_url.trim_end_matches('/'), path)
}

fn json_payload<B: Serialize>(body: &B) -> Result<Payload, ClientError> {
    let value = serde_json::to_value(body).map_err(|e| ClientError::request(e.to_string()))?;
    Ok(Payload::Json(value))
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(|e| ClientError::decode(e.to_string()))
}

/// Encode raw bytes as standard base64 text.
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode base64 text supplied by the caller into raw bytes.
pub fn decode_base64(content: &str) -> Result<Vec<u8>, ClientError> {
    BASE64
        .decode(content)
        .map_err(|e| ClientError::decode(format!("invalid base64 content: {}", e)))
}

/// Encode query parameters into a query string.
pub fn encode_query<T: Serialize>(params: &T) -> Result<String, ClientError> {
    serde_urlencoded::to_string(params).map_err(|e| ClientError::request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured_client() -> HomeboxClient {
        HomeboxClient::new(HomeboxConfig::default()).unwrap()
    }

    #[test]
    fn test_missing_credentials_fails_before_any_request() {
        let client = unconfigured_client();
        let err = tokio_test::block_on(client.get_json::<serde_json::Value>("items"))
            .expect_err("expected missing credentials");
        match err {
            ClientError::MissingCredentials { missing } => {
                assert_eq!(missing, "HOMEBOX_URL, HOMEBOX_TOKEN");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_token_only() {
        let client = HomeboxClient::new(HomeboxConfig {
            base_url: Some("http://homebox.local".to_string()),
            ..HomeboxConfig::default()
        })
        .unwrap();
        let err = tokio_test::block_on(client.delete("items/1"))
            .expect_err("expected missing credentials");
        match err {
            ClientError::MissingCredentials { missing } => assert_eq!(missing, "HOMEBOX_TOKEN"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_values_are_treated_as_missing() {
        let client = HomeboxClient::new(HomeboxConfig {
            base_url: Some(String::new()),
            token: Some(String::new()),
            ..HomeboxConfig::default()
        })
        .unwrap();
        let err = tokio_test::block_on(client.get_text("items/export"))
            .expect_err("expected missing credentials");
        assert!(matches!(err, ClientError::MissingCredentials { .. }));
    }

    #[test]
    fn test_join_url_tolerates_trailing_slash() {
        assert_eq!(join_url("http://x", "items/123"), "http://x/api/v1/items/123");
        assert_eq!(join_url("http://x/", "items/123"), "http://x/api/v1/items/123");
    }

    #[test]
    fn test_base64_round_trip() {
        for bytes in [&b""[..], &b"abc"[..], &[0u8, 255, 1, 128, 64][..]] {
            let encoded = encode_base64(bytes);
            assert_eq!(decode_base64(&encoded).unwrap(), bytes);
        }
    }

    #[test]
    fn test_decode_base64_rejects_malformed_input() {
        let err = decode_base64("not!!valid@@base64").expect_err("expected decode failure");
        assert!(matches!(err, ClientError::DecodeFailed(_)));
    }

    #[test]
    fn test_encode_query_escapes_values() {
        let query = encode_query(&[("data", "a b&c")]).unwrap();
        assert_eq!(query, "data=a+b%26c");
    }
}
