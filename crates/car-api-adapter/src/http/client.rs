/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client that dispatches ApiRequest values
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::{ApiRequest, CarApiError, RequestBody, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Default timeout applied to requests without their own override
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login token sent as `Authorization: Bearer <token>`
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the car analytics API
#[derive(Clone)]
pub struct CarApiClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl fmt::Debug for CarApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl CarApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CarApiError::Config(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            credentials: None,
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Builder-style variant of [`set_credentials`](Self::set_credentials)
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Dispatch one request and parse the JSON body.
    ///
    /// An empty 2xx body resolves to `Value::Null`.
    pub async fn send(&self, request: ApiRequest) -> Result<Value> {
        let response = self.execute(request).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Dispatch one request and return the body bytes untouched
    pub async fn send_bytes(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let response = self.execute(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn execute(&self, request: ApiRequest) -> Result<Response> {
        let builder = self.build(request)?;
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().clone();

        if !status.is_success() {
            let body = response.text().await?;
            warn!(status = status.as_u16(), url = %url, "request rejected");
            return Err(CarApiError::status_error(status, body));
        }

        debug!(status = status.as_u16(), url = %url, "request completed");
        Ok(response)
    }

    fn build(&self, request: ApiRequest) -> Result<RequestBuilder> {
        let url = request.url(&self.base_url)?;
        debug!(method = %request.method, url = %url, timeout = ?request.timeout, "dispatching request");

        let mut builder = self.http_client.request(request.method, url);
        if let Some(credentials) = &self.credentials {
            builder = builder.bearer_auth(&credentials.token);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Form(form) => builder.form(&form),
            RequestBody::Multipart(upload) => {
                let part = Part::bytes(upload.bytes).file_name(upload.file_name);
                builder.multipart(Form::new().part(upload.field, part))
            }
        };
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_debug_redacts_token() {
        let credentials = Credentials {
            token: "eyJhbGciOiJIUzUxMiJ9.secret".to_string(),
        };
        let client = CarApiClient::new("http://localhost:9099")
            .expect("client init")
            .with_credentials(credentials.clone());

        for rendered in [format!("{credentials:?}"), format!("{client:?}"), format!("{client:#?}")] {
            assert!(!rendered.contains("eyJhbGciOiJIUzUxMiJ9"), "token leaked: {rendered}");
            assert!(rendered.contains("<redacted>"));
        }
        assert!(format!("{client:?}").contains("http://localhost:9099/"));
    }

    #[tokio::test]
    async fn test_send_multipart_upload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/car/like/importData"))
            .and(header_regex("content-type", "^multipart/form-data; boundary="))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "msg": "导入成功"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CarApiClient::new(&server.uri()).expect("client init");
        let request = ApiRequest::post(["car", "like", "importData"])
            .with_upload(crate::http::Upload::file("like.xlsx", b"rows".to_vec()));
        let response = client.send(request).await.expect("send");
        assert_eq!(response["msg"], "导入成功");

        let received = server.received_requests().await.expect("recorded requests");
        let body = String::from_utf8_lossy(&received[0].body);
        assert!(body.contains(r#"name="file"; filename="like.xlsx""#));
        assert!(body.contains("rows"));
    }

    #[test]
    fn test_rejects_non_hierarchical_base_url() {
        let err = CarApiClient::new("mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, CarApiError::Config(_)));

        let err = CarApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, CarApiError::UrlParse(_)));
    }

    #[tokio::test]
    async fn test_send_attaches_bearer_token_and_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/car/view"))
            .and(header("authorization", "Bearer secret-token"))
            .and(body_json(serde_json::json!({ "seriesId": 3 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "msg": "新增成功"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CarApiClient::new(&server.uri())
            .expect("client init")
            .with_credentials(Credentials {
                token: "secret-token".to_string(),
            });

        let request = ApiRequest::post(["car", "view"]).with_json(serde_json::json!({ "seriesId": 3 }));
        let response = client.send(request).await.expect("send");
        assert_eq!(response["msg"], "新增成功");
    }

    #[tokio::test]
    async fn test_send_empty_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/car/view/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = CarApiClient::new(&server.uri()).expect("client init");
        let response = client
            .send(ApiRequest::delete(["car", "view", "9"]))
            .await
            .expect("send");
        assert!(response.is_null());
    }

    #[tokio::test]
    async fn test_send_keeps_error_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/car/model/1"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"code":401,"msg":"认证失败"}"#))
            .mount(&server)
            .await;

        let client = CarApiClient::new(&server.uri()).expect("client init");
        let err = client
            .send(ApiRequest::get(["car", "model", "1"]))
            .await
            .unwrap_err();

        assert!(err.is_auth_error());
        match err {
            CarApiError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, r#"{"code":401,"msg":"认证失败"}"#);
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_reports_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/car/model/list"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let client = CarApiClient::new(&server.uri()).expect("client init");
        let err = client
            .send(ApiRequest::get(["car", "model", "list"]))
            .await
            .unwrap_err();
        assert!(matches!(err, CarApiError::Serialization(_)));
    }
}
