use crate::utils::error::{ReservationError, Result};
use crate::utils::validation::validate_url;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// 綁定單一 base URL 的 JSON client
///
/// 成功時回傳 response body 的 JSON；網路錯誤或 HTTP 錯誤狀態一律轉成
/// [`ReservationError::ApiError`]，並帶上能取得的最佳訊息
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("api.base_url", base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url` + `endpoint`，保留 base 上的路徑前綴
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        self.send(self.client.get(self.url_for(endpoint))).await
    }

    pub async fn post<T: Serialize + ?Sized>(&self, endpoint: &str, body: &T) -> Result<Value> {
        self.send(self.client.post(self.url_for(endpoint)).json(body))
            .await
    }

    pub async fn put<T: Serialize + ?Sized>(&self, endpoint: &str, body: &T) -> Result<Value> {
        self.send(self.client.put(self.url_for(endpoint)).json(body))
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Value> {
        self.send(self.client.delete(self.url_for(endpoint))).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("📡 Transport error: {}", e);
                return Err(ReservationError::api_failure(None, None, &e.to_string()));
            }
        };

        let status = response.status();
        tracing::debug!("📡 {} -> {}", response.url(), status);

        let body = response
            .text()
            .await
            .map_err(|e| ReservationError::api_failure(Some(status.as_u16()), None, &e.to_string()))?;

        if status.is_success() {
            return Ok(parse_body(&body));
        }

        let parsed = parse_body(&body);
        let server_message = parsed.get("message").and_then(Value::as_str);

        Err(ReservationError::api_failure(
            Some(status.as_u16()),
            server_message,
            &format!("Request failed with status code {}", status.as_u16()),
        ))
    }
}

// 空 body 視為 null，非 JSON 的內容原樣當字串
fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
