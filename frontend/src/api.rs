use gloo_net::http::{Request, Response};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{api_base_url, build_url};
use crate::dashboard::{hydrate, DashboardData};
use crate::error::{ApiError, Result};
use crate::models::{
    ChatRequest, DailyAnalyticsEntry, MonthlyAnalyticsResponse, StatusResponse, Transaction,
};

const FALLBACK_ERROR: &str = "Unable to complete request";

/// Thin typed wrapper over the analytics backend. One round trip per call;
/// no retries, timeouts or caching.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(api_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            base_url: base_url.to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let resp = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let resp = ensure_ok(resp).await?;
        Ok(resp.json::<T>().await?)
    }

    pub async fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.get("/transactions").await
    }

    pub async fn get_daily_analytics(&self) -> Result<Vec<DailyAnalyticsEntry>> {
        self.get("/analytics/daily").await
    }

    pub async fn get_monthly_analytics(&self) -> Result<MonthlyAnalyticsResponse> {
        self.get("/analytics/monthly").await
    }

    /// Fetches all three dashboard payloads concurrently.
    pub async fn load_dashboard(&self) -> Result<DashboardData> {
        hydrate(
            self.get_transactions(),
            self.get_daily_analytics(),
            self.get_monthly_analytics(),
        )
        .await
    }

    /// Posts the file as multipart form data under the `file` field.
    pub async fn upload_transactions(&self, file: &web_sys::File) -> Result<StatusResponse> {
        let form = web_sys::FormData::new().map_err(|err| ApiError::Browser(format!("{:?}", err)))?;
        form.append_with_blob("file", file)
            .map_err(|err| ApiError::Browser(format!("{:?}", err)))?;

        let url = self.url("/upload");
        debug!("POST {} ({})", url, file.name());
        let resp = Request::post(&url).body(form)?.send().await?;
        let reply: StatusResponse = ensure_ok(resp).await?.json().await?;
        upload_outcome(reply)
    }

    /// Returns the assistant's reply text.
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<String> {
        let url = self.url("/chat");
        debug!("POST {} ({} prior messages)", url, request.conversation_history.len());
        let resp = Request::post(&url).json(request)?.send().await?;
        let reply: StatusResponse = ensure_ok(resp).await?.json().await?;
        chat_outcome(reply)
    }
}

/// A 2xx reply can still refuse the file; its message goes to the notice.
fn upload_outcome(reply: StatusResponse) -> Result<StatusResponse> {
    if !reply.success {
        warn!("upload rejected: {}", reply.message);
        return Err(ApiError::Rejected(reply.message));
    }
    Ok(reply)
}

fn chat_outcome(reply: StatusResponse) -> Result<String> {
    if !reply.success {
        return Err(ApiError::Rejected("Failed to get response".to_string()));
    }
    Ok(reply.message)
}

async fn ensure_ok(resp: Response) -> Result<Response> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp.text().await.ok();
    let message = error_message(body.as_deref(), &status_text);
    warn!("request to {} failed with {}: {}", resp.url(), status, message);
    Err(ApiError::Status { status, message })
}

/// The body's `message` field when it is JSON carrying one, else the status
/// text, else a generic message.
pub fn error_message(body: Option<&str>, status_text: &str) -> String {
    let from_body = body
        .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        .and_then(|json| match json.get("message")? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        });
    match from_body {
        Some(message) => message,
        None if !status_text.is_empty() => status_text.to_string(),
        None => FALLBACK_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(
            error_message(Some(r#"{"message": "CSV missing amount column"}"#), "Bad Request"),
            "CSV missing amount column"
        );
        assert_eq!(error_message(Some(r#"{"message": 42}"#), "Bad Request"), "42");
    }

    #[test]
    fn error_message_falls_back_to_status_text() {
        assert_eq!(error_message(Some("<html>oops</html>"), "Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(Some(r#"{"error": "x"}"#), "Not Found"), "Not Found");
        assert_eq!(error_message(None, ""), FALLBACK_ERROR);
    }

    fn reply(raw: &str) -> StatusResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn upload_refused_on_success_false_keeps_backend_message() {
        let err = upload_outcome(reply(r#"{"success": false, "message": "No rows found in CSV"}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(_)));
        assert_eq!(err.to_string(), "No rows found in CSV");

        let accepted = upload_outcome(reply(r#"{"success": true, "message": "Imported 12 transactions"}"#)).unwrap();
        assert_eq!(accepted.message, "Imported 12 transactions");
    }

    #[test]
    fn upload_without_success_flag_counts_as_refused() {
        assert!(matches!(
            upload_outcome(reply(r#"{"message": "ok?"}"#)),
            Err(ApiError::Rejected(_))
        ));
    }

    #[test]
    fn chat_failure_uses_generic_message() {
        let err = chat_outcome(reply(r#"{"success": false, "message": "model offline"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "Failed to get response");
        assert_eq!(
            chat_outcome(reply(r#"{"success": true, "message": "You spent $80 on food."}"#)).unwrap(),
            "You spent $80 on food."
        );
    }

    #[test]
    fn client_joins_paths_onto_base() {
        let client = ApiClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.url("/analytics/monthly"), "http://127.0.0.1:5000/analytics/monthly");
        assert_eq!(client.url("upload"), "http://127.0.0.1:5000/upload");
    }
}
