//! HTTP plumbing shared by the upload and events collaborators: one reqwest client per
//! config, bearer auth, and mapping of raw responses to typed results.

use crate::config::ClientConfig;
use crate::error::{ActionError, UploadError};
use crate::models::{EventRecord, UploadedFile};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ActionError> {
        let builder = reqwest::Client::builder();
        // wasm (fetch) has no client-wide timeout
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let http = builder
            .build()
            .map_err(|e| ActionError::Request(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    pub(crate) fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let req = self.http.request(method, url);
        match &self.config.api_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

/// `null`/empty body means "nothing persisted"; some backends wrap the record in `{ "event": … }`.
pub(crate) fn event_from_response(status: u16, body: &str) -> Result<Option<EventRecord>, ActionError> {
    if status == 401 {
        return Err(ActionError::Unauthorized(body.to_string()));
    }
    if !(200..300).contains(&status) {
        return Err(ActionError::Status {
            status,
            body: body.to_string(),
        });
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let json: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|e| ActionError::Decode(e.to_string()))?;
    let value = match json {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Object(ref map) if map.contains_key("event") => map["event"].clone(),
        other => other,
    };
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ActionError::Decode(e.to_string()))
}

/// Accepts a bare array or `{ "files": [...] }` / `{ "data": [...] }`.
pub(crate) fn uploads_from_response(status: u16, body: &str) -> Result<Vec<UploadedFile>, UploadError> {
    if !(200..300).contains(&status) {
        return Err(UploadError::Status {
            status,
            body: body.to_string(),
        });
    }
    let json: serde_json::Value =
        serde_json::from_str(body.trim()).map_err(|e| UploadError::Decode(e.to_string()))?;
    let arr = json
        .as_array()
        .cloned()
        .or_else(|| json.get("files").and_then(|v| v.as_array()).cloned())
        .or_else(|| json.get("data").and_then(|v| v.as_array()).cloned())
        .ok_or_else(|| UploadError::Decode("expected an array of uploaded files".to_string()))?;
    let files: Vec<UploadedFile> = arr
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()
        .map_err(|e| UploadError::Decode(e.to_string()))?;
    if files.is_empty() {
        return Err(UploadError::Empty);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{"_id":"e1","title":"Jazz night","startDateTime":"2026-03-01T19:00:00Z","endDateTime":"2026-03-01T23:00:00Z"}"#;

    #[test]
    fn event_response_plain_and_wrapped() {
        let rec = event_from_response(201, RECORD).unwrap().unwrap();
        assert_eq!(rec.id.as_str(), "e1");
        let wrapped = format!(r#"{{"event":{}}}"#, RECORD);
        let rec = event_from_response(200, &wrapped).unwrap().unwrap();
        assert_eq!(rec.title, "Jazz night");
    }

    #[test]
    fn event_response_null_or_empty_is_none() {
        assert_eq!(event_from_response(200, "null").unwrap(), None);
        assert_eq!(event_from_response(204, "").unwrap(), None);
        assert_eq!(event_from_response(200, r#"{"event":null}"#).unwrap(), None);
    }

    #[test]
    fn event_response_errors() {
        assert!(matches!(
            event_from_response(401, "expired"),
            Err(ActionError::Unauthorized(b)) if b == "expired"
        ));
        assert!(matches!(
            event_from_response(500, "boom"),
            Err(ActionError::Status { status: 500, .. })
        ));
        assert!(matches!(
            event_from_response(200, "{not json"),
            Err(ActionError::Decode(_))
        ));
    }

    #[test]
    fn upload_response_shapes() {
        let files = uploads_from_response(200, r#"[{"url":"https://utfs.io/f/1.png","name":"1.png"}]"#).unwrap();
        assert_eq!(files[0].url, "https://utfs.io/f/1.png");
        let files = uploads_from_response(200, r#"{"data":[{"url":"u1"},{"url":"u2"}]}"#).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn upload_response_failures() {
        assert_eq!(uploads_from_response(200, "[]"), Err(UploadError::Empty));
        assert!(matches!(
            uploads_from_response(413, "too large"),
            Err(UploadError::Status { status: 413, .. })
        ));
        assert!(matches!(
            uploads_from_response(200, r#"{"ok":true}"#),
            Err(UploadError::Decode(_))
        ));
    }

    #[test]
    fn api_url_joins_base_and_path() {
        let client = ApiClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.api_url("/api/events"), "http://127.0.0.1:3000/api/events");
    }

    #[test]
    fn client_debug_does_not_leak_token() {
        let config = ClientConfig::from_lookup(|k| (k == "EVENTLY_API_TOKEN").then(|| "tok-123".to_string()));
        let client = ApiClient::new(config).unwrap();
        assert!(!format!("{:?}", client).contains("tok-123"));
    }
}
