//! Persistence collaborator: create/update remote operations on the events API.

use crate::api::{self, ApiClient};
use crate::error::ActionError;
use crate::ids::{EventId, UserId};
use crate::models::{Category, EventDraft, EventRecord, EventUpdate};
use async_trait::async_trait;
use serde::Serialize;

/// Body of `POST /api/events`. `path` is the page the backend should revalidate.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventParams {
    pub event: EventDraft,
    pub user_id: UserId,
    pub path: String,
}

/// Body of `PUT /api/events/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventParams {
    pub user_id: UserId,
    pub event: EventUpdate,
    pub path: String,
}

impl UpdateEventParams {
    pub fn event_id(&self) -> &EventId {
        &self.event.id
    }
}

/// `Ok(None)` means the backend answered but persisted nothing.
#[async_trait(?Send)]
pub trait EventActions {
    async fn create(&self, params: CreateEventParams) -> Result<Option<EventRecord>, ActionError>;
    async fn update(&self, params: UpdateEventParams) -> Result<Option<EventRecord>, ActionError>;
}

#[derive(Clone, Debug)]
pub struct HttpEventActions {
    api: ApiClient,
}

impl HttpEventActions {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET /api/categories (dropdown options). Accepts a bare array or `{ "categories": [...] }`.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ActionError> {
        let url = self.api.api_url("/api/categories");
        let resp = self
            .api
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(|e| ActionError::Request(e.to_string()))?;
        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| ActionError::Request(e.to_string()))?;
        categories_from_response(status, &text)
    }

    async fn send_event<B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: &B,
    ) -> Result<Option<EventRecord>, ActionError> {
        let resp = self
            .api
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(|e| ActionError::Request(e.to_string()))?;
        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| ActionError::Request(e.to_string()))?;
        api::event_from_response(status, &text)
    }
}

#[async_trait(?Send)]
impl EventActions for HttpEventActions {
    async fn create(&self, params: CreateEventParams) -> Result<Option<EventRecord>, ActionError> {
        let url = self.api.api_url("/api/events");
        self.send_event(reqwest::Method::POST, &url, &params).await
    }

    async fn update(&self, params: UpdateEventParams) -> Result<Option<EventRecord>, ActionError> {
        let url = self.api.api_url(&format!("/api/events/{}", params.event_id()));
        self.send_event(reqwest::Method::PUT, &url, &params).await
    }
}

fn categories_from_response(status: u16, body: &str) -> Result<Vec<Category>, ActionError> {
    if status == 401 {
        return Err(ActionError::Unauthorized(body.to_string()));
    }
    if !(200..300).contains(&status) {
        return Err(ActionError::Status {
            status,
            body: body.to_string(),
        });
    }
    let json: serde_json::Value =
        serde_json::from_str(body.trim()).map_err(|e| ActionError::Decode(e.to_string()))?;
    let arr = json
        .as_array()
        .cloned()
        .or_else(|| json.get("categories").and_then(|v| v.as_array()).cloned())
        .unwrap_or_default();
    // Skip malformed entries rather than failing the whole dropdown.
    Ok(arr
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}
