//! Request side of the HTTP collaborators against a wiremock server: method, path,
//! query, auth header and body shape.

use chrono::{TimeZone, Utc};
use evently_client_core::{
    ActionError, ApiClient, ClientConfig, CreateEventParams, EventActions, EventDraft, EventId,
    EventUpdate, HttpEventActions, HttpUploadService, StagedFile, UpdateEventParams, UploadService,
    UserId,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
    let uri = server.uri();
    let token = token.map(str::to_string);
    let config = ClientConfig::from_lookup(move |key| match key {
        "EVENTLY_API_URL" => Some(uri.clone()),
        "EVENTLY_API_TOKEN" => token.clone(),
        _ => None,
    });
    ApiClient::new(config).expect("client")
}

fn record_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": "Expo",
        "startDateTime": "2026-06-01T10:00:00Z",
        "endDateTime": "2026-06-01T12:00:00Z",
        "price": 10,
        "isFree": false
    })
}

fn draft() -> EventDraft {
    let mut d = EventDraft::empty_at(Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap());
    d.title = "Expo".into();
    d
}

#[tokio::test]
async fn upload_posts_multipart_files_with_endpoint_slug() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/uploadthing"))
        .and(query_param("slug", "imageUploader"))
        .and(header("authorization", "Bearer tok"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains(r#"name="files"; filename="cover.png""#))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "url": "https://utfs.io/f/cover.png", "name": "cover.png" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uploader = HttpUploadService::new(client(&server, Some("tok")));
    let file = StagedFile::new("cover.png", Some("image/png".into()), vec![0x89, b'P', b'N', b'G']).unwrap();
    let uploaded = uploader.upload(vec![file]).await.expect("upload");

    assert_eq!(uploaded.len(), 1);
    assert_eq!(uploaded[0].url, "https://utfs.io/f/cover.png");
}

#[tokio::test]
async fn create_posts_event_owner_and_revalidate_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/events"))
        .and(header("authorization", "Bearer tok"))
        .and(body_partial_json(json!({
            "userId": "user_1",
            "path": "/profile",
            "event": { "title": "Expo", "isFree": false }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(record_json("e1")))
        .expect(1)
        .mount(&server)
        .await;

    let actions = HttpEventActions::new(client(&server, Some("tok")));
    let saved = actions
        .create(CreateEventParams {
            event: draft(),
            user_id: UserId::parse("user_1").unwrap(),
            path: "/profile".into(),
        })
        .await
        .expect("create")
        .expect("record");

    assert_eq!(saved.id.as_str(), "e1");
    assert_eq!(saved.price, "10");
}

#[tokio::test]
async fn update_puts_to_event_path_with_id_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/events/e9"))
        .and(body_partial_json(json!({
            "userId": "user_1",
            "path": "/events/e9",
            "event": { "_id": "e9", "title": "Expo" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&server)
        .await;

    let actions = HttpEventActions::new(client(&server, None));
    let result = actions
        .update(UpdateEventParams {
            user_id: UserId::parse("user_1").unwrap(),
            event: EventUpdate {
                id: EventId::parse("e9").unwrap(),
                draft: draft(),
            },
            path: "/events/e9".into(),
        })
        .await
        .expect("update");

    assert_eq!(result, None);
}

#[tokio::test]
async fn unauthorized_create_is_a_typed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let actions = HttpEventActions::new(client(&server, Some("old")));
    let err = actions
        .create(CreateEventParams {
            event: draft(),
            user_id: UserId::parse("user_1").unwrap(),
            path: "/profile".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, ActionError::Unauthorized("token expired".into()));
}

#[tokio::test]
async fn categories_are_fetched_without_auth_when_no_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "music", "name": "Музыка" },
            { "name": "no id" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let actions = HttpEventActions::new(client(&server, None));
    let categories = actions.list_categories().await.expect("categories");

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id.as_str(), "music");
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests[0].headers.get("authorization").is_none());
}
