//! Recording fakes for the form collaborators and a few draft helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use evently_client_core::{
    ActionError, Collaborators, CreateEventParams, EventActions, EventDraft, EventForm, EventId,
    EventRecord, FormProps, NavRequest, Navigator, StagedFile, UpdateEventParams, UploadError,
    UploadService, UploadedFile, UserId,
};
use std::cell::RefCell;
use std::sync::Arc;

pub struct FakeUploader {
    pub reply: Result<Vec<UploadedFile>, UploadError>,
    pub calls: RefCell<Vec<Vec<StagedFile>>>,
}

impl FakeUploader {
    pub fn returning(urls: &[&str]) -> Arc<Self> {
        let files = urls
            .iter()
            .map(|u| UploadedFile {
                url: u.to_string(),
                name: None,
                key: None,
            })
            .collect();
        Arc::new(Self {
            reply: Ok(files),
            calls: RefCell::new(Vec::new()),
        })
    }

    pub fn failing(err: UploadError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            calls: RefCell::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl UploadService for FakeUploader {
    async fn upload(&self, files: Vec<StagedFile>) -> Result<Vec<UploadedFile>, UploadError> {
        self.calls.borrow_mut().push(files);
        self.reply.clone()
    }
}

pub struct FakeActions {
    pub create_reply: Result<Option<EventRecord>, ActionError>,
    pub update_reply: Result<Option<EventRecord>, ActionError>,
    pub created: RefCell<Vec<CreateEventParams>>,
    pub updated: RefCell<Vec<UpdateEventParams>>,
}

impl FakeActions {
    pub fn new(
        create_reply: Result<Option<EventRecord>, ActionError>,
        update_reply: Result<Option<EventRecord>, ActionError>,
    ) -> Arc<Self> {
        Arc::new(Self {
            create_reply,
            update_reply,
            created: RefCell::new(Vec::new()),
            updated: RefCell::new(Vec::new()),
        })
    }

    pub fn saving(id: &str) -> Arc<Self> {
        Self::new(Ok(Some(record(id))), Ok(Some(record(id))))
    }

    pub fn remote_calls(&self) -> usize {
        self.created.borrow().len() + self.updated.borrow().len()
    }
}

#[async_trait(?Send)]
impl EventActions for FakeActions {
    async fn create(&self, params: CreateEventParams) -> Result<Option<EventRecord>, ActionError> {
        self.created.borrow_mut().push(params);
        self.create_reply.clone()
    }

    async fn update(&self, params: UpdateEventParams) -> Result<Option<EventRecord>, ActionError> {
        self.updated.borrow_mut().push(params);
        self.update_reply.clone()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub requests: RefCell<Vec<NavRequest>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requests(&self) -> Vec<NavRequest> {
        self.requests.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.requests
            .borrow_mut()
            .push(NavRequest::GoTo(path.to_string()));
    }

    fn go_back(&self) {
        self.requests.borrow_mut().push(NavRequest::Back);
    }
}

pub struct Harness {
    pub uploader: Arc<FakeUploader>,
    pub actions: Arc<FakeActions>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new(uploader: Arc<FakeUploader>, actions: Arc<FakeActions>) -> Self {
        Self {
            uploader,
            actions,
            navigator: RecordingNavigator::new(),
        }
    }

    pub fn services(&self) -> Collaborators {
        Collaborators::new(
            self.uploader.clone(),
            self.actions.clone(),
            self.navigator.clone(),
        )
    }

    pub fn form(&self, props: FormProps) -> EventForm {
        EventForm::initialize(props, self.services()).expect("initialize")
    }
}

pub fn owner() -> UserId {
    UserId::parse("user_1").unwrap()
}

pub fn event_id(s: &str) -> EventId {
    EventId::parse(s).unwrap()
}

pub fn record(id: &str) -> EventRecord {
    EventRecord {
        id: event_id(id),
        title: "Rust meetup".into(),
        description: "Talks about async Rust".into(),
        location: "Online".into(),
        image_url: "https://utfs.io/f/old.png".into(),
        start_date_time: "2026-06-01T10:00:00Z".into(),
        end_date_time: "2026-06-01T12:00:00Z".into(),
        category_id: "tech".into(),
        category: None,
        price: "10".into(),
        is_free: false,
        capacity: String::new(),
        url: String::new(),
        organizer: Some(owner()),
        created_at: None,
    }
}

/// Fills every required field with valid values.
pub fn fill_valid(draft: &mut EventDraft) {
    let start = Utc.with_ymd_and_hms(2026, 7, 10, 18, 0, 0).unwrap();
    draft.title = "Вечер джаза".into();
    draft.description = "Live jazz in the park".into();
    draft.location = "Парк Горького".into();
    draft.category_id = "music".into();
    draft.price = "500".into();
    draft.start_date_time = start;
    draft.end_date_time = start + Duration::hours(3);
}

pub fn png(name: &str) -> StagedFile {
    StagedFile::new(name, Some("image/png".into()), vec![0x89, b'P', b'N', b'G']).unwrap()
}
