//! Navigation collaborator and the app's route paths.

use crate::ids::EventId;
use std::sync::Mutex;

pub const HOME_PATH: &str = "/";
pub const CREATE_EVENT_PATH: &str = "/events/create";
pub const PROFILE_PATH: &str = "/profile";

/// Header navigation entries (label, route).
pub const HEADER_LINKS: [(&str, &str); 3] = [
    ("Главная", HOME_PATH),
    ("Создать мероприятие", CREATE_EVENT_PATH),
    ("Мой профиль", PROFILE_PATH),
];

/// Detail page of one event; also the cache path invalidated on update.
pub fn event_path(id: &EventId) -> String {
    format!("/events/{}", id)
}

pub fn update_event_path(id: &EventId) -> String {
    format!("/events/{}/update", id)
}

pub trait Navigator {
    fn go_to(&self, path: &str);
    fn go_back(&self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavRequest {
    GoTo(String),
    Back,
}

/// Records the last navigation request so a UI shell can apply it once `submit` returns.
#[derive(Debug, Default)]
pub struct PendingNavigation {
    last: Mutex<Option<NavRequest>>,
}

impl PendingNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<NavRequest> {
        self.last.lock().ok().and_then(|mut g| g.take())
    }

    fn set(&self, req: NavRequest) {
        if let Ok(mut g) = self.last.lock() {
            *g = Some(req);
        }
    }
}

impl Navigator for PendingNavigation {
    fn go_to(&self, path: &str) {
        self.set(NavRequest::GoTo(path.to_string()));
    }

    fn go_back(&self) {
        self.set(NavRequest::Back);
    }
}
