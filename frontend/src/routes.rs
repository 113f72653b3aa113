//! Screen routing: maps the core's path strings onto screens and keeps a small history
//! so a "back" request from the form has somewhere to go.

use evently_client_core::{
    event_path, update_event_path, EventId, NavRequest, CREATE_EVENT_PATH, HOME_PATH, PROFILE_PATH,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    CreateEvent,
    UpdateEvent(EventId),
    EventDetail(EventId),
    Profile,
}

impl Route {
    /// Unknown paths fall back to `Home`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or("").trim_end_matches('/');
        if trimmed.is_empty() || trimmed == HOME_PATH {
            return Route::Home;
        }
        if trimmed == CREATE_EVENT_PATH {
            return Route::CreateEvent;
        }
        if trimmed == PROFILE_PATH {
            return Route::Profile;
        }
        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["events", id] => EventId::parse(id).map(Route::EventDetail).unwrap_or(Route::Home),
            ["events", id, "update"] => {
                EventId::parse(id).map(Route::UpdateEvent).unwrap_or(Route::Home)
            }
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME_PATH.to_string(),
            Route::CreateEvent => CREATE_EVENT_PATH.to_string(),
            Route::UpdateEvent(id) => update_event_path(id),
            Route::EventDetail(id) => event_path(id),
            Route::Profile => PROFILE_PATH.to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Мероприятия",
            Route::CreateEvent => "Создать мероприятие",
            Route::UpdateEvent(_) => "Обновить мероприятие",
            Route::EventDetail(_) => "Мероприятие",
            Route::Profile => "Мой профиль",
        }
    }
}

/// Stack of visited routes. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    stack: Vec<Route>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl History {
    pub fn new(start: Route) -> Self {
        Self { stack: vec![start] }
    }

    pub fn current(&self) -> &Route {
        // stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        if self.current() != &route {
            self.stack.push(route);
        }
    }

    /// Pops one entry; at the root this is a no-op.
    pub fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn apply(&mut self, request: NavRequest) {
        match request {
            NavRequest::GoTo(path) => self.push(Route::from_path(&path)),
            NavRequest::Back => self.back(),
        }
    }
}
