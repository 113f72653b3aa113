use dioxus::prelude::*;
use evently_client_core::{
    http_collaborators, Category, ClientConfig, Collaborators, EventRecord, FormMode,
    HttpEventActions, NavRequest, PendingNavigation, UserId,
};
use std::sync::Arc;
use crate::routes::{History, Route};
use crate::screens::{EventDetailScreen, EventFormScreen, HomeScreen, ProfileScreen};
use crate::widgets::Header;

const DEFAULT_OWNER: &str = "demo-user";

/// Collaborators shared by every screen, provided through context.
#[derive(Clone)]
pub struct AppServices {
    pub collaborators: Collaborators,
    pub actions: Arc<HttpEventActions>,
    pub pending: Arc<PendingNavigation>,
    pub owner: UserId,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pending, &other.pending) && self.owner == other.owner
    }
}

impl AppServices {
    pub fn from_env() -> Result<Self, String> {
        let config = ClientConfig::from_env();
        let pending = Arc::new(PendingNavigation::new());
        let (collaborators, actions) =
            http_collaborators(config, pending.clone()).map_err(|e| e.to_string())?;
        Ok(Self {
            collaborators,
            actions,
            pending,
            owner: owner_from_env()?,
        })
    }
}

/// Signed-in user: `EVENTLY_USER_ID` at runtime, then at build time, then a demo id.
fn owner_from_env() -> Result<UserId, String> {
    let raw = std::env::var("EVENTLY_USER_ID")
        .ok()
        .or_else(|| option_env!("EVENTLY_USER_ID").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_OWNER.to_string());
    UserId::parse(&raw).map_err(|e| format!("EVENTLY_USER_ID: {}", e))
}

#[component]
pub fn App() -> Element {
    let services = use_hook(AppServices::from_env);

    let body = match services {
        Ok(services) => rsx! { Shell { services } },
        Err(e) => rsx! {
            p { style: "padding: 24px; color: #BA1A1A;", "Не удалось подключиться к API: {e}" }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            {body}
        }
    }
}

#[component]
fn Shell(services: AppServices) -> Element {
    let owner = services.owner.clone();
    let actions = services.actions.clone();
    use_context_provider(move || services);

    let mut history = use_signal(History::default);
    let mut records = use_signal(Vec::<EventRecord>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let is_dark = use_signal(|| false);

    use_future(move || {
        let actions = actions.clone();
        async move {
            match actions.list_categories().await {
                Ok(list) => {
                    tracing::debug!(count = list.len(), "categories loaded");
                    categories.set(list);
                }
                Err(e) => tracing::warn!(error = %e, "could not load categories"),
            }
        }
    });

    let route = history.read().current().clone();
    let current_path = route.path();
    let page_title = format!("{} · Evently", route.title());
    let go = move |path: String| history.write().apply(NavRequest::GoTo(path));
    let on_saved = move |record: EventRecord| {
        let mut list = records.write();
        match list.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => *slot = record,
            None => list.insert(0, record),
        }
    };

    let screen = match route {
        Route::Home => rsx! {
            HomeScreen { is_dark: is_dark(), records: records(), on_navigate: go }
        },
        Route::CreateEvent => rsx! {
            EventFormScreen {
                key: "create",
                is_dark: is_dark(),
                mode: FormMode::Create,
                categories: categories(),
                on_saved,
                on_navigate: move |req| history.write().apply(req),
            }
        },
        Route::UpdateEvent(id) => {
            let existing = records().into_iter().find(|r| r.id == id);
            rsx! {
                EventFormScreen {
                    key: "update-{id}",
                    is_dark: is_dark(),
                    mode: FormMode::Update,
                    event_id: id.clone(),
                    existing,
                    categories: categories(),
                    on_saved,
                    on_navigate: move |req| history.write().apply(req),
                }
            }
        }
        Route::EventDetail(id) => {
            let record = records().into_iter().find(|r| r.id == id);
            rsx! {
                EventDetailScreen {
                    is_dark: is_dark(),
                    event_id: id,
                    record,
                    categories: categories(),
                    on_navigate: go,
                }
            }
        }
        Route::Profile => rsx! {
            ProfileScreen { is_dark: is_dark(), owner, records: records(), on_navigate: go }
        },
    };

    rsx! {
        document::Title { "{page_title}" }
        Header { is_dark: is_dark(), current_path, on_navigate: go }
        {screen}
    }
}
