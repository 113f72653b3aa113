mod event_detail;
mod event_form;
mod home;
mod profile;

pub use event_detail::EventDetailScreen;
pub use event_form::EventFormScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
