//! Evently frontend library: routing, date-input helpers and the Dioxus UI over
//! `evently_client_core`.

pub mod app;
pub mod datetime_input;
pub mod form_binding;
pub mod routes;
pub mod theme;
pub mod widgets;
pub mod screens;
