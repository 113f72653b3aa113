//! Colors and spacing shared by the screens. Light/dark is chosen at runtime.

#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#624CF5";
    pub const LIGHT_SURFACE: &'static str = "#F6F8FD";
    pub const LIGHT_ON_SURFACE: &'static str = "#1F1F29";
    pub const LIGHT_MUTED: &'static str = "#757575";
    pub const LIGHT_ERROR: &'static str = "#BA1A1A";
    pub const LIGHT_SUCCESS: &'static str = "#15803D";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#B3A7FF";
    pub const DARK_SURFACE: &'static str = "#17161F";
    pub const DARK_ON_SURFACE: &'static str = "#ECEAF4";
    pub const DARK_MUTED: &'static str = "#A3A1AD";
    pub const DARK_ERROR: &'static str = "#FFB4AB";
    pub const DARK_SUCCESS: &'static str = "#4ADE80";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn muted(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_MUTED
        } else {
            Self::LIGHT_MUTED
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
    pub fn success(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SUCCESS
        } else {
            Self::LIGHT_SUCCESS
        }
    }
}

pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "20px";
    pub const PAGE_MAX_WIDTH: &'static str = "880px";
}

/// Inline style for text inputs, selects and textareas.
pub fn field_style(is_dark: bool) -> String {
    format!(
        "width: 100%; padding: 12px 16px; border-radius: 999px; border: 1px solid #E0E0E0; background: {}; color: {}; box-sizing: border-box;",
        if is_dark { "rgba(255,255,255,0.06)" } else { "#F6F6F6" },
        AppColors::on_surface(is_dark),
    )
}
