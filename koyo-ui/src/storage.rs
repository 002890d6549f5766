//! Local storage helpers

use koyo_common::{Theme, THEME_STORAGE_KEY};

pub fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = get_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Saved theme, falling back to the default when missing or unrecognized.
pub fn load_theme() -> Theme {
    match get_string(THEME_STORAGE_KEY).map(|v| v.parse::<Theme>()) {
        Some(Ok(theme)) => theme,
        Some(Err(e)) => {
            tracing::warn!("Ignoring stored theme: {e}");
            Theme::default()
        }
        None => Theme::default(),
    }
}

pub fn save_theme(theme: Theme) {
    set_string(THEME_STORAGE_KEY, theme.as_str());
}
