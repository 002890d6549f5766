//! Hooks that tie page-level state to the browser

use crate::dom;
use crate::storage;
use crate::wasm_utils::EventListener;
use dioxus::prelude::*;
use koyo_common::{ScrollTracker, Theme, TopBarVisibility};

/// Theme signal backed by local storage.
///
/// Starts at the default theme, switches to the stored one after mount, and
/// writes every later change back.
pub fn use_persisted_theme() -> Signal<Theme> {
    let mut theme = use_signal(Theme::default);
    let mut loaded_from_storage = use_signal(|| false);

    // Load after mount (the JS bridge may not be ready during component init)
    use_effect(move || {
        if *loaded_from_storage.peek() {
            return;
        }
        let stored = storage::load_theme();
        tracing::debug!("Loaded theme '{stored}'");
        theme.set(stored);
        loaded_from_storage.set(true);
    });

    use_effect(move || {
        if !loaded_from_storage() {
            return;
        }
        let current = theme();
        storage::save_theme(current);
        tracing::info!("Theme set to '{current}'");
    });

    theme
}

/// Whether the top bar should be visible, driven by window scrolling.
///
/// The scroll listener lives as long as the calling component.
pub fn use_top_bar_visibility() -> ReadSignal<TopBarVisibility> {
    let mut visibility = use_signal(|| TopBarVisibility::Shown);
    let mut listener: Signal<Option<EventListener>> = use_signal(|| None);

    use_effect(move || {
        if listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys_x::window() else {
            return;
        };

        let mut tracker = ScrollTracker::new(dom::window_scroll_y());
        let scroll = EventListener::passive(&window, "scroll", move |_| {
            if let Some(change) = tracker.update(dom::window_scroll_y()) {
                if *visibility.peek() != change {
                    visibility.set(change);
                }
            }
        });
        listener.set(Some(scroll));
    });

    visibility.into()
}
