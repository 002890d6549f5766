//! Lightbox component
//!
//! Modal viewer for one image of the gallery at a time. It never changes
//! the selection itself: Escape, the arrow keys and the controls only ask
//! the owner through `on_close` / `on_prev` / `on_next`.
//!
//! While open, keyboard handling and focus management live in a
//! [`FocusScope`]:
//! - a document-level `keydown` listener (Escape, ArrowLeft, ArrowRight, and
//!   Tab / Shift+Tab wrapping between the first and last focusable control)
//! - the element that had focus before opening, refocused when the scope
//!   is dropped
//!
//! The scope sits in a signal. Closing sets it to `None`, and unmounting the
//! component drops the signal, so the listener is removed on every path.
//!
//! The listener runs outside the Dioxus runtime. It queues requests in a
//! signal and an effect calls the handlers, one per queued key press.

use crate::components::helpers::LoadingSpinner;
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::components::ChromelessButton;
use crate::dom;
use crate::wasm_utils::{event_flag, event_string, prevent_default, EventListener};
use dioxus::prelude::*;
use koyo_common::{
    focus_step, wrap_target, FocusStep, ImageItem, ImageLoad, LightboxCommand, LightboxRequest,
    LoadStatus, RequestQueue, Selection, TabDirection,
};

/// Id of the overlay; the focus trap cycles through controls inside it
const LIGHTBOX_ID: &str = "lightbox";
/// Id of the content container that receives focus on open
const LIGHTBOX_CONTENT_ID: &str = "lightbox-content";

/// Keyboard listener plus the focus to give back on close
struct FocusScope {
    _keydown: EventListener,
    previous_focus: Option<web_sys_x::HtmlElement>,
}

impl FocusScope {
    /// Remember the focused element, attach the listener, then move focus
    /// into the lightbox. The capture must come before the focus move.
    fn open(mut requests: Signal<RequestQueue>) -> Option<Self> {
        let document = dom::document()?;
        let previous_focus = dom::active_element();

        let keydown = EventListener::new(&document, "keydown", move |event| {
            let Some(key) = event_string(&event, "key") else {
                return;
            };
            match LightboxCommand::from_key(&key, event_flag(&event, "shiftKey")) {
                Some(LightboxCommand::Tab(direction)) => {
                    if trap_tab(direction) {
                        prevent_default(&event);
                    }
                }
                Some(LightboxCommand::Request(request)) => requests.write().push(request),
                None => {}
            }
        });

        focus_content();

        Some(Self {
            _keydown: keydown,
            previous_focus,
        })
    }
}

impl Drop for FocusScope {
    fn drop(&mut self) {
        if let Some(element) = &self.previous_focus {
            dom::focus(element);
        }
    }
}

fn focus_content() {
    if let Some(content) = dom::html_element_by_id(LIGHTBOX_CONTENT_ID) {
        dom::focus(&content);
    }
}

/// Move focus to the other end of the lightbox when tabbing past an edge.
/// Returns whether focus was moved.
fn trap_tab(direction: TabDirection) -> bool {
    let controls = dom::focusable_within(LIGHTBOX_ID);
    let active = dom::active_element()
        .and_then(|active| controls.iter().position(|control| *control == active));

    match wrap_target(controls.len(), active, direction) {
        Some(target) => {
            dom::focus(&controls[target]);
            true
        }
        None => false,
    }
}

/// Text for the position counter, e.g. "2 / 6"
pub fn counter_label(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

/// Accessible name of the dialog
pub fn dialog_label(index: usize, total: usize) -> String {
    format!("Imagen {} de {}", index + 1, total)
}

/// Lightbox over `images`, showing the image picked by `selection`.
///
/// Renders nothing while the selection is closed.
#[component]
pub fn Lightbox(
    images: Vec<ImageItem>,
    selection: ReadSignal<Selection>,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let mut focus_scope: Signal<Option<FocusScope>> = use_signal(|| None);
    let mut requests = use_signal(RequestQueue::default);
    let mut load = use_signal(ImageLoad::default);

    // Attach on open, refocus after navigation, drop and reset on close
    use_effect(move || {
        let current = selection();
        let attached = focus_scope.peek().is_some();
        match focus_step(current, attached) {
            FocusStep::Attach => {
                tracing::debug!("Lightbox opened at {current:?}");
                focus_scope.set(FocusScope::open(requests));
            }
            FocusStep::Refocus => focus_content(),
            FocusStep::Detach => {
                tracing::debug!("Lightbox closed");
                load.write().reset();
                focus_scope.set(None);
            }
            FocusStep::Idle => {}
        }
    });

    use_effect(move || {
        if requests.read().is_empty() {
            return;
        }
        let queued = requests.write().drain();
        for request in queued {
            match request {
                LightboxRequest::Close => on_close.call(()),
                LightboxRequest::Prev => on_prev.call(()),
                LightboxRequest::Next => on_next.call(()),
            }
        }
    });

    let Some(index) = selection().index() else {
        return rsx! {};
    };
    let Some(item) = images.get(index).cloned() else {
        return rsx! {};
    };

    let total = images.len();
    let status = load.read().status_for(index);
    let inner_class = if status == LoadStatus::Loaded {
        "lightbox-inner loaded"
    } else {
        "lightbox-inner"
    };
    let image_display = if status == LoadStatus::Loaded {
        "display: block"
    } else {
        "display: none"
    };
    let description_id = format!("lb-desc-{index}");
    let position = index + 1;

    rsx! {
        div {
            id: LIGHTBOX_ID,
            class: "lightbox",
            role: "dialog",
            aria_modal: "true",
            aria_label: dialog_label(index, total),
            aria_describedby: "{description_id}",
            onclick: move |_| on_close.call(()),

            ChromelessButton {
                class: Some("lightbox-close".to_string()),
                aria_label: Some("Cerrar".to_string()),
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    on_close.call(());
                },
                XIcon { class: "icon-large" }
            }

            ChromelessButton {
                class: Some("lightbox-prev".to_string()),
                aria_label: Some("Anterior".to_string()),
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    on_prev.call(());
                },
                ChevronLeftIcon { class: "icon-large", stroke_width: "1.5" }
            }

            div {
                id: LIGHTBOX_CONTENT_ID,
                class: "{inner_class}",
                tabindex: "-1",
                onclick: move |e| e.stop_propagation(),

                match status {
                    LoadStatus::Loading => rsx! {
                        LoadingSpinner { class: "lb-spinner" }
                    },
                    LoadStatus::Failed => rsx! {
                        div { class: "lb-error", role: "alert", "No se pudo cargar la imagen" }
                    },
                    LoadStatus::Loaded => rsx! {},
                }
                img {
                    src: "{item.source}",
                    alt: "Galería {position}",
                    loading: "lazy",
                    style: image_display,
                    onload: move |_| load.write().mark_loaded(index),
                    onerror: move |_| {
                        tracing::warn!("Image {index} failed to load");
                        load.write().mark_failed(index);
                    },
                }
                div { class: "lb-counter", aria_hidden: "true", {counter_label(index, total)} }
                div { id: "{description_id}", class: "lb-desc", "{item.description}" }
            }

            ChromelessButton {
                class: Some("lightbox-next".to_string()),
                aria_label: Some("Siguiente".to_string()),
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    on_next.call(());
                },
                ChevronRightIcon { class: "icon-large", stroke_width: "1.5" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_is_one_based() {
        assert_eq!(counter_label(0, 6), "1 / 6");
        assert_eq!(counter_label(5, 6), "6 / 6");
    }

    #[test]
    fn test_dialog_label() {
        assert_eq!(dialog_label(2, 3), "Imagen 3 de 3");
    }
}
