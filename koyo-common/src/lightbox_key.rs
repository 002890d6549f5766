use crate::focus_trap::TabDirection;
use std::collections::VecDeque;

/// A change the lightbox asks its owner to make to the selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxRequest {
    Close,
    Prev,
    Next,
}

/// What a key press means while the lightbox is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxCommand {
    /// Forwarded to the owner
    Request(LightboxRequest),
    /// Tab or Shift+Tab, handled by the focus trap inside the listener
    Tab(TabDirection),
}

impl LightboxCommand {
    /// Map a `KeyboardEvent.key` value. Unhandled keys return `None`.
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Request(LightboxRequest::Close)),
            "ArrowLeft" => Some(Self::Request(LightboxRequest::Prev)),
            "ArrowRight" => Some(Self::Request(LightboxRequest::Next)),
            "Tab" if shift => Some(Self::Tab(TabDirection::Backward)),
            "Tab" => Some(Self::Tab(TabDirection::Forward)),
            _ => None,
        }
    }
}

/// Requests collected between two dispatches, in arrival order.
///
/// Key presses can arrive faster than the UI dispatches them; every one is
/// kept so two quick ArrowRight presses move two images.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestQueue {
    requests: VecDeque<LightboxRequest>,
}

impl RequestQueue {
    pub fn push(&mut self, request: LightboxRequest) {
        self.requests.push_back(request);
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Take every queued request, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<LightboxRequest> {
        self.requests.drain(..).collect()
    }
}
