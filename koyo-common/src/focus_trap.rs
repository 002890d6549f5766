use crate::selection::Selection;

/// Direction of a Tab key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabDirection {
    /// Tab
    Forward,
    /// Shift+Tab
    Backward,
}

/// Decide where focus must go to stay inside a modal.
///
/// `count` is the number of focusable controls in the modal and `active`
/// the position of the focused one among them (`None` when focus is on
/// something else). Returns the control to focus, or `None` when the
/// browser's default tab order already keeps focus inside.
pub fn wrap_target(count: usize, active: Option<usize>, direction: TabDirection) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (direction, active) {
        (TabDirection::Forward, Some(i)) if i == last => Some(0),
        (TabDirection::Backward, Some(0)) => Some(last),
        _ => None,
    }
}

/// What the lightbox does with focus after its selection changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusStep {
    /// Capture the focused element, then focus the content
    Attach,
    /// Already attached; focus the content of the new image
    Refocus,
    /// Give focus back to the element captured on attach
    Detach,
    Idle,
}

/// Pick the focus step for `selection`, given whether a focus scope is
/// already attached. Only `Attach` captures the prior focus, so a refocus
/// can never overwrite it with an element inside the lightbox.
pub fn focus_step(selection: Selection, attached: bool) -> FocusStep {
    match (selection, attached) {
        (Selection::OpenAt(_), false) => FocusStep::Attach,
        (Selection::OpenAt(_), true) => FocusStep::Refocus,
        (Selection::Closed, true) => FocusStep::Detach,
        (Selection::Closed, false) => FocusStep::Idle,
    }
}
