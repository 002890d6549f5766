/// Minimum scroll distance, in pixels, before the top bar reacts
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopBarVisibility {
    Shown,
    Hidden,
}

/// Turns window scroll positions into top bar show/hide decisions.
///
/// Scrolling down hides the bar, scrolling up shows it. Moves within the
/// threshold are ignored but still become the new reference position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    last_y: f64,
    threshold: f64,
}

impl ScrollTracker {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            threshold: SCROLL_THRESHOLD_PX,
        }
    }

    pub fn update(&mut self, y: f64) -> Option<TopBarVisibility> {
        let change = if y > self.last_y + self.threshold {
            Some(TopBarVisibility::Hidden)
        } else if y < self.last_y - self.threshold {
            Some(TopBarVisibility::Shown)
        } else {
            None
        };
        self.last_y = y;
        change
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_hides() {
        let mut t = ScrollTracker::new(0.0);
        assert_eq!(t.update(50.0), Some(TopBarVisibility::Hidden));
    }

    #[test]
    fn test_scroll_up_shows() {
        let mut t = ScrollTracker::new(300.0);
        assert_eq!(t.update(200.0), Some(TopBarVisibility::Shown));
    }

    #[test]
    fn test_small_moves_ignored() {
        let mut t = ScrollTracker::new(100.0);
        assert_eq!(t.update(105.0), None);
        assert_eq!(t.update(100.0), None);
        assert_eq!(t.update(110.0), None);
    }

    #[test]
    fn test_small_moves_update_reference() {
        let mut t = ScrollTracker::new(0.0);
        // 8 + 8 crosses the threshold overall but never in one step
        assert_eq!(t.update(8.0), None);
        assert_eq!(t.update(16.0), None);
    }
}
