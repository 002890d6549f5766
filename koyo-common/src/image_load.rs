/// Load progress of the image shown in the lightbox
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    /// The browser reported an `error` event for the image
    Failed,
}

/// Load state keyed by the image index it was settled for.
///
/// Any other index reads as `Loading`, so switching images resets the state
/// without an explicit reset, and a late `load` event for an image the user
/// already navigated away from never reveals the new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageLoad {
    index: Option<usize>,
    status: LoadStatus,
}

impl ImageLoad {
    pub fn status_for(&self, index: usize) -> LoadStatus {
        if self.index == Some(index) {
            self.status
        } else {
            LoadStatus::Loading
        }
    }

    /// Forget any settled index, e.g. when the lightbox closes, so reopening
    /// on the same image shows the placeholder until it loads again.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn mark_loaded(&mut self, index: usize) {
        self.index = Some(index);
        self.status = LoadStatus::Loaded;
    }

    pub fn mark_failed(&mut self, index: usize) {
        self.index = Some(index);
        self.status = LoadStatus::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_loading() {
        let load = ImageLoad::default();
        assert_eq!(load.status_for(0), LoadStatus::Loading);
    }

    #[test]
    fn test_loaded_only_for_settled_index() {
        let mut load = ImageLoad::default();
        load.mark_loaded(1);
        assert_eq!(load.status_for(1), LoadStatus::Loaded);
        assert_eq!(load.status_for(2), LoadStatus::Loading);
    }

    #[test]
    fn test_stale_load_does_not_reveal_new_image() {
        let mut load = ImageLoad::default();
        // user moved from 0 to 1 before image 0 finished
        load.mark_loaded(0);
        assert_eq!(load.status_for(1), LoadStatus::Loading);
        load.mark_loaded(1);
        assert_eq!(load.status_for(1), LoadStatus::Loaded);
    }

    #[test]
    fn test_reset_forgets_settled_index() {
        let mut load = ImageLoad::default();
        load.mark_loaded(2);
        load.reset();
        assert_eq!(load.status_for(2), LoadStatus::Loading);

        load.mark_failed(2);
        load.reset();
        assert_eq!(load.status_for(2), LoadStatus::Loading);
    }

    #[test]
    fn test_failure_is_per_index() {
        let mut load = ImageLoad::default();
        load.mark_failed(3);
        assert_eq!(load.status_for(3), LoadStatus::Failed);
        assert_eq!(load.status_for(4), LoadStatus::Loading);
    }
}
