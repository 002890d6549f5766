/// Index of the image before `index`, wrapping to the end.
///
/// `len` must be non-zero.
pub fn prev_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// Index of the image after `index`, wrapping to the start.
///
/// `len` must be non-zero.
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Which image the lightbox shows, if any.
///
/// `OpenAt` can only be built through [`Selection::open_at`], which rejects
/// indices outside the image sequence, so an open selection always points
/// at a real image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    OpenAt(usize),
}

impl Selection {
    /// Open at `index`, or `None` when it is out of range for `len` images.
    pub fn open_at(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self::OpenAt(index))
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    /// Step backwards. Closed stays closed.
    pub fn prev(self, len: usize) -> Self {
        match self {
            Self::OpenAt(index) if len > 0 => Self::OpenAt(prev_index(index, len)),
            _ => Self::Closed,
        }
    }

    /// Step forwards. Closed stays closed.
    pub fn next(self, len: usize) -> Self {
        match self {
            Self::OpenAt(index) if len > 0 => Self::OpenAt(next_index(index, len)),
            _ => Self::Closed,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::OpenAt(index) => Some(index),
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::OpenAt(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_wraps_to_end() {
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
    }

    #[test]
    fn test_next_wraps_to_start() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 3), 1);
    }

    #[test]
    fn test_single_image_navigation_stays_put() {
        assert_eq!(prev_index(0, 1), 0);
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn test_prev_next_are_inverse() {
        for len in 1..8 {
            for i in 0..len {
                assert_eq!(next_index(prev_index(i, len), len), i);
                assert_eq!(prev_index(next_index(i, len), len), i);
            }
        }
    }

    #[test]
    fn test_next_len_times_is_identity() {
        let len = 6;
        for start in 0..len {
            let mut i = start;
            for _ in 0..len {
                i = next_index(i, len);
            }
            assert_eq!(i, start);
        }
    }

    #[test]
    fn test_open_at_rejects_out_of_range() {
        assert_eq!(Selection::open_at(3, 3), None);
        assert_eq!(Selection::open_at(0, 0), None);
        assert_eq!(Selection::open_at(2, 3), Some(Selection::OpenAt(2)));
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        assert_eq!(Selection::Closed.next(3), Selection::Closed);
        assert_eq!(Selection::Closed.prev(3), Selection::Closed);
    }

    #[test]
    fn test_close() {
        let s = Selection::open_at(1, 3).unwrap();
        assert!(s.is_open());
        assert_eq!(s.close(), Selection::Closed);
        assert_eq!(s.close().index(), None);
    }

    #[test]
    fn test_default_is_closed() {
        assert_eq!(Selection::default(), Selection::Closed);
    }
}
