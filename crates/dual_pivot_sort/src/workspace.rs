use crate::SortError;

/// Caller-owned scratch space for run merging.
///
/// Only the window `buf[base..base + len]` is ever written. A window shorter than
/// the range being merged is ignored and the engine allocates its own scratch.
#[derive(Debug)]
pub struct Workspace<'a, T> {
    buf: &'a mut [T],
    base: usize,
    len: usize,
}

impl<'a, T> Workspace<'a, T> {
    pub fn new(buf: &'a mut [T]) -> Self {
        let len = buf.len();
        Self { buf, base: 0, len }
    }

    pub fn with_bounds(buf: &'a mut [T], base: usize, len: usize) -> Result<Self, SortError> {
        let capacity = buf.len();
        match base.checked_add(len) {
            Some(end) if end <= capacity => Ok(Self { buf, base, len }),
            _ => Err(SortError::WorkspaceBounds {
                base,
                len,
                capacity,
            }),
        }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn take(self, needed: usize) -> Option<&'a mut [T]> {
        if self.len < needed {
            return None;
        }
        Some(&mut self.buf[self.base..(self.base + needed)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_checked() {
        let mut buf = [0_i32; 8];
        assert!(Workspace::with_bounds(&mut buf, 2, 6).is_ok());
        assert_eq!(
            Workspace::with_bounds(&mut buf, 3, 6).unwrap_err(),
            SortError::WorkspaceBounds {
                base: 3,
                len: 6,
                capacity: 8,
            }
        );
        assert!(Workspace::with_bounds(&mut buf, usize::MAX, 2).is_err());
    }

    #[test]
    fn take_respects_window() {
        let mut buf = [0_i32; 8];
        let ws = Workspace::with_bounds(&mut buf, 2, 4).unwrap();
        assert_eq!(ws.base(), 2);
        assert_eq!(ws.len(), 4);
        assert!(!ws.is_empty());
        let window = ws.take(3).unwrap();
        window.fill(7);
        assert_eq!(buf, [0, 0, 7, 7, 7, 0, 0, 0]);

        let mut small = [0_i32; 2];
        assert!(Workspace::new(&mut small).take(3).is_none());
    }
}
