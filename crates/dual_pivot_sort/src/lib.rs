//! Hybrid in-place sorting for fixed-width primitives.
//!
//! One generic engine picks, per call, between counting sort (8/16-bit kinds with long
//! ranges), natural merging of existing runs, and dual-pivot quicksort with insertion
//! sort for short sub-ranges. Floating kinds are sorted in their total order: NaNs last
//! and `-0.0` before `0.0`.
//!
//! ```
//! let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
//! dual_pivot_sort::sort(&mut data);
//! assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
//! ```

mod algorithms;
mod element;
mod error;
mod observer;
mod workspace;

pub use element::{BoundedKey, Element, FloatKey, SortKey};
pub use error::SortError;
pub use observer::{
    ALL_DECISION_POINTS, DecisionPoint, Observer, all_decision_points, decision_point_name,
};
pub use workspace::Workspace;

/// Tuning thresholds. They only affect speed, never the result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    /// Ranges with `right - left` below this skip run detection.
    pub quicksort_threshold: usize,
    /// Sub-ranges shorter than this are insertion sorted.
    pub insertion_sort_threshold: usize,
    /// 8-bit ranges longer than this are counting sorted.
    pub counting_sort_threshold_byte: usize,
    /// 16-bit ranges longer than this are counting sorted.
    pub counting_sort_threshold_short: usize,
    /// Run detection gives up once this many runs are found.
    pub max_run_count: usize,
}

pub const DEFAULT_CONFIG: SortConfig = SortConfig {
    quicksort_threshold: 286,
    insertion_sort_threshold: 47,
    counting_sort_threshold_byte: 29,
    counting_sort_threshold_short: 3200,
    max_run_count: 67,
};

/// Smallest range that still has room for five distinct sample positions.
pub const MIN_INSERTION_SORT_THRESHOLD: usize = 12;

/// Capacity of the stack-resident run table.
pub const MAX_RUN_COUNT_LIMIT: usize = 255;

impl Default for SortConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl SortConfig {
    pub fn validate(&self) -> Result<(), SortError> {
        if self.insertion_sort_threshold < MIN_INSERTION_SORT_THRESHOLD {
            return Err(SortError::InvalidConfig(format!(
                "insertion_sort_threshold must be at least {MIN_INSERTION_SORT_THRESHOLD}, got {}",
                self.insertion_sort_threshold
            )));
        }
        if self.max_run_count == 0 || self.max_run_count > MAX_RUN_COUNT_LIMIT {
            return Err(SortError::InvalidConfig(format!(
                "max_run_count must be in 1..={MAX_RUN_COUNT_LIMIT}, got {}",
                self.max_run_count
            )));
        }
        Ok(())
    }
}

/// A configured engine, optionally reporting its decisions to an [`Observer`].
#[derive(Clone, Debug, Default)]
pub struct Sorter<O = ()> {
    config: SortConfig,
    observer: O,
}

impl Sorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SortConfig) -> Result<Self, SortError> {
        config.validate()?;
        Ok(Self {
            config,
            observer: (),
        })
    }
}

impl<O: Observer> Sorter<O> {
    pub fn with_observer<P: Observer>(self, observer: P) -> Sorter<P> {
        Sorter {
            config: self.config,
            observer,
        }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn sort<T: Element>(&mut self, seq: &mut [T]) {
        if seq.is_empty() {
            return;
        }
        self.sort_range(seq, 0, seq.len() - 1);
    }

    /// Sorts `seq[left..=right]` ascending; `right < left` is the empty range.
    ///
    /// # Panics
    ///
    /// On an invalid range, or when the merge scratch cannot be allocated.
    pub fn sort_range<T: Element>(&mut self, seq: &mut [T], left: usize, right: usize) {
        self.sort_range_with_workspace(seq, left, right, None);
    }

    /// Like [`Sorter::sort_range`], merging through `workspace` when it is large enough.
    ///
    /// # Panics
    ///
    /// On an invalid range, or when the merge scratch cannot be allocated.
    pub fn sort_range_with_workspace<T: Element>(
        &mut self,
        seq: &mut [T],
        left: usize,
        right: usize,
        workspace: Option<Workspace<'_, T>>,
    ) {
        if let Err(err) = self.try_sort_range(seq, left, right, workspace) {
            panic!("{err}");
        }
    }

    pub fn try_sort_range<T: Element>(
        &mut self,
        seq: &mut [T],
        left: usize,
        right: usize,
        workspace: Option<Workspace<'_, T>>,
    ) -> Result<(), SortError> {
        let len = seq.len();
        if right < left {
            if left - right > 1 {
                return Err(SortError::InvertedRange { left, right });
            }
            if left > len {
                return Err(SortError::RangeOutOfBounds { left, right, len });
            }
            return Ok(());
        }
        if right >= len {
            return Err(SortError::RangeOutOfBounds { left, right, len });
        }

        T::dispatch(
            seq,
            left,
            right + 1,
            workspace,
            &self.config,
            &mut self.observer,
        )
    }
}

pub fn sort<T: Element>(seq: &mut [T]) {
    Sorter::new().sort(seq);
}

pub fn sort_range<T: Element>(seq: &mut [T], left: usize, right: usize) {
    Sorter::new().sort_range(seq, left, right);
}

pub fn sort_range_with_workspace<T: Element>(
    seq: &mut [T],
    left: usize,
    right: usize,
    workspace: Option<Workspace<'_, T>>,
) {
    Sorter::new().sort_range_with_workspace(seq, left, right, workspace);
}

pub fn try_sort_range<T: Element>(
    seq: &mut [T],
    left: usize,
    right: usize,
    workspace: Option<Workspace<'_, T>>,
) -> Result<(), SortError> {
    Sorter::new().try_sort_range(seq, left, right, workspace)
}
