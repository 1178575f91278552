use log::trace;

use crate::{BoundedKey, DecisionPoint, Observer, SortConfig, SortError, SortKey, Workspace};

use super::{counting_sort, dual_pivot_quick_sort, insertion_sort, natural_merge_sort};

pub fn sort_general<T: SortKey, O: Observer + ?Sized>(
    seq: &mut [T],
    lo: usize,
    hi: usize,
    workspace: Option<Workspace<'_, T>>,
    config: &SortConfig,
    observer: &mut O,
) -> Result<(), SortError> {
    if hi - lo < 2 {
        return Ok(());
    }

    if hi - 1 - lo < config.quicksort_threshold {
        trace!("partitioning {} elements directly", hi - lo);
        observer.observe(DecisionPoint::SmallRange);
        dual_pivot_quick_sort::sort(seq, lo, hi, true, config, observer);
        return Ok(());
    }

    trace!("scanning {} elements for runs", hi - lo);
    natural_merge_sort::sort(seq, lo, hi, workspace, config, observer)
}

// 8-bit kinds fall back to plain insertion sort, 16-bit kinds to `sort_general`.
pub fn sort_bounded<T: BoundedKey, O: Observer + ?Sized>(
    seq: &mut [T],
    lo: usize,
    hi: usize,
    workspace: Option<Workspace<'_, T>>,
    config: &SortConfig,
    observer: &mut O,
) -> Result<(), SortError> {
    let len = hi - lo;
    if len < 2 {
        return Ok(());
    }

    let byte_sized = T::DOMAIN_BITS <= 8;
    let threshold = if byte_sized {
        config.counting_sort_threshold_byte
    } else {
        config.counting_sort_threshold_short
    };

    if len > threshold {
        trace!("counting sort over {len} elements, domain {}", T::DOMAIN);
        observer.observe(DecisionPoint::CountingSort);
        return counting_sort::sort(&mut seq[lo..hi]);
    }

    if byte_sized {
        observer.observe(DecisionPoint::BoundedInsertionSort);
        insertion_sort::insertion_sort(&mut seq[lo..hi]);
        return Ok(());
    }

    sort_general(seq, lo, hi, workspace, config, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_CONFIG;

    fn points_for<T: BoundedKey>(seq: &mut [T]) -> Vec<DecisionPoint> {
        let mut points = Vec::new();
        let hi = seq.len();
        sort_bounded(seq, 0, hi, None, &DEFAULT_CONFIG, &mut points).unwrap();
        points
    }

    #[test]
    fn byte_threshold() {
        let mut short: Vec<i8> = (0..29).rev().collect();
        assert_eq!(points_for(&mut short), vec![DecisionPoint::BoundedInsertionSort]);
        assert!(short.windows(2).all(|w| w[0] <= w[1]));

        let mut long: Vec<i8> = (0..30).rev().collect();
        assert_eq!(points_for(&mut long), vec![DecisionPoint::CountingSort]);
        assert!(long.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn short_threshold() {
        let mut at: Vec<u16> = (0..3200).rev().collect();
        let points = points_for(&mut at);
        assert_eq!(points[0], DecisionPoint::RunScan);
        assert!(!points.contains(&DecisionPoint::CountingSort));
        assert!(at.windows(2).all(|w| w[0] <= w[1]));

        let mut above: Vec<u16> = (0..3201).rev().collect();
        assert_eq!(points_for(&mut above), vec![DecisionPoint::CountingSort]);
        assert!(above.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn quicksort_threshold() {
        let mut points = Vec::new();
        let mut below: Vec<i32> = (0..286).rev().collect();
        sort_general(&mut below, 0, 286, None, &DEFAULT_CONFIG, &mut points).unwrap();
        assert_eq!(points[0], DecisionPoint::SmallRange);
        assert!(below.windows(2).all(|w| w[0] <= w[1]));

        points.clear();
        let mut at: Vec<i32> = (0..287).rev().collect();
        sort_general(&mut at, 0, 287, None, &DEFAULT_CONFIG, &mut points).unwrap();
        assert_eq!(
            points,
            vec![DecisionPoint::RunScan, DecisionPoint::AlreadySorted]
        );
        assert!(at.windows(2).all(|w| w[0] <= w[1]));
    }
}
