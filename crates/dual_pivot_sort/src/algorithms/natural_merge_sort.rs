use log::debug;

use crate::{
    DecisionPoint, MAX_RUN_COUNT_LIMIT, Observer, SortConfig, SortError, SortKey, Workspace,
};

use super::dual_pivot_quick_sort;

// Run starts plus the terminator.
type RunTable = [usize; MAX_RUN_COUNT_LIMIT + 1];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Side {
    Sequence,
    Scratch,
}

impl Side {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Self::Sequence => Self::Scratch,
            Self::Scratch => Self::Sequence,
        }
    }
}

/// Sorts `seq[lo..hi]` by merging its existing monotone runs, or hands the range to
/// the partitioner when it has too many of them.
pub fn sort<T: SortKey, O: Observer + ?Sized>(
    seq: &mut [T],
    lo: usize,
    hi: usize,
    workspace: Option<Workspace<'_, T>>,
    config: &SortConfig,
    observer: &mut O,
) -> Result<(), SortError> {
    debug_assert!(hi - lo >= 2);
    observer.observe(DecisionPoint::RunScan);

    let mut run: RunTable = [0; MAX_RUN_COUNT_LIMIT + 1];
    let Some(mut count) = collect_runs(seq, lo, hi, config.max_run_count, &mut run) else {
        debug!(
            "{} or more runs in {} elements, falling back to partitioning",
            config.max_run_count,
            hi - lo
        );
        observer.observe(DecisionPoint::TooManyRuns);
        dual_pivot_quick_sort::sort(seq, lo, hi, true, config, observer);
        return Ok(());
    };

    if count == 0 || (count == 1 && run[1] >= hi) {
        observer.observe(DecisionPoint::AlreadySorted);
        return Ok(());
    }

    // A trailing run of equal elements or a lone last element is not yet terminated.
    if run[count] < hi {
        count += 1;
        run[count] = hi;
    }

    observer.observe(DecisionPoint::MergeRuns);
    for start in run.iter_mut().take(count + 1) {
        *start -= lo;
    }

    let region = &mut seq[lo..hi];
    let len = region.len();
    let mut owned;
    let scratch = match workspace.and_then(|ws| ws.take(len)) {
        Some(scratch) => scratch,
        None => {
            debug!("allocating merge scratch for {len} elements");
            owned = Vec::new();
            owned.try_reserve_exact(len)?;
            owned.resize(len, region[0]);
            &mut owned[..]
        }
    };

    // Pick the starting side so that the last pass writes into the sequence.
    let mut odd = false;
    let mut n = 1_usize;
    loop {
        n <<= 1;
        if n >= count {
            break;
        }
        odd = !odd;
    }
    let mut source = if odd {
        Side::Sequence
    } else {
        scratch.copy_from_slice(region);
        Side::Scratch
    };

    while count > 1 {
        count = match source {
            Side::Sequence => merge_pass(region, scratch, &mut run, count),
            Side::Scratch => merge_pass(scratch, region, &mut run, count),
        };
        source = source.flip();
    }
    debug_assert_eq!(source, Side::Sequence);

    Ok(())
}

/// Returns `None` once `max_runs` runs have been seen.
///
/// Equal elements never start a new run, and a run that continues its predecessor
/// after reversal is merged into it.
fn collect_runs<T: SortKey>(
    seq: &mut [T],
    lo: usize,
    hi: usize,
    max_runs: usize,
    run: &mut RunTable,
) -> Option<usize> {
    let right = hi - 1;
    let mut count = 0_usize;
    run[0] = lo;

    let mut k = lo;
    while k < right {
        while k < right && seq[k] == seq[k + 1] {
            k += 1;
        }
        if k == right {
            break;
        }

        if seq[k] > seq[k + 1] {
            k += 1;
            while k <= right && seq[k - 1] >= seq[k] {
                k += 1;
            }
            seq[run[count]..k].reverse();
        } else {
            k += 1;
            while k <= right && seq[k - 1] <= seq[k] {
                k += 1;
            }
        }

        if run[count] > lo && seq[run[count]] >= seq[run[count] - 1] {
            count -= 1;
        }

        count += 1;
        if count == max_runs {
            return None;
        }
        run[count] = k;
    }

    Some(count)
}

fn merge_pass<T: SortKey>(src: &[T], dst: &mut [T], run: &mut RunTable, count: usize) -> usize {
    let mut last = 0_usize;
    let mut k = 2;
    while k <= count {
        let (start, mid, end) = (run[k - 2], run[k - 1], run[k]);
        merge_two_runs(&src[start..mid], &src[mid..end], &mut dst[start..end]);
        last += 1;
        run[last] = end;
        k += 2;
    }
    if count & 1 != 0 {
        let (start, end) = (run[count - 1], run[count]);
        dst[start..end].copy_from_slice(&src[start..end]);
        last += 1;
        run[last] = end;
    }
    last
}

#[inline]
fn merge_two_runs<T: SortKey>(left: &[T], right: &[T], dst: &mut [T]) {
    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            dst[k] = left[i];
            i += 1;
        } else {
            dst[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    if i < left.len() {
        dst[k..].copy_from_slice(&left[i..]);
    } else if j < right.len() {
        dst[k..].copy_from_slice(&right[j..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_CONFIG;

    fn runs_of(seq: &mut [i32]) -> Option<Vec<usize>> {
        let mut run = [0; MAX_RUN_COUNT_LIMIT + 1];
        let hi = seq.len();
        collect_runs(seq, 0, hi, DEFAULT_CONFIG.max_run_count, &mut run)
            .map(|count| run[..=count].to_vec())
    }

    #[test]
    fn ascending_run_is_one_run() {
        let mut seq = [1, 2, 2, 3, 5, 8];
        assert_eq!(runs_of(&mut seq), Some(vec![0, 6]));
    }

    #[test]
    fn descending_run_is_reversed() {
        let mut seq = [5, 4, 3, 2, 1];
        assert_eq!(runs_of(&mut seq), Some(vec![0, 5]));
        assert_eq!(seq, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn equal_prefix_and_tail() {
        let mut seq = [4, 4, 4, 4];
        assert_eq!(runs_of(&mut seq), Some(vec![0]));

        // The trailing equal run is left unterminated.
        let mut seq = [1, 2, 3, 0, 0, 0];
        assert_eq!(runs_of(&mut seq), Some(vec![0, 3]));
    }

    #[test]
    fn reversed_run_joins_predecessor() {
        // 3 2 1 | 9 8 7: the second reversed run continues the first one.
        let mut seq = [3, 2, 1, 9, 8, 7];
        assert_eq!(runs_of(&mut seq), Some(vec![0, 6]));
        assert_eq!(seq, [1, 2, 3, 7, 8, 9]);

        let mut seq = [1, 2, 3, 9, 8, 7];
        assert_eq!(runs_of(&mut seq), Some(vec![0, 4, 6]));
        assert_eq!(seq, [1, 2, 3, 9, 7, 8]);
    }

    #[test]
    fn too_many_runs() {
        let mut seq: Vec<i32> = (0..1000).map(|i| i % 10).collect();
        assert_eq!(runs_of(&mut seq), None);

        let mut seq: Vec<i32> = (0..660).map(|i| i % 10).collect();
        assert_eq!(runs_of(&mut seq).map(|runs| runs.len()), Some(67));
    }

    #[test]
    fn merges_through_owned_scratch() {
        // Two, three and five runs: both starting sides of the ping-pong.
        for runs in [2_i32, 3, 5] {
            let mut seq: Vec<i32> = (0..runs)
                .flat_map(|r| (0..40).map(move |i| i * 7 + r))
                .collect();
            let mut expected = seq.clone();
            expected.sort_unstable();
            let mut points = Vec::new();
            let hi = seq.len();
            sort(&mut seq, 0, hi, None, &DEFAULT_CONFIG, &mut points).unwrap();
            assert_eq!(seq, expected, "runs={runs}");
            assert_eq!(points, vec![DecisionPoint::RunScan, DecisionPoint::MergeRuns]);
        }
    }

    #[test]
    fn merge_pass_pairs_runs() {
        let src = [1, 4, 7, 2, 5, 8, 0, 3, 6, 9, 9];
        let mut dst = [0; 11];
        let mut run = [0; MAX_RUN_COUNT_LIMIT + 1];
        run[..5].copy_from_slice(&[0, 3, 6, 9, 11]);

        let count = merge_pass(&src, &mut dst, &mut run, 4);
        assert_eq!(count, 2);
        assert_eq!(&run[..3], &[0, 6, 11]);
        assert_eq!(dst, [1, 2, 4, 5, 7, 8, 0, 3, 6, 9, 9]);

        let mut odd = [0; 11];
        run[..4].copy_from_slice(&[0, 3, 6, 11]);
        let count = merge_pass(&src, &mut odd, &mut run, 3);
        assert_eq!(count, 2);
        assert_eq!(&run[..3], &[0, 6, 11]);
        assert_eq!(&odd[6..], &src[6..]);
    }
}
