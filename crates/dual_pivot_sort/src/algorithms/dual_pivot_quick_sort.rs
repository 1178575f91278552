use crate::{DecisionPoint, Observer, SortConfig, SortKey};

use super::insertion_sort;

/// Sorts `seq[lo..hi]` by dual-pivot quicksort.
///
/// `leftmost == false` promises that `seq[lo - 1]` is `<=` every element of the
/// range; the tiny-range insertion sort relies on it as a sentinel.
///
/// The two smaller parts of every partition are sorted recursively and the largest
/// one is continued in place, so the call depth stays below `log2(len)`.
pub fn sort<T: SortKey, O: Observer + ?Sized>(
    seq: &mut [T],
    mut lo: usize,
    mut hi: usize,
    mut leftmost: bool,
    config: &SortConfig,
    observer: &mut O,
) {
    loop {
        let len = hi - lo;
        if len < config.insertion_sort_threshold {
            if leftmost {
                observer.observe(DecisionPoint::LeftmostInsertionSort);
                insertion_sort::insertion_sort(&mut seq[lo..hi]);
            } else {
                observer.observe(DecisionPoint::PairInsertionSort);
                insertion_sort::pair_insertion_sort(seq, lo, hi);
            }
            return;
        }

        let samples = sample_positions(lo, len);
        sort_samples(seq, &samples);
        let [e1, e2, e3, e4, e5] = samples;

        let parts = if seq[e1] != seq[e2]
            && seq[e2] != seq[e3]
            && seq[e3] != seq[e4]
            && seq[e4] != seq[e5]
        {
            observer.observe(DecisionPoint::DualPivotPartition);
            partition_dual(seq, lo, hi, leftmost, &samples, observer)
        } else {
            observer.observe(DecisionPoint::SinglePivotPartition);
            let [left, right] = partition_single(seq, lo, hi, leftmost, e3);
            // The center holds only pivot copies.
            [left, (hi, hi, false), right]
        };

        let mut largest = 0;
        for i in 1..parts.len() {
            if parts[i].1 - parts[i].0 > parts[largest].1 - parts[largest].0 {
                largest = i;
            }
        }
        for (i, &(start, end, part_leftmost)) in parts.iter().enumerate() {
            if i != largest && start < end {
                sort(seq, start, end, part_leftmost, config, observer);
            }
        }
        (lo, hi, leftmost) = parts[largest];
        if lo >= hi {
            return;
        }
    }
}

#[inline]
fn sample_positions(lo: usize, len: usize) -> [usize; 5] {
    let seventh = (len >> 3) + (len >> 6) + 1;
    let e3 = lo + ((len - 1) >> 1);
    let e2 = e3 - seventh;
    let e1 = e2 - seventh;
    let e4 = e3 + seventh;
    let e5 = e4 + seventh;
    [e1, e2, e3, e4, e5]
}

#[inline]
fn sort_samples<T: SortKey>(seq: &mut [T], samples: &[usize; 5]) {
    for i in 1..samples.len() {
        let t = seq[samples[i]];
        let mut j = i;
        while j > 0 && t < seq[samples[j - 1]] {
            seq[samples[j]] = seq[samples[j - 1]];
            j -= 1;
        }
        seq[samples[j]] = t;
    }
}

type Part = (usize, usize, bool);

/// Three-region partition around the 2nd and 4th samples.
///
/// ```text
///   left part           center part                   right part
/// +--------------------------------------------------------------+
/// |  < pivot1  |  pivot1 <= && <= pivot2  |    ?    |  > pivot2  |
/// +--------------------------------------------------------------+
///               ^                          ^       ^
///              less                        k     great
/// ```
fn partition_dual<T: SortKey, O: Observer + ?Sized>(
    seq: &mut [T],
    lo: usize,
    hi: usize,
    leftmost: bool,
    samples: &[usize; 5],
    observer: &mut O,
) -> [Part; 3] {
    let [e1, e2, _, e4, e5] = *samples;
    let right = hi - 1;

    let pivot1 = seq[e2];
    let pivot2 = seq[e4];

    // The ends take the pivot slots; the pivots come back once partitioning is done.
    seq[e2] = seq[lo];
    seq[e4] = seq[right];

    // The third sample stops both scans.
    let mut less = lo + 1;
    while seq[less] < pivot1 {
        less += 1;
    }
    let mut great = right - 1;
    while seq[great] > pivot2 {
        great -= 1;
    }

    let mut k = less;
    'outer: while k <= great {
        let ak = seq[k];
        if ak < pivot1 {
            seq[k] = seq[less];
            seq[less] = ak;
            less += 1;
        } else if ak > pivot2 {
            while seq[great] > pivot2 {
                if great == k {
                    great -= 1;
                    break 'outer;
                }
                great -= 1;
            }
            if seq[great] < pivot1 {
                seq[k] = seq[less];
                seq[less] = seq[great];
                less += 1;
            } else {
                seq[k] = seq[great];
            }
            seq[great] = ak;
            great -= 1;
        }
        k += 1;
    }

    seq[lo] = seq[less - 1];
    seq[less - 1] = pivot1;
    seq[right] = seq[great + 1];
    seq[great + 1] = pivot2;

    let left = (lo, less - 1, leftmost);
    let right_part = (great + 2, hi, false);

    // Center part spans more than 4/7 of the range: peel off the pivot copies.
    if less < e1 && e5 < great {
        observer.observe(DecisionPoint::CenterRepartition);
        (less, great) = repartition_center(seq, less, great, pivot1, pivot2);
    }

    [left, (less, great + 1, false), right_part]
}

/// Values are copied from where they were observed rather than from the pivots:
/// `-0.0 == 0.0` but they must not be confused.
fn repartition_center<T: SortKey>(
    seq: &mut [T],
    mut less: usize,
    mut great: usize,
    pivot1: T,
    pivot2: T,
) -> (usize, usize) {
    while seq[less] == pivot1 {
        less += 1;
    }
    while seq[great] == pivot2 {
        great -= 1;
    }

    let mut k = less;
    'outer: while k <= great {
        let ak = seq[k];
        if ak == pivot1 {
            seq[k] = seq[less];
            seq[less] = ak;
            less += 1;
        } else if ak == pivot2 {
            while seq[great] == pivot2 {
                if great == k {
                    great -= 1;
                    break 'outer;
                }
                great -= 1;
            }
            if seq[great] == pivot1 {
                seq[k] = seq[less];
                seq[less] = seq[great];
                less += 1;
            } else {
                seq[k] = seq[great];
            }
            seq[great] = ak;
            great -= 1;
        }
        k += 1;
    }

    (less, great)
}

// `gt` is one past the last unscanned element.
fn partition_single<T: SortKey>(
    seq: &mut [T],
    lo: usize,
    hi: usize,
    leftmost: bool,
    e3: usize,
) -> [Part; 2] {
    let pivot = seq[e3];
    let mut less = lo;
    let mut gt = hi;

    let mut k = lo;
    while k < gt {
        let ak = seq[k];
        if ak == pivot {
            k += 1;
            continue;
        }
        if ak < pivot {
            seq[k] = seq[less];
            seq[less] = ak;
            less += 1;
        } else {
            while seq[gt - 1] > pivot {
                gt -= 1;
            }
            if seq[gt - 1] < pivot {
                seq[k] = seq[less];
                seq[less] = seq[gt - 1];
                less += 1;
            } else {
                seq[k] = seq[gt - 1];
            }
            seq[gt - 1] = ak;
            gt -= 1;
        }
        k += 1;
    }

    [(lo, less, leftmost), (gt, hi, false)]
}
