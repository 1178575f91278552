use log::trace;

use crate::{DecisionPoint, FloatKey, Observer, SortConfig, SortError, Workspace};

use super::dispatch;

/// Sorts `seq[lo..hi]` in the floating total order: NaNs last, `-0.0` before `0.0`.
pub fn sort<T: FloatKey, O: Observer + ?Sized>(
    seq: &mut [T],
    lo: usize,
    hi: usize,
    workspace: Option<Workspace<'_, T>>,
    config: &SortConfig,
    observer: &mut O,
) -> Result<(), SortError> {
    let end = move_nans_to_tail(seq, lo, hi);
    if end < hi {
        trace!("moved {} NaNs to the tail", hi - end);
        observer.observe(DecisionPoint::NanRelocation);
    }

    dispatch::sort_general(seq, lo, end, workspace, config, observer)?;

    if order_signed_zeros(seq, lo, end) {
        observer.observe(DecisionPoint::ZeroSignFixup);
    }
    Ok(())
}

fn move_nans_to_tail<T: FloatKey>(seq: &mut [T], lo: usize, mut hi: usize) -> usize {
    while hi > lo && seq[hi - 1].is_nan() {
        hi -= 1;
    }
    if hi == lo {
        return hi;
    }

    let mut k = hi - 1;
    while k > lo {
        k -= 1;
        let ak = seq[k];
        if ak.is_nan() {
            seq[k] = seq[hi - 1];
            seq[hi - 1] = ak;
            hi -= 1;
        }
    }
    hi
}

/// Moves negative zeros in front of positive ones in the sorted, NaN-free
/// `seq[lo..hi]`. Returns whether anything moved.
fn order_signed_zeros<T: FloatKey>(seq: &mut [T], lo: usize, hi: usize) -> bool {
    if hi == lo {
        return false;
    }
    let right = hi - 1;

    // First element >= 0.0, or the last one if all are negative.
    let mut left = lo;
    let mut upper = right;
    while left < upper {
        let middle = left + ((upper - left) >> 1);
        if seq[middle] < T::ZERO {
            left = middle + 1;
        } else {
            upper = middle;
        }
    }

    // Skip the last negative value, or negative zeros already in front.
    while left < hi && seq[left].has_sign_bit() {
        left += 1;
    }

    let mut moved = false;
    let mut next = left;
    for k in (left + 1)..hi {
        let ak = seq[k];
        if ak != T::ZERO {
            break;
        }
        if ak.has_sign_bit() {
            seq[k] = T::ZERO;
            seq[next] = T::NEG_ZERO;
            next += 1;
            moved = true;
        }
    }
    moved
}
