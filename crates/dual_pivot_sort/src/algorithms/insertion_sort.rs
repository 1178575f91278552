use crate::SortKey;

#[inline]
pub fn insertion_sort<T: SortKey>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            let prev = data[j - 1];
            if key >= prev {
                break;
            }
            data[j] = prev;
            j -= 1;
        }
        data[j] = key;
    }
}

/// `seq[lo - 1]` must exist and be `<=` every element of the range: it stops every
/// backward scan, so no lower-bound check is needed.
pub fn pair_insertion_sort<T: SortKey>(seq: &mut [T], lo: usize, hi: usize) {
    debug_assert!(lo > 0 && lo <= hi && hi <= seq.len());
    if hi - lo < 2 {
        return;
    }
    let right = hi - 1;
    let mut left = lo;

    // Skip the ascending prefix.
    loop {
        if left >= right {
            return;
        }
        left += 1;
        if seq[left] < seq[left - 1] {
            break;
        }
    }

    // Two elements per step: the larger one is inserted first, the smaller one
    // continues from where the larger one stopped.
    let mut k = left;
    left += 1;
    while left <= right {
        let mut a1 = seq[k];
        let mut a2 = seq[left];
        if a1 < a2 {
            a2 = a1;
            a1 = seq[left];
        }

        loop {
            k -= 1;
            if a1 >= seq[k] {
                break;
            }
            seq[k + 2] = seq[k];
        }
        k += 1;
        seq[k + 1] = a1;

        loop {
            k -= 1;
            if a2 >= seq[k] {
                break;
            }
            seq[k + 1] = seq[k];
        }
        seq[k + 1] = a2;

        left += 1;
        k = left;
        left += 1;
    }

    // Odd element out; a no-op when the last pair already covered it.
    let last = seq[right];
    let mut r = right;
    loop {
        r -= 1;
        if last >= seq[r] {
            break;
        }
        seq[r + 1] = seq[r];
    }
    seq[r + 1] = last;
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn insertion_sort_small_cases() {
        let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
        insertion_sort(&mut data);
        assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);

        let mut empty: [i32; 0] = [];
        insertion_sort(&mut empty);

        let mut desc = [9.5, 3.0, -1.0, -7.25];
        insertion_sort(&mut desc);
        assert_eq!(desc, [-7.25, -1.0, 3.0, 9.5]);
    }

    #[test]
    fn pair_insertion_sort_uses_left_sentinel() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0001);
        for len in 0..48_usize {
            for _ in 0..8 {
                // seq[0] is the sentinel, seq[len + 1] must stay untouched.
                let mut seq = vec![i64::MIN];
                seq.extend((0..len).map(|_| rng.random_range(-20..20_i64)));
                seq.push(i64::MIN);

                let mut expected = seq[1..=len].to_vec();
                expected.sort_unstable();

                pair_insertion_sort(&mut seq, 1, len + 1);
                assert_eq!(&seq[1..=len], &expected[..], "len={len}");
                assert_eq!(seq[0], i64::MIN);
                assert_eq!(seq[len + 1], i64::MIN);
            }
        }
    }

    #[test]
    fn pair_insertion_sort_sentinel_equal_to_minimum() {
        let mut seq = [2, 5, 2, 4, 3, 2, 2, 9];
        pair_insertion_sort(&mut seq, 1, 8);
        assert_eq!(seq, [2, 2, 2, 2, 3, 4, 5, 9]);
    }
}
