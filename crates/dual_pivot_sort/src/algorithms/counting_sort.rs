use crate::{BoundedKey, SortError};

pub fn sort<T: BoundedKey>(data: &mut [T]) -> Result<(), SortError> {
    let mut counts: Vec<usize> = Vec::new();
    counts.try_reserve_exact(T::DOMAIN)?;
    counts.resize(T::DOMAIN, 0);

    for &x in data.iter() {
        counts[x.rank()] += 1;
    }

    // Rewrite from the largest value down.
    let mut end = data.len();
    for (rank, &count) in counts.iter().enumerate().rev() {
        if count == 0 {
            continue;
        }
        data[(end - count)..end].fill(T::from_rank(rank));
        end -= count;
        if end == 0 {
            break;
        }
    }
    debug_assert_eq!(end, 0);

    Ok(())
}
