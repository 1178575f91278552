pub(crate) mod counting_sort;
pub(crate) mod dispatch;
pub(crate) mod dual_pivot_quick_sort;
pub(crate) mod float_normalizer;
pub(crate) mod insertion_sort;
pub(crate) mod natural_merge_sort;
