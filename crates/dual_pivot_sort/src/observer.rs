#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DecisionPoint {
    /// Range too short for run detection; partitioned directly.
    SmallRange,
    CountingSort,
    /// 8-bit range too short for the histogram.
    BoundedInsertionSort,
    RunScan,
    /// Run cap reached, run detection abandoned.
    TooManyRuns,
    AlreadySorted,
    MergeRuns,
    LeftmostInsertionSort,
    PairInsertionSort,
    DualPivotPartition,
    /// Oversized center part split by pivot equality.
    CenterRepartition,
    SinglePivotPartition,
    NanRelocation,
    ZeroSignFixup,
}

pub const ALL_DECISION_POINTS: [DecisionPoint; 14] = [
    DecisionPoint::SmallRange,
    DecisionPoint::CountingSort,
    DecisionPoint::BoundedInsertionSort,
    DecisionPoint::RunScan,
    DecisionPoint::TooManyRuns,
    DecisionPoint::AlreadySorted,
    DecisionPoint::MergeRuns,
    DecisionPoint::LeftmostInsertionSort,
    DecisionPoint::PairInsertionSort,
    DecisionPoint::DualPivotPartition,
    DecisionPoint::CenterRepartition,
    DecisionPoint::SinglePivotPartition,
    DecisionPoint::NanRelocation,
    DecisionPoint::ZeroSignFixup,
];

pub fn all_decision_points() -> &'static [DecisionPoint] {
    &ALL_DECISION_POINTS
}

pub fn decision_point_name(point: DecisionPoint) -> &'static str {
    match point {
        DecisionPoint::SmallRange => "small_range",
        DecisionPoint::CountingSort => "counting_sort",
        DecisionPoint::BoundedInsertionSort => "bounded_insertion_sort",
        DecisionPoint::RunScan => "run_scan",
        DecisionPoint::TooManyRuns => "too_many_runs",
        DecisionPoint::AlreadySorted => "already_sorted",
        DecisionPoint::MergeRuns => "merge_runs",
        DecisionPoint::LeftmostInsertionSort => "leftmost_insertion_sort",
        DecisionPoint::PairInsertionSort => "pair_insertion_sort",
        DecisionPoint::DualPivotPartition => "dual_pivot_partition",
        DecisionPoint::CenterRepartition => "center_repartition",
        DecisionPoint::SinglePivotPartition => "single_pivot_partition",
        DecisionPoint::NanRelocation => "nan_relocation",
        DecisionPoint::ZeroSignFixup => "zero_sign_fixup",
    }
}

/// Receives the branch taken at each [`DecisionPoint`].
///
/// Observers see the control flow only; they cannot influence the result.
pub trait Observer {
    #[inline]
    fn observe(&mut self, point: DecisionPoint) {
        let _ = point;
    }
}

impl Observer for () {}

impl Observer for Vec<DecisionPoint> {
    #[inline]
    fn observe(&mut self, point: DecisionPoint) {
        self.push(point);
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    #[inline]
    fn observe(&mut self, point: DecisionPoint) {
        (**self).observe(point);
    }
}
