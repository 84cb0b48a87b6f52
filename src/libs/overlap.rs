use crate::libs::gene::Gene;

/// Overlapping bases between two spans, `max(0, min(ends) - max(starts))`.
///
/// Touching spans overlap by zero; only a strictly positive intersection
/// counts.
///
/// ```
/// # use gpc::libs::overlap::overlap_len;
/// assert_eq!(overlap_len((10, 20), (15, 25)), 5);
/// assert_eq!(overlap_len((10, 20), (20, 30)), 0);
/// assert_eq!(overlap_len((10, 20), (30, 40)), 0);
/// ```
pub fn overlap_len(a: (i64, i64), b: (i64, i64)) -> i64 {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    (end - start).max(0)
}

//----------------------------
// OverlapResult
//----------------------------
/// Cross-tool overlap accounting between a reference and a query collection.
///
/// `intersected_bases` sums `overlap_len` over every reference/query pair.
/// Contributions are NOT deduplicated: three reference genes covering the
/// same query gene count three times. The containment ratio is asymmetric,
/// with the query collection as the denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapResult {
    pub intersected_bases: i64,
    pub query_bases: i64,
}

impl OverlapResult {
    /// Share of the query collection's bases intersected by the reference,
    /// as a percentage. Zero when the query collection is empty.
    pub fn containment_pct(&self) -> f64 {
        if self.query_bases == 0 {
            0.0
        } else {
            self.intersected_bases as f64 / self.query_bases as f64 * 100.0
        }
    }
}

/// Pairwise overlap scan between two gene collections.
///
/// O(|reference| * |query|); fine at single-genome scale.
///
/// ```
/// # use gpc::libs::gene::Gene;
/// # use gpc::libs::overlap::pairwise;
/// let reference = vec![Gene::new(10, 20, String::new())];
/// let query = vec![Gene::new(15, 25, String::new())];
/// let result = pairwise(&reference, &query);
/// assert_eq!(result.intersected_bases, 5);
/// assert_eq!(result.query_bases, 10);
/// assert_eq!(result.containment_pct(), 50.0);
/// ```
pub fn pairwise(reference: &[Gene], query: &[Gene]) -> OverlapResult {
    let query_bases: i64 = query.iter().map(|g| g.span()).sum();

    let mut intersected_bases = 0;
    for r in reference {
        for q in query {
            intersected_bases += overlap_len((r.start, r.end), (q.start, q.end));
        }
    }

    OverlapResult {
        intersected_bases,
        query_bases,
    }
}
