use itertools::Itertools;

//----------------------------
// SeqStats
//----------------------------
/// Descriptive statistics over one caller's predicted gene sequences.
///
/// Lengths count sequence characters, not genomic span. No rounding happens
/// here; formatting belongs to the report layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeqStats {
    pub count: usize,
    pub avg_len: f64,
    pub min_len: usize,
    pub max_len: usize,
    pub total_nt: usize,
    pub gc_content: f64,
}

impl SeqStats {
    /// ```
    /// # use gpc::libs::stats::SeqStats;
    /// let seqs = vec!["ATGC".to_string(), "GGGGCCCC".to_string()];
    /// let stats = SeqStats::from_seqs(&seqs);
    /// assert_eq!(stats.count, 2);
    /// assert_eq!(stats.avg_len, 6.0);
    /// assert_eq!(stats.min_len, 4);
    /// assert_eq!(stats.max_len, 8);
    /// assert_eq!(stats.total_nt, 12);
    /// assert_eq!(stats.gc_content, 10.0 / 12.0 * 100.0);
    /// ```
    pub fn from_seqs(seqs: &[String]) -> Self {
        if seqs.is_empty() {
            // the "no data" sentinel, deliberately not an error
            return Self::default();
        }

        let total_nt: usize = seqs.iter().map(|s| s.len()).sum();
        let (min_len, max_len) = seqs
            .iter()
            .map(|s| s.len())
            .minmax()
            .into_option()
            .unwrap();
        let gc: usize = seqs
            .iter()
            .map(|s| {
                s.bytes()
                    .filter(|b| matches!(b, b'G' | b'C' | b'g' | b'c'))
                    .count()
            })
            .sum();

        Self {
            count: seqs.len(),
            avg_len: total_nt as f64 / seqs.len() as f64,
            min_len,
            max_len,
            total_nt,
            gc_content: if total_nt > 0 {
                gc as f64 / total_nt as f64 * 100.0
            } else {
                0.0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_collection_is_all_zero() {
        let stats = SeqStats::from_seqs(&[]);
        assert_eq!(stats, SeqStats::default());
        assert_eq!(stats.gc_content, 0.0);
    }

    #[test]
    fn avg_is_exact() {
        let seqs = vec!["A".repeat(10), "A".repeat(11), "A".repeat(12)];
        let stats = SeqStats::from_seqs(&seqs);
        assert_eq!(stats.avg_len, 33.0 / 3.0);
        assert_eq!(stats.avg_len * stats.count as f64, stats.total_nt as f64);
    }

    #[test]
    fn gc_bounds() {
        let stats = SeqStats::from_seqs(&["GCGC".to_string()]);
        assert_relative_eq!(stats.gc_content, 100.0);

        let stats = SeqStats::from_seqs(&["ATAT".to_string()]);
        assert_relative_eq!(stats.gc_content, 0.0);

        let stats = SeqStats::from_seqs(&["ATGCNN".to_string()]);
        assert!(stats.gc_content > 0.0 && stats.gc_content < 100.0);
    }

    #[test]
    fn gc_counts_lowercase() {
        let stats = SeqStats::from_seqs(&["atgc".to_string()]);
        assert_relative_eq!(stats.gc_content, 50.0);
    }

    #[test]
    fn coords_only_records() {
        // zero-length sequences still count as genes
        let stats = SeqStats::from_seqs(&[String::new(), "ACGT".to_string()]);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.min_len, 0);
        assert_eq!(stats.total_nt, 4);
    }
}
