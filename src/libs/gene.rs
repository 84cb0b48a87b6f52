use serde::{Deserialize, Serialize};

//----------------------------
// Gene
//----------------------------
/// One predicted gene: a genomic span in 1-based inclusive coordinates plus
/// the nucleotide sequence reported by the caller.
///
/// `sequence` may be empty for coordinates-only records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub start: i64,
    pub end: i64,
    pub sequence: String,
}

impl Gene {
    /// Builds a gene from raw caller coordinates, swapping a reversed pair
    /// so that `start <= end` always holds. Strand is discarded.
    ///
    /// ```
    /// # use gpc::libs::gene::Gene;
    /// let gene = Gene::new(450, 380, "ATG".to_string());
    /// assert_eq!(gene.start, 380);
    /// assert_eq!(gene.end, 450);
    /// ```
    pub fn new(a: i64, b: i64, sequence: String) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
            sequence,
        }
    }

    /// Span length as counted by the overlap engine, `end - start`.
    ///
    /// ```
    /// # use gpc::libs::gene::Gene;
    /// let gene = Gene::new(15, 25, String::new());
    /// assert_eq!(gene.span(), 10);
    /// ```
    pub fn span(&self) -> i64 {
        self.end - self.start
    }
}
