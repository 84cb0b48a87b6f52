use std::io::BufRead;
use std::str::FromStr;

use anyhow::bail;
use lazy_static::lazy_static;
use regex::Regex;

use crate::libs::gene::Gene;

lazy_static! {
    // Prodigal headers carry `# start # end #` among the `#`-delimited fields
    static ref RE_DELIMITED: Regex = Regex::new(r"# (\d+) # (\d+) #").unwrap();
}

//----------------------------
// CallerFormat
//----------------------------
/// Header conventions of the supported gene callers.
///
/// Each variant is a strategy for recovering `(start, end)` from one marker
/// line. Adding a caller means adding a variant and one `extract` arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerFormat {
    /// `>orf00001 100 300 ...` - coordinates at token positions 2 and 3
    Glimmer,
    /// `>seq_1 # 337 # 2799 # 1 # ID=...` - `#`-delimited fields
    Prodigal,
}

impl FromStr for CallerFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "glimmer" => Ok(Self::Glimmer),
            "prodigal" => Ok(Self::Prodigal),
            _ => bail!("unknown caller format: {}", s),
        }
    }
}

impl CallerFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Glimmer => "glimmer",
            Self::Prodigal => "prodigal",
        }
    }

    /// Extracts raw `(start, end)` from one header line.
    ///
    /// Returns `None` when the line carries no parsable coordinates; that is
    /// a per-record condition, never an error. The pair is returned as
    /// written by the caller, unordered.
    ///
    /// ```
    /// # use gpc::libs::caller::CallerFormat;
    /// let fmt = CallerFormat::Glimmer;
    /// assert_eq!(fmt.extract(">orf00001 100 300"), Some((100, 300)));
    /// assert_eq!(fmt.extract(">orf00001"), None);
    ///
    /// let fmt = CallerFormat::Prodigal;
    /// assert_eq!(fmt.extract(">s_1 # 337 # 2799 # 1 # ID=1_1"), Some((337, 2799)));
    /// assert_eq!(fmt.extract(">s_1 noise"), None);
    /// ```
    pub fn extract(&self, line: &str) -> Option<(i64, i64)> {
        match self {
            Self::Glimmer => {
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() < 3 {
                    return None;
                }
                let a = fields[1].parse::<i64>().ok()?;
                let b = fields[2].parse::<i64>().ok()?;
                Some((a, b))
            }
            Self::Prodigal => {
                let caps = RE_DELIMITED.captures(line)?;
                let a = caps[1].parse::<i64>().ok()?;
                let b = caps[2].parse::<i64>().ok()?;
                Some((a, b))
            }
        }
    }
}

//----------------------------
// Block parsing
//----------------------------
/// Collects the concatenated sequence of every `>`-delimited block.
///
/// Lines before the first marker are ignored. The block still open at end of
/// input is flushed; without that, the last gene of every file would be lost.
/// Empty input yields an empty vector.
pub fn parse_sequences<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut seqs = vec![];
    let mut cur = String::new();
    let mut in_record = false;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            if in_record && !cur.is_empty() {
                seqs.push(std::mem::take(&mut cur));
            }
            cur.clear();
            in_record = true;
        } else if in_record {
            cur.push_str(line.trim());
        }
    }
    if in_record && !cur.is_empty() {
        seqs.push(cur);
    }

    Ok(seqs)
}

/// Parses caller output into canonical genes, pairing each header's
/// coordinates with the sequence lines of its block.
///
/// A header that yields no coordinates skips the whole record: no gene is
/// emitted and its sequence lines are discarded rather than glued onto the
/// previous gene. Prior records are never affected.
pub fn parse_genes<R: BufRead>(reader: R, format: CallerFormat) -> anyhow::Result<Vec<Gene>> {
    let mut genes = vec![];
    let mut coords: Option<(i64, i64)> = None;
    let mut seq = String::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            if let Some((a, b)) = coords.take() {
                genes.push(Gene::new(a, b, std::mem::take(&mut seq)));
            }
            seq.clear();
            coords = format.extract(&line);
        } else if coords.is_some() {
            seq.push_str(line.trim());
        }
    }
    if let Some((a, b)) = coords {
        genes.push(Gene::new(a, b, seq));
    }

    Ok(genes)
}
