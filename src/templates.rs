//! Template records extracted from observed alignments.

/// A single-end template exposing its reference length.
pub trait UnpairedRecord {
    /// Number of reference bases spanned by the alignment.
    fn ref_len(&self) -> usize;
}

/// A paired-end template exposing the fragment length spanned by both mates.
pub trait PairedRecord {
    fn fragment_len(&self) -> usize;
}

/// Template built from an unpaired alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpairedTemplate {
    pub name: String,
    pub ref_len: usize,
    /// Alignment score (`AS:i`), if the aligner reported one
    pub score: Option<i64>,
}

impl UnpairedRecord for UnpairedTemplate {
    fn ref_len(&self) -> usize {
        self.ref_len
    }
}

/// One end of a paired template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mate {
    pub ref_len: usize,
    pub score: Option<i64>,
}

/// Template built from a concordant pair of alignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedTemplate {
    pub name: String,
    pub fragment_len: usize,
    /// First segment of the pair
    pub mate1: Mate,
    /// Last segment of the pair
    pub mate2: Mate,
}

impl PairedTemplate {
    /// Splits the template into its two constituent reads.
    pub fn mates(&self) -> (&Mate, &Mate) {
        (&self.mate1, &self.mate2)
    }

    /// Combined alignment score of both mates, when both were scored.
    pub fn score(&self) -> Option<i64> {
        Some(self.mate1.score? + self.mate2.score?)
    }
}

impl PairedRecord for PairedTemplate {
    fn fragment_len(&self) -> usize {
        self.fragment_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(score1: Option<i64>, score2: Option<i64>) -> PairedTemplate {
        PairedTemplate {
            name: "pair1".to_string(),
            fragment_len: 300,
            mate1: Mate { ref_len: 100, score: score1 },
            mate2: Mate { ref_len: 90, score: score2 },
        }
    }

    #[test]
    fn test_paired_score_sums_mates() {
        assert_eq!(pair(Some(-4), Some(-10)).score(), Some(-14));
        assert_eq!(pair(Some(-4), None).score(), None);
    }

    #[test]
    fn test_mates_decomposition() {
        let template = pair(None, None);
        let (mate1, mate2) = template.mates();
        assert_eq!(mate1.ref_len, 100);
        assert_eq!(mate2.ref_len, 90);
        assert_eq!(template.fragment_len(), 300);
    }
}
