//! Template extraction from SAM/BAM alignments.

use crate::templates::{Mate, PairedTemplate, UnpairedTemplate};
use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use noodles::bam;
use noodles::sam;
use noodles::sam::alignment::record::Cigar as _;
use noodles::sam::alignment::record::cigar::op::Kind;
use noodles::sam::alignment::record::data::field::Tag;
use noodles::sam::alignment::record_buf::RecordBuf;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Templates collected from an alignment file.
#[derive(Debug, Default)]
pub struct TemplateSet {
    pub unpaired: Vec<UnpairedTemplate>,
    pub paired: Vec<PairedTemplate>,
    /// Unpaired templates encountered, including any not retained
    pub unpaired_seen: usize,
    /// Paired templates encountered, including any not retained
    pub paired_seen: usize,
    /// Properly paired records whose mate never appeared
    pub orphaned_mates: usize,
}

/// Fixed-capacity uniform sample of a stream (Algorithm R).
#[derive(Debug)]
struct Reservoir<T> {
    items: Vec<T>,
    capacity: Option<usize>,
    seen: usize,
}

impl<T> Reservoir<T> {
    fn new(capacity: Option<usize>) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            seen: 0,
        }
    }

    fn offer<R: Rng>(&mut self, item: T, rng: &mut R) {
        self.seen += 1;
        match self.capacity {
            Some(capacity) if self.items.len() >= capacity => {
                let slot = rng.random_range(0..self.seen);
                if slot < capacity {
                    self.items[slot] = item;
                }
            }
            _ => self.items.push(item),
        }
    }
}

/// One end of a proper pair waiting for its mate.
#[derive(Debug)]
struct PendingMate {
    is_first: bool,
    mate: Mate,
    template_length: usize,
}

/// Accumulates unpaired and paired templates from alignment records.
///
/// Unmapped, secondary and supplementary records are ignored. Segmented
/// records are only kept when properly paired, and are held until their mate
/// shows up.
#[derive(Debug)]
pub struct TemplateCollector {
    unpaired: Reservoir<UnpairedTemplate>,
    paired: Reservoir<PairedTemplate>,
    pending: HashMap<Vec<u8>, PendingMate>,
    rng: StdRng,
}

impl TemplateCollector {
    /// Creates a collector.
    ///
    /// # Arguments
    /// * `max_templates` - Maximum templates retained per kind (None = keep all)
    /// * `seed` - Seed for the reservoir sampling when a cap is set
    pub fn new(max_templates: Option<usize>, seed: u64) -> Self {
        Self {
            unpaired: Reservoir::new(max_templates),
            paired: Reservoir::new(max_templates),
            pending: HashMap::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Adds one alignment record.
    pub fn push(&mut self, record: &RecordBuf) {
        let flags = record.flags();
        if flags.is_unmapped() || flags.is_secondary() || flags.is_supplementary() {
            return;
        }

        let name = record.name().map(|n| n.to_vec()).unwrap_or_default();
        let mate = Mate {
            ref_len: reference_length(record),
            score: alignment_score(record),
        };

        if !flags.is_segmented() {
            let template = UnpairedTemplate {
                name: String::from_utf8_lossy(&name).into_owned(),
                ref_len: mate.ref_len,
                score: mate.score,
            };
            self.unpaired.offer(template, &mut self.rng);
            return;
        }

        if !flags.is_properly_segmented() {
            return;
        }

        let current = PendingMate {
            is_first: flags.is_first_segment(),
            mate,
            template_length: record.template_length().unsigned_abs() as usize,
        };

        match self.pending.remove(&name) {
            None => {
                self.pending.insert(name, current);
            }
            Some(other) => {
                let fragment_len = current.template_length.max(other.template_length);
                let (mate1, mate2) = if other.is_first {
                    (other.mate, current.mate)
                } else {
                    (current.mate, other.mate)
                };
                let template = PairedTemplate {
                    name: String::from_utf8_lossy(&name).into_owned(),
                    fragment_len,
                    mate1,
                    mate2,
                };
                self.paired.offer(template, &mut self.rng);
            }
        }
    }

    /// Finishes collection, dropping mates that were never matched.
    pub fn finish(self) -> TemplateSet {
        TemplateSet {
            unpaired_seen: self.unpaired.seen,
            paired_seen: self.paired.seen,
            unpaired: self.unpaired.items,
            paired: self.paired.items,
            orphaned_mates: self.pending.len(),
        }
    }
}

/// Reads templates from a SAM, gzip-compressed SAM or BAM file.
///
/// Files ending in `.bam` are read as BAM; otherwise the gzip magic bytes
/// decide between compressed and plain SAM.
///
/// # Arguments
/// * `path` - Alignment file to read
/// * `max_templates` - Maximum templates retained per kind (None = keep all)
/// * `seed` - Seed for subsampling when `max_templates` is set
pub fn read_templates(path: &Path, max_templates: Option<usize>, seed: u64) -> Result<TemplateSet> {
    let mut collector = TemplateCollector::new(max_templates, seed);

    let file = File::open(path)
        .with_context(|| format!("Failed to open alignment file: {}", path.display()))?;

    if is_bam(path) {
        let mut reader = bam::io::Reader::new(file);
        let header = reader
            .read_header()
            .with_context(|| format!("Failed to read BAM header: {}", path.display()))?;

        for result in reader.record_bufs(&header) {
            let record = result.context("Failed to parse BAM record")?;
            collector.push(&record);
        }
    } else {
        let mut buffered = BufReader::new(file);
        let inner: Box<dyn BufRead> = if is_gzip_compressed(&mut buffered)? {
            Box::new(BufReader::new(MultiGzDecoder::new(buffered)))
        } else {
            Box::new(buffered)
        };

        let mut reader = sam::io::Reader::new(inner);
        let header = reader
            .read_header()
            .with_context(|| format!("Failed to read SAM header: {}", path.display()))?;

        for result in reader.record_bufs(&header) {
            let record = result.context("Failed to parse SAM record")?;
            collector.push(&record);
        }
    }

    Ok(collector.finish())
}

/// Sums the reference-consuming CIGAR operations.
fn reference_length(record: &RecordBuf) -> usize {
    record
        .cigar()
        .iter()
        .flatten()
        .filter(|op| {
            matches!(
                op.kind(),
                Kind::Match
                    | Kind::Deletion
                    | Kind::Skip
                    | Kind::SequenceMatch
                    | Kind::SequenceMismatch
            )
        })
        .map(|op| op.len())
        .sum()
}

fn alignment_score(record: &RecordBuf) -> Option<i64> {
    record
        .data()
        .get(&Tag::ALIGNMENT_SCORE)
        .and_then(|value| value.as_int())
}

/// Peeks at the buffered header for the gzip magic bytes.
fn is_gzip_compressed<R: std::io::Read>(reader: &mut BufReader<R>) -> Result<bool> {
    let buffer = reader.fill_buf().context("Failed to read file header")?;

    Ok(buffer.len() >= 2 && buffer[0] == 0x1f && buffer[1] == 0x8b)
}

fn is_bam(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bam"))
}
