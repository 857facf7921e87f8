use crate::models::ModelParams;
use crate::models::stats::{LengthSummary, draw_index};
use crate::random::UniformSource;
use crate::templates::PairedRecord;

/// Sampling model over a borrowed collection of paired templates.
///
/// Pairs are drawn as a unit. Statistics are over fragment length.
#[derive(Debug)]
pub struct PairedModel<'a, T> {
    templates: &'a [T],
    count_added: usize,
    summary: LengthSummary,
    fraction_even: f32,
    low_score_bias: f32,
}

impl<'a, T: PairedRecord> PairedModel<'a, T> {
    /// Builds a model over `templates`.
    ///
    /// # Arguments
    /// * `templates` - Collection to summarize and draw from
    /// * `n` - Number of pairs encountered, reported by `num_added`
    /// * `fraction_even` - Stored but not applied to draws
    /// * `low_score_bias` - Stored but not applied to draws
    pub fn new(templates: &'a [T], n: usize, fraction_even: f32, low_score_bias: f32) -> Self {
        Self {
            templates,
            count_added: n,
            summary: LengthSummary::from_lengths(templates.iter().map(|t| t.fragment_len())),
            fraction_even,
            low_score_bias,
        }
    }

    pub fn from_params(templates: &'a [T], n: usize, params: &ModelParams) -> Self {
        Self::new(templates, n, params.fraction_even, params.low_score_bias)
    }

    /// Draws a paired template uniformly at random.
    ///
    /// # Panics
    /// Panics if the model is empty; check `is_empty` first.
    pub fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> &'a T {
        assert!(!self.is_empty(), "cannot draw from an empty paired model");
        let index = draw_index(source.next_uniform(), self.templates.len());
        &self.templates[index]
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Number of paired templates encountered, as passed at construction.
    pub fn num_added(&self) -> usize {
        self.count_added
    }

    /// Average fragment length over the collection.
    pub fn avg_len(&self) -> f32 {
        self.summary.avg
    }

    /// Maximum fragment length of any pair in the collection.
    pub fn max_len(&self) -> usize {
        self.summary.max
    }

    pub fn templates(&self) -> &'a [T] {
        self.templates
    }

    pub fn fraction_even(&self) -> f32 {
        self.fraction_even
    }

    pub fn low_score_bias(&self) -> f32 {
        self.low_score_bias
    }
}
