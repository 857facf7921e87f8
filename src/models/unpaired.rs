use crate::models::ModelParams;
use crate::models::stats::{LengthSummary, draw_index};
use crate::random::UniformSource;
use crate::templates::UnpairedRecord;

/// Sampling model over a borrowed collection of unpaired templates.
///
/// Length statistics are computed once at construction and stay fixed for the
/// model's lifetime; the collection cannot change while it is borrowed.
#[derive(Debug)]
pub struct UnpairedModel<'a, T> {
    templates: &'a [T],
    count_added: usize,
    summary: LengthSummary,
    fraction_even: f32,
    low_score_bias: f32,
}

impl<'a, T: UnpairedRecord> UnpairedModel<'a, T> {
    /// Builds a model over `templates`.
    ///
    /// # Arguments
    /// * `templates` - Collection to summarize and draw from
    /// * `n` - Number of templates encountered, reported by `num_added`
    /// * `fraction_even` - Stored but not applied to draws
    /// * `low_score_bias` - Stored but not applied to draws
    pub fn new(templates: &'a [T], n: usize, fraction_even: f32, low_score_bias: f32) -> Self {
        Self {
            templates,
            count_added: n,
            summary: LengthSummary::from_lengths(templates.iter().map(|t| t.ref_len())),
            fraction_even,
            low_score_bias,
        }
    }

    /// Builds a model taking the configuration scalars from validated parameters.
    pub fn from_params(templates: &'a [T], n: usize, params: &ModelParams) -> Self {
        Self::new(templates, n, params.fraction_even, params.low_score_bias)
    }

    /// Draws a template uniformly at random.
    ///
    /// # Panics
    /// Panics if the model is empty; check `is_empty` first.
    pub fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> &'a T {
        assert!(!self.is_empty(), "cannot draw from an empty unpaired model");
        let index = draw_index(source.next_uniform(), self.templates.len());
        &self.templates[index]
    }

    /// Returns true iff no templates were added.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Number of unpaired templates encountered, as passed at construction.
    ///
    /// This can exceed the collection size when the collection was subsampled.
    pub fn num_added(&self) -> usize {
        self.count_added
    }

    /// Average reference length over the collection.
    pub fn avg_len(&self) -> f32 {
        self.summary.avg
    }

    /// Maximum reference length of any template in the collection.
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
