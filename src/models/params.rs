use anyhow::{Result, bail};

const FRACTION_EVEN_DEFAULT: f32 = 1.0;
const LOW_SCORE_BIAS_DEFAULT: f32 = 1.0;

/// Construction-time configuration for the template models.
///
/// Both values are stored on the models but do not influence `draw`: sampling
/// is uniform over the collection regardless of what is passed here.
///
/// # Constraints
/// - `fraction_even` must be in the range [0.0, 1.0]
/// - `low_score_bias` must be finite and non-negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    pub fraction_even: f32,
    pub low_score_bias: f32,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            fraction_even: FRACTION_EVEN_DEFAULT,
            low_score_bias: LOW_SCORE_BIAS_DEFAULT,
        }
    }
}

impl ModelParams {
    /// Creates validated model parameters with specified or default values.
    ///
    /// # Arguments
    /// * `fraction_even` - Fraction of draws meant to be uniform (default: 1.0)
    /// * `low_score_bias` - Strength of a bias toward low-scoring templates (default: 1.0)
    ///
    /// # Errors
    /// Returns an error if either value violates its constraint.
    ///
    /// # Example
    /// ```
    /// use templatefaker::models::ModelParams;
    ///
    /// let params = ModelParams::new(None, Some(2.0)).unwrap();
    /// assert_eq!(params.fraction_even, 1.0);
    /// assert_eq!(params.low_score_bias, 2.0);
    /// ```
    pub fn new(fraction_even: Option<f32>, low_score_bias: Option<f32>) -> Result<Self> {
        let fraction_even = fraction_even.unwrap_or(FRACTION_EVEN_DEFAULT);
        let low_score_bias = low_score_bias.unwrap_or(LOW_SCORE_BIAS_DEFAULT);

        if !(0.0..=1.0).contains(&fraction_even) {
            bail!(
                "Fraction even must be between 0.0 and 1.0, got {}",
                fraction_even
            );
        }
        if !low_score_bias.is_finite() || low_score_bias < 0.0 {
            bail!(
                "Low score bias must be a finite non-negative number, got {}",
                low_score_bias
            );
        }

        Ok(Self {
            fraction_even,
            low_score_bias,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let params = ModelParams::new(None, None).unwrap();
        assert_eq!(params, ModelParams::default());
        assert_eq!(params.fraction_even, 1.0);
        assert_eq!(params.low_score_bias, 1.0);
    }

    #[test]
    fn test_custom_valid_values() {
        let params = ModelParams::new(Some(0.25), Some(0.0)).unwrap();
        assert_eq!(params.fraction_even, 0.25);
        assert_eq!(params.low_score_bias, 0.0);
    }

    #[test]
    fn test_fraction_even_out_of_range() {
        let err_msg = ModelParams::new(Some(1.5), None).unwrap_err().to_string();
        assert!(err_msg.contains("Fraction even must be between"));
        assert!(ModelParams::new(Some(-0.1), None).is_err());
        assert!(ModelParams::new(Some(f32::NAN), None).is_err());
    }

    #[test]
    fn test_low_score_bias_invalid() {
        assert!(ModelParams::new(None, Some(-1.0)).is_err());
        assert!(ModelParams::new(None, Some(f32::INFINITY)).is_err());
    }
}
