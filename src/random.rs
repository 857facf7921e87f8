//! Uniform random sources used by the template models.

use rand::Rng;

/// A source of uniform values in `[0, 1)`.
///
/// Every [`rand::Rng`] is a `UniformSource`, so a seeded `StdRng` can be passed
/// straight to a model's `draw`. Tests and replays can use [`ScriptedUniform`]
/// instead.
pub trait UniformSource {
    /// Returns the next uniform value.
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed sequence of uniform values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedUniform {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedUniform {
    /// Creates a source that yields `values` in order.
    ///
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ScriptedUniform needs at least one value");
        Self { values, position: 0 }
    }
}

impl UniformSource for ScriptedUniform {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rng_values_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let u = rng.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_scripted_replays_and_cycles() {
        let mut source = ScriptedUniform::new(vec![0.25, 0.75]);
        assert_eq!(source.next_uniform(), 0.25);
        assert_eq!(source.next_uniform(), 0.75);
        assert_eq!(source.next_uniform(), 0.25);
    }
}
