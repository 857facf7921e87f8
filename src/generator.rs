use crate::models::{PairedModel, UnpairedModel};
use crate::random::UniformSource;
use crate::templates::{PairedRecord, UnpairedRecord};
use rand::Rng;
use uuid::{Builder, Uuid};

/// A template drawn from one of the two models.
#[derive(Debug)]
pub enum Draw<'a, U, P> {
    Unpaired(&'a U),
    Paired(&'a P),
}

/// A drawn template labelled with a unique identifier for the simulated read.
#[derive(Debug)]
pub struct DrawnTemplate<'a, U, P> {
    pub id: Uuid,
    pub draw: Draw<'a, U, P>,
}

/// Draws templates from an unpaired and a paired model.
///
/// Each draw picks the paired model with probability proportional to the
/// number of paired templates encountered, so the mix of simulated reads
/// follows the mix of the input. Empty models are never chosen.
pub struct TemplateDrawer<'m, 'a, U, P> {
    unpaired: &'m UnpairedModel<'a, U>,
    paired: &'m PairedModel<'a, P>,
    paired_fraction: f64,
}

impl<'m, 'a, U: UnpairedRecord, P: PairedRecord> TemplateDrawer<'m, 'a, U, P> {
    pub fn new(unpaired: &'m UnpairedModel<'a, U>, paired: &'m PairedModel<'a, P>) -> Self {
        let paired_fraction = match (unpaired.is_empty(), paired.is_empty()) {
            (_, true) => 0.0,
            (true, false) => 1.0,
            (false, false) => {
                let total = unpaired.num_added() + paired.num_added();
                if total == 0 {
                    0.5
                } else {
                    paired.num_added() as f64 / total as f64
                }
            }
        };

        Self {
            unpaired,
            paired,
            paired_fraction,
        }
    }

    /// Probability that a draw comes from the paired model.
    pub fn paired_fraction(&self) -> f64 {
        self.paired_fraction
    }

    /// Draws the next template, or None if both models are empty.
    ///
    /// The identifier bytes come from `rng` as well, so a seeded generator
    /// reproduces the same ids.
    pub fn next_draw<R: Rng>(&self, rng: &mut R) -> Option<DrawnTemplate<'a, U, P>> {
        if self.unpaired.is_empty() && self.paired.is_empty() {
            return None;
        }

        let draw = if rng.next_uniform() < self.paired_fraction {
            Draw::Paired(self.paired.draw(rng))
        } else {
            Draw::Unpaired(self.unpaired.draw(rng))
        };

        Some(DrawnTemplate {
            id: Builder::from_random_bytes(rng.random()).into_uuid(),
            draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{Mate, PairedTemplate, UnpairedTemplate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn unpaired(n: usize) -> Vec<UnpairedTemplate> {
        (0..n)
            .map(|i| UnpairedTemplate {
                name: format!("u{}", i),
                ref_len: 100,
                score: None,
            })
            .collect()
    }

    fn paired(n: usize) -> Vec<PairedTemplate> {
        (0..n)
            .map(|i| PairedTemplate {
                name: format!("p{}", i),
                fragment_len: 300,
                mate1: Mate { ref_len: 100, score: None },
                mate2: Mate { ref_len: 100, score: None },
            })
            .collect()
    }

    #[test]
    fn test_both_empty_yields_nothing() {
        let us = unpaired(0);
        let ps = paired(0);
        let unpaired_model = UnpairedModel::new(&us, 0, 1.0, 1.0);
        let paired_model = PairedModel::new(&ps, 0, 1.0, 1.0);
        let drawer = TemplateDrawer::new(&unpaired_model, &paired_model);
        assert!(drawer.next_draw(&mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn test_only_paired_available() {
        let us = unpaired(0);
        let ps = paired(3);
        let unpaired_model = UnpairedModel::new(&us, 0, 1.0, 1.0);
        let paired_model = PairedModel::new(&ps, 3, 1.0, 1.0);
        let drawer = TemplateDrawer::new(&unpaired_model, &paired_model);
        assert_eq!(drawer.paired_fraction(), 1.0);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let drawn = drawer.next_draw(&mut rng).unwrap();
            assert!(matches!(drawn.draw, Draw::Paired(_)));
        }
    }

    #[test]
    fn test_mix_follows_num_added() {
        let us = unpaired(2);
        let ps = paired(2);
        // 300 unpaired and 100 paired were seen before subsampling
        let unpaired_model = UnpairedModel::new(&us, 300, 1.0, 1.0);
        let paired_model = PairedModel::new(&ps, 100, 1.0, 1.0);
        let drawer = TemplateDrawer::new(&unpaired_model, &paired_model);
        assert_eq!(drawer.paired_fraction(), 0.25);

        let mut rng = StdRng::seed_from_u64(7);
        let draws = 20_000;
        let paired_draws = (0..draws)
            .filter(|_| matches!(drawer.next_draw(&mut rng).unwrap().draw, Draw::Paired(_)))
            .count();
        let frequency = paired_draws as f64 / draws as f64;
        assert!((frequency - 0.25).abs() < 0.02, "frequency {}", frequency);
    }

    #[test]
    fn test_ids_are_unique() {
        let us = unpaired(1);
        let ps = paired(0);
        let unpaired_model = UnpairedModel::new(&us, 1, 1.0, 1.0);
        let paired_model = PairedModel::new(&ps, 0, 1.0, 1.0);
        let drawer = TemplateDrawer::new(&unpaired_model, &paired_model);

        let mut rng = StdRng::seed_from_u64(3);
        let first = drawer.next_draw(&mut rng).unwrap();
        let second = drawer.next_draw(&mut rng).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.id.get_version_num(), 4);
    }

    #[test]
    fn test_same_seed_same_draws_and_ids() {
        let us = unpaired(5);
        let ps = paired(5);
        let unpaired_model = UnpairedModel::new(&us, 5, 1.0, 1.0);
        let paired_model = PairedModel::new(&ps, 5, 1.0, 1.0);
        let drawer = TemplateDrawer::new(&unpaired_model, &paired_model);

        let run = |seed: u64| -> Vec<(Uuid, String)> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| {
                    let drawn = drawer.next_draw(&mut rng).unwrap();
                    let name = match drawn.draw {
                        Draw::Unpaired(t) => t.name.clone(),
                        Draw::Paired(t) => t.name.clone(),
                    };
                    (drawn.id, name)
                })
                .collect()
        };

        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }
}
