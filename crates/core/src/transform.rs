use crate::Seed;
use log::trace;
use rand::{seq::IteratorRandom, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Something that can happen to a cube when it's touched. Currently the only
/// option is a pulse, but new variants automatically become candidates for
/// [RandomTransform].
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Transformation {
    /// Every visible face bobs upward and settles back into place
    Pulse,
}

/// Decides which transformation a cube gets when the caller doesn't ask for
/// one in particular
pub trait TransformPolicy {
    fn choose(&mut self) -> Transformation;
}

/// Picks uniformly from every [Transformation], using a seeded RNG so that
/// the same seed always produces the same sequence of choices
#[derive(Clone, Debug)]
pub struct RandomTransform {
    rng: Pcg64,
}

impl RandomTransform {
    pub fn new(seed: &Seed) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed.to_u64()),
        }
    }
}

impl Default for RandomTransform {
    fn default() -> Self {
        Self::new(&Seed::default())
    }
}

impl TransformPolicy for RandomTransform {
    fn choose(&mut self) -> Transformation {
        // The enum is never empty
        let transformation = Transformation::iter()
            .choose_stable(&mut self.rng)
            .expect("no transformations defined");
        trace!("Randomly chose transformation {}", transformation);
        transformation
    }
}

/// Always picks the same transformation
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedTransform(pub Transformation);

impl TransformPolicy for FixedTransform {
    fn choose(&mut self) -> Transformation {
        self.0
    }
}
