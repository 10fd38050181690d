use std::cmp::Ordering;
use std::ops::Add;

use rand::{
    distributions::{uniform::SampleUniform, Distribution, Standard},
    seq::SliceRandom,
    Rng,
};
use serde::{Serialize, Deserialize};

/// Represents the minimum and maximum boundary for a given type
/// Both boundaries are inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + SampleUniform + Copy> Bounds<T> {
    /// Samples a value in `min..=max`. Bounds that were given in the wrong order are sampled as
    /// if they were swapped.
    pub fn gen<R: Rng>(&self, rng: &mut R) -> T
    where
        Standard: Distribution<T>,
        T: Add<Output = T> + From<u8>,
    {
        let (low, high) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };

        // Need to add 1 for this to be an inclusive range. These fancy type bounds allow for that.
        // From<u8> was chosen because a lot of types support From<u8>.
        rng.gen_range(low, high + 1.into())
    }
}

impl<T: PartialOrd> Bounds<T> {
    /// Returns true if min is not greater than max
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }
}

/// Samples a value from the half-open range between two values given in either order
///
/// If the two values are equal, that value is returned without using the random number
/// generator.
pub fn gen_between<R: Rng>(rng: &mut R, a: i32, b: i32) -> i32 {
    match a.cmp(&b) {
        Ordering::Equal => a,
        Ordering::Less => rng.gen_range(a, b),
        Ordering::Greater => rng.gen_range(b, a),
    }
}

/// Returns the indexes `0..len` in a random order
pub fn shuffled_indices<R: Rng>(rng: &mut R, len: usize) -> Vec<usize> {
    let mut indices: Vec<_> = (0..len).collect();
    indices.shuffle(rng);
    indices
}
