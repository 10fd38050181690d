use std::str::FromStr;
use std::fmt;

use rand::{
    rngs::StdRng,
    Rng,
    SeedableRng,
    distributions::{
        Distribution,
        Standard,
    },
};
use base64::DecodeError;
use thiserror::Error;

lazy_static! {
    /// The configuration of the encoder/decoder for the seed
    static ref SEED_ENCODER_CONFIG: base64::Config = base64::Config::new(
        base64::CharacterSet::UrlSafe,
        false,
    );
}

#[derive(Debug, Error)]
pub enum InvalidMapKey {
    #[error("map key does not decode to the length of a seed")]
    InvalidLength,
    #[error("map key is not valid base64: {0}")]
    DecodeError(#[from] DecodeError),
}

/// The seed of the random number generator
type Seed = <StdRng as SeedableRng>::Seed;

/// Uniquely identifies a dungeon
///
/// Can be passed to the generator together with the same configuration to recreate a specific
/// dungeon.
///
/// To create a random MapKey, use the `rand::random` function:
///
/// ```rust
/// # use rand::random;
/// # use dungeon_generator::MapKey;
/// let map_key: MapKey = random();
/// ```
///
/// A numeric seed also names a key:
///
/// ```rust
/// # use dungeon_generator::MapKey;
/// assert_eq!(MapKey::from(42u64), MapKey::from(42u64));
/// ```
///
/// MapKeys can be parsed from strings using `.parse()`. You can get the string representation of
/// a MapKey either with `.to_string()` or by directly using Display `{}` formatting:
///
/// ```rust
/// # use rand::random;
/// # use dungeon_generator::MapKey;
/// let map_key: MapKey = random();
/// let parsed: MapKey = map_key.to_string().parse().unwrap();
/// assert_eq!(parsed, map_key);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapKey(Seed);

impl MapKey {
    pub(in super) fn to_rng(self) -> StdRng {
        StdRng::from_seed(self.0)
    }
}

impl From<u64> for MapKey {
    fn from(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        MapKey(rng.gen())
    }
}

impl Distribution<MapKey> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MapKey {
        MapKey(rng.gen())
    }
}

impl fmt::Debug for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MapKey(\"{}\")", self)
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", base64::encode_config(&self.0, *SEED_ENCODER_CONFIG))
    }
}

impl FromStr for MapKey {
    type Err = InvalidMapKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut key: Seed = Default::default();
        let decoded = base64::decode_config(s, *SEED_ENCODER_CONFIG)?;
        if decoded.len() != key.len() {
            return Err(InvalidMapKey::InvalidLength);
        }
        key.copy_from_slice(&decoded);
        Ok(MapKey(key))
    }
}
