use derive_more::Display;
use fnv::FnvHasher;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    convert::TryInto,
    fmt,
    hash::{Hash, Hasher},
};

/// Seed for the RNG that picks a transformation when a cube is touched
/// without asking for a specific one.
///
/// Seeds can be given as an integer, or as any text. Text that parses as a
/// `u64` is treated as that integer. Any other text is kept as-is and hashed
/// when the seed is used, so `"potato"` is a perfectly good seed.
///
/// Seeds always serialize as a string, since neither JSON nor TOML can hold
/// every `u64`.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Seed {
    Int(u64),
    Text(String),
}

impl Seed {
    /// Get the numeric value of this seed, hashing it if necessary
    pub fn to_u64(&self) -> u64 {
        match self {
            Self::Int(seed) => *seed,
            Self::Text(text) => {
                let mut hasher = FnvHasher::default();
                text.hash(&mut hasher);
                hasher.finish()
            }
        }
    }
}

impl Default for Seed {
    /// A random seed. This means the default varies between calls!
    fn default() -> Self {
        Self::Int(rand::random())
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Self::Int(seed)
    }
}

impl From<&str> for Seed {
    fn from(seed: &str) -> Self {
        match seed.parse::<u64>() {
            Ok(seed) => Self::Int(seed),
            Err(_) => Self::Text(seed.into()),
        }
    }
}

// Written as text so the seed survives TOML (no u64) and JSON readers that
// go through f64. `Seed::from(&str)` turns numeric text back into an int.
impl Serialize for Seed {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        // Scene files may write the seed bare or quoted
        deserializer.deserialize_any(SeedVisitor)
    }
}

/// Accepts any non-negative integer width, or any string
struct SeedVisitor;

/// Generate a visitor method for one integer width. The `config` crate hands
/// TOML integers over as `i64`, so signed widths have to be accepted as long
/// as the value isn't negative.
macro_rules! seed_from_int {
    ($fname:ident, $type:ty) => {
        fn $fname<E: serde::de::Error>(self, value: $type) -> Result<Seed, E> {
            value.try_into().map(Seed::Int).map_err(|_| {
                E::custom(format!("seed must fit in a u64, got {}", value))
            })
        }
    };
}

impl<'de> Visitor<'de> for SeedVisitor {
    type Value = Seed;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative integer or any string")
    }

    seed_from_int!(visit_u8, u8);
    seed_from_int!(visit_u16, u16);
    seed_from_int!(visit_u32, u32);
    seed_from_int!(visit_u64, u64);
    seed_from_int!(visit_i8, i8);
    seed_from_int!(visit_i16, i16);
    seed_from_int!(visit_i32, i32);
    seed_from_int!(visit_i64, i64);

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Seed, E> {
        Ok(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_ser_tokens, Token};

    #[test]
    fn test_from_str() {
        assert_eq!(Seed::from("42"), Seed::Int(42));
        assert_eq!(Seed::from("-42"), Seed::Text("-42".into()));
        assert_eq!(Seed::from("cube"), Seed::Text("cube".into()));
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(Seed::Int(42).to_u64(), 42);
        // Text is hashed, deterministically
        let text = Seed::Text("cube".into());
        assert_eq!(text.to_u64(), text.to_u64());
        assert_ne!(text.to_u64(), Seed::Text("grid".into()).to_u64());
    }

    #[test]
    fn test_serde() {
        assert_ser_tokens(&Seed::Int(42), &[Token::Str("42")]);
        assert_ser_tokens(&Seed::Text("cube".into()), &[Token::Str("cube")]);

        assert_de_tokens(&Seed::Int(42), &[Token::U64(42)]);
        assert_de_tokens(&Seed::Int(42), &[Token::Str("42")]);
        assert_de_tokens(&Seed::Text("cube".into()), &[Token::Str("cube")]);
        // TOML integers arrive signed
        assert_de_tokens(&Seed::Int(7), &[Token::I64(7)]);
        assert_de_tokens_error::<Seed>(
            &[Token::I32(-1)],
            "seed must fit in a u64, got -1",
        );
        assert_de_tokens_error::<Seed>(
            &[Token::Bool(true)],
            "invalid type: boolean `true`, \
            expected a non-negative integer or any string",
        );
    }
}
