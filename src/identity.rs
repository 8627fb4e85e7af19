use core::{fmt::Display, str::FromStr};

/// Numeric key of a requester.
///
/// The same value is both the cache key of the persisted artifact and the
/// seed of every synthesis strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Identity(pub u64);

/// Number of bits an identity occupies in the encoded border.
pub const IDENTITY_BITS: usize = u64::BITS as usize;

impl Identity {
    /// The identity value is used directly as the seed, so adjacent
    /// identities never share one.
    pub fn seed(&self) -> u64 {
        self.0
    }

    /// Fixed-width binary rendering, most significant bit first.
    pub fn bits(self) -> impl Iterator<Item = bool> {
        (0..IDENTITY_BITS)
            .map(move |k| (self.0 >> (IDENTITY_BITS - 1 - k)) & 1 == 1)
    }

    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Identity(
            bits.into_iter()
                .take(IDENTITY_BITS)
                .fold(0u64, |acc, bit| (acc << 1) | bit as u64),
        )
    }

    /// Name of the persisted artifact for this identity.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.0)
    }
}

impl From<u64> for Identity {
    fn from(value: u64) -> Self {
        Identity(value)
    }
}

impl FromStr for Identity {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Identity(u64::from_str(s.trim())?))
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_msb_first() {
        let bits: Vec<bool> = Identity(1).bits().collect();
        assert_eq!(bits.len(), 64);
        assert!(bits[63]);
        assert!(bits[..63].iter().all(|bit| !bit));

        let bits: Vec<bool> = Identity(1 << 63).bits().collect();
        assert!(bits[0]);
    }

    #[test]
    fn bits_rebuild_identity() {
        for value in [0, 1, 42, 123_456_789, u64::MAX, 1 << 63] {
            let identity = Identity(value);
            assert_eq!(Identity::from_bits(identity.bits()), identity);
        }
    }

    #[test]
    fn parse_and_display() {
        let identity: Identity = " 987654321 ".parse().unwrap();
        assert_eq!(identity, Identity(987654321));
        assert_eq!(identity.to_string(), "987654321");
        assert_eq!(identity.file_name(), "987654321.png");
        assert!("-4".parse::<Identity>().is_err());
    }
}
