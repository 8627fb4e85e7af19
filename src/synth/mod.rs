//! Interior synthesis strategies.
//!
//! Both strategies are pure functions of the identity and the interior
//! size; border encoding, upscaling and caching are shared and live
//! outside this module.

pub mod hash;
pub mod seeded;

use core::{fmt::Display, str::FromStr};

use crate::{Canvas, Identity, VroumError};

/// Interior size the hash strategy always uses.
pub const HASH_INTERIOR_SIZE: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Per-pixel FNV-1a mixing of the signature with the coordinates.
    Hash,
    /// Mirrored pattern drawn from a palette seeded by the identity.
    SeededRandom,
}

impl Strategy {
    pub fn synthesize(&self, identity: Identity, size: u32) -> Canvas {
        match self {
            Strategy::Hash => hash::synthesize(identity, size),
            Strategy::SeededRandom => seeded::synthesize(identity, size),
        }
    }

    pub fn caption(&self, name: &str) -> String {
        match self {
            Strategy::Hash => format!(
                "This is {}'s exclusive NFT, do not use without permission!",
                name
            ),
            Strategy::SeededRandom => {
                format!("This is {}'s exclusive generative art piece", name)
            }
        }
    }
}

impl FromStr for Strategy {
    type Err = VroumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" | "nft" => Ok(Strategy::Hash),
            "seeded" | "random" | "generative" => Ok(Strategy::SeededRandom),
            _ => Err(VroumError::Parse),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Hash => write!(f, "hash"),
            Strategy::SeededRandom => write!(f, "seeded"),
        }
    }
}
