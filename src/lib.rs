//! Deterministic per-identity images with a write-once disk cache.
//!
//! An [`Identity`] seeds one of two interior [`Strategy`]s, the interior is
//! stamped with a machine-readable border, upscaled to [`OUTPUT_SIZE`] and
//! stored as `<identity>.png` by the [`ImageCache`]. Later requests for the
//! same identity are served the stored file.
//!
//! ```no_run
//! use vroum_art::{Config, Generator, Identity};
//!
//! let generator = Generator::new(&Config::default().with_env_overrides())?;
//! let artifact = generator.generative(Identity(42), Some("16"))?;
//! println!("{}", artifact.path.display());
//! # Ok::<(), vroum_art::VroumError>(())
//! ```

pub mod errors;
pub use errors::{Result, VroumError};

pub mod atomic;
pub mod cache;
pub mod canvas;
pub mod config;
pub mod encoder;
pub mod generator;
pub mod identity;
pub mod synth;
pub mod upscale;
pub mod validate;

pub use cache::ImageCache;
pub use canvas::{Canvas, Pixel, BLACK, TRANSPARENT};
pub use config::Config;
pub use generator::{Artifact, GenerationRequest, Generator};
pub use identity::Identity;
pub use synth::Strategy;

/// Marker stamped into the left column of every image.
pub const SIGNATURE: &str = "vroumbot";

/// Width and height of every persisted image.
pub const OUTPUT_SIZE: u32 = 512;

#[cfg(test)]
pub(crate) fn initialize() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
        log::info!("Initializing vroum-art tests");
    });
}
