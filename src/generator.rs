use std::io::Cursor;
use std::path::PathBuf;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};

use crate::synth::{Strategy, HASH_INTERIOR_SIZE};
use crate::{
    encoder, upscale, validate, Canvas, Config, Identity, ImageCache, Result,
    OUTPUT_SIZE,
};

/// One request for an identity's image. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub identity: Identity,
    pub interior_size: u32,
    pub strategy: Strategy,
}

impl GenerationRequest {
    /// Hash strategy at its fixed interior size.
    pub fn hash(identity: Identity) -> Self {
        Self {
            identity,
            interior_size: HASH_INTERIOR_SIZE,
            strategy: Strategy::Hash,
        }
    }

    /// Seeded strategy with a raw, caller-supplied size parameter.
    pub fn seeded(identity: Identity, size: Option<&str>) -> Result<Self> {
        Ok(Self {
            identity,
            interior_size: validate::parse_size(size)?,
            strategy: Strategy::SeededRandom,
        })
    }

    /// Whether the identity border is written on the interior.
    ///
    /// The hash strategy always carries it, and an undersized hash canvas
    /// is an error. Seeded canvases carry it only when they are wide
    /// enough for every bit.
    pub fn stamps_border(&self) -> bool {
        match self.strategy {
            Strategy::Hash => true,
            Strategy::SeededRandom => {
                self.interior_size >= encoder::required_size()
            }
        }
    }

    /// Fail with [`VroumError::InvalidSize`] when the interior size is out
    /// of `MIN_SIZE..=MAX_SIZE`.
    ///
    /// [`VroumError::InvalidSize`]: crate::VroumError::InvalidSize
    pub fn check(&self) -> Result<()> {
        validate::check_size(self.interior_size)?;
        Ok(())
    }

    /// Synthesised and stamped interior canvas.
    pub fn interior(&self) -> Result<Canvas> {
        self.check()?;
        let mut canvas =
            self.strategy.synthesize(self.identity, self.interior_size);
        if self.stamps_border() {
            encoder::stamp(&mut canvas, self.identity)?;
        }
        Ok(canvas)
    }

    /// Final image at [`OUTPUT_SIZE`].
    pub fn render(&self) -> Result<RgbaImage> {
        Ok(upscale::upscale(&self.interior()?, OUTPUT_SIZE))
    }

    /// Final image encoded as PNG.
    pub fn render_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.render()?)
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(buf.into_inner())
}

pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?
        .to_rgba8())
}

/// A persisted image for an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub identity: Identity,
    pub path: PathBuf,
    /// `false` when the artifact was already stored.
    pub created: bool,
}

/// Validation, caching and synthesis wired together.
#[derive(Debug, Clone)]
pub struct Generator {
    cache: ImageCache,
}

impl Generator {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let cache =
            ImageCache::new(config.folder.clone(), &config.storage_root())?;
        Ok(Self { cache })
    }

    pub fn with_cache(cache: ImageCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Hash-based image for `identity`.
    pub fn nft(&self, identity: Identity) -> Result<Artifact> {
        self.generate(&GenerationRequest::hash(identity))
    }

    /// Seeded image for `identity`. The size is validated before the
    /// cache is consulted.
    pub fn generative(
        &self,
        identity: Identity,
        size: Option<&str>,
    ) -> Result<Artifact> {
        self.generate(&GenerationRequest::seeded(identity, size)?)
    }

    /// Serve the stored artifact for the request's identity, or build and
    /// store it.
    ///
    /// A stored artifact wins whatever strategy or size the request asks
    /// for.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Artifact> {
        request.check()?;
        let mut created = false;
        let path = self.cache.get_or_create(request.identity, || {
            created = true;
            log::info!(
                "generator: building {} {}x{} for {}",
                request.strategy,
                request.interior_size,
                request.interior_size,
                request.identity
            );
            request.render_png()
        })?;

        Ok(Artifact {
            identity: request.identity,
            path,
            created,
        })
    }

    /// Build the request's image and replace whatever is stored.
    pub fn regenerate(&self, request: &GenerationRequest) -> Result<Artifact> {
        request.check()?;
        let path = self
            .cache
            .regenerate(request.identity, || request.render_png())?;
        Ok(Artifact {
            identity: request.identity,
            path,
            created: true,
        })
    }
}
