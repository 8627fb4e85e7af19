use image::{Rgba, RgbaImage};

/// RGBA byte quadruple. An alpha of 0 marks background.
pub type Pixel = Rgba<u8>;

pub const BLACK: Pixel = Rgba([0, 0, 0, 255]);
pub const TRANSPARENT: Pixel = Rgba([0, 0, 0, 0]);

/// Square pixel grid a single generation owns from synthesis to
/// persistence.
///
/// Coordinates are `(x, y)` with the origin in the top-left corner, the
/// same convention as [`image::ImageBuffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create an `size`x`size` canvas filled with opaque black.
    pub fn new(size: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, BLACK),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn get(&self, x: u32, y: u32) -> Pixel {
        *self.image.get_pixel(x, y)
    }

    pub fn put(&mut self, x: u32, y: u32, pixel: Pixel) {
        self.image.put_pixel(x, y, pixel);
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}
