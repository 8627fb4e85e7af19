//! Machine-readable border.
//!
//! The top row `(k, 0)` carries the 64-bit identity, most significant bit
//! first. The left column `(0, k)` carries [`SIGNATURE`], eight bits per
//! character. A set bit is opaque black, a clear bit is transparent black.
//!
//! The two lines share pixel `(0, 0)`. The signature is stamped first and
//! the identity second, so that pixel holds the identity's top bit. The
//! signature is ASCII, so its decoder drops bit 7 of every byte and still
//! reads it back exactly.

use image::RgbaImage;

use crate::identity::IDENTITY_BITS;
use crate::upscale::block_centre;
use crate::{
    Canvas, Identity, Pixel, Result, VroumError, BLACK, SIGNATURE, TRANSPARENT,
};

/// Smallest interior that holds both lines.
pub fn required_size() -> u32 {
    IDENTITY_BITS.max(SIGNATURE.len() * 8) as u32
}

pub fn signature_bits() -> impl Iterator<Item = bool> {
    SIGNATURE
        .bytes()
        .flat_map(|byte| (0..8).rev().map(move |k| (byte >> k) & 1 == 1))
}

fn bit_pixel(bit: bool) -> Pixel {
    if bit {
        BLACK
    } else {
        TRANSPARENT
    }
}

/// Overwrite the border of `canvas` with the identity and signature bits.
///
/// Fails with [`VroumError::CanvasTooSmall`] rather than truncating either
/// bit stream.
pub fn stamp(canvas: &mut Canvas, identity: Identity) -> Result<()> {
    let required = required_size();
    if canvas.size() < required {
        return Err(VroumError::CanvasTooSmall {
            width: canvas.size(),
            height: canvas.size(),
            required,
        });
    }

    for (k, bit) in signature_bits().enumerate() {
        canvas.put(0, k as u32, bit_pixel(bit));
    }
    for (k, bit) in identity.bits().enumerate() {
        canvas.put(k as u32, 0, bit_pixel(bit));
    }
    Ok(())
}

/// Contents recovered from a stamped border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub identity: Identity,
    pub signature: String,
}

impl Border {
    pub fn is_authentic(&self) -> bool {
        self.signature == SIGNATURE
    }
}

fn read_bit(image: &RgbaImage, x: u32, y: u32) -> bool {
    image.get_pixel(x, y).0[3] != 0
}

fn decode_signature_bits(bits: impl Iterator<Item = bool>) -> String {
    let bits: Vec<bool> = bits.collect();
    bits.chunks(8)
        .map(|chunk| {
            let byte =
                chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8);
            (byte & 0x7f) as char
        })
        .collect()
}

/// Read the border of an interior canvas.
pub fn decode(canvas: &Canvas) -> Result<Border> {
    decode_upscaled(canvas.as_image(), canvas.size())
}

/// Read the border of an image produced by upscaling an
/// `interior`x`interior` canvas, sampling the centre of each source
/// pixel's block.
pub fn decode_upscaled(image: &RgbaImage, interior: u32) -> Result<Border> {
    let required = required_size();
    let output = image.width();
    if interior < required || image.height() != output || output < interior {
        return Err(VroumError::CanvasTooSmall {
            width: image.width(),
            height: image.height(),
            required,
        });
    }

    let at = |k: u32| block_centre(k, interior, output);

    let identity = Identity::from_bits(
        (0..IDENTITY_BITS as u32).map(|k| read_bit(image, at(k), 0)),
    );
    let signature = decode_signature_bits(
        (0..SIGNATURE.len() as u32 * 8).map(|k| read_bit(image, 0, at(k))),
    );

    Ok(Border {
        identity,
        signature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{synth, upscale, OUTPUT_SIZE};

    #[test]
    fn signature_is_eight_bits_per_char() {
        let bits: Vec<bool> = signature_bits().collect();
        assert_eq!(bits.len(), 64);
        // 'v' == 0b0111_0110
        assert_eq!(
            &bits[..8],
            &[false, true, true, true, false, true, true, false]
        );
    }

    #[test]
    fn stamped_border_round_trips() {
        for value in [0, 1, 5_000_000_000, u64::MAX >> 1, u64::MAX] {
            let identity = Identity(value);
            let mut canvas = synth::hash::synthesize(identity, 64);
            stamp(&mut canvas, identity).unwrap();

            let border = decode(&canvas).unwrap();
            assert_eq!(border.identity, identity);
            assert_eq!(border.signature, SIGNATURE);
            assert!(border.is_authentic());
        }
    }

    #[test]
    fn border_survives_upscale() {
        let identity = Identity(1_189_998_819_991_197_253);
        for interior in [64, 100, 256, 512] {
            let mut canvas = synth::seeded::synthesize(identity, interior);
            stamp(&mut canvas, identity).unwrap();
            let image = upscale::upscale(&canvas, OUTPUT_SIZE);

            let border = decode_upscaled(&image, interior).unwrap();
            assert_eq!(border.identity, identity);
            assert_eq!(border.signature, SIGNATURE);
        }
    }

    #[test]
    fn stamp_only_touches_border() {
        let identity = Identity(12345);
        let original = synth::seeded::synthesize(identity, 64);
        let mut canvas = original.clone();
        stamp(&mut canvas, identity).unwrap();

        for x in 1..64 {
            for y in 1..64 {
                assert_eq!(canvas.get(x, y), original.get(x, y));
            }
        }
    }

    #[test]
    fn small_canvas_is_rejected() {
        let mut canvas = Canvas::new(63);
        let err = stamp(&mut canvas, Identity(1)).unwrap_err();
        assert!(matches!(
            err,
            VroumError::CanvasTooSmall { required: 64, .. }
        ));
        assert!(decode(&canvas).is_err());
    }

    #[test]
    fn unstamped_canvas_is_not_authentic() {
        let canvas = synth::seeded::synthesize(Identity(9), 64);
        let border = decode(&canvas).unwrap();
        assert!(!border.is_authentic());
    }
}
