use image::{ImageBuffer, RgbaImage};

use crate::Canvas;

/// Source coordinate an output coordinate samples from.
///
/// The centre of output pixel `out` is mapped back into the source,
/// `floor((out + 0.5) * interior / output)`.
pub fn source_coord(out: u32, interior: u32, output: u32) -> u32 {
    let (out, interior, output) = (out as u64, interior as u64, output as u64);
    ((2 * out + 1) * interior / (2 * output)) as u32
}

/// First output coordinate that samples source coordinate `k`.
pub fn block_start(k: u32, interior: u32, output: u32) -> u32 {
    let (k, interior, output) = (k as u64, interior as u64, output as u64);
    let edge = 2 * k * output;
    if edge <= interior {
        return 0;
    }
    ((edge + interior - 1) / (2 * interior)) as u32
}

/// Middle output coordinate of the block that samples source coordinate
/// `k`. Requires `interior <= output`.
pub fn block_centre(k: u32, interior: u32, output: u32) -> u32 {
    let start = block_start(k, interior, output);
    let end = if k + 1 < interior {
        block_start(k + 1, interior, output)
    } else {
        output
    };
    start + (end - start - 1) / 2
}

/// Nearest-neighbour resize of a square canvas to `output`x`output`.
///
/// No interpolation happens, so every source pixel becomes a block of a
/// single colour and the encoded border stays readable.
pub fn upscale(canvas: &Canvas, output: u32) -> RgbaImage {
    let interior = canvas.size();
    log::debug!("upscale: {}x{} -> {}x{}", interior, interior, output, output);

    ImageBuffer::from_fn(output, output, |x, y| {
        canvas.get(
            source_coord(x, interior, output),
            source_coord(y, interior, output),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{synth, Identity, OUTPUT_SIZE};
    use rstest::rstest;

    #[rstest]
    #[case(8)]
    #[case(16)]
    #[case(32)]
    #[case(64)]
    #[case(128)]
    #[case(512)]
    fn blocks_are_uniform(#[case] interior: u32) {
        let canvas =
            synth::seeded::synthesize(Identity(31337), interior);
        let image = upscale(&canvas, OUTPUT_SIZE);
        assert_eq!(image.dimensions(), (OUTPUT_SIZE, OUTPUT_SIZE));

        let block = OUTPUT_SIZE / interior;
        for sx in 0..interior {
            for sy in 0..interior {
                let expected = canvas.get(sx, sy);
                for dx in 0..block {
                    for dy in 0..block {
                        assert_eq!(
                            *image.get_pixel(sx * block + dx, sy * block + dy),
                            expected
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn block_start_maps_back() {
        for interior in [8, 33, 100, 257, 511, 512] {
            for k in 0..interior {
                let x = block_start(k, interior, OUTPUT_SIZE);
                assert!(x < OUTPUT_SIZE);
                assert_eq!(source_coord(x, interior, OUTPUT_SIZE), k);
            }
        }
    }

    #[test]
    fn block_centre_maps_back() {
        for interior in [8, 33, 64, 100, 257, 511, 512] {
            for k in 0..interior {
                let x = block_centre(k, interior, OUTPUT_SIZE);
                assert!(x >= block_start(k, interior, OUTPUT_SIZE));
                assert_eq!(source_coord(x, interior, OUTPUT_SIZE), k);
            }
        }
        assert_eq!(block_centre(0, 64, OUTPUT_SIZE), 3);
        assert_eq!(block_centre(63, 64, OUTPUT_SIZE), 507);
    }

    #[test]
    fn uneven_blocks_follow_pixel_centres() {
        // 100 -> 512: output pixel 4 has its centre at source 0.88, pixel 5
        // at 1.07.
        assert_eq!(source_coord(4, 100, OUTPUT_SIZE), 0);
        assert_eq!(source_coord(5, 100, OUTPUT_SIZE), 1);
        assert_eq!(block_start(1, 100, OUTPUT_SIZE), 5);
        assert_eq!(source_coord(511, 100, OUTPUT_SIZE), 99);

        for out in 0..OUTPUT_SIZE {
            let centre = (out as f64 + 0.5) * 100.0 / OUTPUT_SIZE as f64;
            assert_eq!(source_coord(out, 100, OUTPUT_SIZE), centre as u32);
        }
    }

    #[test]
    fn hash_canvas_keeps_transparency() {
        let canvas = synth::hash::synthesize(Identity(3), 64);
        let image = upscale(&canvas, OUTPUT_SIZE);
        assert_eq!(image.get_pixel(0, 0).0[3], canvas.get(0, 0).0[3]);
    }
}
