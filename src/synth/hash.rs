use image::Rgba;

use crate::{Canvas, Identity, Pixel, SIGNATURE};

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a 64-bit over raw bytes.
///
/// Stable across processes and platforms, unlike the std `DefaultHasher`
/// which is randomly keyed.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h = FNV_OFFSET;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Hash one signature character followed by the decimal rendering of
/// `value`, reduced to a byte.
fn mix(selector: u128, value: u128) -> u8 {
    let signature = SIGNATURE.as_bytes();
    let c = signature[(selector % signature.len() as u128) as usize];
    let mixed = format!("{}{}", c as char, value);
    (fnv1a64(mixed.as_bytes()) % 256) as u8
}

/// Colour of the pixel at `(i, j)`.
///
/// Products are computed in `u128` so that `i * j * identity` never wraps
/// for interior sizes up to 512 and any 64-bit identity.
pub fn pixel(i: u32, j: u32, identity: Identity) -> Pixel {
    let ij = i as u128 * j as u128;
    let iju = ij * identity.seed() as u128;

    let r = mix(iju, iju);
    let g = mix(iju, ij);
    let b = mix(ij, iju);
    let alpha = if r == g && g == b { 0 } else { 255 };

    Rgba([r, g, b, alpha])
}

pub fn synthesize(identity: Identity, size: u32) -> Canvas {
    log::debug!("synth/hash: {}x{} for {}", size, size, identity);

    let mut canvas = Canvas::new(size);
    for i in 0..size {
        for j in 0..size {
            canvas.put(i, j, pixel(i, j, identity));
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv_reference_vectors() {
        assert_eq!(fnv1a64(b""), 0xcbf29ce484222325);
        assert_eq!(fnv1a64(b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a64(b"foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn origin_row_is_uniform_per_identity() {
        // Any coordinate with i * j == 0 hashes the same strings.
        let identity = Identity(1234);
        let origin = pixel(0, 0, identity);
        for k in 0..64 {
            assert_eq!(pixel(k, 0, identity), origin);
            assert_eq!(pixel(0, k, identity), origin);
        }
    }

    #[test]
    fn pixel_matches_manual_mix() {
        let identity = Identity(7);
        let (i, j) = (3u32, 5u32);
        let ij = 15u128;
        let iju = 105u128;

        let sig = SIGNATURE.as_bytes();
        let r = (fnv1a64(
            format!("{}{}", sig[(iju % 8) as usize] as char, iju).as_bytes(),
        ) % 256) as u8;
        let g = (fnv1a64(
            format!("{}{}", sig[(iju % 8) as usize] as char, ij).as_bytes(),
        ) % 256) as u8;
        let b = (fnv1a64(
            format!("{}{}", sig[(ij % 8) as usize] as char, iju).as_bytes(),
        ) % 256) as u8;

        let p = pixel(i, j, identity);
        assert_eq!(&p.0[..3], &[r, g, b]);
    }

    #[test]
    fn equal_channels_are_transparent() {
        let canvas = synthesize(Identity(99), 64);
        for p in canvas.as_image().pixels() {
            let [r, g, b, a] = p.0;
            if r == g && g == b {
                assert_eq!(a, 0);
            } else {
                assert_eq!(a, 255);
            }
        }
    }

    #[test]
    fn deterministic() {
        let identity = Identity(u64::MAX);
        assert_eq!(synthesize(identity, 64), synthesize(identity, 64));
    }
}
