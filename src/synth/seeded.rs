use image::Rgba;

use crate::{Canvas, Identity, Pixel, BLACK};

/// Rows and columns along each edge the pattern never touches.
pub const MARGIN: u32 = 2;

/// Three colours drawn from `rng` followed by three blacks, so that black
/// is picked half of the time.
pub fn palette(rng: &mut fastrand::Rng) -> [Pixel; 6] {
    let mut color = || Rgba([rng.u8(..), rng.u8(..), rng.u8(..), 255]);
    [color(), color(), color(), BLACK, BLACK, BLACK]
}

/// Left-right mirrored pattern seeded by the identity.
///
/// The generator is [`fastrand::Rng`] seeded with the identity value, so
/// the draws only depend on `(identity, size)`.
pub fn synthesize(identity: Identity, size: u32) -> Canvas {
    log::debug!("synth/seeded: {}x{} for {}", size, size, identity);

    let mut rng = fastrand::Rng::with_seed(identity.seed());
    let colors = palette(&mut rng);

    let mut canvas = Canvas::new(size);
    for i in MARGIN..size / 2 {
        for j in MARGIN..size.saturating_sub(MARGIN) {
            let c = colors[rng.usize(..colors.len())];
            canvas.put(i, j, c);
            canvas.put(size - i - 1, j, c);
        }
    }
    canvas
}
