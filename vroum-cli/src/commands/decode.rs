use std::path::PathBuf;

use vroum_art::encoder::{self, Border};
use vroum_art::generator::decode_png;

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "decode", about = "Read the identity border of an image")]
pub struct Decode {
    #[clap(value_parser, help = "The path to the PNG to inspect")]
    path: PathBuf,
    #[clap(long, default_value_t = 64, help = "Interior size it was built at")]
    interior: u32,
}

impl Decode {
    pub fn border(&self) -> Result<Border, AppError> {
        let bytes = std::fs::read(&self.path)?;
        let shown = self.path.display().to_string();
        let image = decode_png(&bytes)
            .map_err(|e| AppError::ImageReadError(shown.clone(), e.to_string()))?;
        encoder::decode_upscaled(&image, self.interior)
            .map_err(|_| AppError::BorderNotFound(shown))
    }

    pub fn run(&self) -> Result<(), AppError> {
        let border = self.border()?;
        println!("identity: {}", border.identity);
        println!("signature: {:?}", border.signature);
        println!("authentic: {}", border.is_authentic());
        Ok(())
    }
}
