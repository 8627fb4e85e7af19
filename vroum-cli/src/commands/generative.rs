use vroum_art::{Config, Generator, Strategy};

use crate::{parse_identity, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "generative",
    about = "Seeded generative art piece for an identity"
)]
pub struct Generative {
    #[clap(help = "Numeric identity of the owner")]
    identity: String,
    #[clap(help = "Interior size, an integer between 8 and 512 (default 32)")]
    size: Option<String>,
    #[clap(long, help = "Name used in the caption")]
    name: Option<String>,
}

impl Generative {
    pub fn run(&self, config: &Config) -> Result<(), AppError> {
        let identity = parse_identity(&self.identity)?;
        let generator = Generator::new(config)?;

        let size = self.size.as_deref();
        let artifact = match generator.generative(identity, size) {
            Ok(artifact) => artifact,
            Err(err) if err.is_user_error() => {
                println!("{}", err);
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let name = self.name.clone().unwrap_or_else(|| identity.to_string());
        super::report(&artifact, Strategy::SeededRandom.caption(&name));
        Ok(())
    }
}
