use vroum_art::{Config, Generator, Strategy};

use crate::{parse_identity, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "nft", about = "Hash-based image for an identity")]
pub struct Nft {
    #[clap(help = "Numeric identity of the owner")]
    identity: String,
    #[clap(long, help = "Name used in the caption")]
    name: Option<String>,
}

impl Nft {
    pub fn run(&self, config: &Config) -> Result<(), AppError> {
        let identity = parse_identity(&self.identity)?;
        let generator = Generator::new(config)?;
        let artifact = generator.nft(identity)?;

        let name = self.name.clone().unwrap_or_else(|| identity.to_string());
        super::report(&artifact, Strategy::Hash.caption(&name));
        Ok(())
    }
}
