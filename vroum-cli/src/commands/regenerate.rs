use vroum_art::{Config, GenerationRequest, Generator, Strategy};

use crate::{parse_identity, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "regenerate",
    about = "Rebuild an identity's image, replacing the stored one"
)]
pub struct Regenerate {
    #[clap(help = "Numeric identity of the owner")]
    identity: String,
    #[clap(long, default_value = "hash", help = "hash or seeded")]
    strategy: String,
    #[clap(long, help = "Interior size for the seeded strategy")]
    size: Option<String>,
}

impl Regenerate {
    pub fn run(&self, config: &Config) -> Result<(), AppError> {
        let identity = parse_identity(&self.identity)?;
        let request = match self.strategy.parse::<Strategy>()? {
            Strategy::Hash => GenerationRequest::hash(identity),
            Strategy::SeededRandom => {
                GenerationRequest::seeded(identity, self.size.as_deref())?
            }
        };

        let generator = Generator::new(config)?;
        let artifact = generator.regenerate(&request)?;
        println!("Regenerated {}", artifact.path.display());
        Ok(())
    }
}
