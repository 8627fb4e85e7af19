use vroum_art::{Config, Generator};

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List identities with a stored image")]
pub struct List {
    #[clap(long, short = 'p', action, help = "Show artifact paths")]
    path: bool,
}

impl List {
    pub fn run(&self, config: &Config) -> Result<(), AppError> {
        let generator = Generator::new(config)?;
        let cache = generator.cache();
        for identity in cache.keys()? {
            if self.path {
                println!("{} {}", identity, cache.path_for(identity).display());
            } else {
                println!("{}", identity);
            }
        }
        Ok(())
    }
}
