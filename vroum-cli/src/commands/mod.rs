use clap::Subcommand;

mod decode;
mod generative;
mod list;
mod nft;
mod regenerate;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Nft(nft::Nft),
    Generative(generative::Generative),
    Regenerate(regenerate::Regenerate),
    Decode(decode::Decode),
    List(list::List),
}

/// Print where the artifact lives and the caption that goes with it.
fn report(artifact: &vroum_art::Artifact, caption: String) {
    if artifact.created {
        println!("Created {}", artifact.path.display());
    } else {
        println!("Cached {}", artifact.path.display());
    }
    println!("{}", caption);
}
