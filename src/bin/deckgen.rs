use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "deckgen", version)]
#[command(about = "Build a widescreen PPTX slide deck from a JSON manifest")]
struct Cli {
    /// Input manifest JSON ({"slides": [{"title", "image"}, ...]}).
    #[arg(long)]
    manifest: PathBuf,

    /// Output .pptx path. Parent directories are created as needed.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let manifest = deckgen::Manifest::from_path(&cli.manifest)?;
    let deck = deckgen::compose(&manifest)?;
    let written = deckgen::save_deck(&deck, &cli.out)?;

    eprintln!("wrote {}", written.display());
    Ok(())
}
