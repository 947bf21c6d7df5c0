use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr : stdout reste réservé à l'image)
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider les arguments
    cli.validate()?;

    // 4. Convertir puis afficher
    pipeline::run(&cli)
}
