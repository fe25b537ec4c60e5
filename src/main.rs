use clap::Parser;
use formulario::config::Config;
use formulario::{logging, ui};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "formulario", about = "Formulário de nome/email no terminal")]
struct Args {
    /// Path to the config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write diagnostics to this file (overrides the config file setting).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let log_file = args.log_file.or_else(|| config.log_file.clone());
    logging::init(log_file.as_deref())?;
    tracing::info!(tick_rate_ms = config.tick_rate_ms, "starting session");

    let submission = ui::runtime::run(&config)?;

    // Terminal is restored; report the last accepted submission on stdout.
    if let Some(submission) = submission {
        println!("Nome: {}", submission.name);
        println!("Email: {}", submission.email);
    }

    Ok(())
}
