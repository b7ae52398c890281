//! vaultprops CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vaultprops::cli::args::{Cli, Commands};
use vaultprops::cli::output::Output;
use vaultprops::cli::{edit, get, listing, select, Context};
use vaultprops::config::Config;
use vaultprops::error::VaultError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), VaultError> {
    let config = Config::load(cli.config.as_deref())?;
    let ctx = Context::new(&config, cli.vault.as_deref())?;
    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::Select(args) => select::run(&ctx, args, &output),
        Commands::Properties(args) => listing::properties(&ctx, args, &output),
        Commands::Tags(args) => listing::tags(&ctx, args, &output),
        Commands::Values(args) => listing::values(&ctx, args, &output),
        Commands::Get(args) => get::run(&ctx, args, &output),
        Commands::Add(args) => edit::add(&ctx, args, &output),
        Commands::Rename(args) => edit::rename(&ctx, args, &output),
        Commands::Set(args) => edit::set(&ctx, args, &output),
        Commands::Remove(args) => edit::remove(&ctx, args, &output),
        Commands::DropHeader(args) => edit::drop_header(&ctx, args, &output),
        Commands::ClearEmpty(args) => edit::clear_empty(&ctx, args, &output),
    }
}
