use clap::Parser;
use linkpost::commands;
use linkpost::core::config::Config;
use linkpost::error::LinksError;
use linkpost::store::JsonFileStore;
use linkpost::utils::cli::Args;
use linkpost::utils::logger;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = match Config::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            eprintln!("Check ~/.config/linkpost/config.toml (keys: posts_dir, store, service)");
            std::process::exit(1);
        }
    };

    let settings = args.resolve(config)?;
    tracing::debug!(?settings, "resolved settings");

    let store = JsonFileStore::new(&settings.store);
    tracing::debug!(store = %store.path().display(), "using publication cache");

    if let Err(e) = commands::links::run(&settings, &store) {
        match &e {
            LinksError::InvalidDateFormat { .. } => {
                eprintln!("Error: Invalid date format. Please use 'YYYY-MM-DD'.")
            }
            LinksError::Io { path, source } => {
                eprintln!("Error creating post file {}: {}", path.display(), source)
            }
            LinksError::Store { .. } => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}
