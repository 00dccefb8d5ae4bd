use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use atm_sim::config::{AtmPaths, Settings};
use atm_sim::ledger::Ledger;
use atm_sim::logging;
use atm_sim::session::Atm;

#[derive(Parser)]
#[command(
    name = "atm",
    version,
    about = "Terminal-based ATM simulator",
    long_about = "An interactive ATM simulator. Create accounts, log in, deposit, \
                  withdraw and transfer between accounts from a console menu. \
                  All account data lives in memory and is lost on exit."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding settings.json (also ATM_SIM_CONFIG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Currency symbol to print for this run
    #[arg(long, global = true, value_name = "SYMBOL")]
    currency: Option<String>,

    /// Read passwords as plain lines instead of hidden input
    #[arg(long, global = true)]
    no_mask: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive ATM menu (default)
    Run,

    /// Show current configuration and paths
    Config,

    /// Write a default settings file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AtmPaths::resolve(cli.config_dir)?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(symbol) = cli.currency {
        settings.currency_symbol = symbol;
    }
    if cli.no_mask {
        settings.mask_credential_input = false;
    }
    settings.validate()?;

    logging::init(&settings.log_level);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let masked = settings.mask_credential_input && io::stdin().is_terminal();
            let ledger = Ledger::from_settings(&settings);
            tracing::debug!(masked, "starting session loop");

            let mut atm = Atm::new(ledger, settings, io::stdin().lock(), io::stdout().lock())
                .with_masked_credentials(masked);
            atm.run()?;
        }
        Commands::Config => {
            println!("ATM Simulator Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "Yes" } else { "No" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Mask password input: {}", settings.mask_credential_input);
            println!("  Allow self-transfer: {}", settings.allow_self_transfer);
            println!("  Log level:           {}", settings.log_level);
            println!("  Date format:         {}", settings.date_format);
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                Settings::default().save(&paths)?;
                println!(
                    "Wrote default settings to: {}",
                    paths.settings_file().display()
                );
            }
        }
    }

    Ok(())
}
