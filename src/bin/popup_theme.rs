//! Command-line front end for inspecting and changing the popup theme.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use console::{style, Term};
use popup_theme::{
    Appearance, FileStore, SystemSignal, ThemeConfig, ThemeHandle, ThemePreference,
    ThemeProvider, DEFAULT_STORAGE_KEY,
};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "popup-theme", version, about = "Read and change the popup theme preference")]
struct Cli {
    /// Storage file holding the extension's key-value area
    #[arg(long, global = true, value_name = "PATH")]
    storage: Option<PathBuf>,

    /// Key the theme is stored under
    #[arg(long, global = true, default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    /// Theme used when nothing is stored
    #[arg(long = "default", global = true, value_name = "THEME", default_value = "system")]
    default_theme: ThemePreference,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the stored preference
    Get,
    /// Store a preference and apply it
    Set {
        #[arg(value_name = "THEME")]
        theme: ThemePreference,
    },
    /// Print the appearance the preference resolves to
    Resolve,
    /// Print the document root classes after activation
    Classes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let storage = cli.storage.clone().unwrap_or_else(default_storage_path);
    let config = ThemeConfig::new()
        .with_default_theme(cli.default_theme)
        .with_storage_key(cli.key.clone());

    let theme = ThemeProvider::new(FileStore::new(&storage))
        .with_config(config)
        .with_signal(SystemSignal)
        .activate()
        .with_context(|| format!("failed to load theme from {}", storage.display()))?;

    match cli.command {
        Command::Get => println!("{}", theme.theme()),
        Command::Set { theme: preference } => {
            theme
                .set_theme(preference)
                .with_context(|| format!("failed to save theme to {}", storage.display()))?;
            print_classes(&theme);
        }
        Command::Resolve => println!("{}", styled(theme.effective_appearance())),
        Command::Classes => print_classes(&theme),
    }
    Ok(())
}

fn print_classes(theme: &ThemeHandle) {
    println!("{}", theme.classes().join(" "));
}

fn styled(appearance: Appearance) -> String {
    if !Term::stdout().is_term() {
        return appearance.to_string();
    }
    match appearance {
        Appearance::Dark => style(appearance).white().on_black().bold().to_string(),
        Appearance::Light => style(appearance).black().on_white().bold().to_string(),
    }
}

fn default_storage_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("popup-theme"))
        .unwrap_or_default()
        .join("storage.json")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
