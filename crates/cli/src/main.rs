use clap::Parser;
use passdex_store::{PasswordStore, StoreConfig};

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "passdex")]
#[command(about = "Index and query a pass-style password store", long_about = None)]
#[command(version)]
struct Cli {
    /// Store root (defaults to $PASSWORD_STORE_DIR, then ~/.password-store)
    #[arg(long, global = true, value_name = "DIR")]
    store: Option<String>,

    /// Program used to reveal a secret (defaults to $PASSDEX_REVEAL_CMD, then `pass`)
    #[arg(long, global = true, value_name = "CMD")]
    reveal_command: Option<String>,

    /// Encrypted-file suffix
    #[arg(long, global = true, value_name = "SUFFIX")]
    suffix: Option<String>,

    /// Refuse to reveal credentials stored directly under the store root
    #[arg(long, global = true)]
    require_segments: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn store_config(&self) -> passdex_core::Result<StoreConfig> {
        let mut config = StoreConfig::locate(self.store.as_deref())?
            .with_require_segments(self.require_segments);
        if let Some(ref command) = self.reveal_command {
            config = config.with_reveal_command(command);
        }
        if let Some(ref suffix) = self.suffix {
            config = config.with_suffix(suffix);
        }
        Ok(config)
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let default_directive = if cli.verbose { "debug" } else { "warn" };
    passdex_utils::tracing::init_with_default(default_directive)
        .map_err(|e| eyre::eyre!("failed to initialise logging: {e}"))?;

    let store = PasswordStore::new(cli.store_config()?)?;

    let stdout = std::io::stdout();
    cli.command.execute(&store, &mut stdout.lock())
}
