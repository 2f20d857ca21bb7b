use clap::Subcommand;
use passdex_store::PasswordStore;
use std::io::Write;

pub mod get;
pub mod list;
pub mod matching;

#[derive(Subcommand)]
pub enum Commands {
    /// List credentials whose path contains a match for PATTERN
    #[command(visible_alias = "ls")]
    List {
        /// Regular expression matched against `folder/.../username`
        pattern: Option<String>,

        /// Print the matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the secret of the one credential whose path matches PATTERN
    Get {
        /// Regular expression matched against `folder/.../username`
        pattern: String,

        /// Print the username on its own line before the secret
        #[arg(short = 'u', long)]
        with_username: bool,
    },

    /// Match one pattern per folder level; the last pattern applies to the username
    Match {
        /// Per-segment regular expressions
        #[arg(required = true, num_args = 1..)]
        patterns: Vec<String>,

        /// Reveal the secret of the single match instead of listing
        #[arg(short, long)]
        reveal: bool,

        /// Print the matches as JSON
        #[arg(long, conflicts_with = "reveal")]
        json: bool,
    },
}

impl Commands {
    pub fn execute(self, store: &PasswordStore, out: &mut impl Write) -> eyre::Result<()> {
        match self {
            Commands::List { pattern, json } => list::execute(store, pattern.as_deref(), json, out),
            Commands::Get {
                pattern,
                with_username,
            } => get::execute(store, &pattern, with_username, out),
            Commands::Match {
                patterns,
                reveal,
                json,
            } => matching::execute(store, patterns, reveal, json, out),
        }
    }
}

/// Print a match set one rendered path per line, or as JSON
pub(crate) fn print_matches(
    matches: &passdex_core::MatchSet,
    json: bool,
    out: &mut impl Write,
) -> eyre::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, matches)?;
        writeln!(out)?;
    } else {
        let mut rendered = matches.rendered();
        rendered.sort();
        for path in rendered {
            writeln!(out, "{path}")?;
        }
    }
    Ok(())
}
