use passdex_core::MATCH_ALL_PATTERN;
use passdex_store::PasswordStore;
use std::io::Write;

pub fn execute(
    store: &PasswordStore,
    pattern: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let matches = store.list(pattern.unwrap_or(MATCH_ALL_PATTERN))?;
    super::print_matches(&matches, json, out)
}
