use passdex_core::Filter;
use passdex_store::PasswordStore;
use std::io::Write;

pub fn execute(
    store: &PasswordStore,
    patterns: Vec<String>,
    reveal: bool,
    json: bool,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let filter = Filter::new(patterns)?;
    if reveal {
        let credential = store.resolve(&filter)?;
        super::get::print_credential(&credential, false, out)
    } else {
        let matches = store.matches(&filter)?;
        super::print_matches(&matches, json, out)
    }
}
