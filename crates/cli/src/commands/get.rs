use passdex_core::Credential;
use passdex_store::PasswordStore;
use std::io::Write;

pub fn execute(
    store: &PasswordStore,
    pattern: &str,
    with_username: bool,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let credential = store.get(pattern)?;
    print_credential(&credential, with_username, out)
}

pub(crate) fn print_credential(
    credential: &Credential,
    with_username: bool,
    out: &mut impl Write,
) -> eyre::Result<()> {
    if with_username {
        writeln!(out, "{}", credential.username())?;
    }
    writeln!(out, "{}", credential.secret.expose())?;
    Ok(())
}
