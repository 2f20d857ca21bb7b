//! Secret-revealing collaborators
//!
//! Decryption is never done in-process. A [`SecretRevealer`] is handed the
//! identifier of exactly one credential and returns its plaintext.

use passdex_core::{Error, Identifier, Result, Secret};
use std::process::Command;

/// Trait for revealing the secret behind one identifier
pub trait SecretRevealer: Send + Sync {
    /// Reveal the secret stored at `identifier`
    ///
    /// # Returns
    /// * `Ok(secret)` - The collaborator produced the plaintext
    /// * `Err(SecretRetrievalFailed)` - The collaborator could not be run or reported failure
    fn reveal(&self, identifier: &Identifier) -> Result<Secret>;
}

/// Reveals secrets by running an external program, `pass` by default.
///
/// The program is invoked as `<command> <args...> <segments>/<username>`.
/// On success its combined output, stderr followed by stdout, minus one
/// trailing line terminator, is the secret.
#[derive(Debug, Clone)]
pub struct CommandRevealer {
    command: String,
    args: Vec<String>,
}

impl CommandRevealer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the identifier path
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl SecretRevealer for CommandRevealer {
    fn reveal(&self, identifier: &Identifier) -> Result<Secret> {
        let path = identifier.rendered();
        let failure = |message: String, exit_code: Option<i32>| {
            Error::secret_retrieval(&path, &self.command, message, exit_code)
        };

        let program = which::which(&self.command)
            .map_err(|e| failure(format!("command not found: {e}"), None))?;

        tracing::info!(identifier = %path, command = %self.command, "revealing secret");

        let output = Command::new(&program)
            .args(&self.args)
            .arg(&path)
            .output()
            .map_err(|e| failure(format!("failed to execute command: {e}"), None))?;

        let mut combined = output.stderr;
        combined.extend_from_slice(&output.stdout);

        if !output.status.success() {
            let message = String::from_utf8_lossy(&combined).trim().to_string();
            return Err(failure(message, output.status.code()));
        }

        let combined = String::from_utf8(combined)
            .map_err(|_| failure("command output is not valid UTF-8".to_string(), None))?;

        Ok(Secret::new(strip_line_terminator(combined)))
    }
}

/// Remove exactly one trailing `\n` or `\r\n`
pub fn strip_line_terminator(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(rendered: &str) -> Identifier {
        Identifier::from_rendered(rendered).unwrap()
    }

    #[test]
    fn test_strip_single_terminator() {
        assert_eq!(strip_line_terminator("hunter2\n".into()), "hunter2");
        assert_eq!(strip_line_terminator("hunter2\r\n".into()), "hunter2");
        assert_eq!(strip_line_terminator("hunter2\n\n".into()), "hunter2\n");
        assert_eq!(strip_line_terminator("hunter2".into()), "hunter2");
        assert_eq!(strip_line_terminator(String::new()), "");
    }

    #[test]
    fn test_missing_command_is_retrieval_failure() {
        let revealer = CommandRevealer::new("passdex-no-such-command-anywhere");
        let err = revealer.reveal(&id("email/alice")).unwrap_err();
        match err {
            Error::SecretRetrievalFailed {
                identifier,
                exit_code,
                ..
            } => {
                assert_eq!(identifier, "email/alice");
                assert_eq!(exit_code, None);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_echo_receives_rendered_path() {
        let secret = CommandRevealer::new("echo")
            .reveal(&id("email/alice"))
            .unwrap();
        assert_eq!(secret.expose(), "email/alice");
    }

    #[cfg(unix)]
    #[test]
    fn test_args_precede_path() {
        let secret = CommandRevealer::new("echo")
            .with_args(["show"])
            .reveal(&id("personal/bank/alice"))
            .unwrap();
        assert_eq!(secret.expose(), "show personal/bank/alice");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_keeps_exit_code_and_stderr() {
        let err = CommandRevealer::new("sh")
            .with_args(["-c", "echo 'gpg: decryption failed' >&2; exit 2", "sh"])
            .reveal(&id("email/alice"))
            .unwrap_err();
        match err {
            Error::SecretRetrievalFailed {
                message, exit_code, ..
            } => {
                assert_eq!(exit_code, Some(2));
                assert_eq!(message, "gpg: decryption failed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_secret_includes_stderr_output() {
        let secret = CommandRevealer::new("sh")
            .with_args([
                "-c",
                "echo 'gpg: WARNING: unsafe permissions' >&2; echo hunter2",
                "sh",
            ])
            .reveal(&id("email/alice"))
            .unwrap();
        assert_eq!(
            secret.expose(),
            "gpg: WARNING: unsafe permissions\nhunter2"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_message_falls_back_to_stdout() {
        let err = CommandRevealer::new("sh")
            .with_args(["-c", "echo 'not in the store'; exit 1", "sh"])
            .reveal(&id("email/alice"))
            .unwrap_err();
        match err {
            Error::SecretRetrievalFailed {
                message, exit_code, ..
            } => {
                assert_eq!(exit_code, Some(1));
                assert_eq!(message, "not in the store");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_output_is_retrieval_failure() {
        let err = CommandRevealer::new("sh")
            .with_args(["-c", "printf '\\377\\376'", "sh"])
            .reveal(&id("email/alice"))
            .unwrap_err();
        match err {
            Error::SecretRetrievalFailed {
                identifier,
                message,
                exit_code,
                ..
            } => {
                assert_eq!(identifier, "email/alice");
                assert_eq!(message, "command output is not valid UTF-8");
                assert_eq!(exit_code, None);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
