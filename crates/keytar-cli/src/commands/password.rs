//! Password commands.
//!
//! `keytar add|get|delete|replace` map one-to-one onto [`Keychain`]
//! operations. Keychain failures are returned as [`KeychainError`] so the
//! binary can pick an exit code from them.

use std::ffi::{OsStr, OsString};
use std::io::BufRead;

use clap::Args;
use keytar::{is_valid_non_null_utf8_bytes, Keychain, KeychainError};
use keytar_core::config::BackendPreference;
use keytar_core::Config;
use tracing::debug;
use zeroize::Zeroizing;

/// Identifies a stored password.
#[derive(Args, Debug)]
pub struct Target {
    /// Service name (e.g. "mail")
    pub service: OsString,

    /// Account within the service (e.g. "alice@example.com")
    pub account: OsString,
}

/// Arguments for commands that read a password.
#[derive(Args, Debug)]
pub struct LookupArgs {
    #[command(flatten)]
    pub target: Target,
}

/// Arguments for commands that write a password.
#[derive(Args, Debug)]
pub struct SetArgs {
    #[command(flatten)]
    pub target: Target,

    /// Password value (if omitted, prompts for hidden input)
    #[arg(long, conflicts_with = "password_stdin")]
    pub password: Option<OsString>,

    /// Read the password from the first line of stdin
    #[arg(long)]
    pub password_stdin: bool,
}

/// Build the keychain for password commands, honoring `--backend`.
pub fn keychain(mut config: Config, backend: Option<BackendPreference>) -> Keychain {
    if let Some(pref) = backend {
        config.keychain.backend = pref;
    }
    Keychain::from_config(&config.keychain)
}

/// Fail before touching arguments or prompting when there is no backend.
fn ensure_supported(keychain: &Keychain) -> Result<(), KeychainError> {
    if keychain.is_supported() {
        Ok(())
    } else {
        Err(KeychainError::Unsupported)
    }
}

/// Convert a command-line argument, rejecting non-UTF-8, empty, and
/// NUL-containing values.
fn text(value: &OsStr) -> Result<&str, KeychainError> {
    if !is_valid_non_null_utf8_bytes(value.as_encoded_bytes()) {
        return Err(KeychainError::InvalidValue);
    }
    value.to_str().ok_or(KeychainError::InvalidValue)
}

fn read_password(
    password: Option<OsString>,
    from_stdin: bool,
    service: &str,
    account: &str,
) -> anyhow::Result<Zeroizing<String>> {
    if let Some(password) = password {
        return password
            .into_string()
            .map(Zeroizing::new)
            .map_err(|_| anyhow::Error::from(KeychainError::InvalidValue));
    }

    if from_stdin {
        let mut line = Zeroizing::new(String::new());
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| anyhow::anyhow!("Failed to read password from stdin: {}", e))?;
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        return Ok(line);
    }

    let prompt = format!("Password for {}@{}: ", service, account);
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Run `keytar add`.
pub fn add(keychain: &Keychain, args: SetArgs) -> anyhow::Result<()> {
    ensure_supported(keychain)?;
    let SetArgs {
        target,
        password,
        password_stdin,
    } = args;
    let service = text(&target.service)?;
    let account = text(&target.account)?;
    let password = read_password(password, password_stdin, service, account)?;

    keychain.add_password(service, account, &password)?;
    debug!(service, account, "password stored");
    println!("Password for {}@{} stored.", service, account);
    Ok(())
}

/// Run `keytar get`.
pub fn get(keychain: &Keychain, args: LookupArgs) -> anyhow::Result<()> {
    ensure_supported(keychain)?;
    let service = text(&args.target.service)?;
    let account = text(&args.target.account)?;

    let password = keychain.get_password(service, account)?;
    println!("{}", password.expose_secret());
    Ok(())
}

/// Run `keytar delete`.
pub fn delete(keychain: &Keychain, args: LookupArgs) -> anyhow::Result<()> {
    ensure_supported(keychain)?;
    let service = text(&args.target.service)?;
    let account = text(&args.target.account)?;

    keychain.delete_password(service, account)?;
    println!("Password for {}@{} deleted.", service, account);
    Ok(())
}

/// Run `keytar replace`.
pub fn replace(keychain: &Keychain, args: SetArgs) -> anyhow::Result<()> {
    ensure_supported(keychain)?;
    let SetArgs {
        target,
        password,
        password_stdin,
    } = args;
    let service = text(&target.service)?;
    let account = text(&target.account)?;
    let password = read_password(password, password_stdin, service, account)?;

    keychain.replace_password(service, account, &password)?;
    println!("Password for {}@{} replaced.", service, account);
    Ok(())
}
