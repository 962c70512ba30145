//! Init command: key material and config bootstrap.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::keys;
use crate::error::{ConfigError, Error, Result};

/// Initialize cabinet: generate key material and write `.cabinet.toml`.
///
/// Idempotent: existing key material and config are kept.
pub fn execute() -> Result<()> {
    let config = Config::load()?;

    match keys::generate(&config) {
        Ok(path) => {
            output::success("key material generated");
            output::kv("key file", path.display());
        }
        Err(Error::Config(ConfigError::AlreadyInitialized)) => {
            output::dimmed("key file already exists, keeping it");
        }
        Err(e) => return Err(e),
    }

    if !Config::exists() {
        config.save()?;
        output::success("wrote .cabinet.toml");
    }

    output::kv("data dir", config.data_dir()?.display());
    output::hint("set CABINET_PROJECT and CABINET_SERVICE, then: cabinet secret create <name>");

    Ok(())
}
