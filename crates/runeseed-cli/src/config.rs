//! Configuration read from the environment.

use std::path::PathBuf;

use runeseed_engine::SeedSlice;

use crate::error::AppError;

/// Portable seed string to birth the world from.
pub const SEED_VAR: &str = "RUNESEED_SEED";
/// Path of the JSON seed store to resume from and save to.
pub const STORE_VAR: &str = "RUNESEED_STORE";
/// Number of sample draws to print.
pub const DRAWS_VAR: &str = "RUNESEED_DRAWS";
/// Exclusive upper bound of the sample draws.
pub const BOUND_VAR: &str = "RUNESEED_BOUND";

const DEFAULT_DRAWS: u32 = 10;
const DEFAULT_BOUND: i32 = 20;

/// Settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Master seed to birth from; entropy or the store file when `None`.
    pub seed: Option<SeedSlice>,
    /// Seed store file.
    pub store_path: Option<PathBuf>,
    /// Number of sample draws on the main stream.
    pub draws: u32,
    /// Exclusive upper bound of each sample draw.
    pub bound: i32,
}

impl CliConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns a variable's
    /// value or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let seed = lookup(SEED_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<SeedSlice>()
                    .map_err(|e| AppError::Config(format!("{SEED_VAR} is not a valid seed: {e}")))
            })
            .transpose()?;

        let store_path = lookup(STORE_VAR)
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let draws = match lookup(DRAWS_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("{DRAWS_VAR} must be a valid u32: {e}")))?,
            None => DEFAULT_DRAWS,
        };

        let bound = match lookup(BOUND_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("{BOUND_VAR} must be a valid i32: {e}")))?,
            None => DEFAULT_BOUND,
        };
        if bound <= 0 {
            return Err(AppError::Config(format!(
                "{BOUND_VAR} must be positive, got {bound}"
            )));
        }

        Ok(Self {
            seed,
            store_path,
            draws,
            bound,
        })
    }
}
