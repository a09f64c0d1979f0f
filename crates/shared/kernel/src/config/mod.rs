use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment prefix for overrides, e.g. `IPNT__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "IPNT";
/// Base name of the configuration file when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

/// Custom error type for config loading.
#[ipnt_derive::ipnt_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base file**: `path`, or `server` in the working directory. The extension may be
///    omitted; any format the `config` crate understands (`toml`, `json`, `yaml`, ...) is found.
/// 2. **Environment**: variables prefixed with `IPNT__`, nested keys separated by `__`
///    (`IPNT__STORAGE__DATA_DIR` maps to `storage.data_dir`).
///
/// # Errors
/// Returns an error if the file is missing, cannot be parsed, or does not match `T`.
///
/// # Example
/// ```rust,no_run
/// use ipnt_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(path, true)
}

/// Same layering as [`load_config`], but a missing file is not an error:
/// the result is built from defaults and environment overrides only.
///
/// # Errors
/// Returns an error if an existing file cannot be parsed or does not match `T`.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(path, false)
}

fn build<T>(path: Option<impl AsRef<Path>>, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        );

    info!(path = %effective_path.display(), required, "Loading configuration");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
