//! Loading option overrides from files and the environment.

pub mod error;
pub mod sources;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::options::LockOptions;
use error::OptionsLoadError;
use sources::OptionsFile;

/// Env var naming an options file.
pub const OPTIONS_PATH_ENV: &str = "LOCK_OPTIONS_PATH";
/// Env var holding inline JSON options.
pub const OPTIONS_JSON_ENV: &str = "LOCK_OPTIONS_JSON";

/// Source that produced the effective options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionsSource {
    /// Nothing found; built-in defaults.
    #[default]
    Default,
    /// File named by `$LOCK_OPTIONS_PATH`.
    EnvPath(PathBuf),
    /// Inline JSON from `$LOCK_OPTIONS_JSON`.
    EnvInline,
    /// A default file found in the working directory.
    File(PathBuf),
}

impl LockOptions {
    /// Load options overrides.
    /// Evaluation order:
    /// 1) `$LOCK_OPTIONS_PATH` (TOML or JSON file),
    /// 2) `$LOCK_OPTIONS_JSON` (inline JSON),
    /// 3) the first default file that exists,
    /// 4) defaults if none of the above is set.
    pub fn load_from_env() -> Result<(Self, OptionsSource), OptionsLoadError>
    {
        if let Ok(path_str) = env::var(OPTIONS_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let options = Self::load_from_file(&path)?;
            return Ok((options, OptionsSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(OPTIONS_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let options = Self::parse_json(&raw)?;
            return Ok((options, OptionsSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let options = Self::load_from_file(&path)?;
            return Ok((options, OptionsSource::File(path)));
        }

        debug!("no lock options overrides found, using defaults");
        Ok((Self::default(), OptionsSource::Default))
    }

    /// Load a file, picking the parser from its extension.
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsLoadError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            OptionsLoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(path = %path.display(), "loading lock options");

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents),
            Some("toml") | Some("tml") => toml::from_str::<OptionsFile>(
                &contents,
            )
            .map(LockOptions::from)
            .map_err(|source| OptionsLoadError::Toml {
                path: path.to_path_buf(),
                source,
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse TOML, falling back to JSON. `origin` names the input in errors.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, OptionsLoadError> {
        // Try TOML first, then JSON for convenience.
        match toml::from_str::<OptionsFile>(contents) {
            Ok(file) => Ok(file.into()),
            Err(toml_err) => serde_json::from_str::<OptionsFile>(contents)
                .map(LockOptions::from)
                .map_err(|json_err| OptionsLoadError::Unrecognized {
                    origin: origin.to_string(),
                    toml: toml_err.to_string(),
                    json: json_err.to_string(),
                }),
        }
    }

    /// Parse inline JSON.
    pub fn parse_json(raw: &str) -> Result<Self, OptionsLoadError> {
        Ok(serde_json::from_str::<OptionsFile>(raw)?.into())
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "lock.toml",
            "lock.json",
            "config/lock.toml",
            "config/lock.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}
