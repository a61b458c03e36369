//! Reading declaration files.

use camino::Utf8Path;
use serde::Deserialize;
use tracing::warn;

use super::FlagDeclaration;
use crate::{DeclarationError, FlagSpec};

/// Supported declaration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationFormat {
    /// TOML with a `[[flag]]` array of tables. Requires the `toml` feature.
    Toml,
    /// JSON object with a `"flag"` array.
    Json,
}

impl DeclarationFormat {
    /// Pick a format from the file extension; anything but `.json` is TOML.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeclarationFile {
    #[serde(default)]
    flag: Vec<FlagDeclaration>,
}

/// Load every declaration in `path` and build the flag specs.
///
/// # Errors
///
/// Returns [`DeclarationError::Io`] when the file cannot be read, and
/// otherwise the errors of [`parse_declarations`].
pub fn load_declarations<C>(path: &Utf8Path) -> Result<Vec<FlagSpec<C>>, DeclarationError> {
    let data = std::fs::read_to_string(path).map_err(|source| DeclarationError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_declarations(path, &data, DeclarationFormat::from_path(path))
}

/// Parse declarations from `data`, using `path` for diagnostics only.
///
/// Specs are returned in file order.
///
/// # Errors
///
/// Returns [`DeclarationError::Parse`] for malformed input,
/// [`DeclarationError::UnsupportedFormat`] when TOML support is compiled
/// out, and [`DeclarationError::Flag`] naming the first declaration whose
/// constraints are rejected.
pub fn parse_declarations<C>(
    path: &Utf8Path,
    data: &str,
    format: DeclarationFormat,
) -> Result<Vec<FlagSpec<C>>, DeclarationError> {
    let file = parse_file(path, data, format).inspect_err(|err| {
        warn!(%path, error = %err, "could not parse flag declarations");
    })?;
    file.flag
        .into_iter()
        .map(|declaration| {
            let name = declaration.name.clone();
            FlagSpec::try_from(declaration).map_err(|err| err.for_flag(name))
        })
        .collect()
}

fn parse_file(
    path: &Utf8Path,
    data: &str,
    format: DeclarationFormat,
) -> Result<DeclarationFile, DeclarationError> {
    let parse_error = |source: Box<dyn std::error::Error + Send + Sync>| DeclarationError::Parse {
        path: path.to_owned(),
        source,
    };
    match format {
        DeclarationFormat::Json => serde_json::from_str(data).map_err(|e| parse_error(e.into())),
        DeclarationFormat::Toml => {
            #[cfg(feature = "toml")]
            {
                toml::from_str(data).map_err(|e| parse_error(e.into()))
            }
            #[cfg(not(feature = "toml"))]
            {
                let _ = (data, parse_error);
                Err(DeclarationError::UnsupportedFormat {
                    path: path.to_owned(),
                    format: "toml",
                })
            }
        }
    }
}
