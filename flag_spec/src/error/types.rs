//! Primary error enum for flag value validation.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::pattern::PatternError;

/// Whether a value was supplied for a named flag or a positional argument.
///
/// The subject only changes how errors are worded: flags are reported by
/// name, positional arguments by their help placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// A `--name` or `-alias` option.
    Flag,
    /// A value supplied by position.
    Argument,
}

impl Subject {
    /// Map the positional indicator used by dispatchers onto a subject.
    #[must_use]
    pub const fn from_is_arg(is_arg: bool) -> Self {
        if is_arg { Self::Argument } else { Self::Flag }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flag => "Flag",
            Self::Argument => "Argument",
        })
    }
}

/// Kind of filesystem entry a path-typed value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// A file (regular or otherwise).
    File,
    /// A directory.
    Directory,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "File",
            Self::Directory => "Directory",
        })
    }
}

/// Fieldless classification of a [`ValidationError`].
///
/// Useful when callers want to branch on the violated rule without matching
/// on every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Both the long and the short form were supplied.
    ConflictingForms,
    /// A required value-bearing flag was absent.
    MissingRequired,
    /// The referenced path does not exist.
    PathNotFound,
    /// The path exists but is not a regular file.
    NotARegularFile,
    /// The path exists but is not a directory.
    NotADirectory,
    /// The path could not be inspected or read.
    FileUnreadable,
    /// The file contents are not syntactically valid JSON.
    InvalidJson,
    /// The value does not match the pattern for its type.
    InvalidValue,
    /// The pattern for the value type could not be constructed.
    InvalidPattern,
}

/// A single violated constraint reported by [`FlagSpec::validate`].
///
/// Messages are stable and intended for end users.
///
/// [`FlagSpec::validate`]: crate::FlagSpec::validate
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Both `-alias` and `--name` carried a value.
    #[error("Both -{alias} and --{name} passed")]
    ConflictingForms {
        /// Short alias of the flag.
        alias: String,
        /// Long name of the flag.
        name: String,
    },

    /// A required flag or argument was not supplied.
    #[error("{subject} {label} is missing")]
    MissingRequired {
        /// Flag or positional argument.
        subject: Subject,
        /// Flag name or argument placeholder.
        label: String,
    },

    /// A path-typed value names nothing on the filesystem.
    #[error("{kind} {path} from {label} does not exist")]
    PathNotFound {
        /// Entry kind expected by the declaration.
        kind: PathKind,
        /// Path as supplied by the user.
        path: Utf8PathBuf,
        /// Flag name or argument placeholder.
        label: String,
    },

    /// A value declared as a regular file points at something else.
    #[error("Path {path} from {label} is not a regular file")]
    NotARegularFile {
        /// Path as supplied by the user.
        path: Utf8PathBuf,
        /// Flag name or argument placeholder.
        label: String,
    },

    /// A value declared as a directory points at something else.
    #[error("Path {path} from {label} is not a directory")]
    NotADirectory {
        /// Path as supplied by the user.
        path: Utf8PathBuf,
        /// Flag name or argument placeholder.
        label: String,
    },

    /// The path could not be inspected or its contents read.
    #[error("{path} {label} cannot be opened")]
    FileUnreadable {
        /// Path as supplied by the user.
        path: Utf8PathBuf,
        /// Flag name or argument placeholder.
        label: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file contents failed to parse as JSON.
    #[error("{path} {label} is not a valid JSON")]
    InvalidJson {
        /// Path as supplied by the user.
        path: Utf8PathBuf,
        /// Flag name or argument placeholder.
        label: String,
        /// Parser diagnostic.
        #[source]
        source: serde_json::Error,
    },

    /// The value does not match the pattern built for its type.
    #[error("{subject} {label} has invalid value")]
    InvalidValue {
        /// Flag or positional argument.
        subject: Subject,
        /// Flag name or argument placeholder.
        label: String,
    },

    /// The value pattern could not be compiled.
    ///
    /// Reported to users exactly like [`ValidationError::InvalidValue`]; the
    /// compilation failure is kept as the error source.
    #[error("{subject} {label} has invalid value")]
    InvalidPattern {
        /// Flag or positional argument.
        subject: Subject,
        /// Flag name or argument placeholder.
        label: String,
        /// Pattern construction failure.
        #[source]
        source: PatternError,
    },
}

impl ValidationError {
    /// Classify the error without inspecting its fields.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ConflictingForms { .. } => ErrorKind::ConflictingForms,
            Self::MissingRequired { .. } => ErrorKind::MissingRequired,
            Self::PathNotFound { .. } => ErrorKind::PathNotFound,
            Self::NotARegularFile { .. } => ErrorKind::NotARegularFile,
            Self::NotADirectory { .. } => ErrorKind::NotADirectory,
            Self::FileUnreadable { .. } => ErrorKind::FileUnreadable,
            Self::InvalidJson { .. } => ErrorKind::InvalidJson,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::InvalidPattern { .. } => ErrorKind::InvalidPattern,
        }
    }
}
