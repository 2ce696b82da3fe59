use std::fmt;
use std::io;

/// Filesystem operation an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    ReadDirectory,
    ReadFile,
    WriteFile,
    AppendFile,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ReadDirectory => "read directory",
            Self::ReadFile => "read file",
            Self::WriteFile => "write file",
            Self::AppendFile => "append file",
        };
        f.write_str(name)
    }
}

/// Outcome of a failed gateway operation
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// A required input was absent; the message is caller-facing
    #[error("{0}")]
    MissingParameter(&'static str),

    /// The underlying filesystem call failed
    #[error("failed to {op}: {source}")]
    Io {
        op: FileOp,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    pub const fn io(op: FileOp, source: io::Error) -> Self {
        Self::Io { op, source }
    }

    /// Whether the caller, not the filesystem, is at fault
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingParameter(_))
    }
}
