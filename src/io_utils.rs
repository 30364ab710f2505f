use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Create the parent directory first or pass a different --csv path.",
        PermissionDenied => "Pick a --csv path in a directory you can write to.",
        WriteZero => "Disk may be full. Free up space or drop --csv.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space or drop --csv.",
        _ => "Rerun without --csv to print the summary only.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn genematch_cli_error(context: &str, err: crate::GeneMatchError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &crate::GeneMatchError) -> String {
    use crate::GeneMatchError::*;
    match err {
        InvalidBase(c) => format!("invalid base {c:?}. Sequences may only contain C, T, G and A."),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Alloc(e) => format!("{e}. Try a shorter sequence or a larger minimum length."),
        LaneFailed { tile, reason } => format!("lane {tile} failed: {reason}. This is a bug."),
        Pool(msg) => format!("{msg}. Try a different --threads value."),
        Kernel(msg) => format!("{msg}. Rebuild without the gpu feature to match on the CPU."),
        Report(msg) => msg.clone(),
        Io(io) => format!("{io}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeneMatchError;

    #[test]
    fn hint_keeps_context() {
        let err = genematch_cli_error("configuring run", GeneMatchError::Config("min_length must be at least 1".into()));
        assert_eq!(
            err.to_string(),
            "configuring run: min_length must be at least 1. Invalid configuration."
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn io_errors_name_the_path() {
        let err = io_cli_error(
            "writing csv",
            Path::new("/nope/out.csv"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Error writing csv '/nope/out.csv'"));
        assert!(msg.ends_with("Create the parent directory first or pass a different --csv path."));
    }
}
