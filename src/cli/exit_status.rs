use std::process::ExitCode;

/// Exit status of the `tscat` binary.
///
/// - `Success` (0): command completed, nothing to fix
/// - `Failure` (1): command completed but found errors, or `fmt --check`
///   found files that would change
/// - `Error` (2): command could not run (unreadable file, bad config, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Failure when errors were counted and the command treats them as fatal.
    pub fn from_errors(error_count: usize, exit_on_errors: bool) -> Self {
        if exit_on_errors && error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
