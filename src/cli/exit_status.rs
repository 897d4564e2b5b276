use std::process::ExitCode;

/// How the process ends.
///
/// `init` refusing to overwrite an existing config is a `Failure`; anything
/// that surfaces a `SyncError` or other error is an `Error`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Map the outcome of the requested actions onto a status.
    pub fn from_outcome(succeeded: bool) -> Self {
        if succeeded {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
