/// Exit status for successful runs, including runs that never reach a
/// terminal.
pub const EXIT_OK: i32 = 0;

/// Exit status for the failing terminals.
pub const EXIT_FAILURE: i32 = 1;

/// Final verdict of one walk through the decision tree.
///
/// Terminal handlers report their verdict instead of terminating the
/// process; only the binary entry point turns an `Outcome` into an exit
/// status, so the dispatcher can be exercised in-process by tests and
/// embedding harnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input exhausted before a terminal, or terminal C.
    Success,
    /// Terminal D: success after announcing shutdown.
    SuccessWithExit,
    /// Terminal E: unrecoverable fault that unwinds to the process boundary.
    Fatal,
    /// Terminal F: deliberate failure exit.
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success | Outcome::SuccessWithExit => EXIT_OK,
            Outcome::Fatal | Outcome::Failure => EXIT_FAILURE,
        }
    }

    pub fn is_success(self) -> bool {
        self.exit_code() == EXIT_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_outcomes_map_to_zero() {
        assert_eq!(Outcome::Success.exit_code(), EXIT_OK);
        assert_eq!(Outcome::SuccessWithExit.exit_code(), EXIT_OK);
        assert!(Outcome::Success.is_success());
        assert!(Outcome::SuccessWithExit.is_success());
    }

    #[test]
    fn failing_outcomes_map_to_one() {
        assert_eq!(Outcome::Fatal.exit_code(), EXIT_FAILURE);
        assert_eq!(Outcome::Failure.exit_code(), EXIT_FAILURE);
        assert!(!Outcome::Fatal.is_success());
        assert!(!Outcome::Failure.is_success());
    }
}
