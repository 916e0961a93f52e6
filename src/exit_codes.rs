//! Exit code constants for the xts CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing/invalid config, unknown command)
//! - 2: Ambiguous config, re-run with an explicit `.xts` file
//!
//! Commands run by the shell runner report their own exit codes. Those are
//! passed through, except that a step can never claim 2: a step exiting 2,
//! or with a code outside 0..=255, ends the process with 1.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing or unreadable config, unknown command.
pub const USER_ERROR: i32 = 1;

/// More than one config was discovered and the operator must pick one.
pub const AMBIGUOUS_CONFIG: i32 = 2;

/// Map the exit code of the last executed step to the process status.
pub fn from_step(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(code) if i32::from(code) != AMBIGUOUS_CONFIG => code,
        _ => USER_ERROR as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, AMBIGUOUS_CONFIG];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_match_cli_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(AMBIGUOUS_CONFIG, 2);
    }

    #[test]
    fn step_codes_pass_through() {
        assert_eq!(from_step(0), 0);
        assert_eq!(from_step(1), 1);
        assert_eq!(from_step(3), 3);
        assert_eq!(from_step(255), 255);
    }

    #[test]
    fn step_codes_never_claim_ambiguity() {
        // `make` fails with 2
        assert_eq!(from_step(2), USER_ERROR as u8);
        assert_eq!(from_step(256), USER_ERROR as u8);
        assert_eq!(from_step(-1), USER_ERROR as u8);
    }
}
