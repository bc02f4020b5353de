//! Command to assert that a dotted candidate prefixes a path.

use crate::error::CliError;
use crate::utils::{parse_subject, GlobalOptions};
use clap::Args;

/// Assert that a dotted candidate is a prefix of a path.
#[derive(Args)]
pub struct AssertPrefixCommand {
    /// Subject string to parse
    #[arg(value_name = "SUBJECT")]
    pub subject: String,

    /// Dotted candidate to test against the parsed path
    #[arg(value_name = "CANDIDATE")]
    pub candidate: String,

    /// Compare identifiers case-insensitively
    #[arg(long)]
    pub fold: bool,

    /// Invert the assertion (fail if the candidate is a prefix)
    #[arg(long)]
    pub not: bool,
}

impl AssertPrefixCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse the subject into a path
        let path = parse_subject(&self.subject)?;

        // 2. Run the prefix check
        let matched = if self.fold {
            path.has_prefix_fold(&self.candidate)
        } else {
            path.has_prefix(&self.candidate)
        };

        // 3. Check assertion
        let success = if self.not { !matched } else { matched };

        // 4. Return with appropriate exit code
        if success {
            Ok(())
        } else {
            let msg = if self.not {
                format!(
                    "Assertion failed: {} is a prefix of {}",
                    self.candidate, self.subject
                )
            } else {
                format!(
                    "Assertion failed: {} is not a prefix of {}",
                    self.candidate, self.subject
                )
            };
            Err(CliError::SemanticFailure(msg))
        }
    }
}
