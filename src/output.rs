//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use tabled::{Table, Tabled};

use crate::VerifyResult;

/// Trait for human-readable output.
///
/// Implemented by report types to provide formatted output suitable for
/// terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

/// One line of the verification table.
#[derive(Tabled)]
pub struct VerifyRow {
    check: &'static str,
    #[tabled(rename = "result")]
    outcome: &'static str,
    message: String,
}

fn outcome(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "FAILED"
    }
}

impl VerifyResult {
    /// Rows for tabular display: mock usage, mock expectations, history.
    pub fn rows(&self) -> Vec<VerifyRow> {
        vec![
            VerifyRow {
                check: "all mocks used",
                outcome: outcome(self.mocks.all_used),
                message: self.mocks.message.clone(),
            },
            VerifyRow {
                check: "mock expectations",
                outcome: outcome(self.mocks.verified),
                message: String::new(),
            },
            VerifyRow {
                check: "history clean",
                outcome: outcome(self.history.verified),
                message: self.history.message.clone(),
            },
        ]
    }
}

impl PrettyPrint for VerifyResult {
    fn pretty_print(&self) -> String {
        let verdict = if self.passed() {
            "Session verified"
        } else {
            "Session verification failed"
        };
        let divider = "─".repeat(verdict.len().max(30));

        format!("{verdict}\n{divider}\n{}", Table::new(self.rows()))
    }
}
