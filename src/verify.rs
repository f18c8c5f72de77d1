//! Session verification report returned by `POST /sessions/verify`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmockerError};

/// Smocker's verdict on the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub mocks: MocksVerification,
    pub history: HistoryVerification,
}

/// Whether the mocks registered in the session were used as expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MocksVerification {
    /// Every mock's context constraints were respected.
    #[serde(default)]
    pub verified: bool,
    /// Every mock was called at least once.
    #[serde(default)]
    pub all_used: bool,
    #[serde(default)]
    pub message: String,
}

/// Whether the session's call history only holds matched calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryVerification {
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub message: String,
}

impl VerifyResult {
    /// True when every mock was used and no unexpected call was made.
    pub fn passed(&self) -> bool {
        self.mocks.all_used && self.history.verified
    }

    /// Turn the report into a pass/fail result.
    ///
    /// Unused mocks are reported ahead of unexpected calls when both occur.
    pub fn into_result(self) -> Result<()> {
        if !self.mocks.all_used {
            return Err(SmockerError::UnusedMocks {
                message: self.mocks.message,
            });
        }
        if !self.history.verified {
            return Err(SmockerError::UnexpectedCalls {
                message: self.history.message,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(all_used: bool, history_verified: bool) -> VerifyResult {
        serde_json::from_value(serde_json::json!({
            "mocks": {
                "verified": all_used,
                "all_used": all_used,
                "message": "mocks message"
            },
            "history": {
                "verified": history_verified,
                "message": "history message"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_all_good_passes() {
        let result = report(true, true);
        assert!(result.passed());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_unused_mocks_take_precedence() {
        for history_verified in [true, false] {
            let err = report(false, history_verified).into_result().unwrap_err();
            match err {
                SmockerError::UnusedMocks { message } => assert_eq!(message, "mocks message"),
                other => panic!("expected UnusedMocks, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unexpected_calls() {
        let err = report(true, false).into_result().unwrap_err();
        assert!(matches!(err, SmockerError::UnexpectedCalls { .. }));
        assert!(err
            .to_string()
            .contains("unexpected calls have been made in the current session"));
    }

    #[test]
    fn test_missing_fields_default_to_failure() {
        let result: VerifyResult = serde_json::from_str(r#"{"mocks": {}, "history": {}}"#).unwrap();
        assert!(!result.passed());
    }
}
