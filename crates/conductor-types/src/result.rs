//! Caller-facing operation results.

use serde::{Deserialize, Serialize};

/// Terminal status of a lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    Succeeded,
    Failed,
}

/// The only value returned to callers.
///
/// Failures carry a human-readable cause; internal error kinds are
/// distinguished in logs, not here. No operation returns partial
/// success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult {
    pub status: ApiStatus,
    pub message: String,
}

impl ApiResult {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Succeeded,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Failed,
            message: message.into(),
        }
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == ApiStatus::Succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_upper_case() {
        let result = ApiResult::succeeded("ok");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"SUCCEEDED\""));
        assert!(result.is_succeeded());
        assert!(!ApiResult::failed("no").is_succeeded());
    }
}
