//! Per-request types: lifecycle actions and actor context.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A requested change in an entity's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleAction {
    Submit,
    Schedule,
    SubmitAndSchedule,
    Suspend,
    Resume,
}

impl LifecycleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleAction::Submit => "SUBMIT",
            LifecycleAction::Schedule => "SCHEDULE",
            LifecycleAction::SubmitAndSchedule => "SUBMIT_AND_SCHEDULE",
            LifecycleAction::Suspend => "SUSPEND",
            LifecycleAction::Resume => "RESUME",
        }
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who requested a transition.
///
/// Carried through to the audit trail; never interpreted by the
/// coordinator itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    /// The requesting principal (user name, service account, ...).
    pub principal: String,
    /// Where the request came from (host, CLI, ...), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ActorContext {
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tokens() {
        assert_eq!(LifecycleAction::Schedule.to_string(), "SCHEDULE");
        assert_eq!(
            LifecycleAction::SubmitAndSchedule.to_string(),
            "SUBMIT_AND_SCHEDULE"
        );
    }

    #[test]
    fn actor_context_builder() {
        let actor = ActorContext::new("ops").with_source("cli");
        assert_eq!(actor.principal, "ops");
        assert_eq!(actor.source.as_deref(), Some("cli"));
    }
}
