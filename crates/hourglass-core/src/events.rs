use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every observable state change in the system produces an Event.
/// The host shell renders whatever the intent call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Splash finished; the password prompt is now showing.
    PromptOpened {
        at: DateTime<Utc>,
    },
    /// The password prompt was dismissed without authenticating.
    PromptCancelled {
        at: DateTime<Utc>,
    },
    /// A countdown was armed from a configured time limit.
    CountdownArmed {
        platform: String,
        total_secs: u64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero. Emitted exactly once per armed run.
    CountdownCompleted {
        at: DateTime<Utc>,
    },
    /// The countdown was stopped early; remaining time is preserved.
    CountdownCancelled {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
}
