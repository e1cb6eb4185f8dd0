//! Session controller implementation.
//!
//! The controller is the single authority for the lock gate and all
//! configuration state. Like the countdown timer it has no internal
//! threads - every transition happens inside an intent call and completes
//! before returning.
//!
//! ## Auth Transitions
//!
//! ```text
//! Locked -> Prompting -> Authenticated (terminal for the session)
//!              ^   |
//!              |   v
//!            Locked (cancel)
//! ```

use chrono::Utc;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::limit::TimeLimit;
use super::theme::Theme;
use crate::countdown::CountdownTimer;
use crate::error::SessionError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthState {
    Locked,
    Prompting,
    Authenticated,
}

/// Outcome of a password submission. There is no lockout and no attempt
/// limit; the host may re-prompt indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthResult {
    Accepted,
    Rejected,
}

/// Collapsible menu sections. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuSection {
    Apps,
    Limits,
    Loops,
    Customisation,
}

/// Recurrence tag. No scheduling behavior is implemented against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopOption {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl MenuSection {
    pub const ALL: [MenuSection; 4] = [
        MenuSection::Apps,
        MenuSection::Limits,
        MenuSection::Loops,
        MenuSection::Customisation,
    ];
}

impl LoopOption {
    pub const ALL: [LoopOption; 4] = [
        LoopOption::Daily,
        LoopOption::Weekly,
        LoopOption::Monthly,
        LoopOption::Yearly,
    ];
}

impl std::str::FromStr for MenuSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apps" => Ok(MenuSection::Apps),
            "limits" => Ok(MenuSection::Limits),
            "loops" => Ok(MenuSection::Loops),
            "customisation" | "customization" => Ok(MenuSection::Customisation),
            _ => Err(format!("unknown menu section: '{s}'")),
        }
    }
}

impl std::str::FromStr for LoopOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(LoopOption::Daily),
            "weekly" => Ok(LoopOption::Weekly),
            "monthly" => Ok(LoopOption::Monthly),
            "yearly" => Ok(LoopOption::Yearly),
            _ => Err(format!("unknown loop option: '{s}'")),
        }
    }
}

/// Single authority for configuration state and the lock/unlock gate.
///
/// Selection containers are insertion-ordered so that iteration (and the
/// "first configured limit" pick in [`start_countdown`]) is deterministic.
///
/// [`start_countdown`]: SessionController::start_countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionController {
    auth: AuthState,
    /// Shared secret, injected from config. Never persisted with the rest
    /// of the state.
    #[serde(skip)]
    password: String,
    /// Staged prompt keystrokes. Cleared on every submission and cancel.
    #[serde(skip)]
    prompt_input: String,
    expanded_menu: Option<MenuSection>,
    selected_apps: IndexSet<String>,
    time_limits: IndexMap<String, TimeLimit>,
    selected_loops: IndexSet<LoopOption>,
    theme: Theme,
}

impl SessionController {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            auth: AuthState::Locked,
            password: password.into(),
            prompt_input: String::new(),
            expanded_menu: None,
            selected_apps: IndexSet::new(),
            time_limits: IndexMap::new(),
            selected_loops: IndexSet::new(),
            theme: Theme::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn auth(&self) -> AuthState {
        self.auth
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth == AuthState::Authenticated
    }

    pub fn expanded_menu(&self) -> Option<MenuSection> {
        self.expanded_menu
    }

    pub fn selected_apps(&self) -> impl Iterator<Item = &str> + '_ {
        self.selected_apps.iter().map(String::as_str)
    }

    pub fn is_selected(&self, platform: &str) -> bool {
        self.selected_apps.contains(platform)
    }

    pub fn time_limit(&self, platform: &str) -> Option<&TimeLimit> {
        self.time_limits.get(platform)
    }

    pub fn time_limits(&self) -> &IndexMap<String, TimeLimit> {
        &self.time_limits
    }

    pub fn has_limits(&self) -> bool {
        !self.time_limits.is_empty()
    }

    pub fn selected_loops(&self) -> impl Iterator<Item = LoopOption> + '_ {
        self.selected_loops.iter().copied()
    }

    pub fn is_loop_selected(&self, option: LoopOption) -> bool {
        self.selected_loops.contains(&option)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn prompt_input(&self) -> &str {
        &self.prompt_input
    }

    // ── Intents ──────────────────────────────────────────────────────

    /// Replace the shared secret. Used when re-hydrating persisted state,
    /// which never carries the password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Stage prompt keystrokes on behalf of the host input widget.
    pub fn set_prompt_input(&mut self, input: impl Into<String>) {
        self.prompt_input = input.into();
    }

    /// The splash animation finished; open the password prompt.
    /// No-op unless Locked.
    pub fn splash_complete(&mut self) -> Option<Event> {
        match self.auth {
            AuthState::Locked => {
                self.auth = AuthState::Prompting;
                Some(Event::PromptOpened { at: Utc::now() })
            }
            _ => None,
        }
    }

    /// Compare `input` against the shared secret. The staged prompt buffer
    /// is cleared on both outcomes; a mismatch leaves the auth state where
    /// it was so the host can re-prompt.
    pub fn submit_password(&mut self, input: &str) -> AuthResult {
        self.prompt_input.clear();
        if input == self.password {
            self.auth = AuthState::Authenticated;
            tracing::debug!("password accepted; session unlocked");
            AuthResult::Accepted
        } else {
            tracing::debug!("password rejected");
            AuthResult::Rejected
        }
    }

    /// Dismiss the prompt without authenticating. Prompting -> Locked.
    pub fn cancel_prompt(&mut self) -> Option<Event> {
        match self.auth {
            AuthState::Prompting => {
                self.auth = AuthState::Locked;
                self.prompt_input.clear();
                Some(Event::PromptCancelled { at: Utc::now() })
            }
            _ => None,
        }
    }

    /// Expand `section`, collapsing whatever was open; re-toggling the open
    /// section collapses it. The single assignment keeps at most one open.
    pub fn toggle_menu(&mut self, section: MenuSection) {
        self.expanded_menu = if self.expanded_menu == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    /// Toggle a platform in the selected-app set. Deselecting drops the
    /// platform's time limit with it. Returns true if the platform is
    /// selected after the toggle.
    pub fn toggle_app(&mut self, platform: &str) -> bool {
        if self.selected_apps.shift_remove(platform) {
            self.time_limits.shift_remove(platform);
            false
        } else {
            self.selected_apps.insert(platform.to_string());
            true
        }
    }

    /// Create a zero time limit for `platform` if none exists yet.
    ///
    /// # Errors
    /// [`SessionError::NotSelected`] if the platform is not in the
    /// selected-app set.
    pub fn ensure_time_limit(&mut self, platform: &str) -> Result<(), SessionError> {
        if !self.selected_apps.contains(platform) {
            return Err(SessionError::NotSelected {
                platform: platform.to_string(),
            });
        }
        self.time_limits
            .entry(platform.to_string())
            .or_insert_with(TimeLimit::zero);
        Ok(())
    }

    /// Overwrite the platform's limit, clamping each field to its range.
    ///
    /// # Errors
    /// [`SessionError::LimitNotConfigured`] if the platform has no
    /// existing entry.
    pub fn set_time_limit(
        &mut self,
        platform: &str,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Result<(), SessionError> {
        match self.time_limits.get_mut(platform) {
            Some(limit) => {
                limit.set(hours, minutes, seconds);
                Ok(())
            }
            None => Err(SessionError::LimitNotConfigured {
                platform: platform.to_string(),
            }),
        }
    }

    /// Toggle a recurrence tag. Returns true if it is selected after the
    /// toggle.
    pub fn toggle_loop(&mut self, option: LoopOption) -> bool {
        if self.selected_loops.shift_remove(&option) {
            false
        } else {
            self.selected_loops.insert(option);
            true
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Arm the countdown from the first configured limit, in insertion
    /// order. One timer, one limit: the earliest-configured platform wins.
    /// With no limits configured nothing is armed and `None` is returned.
    pub fn start_countdown(&mut self, timer: &mut CountdownTimer) -> Option<Event> {
        let (platform, limit) = self.time_limits.first()?;
        let platform = platform.clone();
        let total_secs = limit.total_secs();
        timer.arm(total_secs);
        tracing::info!(platform = %platform, total_secs, "countdown armed");
        Some(Event::CountdownArmed {
            platform,
            total_secs,
            at: Utc::now(),
        })
    }
}
