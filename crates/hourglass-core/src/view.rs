//! View-state projection.
//!
//! A pure mapping of controller + countdown state into everything a
//! rendering host needs per frame: which screen to show, what is expanded,
//! the active palette, and the formatted remaining-time label. Keeping the
//! derivation here lets it be tested with plain input/output pairs.

use serde::Serialize;

use crate::countdown::CountdownTimer;
use crate::session::{AuthState, LoopOption, MenuSection, Palette, SessionController, Theme};

/// Which top-level screen the host should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Splash,
    PasswordPrompt,
    Menu,
}

/// Display-ready snapshot of the whole app.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub screen: Screen,
    pub expanded_menu: Option<MenuSection>,
    pub theme: Theme,
    pub palette: Palette,
    pub selected_apps: Vec<String>,
    pub selected_loops: Vec<LoopOption>,
    /// Platforms with a configured limit, in configuration order.
    pub limited_apps: Vec<String>,
    /// False while no time limits exist; the start action stays disabled.
    pub start_enabled: bool,
    pub counting_down: bool,
    /// Remaining time as `"HHh MMm SSs"`.
    pub remaining_label: String,
}

impl ViewSnapshot {
    /// Per-section expanded flag, for hosts that render chevrons.
    pub fn is_expanded(&self, section: MenuSection) -> bool {
        self.expanded_menu == Some(section)
    }
}

/// Project the current state of both components into a [`ViewSnapshot`].
pub fn project(session: &SessionController, countdown: &CountdownTimer) -> ViewSnapshot {
    let screen = match session.auth() {
        AuthState::Locked => Screen::Splash,
        AuthState::Prompting => Screen::PasswordPrompt,
        AuthState::Authenticated => Screen::Menu,
    };
    let snap = countdown.snapshot();
    ViewSnapshot {
        screen,
        expanded_menu: session.expanded_menu(),
        theme: session.theme(),
        palette: session.theme().palette(),
        selected_apps: session.selected_apps().map(str::to_string).collect(),
        selected_loops: session.selected_loops().collect(),
        limited_apps: session.time_limits().keys().cloned().collect(),
        start_enabled: session.has_limits(),
        counting_down: snap.running,
        remaining_label: format_remaining(snap.remaining_secs),
    }
}

/// Format seconds as `"HHh MMm SSs"`, zero-padded to two digits per field.
/// Inputs are clamped upstream, so hours never exceed two digits.
pub fn format_remaining(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}h {minutes:02}m {seconds:02}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_remaining_pads_fields() {
        assert_eq!(format_remaining(0), "00h 00m 00s");
        assert_eq!(format_remaining(3723), "01h 02m 03s");
        assert_eq!(format_remaining(59), "00h 00m 59s");
        assert_eq!(format_remaining(23 * 3600 + 59 * 60 + 59), "23h 59m 59s");
    }

    #[test]
    fn screen_follows_auth_state() {
        let mut session = SessionController::new("pw");
        let timer = CountdownTimer::new();

        assert_eq!(project(&session, &timer).screen, Screen::Splash);
        session.splash_complete();
        assert_eq!(project(&session, &timer).screen, Screen::PasswordPrompt);
        session.submit_password("pw");
        assert_eq!(project(&session, &timer).screen, Screen::Menu);
    }

    #[test]
    fn start_is_disabled_without_limits() {
        let mut session = SessionController::new("pw");
        let timer = CountdownTimer::new();
        session.toggle_app("Instagram");
        assert!(!project(&session, &timer).start_enabled);

        session.ensure_time_limit("Instagram").unwrap();
        assert!(project(&session, &timer).start_enabled);
    }

    #[test]
    fn snapshot_carries_theme_palette() {
        let mut session = SessionController::new("pw");
        let timer = CountdownTimer::new();
        session.set_theme(Theme::LightGreen);
        let snap = project(&session, &timer);
        assert_eq!(snap.theme, Theme::LightGreen);
        assert_eq!(snap.palette, Theme::LightGreen.palette());
    }

    #[test]
    fn expanded_flags_follow_the_open_section() {
        let mut session = SessionController::new("pw");
        let timer = CountdownTimer::new();
        session.toggle_menu(MenuSection::Limits);
        let snap = project(&session, &timer);
        assert!(snap.is_expanded(MenuSection::Limits));
        assert!(!snap.is_expanded(MenuSection::Apps));
    }

    #[test]
    fn counting_down_mirrors_the_timer() {
        let session = SessionController::new("pw");
        let mut timer = CountdownTimer::new();
        timer.arm(90);
        let snap = project(&session, &timer);
        assert!(snap.counting_down);
        assert_eq!(snap.remaining_label, "00h 01m 30s");
    }
}
