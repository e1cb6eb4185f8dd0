use clap::Subcommand;
use hourglass_core::{project, CountdownTimer, LoopOption, MenuSection, SessionController, Theme};

use crate::common;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Mark the splash animation finished (opens the password prompt)
    SplashDone,
    /// Submit the unlock password
    Unlock { password: String },
    /// Dismiss the password prompt
    Cancel,
    /// Toggle a menu section (apps, limits, loops, customisation)
    Menu { section: String },
    /// Toggle a platform in the selected-app set
    App { platform: String },
    /// Configure a time limit for a selected platform
    Limit {
        platform: String,
        #[arg(long, default_value = "0")]
        hours: u32,
        #[arg(long, default_value = "0")]
        minutes: u32,
        #[arg(long, default_value = "0")]
        seconds: u32,
    },
    /// Toggle a recurrence tag (daily, weekly, monthly, yearly)
    Loop { option: String },
    /// Select the accent theme
    Theme { theme: String },
    /// Discard all session and timer state
    Reset,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = common::load()?;

    match action {
        SessionAction::SplashDone => {
            if let Some(event) = state.session.splash_complete() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        SessionAction::Unlock { password } => {
            let result = state.session.submit_password(&password);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        SessionAction::Cancel => {
            if let Some(event) = state.session.cancel_prompt() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        SessionAction::Menu { section } => {
            let section: MenuSection = section.parse()?;
            state.session.toggle_menu(section);
            print_snapshot(&state)?;
        }
        SessionAction::App { platform } => {
            state.session.toggle_app(&platform);
            print_snapshot(&state)?;
        }
        SessionAction::Limit {
            platform,
            hours,
            minutes,
            seconds,
        } => {
            state.session.ensure_time_limit(&platform)?;
            state
                .session
                .set_time_limit(&platform, hours, minutes, seconds)?;
            print_snapshot(&state)?;
        }
        SessionAction::Loop { option } => {
            let option: LoopOption = option.parse()?;
            state.session.toggle_loop(option);
            print_snapshot(&state)?;
        }
        SessionAction::Theme { theme } => {
            let theme: Theme = theme.parse()?;
            state.session.set_theme(theme);
            print_snapshot(&state)?;
        }
        SessionAction::Reset => {
            state.session = SessionController::new(state.config.auth.password.clone());
            state.timer = CountdownTimer::new();
            print_snapshot(&state)?;
        }
    }

    common::save(&state)?;
    Ok(())
}

fn print_snapshot(state: &common::CliState) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = project(&state.session, &state.timer);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
