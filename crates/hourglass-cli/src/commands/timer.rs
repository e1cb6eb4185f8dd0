use chrono::{DateTime, Utc};
use clap::Subcommand;
use hourglass_core::storage::Database;
use hourglass_core::Event;

use crate::common;

// Arming context carried in the kv store so a later tick can write the
// history row with the platform and duration the countdown came from.
const ARMED_PLATFORM_KEY: &str = "armed_platform";
const ARMED_TOTAL_KEY: &str = "armed_total_secs";
const ARMED_AT_KEY: &str = "armed_at";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Arm the countdown from the first configured limit
    Start,
    /// Advance the countdown; the host delivers one tick per elapsed second
    Tick {
        #[arg(long, default_value = "1")]
        count: u32,
    },
    /// Stop the countdown, keeping the remaining time
    Cancel,
    /// Print the countdown snapshot as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = common::load()?;

    match action {
        TimerAction::Start => match state.session.start_countdown(&mut state.timer) {
            Some(event) => {
                if let Event::CountdownArmed {
                    ref platform,
                    total_secs,
                    at,
                } = event
                {
                    state.db.kv_set(ARMED_PLATFORM_KEY, platform)?;
                    state.db.kv_set(ARMED_TOTAL_KEY, &total_secs.to_string())?;
                    state.db.kv_set(ARMED_AT_KEY, &at.to_rfc3339())?;
                }
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            None => eprintln!("no time limits configured; nothing to arm"),
        },
        TimerAction::Tick { count } => {
            for _ in 0..count {
                if let Some(event) = state.timer.tick() {
                    record_completion(&state.db)?;
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&state.timer.snapshot())?
            );
        }
        TimerAction::Cancel => {
            if let Some(event) = state.timer.cancel() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Status => {
            println!(
                "{}",
                serde_json::to_string_pretty(&state.timer.snapshot())?
            );
        }
    }

    common::save(&state)?;
    Ok(())
}

fn record_completion(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let platform = db.kv_get(ARMED_PLATFORM_KEY)?.unwrap_or_default();
    let total_secs = db
        .kv_get(ARMED_TOTAL_KEY)?
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let armed_at = db
        .kv_get(ARMED_AT_KEY)?
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);
    db.record_countdown(&platform, total_secs, armed_at, Utc::now())?;
    Ok(())
}
