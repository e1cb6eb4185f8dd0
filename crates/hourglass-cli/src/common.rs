//! Shared state handling for CLI commands.
//!
//! Each invocation re-hydrates the controller and timer from the kv store,
//! applies one intent, and writes them back. The password never travels
//! through the store; it is re-injected from config on every load.

use hourglass_core::storage::{Config, Database};
use hourglass_core::{CountdownTimer, SessionController};

const SESSION_KEY: &str = "session_controller";
const TIMER_KEY: &str = "countdown_timer";

pub struct CliState {
    pub config: Config,
    pub db: Database,
    pub session: SessionController,
    pub timer: CountdownTimer,
}

pub fn load() -> Result<CliState, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;

    let mut session = match db.kv_get(SESSION_KEY)? {
        Some(json) => serde_json::from_str(&json)
            .unwrap_or_else(|_| SessionController::new(String::new())),
        None => SessionController::new(String::new()),
    };
    session.set_password(config.auth.password.clone());

    let timer = match db.kv_get(TIMER_KEY)? {
        Some(json) => serde_json::from_str(&json).unwrap_or_default(),
        None => CountdownTimer::new(),
    };

    tracing::debug!(auth = ?session.auth(), running = timer.is_running(), "state loaded");

    Ok(CliState {
        config,
        db,
        session,
        timer,
    })
}

pub fn save(state: &CliState) -> Result<(), Box<dyn std::error::Error>> {
    state
        .db
        .kv_set(SESSION_KEY, &serde_json::to_string(&state.session)?)?;
    state
        .db
        .kv_set(TIMER_KEY, &serde_json::to_string(&state.timer)?)?;
    Ok(())
}
