use hourglass_core::project;

use crate::common;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let state = common::load()?;
    let snapshot = project(&state.session, &state.timer);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
