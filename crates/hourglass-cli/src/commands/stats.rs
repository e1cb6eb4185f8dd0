use hourglass_core::storage::Database;

pub fn run(history: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let stats = db.stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    if let Some(limit) = history {
        let records = db.history(limit)?;
        println!("{}", serde_json::to_string_pretty(&records)?);
    }
    Ok(())
}
