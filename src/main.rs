use std::fs;

use ascent_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting rocket ascent simulation...");

    let params = RocketParameters::default();
    let series = integrate(&params)?;

    let summary = SimulationSummary::from_series(&params, &series)?;
    println!("{}", summary);

    let record = SimulationRecord::from_series(
        "Vertical ascent of the reference vehicle",
        "ROCKET_ASCENT",
        "SUCCESS",
        &series,
    );
    fs::write("resultado_simulacao.json", record.to_json_pretty()?)?;
    println!("Results written to resultado_simulacao.json");

    let mut log = EventLog::new();
    let id = log.put(StoredRecord::Simulation(record));
    println!("Simulation record stored with id {}", id);

    Ok(())
}
