//! Scene breakdown generation.
//!
//! `process_script` stands in for the script analysis pipeline: it receives
//! the directory the archive was extracted into and returns the scene table.
//! Until the real pipeline is wired in it produces a fixed sample breakdown,
//! which is enough to exercise the whole upload/result/download flow.

use std::path::Path;

use common::model::record::Record;

/// Produces the scene breakdown for an extracted script archive.
pub fn process_script(_extract_dir: &Path) -> Vec<Record> {
    vec![
        Record::new()
            .with("scene_number", 1i64)
            .with("location", "INT. OFFICE")
            .with("time_of_day", "Day")
            .with("main_characters", "Ivan, Maria")
            .with("extras", "Secretary")
            .with("props", "Desk, laptop")
            .with("special_effects", "None"),
        Record::new()
            .with("scene_number", 2i64)
            .with("location", "EXT. STREET")
            .with("time_of_day", "Night")
            .with("main_characters", "Petr, Anna")
            .with("extras", "Passers-by")
            .with("props", "Car")
            .with("special_effects", "Smoke machine"),
        Record::new()
            .with("scene_number", 3i64)
            .with("location", "INT. CAFE")
            .with("time_of_day", "Morning")
            .with("main_characters", "Maria, Anna")
            .with("extras", "Waiters, customers")
            .with("props", "Cups, menus")
            .with("special_effects", "None"),
    ]
}

/// Writes the breakdown as a CSV file, one column per key of the first
/// record, cells in their display form.
pub fn write_csv(records: &[Record], path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    let columns: Vec<String> = match records.first() {
        Some(first) => first.columns().map(str::to_string).collect(),
        None => return writer.flush().map_err(Into::into),
    };
    writer.write_record(&columns)?;

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|col| record.get(col).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
