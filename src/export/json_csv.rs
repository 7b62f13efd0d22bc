// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::matrix::ExportMatrix;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: rows plus styles.
pub(crate) fn export_json(matrix: &ExportMatrix, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(matrix)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: header rows then data rows, styles dropped.
pub(crate) fn export_csv(matrix: &ExportMatrix, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    for row in matrix.all_rows() {
        wtr.write_record(row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
