// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod matrix;
mod xlsx;

pub use logic::ExportLogic;
pub use matrix::{CellKind, CellStyle, ExportMatrix, export_file_name, to_export_matrix};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Messaggio finale condiviso da tutti i formati di export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
