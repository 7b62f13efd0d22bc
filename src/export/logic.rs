// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::matrix::ExportMatrix;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export della griglia.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `matrix` in `format`.
    ///
    /// - `file`: explicit output path; when `None` the file goes to `dir`
    ///   under the matrix's derived file name.
    /// - `force`: overwrite without asking.
    ///
    /// Returns the path written.
    pub fn export(
        matrix: &ExportMatrix,
        format: ExportFormat,
        file: Option<&Path>,
        dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = Self::target_path(matrix, format, file, dir);

        ensure_writable(&path, force)?;

        if matrix.is_empty() {
            warning("No rows for the selected period; writing an empty export.");
        }

        match format {
            ExportFormat::Csv => export_csv(matrix, &path)?,
            ExportFormat::Json => export_json(matrix, &path)?,
            ExportFormat::Xlsx => export_xlsx(matrix, &path)?,
        }

        Ok(path)
    }

    pub fn target_path(
        matrix: &ExportMatrix,
        format: ExportFormat,
        file: Option<&Path>,
        dir: &Path,
    ) -> PathBuf {
        match file {
            Some(f) => f.to_path_buf(),
            None => dir.join(matrix.file_name(format.as_str())),
        }
    }
}
