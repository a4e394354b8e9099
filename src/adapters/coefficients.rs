//! Coefficient source adapters: the built-in fit and JSON exports.

use std::path::{Path, PathBuf};

use crate::domain::{CoefficientFile, CoefficientTable};
use crate::ports::CoefficientSource;
use crate::ForecastError;

/// Maximum accepted size of a coefficient file.
///
/// A table is a few hundred bytes; anything near this is not a table.
const MAX_TABLE_BYTES: u64 = 64 * 1024;

/// The coefficients compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCoefficients;

impl CoefficientSource for BuiltinCoefficients {
    fn describe(&self) -> String {
        "built-in OLS fit".to_string()
    }

    fn load(&self) -> Result<CoefficientTable, ForecastError> {
        let table = CoefficientTable::fitted();
        table.validate()?;
        Ok(table)
    }
}

/// Coefficient table exported as JSON (see `CoefficientFile`).
#[derive(Debug, Clone)]
pub struct JsonCoefficientFile {
    path: PathBuf,
}

impl JsonCoefficientFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CoefficientSource for JsonCoefficientFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<CoefficientTable, ForecastError> {
        let size = std::fs::metadata(&self.path)?.len();
        if size > MAX_TABLE_BYTES {
            return Err(ForecastError::Validation(format!(
                "Coefficient file {:?} is {size} bytes (max {MAX_TABLE_BYTES})",
                self.path
            )));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let file: CoefficientFile = serde_json::from_str(&content)?;
        let table = CoefficientTable::try_from(file)?;

        tracing::info!(
            "Loaded coefficient table '{}' from {:?} (r_squared={:?})",
            table.name,
            self.path,
            table.r_squared
        );

        Ok(table)
    }
}

/// Pick the coefficient source for an optional override path.
#[must_use]
pub fn source_for(path: Option<&Path>) -> Box<dyn CoefficientSource> {
    match path {
        Some(p) => Box::new(JsonCoefficientFile::new(p)),
        None => Box::new(BuiltinCoefficients),
    }
}

/// Serialize a table in the JSON export format.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json(table: &CoefficientTable) -> Result<String, ForecastError> {
    Ok(serde_json::to_string_pretty(&CoefficientFile::from(table))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CoefficientError;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_source() {
        let table = BuiltinCoefficients.load().expect("Should load");
        assert_eq!(table, CoefficientTable::fitted());
    }

    #[test]
    fn test_shipped_model_file_matches_builtin() {
        let source = JsonCoefficientFile::new("models/coefficients.json");
        let table = source.load().expect("Shipped table should load");
        assert_eq!(table, CoefficientTable::fitted());
    }

    #[test]
    fn test_written_table_loads_back() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("refit.json");

        let mut table = CoefficientTable::fitted();
        table.name = "refit".to_string();
        table.intercept = 40.0;
        std::fs::write(&path, to_json(&table).expect("serialize")).expect("write table");

        let loaded = JsonCoefficientFile::new(&path).load().expect("Should load");
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = tempdir().expect("tempdir");
        let source = JsonCoefficientFile::new(temp.path().join("absent.json"));
        assert!(matches!(source.load(), Err(ForecastError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ not json").expect("write");
        assert!(matches!(
            JsonCoefficientFile::new(&path).load(),
            Err(ForecastError::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_region_is_coefficient_error() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("partial.json");
        let mut file = CoefficientFile::from(&CoefficientTable::fitted());
        file.region_offsets.remove("Middle East");
        std::fs::write(&path, serde_json::to_string(&file).expect("serialize")).expect("write");

        assert!(matches!(
            JsonCoefficientFile::new(&path).load(),
            Err(ForecastError::Coefficients(
                CoefficientError::MissingRegionOffset(_)
            ))
        ));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("huge.json");
        std::fs::write(&path, vec![b' '; (MAX_TABLE_BYTES + 1) as usize]).expect("write");
        assert!(matches!(
            JsonCoefficientFile::new(&path).load(),
            Err(ForecastError::Validation(_))
        ));
    }

    #[test]
    fn test_source_for_override() {
        assert_eq!(source_for(None).describe(), "built-in OLS fit");
        let path = Path::new("models/coefficients.json");
        assert_eq!(source_for(Some(path)).describe(), "models/coefficients.json");
    }
}
