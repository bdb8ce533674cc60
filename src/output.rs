// src/output.rs
// =============================================================================
// Writes the exposed endpoints to the results file as a compact JSON array:
//
//   [{"url": "...", "status_code": 200, "body": {...}}, ...]
//
// The file is replaced on every run. An empty scan still writes "[]".
// =============================================================================

use crate::error::{Error, Result};
use crate::probe::ExposedEndpoint;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub fn write_results(path: &Path, results: &[ExposedEndpoint]) -> Result<()> {
    let io_error = |source: std::io::Error| Error::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, results)?;
    writer.flush().map_err(io_error)?;

    debug!("Wrote {} result(s) to {}", results.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let results = vec![ExposedEndpoint {
            url: "https://example.com/wp-json/wp/v2/users".to_string(),
            status_code: 200,
            body: json!({"id": 1, "name": "admin"}),
        }];
        write_results(&path, &results).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            r#"[{"url":"https://example.com/wp-json/wp/v2/users","status_code":200,"body":{"id":1,"name":"admin"}}]"#
        );
    }

    #[test]
    fn test_empty_results_write_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        write_results(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_unwritable_path_reports_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("results.json");

        let result = write_results(&path, &[]);
        assert!(matches!(result, Err(Error::Output { .. })));
    }
}
