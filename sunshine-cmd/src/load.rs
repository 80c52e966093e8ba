use std::path::Path;
use sunshine_core::{Dataset, LoadError};

/// Read the dataset CSV from disk.
pub async fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let csv_data = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::read(path, source))?;
    let dataset = Dataset::from_csv(&csv_data)?;
    log::info!(
        "Loaded {} records ({} cities) from {}",
        dataset.len(),
        dataset.cities().len(),
        path.display()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::load_dataset;
    use std::path::PathBuf;
    use sunshine_core::LoadError;

    #[tokio::test]
    async fn test_load_bundled_fixture() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures/sunshine.csv");
        let dataset = load_dataset(&path).await.unwrap();
        assert_eq!(dataset.len(), 120);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = load_dataset(&PathBuf::from("does/not/exist.csv"))
            .await
            .unwrap_err();
        assert!(matches!(&err, LoadError::Io { path, .. } if path.ends_with("does/not/exist.csv")));
        assert!(err.to_string().starts_with("failed to read does/not/exist.csv: "));
    }
}
