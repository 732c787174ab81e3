//! File delivery for exported reports

use anyhow::{Context, Result};
use jobscope_core::ports::FileSink;

/// Delivers exported reports by writing them to the local filesystem.
pub struct DiskSink;

impl FileSink for DiskSink {
    fn deliver(&self, file_name: &str, content: &str) -> Result<()> {
        std::fs::write(file_name, content)
            .with_context(|| format!("Failed to write {}", file_name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_writes_content() {
        let path = std::env::temp_dir().join("jobscope-sink-test.txt");
        let path_str = path.to_string_lossy().to_string();

        DiskSink.deliver(&path_str, "line one\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line one\n");
        let _ = std::fs::remove_file(&path);
    }
}
