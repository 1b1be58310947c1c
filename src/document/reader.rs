use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Extensions read as plain text.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Loads document text from a file or stdin.
pub struct DocumentReader;

impl DocumentReader {
    /// Reads the document at `file_path`, or stdin when no path is given.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &str) -> Result<String> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
            bail!(
                "Unsupported file format: '{path}'\n\n\
                 Supported formats: .txt, .md"
            );
        }

        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the file into smaller parts.",
                size as f64 / 1024.0 / 1024.0
            );
        }

        let bytes = fs::read(path).with_context(|| format!("Failed to read file: {path}"))?;
        // Documents from the wild are not always clean UTF-8; keep what
        // decodes and drop the rest.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, name: &str, content: &[u8]) -> String {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_read_txt_file() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "doc.txt", "Hello, World!\n".as_bytes());

        let content = DocumentReader::read(Some(&path)).unwrap();
        assert_eq!(content.trim(), "Hello, World!");
    }

    #[test]
    fn test_read_md_file() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "doc.md", "# Title\n\nBody".as_bytes());

        let content = DocumentReader::read(Some(&path)).unwrap();
        assert_eq!(content, "# Title\n\nBody");
    }

    #[test]
    fn test_read_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "doc.docx", b"PK...");

        let result = DocumentReader::read(Some(&path));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unsupported file format")
        );
    }

    #[test]
    fn test_read_extension_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "DOC.TXT", b"upper");

        assert_eq!(DocumentReader::read(Some(&path)).unwrap(), "upper");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = DocumentReader::read(Some("/nonexistent/path/to/file.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_file_with_invalid_utf8_is_lossy() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "doc.txt", b"ok \xff\xfe still ok");

        let content = DocumentReader::read(Some(&path)).unwrap();
        assert!(content.starts_with("ok "));
        assert!(content.ends_with(" still ok"));
    }

    #[test]
    fn test_read_file_unicode() {
        let dir = TempDir::new().unwrap();
        let content = "こんにちは世界！🌍\n中文段落";
        let path = write_doc(&dir, "doc.txt", content.as_bytes());

        assert_eq!(DocumentReader::read(Some(&path)).unwrap(), content);
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let dir = TempDir::new().unwrap();
        let large = "x".repeat(MAX_INPUT_SIZE + 1);
        let path = write_doc(&dir, "large.txt", large.as_bytes());

        let result = DocumentReader::read(Some(&path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "empty.txt", b"");

        assert!(DocumentReader::read(Some(&path)).unwrap().is_empty());
    }
}
