//! JSON input loading functionality.
//!
//! Documents are returned as text: the query operations parse JSON themselves so
//! malformed input collapses to "no match" instead of an error.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// How the loaded content is split into documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// The whole content is one document.
    Json,
    /// Each non-blank line is a document.
    JsonLines,
}

/// Text read from a file or stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedInput {
    pub format: InputFormat,
    pub content: String,
}

impl LoadedInput {
    pub fn new(format: InputFormat, content: String) -> Self {
        Self { format, content }
    }

    /// Returns the document texts in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonselector::file::loader::{InputFormat, LoadedInput};
    ///
    /// let input = LoadedInput::new(InputFormat::JsonLines, "{\"a\":1}\n\n{\"a\":2}\n".to_string());
    /// assert_eq!(input.documents(), vec!["{\"a\":1}", "{\"a\":2}"]);
    /// ```
    pub fn documents(&self) -> Vec<&str> {
        match self.format {
            InputFormat::Json => vec![self.content.as_str()],
            InputFormat::JsonLines => self
                .content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .collect(),
        }
    }
}

/// Loads a JSON or JSON Lines file from the filesystem.
///
/// Files ending in `.gz` are decompressed first. `.jsonl` and `.ndjson` files
/// (before any `.gz` suffix) are read as JSON Lines.
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - A `.gz` file is not valid gzip or does not decompress to UTF-8
pub fn load_input_file<P: AsRef<Path>>(path: P) -> Result<LoadedInput> {
    let path_ref = path.as_ref();

    // Check if file is gzipped
    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let format = if determine_jsonl_format(path_ref) {
        InputFormat::JsonLines
    } else {
        InputFormat::Json
    };

    Ok(LoadedInput::new(format, content))
}

/// Loads JSON from standard input as a single document.
///
/// Input starting with the gzip magic bytes (0x1f 0x8b) is decompressed.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is not valid UTF-8 (after decompression)
pub fn load_input_from_stdin() -> Result<LoadedInput> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    Ok(LoadedInput::new(InputFormat::Json, decode_bytes(buffer)?))
}

/// Decodes raw input, decompressing it when it carries the gzip magic bytes.
pub fn decode_bytes(bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&bytes)
    } else {
        String::from_utf8(bytes).context("Invalid UTF-8 in input")
    }
}

/// Determines if file is JSONL format based on filename.
///
/// Checks for .jsonl or .ndjson extension, handling .gz suffix correctly.
/// Examples:
/// - `data.jsonl` → true
/// - `data.jsonl.gz` → true
/// - `data.json.gz` → false
fn determine_jsonl_format<P: AsRef<Path>>(path: P) -> bool {
    let path_str = path.as_ref().to_string_lossy();

    // Remove .gz suffix if present
    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    base.ends_with(".jsonl") || base.ends_with(".ndjson")
}

fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path).context("Failed to open gzipped file")?;
    decompress_gzip_bytes(&bytes)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip input - data may be corrupted")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_jsonl_format() {
        assert!(determine_jsonl_format("data.jsonl"));
        assert!(determine_jsonl_format("data.ndjson"));
        assert!(determine_jsonl_format("data.jsonl.gz"));
        assert!(!determine_jsonl_format("data.json.gz"));
        assert!(!determine_jsonl_format("data.json"));
    }

    #[test]
    fn test_json_is_one_document() {
        let input = LoadedInput::new(InputFormat::Json, "{\n  \"a\": 1\n}\n".to_string());
        assert_eq!(input.documents(), vec!["{\n  \"a\": 1\n}\n"]);
    }

    #[test]
    fn test_decode_plain_bytes() {
        assert_eq!(decode_bytes(b"{}".to_vec()).unwrap(), "{}");
        assert!(decode_bytes(vec![0xff, 0xfe]).is_err());
    }
}
