// src/services/file_service.rs
//
// Sequence file intake: extension and size gating, FASTA extraction,
// plain-text cleanup, and CSV bulk-import parsing.

use std::fs;
use std::path::Path;

use crate::domain::{parse_fasta, DomainError};
use crate::error::{AppError, AppResult};
use crate::integrations::NewProtein;

/// Upload ceiling, matching the hosted UI
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 5] = ["fasta", "fa", "txt", "csv", "pdb"];

/// Characters shown when previewing a selected file
const PREVIEW_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub file_name: String,
    pub size_bytes: u64,
    pub content: String,
}

#[derive(Default)]
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        Self
    }

    fn checked_read(&self, path: &Path) -> AppResult<String> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::Domain(DomainError::UnsupportedFile(format!(
                "invalid file type '.{}', expected .fasta, .fa, .txt, .csv or .pdb",
                extension
            ))));
        }

        let size = fs::metadata(path)?.len();
        if size > MAX_UPLOAD_BYTES {
            return Err(AppError::Domain(DomainError::UnsupportedFile(
                "file size must be less than 10MB".to_string(),
            )));
        }

        Ok(fs::read_to_string(path)?)
    }

    /// Extracts a sequence from an uploaded file. FASTA content keeps the
    /// body below its headers; everything else is stripped to letters.
    pub fn read_sequence(&self, path: &Path) -> AppResult<String> {
        let content = self.checked_read(path)?;

        let is_fasta = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_lowercase();
                e == "fasta" || e == "fa"
            })
            .unwrap_or(false);

        let sequence = if is_fasta {
            parse_fasta(&content).sequence
        } else {
            content
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_uppercase())
                .collect()
        };

        if sequence.is_empty() {
            return Err(AppError::Domain(DomainError::MissingInput(
                "no valid sequence found in file".to_string(),
            )));
        }

        Ok(sequence)
    }

    /// File metadata plus the first 500 characters, for display before
    /// submission.
    pub fn preview(&self, path: &Path) -> AppResult<FilePreview> {
        let content = self.checked_read(path)?;
        let size_bytes = content.len() as u64;

        let mut preview: String = content.chars().take(PREVIEW_LEN).collect();
        if content.len() > PREVIEW_LEN {
            preview.push_str("...");
        }

        Ok(FilePreview {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size_bytes,
            content: preview,
        })
    }

    /// Parses a CSV of proteins for bulk creation. The header row names
    /// the fields; rows missing id, name or seq are skipped. Zero usable
    /// rows is an error.
    pub fn parse_csv_proteins(&self, path: &Path) -> AppResult<Vec<NewProtein>> {
        let content = self.checked_read(path)?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        let mut proteins = Vec::new();

        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    log::warn!("skipping malformed CSV row: {}", e);
                    continue;
                }
            };

            let field = |name: &str| -> Option<String> {
                headers
                    .iter()
                    .position(|h| h == name)
                    .and_then(|i| row.get(i))
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };

            let (Some(id), Some(name), Some(seq)) = (field("id"), field("name"), field("seq"))
            else {
                continue;
            };

            let mut protein = NewProtein::from_sequence(id, name, seq);
            protein.gene = field("gene");
            protein.taxo = field("taxo").or_else(|| field("organism"));
            protein.family = field("family");
            protein.function = field("function");
            proteins.push(protein);
        }

        if proteins.is_empty() {
            return Err(AppError::Other(
                "No valid proteins found in CSV file".to_string(),
            ));
        }

        Ok(proteins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "protein.exe", "MKV");

        let err = FileService::new().read_sequence(&path).unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::UnsupportedFile(_))
        ));
    }

    #[test]
    fn test_fasta_file_parses_body() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "insulin.fasta", ">sp|P01308\nMALW\nMRLL\n");

        let sequence = FileService::new().read_sequence(&path).unwrap();
        assert_eq!(sequence, "MALWMRLL");
    }

    #[test]
    fn test_plain_text_strips_non_letters() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "seq.txt", "mkv 123\nlw-");

        let sequence = FileService::new().read_sequence(&path).unwrap();
        assert_eq!(sequence, "MKVLW");
    }

    #[test]
    fn test_empty_extraction_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "empty.txt", "123 456");

        let err = FileService::new().read_sequence(&path).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::MissingInput(_))));
    }

    #[test]
    fn test_preview_truncates_to_500_chars() {
        let dir = tempdir().unwrap();
        let body = "M".repeat(600);
        let path = write_file(dir.path(), "long.txt", &body);

        let preview = FileService::new().preview(&path).unwrap();
        assert_eq!(preview.file_name, "long.txt");
        assert_eq!(preview.size_bytes, 600);
        assert!(preview.content.ends_with("..."));
        assert_eq!(preview.content.chars().count(), 503);
    }

    #[test]
    fn test_csv_import_skips_incomplete_rows() {
        let dir = tempdir().unwrap();
        let csv = "id,name,seq,gene\nP01308,Insulin,MALWMRLL,INS\n,missing id,MKV,\nP69905,Hemoglobin,MVLSPADK,HBA1\n";
        let path = write_file(dir.path(), "bulk.csv", csv);

        let proteins = FileService::new().parse_csv_proteins(&path).unwrap();
        assert_eq!(proteins.len(), 2);
        assert_eq!(proteins[0].id, "P01308");
        assert_eq!(proteins[0].seq, vec!["MALWMRLL".to_string()]);
        assert_eq!(proteins[1].gene.as_deref(), Some("HBA1"));
    }

    #[test]
    fn test_csv_with_no_valid_rows_errors() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "bad.csv", "id,name,seq\n,,\n");

        assert!(FileService::new().parse_csv_proteins(&path).is_err());
    }
}
