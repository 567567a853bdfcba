// src/ingest/upload.rs
// Request-scoped upload spooling. Uploads land under a uuid-unique name and
// are removed when the guard drops, so no artifact survives a request.

use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

use crate::api::ApiError;

/// Allowed upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Txt,
    Pdf,
}

impl UploadKind {
    /// Matches the substring after the last dot, case-insensitive.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(UploadKind::Txt),
            "pdf" => Some(UploadKind::Pdf),
            _ => None,
        }
    }
}

/// A spooled upload that deletes itself when dropped.
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    /// Spool `bytes` under a unique sanitized name inside `upload_dir`.
    pub async fn write(upload_dir: &Path, filename: &str, bytes: &[u8]) -> Result<Self, ApiError> {
        let unique_name = format!("{}-{}", Uuid::new_v4(), sanitize_filename(filename));
        let path = upload_dir.join(unique_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ApiError::Extraction(format!("falha ao gravar upload: {e}")))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the spooled file back as text.
    pub async fn extract_text(&self, kind: UploadKind) -> Result<String, ApiError> {
        match kind {
            UploadKind::Txt => tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| ApiError::Extraction(format!("falha ao ler arquivo de texto: {e}"))),
            UploadKind::Pdf => pdf_extract::extract_text(&self.path)
                .map_err(|e| ApiError::Extraction(format!("falha ao ler PDF: {e}"))),
        }
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to remove spooled upload {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Keep only the final path component, with unsafe characters replaced.
fn sanitize_filename(filename: &str) -> String {
    let base = Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload");

    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_allow_list() {
        assert_eq!(UploadKind::from_filename("email.txt"), Some(UploadKind::Txt));
        assert_eq!(UploadKind::from_filename("REPORT.PDF"), Some(UploadKind::Pdf));
        assert_eq!(UploadKind::from_filename(".txt"), Some(UploadKind::Txt));
        assert_eq!(UploadKind::from_filename("archive.tar.gz"), None);
        assert_eq!(UploadKind::from_filename("malware.exe"), None);
        assert_eq!(UploadKind::from_filename("no_extension"), None);
        assert_eq!(UploadKind::from_filename(""), None);
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("/tmp/email.txt"), "email.txt");
        assert_eq!(sanitize_filename("meu email (1).txt"), "meu_email__1_.txt");
        assert_eq!(sanitize_filename(".."), "upload");
    }

    #[tokio::test]
    async fn test_spooled_upload_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path;
        {
            let spooled = TempUpload::write(dir.path(), "email.txt", b"conteudo de teste")
                .await
                .unwrap();
            path = spooled.path().to_path_buf();
            assert!(path.exists());

            let text = spooled.extract_text(UploadKind::Txt).await.unwrap();
            assert_eq!(text, "conteudo de teste");
        }
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_spooled_upload_removed_even_when_extraction_fails() {
        let dir = tempfile::tempdir().unwrap();
        {
            // Not a real PDF, so extraction fails; the spool must still go away.
            let spooled = TempUpload::write(dir.path(), "broken.pdf", b"not a pdf")
                .await
                .unwrap();
            assert!(spooled.extract_text(UploadKind::Pdf).await.is_err());
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
