//! Document retrieval.
//!
//! One attempt per document, bounded by the client timeout. The body lands
//! in the download directory under a sanitized file name; writes go through
//! a temporary file and a rename so an interrupted transfer never leaves a
//! half-written PDF behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use crate::utils::error::Result;

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("filename pattern"));

pub struct DocumentFetcher {
    client: Client,
    download_dir: PathBuf,
}

impl DocumentFetcher {
    pub fn new(download_dir: impl Into<PathBuf>, user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            download_dir: download_dir.into(),
        })
    }

    /// Downloads `url` into `<download_dir>/<sanitized name>.pdf`.
    ///
    /// Any network, timeout or non-success-status problem surfaces as an
    /// error; the caller decides whether the subject is skipped.
    pub async fn fetch(&self, url: &str, name: &str) -> Result<PathBuf> {
        tracing::info!("Downloading: {}", name);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        fs::create_dir_all(&self.download_dir)?;
        let filename = format!("{}.pdf", sanitize_name(name));
        let path = self.download_dir.join(&filename);
        write_atomic(&path, &body)?;

        tracing::info!("Downloaded {} ({} bytes)", path.display(), body.len());
        Ok(path)
    }
}

/// Strips everything but word characters, whitespace and hyphens, then
/// turns spaces into underscores.
pub fn sanitize_name(name: &str) -> String {
    UNSAFE_CHARS
        .replace_all(name, "")
        .trim()
        .replace(' ', "_")
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let tmp = path.with_extension("pdf.part");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(
            sanitize_name("Lengua y Comunicación I"),
            "Lengua_y_Comunicación_I"
        );
        assert_eq!(
            sanitize_name("Economía I. La función de los agentes económicos"),
            "Economía_I_La_función_de_los_agentes_económicos"
        );
        assert_eq!(sanitize_name("  Taller de Ciencias I "), "Taller_de_Ciencias_I");
    }

    #[tokio::test]
    async fn test_fetch_writes_body_to_named_file() {
        use httpmock::prelude::*;

        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/doc.pdf");
            then.status(200).body(b"%PDF-1.5 fake body");
        });

        let dir = tempfile::tempdir().unwrap();
        let fetcher = DocumentFetcher::new(dir.path(), "test-agent", 5).unwrap();

        let path = fetcher
            .fetch(&server.url("/doc.pdf"), "Cultura Digital I")
            .await
            .unwrap();

        mock.assert();
        assert!(path.ends_with("Cultura_Digital_I.pdf"));
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.5 fake body");
        // No temporary file left behind.
        assert!(!dir.path().join("Cultura_Digital_I.pdf.part").exists());
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        use httpmock::prelude::*;

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.pdf");
            then.status(404);
        });

        let dir = tempfile::tempdir().unwrap();
        let fetcher = DocumentFetcher::new(dir.path(), "test-agent", 5).unwrap();

        let result = fetcher.fetch(&server.url("/missing.pdf"), "Humanidades I").await;
        assert!(result.is_err());
        assert!(!dir.path().join("Humanidades_I.pdf").exists());
    }
}
