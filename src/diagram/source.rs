// SPDX-License-Identifier: MPL-2.0
//! Where diagram markup comes from.
//!
//! Diagrams are addressed by the variant's relative resource path
//! (`pain-map/Male_full_front.svg`) and resolved against one of three roots:
//! the copies compiled into the binary, a local directory, or an HTTP base
//! URL.

use crate::domain::body::DiagramVariant;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::fmt;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/pain-map/"]
#[prefix = "pain-map/"]
struct EmbeddedDiagrams;

#[derive(Clone, Default)]
pub enum DiagramSource {
    /// Diagrams shipped inside the binary.
    #[default]
    Embedded,
    /// Files under a local asset root.
    Directory(PathBuf),
    /// `GET {base_url}/{resource_path}`.
    Http {
        base_url: String,
        client: reqwest::Client,
    },
}

impl fmt::Debug for DiagramSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramSource::Embedded => f.write_str("Embedded"),
            DiagramSource::Directory(root) => f.debug_tuple("Directory").field(root).finish(),
            DiagramSource::Http { base_url, .. } => {
                f.debug_struct("Http").field("base_url", base_url).finish()
            }
        }
    }
}

impl DiagramSource {
    #[must_use]
    pub fn http(base_url: impl Into<String>) -> Self {
        DiagramSource::Http {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Human-readable location of a variant's markup, for logs.
    #[must_use]
    pub fn locate(&self, variant: DiagramVariant) -> String {
        let path = variant.resource_path();
        match self {
            DiagramSource::Embedded => format!("embedded:{}", path),
            DiagramSource::Directory(root) => root.join(&path).display().to_string(),
            DiagramSource::Http { base_url, .. } => join_url(base_url, &path),
        }
    }

    /// Retrieves the raw markup of `variant`. One call, no retry.
    ///
    /// # Errors
    ///
    /// - [`Error::Asset`] if an embedded diagram is missing
    /// - [`Error::Io`] if a local file cannot be read
    /// - [`Error::Fetch`] if the HTTP request fails or returns a non-success
    ///   status
    pub async fn fetch(&self, variant: DiagramVariant) -> Result<Vec<u8>> {
        let path = variant.resource_path();
        match self {
            DiagramSource::Embedded => EmbeddedDiagrams::get(&path)
                .map(|file| file.data.into_owned())
                .ok_or_else(|| Error::Asset(format!("no embedded diagram at {}", path))),
            DiagramSource::Directory(root) => Ok(tokio::fs::read(root.join(&path)).await?),
            DiagramSource::Http { base_url, client } => {
                let response = client
                    .get(join_url(base_url, &path))
                    .send()
                    .await?
                    .error_for_status()?;
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::body::{Gender, Side, View};
    use crate::error::FetchError;
    use tempfile::tempdir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    #[test]
    fn every_variant_is_embedded() {
        for gender in Gender::ALL {
            for side in Side::ALL {
                for view in View::ALL {
                    let path = DiagramVariant::new(gender, side, view).resource_path();
                    assert!(EmbeddedDiagrams::get(&path).is_some(), "missing {}", path);
                }
            }
        }
    }

    #[tokio::test]
    async fn embedded_fetch_returns_markup() {
        let markup = DiagramSource::Embedded
            .fetch(DiagramVariant::default())
            .await
            .expect("embedded diagram");
        assert!(String::from_utf8_lossy(&markup).contains("<svg"));
    }

    #[tokio::test]
    async fn directory_fetch_reads_relative_path() {
        let dir = tempdir().expect("temp dir");
        let variant = DiagramVariant::full(Gender::Female, Side::Back);
        let file = dir.path().join(variant.resource_path());
        std::fs::create_dir_all(file.parent().expect("parent")).expect("mkdir");
        std::fs::write(&file, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").expect("write");

        let source = DiagramSource::Directory(dir.path().to_path_buf());
        let markup = source.fetch(variant).await.expect("read");
        assert!(markup.starts_with(b"<svg"));
    }

    #[tokio::test]
    async fn directory_fetch_of_missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let source = DiagramSource::Directory(dir.path().to_path_buf());
        let err = source
            .fetch(DiagramVariant::default())
            .await
            .expect_err("missing file");
        assert!(matches!(err, Error::Io(_)));
    }

    /// Serves one HTTP response on a local port. The handle yields the
    /// request line the server saw.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: image/svg+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });
        (format!("http://{}/static", addr), handle)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn http_fetch_returns_the_body_unchanged() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="head" d="M0 0 L1 1"/></svg>"#;
        let (base_url, server) = serve_once("200 OK", markup).await;

        let bytes = DiagramSource::http(base_url)
            .fetch(DiagramVariant::default())
            .await
            .expect("200 response");

        assert_eq!(bytes, markup.as_bytes());
        assert_eq!(
            server.await.expect("server task"),
            "GET /static/pain-map/Male_full_front.svg HTTP/1.1"
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn http_error_status_maps_to_fetch_status() {
        let (base_url, server) = serve_once("404 Not Found", "not here").await;

        let err = DiagramSource::http(base_url)
            .fetch(DiagramVariant::full(Gender::Female, Side::Back))
            .await
            .expect_err("404 response");

        assert!(matches!(err, Error::Fetch(FetchError::Status(404))), "{:?}", err);
        assert_eq!(err.i18n_key(), "error-diagram-http-status");
        assert!(server.await.expect("server task").contains("Female_full_back.svg"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn http_refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let err = DiagramSource::http(format!("http://{}", addr))
            .fetch(DiagramVariant::default())
            .await
            .expect_err("nothing listening");

        assert!(matches!(err, Error::Fetch(FetchError::Transport(_))), "{:?}", err);
        assert_eq!(err.i18n_key(), "error-diagram-network");
    }

    #[test]
    fn http_locations_join_without_double_slashes() {
        let source = DiagramSource::http("https://example.org/static/");
        assert_eq!(
            source.locate(DiagramVariant::default()),
            "https://example.org/static/pain-map/Male_full_front.svg"
        );
    }
}
