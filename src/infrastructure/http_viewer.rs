// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the content viewer port.
//!
//! Each load is a plain GET issued with a user agent matching the device's
//! form factor. The response body is kept only long enough to read the page
//! title and decide whether the rendered surface would be empty.

use crate::application::port::{
    ContentViewer, InspectionDenied, LoadError, LoadRequest, LoadSignal, LoadedContent,
    PermissionProfile, SurfaceInspection,
};
use crate::domain::device::FormFactor;
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use reqwest::header::USER_AGENT;
use scraper::{Html, Selector};
use std::time::Duration;

const PHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
const TABLET_UA: &str = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
const DESKTOP_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";

/// User agent sent for a form factor.
#[must_use]
pub fn user_agent(form_factor: FormFactor) -> &'static str {
    match form_factor {
        FormFactor::Phone => PHONE_UA,
        FormFactor::Tablet => TABLET_UA,
        FormFactor::Laptop | FormFactor::Desktop => DESKTOP_UA,
    }
}

/// Content viewer backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpContentViewer {
    client: reqwest::Client,
}

impl HttpContentViewer {
    /// Builds a viewer whose loads fail with [`LoadError::Timeout`] after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Http(err.to_string()))?;
        Ok(Self { client })
    }
}

impl ContentViewer for HttpContentViewer {
    fn load(&self, request: LoadRequest) -> BoxFuture<'static, LoadSignal> {
        let client = self.client.clone();
        Box::pin(fetch(client, request))
    }
}

/// Stand-in used when the HTTP client could not be built; every load fails
/// with the construction error.
#[derive(Debug, Clone)]
pub struct UnavailableViewer {
    reason: String,
}

impl UnavailableViewer {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ContentViewer for UnavailableViewer {
    fn load(&self, _request: LoadRequest) -> BoxFuture<'static, LoadSignal> {
        let signal = LoadSignal::Error(LoadError::Transport(self.reason.clone()));
        Box::pin(async move { signal })
    }
}

async fn fetch(client: reqwest::Client, request: LoadRequest) -> LoadSignal {
    let response = match client
        .get(&request.url)
        .header(USER_AGENT, user_agent(request.form_factor))
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => return LoadSignal::Error(classify(&err)),
    };

    let status = response.status();
    if !status.is_success() {
        return LoadSignal::Error(LoadError::Status(status.as_u16()));
    }
    let final_url = response.url().to_string();

    let content = match response.text().await {
        Ok(body) => {
            let page = inspect_page(&body);
            LoadedContent {
                final_url,
                status: status.as_u16(),
                bytes: body.len(),
                title: page.title,
                surface: surface_for(request.profile, page.surface),
            }
        }
        Err(err) => {
            // Headers arrived, so the load itself succeeded; only the
            // inspection is lost.
            log::debug!("{}: body unreadable, skipping inspection: {err}", request.device);
            LoadedContent {
                final_url,
                status: status.as_u16(),
                bytes: 0,
                title: None,
                surface: Err(InspectionDenied),
            }
        }
    };

    LoadSignal::Loaded(content)
}

fn classify(err: &reqwest::Error) -> LoadError {
    if err.is_timeout() {
        LoadError::Timeout
    } else {
        LoadError::Transport(err.to_string())
    }
}

/// The surface is only observable with same-origin access.
fn surface_for(
    profile: PermissionProfile,
    surface: SurfaceInspection,
) -> std::result::Result<SurfaceInspection, InspectionDenied> {
    if profile.allow_same_origin {
        Ok(surface)
    } else {
        Err(InspectionDenied)
    }
}

struct PageSummary {
    title: Option<String>,
    surface: SurfaceInspection,
}

fn inspect_page(body: &str) -> PageSummary {
    let document = Html::parse_document(body);

    let title = Selector::parse("title").ok().and_then(|selector| {
        document
            .select(&selector)
            .next()
            .map(|node| node.text().collect::<String>().trim().to_owned())
            .filter(|title| !title.is_empty())
    });

    // The parser always synthesizes a <body>, so a missing selector match
    // only happens for non-HTML payloads with text in them.
    let empty = Selector::parse("body")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|node| node.inner_html().trim().is_empty())
        })
        .unwrap_or_else(|| body.trim().is_empty());

    PageSummary {
        title,
        surface: if empty {
            SurfaceInspection::Empty
        } else {
            SurfaceInspection::NonEmpty
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::DeviceId;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single canned HTTP response and returns its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0_u8; 2048];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\n\
                     Content-Type: text/html\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}/")
    }

    fn request(url: String) -> LoadRequest {
        LoadRequest {
            device: DeviceId::new("Pixel 8"),
            form_factor: FormFactor::Phone,
            url,
            generation: 1,
            profile: PermissionProfile::PREVIEW,
        }
    }

    fn viewer() -> HttpContentViewer {
        HttpContentViewer::new(Duration::from_secs(5)).expect("client builds")
    }

    #[tokio::test]
    async fn page_with_body_is_loaded_and_titled() {
        let url = serve_once(
            "200 OK",
            "<html><head><title> Hello </title></head><body><p>hi</p></body></html>",
        )
        .await;
        match viewer().load(request(url)).await {
            LoadSignal::Loaded(content) => {
                assert_eq!(content.status, 200);
                assert_eq!(content.title.as_deref(), Some("Hello"));
                assert_eq!(content.surface, Ok(SurfaceInspection::NonEmpty));
            }
            LoadSignal::Error(err) => panic!("unexpected error: {err}"),
        }
    }

    #[tokio::test]
    async fn empty_body_is_reported_as_empty_surface() {
        let url = serve_once("200 OK", "<html><head></head><body>  </body></html>").await;
        match viewer().load(request(url)).await {
            LoadSignal::Loaded(content) => {
                assert_eq!(content.surface, Ok(SurfaceInspection::Empty));
            }
            LoadSignal::Error(err) => panic!("unexpected error: {err}"),
        }
    }

    #[tokio::test]
    async fn error_status_is_a_load_error() {
        let url = serve_once("503 Service Unavailable", "").await;
        assert_eq!(
            viewer().load(request(url)).await,
            LoadSignal::Error(LoadError::Status(503))
        );
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        let signal = viewer().load(request(format!("http://{addr}/"))).await;
        assert!(matches!(signal, LoadSignal::Error(LoadError::Transport(_))));
    }

    #[test]
    fn inspection_is_denied_without_same_origin() {
        let profile = PermissionProfile {
            allow_same_origin: false,
            ..PermissionProfile::PREVIEW
        };
        assert_eq!(
            surface_for(profile, SurfaceInspection::Empty),
            Err(InspectionDenied)
        );
    }

    #[test]
    fn plain_text_page_is_not_empty() {
        assert_eq!(inspect_page("hello").surface, SurfaceInspection::NonEmpty);
        assert_eq!(inspect_page("").surface, SurfaceInspection::Empty);
    }

    #[tokio::test]
    async fn unavailable_viewer_fails_every_load() {
        let viewer = UnavailableViewer::new("no TLS backend");
        assert_eq!(
            viewer.load(request("https://example.com".into())).await,
            LoadSignal::Error(LoadError::Transport("no TLS backend".into()))
        );
    }

    #[test]
    fn user_agent_matches_form_factor() {
        assert!(user_agent(FormFactor::Phone).contains("iPhone"));
        assert!(user_agent(FormFactor::Tablet).contains("iPad"));
        assert_eq!(user_agent(FormFactor::Laptop), user_agent(FormFactor::Desktop));
    }
}
