use std::fmt;

use presenter::{panel_by_filename, ChartSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelFetchError {
    UnknownPanel,
    Upstream { reason: String },
}

impl fmt::Display for PanelFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPanel => write!(f, "panel is not part of the dashboard catalog"),
            Self::Upstream { reason } => write!(f, "chart fetch failed: {reason}"),
        }
    }
}

impl std::error::Error for PanelFetchError {}

/// Fetches one catalog panel's image from the chart source.
///
/// The filename is resolved against the catalog before any network traffic,
/// so unknown names fail fast. Every upstream failure is folded into
/// [`PanelFetchError::Upstream`] with a human-readable reason; the caller
/// scopes it to the one panel and keeps the rest of the page alive.
pub async fn fetch_panel_image(
    client: &reqwest::Client,
    source: &ChartSource,
    filename: &str,
) -> Result<PanelImage, PanelFetchError> {
    let panel = panel_by_filename(filename).ok_or(PanelFetchError::UnknownPanel)?;
    let url = source.resolved_url(panel.filename);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| PanelFetchError::Upstream {
            reason: format!("request failed: {err}"),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PanelFetchError::Upstream {
            reason: format!("upstream status {}", status.as_u16()),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| content_type_for(filename).to_string());

    let bytes = response
        .bytes()
        .await
        .map_err(|err| PanelFetchError::Upstream {
            reason: format!("body read failed: {err}"),
        })?;

    Ok(PanelImage {
        content_type,
        bytes: bytes.to_vec(),
    })
}

pub fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("gif") => "image/gif",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
