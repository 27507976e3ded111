use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the fetch-and-render pipeline.
///
/// Variants group into the three categories the CLI reports: network/API
/// failures, data-shape failures, and everything else. All of them are
/// terminal for the run.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The request could not be sent or the response body could not be read.
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("weather API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response decoded but did not match the expected schema.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// A drawing or image-encoding step failed.
    #[error("failed to render dashboard: {0}")]
    Render(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// Stable label printed in front of the error message.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Request(_) | Self::Status { .. } => "API Error",
            Self::Shape(_) => "Data Parsing Error",
            Self::Render(_) | Self::Io(_) => "Unexpected error",
        }
    }

    pub(crate) fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_api_category() {
        let err = DashboardError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "Invalid API key".to_string(),
        };
        assert_eq!(err.category(), "API Error");
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn shape_errors_are_parsing_category() {
        let err = DashboardError::Shape("missing field `humidity`".to_string());
        assert_eq!(err.category(), "Data Parsing Error");
        assert!(err.to_string().contains("humidity"));
    }

    #[test]
    fn render_and_io_errors_are_unexpected_category() {
        let err = DashboardError::render("font not found");
        assert_eq!(err.category(), "Unexpected error");

        let err = DashboardError::from(std::io::Error::other("disk full"));
        assert_eq!(err.category(), "Unexpected error");
    }
}
