//! Errors from the palette sources.

/// Failure generating or decoding a palette image.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("no API token configured (set HUGGING_FACE_TOKEN or generator.token)")]
    MissingToken,

    #[error("image generation failed with HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("image generation timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}
