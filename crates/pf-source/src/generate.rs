//! Text-to-image generation.
//!
//! [`ImageGenerator`] is the seam: the CLI talks to the Hugging Face
//! inference API through [`HuggingFaceClient`], tests plug in a fixed image.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::{Value, json};

use crate::error::SourceError;

/// Inference API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

/// Model used for palette images.
pub const DEFAULT_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";

/// Seconds to wait for the model before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Anything that turns a text prompt into encoded image bytes.
pub trait ImageGenerator {
    /// Generate one image for `prompt`.
    ///
    /// # Errors
    ///
    /// Implementation-specific; see [`SourceError`].
    fn generate(&self, prompt: &str) -> Result<Vec<u8>, SourceError>;
}

// ---------------------------------------------------------------------------
// Hugging Face
// ---------------------------------------------------------------------------

/// Connection settings for [`HuggingFaceClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuggingFaceConfig {
    pub token: String,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    /// Defaults with the given token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Full model URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

/// Blocking client for the Hugging Face inference API.
pub struct HuggingFaceClient {
    client: Client,
    url: String,
    token: String,
    timeout: Duration,
}

impl HuggingFaceClient {
    /// Build a client.
    ///
    /// # Errors
    ///
    /// [`SourceError::MissingToken`] for an empty token, or
    /// [`SourceError::Http`] if the TLS backend fails to initialise.
    pub fn new(config: &HuggingFaceConfig) -> Result<Self, SourceError> {
        if config.token.trim().is_empty() {
            return Err(SourceError::MissingToken);
        }
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.url(),
            token: config.token.clone(),
            timeout: config.timeout,
        })
    }

    /// JSON body sent for `prompt`.
    #[must_use]
    pub fn request_body(prompt: &str) -> Value {
        json!({
            "inputs": format!("color palette, {prompt}, abstract colors, swatches"),
            "parameters": {
                "num_inference_steps": 20,
                "guidance_scale": 7.5,
                "width": 512,
                "height": 512,
            },
            "options": {
                "use_cache": false,
                "wait_for_model": true,
            }
        })
    }
}

impl ImageGenerator for HuggingFaceClient {
    fn generate(&self, prompt: &str) -> Result<Vec<u8>, SourceError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SourceError::EmptyPrompt);
        }

        info!("requesting palette image for {prompt:?}");
        debug!("POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&Self::request_body(prompt))
            .send()
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        debug!("inference API answered {status}");
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().map_err(|err| self.classify(err))?;
        info!("received {} image bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

impl HuggingFaceClient {
    fn classify(&self, err: reqwest::Error) -> SourceError {
        if err.is_timeout() {
            SourceError::Timeout(self.timeout.as_secs())
        } else {
            SourceError::Http(err)
        }
    }
}
