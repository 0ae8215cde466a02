//! # pf-source: where palettes come from
//!
//! A text prompt goes to an [`ImageGenerator`]; the returned image is
//! reduced to its dominant colors by [`extract_palette`]. The result feeds
//! straight into `pf_theme::map_palette`.

pub mod error;
pub mod extract;
pub mod generate;

pub use error::SourceError;
pub use extract::{DEFAULT_MAX_COLORS, FALLBACK_PALETTE, extract_palette, try_extract_palette};
pub use generate::{HuggingFaceClient, HuggingFaceConfig, ImageGenerator};

use pf_term::Color;

/// Image and palette produced from one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPalette {
    pub prompt: String,
    pub image: Vec<u8>,
    pub colors: Vec<Color>,
}

/// Generate an image for `prompt` and extract up to `max` colors from it.
///
/// # Errors
///
/// Whatever the generator reports. Extraction itself never fails.
pub fn palette_from_prompt(
    generator: &impl ImageGenerator,
    prompt: &str,
    max: usize,
) -> Result<GeneratedPalette, SourceError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(SourceError::EmptyPrompt);
    }
    let image = generator.generate(prompt)?;
    let colors = extract_palette(&image, max);
    Ok(GeneratedPalette {
        prompt: prompt.to_string(),
        image,
        colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Fixed(Vec<u8>);

    impl ImageGenerator for Fixed {
        fn generate(&self, _prompt: &str) -> Result<Vec<u8>, SourceError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl ImageGenerator for Failing {
        fn generate(&self, _prompt: &str) -> Result<Vec<u8>, SourceError> {
            Err(SourceError::Api {
                status: 503,
                body: "loading".into(),
            })
        }
    }

    #[test]
    fn prompt_is_trimmed_and_kept() {
        let got = palette_from_prompt(&Fixed(b"junk".to_vec()), "  forest  ", 8).unwrap();
        assert_eq!(got.prompt, "forest");
        assert_eq!(got.image, b"junk".to_vec());
        assert_eq!(got.colors, FALLBACK_PALETTE.to_vec());
    }

    #[test]
    fn empty_prompt_is_rejected() {
        assert!(matches!(
            palette_from_prompt(&Fixed(Vec::new()), " ", 8),
            Err(SourceError::EmptyPrompt)
        ));
    }

    #[test]
    fn generator_errors_propagate() {
        let err = palette_from_prompt(&Failing, "x", 8).unwrap_err();
        assert_eq!(err.to_string(), "image generation failed with HTTP 503: loading");
    }
}
