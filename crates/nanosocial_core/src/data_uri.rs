//! Self-describing `data:` URIs for inline images.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use nanosocial_error::{GeminiError, GeminiErrorKind, GeminiResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(.+);base64,(.+)$").expect("Valid data URI regex")
});

/// An image encoded as `data:<mime>;base64,<payload>`.
///
/// # Examples
///
/// ```
/// use nanosocial_core::ImageDataUri;
///
/// let uri = ImageDataUri::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
/// assert_eq!(uri.mime_type(), "image/png");
/// assert_eq!(uri.payload(), "iVBORw0KGgo=");
///
/// assert!(ImageDataUri::parse("https://example.com/cat.png").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
#[display("{}", uri)]
pub struct ImageDataUri {
    uri: String,
    mime_end: usize,
    payload_start: usize,
}

impl ImageDataUri {
    /// Parse a data URI with the strict `data:<mime>;base64,<payload>` shape.
    ///
    /// # Errors
    ///
    /// Returns `InvalidImageFormat` if the string does not match.
    pub fn parse(uri: impl Into<String>) -> GeminiResult<Self> {
        let uri = uri.into();
        let (mime_end, payload_start) = {
            let caps = DATA_URI.captures(&uri).ok_or_else(|| {
                GeminiError::new(GeminiErrorKind::InvalidImageFormat(preview(&uri)))
            })?;
            let (Some(mime), Some(payload)) = (caps.get(1), caps.get(2)) else {
                return Err(GeminiError::new(GeminiErrorKind::InvalidImageFormat(
                    preview(&uri),
                )));
            };
            (mime.end(), payload.start())
        };

        Ok(Self {
            uri,
            mime_end,
            payload_start,
        })
    }

    /// Build a data URI from a mime type and base64 payload.
    pub fn from_parts(mime_type: &str, payload: &str) -> GeminiResult<Self> {
        Self::parse(format!("data:{};base64,{}", mime_type, payload))
    }

    /// Encode raw image bytes.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> GeminiResult<Self> {
        Self::from_parts(mime_type, &STANDARD.encode(bytes))
    }

    /// The mime type, e.g. `image/png`.
    pub fn mime_type(&self) -> &str {
        &self.uri["data:".len()..self.mime_end]
    }

    /// The base64 payload.
    pub fn payload(&self) -> &str {
        &self.uri[self.payload_start..]
    }

    /// The full URI string.
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Decode the payload into raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidImageFormat` if the payload is not valid base64.
    pub fn decode_bytes(&self) -> GeminiResult<Vec<u8>> {
        STANDARD.decode(self.payload()).map_err(|e| {
            GeminiError::new(GeminiErrorKind::InvalidImageFormat(format!(
                "payload is not valid base64: {}",
                e
            )))
        })
    }

    /// File extension matching the mime type.
    pub fn file_extension(&self) -> &str {
        match self.mime_type() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/png" => "png",
            "image/svg+xml" => "svg",
            "image/bmp" => "bmp",
            "image/heic" => "heic",
            _ => "bin",
        }
    }
}

impl TryFrom<String> for ImageDataUri {
    type Error = GeminiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ImageDataUri> for String {
    fn from(value: ImageDataUri) -> Self {
        value.uri
    }
}

impl AsRef<str> for ImageDataUri {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

/// Shorten an offending value for error messages; payloads can be megabytes.
fn preview(value: &str) -> String {
    const MAX: usize = 48;
    match value.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &value[..idx]),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_mime_and_payload() -> anyhow::Result<()> {
        let uri = ImageDataUri::parse("data:image/webp;base64,UklGRg==")?;
        assert_eq!(uri.mime_type(), "image/webp");
        assert_eq!(uri.payload(), "UklGRg==");
        assert_eq!(uri.file_extension(), "webp");
        Ok(())
    }

    #[test]
    fn unknown_mime_types_get_a_generic_extension() -> anyhow::Result<()> {
        let svg = ImageDataUri::parse("data:image/svg+xml;base64,PHN2Zz4=")?;
        assert_eq!(svg.file_extension(), "svg");
        let tiff = ImageDataUri::parse("data:image/tiff;base64,SUkqAA==")?;
        assert_eq!(tiff.file_extension(), "bin");
        let odd = ImageDataUri::parse("data:application/x.custom+data;base64,AAAA")?;
        assert_eq!(odd.file_extension(), "bin");
        Ok(())
    }

    #[test]
    fn rejects_missing_base64_marker() {
        let err = ImageDataUri::parse("data:image/png,iVBORw0KGgo=").unwrap_err();
        assert!(matches!(err.kind, GeminiErrorKind::InvalidImageFormat(_)));
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(ImageDataUri::parse("data:image/png;base64,").is_err());
    }

    #[test]
    fn rejects_plain_base64() {
        assert!(ImageDataUri::parse("iVBORw0KGgoAAAANSUhEUg==").is_err());
    }

    #[test]
    fn error_message_is_truncated() {
        let long = "x".repeat(10_000);
        let err = ImageDataUri::parse(long).unwrap_err();
        assert!(err.to_string().len() < 200);
    }

    #[test]
    fn decodes_bytes() -> anyhow::Result<()> {
        let uri = ImageDataUri::from_bytes("image/png", &[0x89, 0x50, 0x4E, 0x47])?;
        assert!(uri.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(uri.decode_bytes()?, vec![0x89, 0x50, 0x4E, 0x47]);
        Ok(())
    }

    #[test]
    fn serializes_as_plain_string() -> anyhow::Result<()> {
        let uri = ImageDataUri::parse("data:image/png;base64,AAAA")?;
        let json = serde_json::to_string(&uri)?;
        assert_eq!(json, "\"data:image/png;base64,AAAA\"");
        let back: ImageDataUri = serde_json::from_str(&json)?;
        assert_eq!(back, uri);
        assert!(serde_json::from_str::<ImageDataUri>("\"nope\"").is_err());
        Ok(())
    }
}
