use pxl_engine::{ImageError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid YAML render request: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON render request: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_render_error_invalid_color() {
        let error = RenderError::InvalidColor {
            value: "#12g".to_string(),
            source: ParseColorError::InvalidDigit('g'),
        };
        assert_eq!(
            error.to_string(),
            "Invalid color \"#12g\": invalid hex digit 'g'"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_render_error_image() {
        let error: RenderError = ImageError::ZeroDimension {
            width: 0,
            height: 4,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Image error: image dimensions must be non-zero, got 0x4"
        );
    }

    #[test]
    fn test_render_error_svg_parse() {
        let error = RenderError::SvgParse("Invalid XML".to_string());
        assert_eq!(error.to_string(), "SVG parse error: Invalid XML");
    }

    #[test]
    fn test_render_error_pixmap_allocation() {
        let error = RenderError::PixmapAllocation;
        assert_eq!(error.to_string(), "Failed to allocate pixmap");
    }

    #[test]
    fn test_config_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ConfigError = json_error.into();
        assert!(error.to_string().starts_with("Invalid JSON render request: "));
    }

    #[test]
    fn test_config_error_from_yaml() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        let error: ConfigError = yaml_error.into();
        assert!(error.to_string().starts_with("Invalid YAML render request: "));
    }
}
