use super::request::RenderMode;
use pxl_engine::Raster;

/// ASCII art output: the rendered glyph raster plus the plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    pub raster: Raster,
    /// Lines joined with `\n`, no trailing newline
    pub text: String,
}

/// Output of [`RenderService::render`](crate::services::RenderService::render).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Pixel(Raster),
    Ascii(AsciiArt),
    Dither(Raster),
}

impl Artifact {
    pub fn mode(&self) -> RenderMode {
        match self {
            Artifact::Pixel(_) => RenderMode::Pixel,
            Artifact::Ascii(_) => RenderMode::Ascii,
            Artifact::Dither(_) => RenderMode::Dither,
        }
    }

    pub fn raster(&self) -> &Raster {
        match self {
            Artifact::Pixel(raster) | Artifact::Dither(raster) => raster,
            Artifact::Ascii(art) => &art.raster,
        }
    }

    /// The ASCII text, for ASCII artifacts only.
    pub fn text(&self) -> Option<&str> {
        match self {
            Artifact::Ascii(art) => Some(&art.text),
            _ => None,
        }
    }

    /// Suggested file name for exporting the raster, e.g. `pixel-art.png`.
    pub fn suggested_file_name(&self) -> String {
        format!("{}.png", self.mode().file_stem())
    }

    /// Suggested file name for exporting the text (`ascii-art.txt`).
    pub fn suggested_text_file_name(&self) -> Option<String> {
        self.text()
            .map(|_| format!("{}.txt", self.mode().file_stem()))
    }

    pub fn into_raster(self) -> Raster {
        match self {
            Artifact::Pixel(raster) | Artifact::Dither(raster) => raster,
            Artifact::Ascii(art) => art.raster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxl_engine::Rgb;

    #[test]
    fn test_file_names() {
        let raster = Raster::filled(1, 1, Rgb::WHITE);
        let pixel = Artifact::Pixel(raster.clone());
        assert_eq!(pixel.suggested_file_name(), "pixel-art.png");
        assert_eq!(pixel.suggested_text_file_name(), None);

        let ascii = Artifact::Ascii(AsciiArt {
            raster: raster.clone(),
            text: "@".to_string(),
        });
        assert_eq!(ascii.suggested_file_name(), "ascii-art.png");
        assert_eq!(ascii.suggested_text_file_name().as_deref(), Some("ascii-art.txt"));
        assert_eq!(ascii.text(), Some("@"));

        assert_eq!(Artifact::Dither(raster).suggested_file_name(), "dither-art.png");
    }

    #[test]
    fn test_raster_access() {
        let raster = Raster::filled(2, 3, Rgb::BLACK);
        let art = Artifact::Ascii(AsciiArt {
            raster: raster.clone(),
            text: String::new(),
        });
        assert_eq!(art.raster(), &raster);
        assert_eq!(art.into_raster(), raster);
    }
}
