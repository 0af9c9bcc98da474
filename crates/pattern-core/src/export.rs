//! Export formats and the rasterizer seam.

use crate::constants::EXPORT_FILE_STEM;
use crate::svg::SvgDocument;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    #[default]
    Svg,
    Png,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Png => "image/png",
        }
    }

    pub fn filename(self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.extension())
    }

    #[inline]
    pub fn for_key(key: &str) -> Option<ExportFormat> {
        match key {
            "v" | "V" => Some(ExportFormat::Svg),
            "p" | "P" => Some(ExportFormat::Png),
            _ => None,
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unknown export format `{0}` (expected svg or png)")]
    UnknownFormat(String),
    #[error("document has an empty viewport ({width}x{height})")]
    EmptyViewport { width: f64, height: f64 },
    #[error("rasterization failed: {0}")]
    Raster(String),
}

/// Converts a vector document into encoded image bytes.
pub trait Rasterizer {
    fn rasterize(&self, doc: &SvgDocument) -> Result<Vec<u8>, ExportError>;
}

/// A file ready to be offered for download or written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Export {
    pub fn encode(
        doc: &SvgDocument,
        format: ExportFormat,
        rasterizer: &dyn Rasterizer,
    ) -> Result<Export, ExportError> {
        let bytes = match format {
            ExportFormat::Svg => doc.to_markup().into_bytes(),
            ExportFormat::Png => rasterizer.rasterize(doc)?,
        };
        Ok(Export {
            filename: format.filename(),
            mime: format.mime(),
            bytes,
        })
    }
}
