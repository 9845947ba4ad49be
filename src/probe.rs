use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::{DeckError, DeckResult};

/// An image accepted for embedding: raw bytes plus the header facts the
/// composer and package writer need.
#[derive(Clone, Debug)]
pub struct ProbedImage {
    pub bytes: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    pub extension: &'static str,
    pub content_type: &'static str,
}

/// Reads an image file and decodes its header (format + pixel dimensions)
/// without decoding pixel data. Anything that is not a readable, embeddable
/// image is an [`DeckError::ImageLoad`] naming the path.
pub fn probe_image(path: &Path) -> DeckResult<ProbedImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| DeckError::image_load(format!("read image '{}': {e}", path.display())))?;

    let reader = image::ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| DeckError::image_load(format!("sniff image '{}': {e}", path.display())))?;

    let format = reader.format().ok_or_else(|| {
        DeckError::image_load(format!("'{}' is not a recognized image", path.display()))
    })?;
    let (extension, content_type) = embed_type(format).ok_or_else(|| {
        DeckError::image_load(format!(
            "'{}' has unsupported embed format {format:?}",
            path.display()
        ))
    })?;

    let (width_px, height_px) = reader.into_dimensions().map_err(|e| {
        DeckError::image_load(format!("decode image header '{}': {e}", path.display()))
    })?;
    if width_px == 0 || height_px == 0 {
        return Err(DeckError::image_load(format!(
            "'{}' has zero-sized dimensions",
            path.display()
        )));
    }

    Ok(ProbedImage {
        bytes,
        width_px,
        height_px,
        extension,
        content_type,
    })
}

/// Formats the package can embed, with their part extension and MIME type.
fn embed_type(format: ImageFormat) -> Option<(&'static str, &'static str)> {
    match format {
        ImageFormat::Png => Some(("png", "image/png")),
        ImageFormat::Jpeg => Some(("jpeg", "image/jpeg")),
        ImageFormat::Gif => Some(("gif", "image/gif")),
        ImageFormat::Bmp => Some(("bmp", "image/bmp")),
        ImageFormat::Tiff => Some(("tiff", "image/tiff")),
        _ => None,
    }
}
