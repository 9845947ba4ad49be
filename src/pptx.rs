//! Serializes a [`Deck`] to a `.pptx` package.
//!
//! The package is an OPC container: a ZIP archive of XML parts plus the
//! embedded media. Everything is written in one forward pass; nothing touches
//! the filesystem until the deck is fully composed, so a failed run leaves no
//! partial output behind.

pub mod parts;

use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use zip::write::{SimpleFileOptions, ZipWriter};

use crate::{
    deck::Deck,
    error::{DeckError, DeckResult},
};

/// Writes the deck to `out_path`, resolving it to an absolute path and
/// creating missing parent directories first. Returns the resolved path.
pub fn save_deck(deck: &Deck, out_path: &Path) -> DeckResult<PathBuf> {
    let out_path = std::path::absolute(out_path)
        .map_err(|e| DeckError::write(format!("resolve '{}': {e}", out_path.display())))?;
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            DeckError::write(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    let file = File::create(&out_path)
        .map_err(|e| DeckError::write(format!("create '{}': {e}", out_path.display())))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let add_part = |zip: &mut ZipWriter<BufWriter<File>>, name: &str, content: &[u8]| {
        zip.start_file(name, options)
            .map_err(|e| DeckError::write(format!("start part '{name}': {e}")))?;
        zip.write_all(content)
            .map_err(|e| DeckError::write(format!("write part '{name}': {e}")))
    };

    add_part(
        &mut zip,
        "[Content_Types].xml",
        parts::content_types_xml(deck).as_bytes(),
    )?;
    add_part(&mut zip, "_rels/.rels", parts::root_rels_xml().as_bytes())?;
    add_part(
        &mut zip,
        "docProps/core.xml",
        parts::core_props_xml(deck).as_bytes(),
    )?;
    add_part(
        &mut zip,
        "docProps/app.xml",
        parts::app_props_xml(deck).as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/presentation.xml",
        parts::presentation_xml(deck).as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        parts::presentation_rels_xml(deck).as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideMasters/slideMaster1.xml",
        parts::slide_master_xml().as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        parts::slide_master_rels_xml().as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideLayouts/slideLayout1.xml",
        parts::slide_layout_xml().as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        parts::slide_layout_rels_xml().as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/theme/theme1.xml",
        parts::theme_xml().as_bytes(),
    )?;

    for (idx, slide) in deck.slides.iter().enumerate() {
        let n = idx + 1;
        add_part(
            &mut zip,
            &format!("ppt/slides/slide{n}.xml"),
            parts::slide_xml(slide).as_bytes(),
        )?;
        add_part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{n}.xml.rels"),
            parts::slide_rels_xml(n, slide.picture.image.extension).as_bytes(),
        )?;
        add_part(
            &mut zip,
            &format!("ppt/media/image{n}.{}", slide.picture.image.extension),
            &slide.picture.image.bytes,
        )?;
    }

    zip.finish()
        .map_err(|e| DeckError::write(format!("finish '{}': {e}", out_path.display())))?
        .flush()
        .map_err(|e| DeckError::write(format!("flush '{}': {e}", out_path.display())))?;

    tracing::debug!(slides = deck.slides.len(), out = %out_path.display(), "wrote deck");
    Ok(out_path)
}
