//! The in-memory deck model and the manifest-to-deck composer.
//!
//! Layout is fixed: a 16:9 widescreen canvas, an optional 18pt title strip
//! across the top of each slide, and one horizontally centered picture below
//! it whose height follows the source image's aspect ratio.

use std::path::Path;

use crate::{
    error::DeckResult,
    manifest::Manifest,
    probe::{ProbedImage, probe_image},
    units::Emu,
};

pub const SLIDE_WIDTH_IN: f64 = 13.333;
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

pub const TITLE_LEFT_IN: f64 = 0.6;
pub const TITLE_TOP_IN: f64 = 0.2;
pub const TITLE_WIDTH_IN: f64 = 12.2;
pub const TITLE_HEIGHT_IN: f64 = 0.6;
pub const TITLE_FONT_PT: u32 = 18;

pub const PICTURE_TOP_IN: f64 = 1.0;
// 30% narrower than the full title width, then centered.
pub const PICTURE_WIDTH_IN: f64 = 12.2 * 0.7;

/// Axis-aligned placement of a shape, in EMU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

#[derive(Clone, Debug)]
pub struct TitleBox {
    pub text: String,
    pub frame: Frame,
    pub font_size_pt: u32,
}

#[derive(Clone, Debug)]
pub struct Picture {
    pub image: ProbedImage,
    pub frame: Frame,
}

/// One slide: an optional title box plus exactly one picture.
#[derive(Clone, Debug)]
pub struct Slide {
    pub title: Option<TitleBox>,
    pub picture: Picture,
}

/// The whole document being built: a fixed canvas plus ordered slides.
#[derive(Clone, Debug)]
pub struct Deck {
    pub slide_width: Emu,
    pub slide_height: Emu,
    pub title: Option<String>,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// An empty deck on the fixed 13.333in x 7.5in widescreen canvas. The
    /// canvas size is set here, before any slide exists, and never changes.
    pub fn widescreen() -> Self {
        Self {
            slide_width: Emu::from_inches(SLIDE_WIDTH_IN),
            slide_height: Emu::from_inches(SLIDE_HEIGHT_IN),
            title: None,
            slides: Vec::new(),
        }
    }
}

/// Builds a deck from a manifest, in descriptor order. Descriptors without a
/// usable image reference are skipped; a descriptor whose image cannot be
/// probed aborts the whole run.
#[tracing::instrument(skip(manifest))]
pub fn compose(manifest: &Manifest) -> DeckResult<Deck> {
    let mut deck = Deck::widescreen();
    deck.title = manifest.title_trimmed().map(str::to_owned);

    for spec in &manifest.slides {
        let Some(image_ref) = spec.image_trimmed() else {
            continue;
        };

        let image = probe_image(Path::new(image_ref))?;
        let title = spec.title_trimmed().map(|text| TitleBox {
            text: text.to_owned(),
            frame: Frame {
                left: Emu::from_inches(TITLE_LEFT_IN),
                top: Emu::from_inches(TITLE_TOP_IN),
                width: Emu::from_inches(TITLE_WIDTH_IN),
                height: Emu::from_inches(TITLE_HEIGHT_IN),
            },
            font_size_pt: TITLE_FONT_PT,
        });

        let picture = place_picture(&deck, image);
        deck.slides.push(Slide { title, picture });
    }

    tracing::debug!(slides = deck.slides.len(), "composed deck");
    Ok(deck)
}

/// Centers the picture horizontally on the canvas at a fixed width; height
/// follows the source pixel aspect ratio.
fn place_picture(deck: &Deck, image: ProbedImage) -> Picture {
    let width = Emu::from_inches(PICTURE_WIDTH_IN);
    let height = width.scale(image.height_px, image.width_px);
    let frame = Frame {
        left: Emu::centered_in(width, deck.slide_width),
        top: Emu::from_inches(PICTURE_TOP_IN),
        width,
        height,
    };
    Picture { image, frame }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widescreen_canvas_is_16_9() {
        let deck = Deck::widescreen();
        assert_eq!(deck.slide_width, Emu(12_191_695));
        assert_eq!(deck.slide_height, Emu(6_858_000));
    }

    #[test]
    fn picture_is_centered_in_integer_emu() {
        let deck = Deck::widescreen();
        let picture = place_picture(
            &deck,
            ProbedImage {
                bytes: Vec::new(),
                width_px: 200,
                height_px: 100,
                extension: "png",
                content_type: "image/png",
            },
        );

        let expected_left = Emu((deck.slide_width.0 - picture.frame.width.0) / 2);
        assert_eq!(picture.frame.left, expected_left);
        // ~2.396in regardless of aspect ratio
        assert!((picture.frame.left.to_inches() - 2.396).abs() < 0.002);
        assert_eq!(picture.frame.top, Emu::from_inches(1.0));
    }

    #[test]
    fn picture_height_follows_aspect_ratio() {
        let deck = Deck::widescreen();
        let square = place_picture(
            &deck,
            ProbedImage {
                bytes: Vec::new(),
                width_px: 64,
                height_px: 64,
                extension: "png",
                content_type: "image/png",
            },
        );
        assert_eq!(square.frame.height, square.frame.width);

        let tall = place_picture(
            &deck,
            ProbedImage {
                bytes: Vec::new(),
                width_px: 50,
                height_px: 100,
                extension: "png",
                content_type: "image/png",
            },
        );
        assert_eq!(tall.frame.height, tall.frame.width.scale(2, 1));
    }
}
