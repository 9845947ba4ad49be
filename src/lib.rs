#![forbid(unsafe_code)]

pub mod deck;
pub mod error;
pub mod manifest;
pub mod pptx;
pub mod probe;
pub mod units;

pub use deck::{Deck, Slide, compose};
pub use error::{DeckError, DeckResult};
pub use manifest::{Manifest, SlideSpec};
pub use pptx::save_deck;
pub use units::Emu;
