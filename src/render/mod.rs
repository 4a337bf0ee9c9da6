//! Presentation side of the game.
//!
//! The rules engine knows nothing about drawing. Renderers receive a
//! `Snapshot` after every state change and on every redraw tick.
//!
//! - `layout`: pixel placement of cells and tokens
//! - `spin`: cosmetic dice spin shown before a roll
//! - `text`: a terminal renderer

pub mod layout;
pub mod spin;
pub mod text;

pub use layout::{BoardLayout, Point};
pub use spin::DiceSpin;
pub use text::TextRenderer;

use crate::core::Snapshot;

/// Something that can draw a game state.
pub trait Renderer {
    /// Error raised while drawing.
    type Error;

    /// Draw one frame for `snapshot`.
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error>;

    /// Show a transient die face while the dice spin.
    ///
    /// Renderers without an animation can ignore this.
    fn spin_frame(&mut self, _face: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}
