//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget toolkits and instead renders a snapshot into a plain framebuffer
//! that is then diffed onto the terminal.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: pure snapshot -> framebuffer mapping
//! - [`renderer`]: the crossterm-backed [`Terminal`]

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, FrameRect, GameView, Viewport};
pub use renderer::{changed_span, encode_diff_into, encode_full_into, Terminal};
