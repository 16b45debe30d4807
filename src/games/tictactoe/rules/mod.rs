//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the game state only has to call [`evaluate`].

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, evaluate};
