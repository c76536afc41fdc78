//! Data-driven maze content and loaders.
//!
//! Round parameters live in TOML files and are read into
//! [`maze_core::MazeConfig`]. Content is consumed by the runtime when it sets
//! up a session and never appears in board state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
