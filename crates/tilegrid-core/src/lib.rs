pub mod error;
pub mod grid;
pub mod naming;
pub mod split;

pub use error::{Result, TileError};
pub use grid::TileSpec;
pub use naming::{NameList, NameListMode, TileNamer};
pub use split::{split, NamedTile};
