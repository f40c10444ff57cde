pub mod color;
pub mod constants;
pub mod geometry;
pub mod layout;
pub mod params;
pub mod update;

pub use color::*;
pub use constants::*;
pub use geometry::*;
pub use layout::*;
pub use params::*;
pub use update::*;
