pub mod compliance;
pub mod model;
pub mod ranges;
pub mod trends;

pub use compliance::*;
pub use model::*;
pub use ranges::*;
pub use trends::*;
