pub mod model;

pub use model::KitchenSnapshot;
