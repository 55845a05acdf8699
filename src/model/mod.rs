pub mod dc;
pub mod geo;
pub mod item;
pub mod store;

pub use dc::Dc;
pub use geo::GeoPoint;
pub use item::Item;
pub use store::Store;
