pub mod coordinates;
pub mod location;
