pub mod gradebook;

pub use gradebook::gradebook_routes;
