#![forbid(unsafe_code)]
mod datasets;
mod filter;
pub(crate) mod fs;
pub mod io;
mod model;
mod options;
pub mod render;
pub mod serde;
mod session;

pub use datasets::*;
pub use filter::*;
pub use fs::{BlobStorageProvider, LocalDisk};
pub use model::*;
pub use options::*;
pub use render::{render_airports, render_flights, Format};
pub use session::*;

/// Returns the distance between two geo-points in km
pub fn distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let from = geoutils::Location::new(from.0, from.1);
    let to = geoutils::Location::new(to.0, to.1);
    from.haversine_distance_to(&to).meters() / 1000.0
}
