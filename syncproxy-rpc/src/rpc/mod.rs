//! Concrete RPC types declared over the accessor framework.

mod image;
mod send_location;

pub use image::{Image, ImageType};
pub use send_location::SendLocation;
