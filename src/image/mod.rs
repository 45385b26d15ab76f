//! Image loading, normalization, and saving utilities.

mod load;
mod save;

pub use load::{load_image, normalize};
pub use save::save_png;
