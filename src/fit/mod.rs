//! Fitting images onto a fixed-size canvas.
//!
//! Two strategies are supported:
//!
//! - **contain**: scale uniformly until the image fits inside the canvas, then
//!   pad the remainder with a background color ([`contain_resize`] followed by
//!   [`pad_to_canvas`]).
//! - **cover**: scale uniformly until the image covers the canvas, then crop the
//!   overflow around the center ([`cover_resize`]).
//!
//! Centering uses integer division everywhere, so an odd leftover pixel lands
//! on the right or bottom edge.

mod canvas;
mod dimensions;

pub use canvas::{contain_resize, cover_resize, pad_to_canvas};
pub use dimensions::{
    center_offset, check_buffer_size, contain_dimensions, cover_dimensions, MAX_CANVAS_BYTES,
};
