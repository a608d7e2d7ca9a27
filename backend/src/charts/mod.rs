//! Chart specifications handed to the rendering layer.

pub mod figure;

pub use figure::*;
