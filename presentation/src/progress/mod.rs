//! Progress reporting while the image service works

pub mod reporter;
