//! Port definitions (interfaces) for the application layer.
//!
//! Ports define the boundaries between the application and external systems.
//! Adapters in the infrastructure and presentation layers implement them.

pub mod image_generator;
pub mod progress;
