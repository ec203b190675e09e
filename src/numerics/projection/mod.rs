// src/numerics/projection/mod.rs
// Projection settings consumed by Vector3::project_with.

pub mod configuration;

pub use configuration::ProjectionConfig;
