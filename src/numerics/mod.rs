// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules
// and the projection settings used by `Vector3::project_with`.

pub mod projection;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod error;
    pub mod point;
    pub mod traits;
    pub mod vector;
}
