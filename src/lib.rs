//! Generic three-component vector for geometric and physics computations.
//!
//! ```
//! use vector3::Vector3;
//!
//! let incident = Vector3::new(1.0_f64, -1.0, 0.0);
//! let floor = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(Vector3::reflect(&incident, &floor), Vector3::new(1.0, 1.0, 0.0));
//! assert!((Vector3::angle(&incident, &floor)? - 135.0).abs() < 1e-9);
//! # Ok::<(), vector3::VectorError>(())
//! ```

pub mod numerics;

pub use numerics::projection::ProjectionConfig;
pub use numerics::types::error::VectorError;
pub use numerics::types::point::Point3;
pub use numerics::types::traits::FloatingPoint;
pub use numerics::types::vector::Vector3;
