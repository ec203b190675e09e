// tests/integration_tests.rs
//! Integration tests for the vector API as a downstream crate sees it.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use vector3::{Point3, ProjectionConfig, Vector3, VectorError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn samples() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, -2.0, 0.5),
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 7.0),
        Vector3::new(1e-3, 1e3, -1.0),
        Vector3::splat(-3.0),
    ]
}

#[test]
fn test_cross_is_anti_commutative_and_dot_commutative() {
    let vectors = samples();
    for a in &vectors {
        for b in &vectors {
            assert_eq!(a.cross(b), -b.cross(a), "cross({a}, {b})");
            assert_eq!(a.dot(b), b.dot(a), "dot({a}, {b})");
        }
    }
}

#[test]
fn test_cross_is_orthogonal_to_operands() {
    let vectors = samples();
    for a in &vectors {
        for b in &vectors {
            let c = a.cross(b);
            let scale = (a.magnitude() * b.magnitude() * a.magnitude().max(b.magnitude())).max(1.0);
            assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-12 * scale);
            assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-12 * scale);
        }
    }
}

#[test]
fn test_normalize_yields_unit_length() {
    for v in samples() {
        let unit = v.normalize().unwrap();
        assert_relative_eq!(unit.magnitude(), 1.0, epsilon = 1e-12);
    }

    let v32 = Vector3::new(0.1_f32, -7.0, 2.0);
    assert_relative_eq!(v32.normalize().unwrap().magnitude(), 1.0, epsilon = 1e-6);
}

#[test]
fn test_hard_failures() {
    init_tracing();

    let zero = Vector3::<f64>::zero();
    assert_eq!(
        zero.normalize(),
        Err(VectorError::ZeroLength { operation: "normalize" })
    );

    let v = Vector3::new(1.0, 1.0, 1.0);
    let err = Vector3::angle(&v, &zero).unwrap_err();
    assert_eq!(err, VectorError::ZeroLength { operation: "angle" });
    assert!(err.to_string().contains("zero length"));
}

#[test]
fn test_angle_between_axes() {
    let x = Vector3::new(1.0_f64, 0.0, 0.0);
    let y = Vector3::new(0.0_f64, 1.0, 0.0);

    assert_relative_eq!(Vector3::angle(&x, &y).unwrap(), 90.0);
    assert_eq!(Vector3::angle(&x, &x).unwrap(), 0.0);
}

#[test]
fn test_angle_of_parallel_vectors_can_be_nan() {
    // The cosine rounds to 1.0000000000000002 and is passed to acos as is.
    let v = Vector3::new(0.2_f64, 1.3, 0.5);
    let angle = Vector3::angle(&v, &(v * 3.0)).unwrap();
    assert!(angle.is_nan(), "expected NaN, got {angle}");

    // Exactly representable cosines stay finite.
    assert_eq!(Vector3::angle(&v, &v).unwrap(), 0.0);
}

#[test]
fn test_angle_is_symmetric_and_bounded() {
    let vectors = samples();
    for a in &vectors {
        for b in &vectors {
            let ab = Vector3::angle(a, b).unwrap();
            let ba = Vector3::angle(b, a).unwrap();
            if ab.is_nan() {
                // Unclamped acos on (anti-)parallel input
                assert!(ba.is_nan());
                continue;
            }
            assert_eq!(ab, ba);
            assert!((0.0..=180.0).contains(&ab), "angle({a}, {b}) = {ab}");
        }
    }
}

#[test]
fn test_reflect_and_refract() {
    init_tracing();

    let floor = Vector3::new(0.0_f64, 1.0, 0.0);
    assert_eq!(
        Vector3::reflect(&Vector3::new(1.0, -1.0, 0.0), &floor),
        Vector3::new(1.0, 1.0, 0.0)
    );

    let incident = Vector3::new(1.0_f64, -1.0, 0.0).normalize().unwrap();
    let through = Vector3::refract(&incident, &floor, 1.0);
    assert_abs_diff_eq!((through - incident).magnitude(), 0.0, epsilon = 1e-12);

    let grazing = Vector3::new(1.0_f64, -0.05, 0.0).normalize().unwrap();
    assert_eq!(Vector3::refract(&grazing, &floor, 1.5), Vector3::zero());
}

#[test]
fn test_reflect_preserves_length_for_unit_normal() {
    let normal = Vector3::new(1.0_f64, 2.0, -2.0).normalize().unwrap();
    for v in samples() {
        let reflected = Vector3::reflect(&v, &normal);
        assert_relative_eq!(reflected.magnitude(), v.magnitude(), max_relative = 1e-12);
    }
}

#[test]
fn test_operator_examples() {
    let a = Vector3::new(1.0_f32, 2.0, 3.0);
    let b = Vector3::new(4.0_f32, 5.0, 6.0);

    assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
    assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
    assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(Vector3::new(2.0_f32, 4.0, 6.0) / 2.0, a);
}

#[test]
fn test_projection_degenerate_depth() {
    init_tracing();

    let config = ProjectionConfig::<f64>::default();
    let on_camera: Point3<f64> = Point3::new(2.0, 3.0, -config.viewer_distance);

    let projected = on_camera.project_with(&config);
    assert!(projected.x.is_infinite());
    assert!(projected.y.is_infinite());
    assert_eq!(projected.z, -4.0);
}

#[test]
fn test_projection_farther_points_move_towards_center() {
    let config = ProjectionConfig::<f32>::with_viewport(800, 600);
    let (cx, cy) = config.center();

    let near = Point3::new(1.0_f32, 1.0, 0.0).project_with(&config);
    let far = Point3::new(1.0_f32, 1.0, 20.0).project_with(&config);

    assert!(near.x - cx > far.x - cx);
    assert!(cy - near.y > cy - far.y);
    assert!(far.x > cx && far.y < cy);
}

#[test]
fn test_display_format() {
    let v = Vector3::new(1.5_f64, -2.0, 0.25);
    assert_eq!(format!("{v}"), "(1.5, -2, 0.25)");
}
