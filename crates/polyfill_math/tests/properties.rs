use assert_float_eq::*;
use polyfill_math::{Identity, Matrix4, Quaternion, Vector3};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn samples() -> Vec<Vector3> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(3.0, 0.0, 4.0),
        Vector3::new(-2.5, 7.0, 0.125),
        Vector3::new(1e-3, -1e-4, 2e-3),
        Vector3::new(1e6, 3e5, -2e6),
    ]
}

#[test]
fn zero_vector_has_zero_length_and_normalizes_to_zero() {
    init_logger();
    let mut zero = Vector3::<f64>::zero();

    assert_float_absolute_eq!(zero.length(), 0.0, 0.0);
    zero.normalize();
    assert_eq!(zero, Vector3::new(0.0, 0.0, 0.0));
}

#[test]
fn normalized_vectors_have_unit_length() {
    for v in samples() {
        let mut normalized = v;
        normalized.normalize();

        assert_float_absolute_eq!(normalized.length(), 1.0, 1e-12);
    }
}

#[test]
fn dot_is_commutative() {
    for a in samples() {
        for b in samples() {
            assert_float_absolute_eq!(a.dot(&b), b.dot(&a), 0.0);
        }
    }
}

#[test]
fn cross_is_anti_commutative() {
    for a in samples() {
        for b in samples() {
            let mut ab = Vector3::zero();
            let mut ba = Vector3::zero();
            ab.cross_vectors(&a, &b);
            ba.cross_vectors(&b, &a);

            assert_eq!(ab, -ba);
        }
    }
}

#[test]
fn cross_with_self_is_zero() {
    for a in samples() {
        let mut result = Vector3::new(1.0, 1.0, 1.0);
        result.cross_vectors(&a, &a);

        assert_float_absolute_eq!(result.length(), 0.0, 0.0);
    }
}

#[test]
fn identity_quaternion_leaves_vectors_unchanged() {
    for v in samples() {
        let mut rotated = v;
        rotated.apply_quaternion(&Quaternion::identity());

        assert_eq!(rotated, v);
    }
}

#[test]
fn identity_matrix_leaves_vectors_unchanged() {
    init_logger();
    for v in samples() {
        let mut projected = v;
        projected.apply_matrix4(&Matrix4::identity());

        assert_eq!(projected, v);
    }
}

#[test]
fn rotation_preserves_length() {
    let axis = Vector3::new(0.0, 1.0, 1.0).normalized();
    let rotation = Quaternion::from_axis_angle(&axis, 2.3);

    for v in samples() {
        let mut rotated = v;
        rotated.apply_quaternion(&rotation);

        assert_float_relative_eq!(rotated.length(), v.length(), 1e-12);
    }
}

#[test]
fn copy_overwrites_every_component() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);

    v.copy(&Vector3::new(4.0, 5.0, 6.0));

    assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));
}

#[test]
fn length_of_three_four_five_triangle() {
    assert_float_absolute_eq!(Vector3::new(3.0, 0.0, 4.0).length(), 5.0, 0.0);
}

#[test]
fn cross_of_x_and_y_is_z() {
    let mut result = Vector3::default();

    result.cross_vectors(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, 1.0, 0.0));

    assert_eq!(result, Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn projection_with_zero_w_propagates_non_finite_values() {
    init_logger();
    let flat = Matrix4::from_column_major([0.0; 16]);
    let mut v: Vector3 = Vector3::new(1.0, 2.0, 3.0);

    v.apply_matrix4(&flat);

    assert!(!v.x.is_finite());
    assert!(!v.y.is_finite());
    assert!(!v.z.is_finite());
}

#[test]
fn matrix_from_slice_requires_sixteen_elements() {
    let values: Vec<f64> = (0..17).map(f64::from).collect();

    assert!(Matrix4::try_from(&values[..16]).is_ok());
    assert!(Matrix4::try_from(&values[..]).is_err());
    assert_eq!(
        Matrix4::try_from(&values[..3]).unwrap_err().to_string(),
        "a 4x4 matrix needs 16 elements, got 3"
    );
}

#[cfg(feature = "serde")]
#[test]
fn vector_serializes_as_named_fields() {
    let json = serde_json::to_string(&Vector3::new(1.0, 2.5, -3.0)).unwrap();

    assert_eq!(json, r#"{"x":1.0,"y":2.5,"z":-3.0}"#);
    assert_eq!(
        serde_json::from_str::<Vector3>(&json).unwrap(),
        Vector3::new(1.0, 2.5, -3.0)
    );
}
