//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that key types are accessible via absolute path.
#[test]
fn test_key_module_exports() {
    use path_core::types::key::canonical_time_bits;
    use path_core::types::key::PathKey;
    use path_core::types::key::KEY_LEN;

    let key = PathKey::from_seed(0);
    assert_eq!(key.as_bytes().len(), KEY_LEN);
    assert_eq!(
        key.to_hex(),
        "7a45a2b0deeb70a81d174d38e4f543461a0799096b55d50459a514f8e1e5e91c"
    );
    assert_eq!(canonical_time_bits(-0.0), canonical_time_bits(0.0));
}

/// Test that the flat `types` re-exports match the nested paths.
#[test]
fn test_types_reexports() {
    use path_core::types::{LevyArea, PathError, PathKey, Shape};

    let shape: Shape = "2, 3".parse().unwrap();
    assert_eq!(shape.size(), 6);
    assert_eq!(LevyArea::default(), LevyArea::BrownianIncrement);

    let err = PathKey::from_hex("00").unwrap_err();
    assert!(matches!(err, PathError::InvalidSeed(_)));

    let err = Shape::new(vec![0]).unwrap_err();
    assert!(matches!(err, PathError::InvalidShape(_)));
}

/// Test that path traits can be implemented outside the crate.
#[test]
fn test_traits_module_exports() {
    use path_core::traits::path::BrownianPath;
    use path_core::traits::ControlledPath;
    use path_core::types::{LevyArea, Shape};

    struct Constant {
        shape: Shape,
    }

    impl ControlledPath for Constant {
        type Control = f64;

        fn t0(&self) -> f64 {
            f64::NEG_INFINITY
        }

        fn t1(&self) -> f64 {
            f64::INFINITY
        }

        fn evaluate(&self, _t0: f64, t1: Option<f64>, _left: bool) -> f64 {
            t1.map_or(1.0, |_| 0.0)
        }
    }

    impl BrownianPath for Constant {
        fn shape(&self) -> &Shape {
            &self.shape
        }

        fn levy_area(&self) -> LevyArea {
            LevyArea::BrownianIncrement
        }
    }

    let path = Constant {
        shape: Shape::scalar(),
    };
    assert_eq!(path.evaluate(3.0, None, true), 1.0);
    assert_eq!(path.evaluate(0.0, Some(5.0), false), 0.0);
    assert!(path.shape().is_scalar());
    assert_eq!(path.levy_area(), LevyArea::BrownianIncrement);
}

/// Test that Lie group types are accessible via absolute path.
#[test]
fn test_lie_module_exports() {
    use path_core::lie::heisenberg::HeisenbergElement;
    use path_core::lie::{superdiagonal_generator, GROUP_TOLERANCE};

    let n = superdiagonal_generator(3);
    assert_eq!(n[(0, 1)], 1.0);
    assert_eq!(n[(1, 2)], 1.0);
    assert_eq!(n[(0, 2)], 0.0);

    let g = HeisenbergElement::new(1.0, 2.0, 3.0);
    let identity = g * g.inverse();
    assert!(identity.x.abs() < GROUP_TOLERANCE);
    assert!(identity.y.abs() < GROUP_TOLERANCE);
    assert!(identity.z.abs() < GROUP_TOLERANCE);
}
