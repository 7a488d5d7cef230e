//! Tests for the high-level hypervolume API.
//!
//! These tests verify the public entry points:
//! - The one-shot `hypervolume` function
//! - Builder configuration and validation
//! - Sense handling, clamping and error reporting
//! - Result helpers and formatting
//!
//! ## Test Organization
//!
//! 1. **One-Shot Function** - Known values through both algorithms
//! 2. **Sense and Clamping** - Maximize/minimize frames, out-of-box points
//! 3. **Input Errors** - Dimension, reference and numeric failures
//! 4. **Builder** - Defaults, duplicates, depth ceiling
//! 5. **Algorithm Selector** - Parsing and display
//! 6. **Result Output** - Diagnostics, formatting, batches

use approx::assert_relative_eq;

use hypervolume::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn rotated_triple() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 3.0, 1.0],
        vec![3.0, 1.0, 2.0],
    ]
}

fn maximize(algorithm: Algorithm) -> HypervolumeCalculator {
    Hypervolume::new()
        .algorithm(algorithm)
        .sense(Maximize)
        .build()
        .unwrap()
}

// ============================================================================
// One-Shot Function Tests
// ============================================================================

/// Test the one-shot function in 2-D.
///
/// Verifies both algorithms on two overlapping boxes.
#[test]
fn test_hypervolume_two_points() {
    let rows = vec![vec![1.0, 2.0], vec![2.0, 1.0]];

    for algorithm in [Wfg, Zn] {
        let hv = hypervolume(&rows, &[3.0, 3.0], algorithm).unwrap();
        assert_relative_eq!(hv, 3.0, epsilon = 1e-12);
    }
}

/// Test the one-shot function in 3-D.
///
/// Verifies both algorithms on the rotated triple.
#[test]
fn test_hypervolume_three_objectives() {
    for algorithm in [Wfg, Zn] {
        let hv = hypervolume(&rotated_triple(), &[4.0, 4.0, 4.0], algorithm).unwrap();
        assert_relative_eq!(hv, 13.0, epsilon = 1e-12);
    }
}

/// Test an empty front.
///
/// Verifies zero for any reference, including an empty one.
#[test]
fn test_hypervolume_empty_front() {
    let rows: Vec<Vec<f64>> = Vec::new();
    let no_objectives: &[f64] = &[];

    assert_eq!(hypervolume(&rows, &[1.0, 1.0], Wfg).unwrap(), 0.0);
    assert_eq!(hypervolume(&rows, &[1.0, 1.0], Zn).unwrap(), 0.0);
    assert_eq!(hypervolume(&rows, no_objectives, Wfg).unwrap(), 0.0);
}

/// Test array rows.
///
/// Verifies that any `AsRef<[T]>` row type is accepted.
#[test]
fn test_hypervolume_array_rows() {
    let rows = [[1.0, 2.0], [2.0, 1.0]];
    let hv = hypervolume(&rows, &[3.0, 3.0], Zn).unwrap();

    assert_relative_eq!(hv, 3.0, epsilon = 1e-12);
}

/// Test f32 input.
///
/// Verifies that the facade is generic over float width.
#[test]
fn test_hypervolume_f32() {
    let rows = vec![vec![1.0f32, 2.0], vec![2.0, 1.0]];
    let hv = hypervolume(&rows, &[3.0f32, 3.0], Wfg).unwrap();

    assert_relative_eq!(hv, 3.0f32, epsilon = 1e-6);
}

// ============================================================================
// Sense and Clamping Tests
// ============================================================================

/// Test a single point under maximization.
///
/// Verifies that [1, 1] above the origin spans the unit square.
#[test]
fn test_maximize_unit_point() {
    for algorithm in [Wfg, Zn] {
        let result = maximize(algorithm).compute(&[vec![1.0, 1.0]], &[0.0, 0.0]).unwrap();
        assert_relative_eq!(result.value, 1.0, epsilon = 1e-12);
    }
}

/// Test two points under maximization.
///
/// Verifies box union relative to the origin.
#[test]
fn test_maximize_two_points() {
    let rows = vec![vec![1.0, 2.0], vec![2.0, 1.0]];

    for algorithm in [Wfg, Zn] {
        let result = maximize(algorithm).compute(&rows, &[0.0, 0.0]).unwrap();
        assert_relative_eq!(result.value, 3.0, epsilon = 1e-12);
        assert_eq!(result.sense, Maximize);
    }
}

/// Test a point on the wrong side of the reference.
///
/// Verifies that clamping leaves it with no volume.
#[test]
fn test_minimize_point_beyond_reference() {
    for algorithm in [Wfg, Zn] {
        let hv = hypervolume(&[vec![1.0, 1.0]], &[0.0, 0.0], algorithm).unwrap();
        assert_eq!(hv, 0.0);
    }
}

/// Test a point outside the box in one objective.
///
/// Verifies that only the in-box coordinates matter after clamping.
#[test]
fn test_clamping_partial_outlier() {
    // [4, 0] clamps to [3, 0], a flat box; [1, 2] spans 2 · 1.
    let rows = vec![vec![1.0, 2.0], vec![4.0, 0.0]];

    for algorithm in [Wfg, Zn] {
        let hv = hypervolume(&rows, &[3.0, 3.0], algorithm).unwrap();
        assert_relative_eq!(hv, 2.0, epsilon = 1e-12);
    }
}

/// Test negative coordinates.
///
/// Verifies that the reference need not be at the origin.
#[test]
fn test_negative_coordinates() {
    let rows = vec![vec![-3.0, -2.0], vec![-2.0, -3.0]];

    for algorithm in [Wfg, Zn] {
        let hv = hypervolume(&rows, &[-1.0, -1.0], algorithm).unwrap();
        assert_relative_eq!(hv, 3.0, epsilon = 1e-12);
    }
}

// ============================================================================
// Input Errors Tests
// ============================================================================

/// Test a row of the wrong length.
///
/// Verifies that the offending row is reported.
#[test]
fn test_dimension_mismatch() {
    let rows = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]];
    let res = hypervolume(&rows, &[3.0, 3.0], Wfg);

    assert_eq!(
        res,
        Err(HypervolumeError::DimensionMismatch {
            row: 1,
            expected: 2,
            got: 3
        })
    );
}

/// Test an empty reference with a non-empty front.
///
/// Verifies the dedicated error.
#[test]
fn test_empty_reference() {
    let no_objectives: &[f64] = &[];
    let res = hypervolume(&[Vec::new()], no_objectives, Zn);
    assert_eq!(res, Err(HypervolumeError::EmptyReference));
}

/// Test non-finite values.
///
/// Verifies that NaN and infinity are rejected with their location.
#[test]
fn test_non_finite_values() {
    let res = hypervolume(&[vec![1.0, f64::NAN]], &[3.0, 3.0], Wfg);
    assert!(matches!(res, Err(HypervolumeError::InvalidNumericValue(ref s)) if s.starts_with("rows[0][1]")));

    let res = hypervolume(&[vec![1.0, 1.0]], &[f64::INFINITY, 3.0], Wfg);
    assert!(matches!(res, Err(HypervolumeError::InvalidNumericValue(ref s)) if s.starts_with("reference[0]")));
}

/// Test the depth ceiling through the calculator.
///
/// Verifies that WFG fails while ZN is unaffected.
#[test]
fn test_recursion_limit_through_calculator() {
    let wfg = Hypervolume::new().algorithm(Wfg).max_depth(1).build().unwrap();
    let res = wfg.compute(&rotated_triple(), &[4.0, 4.0, 4.0]);
    assert_eq!(res, Err(HypervolumeError::RecursionLimitExceeded { limit: 1 }));

    let zn = Hypervolume::new().algorithm(Zn).max_depth(1).build().unwrap();
    let result = zn.compute(&rotated_triple(), &[4.0, 4.0, 4.0]).unwrap();
    assert_relative_eq!(result.value, 13.0, epsilon = 1e-12);
}

/// Test error messages.
///
/// Verifies that the Display output names the problem.
#[test]
fn test_error_display() {
    let err = HypervolumeError::DimensionMismatch {
        row: 4,
        expected: 3,
        got: 2,
    };
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: row 4 has 2 objectives, reference has 3"
    );

    let err = HypervolumeError::RecursionLimitExceeded { limit: 8 };
    assert!(err.to_string().contains('8'));
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
///
/// Verifies WFG, minimization and the default ceiling.
#[test]
fn test_builder_defaults() {
    let calculator = Hypervolume::new().build().unwrap();

    assert_eq!(calculator.algorithm(), Wfg);
    assert_eq!(calculator.sense(), Minimize);
    assert_eq!(calculator.max_depth(), 1000);
}

/// Test builder accessors after configuration.
///
/// Verifies that every setting reaches the calculator.
#[test]
fn test_builder_configured() {
    let calculator = Hypervolume::new()
        .algorithm(Zn)
        .sense(Maximize)
        .max_depth(12)
        .build()
        .unwrap();

    assert_eq!(calculator.algorithm(), Zn);
    assert_eq!(calculator.sense(), Maximize);
    assert_eq!(calculator.max_depth(), 12);
}

/// Test duplicate parameters.
///
/// Verifies that setting a parameter twice fails at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let res = Hypervolume::new().algorithm(Wfg).algorithm(Zn).build();
    assert_eq!(
        res,
        Err(HypervolumeError::DuplicateParameter {
            parameter: "algorithm"
        })
    );

    let res = Hypervolume::new().max_depth(3).sense(Maximize).max_depth(4).build();
    assert_eq!(
        res,
        Err(HypervolumeError::DuplicateParameter {
            parameter: "max_depth"
        })
    );
}

/// Test a zero depth ceiling.
///
/// Verifies rejection at build time.
#[test]
fn test_builder_zero_max_depth() {
    let res = Hypervolume::new().max_depth(0).build();
    assert_eq!(res, Err(HypervolumeError::InvalidMaxDepth(0)));
}

// ============================================================================
// Algorithm Selector Tests
// ============================================================================

/// Test parsing algorithm names.
///
/// Verifies case-insensitive, whitespace-tolerant parsing.
#[test]
fn test_algorithm_from_str() {
    assert_eq!("wfg".parse::<Algorithm>(), Ok(Wfg));
    assert_eq!(" WFG ".parse::<Algorithm>(), Ok(Wfg));
    assert_eq!("Zn".parse::<Algorithm>(), Ok(Zn));
    assert_eq!(
        "hso".parse::<Algorithm>(),
        Err(HypervolumeError::UnknownAlgorithm("hso".to_string()))
    );
}

/// Test algorithm display.
///
/// Verifies that display and parsing round-trip.
#[test]
fn test_algorithm_display() {
    assert_eq!(Wfg.to_string(), "wfg");
    assert_eq!(Zn.to_string(), "zn");
    assert_eq!(Zn.to_string().parse::<Algorithm>(), Ok(Zn));
    assert_eq!(Algorithm::default(), Wfg);
}

// ============================================================================
// Result Output Tests
// ============================================================================

/// Test result metadata.
///
/// Verifies counts and the absence of optional outputs by default.
#[test]
fn test_result_metadata() {
    let result = Hypervolume::new()
        .build()
        .unwrap()
        .compute(&rotated_triple(), &[4.0, 4.0, 4.0])
        .unwrap();

    assert_eq!(result.points, 3);
    assert_eq!(result.nobj, 3);
    assert_eq!(result.algorithm, Wfg);
    assert!(!result.has_diagnostics());
    assert!(!result.has_contributions());
}

/// Test diagnostics output.
///
/// Verifies that requested diagnostics reflect the recursion.
#[test]
fn test_result_diagnostics() {
    let result = Hypervolume::new()
        .return_diagnostics()
        .build()
        .unwrap()
        .compute(&rotated_triple(), &[4.0, 4.0, 4.0])
        .unwrap();

    let diagnostics = result.diagnostics.unwrap();
    assert_eq!(diagnostics.calls_per_level, vec![1, 2, 1]);
    assert_eq!(diagnostics.peak_depth, 3);
}

/// Test formatted output.
///
/// Verifies that the summary and optional sections are printed.
#[test]
fn test_result_display() {
    let result = Hypervolume::new()
        .algorithm(Zn)
        .return_diagnostics()
        .return_contributions()
        .build()
        .unwrap()
        .compute(&rotated_triple(), &[4.0, 4.0, 4.0])
        .unwrap();

    let text = result.to_string();
    assert!(text.contains("Summary:"));
    assert!(text.contains("Algorithm:   zn"));
    assert!(text.contains("Hypervolume: 13"));
    assert!(text.contains("Recursion Diagnostics:"));
    assert!(text.contains("Exclusive Contributions:"));
}

/// Test batch computation.
///
/// Verifies that a failing front does not affect the others.
#[test]
fn test_compute_each() {
    let fronts = vec![
        vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        vec![vec![1.0, 2.0, 3.0]],
        vec![],
    ];
    let results = Hypervolume::new()
        .build()
        .unwrap()
        .compute_each(&fronts, &[3.0, 3.0]);

    assert_eq!(results.len(), 3);
    assert_relative_eq!(results[0].as_ref().unwrap().value, 3.0, epsilon = 1e-12);
    assert!(matches!(
        results[1],
        Err(HypervolumeError::DimensionMismatch { row: 0, .. })
    ));
    assert_eq!(results[2].as_ref().unwrap().value, 0.0);
}
