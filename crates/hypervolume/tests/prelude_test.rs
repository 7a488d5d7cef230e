//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for common
//! hypervolume work with a single import.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports

use hypervolume::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the builder and algorithm variants are usable.
///
/// Verifies that a basic computation compiles and runs with prelude imports.
#[test]
fn test_prelude_imports() {
    let rows = vec![vec![1.0, 2.0], vec![2.0, 1.0]];

    let result = Hypervolume::new().algorithm(Wfg).build().unwrap().compute(&rows, &[3.0, 3.0]);
    assert!(result.is_ok(), "Basic computation should work with prelude imports");

    let result = Hypervolume::new().algorithm(Zn).build().unwrap().compute(&rows, &[3.0, 3.0]);
    assert!(result.is_ok());
}

/// Test Sense is available.
///
/// Verifies that both sense variants are exported.
#[test]
fn test_prelude_sense() {
    let _ = Hypervolume::new().sense(Minimize);
    let _ = Hypervolume::new().sense(Maximize);
    assert_eq!(Sense::default(), Minimize);
}

/// Test the low-level building blocks are exported.
///
/// Verifies the front type, dominance helpers and both engines.
#[test]
fn test_prelude_building_blocks() {
    let front: Front<f64> = Front::from_rows(2, &[[1.0, 2.0], [2.0, 1.0]]).unwrap();

    assert_eq!(
        compare(front.point(0), front.point(1), Minimize),
        Dominance::NonDominated
    );
    assert_eq!(nondominated(&front, Minimize).len(), 2);

    let wfg: &dyn VolumeEngine<f64> = &WfgEngine::new(&[3.0, 3.0]);
    let zn: &dyn VolumeEngine<f64> = &ZnEngine::new();
    assert_eq!(wfg.sense(), Minimize);
    assert_eq!(zn.sense(), Maximize);

    let mut diagnostics = Diagnostics::new();
    let contributions = exclusive_contributions(wfg, &front, &mut diagnostics).unwrap();
    assert_eq!(contributions.len(), 2);
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test a complete workflow.
///
/// Verifies result types and error types are reachable from the prelude.
#[test]
fn test_prelude_workflow() {
    let calculator: HypervolumeCalculator = Hypervolume::new()
        .return_diagnostics()
        .build()
        .unwrap();

    let result: HypervolumeResult<f64> = calculator
        .compute(&[vec![1.0, 1.0]], &[2.0, 2.0])
        .unwrap();
    assert!(result.has_diagnostics());

    let err: HypervolumeError = calculator
        .compute(&[vec![1.0]], &[2.0, 2.0])
        .unwrap_err();
    assert!(matches!(err, HypervolumeError::DimensionMismatch { .. }));

    let algorithm: Algorithm = "zn".parse().unwrap();
    assert_eq!(algorithm, Zn);
}
