//! Hypervolume Examples
//!
//! This example demonstrates common hypervolume scenarios:
//! - Basic computation with minimal configuration
//! - Maximization fronts and points outside the reference box
//! - Exclusive contributions and recursion diagnostics
//! - Comparing the two algorithms on a larger front
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use hypervolume::prelude::*;
#[cfg(feature = "std")]
use rand::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), HypervolumeError> {
    println!("{}", "=".repeat(80));
    println!("Hypervolume - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic()?;
    example_2_maximize_and_clamping()?;
    example_3_contributions_and_diagnostics()?;
    example_4_algorithm_comparison()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Computation
/// Two points in a minimization problem
fn example_1_basic() -> Result<(), HypervolumeError> {
    println!("Example 1: Basic Computation");
    println!("{}", "-".repeat(80));

    let front = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
    let result = Hypervolume::new().build()?.compute(&front, &[3.0, 3.0])?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Algorithm:   wfg
      Sense:       Minimize
      Points:      2
      Objectives:  2
      Hypervolume: 3
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Maximization and Clamping
/// The reference is the smallest corner; points below it are clamped onto it
fn example_2_maximize_and_clamping() -> Result<(), HypervolumeError> {
    println!("Example 2: Maximization and Clamping");
    println!("{}", "-".repeat(80));

    let front = vec![vec![1.0, 2.0], vec![2.0, 1.0], vec![3.0, -1.0]];
    let calculator = Hypervolume::new().sense(Maximize).build()?;

    let hv = calculator.compute(&front, &[0.0, 0.0])?.value;
    println!("Hypervolume above the origin: {}", hv);

    /* Expected Output:
    Hypervolume above the origin: 3
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Contributions and Diagnostics
/// How much each point alone adds, and how deep WFG had to go
fn example_3_contributions_and_diagnostics() -> Result<(), HypervolumeError> {
    println!("Example 3: Contributions and Diagnostics");
    println!("{}", "-".repeat(80));

    let front = vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 3.0, 1.0],
        vec![3.0, 1.0, 2.0],
        vec![3.5, 3.5, 3.5], // dominated
    ];

    let result = Hypervolume::new()
        .return_contributions()
        .return_diagnostics()
        .build()?
        .compute(&front, &[4.0, 4.0, 4.0])?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Algorithm:   wfg
      Sense:       Minimize
      Points:      4
      Objectives:  3
      Hypervolume: 13

    Recursion Diagnostics:
      Total calls:  4
      Peak depth:   3
      Filter calls: 4
      Level   0:          1
      Level   1:          2
      Level   2:          1

    Exclusive Contributions:
         Row       Exclusive
      ----------------------
           0        3.000000
           1        3.000000
           2        3.000000
           3        0.000000
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Algorithm Comparison
/// Both decompositions on the same random front
fn example_4_algorithm_comparison() -> Result<(), HypervolumeError> {
    println!("Example 4: Algorithm Comparison");
    println!("{}", "-".repeat(80));

    // Points on the positive orthant of the unit sphere.
    let mut rng = StdRng::seed_from_u64(2024);
    let front: Vec<Vec<f64>> = (0..25)
        .map(|_| {
            let raw: Vec<f64> = (0..4).map(|_| rng.random_range(0.05..1.0)).collect();
            let norm = raw.iter().map(|v| v * v).sum::<f64>().sqrt();
            raw.iter().map(|v| v / norm).collect()
        })
        .collect();
    let reference = [1.1; 4];

    for algorithm in ["wfg", "zn"] {
        let algorithm: Algorithm = algorithm.parse()?;
        let start = Instant::now();
        let hv = hypervolume(&front, &reference, algorithm)?;
        println!("{:>4}: {:.12}  ({:?})", algorithm, hv, start.elapsed());
    }

    /* Expected Output (timings vary):
     wfg: <volume>  (...)
      zn: <same volume>  (...)
    */

    println!();
    Ok(())
}
