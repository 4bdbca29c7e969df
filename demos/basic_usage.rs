//! Basic usage example for the empirical reliability library
//!
//! Run with: cargo run --example basic_usage

use empirical_reliability::metrics::{
    cumulative_failure, failure_density, hazard_rate, mean_time_to_failure, reliability,
};
use empirical_reliability::{FailureTimeSet, Report, ReportOptions, ResultSet};

fn main() {
    println!("=== Empirical Reliability Examples ===\n");

    // Failure times of eight pumps, in hours
    let mut times = FailureTimeSet::new();
    for input in ["120", "340", "95", "410", "275", "180", "505", "230"] {
        times.add(input).unwrap();
    }

    // Invalid entries are rejected and leave the collection alone
    if let Err(e) = times.add("-15") {
        println!("Rejected input: {e}");
    }
    println!("Recorded failure times: {}\n", times.len());

    // Individual indicators over a range of query points
    println!("   t     F*(t)  R*(t)  f*(t)  λ*(t)");
    for t in [0.0, 100.0, 200.0, 300.0, 400.0, 600.0] {
        let data = times.as_slice();
        println!(
            "{t:>5}   {:.3}  {:.3}  {:.3}  {:.6}",
            cumulative_failure(data, t).unwrap(),
            reliability(data, t).unwrap(),
            failure_density(data, t).unwrap(),
            hazard_rate(data, t).unwrap(),
        );
    }
    println!("\nE*T = {:.2} hours\n", mean_time_to_failure(times.as_slice()));

    // Snapshot at one point and render the report
    println!("=== Report ===\n");
    let result = ResultSet::compute(times.as_slice(), 250.0, "250").unwrap();
    let options = ReportOptions::default();
    print!("{}", Report::new(&times, Some(&result), &options));
}
