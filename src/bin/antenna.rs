//! Finds the transmission radius covering every listed position.
//!
//! Reads point sets until a zero count terminates the input, and prints for
//! each the radius of its smallest enclosing circle, rounded up to a whole
//! number: a coverage radius must never be under-reported, and the rounding
//! is settled with exact arithmetic rather than a floating-point round trip.

use flow_reductions::{smallest_enclosing_circle, Point};
use num_bigint::BigInt;
use proconio::input;

fn coverage_radius(coordinates: &[(i64, i64)]) -> BigInt {
    let points: Vec<Point> = coordinates
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();
    smallest_enclosing_circle(&points).radius_ceil()
}

fn main() {
    loop {
        input! {
            n: usize,
        }
        if n == 0 {
            break;
        }
        input! {
            coordinates: [(i64, i64); n],
        }
        println!("{}", coverage_radius(&coordinates));
    }
}
