use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{One, Zero};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Fixed shuffle seed. The smallest enclosing circle is unique, so the
/// reported radius does not depend on it; it only bounds the expected work of
/// the incremental construction.
const SHUFFLE_SEED: u64 = 0x5eed_c17c;

/// 2D point with integer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Circle with exact rational center and squared radius.
///
/// All predicates compare squared distances in `BigRational`, so containment
/// and the ceiling of the radius are free of floating-point error.
#[derive(Clone, Debug, PartialEq)]
pub struct EnclosingCircle {
    center_x: BigRational,
    center_y: BigRational,
    radius_sq: BigRational,
}

impl EnclosingCircle {
    fn degenerate() -> Self {
        Self {
            center_x: BigRational::zero(),
            center_y: BigRational::zero(),
            radius_sq: BigRational::zero(),
        }
    }

    fn from_point(point: Point) -> Self {
        Self {
            center_x: BigRational::from_integer(BigInt::from(point.x)),
            center_y: BigRational::from_integer(BigInt::from(point.y)),
            radius_sq: BigRational::zero(),
        }
    }

    /// Circle with the segment `a`-`b` as diameter.
    fn from_diameter(a: Point, b: Point) -> Self {
        let two = BigRational::from_integer(BigInt::from(2));
        let center_x = BigRational::from_integer(BigInt::from(a.x) + BigInt::from(b.x)) / &two;
        let center_y = BigRational::from_integer(BigInt::from(a.y) + BigInt::from(b.y)) / &two;
        let dx = BigInt::from(a.x) - BigInt::from(b.x);
        let dy = BigInt::from(a.y) - BigInt::from(b.y);
        let radius_sq = BigRational::from_integer(&dx * &dx + &dy * &dy)
            / BigRational::from_integer(BigInt::from(4));
        Self {
            center_x,
            center_y,
            radius_sq,
        }
    }

    /// Circumscribed circle of a non-degenerate triangle; `None` when the
    /// three points are collinear.
    fn circumscribed(a: Point, b: Point, c: Point) -> Option<Self> {
        let (ax, ay) = (BigInt::from(a.x), BigInt::from(a.y));
        let (bx, by) = (BigInt::from(b.x), BigInt::from(b.y));
        let (cx, cy) = (BigInt::from(c.x), BigInt::from(c.y));

        let d = BigInt::from(2)
            * (&ax * (&by - &cy) + &bx * (&cy - &ay) + &cx * (&ay - &by));
        if d.is_zero() {
            return None;
        }

        let a_sq = &ax * &ax + &ay * &ay;
        let b_sq = &bx * &bx + &by * &by;
        let c_sq = &cx * &cx + &cy * &cy;

        let ux = &a_sq * (&by - &cy) + &b_sq * (&cy - &ay) + &c_sq * (&ay - &by);
        let uy = &a_sq * (&cx - &bx) + &b_sq * (&ax - &cx) + &c_sq * (&bx - &ax);

        let center_x = BigRational::new(ux, d.clone());
        let center_y = BigRational::new(uy, d);
        let dx = &center_x - BigRational::from_integer(ax);
        let dy = &center_y - BigRational::from_integer(ay);
        let radius_sq = &dx * &dx + &dy * &dy;
        Some(Self {
            center_x,
            center_y,
            radius_sq,
        })
    }

    /// Smallest circle through three boundary points, falling back to the
    /// widest diameter pair when they are collinear.
    fn through(a: Point, b: Point, c: Point) -> Self {
        match Self::circumscribed(a, b, c) {
            Some(circle) => circle,
            None => {
                let candidates = [
                    Self::from_diameter(a, b),
                    Self::from_diameter(a, c),
                    Self::from_diameter(b, c),
                ];
                candidates
                    .iter()
                    .max_by(|lhs, rhs| lhs.radius_sq.cmp(&rhs.radius_sq))
                    .cloned()
                    .unwrap_or_else(Self::degenerate)
            }
        }
    }

    /// Exact containment test: squared distance to the center is at most the
    /// squared radius.
    pub fn contains(&self, point: &Point) -> bool {
        let dx = BigRational::from_integer(BigInt::from(point.x)) - &self.center_x;
        let dy = BigRational::from_integer(BigInt::from(point.y)) - &self.center_y;
        &dx * &dx + &dy * &dy <= self.radius_sq
    }

    pub fn center(&self) -> (&BigRational, &BigRational) {
        (&self.center_x, &self.center_y)
    }

    pub fn radius_sq(&self) -> &BigRational {
        &self.radius_sq
    }

    /// Smallest integer not less than the exact radius.
    ///
    /// Starts from the integer square root of the truncated squared radius and
    /// settles the ceiling with exact integer comparisons, never trusting a
    /// floating-point round trip.
    pub fn radius_ceil(&self) -> BigInt {
        let numer = self.radius_sq.numer();
        let denom = self.radius_sq.denom();

        let mut candidate = (numer / denom).sqrt();
        while &(&candidate * &candidate) * denom < *numer {
            candidate += 1;
        }
        while candidate > BigInt::zero() {
            let lower = &candidate - BigInt::one();
            if &(&lower * &lower) * denom >= *numer {
                candidate = lower;
            } else {
                break;
            }
        }
        candidate
    }
}

/// Smallest circle enclosing all points, by randomized incremental
/// construction over boundary sets of at most three points.
///
/// An empty slice yields the degenerate zero circle at the origin.
pub fn smallest_enclosing_circle(points: &[Point]) -> EnclosingCircle {
    if points.is_empty() {
        return EnclosingCircle::degenerate();
    }

    let mut shuffled = points.to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(SHUFFLE_SEED);
    shuffled.shuffle(&mut rng);

    let mut circle = EnclosingCircle::from_point(shuffled[0]);
    for i in 1..shuffled.len() {
        if circle.contains(&shuffled[i]) {
            continue;
        }
        trace!("point {} outside, rebuilding with it on the boundary", i);
        circle = EnclosingCircle::from_point(shuffled[i]);
        for j in 0..i {
            if circle.contains(&shuffled[j]) {
                continue;
            }
            circle = EnclosingCircle::from_diameter(shuffled[i], shuffled[j]);
            for k in 0..j {
                if circle.contains(&shuffled[k]) {
                    continue;
                }
                circle = EnclosingCircle::through(shuffled[i], shuffled[j], shuffled[k]);
            }
        }
    }
    circle
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::{Distribution, Uniform};

    fn ceil_radius(points: &[Point]) -> BigInt {
        smallest_enclosing_circle(points).radius_ceil()
    }

    #[test]
    fn test_single_point_is_zero_radius() {
        let circle = smallest_enclosing_circle(&[Point::new(3, -4)]);
        assert!(circle.radius_sq().is_zero());
        assert_eq!(circle.radius_ceil(), BigInt::from(0));
    }

    #[test]
    fn test_two_points_span_diameter() {
        // distance 10, radius exactly 5
        let circle = smallest_enclosing_circle(&[Point::new(-3, 0), Point::new(3, 8)]);
        assert_eq!(
            *circle.radius_sq(),
            BigRational::from_integer(BigInt::from(25))
        );
        assert_eq!(circle.radius_ceil(), BigInt::from(5));
    }

    #[test]
    fn test_collinear_points() {
        let points = [
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 2),
            Point::new(5, 5),
        ];
        let circle = smallest_enclosing_circle(&points);
        for point in &points {
            assert!(circle.contains(point));
        }
        // diameter endpoints (0,0) and (5,5): radius sqrt(50)/2, ceil 4
        assert_eq!(circle.radius_ceil(), BigInt::from(4));
    }

    #[test]
    fn test_unit_square() {
        let points = [
            Point::new(0, 0),
            Point::new(0, 2),
            Point::new(2, 0),
            Point::new(2, 2),
        ];
        let circle = smallest_enclosing_circle(&points);
        // circumcircle of the square, radius sqrt(2)
        assert_eq!(
            *circle.radius_sq(),
            BigRational::from_integer(BigInt::from(2))
        );
        assert_eq!(circle.radius_ceil(), BigInt::from(2));
    }

    #[test]
    fn test_exact_integer_radius_not_rounded_up() {
        // points on a circle of radius exactly 4 around the origin
        let points = [
            Point::new(4, 0),
            Point::new(-4, 0),
            Point::new(0, 4),
            Point::new(0, -4),
        ];
        assert_eq!(ceil_radius(&points), BigInt::from(4));
    }

    #[test]
    fn test_slightly_larger_radius_rounds_up() {
        // diameter 9 -> radius 4.5 -> ceiling 5
        let points = [Point::new(0, 0), Point::new(9, 0)];
        assert_eq!(ceil_radius(&points), BigInt::from(5));
    }

    #[test]
    fn test_interior_point_is_ignored() {
        let points = [
            Point::new(-6, 0),
            Point::new(6, 0),
            Point::new(1, 1),
        ];
        let circle = smallest_enclosing_circle(&points);
        assert_eq!(
            *circle.radius_sq(),
            BigRational::from_integer(BigInt::from(36))
        );
    }

    #[test]
    fn test_large_coordinates_stay_exact() {
        const M: i64 = 1 << 24;
        let points = [
            Point::new(M, M),
            Point::new(-M, M),
            Point::new(M, -M),
            Point::new(-M, -M),
        ];
        let circle = smallest_enclosing_circle(&points);
        for point in &points {
            assert!(circle.contains(point));
        }
        // radius M * sqrt(2), between 23726566 and 23726567
        assert_eq!(circle.radius_ceil(), BigInt::from(23726567));
    }

    #[test]
    fn test_all_points_enclosed_on_random_sets() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let coordinate = Uniform::from(-1000i64..1000);
        for _ in 0..20 {
            let points: Vec<Point> = (0..40)
                .map(|_| Point::new(coordinate.sample(&mut rng), coordinate.sample(&mut rng)))
                .collect();
            let circle = smallest_enclosing_circle(&points);
            for point in &points {
                assert!(circle.contains(point));
            }
        }
    }

    #[test]
    fn test_matches_brute_force_on_small_sets() {
        // the optimum is determined by at most three points, so the smallest
        // over all 1/2/3-point boundary circles that enclose everything is
        // the answer
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let coordinate = Uniform::from(-50i64..50);
        for _ in 0..10 {
            let points: Vec<Point> = (0..8)
                .map(|_| Point::new(coordinate.sample(&mut rng), coordinate.sample(&mut rng)))
                .collect();

            let mut best: Option<EnclosingCircle> = None;
            let mut consider = |candidate: EnclosingCircle| {
                if points.iter().all(|p| candidate.contains(p)) {
                    let smaller = match &best {
                        Some(current) => candidate.radius_sq() < current.radius_sq(),
                        None => true,
                    };
                    if smaller {
                        best = Some(candidate);
                    }
                }
            };
            for i in 0..points.len() {
                consider(EnclosingCircle::from_point(points[i]));
                for j in 0..i {
                    consider(EnclosingCircle::from_diameter(points[i], points[j]));
                    for k in 0..j {
                        if let Some(circle) =
                            EnclosingCircle::circumscribed(points[i], points[j], points[k])
                        {
                            consider(circle);
                        }
                    }
                }
            }

            let expected = best.unwrap();
            let computed = smallest_enclosing_circle(&points);
            assert_eq!(computed.radius_sq(), expected.radius_sq());
        }
    }
}
