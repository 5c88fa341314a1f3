use crate::geometry::point::Point;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use itertools::Itertools;
use rust_decimal::Decimal;

fn widen(d: &Decimal) -> BigDecimal {
    BigDecimal::new(BigInt::from(d.mantissa()), i64::from(d.scale()))
}

/// Return the squared distance of a point from the origin. The square is monotonic with the
/// two-norm, so it orders points the same way. It is computed without rounding or overflow,
/// so points at different distances never compare equal.
pub fn origin_dist2(p: &Point) -> BigDecimal {
    let x = widen(&p.x);
    let y = widen(&p.y);
    &x * &x + &y * &y
}

/// Find the index of the point closest to the origin in a single pass. When several points are
/// equally close the first one in sequence order is returned. Returns None for an empty slice.
pub fn closest_to_origin(points: &[Point]) -> Option<usize> {
    points.iter().position_min_by_key(|p| origin_dist2(p))
}
