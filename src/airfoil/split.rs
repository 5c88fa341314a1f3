use crate::geometry::distances2::closest_to_origin;
use crate::geometry::point::{origin, Point};
use rust_decimal::Decimal;
use tracing::debug;

/// Split a continuous contour into upper and lower surfaces, each ordered from the leading edge
/// to the trailing edge.
///
/// The contour is expected to run from the trailing edge over the upper surface to the leading
/// edge and then back along the lower surface, as in the Selig format. The point closest to the
/// origin is taken as the leading edge: points before it make up the upper surface (reversed),
/// points after it make up the lower surface. The leading edge point itself joins the upper
/// surface when its height is zero or positive and the lower surface otherwise. Finally an exact
/// (0, 0) point is placed at the start of both surfaces.
///
/// The split is total: an empty contour gives two surfaces holding only the origin, and the two
/// surfaces always hold two more points than the contour.
pub fn split_surfaces(points: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let mut upper = vec![origin()];
    let mut lower = vec![origin()];

    let le = match closest_to_origin(points) {
        Some(i) => i,
        None => return (upper, lower),
    };

    let le_point = points[le];
    if le_point.y >= Decimal::ZERO {
        upper.push(le_point);
    } else {
        lower.push(le_point);
    }

    upper.extend(points[..le].iter().rev().copied());
    lower.extend(points[le + 1..].iter().copied());

    debug!(
        leading_edge = le,
        x = %le_point.x,
        y = %le_point.y,
        upper = upper.len(),
        lower = lower.len(),
        "split contour at leading edge"
    );

    (upper, lower)
}
