use ncollide2d::na::Point2;
use rust_decimal::Decimal;

/// A coordinate pair of (chord position, height) held as exact decimals, so that values read
/// from text are written back out with the same digits.
pub type Point = Point2<Decimal>;

/// The exact origin, which is also the conventional leading edge of an airfoil
pub fn origin() -> Point {
    Point::new(Decimal::ZERO, Decimal::ZERO)
}

/// Parse a single numeric token into an exact decimal. Plain decimal notation keeps the scale of
/// the token ("0.050" stays "0.050" when displayed), while scientific notation ("1.5e-3") is
/// accepted and converted to its plain decimal value. Returns None for anything that is not a
/// finite number, and for values outside the range of `Decimal`: more than 28 decimal places or
/// a magnitude above roughly 7.9e28.
pub fn parse_decimal(token: &str) -> Option<Decimal> {
    let token = match token.strip_prefix('+') {
        Some(rest) if rest.starts_with(['+', '-']) => return None,
        Some(rest) => rest,
        None => token,
    };
    if token.contains(['e', 'E']) {
        Decimal::from_scientific(&token.to_ascii_lowercase()).ok()
    } else {
        Decimal::from_str_exact(token).ok()
    }
}

/// Parse the first two whitespace separated tokens of a line into a point. Any further tokens
/// are ignored.
pub fn parse_point(line: &str) -> Option<Point> {
    let mut tokens = line.split_whitespace();
    let x = parse_decimal(tokens.next()?)?;
    let y = parse_decimal(tokens.next()?)?;
    Some(Point::new(x, y))
}
