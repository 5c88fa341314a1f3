use crate::errors::{AirfoilError, Result};
use crate::geometry::point::Point;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

mod load;
mod records;
pub mod split;

pub const SUPPORTED_FORMATS: &str = "Supported formats are:
  'af':       OpenVSP airfoil format.
  'lednicer': Lednicer format as found at http://www.ae.illinois.edu/m-selig/ads.html.
  'selig':    Selig format as found at http://www.ae.illinois.edu/m-selig/ads.html.";

/// The text layouts an airfoil can be read from. Output is always written in the `Af` layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Format {
    Af,
    Lednicer,
    #[default]
    Selig,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::Af => "af",
            Format::Lednicer => "lednicer",
            Format::Selig => "selig",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "af" => Ok(Format::Af),
            "lednicer" => Ok(Format::Lednicer),
            "selig" => Ok(Format::Selig),
            other => Err(AirfoilError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// An airfoil section as stored in an OpenVSP .af file. Both surfaces are ordered from the
/// leading edge to the trailing edge, and each instance owns its own point lists. The point
/// counts written to file are always the lengths of these lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    pub comment: String,
    pub name: String,
    pub symmetric: bool,
    pub upper: Vec<Point>,
    pub lower: Vec<Point>,
}

impl Airfoil {
    pub fn new(
        comment: String,
        name: String,
        symmetric: bool,
        upper: Vec<Point>,
        lower: Vec<Point>,
    ) -> Airfoil {
        Airfoil {
            comment,
            name,
            symmetric,
            upper,
            lower,
        }
    }

    pub fn num_upper_surface_points(&self) -> usize {
        self.upper.len()
    }

    pub fn num_lower_surface_points(&self) -> usize {
        self.lower.len()
    }

    /// Decode an airfoil from the full text of a file in the given format
    pub fn load(text: &str, format: Format) -> Result<Airfoil> {
        match format {
            Format::Af => Airfoil::from_af_str(text),
            Format::Lednicer => Airfoil::from_lednicer_str(text),
            Format::Selig => Airfoil::from_selig_str(text),
        }
    }

    /// Read and decode an airfoil file. The file is read completely and closed before decoding.
    pub fn load_file(path: &Path, format: Format) -> Result<Airfoil> {
        let text = std::fs::read_to_string(path)?;
        Airfoil::load(&text, format)
    }
}

/// Writes the canonical .af layout
impl Display for Airfoil {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.comment)?;
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", u8::from(self.symmetric))?;
        writeln!(f, "{}", self.num_upper_surface_points())?;
        writeln!(f, "{}", self.num_lower_surface_points())?;

        for p in self.upper.iter() {
            writeln!(f, "{} {}", p.x, p.y)?;
        }

        writeln!(f)?;

        for p in self.lower.iter() {
            writeln!(f, "{} {}", p.x, p.y)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::{origin, parse_point};
    use test_case::test_case;

    fn points(lines: &[&str]) -> Vec<Point> {
        lines.iter().map(|l| parse_point(l).unwrap()).collect()
    }

    #[test_case("af", Format::Af)]
    #[test_case("lednicer", Format::Lednicer)]
    #[test_case("selig", Format::Selig)]
    fn test_format_names(name: &str, e: Format) {
        assert_eq!(e, name.parse::<Format>().unwrap());
        assert_eq!(name, e.to_string());
    }

    #[test_case("dat")]
    #[test_case("Selig")]
    #[test_case("")]
    fn test_unsupported_format(name: &str) {
        match name.parse::<Format>() {
            Err(AirfoilError::UnsupportedFormat(n)) => assert_eq!(name, n),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_default_format_is_selig() {
        assert_eq!(Format::Selig, Format::default());
    }

    #[test]
    fn test_serialize_layout() {
        let af = Airfoil::new(
            "comment".to_string(),
            "name".to_string(),
            false,
            points(&["0 0", "0.5 0.050", "1.0 0.0"]),
            points(&["0 0", "1.0 -0.00125"]),
        );

        let e = "comment\nname\n0\n3\n2\n0 0\n0.5 0.050\n1.0 0.0\n\n0 0\n1.0 -0.00125\n";
        assert_eq!(e, af.to_string());
    }

    #[test]
    fn test_serialize_empty_surfaces() {
        let af = Airfoil::new(String::new(), "flat".to_string(), true, vec![], vec![]);
        assert_eq!("\nflat\n1\n0\n0\n\n", af.to_string());
    }

    #[test]
    fn test_instances_own_their_points() {
        let mut a = Airfoil::from_selig_str("A\n1 0\n0 0\n1 0\n").unwrap();
        let b = Airfoil::from_selig_str("B\n").unwrap();
        a.upper.push(origin());
        assert_eq!(1, b.upper.len());
        assert_eq!(1, b.lower.len());
    }

    #[test_case(Format::Af, "c\nn\n0\n1\n1\n0 0\n\n0 0\n")]
    #[test_case(Format::Lednicer, "n\n1 1\n\n0 0\n\n0 0\n")]
    #[test_case(Format::Selig, "n\n1 0\n0 0\n1 0\n")]
    fn test_load_dispatch(format: Format, text: &str) {
        let af = Airfoil::load(text, format).unwrap();
        assert_eq!(origin(), af.upper[0]);
        assert_eq!(origin(), af.lower[0]);
    }

    #[test]
    fn test_selig_converts_to_af_and_back() {
        let text = "NACA 0012\n1.00000 0.00126\n0.50000 0.05294\n0.00000 0.00000\n0.50000 -0.05294\n1.00000 -0.00126\n";
        let selig = Airfoil::from_selig_str(text).unwrap();
        let af = Airfoil::from_af_str(&selig.to_string()).unwrap();
        assert_eq!(selig, af);
        assert_eq!(selig.to_string(), af.to_string());
    }
}
