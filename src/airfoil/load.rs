use super::records::Records;
use super::split::split_surfaces;
use super::Airfoil;
use crate::errors::{AirfoilError, Result};
use crate::geometry::point::parse_decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

impl Airfoil {
    /// Decode an airfoil from the OpenVSP .af layout: comment, name, symmetric flag, upper count,
    /// lower count, the upper points, a blank line and the lower points.
    pub fn from_af_str(text: &str) -> Result<Airfoil> {
        let mut records = Records::new(text);
        let comment = records.text("comment")?;
        let name = records.text("name")?;
        let symmetric = records.first_token::<i64>("symmetric flag")? != 0;
        let n_upper = records.first_token::<usize>("upper surface count")?;
        let n_lower = records.first_token::<usize>("lower surface count")?;
        let (upper, lower) = records.surfaces(n_upper, n_lower)?;

        debug!(%name, n_upper, n_lower, symmetric, "decoded .af airfoil");
        Ok(Airfoil::new(comment, name, symmetric, upper, lower))
    }

    /// Decode an airfoil from the Lednicer layout: name, a line with the upper and lower counts,
    /// a blank line, then the upper and lower point blocks separated by a blank line. Counts are
    /// often written as decimals ("27.0") and are truncated to integers.
    pub fn from_lednicer_str(text: &str) -> Result<Airfoil> {
        let mut records = Records::new(text);
        let name = records.text("name")?;

        let counts_line = records.line_no();
        let tokens = records.tokens("point counts")?;
        let count = |i: usize, what: &str| -> Result<usize> {
            tokens
                .get(i)
                .and_then(|t| parse_decimal(t))
                .filter(|d| !d.is_sign_negative())
                .and_then(|d| d.trunc().to_usize())
                .ok_or_else(|| {
                    AirfoilError::malformed(counts_line, format!("expected {} count", what))
                })
        };
        let n_upper = count(0, "upper surface")?;
        let n_lower = count(1, "lower surface")?;

        records.separator(n_upper + n_lower > 0)?;
        let (upper, lower) = records.surfaces(n_upper, n_lower)?;

        debug!(%name, n_upper, n_lower, "decoded Lednicer airfoil");
        Ok(Airfoil::new(String::new(), name, false, upper, lower))
    }

    /// Decode an airfoil from the Selig layout: name followed by one continuous contour running
    /// from the trailing edge over the upper surface and back along the lower surface. The
    /// surfaces are recovered with [`split_surfaces`].
    pub fn from_selig_str(text: &str) -> Result<Airfoil> {
        let mut records = Records::new(text);
        let name = records.text("name")?;
        let contour = records.remaining_points()?;
        let (upper, lower) = split_surfaces(&contour);

        debug!(%name, contour = contour.len(), "decoded Selig airfoil");
        Ok(Airfoil::new(String::new(), name, false, upper, lower))
    }
}
