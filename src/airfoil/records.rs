use crate::errors::{AirfoilError, Result};
use crate::geometry::point::{parse_point, Point};
use std::str::FromStr;

/// A forward-only cursor over the lines of an airfoil file. Every read reports failures as
/// malformed records carrying the 1-based line number where decoding stopped.
pub(crate) struct Records<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Records<'a> {
    pub fn new(text: &'a str) -> Records<'a> {
        Records {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// The 1-based line number of the next line to be read
    pub fn line_no(&self) -> usize {
        self.pos + 1
    }

    fn next_line(&mut self, what: &str) -> Result<&'a str> {
        match self.lines.get(self.pos) {
            Some(line) => {
                self.pos += 1;
                Ok(line)
            }
            None => Err(AirfoilError::malformed(
                self.line_no(),
                format!("expected {}, found end of file", what),
            )),
        }
    }

    /// Read a free text line such as a name or comment
    pub fn text(&mut self, what: &str) -> Result<String> {
        self.next_line(what).map(|l| l.to_string())
    }

    /// Read a line and parse its first whitespace separated token
    pub fn first_token<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let line = self.next_line(what)?;
        line.split_whitespace()
            .next()
            .and_then(|t| t.parse::<T>().ok())
            .ok_or_else(|| {
                AirfoilError::malformed(self.pos, format!("expected integer {}, found '{}'", what, line))
            })
    }

    /// Read a line and return all of its whitespace separated tokens
    pub fn tokens(&mut self, what: &str) -> Result<Vec<&'a str>> {
        self.next_line(what).map(|l| l.split_whitespace().collect())
    }

    /// Read a single coordinate line
    pub fn point(&mut self, what: &str) -> Result<Point> {
        let line = self.next_line(what)?;
        parse_point(line).ok_or_else(|| {
            AirfoilError::malformed(
                self.pos,
                format!("expected two numeric values for {}, found '{}'", what, line),
            )
        })
    }

    /// Read exactly `count` coordinate lines
    pub fn points(&mut self, count: usize, what: &str) -> Result<Vec<Point>> {
        (0..count).map(|_| self.point(what)).collect()
    }

    /// Consume the blank line that separates two blocks of records. A missing separator at the
    /// end of the file is only accepted when nothing is expected to follow it.
    pub fn separator(&mut self, required: bool) -> Result<()> {
        match self.lines.get(self.pos) {
            None if !required => Ok(()),
            None => Err(AirfoilError::malformed(
                self.line_no(),
                "expected blank separator line, found end of file",
            )),
            Some(line) if line.trim().is_empty() => {
                self.pos += 1;
                Ok(())
            }
            Some(line) => Err(AirfoilError::malformed(
                self.line_no(),
                format!("expected blank separator line, found '{}'", line),
            )),
        }
    }

    /// Read the upper and lower surface blocks shared by the .af and Lednicer layouts: the upper
    /// points, a blank line, then the lower points.
    pub fn surfaces(&mut self, n_upper: usize, n_lower: usize) -> Result<(Vec<Point>, Vec<Point>)> {
        let upper = self.points(n_upper, "upper surface point")?;
        self.separator(n_lower > 0)?;
        let lower = self.points(n_lower, "lower surface point")?;
        Ok((upper, lower))
    }

    /// Parse every remaining non-blank line as a coordinate line
    pub fn remaining_points(&mut self) -> Result<Vec<Point>> {
        let mut points = Vec::new();
        while self.pos < self.lines.len() {
            if self.lines[self.pos].trim().is_empty() {
                self.pos += 1;
            } else {
                points.push(self.point("contour point")?);
            }
        }

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(e: AirfoilError) -> usize {
        match e {
            AirfoilError::MalformedRecord { line, .. } => line,
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_text_reports_end_of_file() {
        let mut records = Records::new("only\n");
        assert_eq!("only", records.text("name").unwrap());
        assert_eq!(2, line_of(records.text("name").unwrap_err()));
    }

    #[test]
    fn test_first_token_line_number() {
        let mut records = Records::new("a\n1 extra\nx\n");
        records.text("comment").unwrap();
        assert_eq!(1, records.first_token::<usize>("count").unwrap());
        assert_eq!(3, line_of(records.first_token::<usize>("count").unwrap_err()));
    }

    #[test]
    fn test_crlf_lines() {
        let mut records = Records::new("name\r\n0.5 0.25\r\n");
        assert_eq!("name", records.text("name").unwrap());
        assert!(records.point("point").is_ok());
    }

    #[test]
    fn test_separator_must_be_blank() {
        let mut records = Records::new("0.1 0.2\n0.3 0.4\n");
        assert_eq!(1, line_of(records.separator(true).unwrap_err()));
        let mut records = Records::new("   \n");
        assert!(records.separator(true).is_ok());
        assert!(records.separator(false).is_ok());
        assert!(records.separator(true).is_err());
    }

    #[test]
    fn test_remaining_points_skips_blank() {
        let mut records = Records::new("0 0\n\n1 0\n  \n");
        assert_eq!(2, records.remaining_points().unwrap().len());
    }
}
