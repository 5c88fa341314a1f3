use crate::airfoil::{Airfoil, Format};
use crate::errors::{AirfoilError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub const AF_SUFFIX: &str = ".af";

/// How output file names are derived from input file names
#[derive(Debug, Clone)]
pub struct OutputNaming {
    /// Text added to the end of the name, normally ".af"
    pub suffix: String,

    /// When true the final extension of the input is removed before the suffix is added,
    /// otherwise the suffix is appended to the full input name
    pub replace_extension: bool,

    /// Directory for the output files, or None to write them next to the inputs
    pub out_dir: Option<PathBuf>,
}

impl Default for OutputNaming {
    fn default() -> Self {
        OutputNaming::new(AF_SUFFIX, true, None)
    }
}

impl OutputNaming {
    pub fn new(suffix: &str, replace_extension: bool, out_dir: Option<PathBuf>) -> Self {
        OutputNaming {
            suffix: suffix.to_string(),
            replace_extension,
            out_dir,
        }
    }

    /// The name of the file produced for an input file. With the defaults the final extension is
    /// replaced with `.af`, or `.af` is appended if the input has none.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = if self.replace_extension {
            input.with_extension("")
        } else {
            input.to_path_buf()
        };

        let mut name = stem.into_os_string();
        name.push(&self.suffix);
        let output = PathBuf::from(name);

        match (&self.out_dir, output.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => output,
        }
    }
}

/// Convert a single file into the .af format. The output file is only created once the input
/// has been decoded, so a malformed input never leaves a partial output behind.
pub fn convert_file(input: &Path, output: &Path, format: Format) -> Result<Airfoil> {
    let airfoil = Airfoil::load_file(input, format)?;
    fs::write(output, airfoil.to_string())?;
    info!(
        input = %input.display(),
        output = %output.display(),
        %format,
        upper = airfoil.num_upper_surface_points(),
        lower = airfoil.num_lower_surface_points(),
        "converted airfoil"
    );

    Ok(airfoil)
}

/// The outcome of a batch conversion
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Pairs of (input, output) that converted successfully, in list order
    pub converted: Vec<(PathBuf, PathBuf)>,

    /// Inputs that failed along with the error, in list order
    pub failed: Vec<(PathBuf, AirfoilError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert every file in list order. A failing file does not stop the batch: its error is logged
/// and recorded in the report and the remaining files are still converted.
pub fn convert_files<P: AsRef<Path>>(
    inputs: &[P],
    format: Format,
    naming: &OutputNaming,
) -> BatchReport {
    let mut report = BatchReport::default();
    for input in inputs.iter().map(|p| p.as_ref()) {
        let output = naming.output_path(input);
        match convert_file(input, &output, format) {
            Ok(_) => report.converted.push((input.to_path_buf(), output)),
            Err(e) => {
                error!(input = %input.display(), "conversion failed: {}", e);
                report.failed.push((input.to_path_buf(), e));
            }
        }
    }

    report
}
