//! Program ID input file reading
//!
//! The input is a plain text file with one program ID per line. Surrounding
//! whitespace is stripped and blank lines are skipped.

use crate::error::{HarvestError, HarvestResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default input file name, resolved against the working directory
pub const DEFAULT_INPUT_FILE: &str = "programid.txt";

/// Open the input file and return an iterator over its program IDs.
///
/// Failing to open the file is reported as [`HarvestError::InputError`].
pub fn open_program_ids(path: impl AsRef<Path>) -> HarvestResult<ProgramIds<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| HarvestError::InputError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ProgramIds::with_path(BufReader::new(file), path))
}

/// Iterator over trimmed, non-empty lines of a reader.
pub struct ProgramIds<R> {
    lines: std::io::Lines<R>,
    path: PathBuf,
}

impl<R: BufRead> ProgramIds<R> {
    pub fn new(reader: R) -> Self {
        Self::with_path(reader, Path::new("<input>"))
    }

    fn with_path(reader: R, path: &Path) -> Self {
        Self {
            lines: reader.lines(),
            path: path.to_path_buf(),
        }
    }
}

impl<R: BufRead> Iterator for ProgramIds<R> {
    type Item = HarvestResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    let program_id = line.trim();
                    if !program_id.is_empty() {
                        return Some(Ok(program_id.to_string()));
                    }
                }
                Err(source) => {
                    return Some(Err(HarvestError::InputError {
                        path: self.path.clone(),
                        source,
                    }))
                }
            }
        }
    }
}
