//! IDL output files

use crate::error::{HarvestError, HarvestResult};
use crate::idl::IdlDocument;
use std::fs;
use std::path::PathBuf;

/// Suffix appended to the program ID to form the output file name
pub const IDL_FILE_SUFFIX: &str = "_idl.json";

/// Output file name for a program: `<program_id>_idl.json`
pub fn idl_file_name(program_id: &str) -> String {
    format!("{}{}", program_id, IDL_FILE_SUFFIX)
}

/// Writes fetched IDLs into a directory, one file per program.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, program_id: &str) -> PathBuf {
        self.dir.join(idl_file_name(program_id))
    }

    /// Write the IDL as pretty-printed JSON, replacing any existing file.
    pub fn write(&self, program_id: &str, idl: &IdlDocument) -> HarvestResult<PathBuf> {
        let path = self.path_for(program_id);
        let contents = idl.to_pretty_json()?;

        fs::write(&path, contents).map_err(|source| HarvestError::WriteError {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
