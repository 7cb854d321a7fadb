//! Save/Load functionality for space programs.
//!
//! Programs are stored as pretty-printed JSON documents whose fields map
//! one-to-one onto [`SpaceProgram`]. Missing fields take the program
//! defaults, unknown fields are rejected, and every loaded program is
//! validated before it is handed back.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spaceplan_logic::{SpaceError, SpaceProgram};
use thiserror::Error;

/// Errors that can occur during save/load
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid program: {0}")]
    Invalid(#[from] SpaceError),

    #[error("no saved program at {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a plain file name: {0:?}")]
    InvalidFilename(String),
}

/// Serialize a program as a pretty-printed JSON document.
pub fn to_json_string(program: &SpaceProgram) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(program)?)
}

/// Parse and validate a program document.
pub fn from_json_str(s: &str) -> Result<SpaceProgram, PersistenceError> {
    let program: SpaceProgram = serde_json::from_str(s)?;
    program.validate()?;
    Ok(program)
}

/// Save a program to a writer
pub fn save_program<W: Write>(
    mut writer: W,
    program: &SpaceProgram,
) -> Result<(), PersistenceError> {
    serde_json::to_writer_pretty(&mut writer, program)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Load a program from a reader
pub fn load_program<R: Read>(reader: R) -> Result<SpaceProgram, PersistenceError> {
    let program: SpaceProgram = serde_json::from_reader(reader)?;
    program.validate()?;
    Ok(program)
}

pub fn save_to_path(
    path: impl AsRef<Path>,
    program: &SpaceProgram,
) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let file = fs::File::create(path)?;
    save_program(std::io::BufWriter::new(file), program)?;
    tracing::info!(path = %path.display(), company = %program.company_name, "program saved");
    Ok(())
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<SpaceProgram, PersistenceError> {
    let path = path.as_ref();
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PersistenceError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    let program = load_program(std::io::BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        departments = program.departments.len(),
        "program loaded"
    );
    Ok(program)
}

/// Filename-safe form of a company name: non-alphanumerics become `_`.
pub fn safe_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Listing entry for a saved program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub filename: String,
    pub company_name: String,
    pub location: String,
    pub date_created: String,
}

/// A directory of saved program documents.
#[derive(Debug, Clone)]
pub struct ProgramStore {
    dir: PathBuf,
}

impl ProgramStore {
    /// Open a store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of `filename` inside the store. Only bare file names are
    /// accepted, so `..`, separators and absolute paths are rejected.
    pub fn path_for(&self, filename: &str) -> Result<PathBuf, PersistenceError> {
        match Path::new(filename).file_name() {
            Some(name) if name == filename => Ok(self.dir.join(filename)),
            _ => Err(PersistenceError::InvalidFilename(filename.to_string())),
        }
    }

    /// Save a program; without a filename one is derived from the company
    /// name and the current time.
    pub fn save(
        &self,
        program: &SpaceProgram,
        filename: Option<&str>,
    ) -> Result<PathBuf, PersistenceError> {
        let filename = match filename {
            Some(name) => name.to_string(),
            None => format!(
                "{}_{}.json",
                safe_file_stem(&program.company_name),
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            ),
        };
        let path = self.path_for(&filename)?;
        save_to_path(&path, program)?;
        Ok(path)
    }

    pub fn load(&self, filename: &str) -> Result<SpaceProgram, PersistenceError> {
        load_from_path(self.path_for(filename)?)
    }

    /// Summaries of every readable `.json` program, sorted by filename.
    ///
    /// Files that fail to parse are skipped.
    pub fn list(&self) -> Result<Vec<ProgramSummary>, PersistenceError> {
        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match load_from_path(&path) {
                Ok(program) => summaries.push(ProgramSummary {
                    filename: filename.to_string(),
                    company_name: program.company_name,
                    location: program.location,
                    date_created: program.date_created,
                }),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping unreadable program"
                    )
                }
            }
        }
        summaries.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(summaries)
    }
}
