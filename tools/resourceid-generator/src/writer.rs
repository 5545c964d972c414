//! Writing generated files into a package and formatting them.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use armid_codegen::GeneratedFile;
use tracing::{debug, warn};

/// Removes the temporary file on drop unless the write was committed.
struct TempFile {
    path: PathBuf,
    committed: bool,
}

impl TempFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            committed: false,
        }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.committed {
            if let Err(err) = fs::remove_file(&self.path) {
                if err.kind() != ErrorKind::NotFound {
                    warn!(path = %self.path.display(), error = %err, "failed to remove temporary file");
                }
            }
        }
    }
}

/// `dir/.name.tmp` for `dir/name`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes `contents` to a sibling temporary file and renames it over `path`,
/// so readers never observe a partially written file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let mut temp = TempFile::new(temp_path(path));

    let file = File::create(&temp.path)
        .with_context(|| format!("failed to create file: {}", temp.path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .with_context(|| format!("failed to write file: {}", temp.path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush file: {}", temp.path.display()))?;
    drop(writer);

    fs::rename(&temp.path, path)
        .with_context(|| format!("failed to replace file: {}", path.display()))?;
    temp.committed = true;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Writes every file under `root` and returns the paths written, in order.
pub fn write_files(root: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    files
        .iter()
        .map(|file| {
            let path = root.join(&file.path);
            write_atomic(&path, &file.contents)?;
            Ok(path)
        })
        .collect()
}

/// Formats generated files with an external `rustfmt`.
#[derive(Debug, Clone)]
pub struct Rustfmt {
    program: String,
}

impl Rustfmt {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Formats `paths` in a single invocation.
    ///
    /// A missing `rustfmt` is not an error: the files are already valid and
    /// deterministic, just not pretty.
    pub fn format(&self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let output = match Command::new(&self.program)
            .args(["--edition", "2021"])
            .args(paths)
            .output()
        {
            Ok(output) => output,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    program = %self.program,
                    "rustfmt not found, leaving generated files unformatted"
                );
                return Ok(());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to run {}", self.program));
            }
        };

        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        debug!(files = paths.len(), "formatted generated files");
        Ok(())
    }
}
