use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A destination for collecting and writing generated C++ code.
///
/// `Destination` accumulates the generated lines in order and writes them to a file in
/// one step. It is the final step of the pipeline, the explicit sink every stage appends to.
///
/// # Usage
///
/// `Destination` is typically used as the target of a `collect()` operation on an iterator
/// of generated lines:
///
/// ```rust
/// use asbindgen::collect::Destination;
///
/// let destination: Destination = ["// first", "// second"]
///     .into_iter()
///     .map(String::from)
///     .collect();
/// assert_eq!(destination.to_string(), "// first\n// second\n");
/// ```
///
/// # File Writing
///
/// [`write`](Self::write) renders the whole buffer into a temporary file next to the target
/// and renames it into place, so the target never holds a partially written file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destination {
    lines: Vec<String>,
}

impl FromIterator<String> for Destination {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for Destination {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.lines.extend(iter);
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl Destination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line
    pub fn push<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    /// Append a multi-line block, split on line breaks
    pub fn push_block(&mut self, block: &str) {
        self.lines.extend(block.lines().map(str::to_string));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Writes the collected lines to `filename` and returns its path.
    ///
    /// Relative paths are resolved against the current directory. The content goes to a
    /// temporary file in the same directory first and is then renamed over the target, so
    /// either the complete output or nothing is found at `filename`. An existing target keeps
    /// its permissions; a new one gets the same mode `fs::write` would give it.
    pub fn write<P: AsRef<Path>>(&self, filename: P) -> Result<PathBuf> {
        let file_path = filename.as_ref().to_path_buf();
        let write_error = |source| Error::Write {
            path: file_path.clone(),
            source,
        };

        let dir = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Same mode as a plain `fs::write`, the umask is applied on creation
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(&dir).map_err(write_error)?;
        tmp.write_all(self.to_string().as_bytes())
            .map_err(write_error)?;
        tmp.flush().map_err(write_error)?;
        // A replaced file keeps its permissions
        if let Ok(metadata) = fs::metadata(&file_path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(write_error)?;
        }
        tmp.persist(&file_path)
            .map_err(|e| write_error(e.error))?;

        tracing::info!(
            "Generated {} lines written to: {}",
            self.lines.len(),
            file_path.display()
        );
        Ok(file_path)
    }
}
