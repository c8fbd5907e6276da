/*!
# Source Files

Loads a JSON document from disk into an in-memory byte buffer for the
[`tokenizer`](crate::tokenizer).

The path is resolved to an absolute path. Non-empty regular files are
memory-mapped read-only; anything else (pipes, devices, procfs entries that
report a size of 0) is read into a buffer. Inputs over [`MAX_SOURCE_SIZE`]
are rejected either way.
*/
use memmap2::Mmap;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Largest accepted source file, 1 GiB.
pub const MAX_SOURCE_SIZE: u64 = 1 << 30;

/// Represents errors that can occur while loading a source file.
#[derive(Debug)]
pub enum SourceError {
    /// The path could not be resolved to an absolute path.
    Resolve(PathBuf, io::Error),
    /// The file could not be opened or inspected.
    Metadata(PathBuf, io::Error),
    /// The file exceeds the size limit.
    TooLarge {
        /// Resolved path of the file
        path: PathBuf,
        /// Size of the file in bytes
        size: u64,
        /// Limit in bytes
        limit: u64,
    },
    /// The file could not be mapped into memory.
    Map(PathBuf, io::Error),
    /// The file could not be read.
    Read(PathBuf, io::Error),
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolve(_, err)
            | Self::Metadata(_, err)
            | Self::Map(_, err)
            | Self::Read(_, err) => Some(err),
            Self::TooLarge { .. } => None,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve(path, _) => {
                write!(f, "Failed to resolve path {}", path.display())
            }
            Self::Metadata(path, _) => {
                write!(f, "Failed to open file {}", path.display())
            }
            Self::TooLarge { path, size, limit } => write!(
                f,
                "File {} is too large ({size} bytes, limit is {limit} bytes)",
                path.display()
            ),
            Self::Map(path, _) => {
                write!(f, "Failed to map file {}", path.display())
            }
            Self::Read(path, _) => {
                write!(f, "Failed to read file {}", path.display())
            }
        }
    }
}

/// Backing storage of a [`SourceFile`].
#[derive(Debug)]
enum Contents {
    Mapped(Mmap),
    /// Files whose metadata size cannot be trusted, and empty files, which
    /// cannot be mapped on every platform.
    Buffered(Vec<u8>),
}

/// A read-only source buffer together with its resolved path.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    contents: Contents,
}

impl SourceFile {
    /// Opens the file at `path`, accepting up to [`MAX_SOURCE_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the path cannot be resolved, the file
    /// cannot be opened, mapped or read, or it is too large.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Self::open_with_limit(path, MAX_SOURCE_SIZE)
    }

    /// Opens the file at `path`, accepting up to `limit` bytes.
    ///
    /// # Errors
    ///
    /// See [`SourceFile::open`].
    pub fn open_with_limit(
        path: impl AsRef<Path>,
        limit: u64,
    ) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let path = path
            .canonicalize()
            .map_err(|err| SourceError::Resolve(path.to_path_buf(), err))?;

        let file = File::open(&path)
            .map_err(|err| SourceError::Metadata(path.clone(), err))?;
        let metadata = file
            .metadata()
            .map_err(|err| SourceError::Metadata(path.clone(), err))?;
        let size = metadata.len();
        if size > limit {
            return Err(SourceError::TooLarge { path, size, limit });
        }

        let contents = if metadata.is_file() && size > 0 {
            log::debug!("mapping {} ({size} bytes)", path.display());
            // SAFETY: the map is read-only and only ever viewed as bytes. A
            // concurrent external truncation is outside our control.
            let map = unsafe { Mmap::map(&file) }
                .map_err(|err| SourceError::Map(path.clone(), err))?;
            Contents::Mapped(map)
        } else {
            log::debug!("reading {}", path.display());
            let mut buffer = Vec::new();
            file.take(limit.saturating_add(1))
                .read_to_end(&mut buffer)
                .map_err(|err| SourceError::Read(path.clone(), err))?;
            let size = buffer.len() as u64;
            if size > limit {
                return Err(SourceError::TooLarge { path, size, limit });
            }
            Contents::Buffered(buffer)
        };

        Ok(Self { path, contents })
    }

    /// Returns the absolute path the file was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match &self.contents {
            Contents::Mapped(map) => &map[..],
            Contents::Buffered(buffer) => &buffer[..],
        }
    }
}

impl Deref for SourceFile {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents).expect("write temp file");
        file.flush().expect("flush temp file");
        file
    }

    #[test]
    fn reads_contents_and_resolves_path() {
        let file = temp_file(b"[1, 2]");
        let source = SourceFile::open(file.path()).expect("open source");

        assert_eq!(source.bytes(), b"[1, 2]");
        assert_eq!(&*source, b"[1, 2]");
        assert!(source.path().is_absolute());
    }

    #[test]
    fn empty_file_is_empty_buffer() {
        let file = temp_file(b"");
        let source = SourceFile::open(file.path()).expect("open source");
        assert!(source.bytes().is_empty());
    }

    #[test]
    fn rejects_files_over_limit() {
        let file = temp_file(b"0123456789");
        let err = SourceFile::open_with_limit(file.path(), 4)
            .expect_err("file is over the limit");
        assert!(matches!(
            err,
            SourceError::TooLarge { size: 10, limit: 4, .. }
        ));

        // exactly at the limit is accepted
        SourceFile::open_with_limit(file.path(), 10).expect("file fits");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn reads_files_reporting_zero_size() {
        let path = Path::new("/proc/version");
        let size = std::fs::metadata(path).expect("procfs entry").len();
        assert_eq!(size, 0);

        let source = SourceFile::open(path).expect("open procfs entry");
        assert!(source.bytes().starts_with(b"Linux version"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn zero_size_files_still_respect_limit() {
        let err = SourceFile::open_with_limit("/proc/version", 4)
            .expect_err("procfs entry is over the limit");
        assert!(matches!(err, SourceError::TooLarge { size: 5, limit: 4, .. }));
    }

    #[test]
    fn missing_file_fails_to_resolve() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = SourceFile::open(dir.path().join("missing.json"))
            .expect_err("file does not exist");
        assert!(matches!(err, SourceError::Resolve(..)));
        assert!(err.source().is_some());
    }
}
