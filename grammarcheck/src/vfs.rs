//! Minimal filesystem abstraction for loading lexicon resources.
//!
//! The WordNet loader only needs to open a file by path and read it to the
//! end. Keeping that behind a trait lets tests serve a dictionary from memory.

use std::fmt::Debug;
use std::io::{Read, Result};
use std::path::Path;

pub trait Filesystem {
    type File: File;

    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File>;

    fn read_to_string<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let mut file = self.open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        Ok(buf)
    }
}

pub trait File: Read + Debug {}

impl File for std::fs::File {}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fs;

impl Filesystem for Fs {
    type File = std::fs::File;

    #[inline(always)]
    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File> {
        std::fs::File::open(path)
    }
}

pub mod memory {
    use hashbrown::HashMap;
    use std::io::{Cursor, Read, Result};
    use std::path::{Path, PathBuf};

    #[derive(Debug)]
    pub struct File(Cursor<Vec<u8>>);

    impl Read for File {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
            self.0.read(buf)
        }
    }

    impl super::File for File {}

    /// A filesystem backed by a map of paths to file contents.
    #[derive(Debug, Clone, Default)]
    pub struct Filesystem {
        files: HashMap<PathBuf, Vec<u8>>,
    }

    impl Filesystem {
        pub fn new() -> Filesystem {
            Filesystem::default()
        }

        pub fn insert<P: Into<PathBuf>, C: Into<Vec<u8>>>(&mut self, path: P, contents: C) {
            self.files.insert(path.into(), contents.into());
        }

        pub fn with_file<P: Into<PathBuf>, C: Into<Vec<u8>>>(mut self, path: P, contents: C) -> Self {
            self.insert(path, contents);
            self
        }
    }

    impl super::Filesystem for Filesystem {
        type File = File;

        fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File> {
            match self.files.get(path.as_ref()) {
                Some(v) => Ok(File(Cursor::new(v.clone()))),
                None => Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "not found",
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_roundtrip() {
        let fs = memory::Filesystem::new().with_file("dict/index.noun", "apple n 1 0 1 0 00001\n");
        let text = fs.read_to_string("dict/index.noun").unwrap();
        assert_eq!(text, "apple n 1 0 1 0 00001\n");
    }

    #[test]
    fn memory_missing_file() {
        let fs = memory::Filesystem::new();
        let err = fs.open("dict/index.verb").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
