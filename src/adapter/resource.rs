//! Banner resources on the local filesystem.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use url::Url;

use crate::port::{Resource, ResourceLoader};

const CLASSPATH_PREFIX: &str = "classpath:";
const FILE_PREFIX: &str = "file:";

/// Resolves banner locations against a base directory.
///
/// Accepted forms:
///
/// - `banner.txt`, `art/logo.png` - relative to the base directory
/// - `classpath:banner.txt` - relative to the base directory, leading `/` ignored
/// - `file:/etc/app/banner.txt` or `file:///etc/app/banner.txt` - as given
#[derive(Debug, Clone)]
pub struct FileSystemResourceLoader {
    base_dir: PathBuf,
}

impl FileSystemResourceLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        if let Some(path) = location.strip_prefix(CLASSPATH_PREFIX) {
            return self.base_dir.join(path.trim_start_matches('/'));
        }

        if location.starts_with("file://") {
            if let Some(path) = Url::parse(location)
                .ok()
                .and_then(|url| url.to_file_path().ok())
            {
                return path;
            }
        }

        let path = Path::new(location.strip_prefix(FILE_PREFIX).unwrap_or(location));
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl Default for FileSystemResourceLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ResourceLoader for FileSystemResourceLoader {
    fn resource(&self, location: &str) -> Arc<dyn Resource> {
        Arc::new(FileResource::new(self.resolve(location)))
    }
}

/// A file that may or may not exist.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Resource for FileResource {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(BufReader::new(File::open(&self.path)?)))
    }

    fn url(&self) -> io::Result<String> {
        let absolute = self.path.canonicalize()?;
        Url::from_file_path(&absolute)
            .map(String::from)
            .map_err(|()| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("cannot express {} as a URL", absolute.display()),
                )
            })
    }

    fn description(&self) -> String {
        format!("file [{}]", self.path.display())
    }
}
