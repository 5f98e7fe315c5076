//! Flat directory of screenshot files

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Extension every listed screenshot carries
pub const SCREENSHOT_EXTENSION: &str = ".png";

/// Errors raised by the screenshot directory
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("'{0}' does not exist")]
    NotFound(String),

    #[error("A file named '{0}' already exists")]
    AlreadyExists(String),

    #[error("'{0}' is not a plain file name")]
    InvalidName(String),

    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode '{name}': {source}")]
    Encode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// Accessor for the single flat directory screenshots are saved to.
///
/// Names passed to this type are bare file names, never paths.
#[derive(Debug, Clone)]
pub struct ScreenshotStore {
    dir: PathBuf,
}

impl ScreenshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory backing this store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory if it does not exist yet
    pub fn ensure_exists(&self) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            name: self.dir.display().to_string(),
            source,
        })
    }

    /// Full path of a file in the directory. Only bare names resolve.
    pub fn path_of(&self, name: &str) -> Result<PathBuf, StorageError> {
        if !is_bare_name(name) {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_ok_and(|path| path.exists())
    }

    /// Names of all regular `.png` files in the directory, unordered
    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        let read_dir = std::fs::read_dir(&self.dir).map_err(|source| StorageError::ReadDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| StorageError::ReadDir {
                path: self.dir.clone(),
                source,
            })?;

            if !entry.path().is_file() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) if name.ends_with(SCREENSHOT_EXTENSION) => names.push(name),
                Ok(_) => {}
                Err(raw) => debug!("Skipping non UTF-8 file name {:?}", raw),
            }
        }

        Ok(names)
    }

    /// Decode an image file
    pub fn load(&self, name: &str) -> Result<DynamicImage, StorageError> {
        let path = self.path_of(name)?;
        if !path.is_file() {
            return Err(StorageError::NotFound(name.to_string()));
        }

        image::open(&path).map_err(|source| StorageError::Decode {
            name: name.to_string(),
            source,
        })
    }

    /// Rename `old` to `new`. Never overwrites an existing file.
    pub fn rename(&self, old: &str, new: &str) -> Result<(), StorageError> {
        let from = self.path_of(old)?;
        let to = self.path_of(new)?;
        if !from.exists() {
            return Err(StorageError::NotFound(old.to_string()));
        }
        if to.exists() {
            return Err(StorageError::AlreadyExists(new.to_string()));
        }

        std::fs::rename(from, to).map_err(|source| StorageError::Io {
            name: old.to_string(),
            source,
        })
    }

    pub fn remove(&self, name: &str) -> Result<(), StorageError> {
        std::fs::remove_file(self.path_of(name)?).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StorageError::NotFound(name.to_string())
            } else {
                StorageError::Io {
                    name: name.to_string(),
                    source,
                }
            }
        })
    }

    /// Encode `image` as PNG and move it into place under `name`.
    ///
    /// The data goes to a hidden `.part` file first, so a failed write
    /// never leaves a truncated `.png` behind.
    pub fn write_png(&self, name: &str, image: &RgbaImage) -> Result<(), StorageError> {
        let target = self.path_of(name)?;
        if target.exists() {
            return Err(StorageError::AlreadyExists(name.to_string()));
        }

        let mut encoded = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .map_err(|source| StorageError::Encode {
                name: name.to_string(),
                source,
            })?;

        let partial = self.dir.join(format!(".{}.part", name));
        let result = std::fs::write(&partial, &encoded)
            .and_then(|_| std::fs::rename(&partial, &target));

        if let Err(source) = result {
            let _ = std::fs::remove_file(&partial);
            return Err(StorageError::Io {
                name: name.to_string(),
                source,
            });
        }

        Ok(())
    }
}

/// A name that stays inside a flat directory: no separators, not `.` or `..`
pub fn is_bare_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    fn solid(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn test_list_only_png_files() {
        let dir = tempdir().unwrap();
        let store = ScreenshotStore::new(dir.path());

        std::fs::write(dir.path().join("a.png"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("upper.PNG"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();

        let names = store.list().unwrap();
        assert_eq!(names, vec!["a.png".to_string()]);
    }

    #[test]
    fn test_list_missing_directory() {
        let dir = tempdir().unwrap();
        let store = ScreenshotStore::new(dir.path().join("missing"));

        assert!(matches!(store.list(), Err(StorageError::ReadDir { .. })));
    }

    #[test]
    fn test_write_and_load_png() {
        let dir = tempdir().unwrap();
        let store = ScreenshotStore::new(dir.path());

        store.write_png("shot.png", &solid(4, 3)).unwrap();

        let loaded = store.load("shot.png").unwrap();
        assert_eq!((loaded.width(), loaded.height()), (4, 3));
        // No leftover temporary file
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let store = ScreenshotStore::new(dir.path());

        store.write_png("shot.png", &solid(2, 2)).unwrap();
        let result = store.write_png("shot.png", &solid(8, 8));

        assert!(matches!(result, Err(StorageError::AlreadyExists(_))));
        assert_eq!(store.load("shot.png").unwrap().width(), 2);
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempdir().unwrap();
        let store = ScreenshotStore::new(dir.path());
        std::fs::write(dir.path().join("broken.png"), b"not an image").unwrap();

        assert!(matches!(store.load("broken.png"), Err(StorageError::Decode { .. })));
        assert!(matches!(store.load("absent.png"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_rename_rules() {
        let dir = tempdir().unwrap();
        let store = ScreenshotStore::new(dir.path());
        std::fs::write(dir.path().join("a.png"), b"a").unwrap();
        std::fs::write(dir.path().join("b.png"), b"b").unwrap();

        assert!(matches!(store.rename("a.png", "b.png"), Err(StorageError::AlreadyExists(_))));
        assert!(matches!(store.rename("zzz.png", "c.png"), Err(StorageError::NotFound(_))));

        store.rename("a.png", "c.png").unwrap();
        assert!(!store.exists("a.png"));
        assert_eq!(std::fs::read(dir.path().join("c.png")).unwrap(), b"a");
        assert_eq!(std::fs::read(dir.path().join("b.png")).unwrap(), b"b");
    }

    #[test]
    fn test_remove_missing_file() {
        let dir = tempdir().unwrap();
        let store = ScreenshotStore::new(dir.path());

        assert!(matches!(store.remove("gone.png"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_names_must_stay_in_directory() {
        let root = tempdir().unwrap();
        let inner = root.path().join("shots");
        let store = ScreenshotStore::new(&inner);
        store.ensure_exists().unwrap();
        std::fs::write(root.path().join("outside.png"), b"keep").unwrap();
        std::fs::write(inner.join("inside.png"), b"in").unwrap();

        for bad in ["../outside.png", "..", ".", "", "a/b.png", "a\\b.png"] {
            assert!(matches!(store.remove(bad), Err(StorageError::InvalidName(_))), "{:?}", bad);
            assert!(!store.exists(bad), "{:?}", bad);
        }
        assert!(matches!(
            store.rename("../outside.png", "pulled.png"),
            Err(StorageError::InvalidName(_))
        ));
        assert!(matches!(
            store.rename("inside.png", "../escaped.png"),
            Err(StorageError::InvalidName(_))
        ));
        assert!(matches!(store.load("../outside.png"), Err(StorageError::InvalidName(_))));
        assert!(matches!(
            store.write_png("../written.png", &solid(1, 1)),
            Err(StorageError::InvalidName(_))
        ));

        assert_eq!(std::fs::read(root.path().join("outside.png")).unwrap(), b"keep");
        assert!(inner.join("inside.png").is_file());
        assert!(!root.path().join("escaped.png").exists());
        assert!(!root.path().join("written.png").exists());
    }

    #[test]
    fn test_bare_names() {
        assert!(is_bare_name("ss_01012024_120000.png"));
        assert!(is_bare_name(".hidden.png"));
        assert!(!is_bare_name(".."));
        assert!(!is_bare_name("dir/file.png"));
        assert!(!is_bare_name("dir\\file.png"));
    }

    #[test]
    fn test_ensure_exists_creates_nested_dirs() {
        let dir = tempdir().unwrap();
        let store = ScreenshotStore::new(dir.path().join("a").join("b"));

        store.ensure_exists().unwrap();
        assert!(store.dir().is_dir());
        assert!(store.list().unwrap().is_empty());
    }
}
