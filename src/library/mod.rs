//! Screenshot Library
//!
//! Keeps the in-memory listing of the screenshot directory, the selected
//! entry and its rendered preview consistent with each other and with
//! the files on disk. Every mutating operation finishes with a refresh,
//! and a refresh drops a selection whose file is gone.
//!
//! The library is owned by the UI thread; nothing here is shared.

pub mod entry;
pub mod error;
pub mod preview;

pub use entry::ScreenshotEntry;
pub use error::LibraryError;
pub use preview::{PreviewImage, Viewport};

use std::path::Path;
use tracing::{info, warn};

use crate::capture::CaptureSource;
use crate::storage::{is_bare_name, ScreenshotStore, SCREENSHOT_EXTENSION};

/// Upper bound on `_n` suffixes tried for captures within one second
const MAX_CAPTURES_PER_SECOND: u32 = 1000;

/// File list and preview coordinator
pub struct ScreenshotLibrary {
    store: ScreenshotStore,
    source: Box<dyn CaptureSource>,
    entries: Vec<ScreenshotEntry>,
    selected: Option<String>,
    preview: Option<PreviewImage>,
    /// Bumped whenever `preview` changes
    preview_generation: u64,
    viewport: Viewport,
    status: String,
}

impl ScreenshotLibrary {
    /// Create an empty library. Call [`refresh`](Self::refresh) to populate it.
    pub fn new(store: ScreenshotStore, source: Box<dyn CaptureSource>) -> Self {
        Self {
            store,
            source,
            entries: Vec::new(),
            selected: None,
            preview: None,
            preview_generation: 0,
            viewport: Viewport::DEFAULT,
            status: "Ready".to_string(),
        }
    }

    /// Current listing, newest first
    pub fn entries(&self) -> &[ScreenshotEntry] {
        &self.entries
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name() == name)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn preview(&self) -> Option<&PreviewImage> {
        self.preview.as_ref()
    }

    pub fn preview_generation(&self) -> u64 {
        self.preview_generation
    }

    /// Human-readable outcome of the last operation
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn directory(&self) -> &Path {
        self.store.dir()
    }

    /// Record the size of the preview area used for the next render.
    /// Sizes that are not laid out yet are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if viewport.is_usable() {
            self.viewport = viewport;
        }
    }

    /// Re-read the directory and replace the listing.
    ///
    /// On failure the previous listing is kept.
    pub fn refresh(&mut self) -> Result<&[ScreenshotEntry], LibraryError> {
        let names = match self.store.list() {
            Ok(names) => names,
            Err(e) => return Err(self.fail(e.into())),
        };

        let mut entries: Vec<ScreenshotEntry> = names.into_iter().map(ScreenshotEntry::new).collect();
        entry::sort_newest_first(&mut entries);
        self.entries = entries;

        let selection_gone = self
            .selected
            .as_deref()
            .is_some_and(|name| !self.contains(name));
        if selection_gone {
            self.clear_selection();
        }

        self.status = format!("Found {} screenshot(s)", self.entries.len());
        Ok(&self.entries)
    }

    /// Select a listed entry and render its preview.
    ///
    /// On failure the previous selection and preview stay as they were.
    pub fn select_by_name(&mut self, name: &str) -> Result<&PreviewImage, LibraryError> {
        if !self.contains(name) {
            return Err(self.fail(LibraryError::NotFound(name.to_string())));
        }

        let image = match self.store.load(name) {
            Ok(image) => image,
            Err(e) => return Err(self.fail(e.into())),
        };

        let preview = preview::render_preview(name, &image, self.viewport);
        self.selected = Some(name.to_string());
        self.preview_generation += 1;
        self.status = format!("Viewing: {}", name);

        Ok(&*self.preview.insert(preview))
    }

    pub fn clear_selection(&mut self) {
        let had_selection = self.selected.take().is_some();
        let had_preview = self.preview.take().is_some();
        if had_selection || had_preview {
            self.preview_generation += 1;
        }
    }

    /// Rename `old` to `new` (extension appended when missing), then
    /// refresh and select the renamed entry. Returns the final name.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<String, LibraryError> {
        let new_name = match normalize_file_name(new) {
            Ok(name) => name,
            Err(e) => return Err(self.fail(e)),
        };

        if let Err(e) = self.store.rename(old, &new_name) {
            return Err(self.fail(e.into()));
        }
        info!("Renamed {} to {}", old, new_name);

        self.refresh()?;
        self.select_by_name(&new_name)?;
        self.status = format!("Renamed to: {}", new_name);

        Ok(new_name)
    }

    /// Delete a file the user has already confirmed, then refresh.
    ///
    /// A file that is already gone yields `NotFound` and leaves the
    /// listing untouched.
    pub fn delete(&mut self, name: &str) -> Result<(), LibraryError> {
        if let Err(e) = self.store.remove(name) {
            return Err(self.fail(e.into()));
        }
        info!("Deleted {}", name);

        if self.selected.as_deref() == Some(name) {
            self.clear_selection();
        }

        self.refresh()?;
        self.status = format!("Deleted: {}", name);

        Ok(())
    }

    /// Grab the screen, save it as `ss_<DDMMYYYY>_<HHMMSS>.png`, then
    /// refresh and select the new file. Returns the file name.
    pub fn capture(&mut self) -> Result<String, LibraryError> {
        let frame = match self.source.grab() {
            Ok(frame) => frame,
            Err(e) => return Err(self.fail(LibraryError::Capture(e.to_string()))),
        };

        let moment = frame.captured_at.naive_local();
        let free_name = (1..=MAX_CAPTURES_PER_SECOND)
            .map(|sequence| entry::capture_file_name(&moment, sequence))
            .find(|name| !self.store.exists(name));
        let name = match free_name {
            Some(name) => name,
            None => {
                return Err(self.fail(LibraryError::Capture(
                    "too many captures within one second".to_string(),
                )))
            }
        };

        if let Err(e) = self.store.write_png(&name, &frame.image) {
            return Err(self.fail(LibraryError::Capture(e.to_string())));
        }
        let (width, height) = frame.dimensions();
        info!("Saved {} ({}x{})", name, width, height);

        self.refresh()?;
        self.select_by_name(&name)?;
        self.status = format!("Screenshot saved: {}", name);

        Ok(name)
    }

    /// Record a failure in the status line and hand the error back
    fn fail(&mut self, err: LibraryError) -> LibraryError {
        warn!("{}", err);
        self.status = err.to_string();
        err
    }
}

/// Trim user input and append the screenshot extension when missing.
///
/// Names must stay inside the flat screenshot directory.
pub fn normalize_file_name(input: &str) -> Result<String, LibraryError> {
    let trimmed = input.trim();

    if !is_bare_name(trimmed) || trimmed == SCREENSHOT_EXTENSION {
        return Err(LibraryError::InvalidName(input.to_string()));
    }

    if trimmed.ends_with(SCREENSHOT_EXTENSION) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{}{}", trimmed, SCREENSHOT_EXTENSION))
    }
}
