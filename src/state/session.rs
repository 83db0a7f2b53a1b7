//! Viewer session: the folder being browsed, the image on screen and the zoom.
//!
//! Every operation runs synchronously on the caller's thread. Failures are
//! returned to the update handler, which reports them; the previously shown
//! image stays in place.

use log::info;
use std::path::{Path, PathBuf};

use super::browser::FolderBrowser;
use super::data::LoadedImage;
use super::zoom::{ZoomDirection, ZoomState};
use crate::color;
use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::imaging::{loader, BgrImage};

#[derive(Debug)]
pub struct Session {
    browser: Option<FolderBrowser>,
    current: Option<LoadedImage>,
    zoom: ZoomState,
    fit_area: (u32, u32),
    zoom_enabled: bool,
}

impl Session {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            browser: None,
            current: None,
            zoom: ZoomState::default(),
            fit_area: config.fit_area,
            zoom_enabled: config.variant.has_zoom(),
        }
    }

    /// Capture the listing of `folder`, select its first entry and show it.
    ///
    /// A listing failure (including an empty folder) leaves the session as it
    /// was. A decode failure still switches to the new folder, with the index
    /// on its first entry, but keeps the previous image on screen.
    pub fn open_folder(&mut self, folder: &Path) -> Result<()> {
        let browser = FolderBrowser::scan(folder)?;
        let path = browser.current_path();
        self.browser = Some(browser);
        self.zoom.reset();
        self.show(path)
    }

    /// Advance to the next entry (wrapping) and show it. No-op before a folder is open.
    pub fn next_image(&mut self) -> Result<()> {
        let Some(browser) = self.browser.as_mut() else {
            return Ok(());
        };
        browser.advance();
        let path = browser.current_path();
        self.show(path)
    }

    fn show(&mut self, path: PathBuf) -> Result<()> {
        let loaded = loader::load(&path, self.fit_area)?;
        if let Some(browser) = &self.browser {
            info!(
                "🖼️  Showing {} [{}/{}] ({}x{} on screen)",
                path.display(),
                browser.index() + 1,
                browser.len(),
                loaded.bitmap.width,
                loaded.bitmap.height
            );
        }
        self.current = Some(loaded);
        self.zoom.reset();
        Ok(())
    }

    /// Apply one wheel tick. Ignored when zoom is unavailable or nothing is shown.
    pub fn zoom(&mut self, direction: ZoomDirection) -> bool {
        if !self.zoom_enabled || self.current.is_none() {
            return false;
        }
        let scale = self.zoom.apply(direction);
        info!("🔍 Zoom {:?} -> x{}", direction, scale);
        true
    }

    /// Brightened copy of the current buffer; the buffer itself is not touched
    pub fn brightened(&self, delta: u8) -> Result<BgrImage> {
        let current = self.current.as_ref().ok_or(ViewerError::NoImage)?;
        Ok(color::change_brightness(&current.bgr, delta))
    }

    pub fn browser(&self) -> Option<&FolderBrowser> {
        self.browser.as_ref()
    }

    pub fn folder(&self) -> Option<&Path> {
        self.browser.as_ref().map(FolderBrowser::folder)
    }

    pub fn has_folder(&self) -> bool {
        self.browser.is_some()
    }

    pub fn current(&self) -> Option<&LoadedImage> {
        self.current.as_ref()
    }

    pub fn scale(&self) -> f64 {
        self.zoom.scale()
    }

    /// On-screen size of the current bitmap after zoom
    pub fn render_size(&self) -> Option<(f32, f32)> {
        self.current
            .as_ref()
            .map(|image| self.zoom.render_size(image.bitmap.width, image.bitmap.height))
    }
}
