/// State management module
///
/// This module handles all application state, including:
/// - The captured folder listing and current index (browser.rs)
/// - The scale factor applied by wheel zoom (zoom.rs)
/// - The decoded current image (data.rs)
/// - The session that ties them together for the update handlers (session.rs)

pub mod browser;
pub mod data;
pub mod session;
pub mod zoom;

pub use session::Session;
