/// Widgets and windows that do more than lay out stock iced widgets
pub mod console;
pub mod popup;
pub mod zoom_surface;

pub use console::Console;
pub use popup::BrightnessPopup;
pub use zoom_surface::ZoomSurface;
