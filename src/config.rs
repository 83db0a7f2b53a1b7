//! Application configuration
//!
//! Everything here is fixed at build time. The viewer keeps no config file
//! and reads no environment variables (the logger aside).

/// Main window title
pub const WINDOW_TITLE: &str = "CEVILOG image viewer";

/// Main window geometry: (x, y) position and (width, height) size
pub const WINDOW_POSITION: (f32, f32) = (500.0, 200.0);
pub const WINDOW_SIZE: (f32, f32) = (1200.0, 640.0);

/// Size of the bordered image label
pub const LABEL_WIDTH: u32 = 640;
pub const LABEL_HEIGHT: u32 = 480;

/// The label frame eats into the horizontal space available to the bitmap
pub const LABEL_FRAME: u32 = 6;

/// Brightness delta applied by the Inspect button
pub const BRIGHTNESS_DELTA: u8 = 50;

/// Title of the brightness popup window
pub const POPUP_TITLE: &str = "brightness_change";

/// Title of the blocking message dialog
pub const DIALOG_TITLE: &str = "Image Viewer";

/// Longest edge, in logical pixels, a zoomed bitmap is rendered at
pub const MAX_RENDER_EDGE: f32 = 16384.0;

/// Number of lines kept in the console area
pub const CONSOLE_CAPACITY: usize = 500;

/// Which flavour of the viewer is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Browse, next and inspect only
    Basic,
    /// Adds the model loader, the console area and wheel zoom
    Detection,
}

impl Variant {
    pub fn has_model_loader(self) -> bool {
        self == Variant::Detection
    }

    pub fn has_zoom(self) -> bool {
        self == Variant::Detection
    }

    /// Caption above the model combo box
    pub fn model_label(self) -> &'static str {
        match self {
            Variant::Basic => "Model Loaded",
            Variant::Detection => "Detection model :",
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        if cfg!(feature = "detection") {
            Variant::Detection
        } else {
            Variant::Basic
        }
    }
}

/// A detection model offered in the combo box, with the external program
/// that runs its inference entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
}

impl ModelSpec {
    pub fn new(name: &str, program: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

/// Runtime view of the configuration
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub variant: Variant,
    pub brightness_delta: u8,
    /// Area the bitmap is fitted into: (width, height)
    pub fit_area: (u32, u32),
    pub models: Vec<ModelSpec>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            brightness_delta: BRIGHTNESS_DELTA,
            fit_area: (LABEL_WIDTH - LABEL_FRAME, LABEL_HEIGHT),
            models: vec![ModelSpec::new(
                "YOLOv7_TireDetection",
                "python3",
                &["-m", "yolov7.seg.segment.predict"],
            )],
        }
    }
}

impl ViewerConfig {
    pub fn model_names(&self) -> Vec<String> {
        self.models.iter().map(|model| model.name.clone()).collect()
    }

    pub fn model(&self, name: &str) -> Option<&ModelSpec> {
        self.models.iter().find(|model| model.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_fits_inside_label_frame() {
        let config = ViewerConfig::default();
        assert_eq!(config.fit_area, (634, 480));
        assert_eq!(config.brightness_delta, 50);
    }

    #[test]
    fn model_caption_depends_on_variant() {
        assert_eq!(Variant::Basic.model_label(), "Model Loaded");
        assert_eq!(Variant::Detection.model_label(), "Detection model :");
    }

    #[test]
    fn default_model_is_tire_detection() {
        let config = ViewerConfig::default();
        assert_eq!(config.model_names(), vec!["YOLOv7_TireDetection".to_string()]);

        let model = config.model("YOLOv7_TireDetection").unwrap();
        assert_eq!(model.program, "python3");
        assert_eq!(model.args, vec!["-m", "yolov7.seg.segment.predict"]);
        assert!(config.model("missing").is_none());
    }

    #[test]
    fn only_detection_variant_has_model_tools() {
        assert!(Variant::Detection.has_model_loader());
        assert!(Variant::Detection.has_zoom());
        assert!(!Variant::Basic.has_model_loader());
        assert!(!Variant::Basic.has_zoom());
    }
}
