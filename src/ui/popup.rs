//! Brightness popup
//! A free-standing window showing one brightened copy of the current image

use iced::widget::{container, image};
use iced::{window, Element, Length, Size};

use crate::config::POPUP_TITLE;
use crate::imaging::{BgrImage, FittedBitmap};
use crate::Message;

#[derive(Debug, Clone)]
pub struct BrightnessPopup {
    pub title: String,
    pub bitmap: FittedBitmap,
}

impl BrightnessPopup {
    /// Shown at the buffer's native size
    pub fn new(result: &BgrImage) -> Self {
        Self {
            title: POPUP_TITLE.to_string(),
            bitmap: FittedBitmap::from_rgba(result.width, result.height, result.to_rgba()),
        }
    }

    pub fn window_settings(&self) -> window::Settings {
        window::Settings {
            size: Size::new(self.bitmap.width as f32, self.bitmap.height as f32),
            ..window::Settings::default()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(image(self.bitmap.handle.clone()))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
