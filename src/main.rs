use iced::widget::{
    button, canvas, column, container, pick_list, row, stack, text, text_input, Space,
};
use iced::{window, Alignment, Border, Color, ContentFit, Element, Length, Point, Size, Subscription, Task, Theme};
use log::{debug, info, warn};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::collections::BTreeMap;

mod color;
mod config;
mod detection;
mod error;
mod imaging;
mod state;
mod ui;

use config::{ViewerConfig, CONSOLE_CAPACITY, DIALOG_TITLE, LABEL_HEIGHT, LABEL_WIDTH, WINDOW_TITLE};
use error::ViewerError;
use state::zoom::ZoomDirection;
use state::Session;
use ui::{BrightnessPopup, Console, ZoomSurface};

/// Main application state
struct CevilogViewer {
    config: ViewerConfig,
    /// Folder, listing, current image and zoom
    session: Session,
    /// Names shown in the model combo box
    model_names: Vec<String>,
    selected_model: Option<String>,
    console: Console,
    main_window: window::Id,
    /// Brightness windows; the user closes them, nothing else does
    popups: BTreeMap<window::Id, BrightnessPopup>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    WindowOpened(window::Id),
    WindowClosed(window::Id),
    /// User clicked the "Image folder" button
    OpenFolder,
    /// User clicked "Next"
    NextImage,
    /// User clicked "Inspect"
    Inspect,
    ModelSelected(String),
    /// User clicked "Load"
    LoadModel,
    /// Wheel tick over the image label
    Zoom(ZoomDirection),
}

impl CevilogViewer {
    /// Create the application and open the main window
    fn new() -> (Self, Task<Message>) {
        let config = ViewerConfig::default();
        let model_names = config.model_names();
        let selected_model = model_names.first().cloned();

        let (main_window, open) = window::open(window::Settings {
            size: Size::new(config::WINDOW_SIZE.0, config::WINDOW_SIZE.1),
            position: window::Position::Specific(Point::new(
                config::WINDOW_POSITION.0,
                config::WINDOW_POSITION.1,
            )),
            ..window::Settings::default()
        });

        info!("🎨 {} started ({:?} variant)", WINDOW_TITLE, config.variant);

        let mut console = Console::new(CONSOLE_CAPACITY);
        if config.variant.has_model_loader() {
            console.push(format!("{} model(s) available", model_names.len()));
        }

        (
            CevilogViewer {
                session: Session::new(&config),
                config,
                model_names,
                selected_model,
                console,
                main_window,
                popups: BTreeMap::new(),
            },
            open.map(Message::WindowOpened),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowOpened(id) => {
                debug!("Window {:?} opened", id);
                Task::none()
            }
            Message::WindowClosed(id) => {
                if id == self.main_window {
                    info!("Main window closed, exiting");
                    return iced::exit();
                }
                self.popups.remove(&id);
                Task::none()
            }
            Message::OpenFolder => {
                let Some(folder) = FileDialog::new().set_title("Select Folder").pick_folder()
                else {
                    debug!("Folder selection cancelled");
                    return Task::none();
                };

                info!("📁 Opening {}", folder.display());
                if let Err(error) = self.session.open_folder(&folder) {
                    self.report(&error);
                }
                Task::none()
            }
            Message::NextImage => {
                if let Err(error) = self.session.next_image() {
                    self.report(&error);
                }
                Task::none()
            }
            Message::Inspect => match self.session.brightened(self.config.brightness_delta) {
                Ok(result) => {
                    let popup = BrightnessPopup::new(&result);
                    let (id, open) = window::open(popup.window_settings());
                    if let Some(current) = self.session.current() {
                        info!(
                            "Brightness +{} of {} shown in popup {:?}",
                            self.config.brightness_delta,
                            current.path.display(),
                            id
                        );
                    }
                    self.popups.insert(id, popup);
                    open.map(Message::WindowOpened)
                }
                Err(error) => {
                    self.report(&error);
                    Task::none()
                }
            },
            Message::ModelSelected(name) => {
                debug!("Model selected: {}", name);
                self.selected_model = Some(name);
                Task::none()
            }
            Message::LoadModel => {
                self.load_model();
                Task::none()
            }
            Message::Zoom(direction) => {
                self.session.zoom(direction);
                Task::none()
            }
        }
    }

    /// Run the selected model's entry point; failures only reach the log and console
    fn load_model(&mut self) {
        let Some(name) = self.selected_model.clone() else {
            self.console.push("No detection model selected");
            return;
        };

        self.console.push(detection::LOAD_BANNER);
        let outcome = detection::entry_point_for(&self.config, &name)
            .and_then(|entry| detection::load(&name, &entry));

        match outcome {
            Ok(()) => self.console.push(format!("{} finished", name)),
            Err(error) => {
                warn!("Model {} failed: {}", name, error);
                self.console.push(error.to_string());
            }
        }
    }

    /// Surface a failure in a blocking message dialog
    fn report(&mut self, error: &ViewerError) {
        warn!("{}", error);
        self.console.push(error.to_string());

        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(DIALOG_TITLE)
            .set_description(error.to_string())
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn title(&self, window: window::Id) -> String {
        match self.popups.get(&window) {
            Some(popup) => popup.title.clone(),
            None => WINDOW_TITLE.to_string(),
        }
    }

    /// Build the user interface of one window
    fn view(&self, window: window::Id) -> Element<'_, Message> {
        match self.popups.get(&window) {
            Some(popup) => popup.view(),
            None => self.main_view(),
        }
    }

    fn main_view(&self) -> Element<'_, Message> {
        let folder_text = self
            .session
            .folder()
            .map(|folder| folder.display().to_string())
            .unwrap_or_default();

        let folder_row = row![
            button("Image folder")
                .on_press(Message::OpenFolder)
                .width(Length::Fixed(128.0)),
            text_input("", &folder_text).width(Length::Fixed(480.0)),
            text(self.position_text()).size(13),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let has_folder = self.session.has_folder();
        let buttons = row![
            button("Inspect")
                .on_press_maybe(has_folder.then_some(Message::Inspect))
                .width(Length::Fill),
            button("Next")
                .on_press_maybe(has_folder.then_some(Message::NextImage))
                .width(Length::Fill),
        ]
        .spacing(8)
        .width(Length::Fixed(LABEL_WIDTH as f32));

        let left = column![folder_row, self.image_label(), buttons].spacing(10);

        let mut right = column![
            text(self.config.variant.model_label()),
            pick_list(
                self.model_names.as_slice(),
                self.selected_model.clone(),
                Message::ModelSelected,
            ),
        ]
        .spacing(8)
        .padding([10, 10])
        .width(Length::Fill);

        if self.config.variant.has_model_loader() {
            right = right
                .push(button("Load").on_press(Message::LoadModel))
                .push(self.console.view());
        }

        row![left, right].spacing(40).padding(10).into()
    }

    /// Entry position in the folder, plus the zoom factor when wheel zoom is on
    fn position_text(&self) -> String {
        let Some(browser) = self.session.browser() else {
            return String::new();
        };
        let position = format!("{}/{}", browser.index() + 1, browser.len());
        if self.config.variant.has_zoom() && self.session.current().is_some() {
            format!("{}  x{}", position, self.session.scale())
        } else {
            position
        }
    }

    /// Bordered, fixed-size label holding the current bitmap at the current zoom
    fn image_label(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match (self.session.current(), self.session.render_size())
        {
            (Some(current), Some((width, height))) => {
                iced::widget::image(current.bitmap.handle.clone())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .content_fit(ContentFit::Fill)
                    .into()
            }
            _ => Space::new(Length::Fill, Length::Fill).into(),
        };

        let label = container(content)
            .width(Length::Fixed(LABEL_WIDTH as f32))
            .height(Length::Fixed(LABEL_HEIGHT as f32))
            .center_x(Length::Fixed(LABEL_WIDTH as f32))
            .center_y(Length::Fixed(LABEL_HEIGHT as f32))
            .clip(true)
            .style(|_theme: &Theme| container::Style {
                border: Border {
                    color: Color::from_rgb8(0x80, 0x80, 0x80),
                    width: 3.0,
                    radius: 0.0.into(),
                },
                ..container::Style::default()
            });

        if self.config.variant.has_zoom() {
            stack![
                label,
                canvas(ZoomSurface)
                    .width(Length::Fixed(LABEL_WIDTH as f32))
                    .height(Length::Fixed(LABEL_HEIGHT as f32)),
            ]
            .into()
        } else {
            label.into()
        }
    }

    fn theme(&self, _window: window::Id) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        window::close_events().map(Message::WindowClosed)
    }
}

fn main() -> iced::Result {
    let default_filter = if cfg!(debug_assertions) {
        "warn,cevilog_viewer=debug"
    } else {
        "warn,cevilog_viewer=info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    iced::daemon(CevilogViewer::title, CevilogViewer::update, CevilogViewer::view)
        .theme(CevilogViewer::theme)
        .subscription(CevilogViewer::subscription)
        .run_with(CevilogViewer::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Variant;
    use image::{Rgb, RgbImage};

    fn viewer(variant: Variant) -> CevilogViewer {
        let (mut viewer, _) = CevilogViewer::new();
        viewer.config.variant = variant;
        viewer.session = Session::new(&viewer.config);
        viewer
    }

    fn two_images() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.png"] {
            RgbImage::from_pixel(8, 4, Rgb([40, 40, 40]))
                .save(dir.path().join(name))
                .unwrap();
        }
        dir
    }

    #[test]
    fn position_is_blank_before_a_folder_is_open() {
        assert_eq!(viewer(Variant::Detection).position_text(), "");
    }

    #[test]
    fn position_follows_next_and_shows_zoom() {
        let dir = two_images();
        let mut viewer = viewer(Variant::Detection);
        viewer.session.open_folder(dir.path()).unwrap();
        assert_eq!(viewer.position_text(), "1/2  x1");

        let _ = viewer.update(Message::Zoom(ZoomDirection::In));
        let _ = viewer.update(Message::NextImage);
        assert_eq!(viewer.position_text(), "2/2  x1");

        let _ = viewer.update(Message::Zoom(ZoomDirection::Out));
        assert_eq!(viewer.position_text(), "2/2  x0.5");
    }

    #[test]
    fn basic_variant_shows_position_only() {
        let dir = two_images();
        let mut viewer = viewer(Variant::Basic);
        viewer.session.open_folder(dir.path()).unwrap();
        assert_eq!(viewer.position_text(), "1/2");
    }
}
