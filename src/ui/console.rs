//! Console text area
//! Timestamped, append-only lines shown on a black background

use chrono::Local;
use iced::widget::{container, scrollable, text, Column};
use iced::{Background, Color, Element, Length, Theme};
use std::collections::VecDeque;

use crate::Message;

#[derive(Debug, Clone)]
pub struct Console {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Console {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append a line, dropping the oldest once the console is full
    pub fn push(&mut self, line: impl AsRef<str>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines
            .push_back(format!("[{}] {}", Local::now().format("%H:%M:%S"), line.as_ref()));
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let lines = Column::with_children(self.lines().map(|line| text(line).size(13).into()))
            .spacing(2)
            .padding(6);

        container(scrollable(lines).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color::BLACK)),
                text_color: Some(Color::from_rgb8(0xd0, 0xd0, 0xd0)),
                ..container::Style::default()
            })
            .into()
    }
}
