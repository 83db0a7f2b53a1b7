use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::{Rectangle, Renderer, Theme};

use crate::state::zoom::ZoomDirection;
use crate::Message;

/// Transparent canvas laid over the image label.
/// Turns wheel ticks inside the label into zoom messages; draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomSurface;

/// Wheel up zooms in, wheel down zooms out, a purely horizontal scroll does nothing
pub fn direction_for(delta: mouse::ScrollDelta) -> Option<ZoomDirection> {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } => y,
        mouse::ScrollDelta::Pixels { y, .. } => y,
    };

    if y > 0.0 {
        Some(ZoomDirection::In)
    } else if y < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}

impl Program<Message> for ZoomSurface {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        vec![]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) = event {
            // Only ticks with the pointer inside the label count
            if cursor.is_over(bounds) {
                if let Some(direction) = direction_for(delta) {
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::Zoom(direction)),
                    );
                }
            }
        }

        (canvas::event::Status::Ignored, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn label() -> Rectangle {
        Rectangle::new(Point::new(20.0, 60.0), Size::new(640.0, 480.0))
    }

    fn wheel(y: f32) -> canvas::Event {
        canvas::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y },
        })
    }

    #[test]
    fn test_delta_sign_picks_direction() {
        assert_eq!(
            direction_for(mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }),
            Some(ZoomDirection::In)
        );
        assert_eq!(
            direction_for(mouse::ScrollDelta::Pixels { x: 0.0, y: -12.0 }),
            Some(ZoomDirection::Out)
        );
        assert_eq!(
            direction_for(mouse::ScrollDelta::Lines { x: 3.0, y: 0.0 }),
            None
        );
    }

    #[test]
    fn test_wheel_inside_label_zooms() {
        let inside = Cursor::Available(Point::new(100.0, 100.0));
        let (status, message) = ZoomSurface.update(&mut (), wheel(1.0), label(), inside);
        assert_eq!(status, canvas::event::Status::Captured);
        assert!(matches!(message, Some(Message::Zoom(ZoomDirection::In))));
    }

    #[test]
    fn test_wheel_outside_label_is_ignored() {
        let outside = Cursor::Available(Point::new(5.0, 5.0));
        let (status, message) = ZoomSurface.update(&mut (), wheel(-1.0), label(), outside);
        assert_eq!(status, canvas::event::Status::Ignored);
        assert!(message.is_none());

        let (_, message) = ZoomSurface.update(&mut (), wheel(-1.0), label(), Cursor::Unavailable);
        assert!(message.is_none());
    }
}
