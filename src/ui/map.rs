// SPDX-License-Identifier: MPL-2.0
//! Stylized venue map panel.
//!
//! Real cartography is delegated to the external directions link; this
//! panel renders a decorative abstraction from the configured coordinate
//! and style colors (water, landscape, road) with a pin at the venue.

use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

/// The fixed coordinate the pin marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Caption text in the usual `lat° N/S, lng° E/W` form.
    #[must_use]
    pub fn caption(&self) -> String {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        format!(
            "{:.4}° {ns}, {:.4}° {ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}

/// Style colors consumed by the map rendering.
#[derive(Debug, Clone, Copy)]
pub struct MapStyle {
    pub water: Color,
    pub landscape: Color,
    pub road: Color,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            water: palette::MAP_WATER,
            landscape: palette::MAP_LANDSCAPE,
            road: palette::MAP_ROAD,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MapPanel {
    pub coordinate: Coordinate,
    pub style: MapStyle,
}

impl MapPanel {
    #[must_use]
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            style: MapStyle::default(),
        }
    }

    pub fn view<Message: 'static>(self) -> Element<'static, Message> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for MapPanel {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = bounds.size();

        // Water everywhere, landscape as a soft shoreline band covering the
        // upper two thirds. The fractional offsets come from the coordinate
        // so different venues do not all render the same picture.
        frame.fill_rectangle(Point::ORIGIN, size, self.style.water);

        let shore = (self.coordinate.latitude.fract().abs() as f32 * 0.2 + 0.55) * size.height;
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(size.width, shore),
            self.style.landscape,
        );

        // A few roads through the landscape.
        let road_width = 8.0;
        let skew = self.coordinate.longitude.fract().abs() as f32;
        for lane in 1..4 {
            let x = size.width * (0.18 * lane as f32 + 0.12 * skew);
            frame.fill_rectangle(
                Point::new(x, 0.0),
                Size::new(road_width, shore),
                self.style.road,
            );
        }
        frame.fill_rectangle(
            Point::new(0.0, shore * 0.45),
            Size::new(size.width, road_width),
            self.style.road,
        );

        // Venue pin: a drop shape centered on the panel.
        let pin = Point::new(size.width / 2.0, size.height * 0.42);
        let head_radius = 11.0;
        let tip = Point::new(pin.x, pin.y + head_radius * 2.2);

        let needle = canvas::Path::new(|p| {
            p.move_to(Point::new(pin.x - head_radius * 0.65, pin.y + head_radius * 0.5));
            p.line_to(tip);
            p.line_to(Point::new(pin.x + head_radius * 0.65, pin.y + head_radius * 0.5));
            p.close();
        });
        frame.fill(&needle, palette::CORAL_500);

        let head = canvas::Path::circle(pin, head_radius);
        frame.fill(&head, palette::CORAL_500);
        let hole = canvas::Path::circle(pin, head_radius * 0.38);
        frame.fill(&hole, palette::WHITE);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_formats_north_east() {
        let c = Coordinate {
            latitude: 16.8507,
            longitude: 96.1683,
        };
        assert_eq!(c.caption(), "16.8507° N, 96.1683° E");
    }

    #[test]
    fn caption_formats_south_west() {
        let c = Coordinate {
            latitude: -33.8688,
            longitude: -70.6693,
        };
        assert_eq!(c.caption(), "33.8688° S, 70.6693° W");
    }
}
