// SPDX-License-Identifier: MPL-2.0
//! Full-window confetti renderer for the celebration effect.
//!
//! The particle field is deterministic: positions derive from a seed (the
//! confirmation epoch) and the elapsed time since the window opened, so the
//! renderer holds no mutable state of its own. Visibility is entirely the
//! state controller's decision; this program only draws.

use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Element, Length, Point, Rectangle, Size, Theme};
use std::time::Instant;

const PARTICLE_COUNT: usize = 140;
/// Fall speed range in window-heights per second.
const MIN_FALL_SPEED: f32 = 0.25;
const MAX_FALL_SPEED: f32 = 0.55;
/// Horizontal sway amplitude in window-widths.
const SWAY_AMPLITUDE: f32 = 0.03;

/// One live confetti show: seeded at confirmation time.
#[derive(Debug, Clone, Copy)]
pub struct Show {
    seed: u64,
    started: Instant,
}

impl Show {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Builds the overlay element for the current frame.
    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        canvas::Canvas::new(Confetti {
            seed: self.seed,
            elapsed: self.elapsed_secs(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

struct Confetti {
    seed: u64,
    elapsed: f32,
}

/// SplitMix64 step, the usual tiny seedable generator for visual noise.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform value in `[0, 1)` from the generator.
fn unit(state: &mut u64) -> f32 {
    (splitmix64(state) >> 40) as f32 / (1u64 << 24) as f32
}

impl<Message> canvas::Program<Message> for Confetti {
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
        let mut rng = self.seed.wrapping_mul(0xA076_1D64_78BD_642F).max(1);

        for index in 0..PARTICLE_COUNT {
            let origin_x = unit(&mut rng);
            let origin_y = unit(&mut rng);
            let speed = MIN_FALL_SPEED + unit(&mut rng) * (MAX_FALL_SPEED - MIN_FALL_SPEED);
            let phase = unit(&mut rng) * std::f32::consts::TAU;
            let sway_freq = 1.0 + unit(&mut rng) * 2.0;
            let side = 4.0 + unit(&mut rng) * 6.0;

            // Particles wrap vertically so the shower stays dense for the
            // whole effect window.
            let y = (origin_y + self.elapsed * speed).fract() * bounds.height;
            let sway = (phase + self.elapsed * sway_freq).sin() * SWAY_AMPLITUDE;
            let x = (origin_x + sway).rem_euclid(1.0) * bounds.width;

            let color = palette::CONFETTI[index % palette::CONFETTI.len()];
            let path = canvas::Path::rectangle(
                Point::new(x - side / 2.0, y - side / 2.0),
                Size::new(side, side * 0.6),
            );
            frame.fill(&path, color);
        }

        vec![frame.into_geometry()]
    }
}

const _: () = {
    assert!(MIN_FALL_SPEED < MAX_FALL_SPEED);
    assert!(PARTICLE_COUNT > 0);
};
