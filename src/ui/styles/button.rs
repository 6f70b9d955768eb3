// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the RSVP call-to-action: coral outline that fills on hover.
pub fn rsvp(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::CORAL_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::CORAL_500,
                width: 2.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: palette::CORAL_500,
            border: Border {
                color: palette::CORAL_500,
                width: 2.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for playlist chips; `selected` marks the highlighted song.
pub fn playlist(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let background = if selected {
            Some(Background::Color(palette::CORAL_500))
        } else if hovered {
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::CORAL_500
            }))
        } else {
            None
        };

        button::Style {
            background,
            text_color: if selected {
                palette::WHITE
            } else {
                palette::CORAL_500
            },
            border: Border {
                color: palette::CORAL_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for secondary link-like actions (directions, add photo).
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::CORAL_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::CORAL_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: palette::CORAL_500,
            border: Border {
                color: palette::CORAL_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
