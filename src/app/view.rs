// SPDX-License-Identifier: MPL-2.0
//! View rendering for the invitation page.
//!
//! One scrollable card over a muted backdrop, with the confetti shower
//! stacked on top while the celebration effect is active. All state comes
//! from [`App`]; nothing here mutates anything.

use super::{App, Message};
use crate::invite::countdown::{self, Remaining};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::map::{Coordinate, MapPanel};
use crate::ui::styles;
use iced::widget::{button, container, image, scrollable, text, Column, Row, Stack};
use iced::{Alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let card = Column::new()
        .push(header(app))
        .push(info_section(app))
        .push(map_section(app))
        .push(text(&app.config.event.blurb).size(typography::BODY))
        .push(countdown_section(app))
        .push(music_section(app))
        .push(photo_booth(app))
        .push(rsvp_section(app))
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .padding(spacing::XL);

    let page = container(
        scrollable(
            container(
                container(card)
                    .style(styles::container::card)
                    .max_width(sizing::CARD_MAX_WIDTH),
            )
            .center_x(Length::Fill)
            .padding(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .style(styles::container::backdrop)
    .width(Length::Fill)
    .height(Length::Fill);

    match &app.confetti {
        Some(show) => Stack::new().push(page).push(show.view()).into(),
        None => page.into(),
    }
}

fn header(app: &App) -> Element<'_, Message> {
    Column::new()
        .push(
            text(&app.config.event.title)
                .size(typography::TITLE_LG)
                .color(palette::CORAL_500),
        )
        .push(text(&app.config.event.subtitle).size(typography::TITLE_SM))
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .into()
}

fn info_section(app: &App) -> Element<'_, Message> {
    let item = |icon: &'static str, label: &str| {
        Row::new()
            .push(text(icon).size(typography::BODY))
            .push(text(label.to_string()).size(typography::BODY))
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
    };

    Column::new()
        .push(item("🕐", &app.config.event.schedule))
        .push(item("📍", &app.config.venue.name))
        .push(item("🎁", &app.config.event.gift_line))
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .into()
}

fn map_section(app: &App) -> Element<'_, Message> {
    let coordinate = Coordinate {
        latitude: app.config.venue.latitude,
        longitude: app.config.venue.longitude,
    };

    let map = container(MapPanel::new(coordinate).view())
        .style(styles::container::panel)
        .padding(spacing::XXS)
        .width(Length::Fill)
        .height(sizing::MAP_HEIGHT);

    Column::new()
        .push(map)
        .push(
            text(coordinate.caption())
                .size(typography::CAPTION)
                .color(palette::GRAY_700),
        )
        .push(
            button(text("📍 Get Directions").size(typography::CAPTION))
                .style(styles::button::link)
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::OpenDirections),
        )
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn countdown_section(app: &App) -> Element<'_, Message> {
    let target = app.config.starts_at();

    let digits: Element<'_, Message> = if countdown::has_started(app.now, target) {
        text("The celebration is underway! 🎉")
            .size(typography::COUNTDOWN)
            .color(palette::CORAL_500)
            .into()
    } else {
        let remaining = Remaining::between(app.now, target);
        text(format!(
            "{}d {}h {}m {}s",
            remaining.days, remaining.hours, remaining.minutes, remaining.seconds
        ))
        .size(typography::COUNTDOWN)
        .color(palette::CORAL_500)
        .into()
    };

    Column::new()
        .push(
            text("Time Until The Celebration")
                .size(typography::TITLE_SM)
                .color(palette::CORAL_500),
        )
        .push(digits)
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .into()
}

fn music_section(app: &App) -> Element<'_, Message> {
    let mut chips = Row::new().spacing(spacing::XS);
    for (id, song) in app.catalog.iter() {
        let selected = app.invite.selected_song() == Some(id);
        let label = if selected {
            format!("{} ▶", song.title)
        } else {
            song.title.clone()
        };
        chips = chips.push(
            button(text(label).size(typography::CAPTION))
                .style(styles::button::playlist(selected))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::SongPressed(id)),
        );
    }

    let content = Row::new()
        .push(text("🎵").size(typography::TITLE_SM))
        .push(
            scrollable(chips).direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new(),
            )),
        )
        .spacing(spacing::MD)
        .align_y(Alignment::Center);

    container(content)
        .style(styles::container::panel)
        .padding(spacing::LG)
        .width(Length::Fill)
        .into()
}

fn photo_booth(app: &App) -> Element<'_, Message> {
    let mut content = Column::new()
        .push(
            text("📷 Beach Photo Booth")
                .size(typography::TITLE_SM)
                .color(palette::CORAL_500),
        )
        .push(
            button(text("Choose a photo…").size(typography::CAPTION))
                .style(styles::button::link)
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::PickPhoto),
        )
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    if !app.photo_handles.is_empty() {
        let mut thumbnails = Row::new().spacing(spacing::XS);
        for handle in &app.photo_handles {
            thumbnails = thumbnails.push(
                image(handle.clone()).height(Length::Fixed(sizing::THUMBNAIL)),
            );
        }
        content = content.push(
            scrollable(thumbnails).direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new(),
            )),
        );
    }

    container(content)
        .style(styles::container::panel)
        .padding(spacing::LG)
        .width(Length::Fill)
        .into()
}

fn rsvp_section(app: &App) -> Element<'_, Message> {
    if app.invite.confirmed() {
        Column::new()
            .push(
                text("Thanks for RSVPing! 🎊")
                    .size(typography::TITLE_SM)
                    .color(palette::CORAL_500),
            )
            .push(text("We can't wait to celebrate with you!").size(typography::BODY))
            .spacing(spacing::SM)
            .align_x(Alignment::Center)
            .into()
    } else {
        button(text("RSVP Now").size(typography::BODY))
            .style(styles::button::rsvp)
            .padding([spacing::MD, spacing::XL])
            .on_press(Message::ConfirmRsvp)
            .into()
    }
}
