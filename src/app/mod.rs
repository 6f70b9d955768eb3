// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the invitation page.
//!
//! The `App` struct owns the view state controller and the loaded event
//! configuration, and translates controller [`Effect`]s into Iced tasks
//! (deep-link launches, the one-shot effect-end timer). Policy decisions
//! that affect user-facing behavior (window size, repaint cadence) stay in
//! this module so they are easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::invite::{self, Catalog};
use crate::ui::confetti;
use crate::ui::theming::ThemeMode;
use chrono::{Local, NaiveDateTime};
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 860;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state.
pub struct App {
    config: Config,
    catalog: Catalog,
    invite: invite::State,
    /// Render handles paralleling `invite.photos()`, built once per photo
    /// so thumbnails are not re-decoded every frame.
    photo_handles: Vec<image::Handle>,
    /// Live confetti show, present exactly while the effect window is open.
    confetti: Option<confetti::Show>,
    /// Wall-clock time of the last countdown tick.
    now: NaiveDateTime,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("confirmed", &self.invite.confirmed())
            .field("photos", &self.invite.photo_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load(flags.config_path.as_deref());
        let catalog = config.catalog();
        let theme_mode = config.general.theme_mode;

        let app = App {
            config,
            catalog,
            invite: invite::State::new(),
            photo_handles: Vec::new(),
            confetti: None,
            now: Local::now().naive_local(),
            theme_mode,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.config.event.title.clone()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}
