// SPDX-License-Identifier: MPL-2.0
//! Update logic: routes messages into the state controller and turns the
//! resulting effects into Iced tasks.

use super::{App, Message};
use crate::invite::gallery::{self, PHOTO_EXTENSIONS};
use crate::invite::launcher::{self, LaunchReport, SystemLauncher};
use crate::invite::state::EFFECT_WINDOW;
use crate::invite::{Action, Effect};
use crate::ui::confetti;
use chrono::Local;
use iced::widget::image;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ConfirmRsvp => dispatch(app, Action::ConfirmAttendance),
        Message::SongPressed(id) => dispatch(app, Action::SelectSong(id)),
        Message::EffectElapsed { epoch } => {
            let task = dispatch(app, Action::EffectElapsed { epoch });
            if !app.invite.effect_active() {
                app.confetti = None;
            }
            task
        }
        Message::PickPhoto => Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Add a photo to the booth")
                    .add_filter("Images", &PHOTO_EXTENSIONS)
                    .pick_file()
                    .await
                    .map(|file| file.path().to_path_buf())
            },
            Message::PhotoPicked,
        ),
        // Cancelled picker: nothing observable happens.
        Message::PhotoPicked(None) => Task::none(),
        Message::PhotoPicked(Some(path)) => {
            Task::perform(gallery::load_photo(path), Message::PhotoLoaded)
        }
        Message::PhotoLoaded(Ok(blob)) => {
            app.photo_handles
                .push(image::Handle::from_bytes(blob.bytes().to_vec()));
            dispatch(app, Action::AddPhoto(blob))
        }
        Message::PhotoLoaded(Err(err)) => {
            // Decode boundary: a bad file never reaches the gallery.
            eprintln!("Photo was not added: {err}");
            Task::none()
        }
        Message::OpenDirections => {
            let url = app.config.venue.directions_url.clone();
            Task::perform(
                async move { launcher::open_silently(&SystemLauncher, &url) },
                |()| Message::ExternalOpenFinished,
            )
        }
        Message::ExternalOpenFinished => Task::none(),
        Message::RsvpLaunchReported(report) => {
            if report == LaunchReport::FallbackUsed {
                eprintln!("RSVP deep link needed the fallback navigation");
            }
            Task::none()
        }
        Message::CountdownTick => {
            app.now = Local::now().naive_local();
            Task::none()
        }
        // Repaint only; the confetti field derives everything from time.
        Message::ConfettiFrame(_) => Task::none(),
    }
}

fn dispatch(app: &mut App, action: Action) -> Task<Message> {
    let effects = app.invite.apply(action, &app.catalog);
    Task::batch(effects.into_iter().map(|effect| run_effect(app, effect)))
}

fn run_effect(app: &mut App, effect: Effect) -> Task<Message> {
    match effect {
        Effect::ScheduleEffectEnd { epoch } => {
            app.confetti = Some(confetti::Show::new(epoch));
            Task::perform(tokio::time::sleep(EFFECT_WINDOW), move |()| {
                Message::EffectElapsed { epoch }
            })
        }
        Effect::SendRsvp => {
            let url = app.config.rsvp.chat_url();
            Task::perform(launcher::send_rsvp(url), Message::RsvpLaunchReported)
        }
        Effect::OpenSongLink(id) => match app.catalog.get(id) {
            Some(song) => {
                let url = song.url.clone();
                Task::perform(
                    async move { launcher::open_silently(&SystemLauncher, &url) },
                    |()| Message::ExternalOpenFinished,
                )
            }
            None => Task::none(),
        },
    }
}
