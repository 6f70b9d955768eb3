// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::invite::launcher::LaunchReport;
use crate::invite::state::PhotoBlob;
use crate::invite::SongId;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Every variant is a
/// discrete external event: a press, a dialog result, or a timer firing.
#[derive(Debug, Clone)]
pub enum Message {
    /// The RSVP button was pressed.
    ConfirmRsvp,
    /// The RSVP launcher finished its best-effort attempt.
    RsvpLaunchReported(LaunchReport),
    /// The 5-second celebration window scheduled with `epoch` elapsed.
    EffectElapsed { epoch: u64 },
    /// A playlist entry was pressed.
    SongPressed(SongId),
    /// The "add photo" button was pressed.
    PickPhoto,
    /// The photo picker closed, possibly without a file.
    PhotoPicked(Option<PathBuf>),
    /// A picked photo finished decoding (or failed to).
    PhotoLoaded(Result<PhotoBlob, Error>),
    /// The directions link was pressed.
    OpenDirections,
    /// A fire-and-forget external open finished (song link or directions).
    ExternalOpenFinished,
    /// 1 Hz tick driving the countdown display.
    CountdownTick,
    /// Repaint tick while the confetti shower is active.
    ConfettiFrame(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to an alternate `event.toml`.
    pub config_path: Option<PathBuf>,
}
