// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two periodic sources: a 1 Hz tick for the countdown display, and a
//! faster repaint tick that only runs while the confetti shower is active.
//! Binding the repaint tick to the effect window keeps the page idle the
//! rest of the time.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Repaint cadence of the confetti shower.
const CONFETTI_FRAME: Duration = Duration::from_millis(50);

pub fn subscription(app: &App) -> Subscription<Message> {
    let countdown = time::every(Duration::from_secs(1)).map(|_| Message::CountdownTick);

    if app.invite.effect_active() {
        Subscription::batch([
            countdown,
            time::every(CONFETTI_FRAME).map(Message::ConfettiFrame),
        ])
    } else {
        countdown
    }
}
