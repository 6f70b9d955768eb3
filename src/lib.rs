// SPDX-License-Identifier: MPL-2.0
//! `beach_bash` is a decorative party-invitation app built with the Iced
//! GUI framework.
//!
//! One window shows the event details, a stylized venue map, a live
//! countdown, a song picker, a local photo booth, and an RSVP button that
//! deep-links into a messaging app. Nothing is persisted beyond the event
//! configuration: RSVPs, photos, and song selection live only for the
//! process lifetime.

pub mod app;
pub mod config;
pub mod error;
pub mod invite;
pub mod ui;
