// SPDX-License-Identifier: MPL-2.0
//! Invitation domain: transient view state and the collaborators it drives.
//!
//! Everything under this module is free of Iced types so the state machine
//! can be exercised in tests without a rendering layer. The submodules split
//! along the external boundaries of the page:
//!
//! - [`state`] - the view state controller (RSVP, effect window, song
//!   selection, photo gallery) and its pure transition function
//! - [`song`] - the fixed song catalog
//! - [`deeplink`] - RSVP deep-link construction
//! - [`launcher`] - best-effort external URL opening with a timed fallback
//! - [`countdown`] - decomposition of the time left until the event
//! - [`gallery`] - photo decode boundary for the photo booth

pub mod countdown;
pub mod deeplink;
pub mod gallery;
pub mod launcher;
pub mod song;
pub mod state;

pub use song::{Catalog, Song, SongId};
pub use state::{Action, Effect, PhotoBlob, State};
