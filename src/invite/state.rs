// SPDX-License-Identifier: MPL-2.0
//! The view state controller for the invitation page.
//!
//! All transient page state lives in [`State`]: whether attendance was
//! confirmed, whether the celebration effect window is open, which song is
//! highlighted, and the photos added so far. [`State::apply`] is the single
//! transition function; it mutates the state and returns the [`Effect`]s the
//! caller must carry out (opening links, scheduling the effect-end timer).
//!
//! The controller itself has no fallible operations. External failures
//! (messaging app missing, decode errors) are absorbed by the respective
//! collaborator modules and never reach this state machine.

use super::song::{Catalog, SongId};
use std::sync::Arc;
use std::time::Duration;

/// How long the celebration effect stays visible after a confirmation.
pub const EFFECT_WINDOW: Duration = Duration::from_millis(5000);

/// Encoded bytes of one gallery photo, validated decodable at the decode
/// boundary before it ever reaches the controller.
#[derive(Debug, Clone)]
pub struct PhotoBlob(Arc<[u8]>);

impl PhotoBlob {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// User and timer events the controller reacts to.
#[derive(Debug, Clone)]
pub enum Action {
    /// The RSVP button was pressed.
    ConfirmAttendance,
    /// A playlist entry was pressed.
    SelectSong(SongId),
    /// A photo finished decoding successfully.
    AddPhoto(PhotoBlob),
    /// The effect-end timer scheduled with `epoch` fired.
    EffectElapsed { epoch: u64 },
}

/// Side effects requested by a transition. The caller resolves URLs from
/// configuration and schedules timers; the controller never performs I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire the RSVP deep link. Best effort: there is no acknowledgment
    /// channel, so delivery can never be confirmed.
    SendRsvp,
    /// Open the external link of the given catalog entry.
    OpenSongLink(SongId),
    /// Arrange for `Action::EffectElapsed { epoch }` after [`EFFECT_WINDOW`].
    ScheduleEffectEnd { epoch: u64 },
}

/// Transient page state. Created empty at startup, gone when the process
/// exits; nothing here is ever persisted.
#[derive(Debug, Clone, Default)]
pub struct State {
    confirmed: bool,
    effect_open: bool,
    /// Bumped on every confirmation. A pending effect-end timer only closes
    /// the window if it still carries the current epoch, so re-confirming
    /// restarts the 5-second window instead of truncating it.
    effect_epoch: u64,
    selected_song: Option<SongId>,
    photos: Vec<PhotoBlob>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action and returns the effects to carry out.
    pub fn apply(&mut self, action: Action, catalog: &Catalog) -> Vec<Effect> {
        match action {
            Action::ConfirmAttendance => {
                // Monotonic: never transitions back to false. Repeated
                // confirmations re-open the effect window and re-send the
                // RSVP message, once per press.
                self.confirmed = true;
                self.effect_open = true;
                self.effect_epoch += 1;
                vec![
                    Effect::ScheduleEffectEnd {
                        epoch: self.effect_epoch,
                    },
                    Effect::SendRsvp,
                ]
            }
            Action::SelectSong(id) => {
                if !catalog.contains(id) {
                    return Vec::new();
                }
                if self.selected_song == Some(id) {
                    // Second press on the highlighted entry is play intent.
                    vec![Effect::OpenSongLink(id)]
                } else {
                    // Exclusive choice: highlighting one entry implicitly
                    // drops the previous one. No navigation on first press.
                    self.selected_song = Some(id);
                    Vec::new()
                }
            }
            Action::AddPhoto(blob) => {
                // Append-only, insertion order is display order. No size
                // cap and no duplicate check.
                self.photos.push(blob);
                Vec::new()
            }
            Action::EffectElapsed { epoch } => {
                if epoch == self.effect_epoch {
                    self.effect_open = false;
                }
                Vec::new()
            }
        }
    }

    #[must_use]
    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    #[must_use]
    pub fn effect_active(&self) -> bool {
        self.effect_open
    }

    /// Epoch of the most recent confirmation, used to key the effect-end
    /// timer and to seed the confetti renderer.
    #[must_use]
    pub fn effect_epoch(&self) -> u64 {
        self.effect_epoch
    }

    #[must_use]
    pub fn selected_song(&self) -> Option<SongId> {
        self.selected_song
    }

    pub fn photos(&self) -> &[PhotoBlob] {
        &self.photos
    }

    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invite::song::Song;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Song::new("One", "https://example.com/1"),
            Song::new("Two", "https://example.com/2"),
            Song::new("Three", "https://example.com/3"),
        ])
    }

    fn blob(byte: u8) -> PhotoBlob {
        PhotoBlob::new(vec![byte; 4])
    }

    #[test]
    fn starts_empty() {
        let state = State::new();
        assert!(!state.confirmed());
        assert!(!state.effect_active());
        assert_eq!(state.selected_song(), None);
        assert_eq!(state.photo_count(), 0);
    }

    #[test]
    fn confirm_sets_flag_and_opens_effect_window() {
        let mut state = State::new();
        let effects = state.apply(Action::ConfirmAttendance, &catalog());

        assert!(state.confirmed());
        assert!(state.effect_active());
        assert_eq!(
            effects,
            vec![Effect::ScheduleEffectEnd { epoch: 1 }, Effect::SendRsvp]
        );
    }

    #[test]
    fn confirmed_is_monotonic() {
        let mut state = State::new();
        let catalog = catalog();
        for _ in 0..5 {
            state.apply(Action::ConfirmAttendance, &catalog);
            assert!(state.confirmed());
        }
    }

    #[test]
    fn repeated_confirm_resends_rsvp() {
        let mut state = State::new();
        let catalog = catalog();
        state.apply(Action::ConfirmAttendance, &catalog);
        let effects = state.apply(Action::ConfirmAttendance, &catalog);
        assert!(effects.contains(&Effect::SendRsvp));
    }

    #[test]
    fn matching_epoch_closes_effect_window() {
        let mut state = State::new();
        let catalog = catalog();
        state.apply(Action::ConfirmAttendance, &catalog);
        let epoch = state.effect_epoch();

        state.apply(Action::EffectElapsed { epoch }, &catalog);
        assert!(!state.effect_active());
        assert!(state.confirmed());
    }

    #[test]
    fn stale_epoch_does_not_close_restarted_window() {
        let mut state = State::new();
        let catalog = catalog();
        state.apply(Action::ConfirmAttendance, &catalog);
        let stale = state.effect_epoch();

        // Re-confirm before the first timer fires: the window restarts.
        state.apply(Action::ConfirmAttendance, &catalog);
        state.apply(Action::EffectElapsed { epoch: stale }, &catalog);
        assert!(state.effect_active());

        let current = state.effect_epoch();
        state.apply(Action::EffectElapsed { epoch: current }, &catalog);
        assert!(!state.effect_active());
    }

    #[test]
    fn effect_never_reopens_without_fresh_confirm() {
        let mut state = State::new();
        let catalog = catalog();
        state.apply(Action::ConfirmAttendance, &catalog);
        let epoch = state.effect_epoch();
        state.apply(Action::EffectElapsed { epoch }, &catalog);

        state.apply(Action::SelectSong(SongId::new(0)), &catalog);
        state.apply(Action::AddPhoto(blob(1)), &catalog);
        state.apply(Action::EffectElapsed { epoch }, &catalog);
        assert!(!state.effect_active());
    }

    #[test]
    fn song_selection_is_exclusive() {
        let mut state = State::new();
        let catalog = catalog();
        let a = SongId::new(0);
        let b = SongId::new(1);

        let effects = state.apply(Action::SelectSong(a), &catalog);
        assert!(effects.is_empty());
        assert_eq!(state.selected_song(), Some(a));

        let effects = state.apply(Action::SelectSong(b), &catalog);
        assert!(effects.is_empty());
        assert_eq!(state.selected_song(), Some(b));
    }

    #[test]
    fn second_press_on_selected_song_opens_link() {
        let mut state = State::new();
        let catalog = catalog();
        let a = SongId::new(2);

        assert!(state.apply(Action::SelectSong(a), &catalog).is_empty());
        let effects = state.apply(Action::SelectSong(a), &catalog);
        assert_eq!(effects, vec![Effect::OpenSongLink(a)]);
        assert_eq!(state.selected_song(), Some(a));
    }

    #[test]
    fn out_of_range_song_is_ignored() {
        let mut state = State::new();
        let effects = state.apply(Action::SelectSong(SongId::new(99)), &catalog());
        assert!(effects.is_empty());
        assert_eq!(state.selected_song(), None);
    }

    #[test]
    fn photos_append_in_call_order() {
        let mut state = State::new();
        let catalog = catalog();
        for byte in 0..4u8 {
            state.apply(Action::AddPhoto(blob(byte)), &catalog);
        }

        assert_eq!(state.photo_count(), 4);
        let first_bytes: Vec<u8> = state.photos().iter().map(|p| p.bytes()[0]).collect();
        assert_eq!(first_bytes, vec![0, 1, 2, 3]);
    }
}
