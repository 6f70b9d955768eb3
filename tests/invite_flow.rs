// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the invitation state machine and its
//! collaborators, exercised without any rendering layer.

use beach_bash::config::{self, Config};
use beach_bash::invite::launcher::{open_with_fallback, LaunchReport, Launcher};
use beach_bash::invite::{Action, Effect, SongId, State};
use std::sync::Mutex;
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn rsvp_scenario_confirms_and_requests_one_deep_link() {
    let config = Config::default();
    let catalog = config.catalog();
    let mut state = State::new();

    assert!(!state.confirmed());
    assert!(!state.effect_active());
    assert_eq!(state.selected_song(), None);
    assert_eq!(state.photo_count(), 0);

    let effects = state.apply(Action::ConfirmAttendance, &catalog);

    // Confirmed and celebrating immediately after the press.
    assert!(state.confirmed());
    assert!(state.effect_active());

    // Exactly one deep-link send and one scheduled window end.
    let sends = effects.iter().filter(|e| **e == Effect::SendRsvp).count();
    assert_eq!(sends, 1);
    let epoch = state.effect_epoch();
    assert!(effects.contains(&Effect::ScheduleEffectEnd { epoch }));

    // The deep link carries the configured number and the encoded message.
    let url = config.rsvp.chat_url();
    assert!(url.starts_with("viber://chat?"));
    assert!(url.contains("number=+959977123546"));
    assert!(url.contains("text=Hey%20Happy%20Birthday%20babe%21"));

    // When the scheduled timer fires, the effect window closes; the RSVP
    // itself stays confirmed.
    state.apply(Action::EffectElapsed { epoch }, &catalog);
    assert!(!state.effect_active());
    assert!(state.confirmed());
}

#[test]
fn song_scenario_selects_then_plays_on_second_press() {
    let config = Config::default();
    let catalog = config.catalog();
    assert_eq!(catalog.len(), 4);
    let mut state = State::new();

    let s2 = SongId::new(1);
    let effects = state.apply(Action::SelectSong(s2), &catalog);
    assert!(effects.is_empty());
    assert_eq!(state.selected_song(), Some(s2));

    let effects = state.apply(Action::SelectSong(s2), &catalog);
    assert_eq!(effects, vec![Effect::OpenSongLink(s2)]);
    assert_eq!(state.selected_song(), Some(s2));

    let song = catalog.get(s2).expect("catalog entry");
    assert_eq!(song.title, "Jack Johnson - Better Together");
}

#[test]
fn custom_event_file_drives_the_whole_flow() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("event.toml");

    let mut custom = Config::default();
    custom.rsvp.scheme = "whatsapp".to_string();
    custom.rsvp.number = "+15550001111".to_string();
    custom.songs.truncate(1);
    config::save_to_path(&custom, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    let catalog = loaded.catalog();
    assert_eq!(catalog.len(), 1);
    assert!(loaded.rsvp.chat_url().starts_with("whatsapp://chat?number=+15550001111"));

    let mut state = State::new();
    // Out-of-range ids from the default 4-song catalog are rejected by the
    // shorter custom one.
    assert!(state.apply(Action::SelectSong(SongId::new(3)), &catalog).is_empty());
    assert_eq!(state.selected_song(), None);
}

/// Scripted launcher recording attempt timestamps.
struct TimedLauncher {
    script: Mutex<Vec<std::io::Result<()>>>,
    attempts: Mutex<Vec<Instant>>,
}

impl Launcher for TimedLauncher {
    fn open(&self, _url: &str) -> std::io::Result<()> {
        self.attempts.lock().unwrap().push(Instant::now());
        self.script.lock().unwrap().remove(0)
    }
}

#[tokio::test]
async fn fallback_navigation_waits_out_the_grace_period() {
    let launcher = TimedLauncher {
        script: Mutex::new(vec![Err(std::io::Error::other("no handler")), Ok(())]),
        attempts: Mutex::new(Vec::new()),
    };

    let report = open_with_fallback(&launcher, "viber://chat?number=+1").await;
    assert_eq!(report, LaunchReport::FallbackUsed);

    let attempts = launcher.attempts.lock().unwrap().clone();
    assert_eq!(attempts.len(), 2);
    // The retry happens only after the 500 ms grace period.
    assert!(attempts[1].duration_since(attempts[0]).as_millis() >= 500);
}
