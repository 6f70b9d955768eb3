// SPDX-License-Identifier: MPL-2.0
//! Best-effort external URL opening.
//!
//! This module is the absorption boundary for every "app is not installed"
//! style failure: nothing here returns an error to the state machine. The
//! page never learns whether a message was actually delivered; the only
//! observable fact is whether the fallback navigation was needed.

use std::time::Duration;

/// Grace period before concluding the first open attempt did not take.
pub const FALLBACK_GRACE: Duration = Duration::from_millis(500);

/// What a best-effort open reported. Neither variant implies delivery;
/// `Opened` only means a handler accepted the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchReport {
    /// The first attempt handed the URL to a handler.
    Opened,
    /// The first attempt failed; the identical URL was retried once as a
    /// plain navigation after the grace period.
    FallbackUsed,
}

/// Single-attempt URL opening, swappable in tests.
pub trait Launcher {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Production launcher backed by the platform URL handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> std::io::Result<()> {
        webbrowser::open(url)
    }
}

/// Attempts `url`, waits out [`FALLBACK_GRACE`], and retries the identical
/// URL once if the first attempt failed to launch. The grace period is
/// sequenced strictly after the first attempt so the fallback decision
/// always reads that attempt's outcome.
pub async fn open_with_fallback<L: Launcher>(launcher: &L, url: &str) -> LaunchReport {
    let first = launcher.open(url);
    tokio::time::sleep(FALLBACK_GRACE).await;

    if first.is_ok() {
        return LaunchReport::Opened;
    }
    if let Err(err) = launcher.open(url) {
        // Silent degradation: the page shows nothing when the messaging
        // app is unavailable. Leave a trace for whoever is debugging.
        eprintln!("RSVP link could not be opened: {err}");
    }
    LaunchReport::FallbackUsed
}

/// Fire-and-forget open for song links and the directions link. A single
/// attempt is the entire contract; failures are absorbed here.
pub fn open_silently<L: Launcher>(launcher: &L, url: &str) {
    if let Err(err) = launcher.open(url) {
        eprintln!("Failed to open external link {url}: {err}");
    }
}

/// RSVP entry point used by the application update loop.
pub async fn send_rsvp(url: String) -> LaunchReport {
    open_with_fallback(&SystemLauncher, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Scripted launcher recording every attempt.
    struct FakeLauncher {
        results: Mutex<Vec<std::io::Result<()>>>,
        attempts: Mutex<Vec<String>>,
    }

    impl FakeLauncher {
        fn scripted(results: Vec<std::io::Result<()>>) -> Self {
            Self {
                results: Mutex::new(results),
                attempts: Mutex::new(Vec::new()),
            }
        }

        fn attempts(&self) -> Vec<String> {
            self.attempts.lock().unwrap().clone()
        }
    }

    impl Launcher for FakeLauncher {
        fn open(&self, url: &str) -> std::io::Result<()> {
            self.attempts.lock().unwrap().push(url.to_string());
            self.results
                .lock()
                .unwrap()
                .remove(0)
        }
    }

    fn unavailable() -> std::io::Result<()> {
        Err(std::io::Error::other("no handler"))
    }

    #[tokio::test]
    async fn successful_open_needs_no_fallback() {
        let launcher = FakeLauncher::scripted(vec![Ok(())]);
        let report = open_with_fallback(&launcher, "viber://chat?number=x").await;

        assert_eq!(report, LaunchReport::Opened);
        assert_eq!(launcher.attempts().len(), 1);
    }

    #[tokio::test]
    async fn failed_open_retries_identical_url_once() {
        let launcher = FakeLauncher::scripted(vec![unavailable(), Ok(())]);
        let report = open_with_fallback(&launcher, "viber://chat?number=x").await;

        assert_eq!(report, LaunchReport::FallbackUsed);
        assert_eq!(
            launcher.attempts(),
            vec!["viber://chat?number=x", "viber://chat?number=x"]
        );
    }

    #[tokio::test]
    async fn fallback_failure_is_absorbed() {
        let launcher = FakeLauncher::scripted(vec![unavailable(), unavailable()]);
        let report = open_with_fallback(&launcher, "viber://chat?number=x").await;

        assert_eq!(report, LaunchReport::FallbackUsed);
        assert_eq!(launcher.attempts().len(), 2);
    }

    #[test]
    fn open_silently_makes_exactly_one_attempt() {
        let launcher = FakeLauncher::scripted(vec![unavailable()]);
        open_silently(&launcher, "https://example.com/song");
        assert_eq!(launcher.attempts().len(), 1);
    }
}
