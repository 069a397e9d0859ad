//! Splash screen timing

use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::config::Timings;

/// How the splash screen ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderExit {
    AnimationComplete,
    MinimumElapsed,
}

/// Holds the splash screen for at most its minimum display time
#[derive(Clone, Copy, Debug)]
pub struct Preloader {
    min_display: Duration,
}

impl Preloader {
    pub fn new(timings: &Timings) -> Self {
        Self {
            min_display: timings.preloader_min(),
        }
    }

    pub fn min_display(&self) -> Duration {
        self.min_display
    }

    /// Complete on whichever comes first: the animation or the timer
    pub async fn wait<F>(&self, animation_done: F) -> PreloaderExit
    where
        F: Future<Output = ()>,
    {
        let exit = tokio::select! {
            _ = animation_done => PreloaderExit::AnimationComplete,
            _ = tokio::time::sleep(self.min_display) => PreloaderExit::MinimumElapsed,
        };
        debug!(?exit, "preloader finished");
        exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_ends_splash_when_animation_hangs() {
        let preloader = Preloader::new(&Timings::default());
        let start = tokio::time::Instant::now();
        let exit = preloader.wait(std::future::pending()).await;
        assert_eq!(exit, PreloaderExit::MinimumElapsed);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_animation_can_finish_first() {
        let preloader = Preloader::new(&Timings::default());
        let exit = preloader
            .wait(tokio::time::sleep(Duration::from_millis(500)))
            .await;
        assert_eq!(exit, PreloaderExit::AnimationComplete);
    }
}
