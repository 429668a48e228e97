//! Frame-animation transport.
//!
//! The underlying "media" is a sequence of text frames stepped by the UI
//! tick. The transport has no native loop: when the cursor steps past the
//! last frame it parks there, pauses, and reports `ReachedEnd` — the main
//! loop seeks back to the start and resumes, same as the original's
//! played-to-end observer.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    ReachedEnd,
}

#[derive(Debug)]
pub struct Player {
    frames: Vec<String>,
    cursor: usize,
    status: PlaybackStatus,
    frame_interval: Duration,
    last_step: Option<Instant>,
}

impl Player {
    /// `frames` must be non-empty (the bundle loader guarantees it).
    pub fn new(frames: Vec<String>, frame_interval: Duration) -> Self {
        debug_assert!(!frames.is_empty());
        Player {
            frames,
            cursor: 0,
            status: PlaybackStatus::Paused,
            frame_interval,
            last_step: None,
        }
    }

    pub fn play(&mut self) {
        self.status = PlaybackStatus::Playing;
        // Timing restarts from the next tick, not from whenever we paused.
        self.last_step = None;
    }

    pub fn pause(&mut self) {
        self.status = PlaybackStatus::Paused;
    }

    pub fn seek_to_start(&mut self) {
        self.cursor = 0;
        self.last_step = None;
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn current_frame(&self) -> &str {
        &self.frames[self.cursor]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_cursor(&self) -> usize {
        self.cursor
    }

    /// Step the transport forward to `now`. Returns `ReachedEnd` when the
    /// cursor has just stepped past the final frame; the transport is then
    /// parked on the last frame, paused, until someone seeks and resumes.
    pub fn advance(&mut self, now: Instant) -> Option<PlaybackEvent> {
        if self.status != PlaybackStatus::Playing {
            return None;
        }
        let last_step = match self.last_step {
            Some(t) => t,
            None => {
                self.last_step = Some(now);
                return None;
            }
        };

        let mut elapsed = now.saturating_duration_since(last_step);
        let mut stepped = false;
        while elapsed >= self.frame_interval {
            elapsed -= self.frame_interval;
            stepped = true;
            if self.cursor + 1 < self.frames.len() {
                self.cursor += 1;
            } else {
                self.status = PlaybackStatus::Paused;
                self.last_step = None;
                return Some(PlaybackEvent::ReachedEnd);
            }
        }
        if stepped {
            self.last_step = Some(now - elapsed);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn player(n: usize) -> Player {
        let frames = (0..n).map(|i| format!("frame{i}")).collect();
        Player::new(frames, INTERVAL)
    }

    #[test]
    fn test_new_player_is_paused_at_first_frame() {
        let p = player(3);
        assert_eq!(p.status(), PlaybackStatus::Paused);
        assert_eq!(p.current_frame(), "frame0");
        assert_eq!(p.frame_count(), 3);
    }

    #[test]
    fn test_advance_does_nothing_while_paused() {
        let mut p = player(3);
        let t0 = Instant::now();
        assert_eq!(p.advance(t0 + INTERVAL * 10), None);
        assert_eq!(p.current_frame(), "frame0");
    }

    #[test]
    fn test_advance_steps_one_frame_per_interval() {
        let mut p = player(4);
        p.play();
        let t0 = Instant::now();
        p.advance(t0);
        assert_eq!(p.current_frame(), "frame0");
        p.advance(t0 + INTERVAL);
        assert_eq!(p.current_frame(), "frame1");
        p.advance(t0 + INTERVAL * 2);
        assert_eq!(p.current_frame(), "frame2");
    }

    #[test]
    fn test_advance_catches_up_over_a_long_gap() {
        let mut p = player(4);
        p.play();
        let t0 = Instant::now();
        p.advance(t0);
        p.advance(t0 + INTERVAL * 3);
        assert_eq!(p.current_frame(), "frame3");
    }

    #[test]
    fn test_reached_end_parks_and_pauses() {
        let mut p = player(2);
        p.play();
        let t0 = Instant::now();
        p.advance(t0);
        assert_eq!(p.advance(t0 + INTERVAL), None); // frame0 -> frame1
        let event = p.advance(t0 + INTERVAL * 2);
        assert_eq!(event, Some(PlaybackEvent::ReachedEnd));
        assert_eq!(p.status(), PlaybackStatus::Paused);
        assert_eq!(p.current_frame(), "frame1");
    }

    #[test]
    fn test_manual_loop_seek_and_resume() {
        let mut p = player(2);
        p.play();
        let t0 = Instant::now();
        p.advance(t0);
        p.advance(t0 + INTERVAL);
        assert_eq!(p.advance(t0 + INTERVAL * 2), Some(PlaybackEvent::ReachedEnd));

        // What the played-to-end handler does.
        p.seek_to_start();
        p.play();
        assert_eq!(p.current_frame(), "frame0");
        assert!(p.is_playing());

        let t1 = t0 + INTERVAL * 3;
        p.advance(t1);
        p.advance(t1 + INTERVAL);
        assert_eq!(p.current_frame(), "frame1");
    }

    #[test]
    fn test_pause_freezes_cursor_and_resume_restarts_timing() {
        let mut p = player(4);
        p.play();
        let t0 = Instant::now();
        p.advance(t0);
        p.advance(t0 + INTERVAL);
        assert_eq!(p.frame_cursor(), 1);

        p.pause();
        assert_eq!(p.advance(t0 + INTERVAL * 50), None);
        assert_eq!(p.frame_cursor(), 1);

        // A long pause must not burn through frames on resume.
        p.play();
        let t1 = t0 + INTERVAL * 100;
        p.advance(t1);
        assert_eq!(p.frame_cursor(), 1);
        p.advance(t1 + INTERVAL);
        assert_eq!(p.frame_cursor(), 2);
    }

    #[test]
    fn test_single_frame_animation_reaches_end_immediately() {
        let mut p = player(1);
        p.play();
        let t0 = Instant::now();
        p.advance(t0);
        assert_eq!(p.advance(t0 + INTERVAL), Some(PlaybackEvent::ReachedEnd));
        assert_eq!(p.current_frame(), "frame0");
    }
}
