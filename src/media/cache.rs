//! Lazily-created mapping from mood to its player handle.

use std::collections::HashMap;
use std::time::Duration;

use tracing::warn;

use crate::moods::Mood;

use super::assets::{AssetBundle, MediaError};
use super::player::Player;

/// Owns every player it creates; handles live until the cache is dropped at
/// process teardown, never force-closed in between.
///
/// The first resolution for a mood loads that mood's animation and builds a
/// player; later resolutions return the same handle. A failed resolution is
/// remembered so a missing asset is logged once and the mood stays
/// selectable-but-silent.
#[derive(Debug)]
pub struct MediaCache {
    bundle: AssetBundle,
    frame_interval: Duration,
    players: HashMap<Mood, Player>,
    stills: HashMap<Mood, String>,
    failed: HashMap<Mood, String>,
}

impl MediaCache {
    pub fn new(bundle: AssetBundle, frame_interval: Duration) -> Self {
        MediaCache {
            bundle,
            frame_interval,
            players: HashMap::new(),
            stills: HashMap::new(),
            failed: HashMap::new(),
        }
    }

    /// Player handle for `mood`, constructing it on first use.
    pub fn resolve_player(&mut self, mood: Mood) -> Result<&mut Player, MediaError> {
        if !self.players.contains_key(&mood) && !self.failed.contains_key(&mood) {
            match self.bundle.load_animation(mood) {
                Ok(frames) => {
                    self.players
                        .insert(mood, Player::new(frames, self.frame_interval));
                }
                Err(e) => {
                    warn!(mood = mood.name(), error = %e, "mood animation unavailable");
                    self.failed.insert(mood, e.to_string());
                    return Err(e);
                }
            }
        }
        match self.players.get_mut(&mood) {
            Some(player) => Ok(player),
            None => Err(MediaError::Unavailable {
                mood: mood.name(),
                reason: self.failed[&mood].clone(),
            }),
        }
    }

    /// Already-resolved player, without constructing one.
    pub fn player(&self, mood: Mood) -> Option<&Player> {
        self.players.get(&mood)
    }

    pub fn player_mut(&mut self, mood: Mood) -> Option<&mut Player> {
        self.players.get_mut(&mood)
    }

    /// Cached still art for `mood`, loading it on first use. `None` when the
    /// still asset is missing — callers fall back to a text placeholder.
    pub fn still(&mut self, mood: Mood) -> Option<&str> {
        if !self.stills.contains_key(&mood) {
            match self.bundle.load_still(mood) {
                Ok(art) => {
                    self.stills.insert(mood, art);
                }
                Err(e) => {
                    warn!(mood = mood.name(), error = %e, "mood still unavailable");
                    return None;
                }
            }
        }
        self.stills.get(&mood).map(String::as_str)
    }

    /// Why `mood` has no player, if resolution failed earlier.
    pub fn failure(&self, mood: Mood) -> Option<&str> {
        self.failed.get(&mood).map(String::as_str)
    }

    /// Pause every resolved player. Used when the playback surface leaves
    /// the screen.
    pub fn pause_all(&mut self) {
        for player in self.players.values_mut() {
            player.pause();
        }
    }

    /// True if any resolved player is currently playing.
    pub fn any_playing(&self) -> bool {
        self.players.values().any(|p| p.is_playing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn bundled_cache() -> MediaCache {
        let bundle = AssetBundle::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
        MediaCache::new(bundle, INTERVAL)
    }

    fn empty_cache() -> MediaCache {
        let bundle = AssetBundle::new("/nonexistent/moodtop-test-bundle");
        MediaCache::new(bundle, INTERVAL)
    }

    #[test]
    fn test_resolve_player_constructs_once_and_reuses() {
        let mut cache = bundled_cache();
        assert!(cache.player(Mood::Happy).is_none());

        {
            let player = cache.resolve_player(Mood::Happy).unwrap();
            player.play();
        }
        // Second resolution returns the same (still playing) handle.
        let player = cache.resolve_player(Mood::Happy).unwrap();
        assert!(player.is_playing());
    }

    #[test]
    fn test_missing_asset_resolves_to_not_found_then_unavailable() {
        let mut cache = empty_cache();
        match cache.resolve_player(Mood::Happy) {
            Err(MediaError::AssetNotFound { .. }) => {}
            other => panic!("expected AssetNotFound, got {other:?}"),
        }
        // The failure is remembered; no second disk probe.
        match cache.resolve_player(Mood::Happy) {
            Err(MediaError::Unavailable { mood, .. }) => assert_eq!(mood, "happy"),
            other => panic!("expected Unavailable, got {other:?}"),
        }
        assert!(cache.failure(Mood::Happy).is_some());
        assert!(cache.player(Mood::Happy).is_none());
    }

    #[test]
    fn test_pause_all_pauses_every_resolved_player() {
        let mut cache = bundled_cache();
        cache.resolve_player(Mood::Happy).unwrap().play();
        cache.resolve_player(Mood::Sad).unwrap().play();
        assert!(cache.any_playing());

        cache.pause_all();
        assert!(!cache.any_playing());
        assert!(!cache.player(Mood::Happy).unwrap().is_playing());
        assert!(!cache.player(Mood::Sad).unwrap().is_playing());
    }

    #[test]
    fn test_still_is_cached_and_missing_still_is_none() {
        let mut cache = bundled_cache();
        assert!(cache.still(Mood::Angry).is_some());

        let mut missing = empty_cache();
        assert!(missing.still(Mood::Angry).is_none());
    }
}
