//! Mood media: asset resolution, the frame-animation player, and the
//! per-mood player cache.

mod assets;
mod cache;
mod player;

pub use assets::{AssetBundle, MediaError, ANIMATION_EXT, STILL_EXT};
pub use cache::MediaCache;
pub use player::{PlaybackEvent, PlaybackStatus, Player};
