//! Asset bundle lookup by naming convention.
//!
//! Each mood contributes two files under the bundle root, named by the
//! mood's stem: a still (`<stem>.txt`) shown when playback is unavailable,
//! and a looping animation (`<stem>.anim`) — text frames separated by lines
//! containing a single `%`, the terminal stand-in for the original video
//! asset.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::moods::Mood;

pub const STILL_EXT: &str = "txt";
pub const ANIMATION_EXT: &str = "anim";

/// Frame delimiter inside `.anim` files.
const FRAME_SEPARATOR: &str = "%";

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("media asset not found: {path}")]
    AssetNotFound { path: PathBuf },
    #[error("failed to read media asset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("animation {path} contains no frames")]
    EmptyAnimation { path: PathBuf },
    #[error("playback unavailable for {mood}: {reason}")]
    Unavailable { mood: &'static str, reason: String },
}

/// Read-only view over the on-disk asset bundle.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    root: PathBuf,
}

impl AssetBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AssetBundle { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn still_path(&self, mood: Mood) -> PathBuf {
        self.root
            .join(format!("{}.{}", mood.asset_stem(), STILL_EXT))
    }

    pub fn animation_path(&self, mood: Mood) -> PathBuf {
        self.root
            .join(format!("{}.{}", mood.asset_stem(), ANIMATION_EXT))
    }

    pub fn load_still(&self, mood: Mood) -> Result<String, MediaError> {
        read_asset(&self.still_path(mood))
    }

    pub fn load_animation(&self, mood: Mood) -> Result<Vec<String>, MediaError> {
        let path = self.animation_path(mood);
        let text = read_asset(&path)?;
        let frames = parse_frames(&text);
        if frames.is_empty() {
            return Err(MediaError::EmptyAnimation { path });
        }
        Ok(frames)
    }
}

fn read_asset(path: &Path) -> Result<String, MediaError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            MediaError::AssetNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MediaError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Split an animation file into frames on `%` delimiter lines. Blank frames
/// are dropped; trailing newlines inside a frame are trimmed so frames align
/// when drawn.
fn parse_frames(text: &str) -> Vec<String> {
    text.split(&format!("\n{FRAME_SEPARATOR}\n"))
        .map(|frame| frame.trim_matches('\n').trim_end().to_string())
        .filter(|frame| !frame.is_empty())
        .collect()
}
