//! The closed set of selectable moods.
//!
//! Every per-mood lookup (label, glyph, asset stem, accent color) is an
//! exhaustive match, so an unrecognized mood cannot exist at runtime.

use ratatui::style::Color;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Anxious,
    Angry,
    Sad,
    Scared,
    Embarrassed,
}

impl Mood {
    pub fn all() -> [Mood; 6] {
        [
            Mood::Happy,
            Mood::Anxious,
            Mood::Angry,
            Mood::Sad,
            Mood::Scared,
            Mood::Embarrassed,
        ]
    }

    /// Stable machine name, used by the CLI and in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Sad => "sad",
            Mood::Scared => "scared",
            Mood::Embarrassed => "embarrassed",
        }
    }

    /// Display label shown in the picker strip.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "开心",
            Mood::Anxious => "焦虑",
            Mood::Angry => "生气",
            Mood::Sad => "难过",
            Mood::Scared => "害怕",
            Mood::Embarrassed => "尴尬",
        }
    }

    /// Single-cell indicator used in the strip and on calendar days.
    pub fn glyph(&self) -> &'static str {
        match self {
            Mood::Happy => "😄",
            Mood::Anxious => "😰",
            Mood::Angry => "😡",
            Mood::Sad => "😢",
            Mood::Scared => "😨",
            Mood::Embarrassed => "😳",
        }
    }

    /// Bundle file stem. The still is `<stem>.txt`, the looping animation
    /// `<stem>.anim` (see `media::assets`).
    pub fn asset_stem(&self) -> &'static str {
        match self {
            Mood::Happy => "1开心",
            Mood::Anxious => "2焦虑",
            Mood::Angry => "3生气",
            Mood::Sad => "4难过",
            Mood::Scared => "5害怕",
            Mood::Embarrassed => "6尴尬",
        }
    }

    pub fn accent(&self) -> Color {
        match self {
            Mood::Happy => Color::Rgb(255, 161, 26),
            Mood::Anxious => Color::Rgb(111, 168, 220),
            Mood::Angry => Color::Rgb(224, 62, 45),
            Mood::Sad => Color::Rgb(97, 114, 185),
            Mood::Scared => Color::Rgb(142, 124, 195),
            Mood::Embarrassed => Color::Rgb(230, 126, 153),
        }
    }

    pub fn index(&self) -> usize {
        Mood::all().iter().position(|m| m == self).expect("mood is in all()")
    }

    pub fn from_index(index: usize) -> Option<Mood> {
        Mood::all().get(index).copied()
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Mood::all()
            .into_iter()
            .find(|m| m.name() == needle || m.label() == s.trim())
            .ok_or_else(|| format!("unknown mood '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_mood_once() {
        let all = Mood::all();
        assert_eq!(all.len(), 6);
        for (i, mood) in all.iter().enumerate() {
            assert_eq!(mood.index(), i);
            assert_eq!(Mood::from_index(i), Some(*mood));
        }
        assert_eq!(Mood::from_index(6), None);
    }

    #[test]
    fn test_asset_stems_are_unique() {
        let mut stems: Vec<_> = Mood::all().iter().map(|m| m.asset_stem()).collect();
        stems.sort();
        stems.dedup();
        assert_eq!(stems.len(), 6);
    }

    #[test]
    fn test_from_str_accepts_name_and_label() {
        assert_eq!("happy".parse::<Mood>(), Ok(Mood::Happy));
        assert_eq!("  Anxious ".parse::<Mood>(), Ok(Mood::Anxious));
        assert_eq!("难过".parse::<Mood>(), Ok(Mood::Sad));
        assert!("joyful".parse::<Mood>().is_err());
    }

    #[test]
    fn test_display_uses_machine_name() {
        assert_eq!(Mood::Embarrassed.to_string(), "embarrassed");
    }
}
