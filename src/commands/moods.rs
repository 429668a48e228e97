//! List the mood set and the bundle status of each mood's assets.

use anyhow::Result;

use crate::config::Config;
use crate::media::AssetBundle;
use crate::moods::Mood;

pub fn format_moods(bundle: &AssetBundle) -> String {
    let mut output = String::new();
    output.push_str(&format!("Asset bundle: {}\n\n", bundle.root().display()));
    output.push_str(&format!(
        "{:<3} {:<13} {:<6} {:<7} {:<9} animation\n",
        "#", "name", "label", "glyph", "still"
    ));
    output.push_str(&format!("{}\n", "─".repeat(52)));

    for (i, mood) in Mood::all().iter().enumerate() {
        let still = presence(bundle.still_path(*mood).exists());
        let animation = presence(bundle.animation_path(*mood).exists());
        output.push_str(&format!(
            "{:<3} {:<13} {:<6} {:<7} {:<9} {}\n",
            i + 1,
            mood.name(),
            mood.label(),
            mood.glyph(),
            still,
            animation,
        ));
    }
    output
}

fn presence(exists: bool) -> &'static str {
    if exists {
        "ok"
    } else {
        "missing"
    }
}

pub fn run(config: &Config) -> Result<()> {
    let bundle = AssetBundle::new(config.assets_dir.clone());
    print!("{}", format_moods(&bundle));
    Ok(())
}
