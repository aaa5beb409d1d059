use clueboard_core::GameConfig;
use serde::Deserialize;

use crate::*;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    game: GameConfig,
}

/// Reads a game configuration from TOML.
///
/// Everything lives under an optional `[game]` table; omitted keys keep their standard values.
///
/// ```toml
/// [game]
/// categories = 4
/// clues_per_category = 3
/// max_offset = 200
/// ```
pub fn load_config(text: &str) -> Result<GameConfig> {
    let file: ConfigFile = toml::from_str(text)?;
    file.game.validate()?;
    log::debug!("Loaded game config {:?}", file.game);
    Ok(file.game)
}
