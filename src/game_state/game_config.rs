//! Per-game settings.
//!
//! Every field has a default, so a JSON document only needs the keys it
//! changes: `{"variant": "960", "seed": 7}`.

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::InsufficientMaterialRules;
use crate::game_state::chess_types::Variant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub variant: Variant,
    /// Seed for the 960 back-rank draw. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub same_color_bishops_draw: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Standard,
            seed: None,
            same_color_bishops_draw: false,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> ChessResult<Self> {
        serde_json::from_str(text).map_err(|err| ChessErrors::InvalidConfig(err.to_string()))
    }

    pub fn insufficient_material_rules(&self) -> InsufficientMaterialRules {
        InsufficientMaterialRules {
            same_color_bishops_draw: self.same_color_bishops_draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Variant;

    #[test]
    fn missing_keys_take_defaults() {
        let config = GameConfig::from_json(r#"{"seed": 42}"#).expect("config should parse");
        assert_eq!(
            config,
            GameConfig {
                seed: Some(42),
                ..GameConfig::default()
            }
        );
    }

    #[test]
    fn variant_ids_and_aliases_are_accepted() {
        for (text, variant) in [
            (r#"{"variant": "standard"}"#, Variant::Standard),
            (r#"{"variant": "std"}"#, Variant::Standard),
            (r#"{"variant": "960"}"#, Variant::Chess960),
        ] {
            let config = GameConfig::from_json(text).expect("config should parse");
            assert_eq!(config.variant, variant, "{text}");
        }
    }

    #[test]
    fn bad_documents_are_config_errors() {
        for text in [r#"{"variant": "crazyhouse"}"#, r#"{"sead": 1}"#, "not json"] {
            assert!(
                matches!(GameConfig::from_json(text), Err(ChessErrors::InvalidConfig(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn bishop_rule_follows_the_flag() {
        let config = GameConfig {
            same_color_bishops_draw: true,
            ..GameConfig::default()
        };
        assert!(config.insufficient_material_rules().same_color_bishops_draw);
        assert!(!GameConfig::default().insufficient_material_rules().same_color_bishops_draw);
    }
}
