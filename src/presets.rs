//! Built-in mask catalog.
//!
//! Each preset carries its template rows and fixed mirror flags. When a
//! sprite is generated from a preset the catalog flags win over whatever the
//! caller configured; caller mirror flags only apply to raw masks.

use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::json;

use crate::error_codes::{CodedError, CODE_UNKNOWN_PRESET};
use crate::mask::Mask;

const SPACESHIP_ROWS: [&str; 12] = [
    "000000", "000011", "000013", "000113", "000113", "001113", "011122", "011122", "011122",
    "011113", "000111", "000000",
];

const DRAGON_ROWS: [&str; 12] = [
    "000000000000",
    "000011110000",
    "000112211000",
    "001112211100",
    "000011111110",
    "000000111110",
    "000000111110",
    "000011111110",
    "001111111100",
    "011111111000",
    "000111000000",
    "000000000000",
];

const ROBOT_ROWS: [&str; 11] = [
    "0000", "0111", "0122", "0012", "0002", "1112", "0112", "0002", "0002", "0112", "1100",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Spaceship,
    Dragon,
    Robot,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Spaceship, Preset::Dragon, Preset::Robot];

    /// Keyword lookup. Case-sensitive: preset names are exact identifiers,
    /// not user prose.
    pub fn from_keyword(value: &str) -> Result<Self> {
        match value {
            "spaceship" => Ok(Self::Spaceship),
            "dragon" => Ok(Self::Dragon),
            "robot" => Ok(Self::Robot),
            _ => Err(anyhow!(CodedError::usage(
                CODE_UNKNOWN_PRESET,
                format!("unknown preset '{value}'"),
            )
            .with_details(json!({
                "provided": value,
                "allowed": ["spaceship", "dragon", "robot"]
            })))),
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Spaceship => "spaceship",
            Self::Dragon => "dragon",
            Self::Robot => "robot",
        }
    }

    /// Fixed (mirror_x, mirror_y) flags baked into the catalog.
    pub fn mirror(self) -> (bool, bool) {
        match self {
            Self::Spaceship => (true, false),
            Self::Dragon => (false, false),
            Self::Robot => (true, false),
        }
    }

    fn rows(self) -> &'static [&'static str] {
        match self {
            Self::Spaceship => &SPACESHIP_ROWS,
            Self::Dragon => &DRAGON_ROWS,
            Self::Robot => &ROBOT_ROWS,
        }
    }

    /// Decode the template into a fresh mask.
    pub fn mask(self) -> Mask {
        Mask::from_static_rows(self.rows())
    }

    /// Template dimensions, pre-mirroring.
    pub fn mask_dimensions(self) -> (usize, usize) {
        let rows = self.rows();
        (rows[0].len(), rows.len())
    }

    /// Final sprite dimensions after the catalog mirror flags apply.
    pub fn sprite_dimensions(self) -> (usize, usize) {
        let (width, height) = self.mask_dimensions();
        let (mirror_x, mirror_y) = self.mirror();
        (
            width * if mirror_x { 2 } else { 1 },
            height * if mirror_y { 2 } else { 1 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Preset;
    use crate::error_codes::{find_coded_error, CODE_UNKNOWN_PRESET};
    use crate::mask::Mask;

    #[test]
    fn keywords_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(
                Preset::from_keyword(preset.keyword()).expect("keyword should resolve"),
                preset
            );
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let error = Preset::from_keyword("Robot").expect_err("capitalized keyword should miss");
        let coded = find_coded_error(&error).expect("error should carry a code");
        assert_eq!(coded.code, CODE_UNKNOWN_PRESET);
    }

    #[test]
    fn unknown_keyword_lists_allowed_values() {
        let error = Preset::from_keyword("slime").expect_err("unknown keyword should miss");
        let coded = find_coded_error(&error).expect("error should carry a code");
        let details = coded.details.as_ref().expect("details should be present");
        assert_eq!(details["provided"], "slime");
        assert!(details["allowed"].as_array().is_some());
    }

    #[test]
    fn catalog_masks_are_rectangular_and_parse_cleanly() {
        for preset in Preset::ALL {
            let rows = preset.rows();
            let parsed = Mask::parse(rows).expect("catalog rows should parse");
            assert_eq!(parsed, preset.mask());
            let (width, height) = preset.mask_dimensions();
            assert_eq!((parsed.width(), parsed.height()), (width, height));
        }
    }

    #[test]
    fn catalog_dimensions_match_the_templates() {
        assert_eq!(Preset::Spaceship.mask_dimensions(), (6, 12));
        assert_eq!(Preset::Dragon.mask_dimensions(), (12, 12));
        assert_eq!(Preset::Robot.mask_dimensions(), (4, 11));
        assert_eq!(Preset::Spaceship.sprite_dimensions(), (12, 12));
        assert_eq!(Preset::Dragon.sprite_dimensions(), (12, 12));
        assert_eq!(Preset::Robot.sprite_dimensions(), (8, 11));
    }
}
