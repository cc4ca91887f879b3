use serde::{Serialize, Deserialize};

use crate::config::game::{GUIDE_ICON, HAZARD_ICON};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

/// Accepted direction tokens, lowercase, mapped many-to-one onto the four
/// cardinal directions. Indonesian words plus single-letter codes.
pub const DIRECTION_TOKENS: [(&str, Direction); 11] = [
    ("utara", Direction::North),
    ("u", Direction::North),
    ("n", Direction::North),
    ("selatan", Direction::South),
    ("s", Direction::South),
    ("barat", Direction::West),
    ("b", Direction::West),
    ("w", Direction::West),
    ("timur", Direction::East),
    ("t", Direction::East),
    ("e", Direction::East),
];

impl Direction {
    /// Resolve a user-supplied token (case-insensitive) to a direction.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.to_lowercase();
        DIRECTION_TOKENS
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, dir)| *dir)
    }

    /// Grid delta for this direction. The y axis grows southward.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::East => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterKind {
    Guide,
    Hazard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub kind: CharacterKind,
    pub message: String,
}

impl Character {
    pub fn new(name: &str, kind: CharacterKind, message: String) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            message,
        }
    }

    /// ASCII face shown when this character is encountered.
    pub const fn icon(&self) -> &'static str {
        match self.kind {
            CharacterKind::Guide => GUIDE_ICON,
            CharacterKind::Hazard => HAZARD_ICON,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub character: Option<Character>,
}

impl Room {
    pub const fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            character: None,
        }
    }

    pub const fn coords(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words_and_letters() {
        assert_eq!(Direction::parse("utara"), Some(Direction::North));
        assert_eq!(Direction::parse("n"), Some(Direction::North));
        assert_eq!(Direction::parse("u"), Some(Direction::North));
        assert_eq!(Direction::parse("selatan"), Some(Direction::South));
        assert_eq!(Direction::parse("s"), Some(Direction::South));
        assert_eq!(Direction::parse("barat"), Some(Direction::West));
        assert_eq!(Direction::parse("w"), Some(Direction::West));
        assert_eq!(Direction::parse("timur"), Some(Direction::East));
        assert_eq!(Direction::parse("e"), Some(Direction::East));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Direction::parse("UTARA"), Some(Direction::North));
        assert_eq!(Direction::parse("Timur"), Some(Direction::East));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert_eq!(Direction::parse("atas"), None);
        assert_eq!(Direction::parse(""), None);
        assert_eq!(Direction::parse("north"), None);
    }

    #[test]
    fn test_synonyms_share_one_delta() {
        for token in ["utara", "u", "n"] {
            let dir = Direction::parse(token).expect("token should resolve");
            assert_eq!(dir.delta(), (0, -1));
        }
        for token in ["timur", "t", "e"] {
            let dir = Direction::parse(token).expect("token should resolve");
            assert_eq!(dir.delta(), (1, 0));
        }
    }

    #[test]
    fn test_character_icons() {
        let guide = Character::new("Pak Joko", CharacterKind::Guide, String::new());
        let hazard = Character::new("Bayangan", CharacterKind::Hazard, String::new());
        assert_eq!(guide.icon(), "(^_^)");
        assert_eq!(hazard.icon(), "(~_~)");
    }
}
