use serde::{Deserialize, Serialize};

use crate::stone::Stone;

/// A participant: display name, fixed stone color, and the running count of
/// opponent stones this side has captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    stone: Stone,
    captures: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, stone: Stone) -> Self {
        Player {
            name: name.into(),
            stone,
            captures: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }

    pub fn captures(&self) -> u32 {
        self.captures
    }

    pub(crate) fn add_captures(&mut self, count: u32) {
        self.captures += count;
    }

    pub(crate) fn set_captures(&mut self, count: u32) {
        self.captures = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_zero_captures() {
        let player = Player::new("Black Player", Stone::Black);
        assert_eq!(player.name(), "Black Player");
        assert_eq!(player.stone(), Stone::Black);
        assert_eq!(player.captures(), 0);
    }

    #[test]
    fn capture_count_accumulates() {
        let mut player = Player::new("White Player", Stone::White);
        player.add_captures(2);
        player.add_captures(1);
        assert_eq!(player.captures(), 3);

        player.set_captures(2);
        assert_eq!(player.captures(), 2);
    }
}
