pub mod board;
pub mod error;
pub mod history;
pub mod mcts;
pub mod minimax;
pub mod player;
pub mod score;
pub mod stone;

/// Board coordinate as (row, col). Validity is always checked against the
/// owning board's size, never a fixed constant.
pub type Point = (u8, u8);

pub use board::{Board, GameState};
pub use error::GoError;
pub use history::Record;
pub use player::Player;
pub use stone::Stone;
