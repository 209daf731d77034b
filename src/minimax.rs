use crate::Point;
use crate::board::Board;
use crate::error::GoError;
use crate::stone::Stone;

/// Sub-search depth used to score each top-level candidate in
/// [`next_best_move`].
pub const DEFAULT_DEPTH: u32 = 2;

/// Capture-count difference: positive favors White, negative favors Black.
/// White is the maximizing side throughout this module.
pub fn evaluate(board: &Board) -> i32 {
    board.captures(Stone::White) as i32 - board.captures(Stone::Black) as i32
}

/// A side is out of the game when it has no legal placement left.
pub fn game_is_over(board: &Board, stone: Stone) -> bool {
    board.legal_moves(stone).is_empty()
}

fn side(maximizing: bool) -> Stone {
    if maximizing { Stone::White } else { Stone::Black }
}

/// Depth-limited minimax with alpha-beta pruning over the live board.
///
/// Each candidate is applied, searched one ply deeper with the roles
/// swapped, and undone, so the board is bit-identical to its pre-call state
/// when this returns. The cutoff never changes the returned value relative
/// to an unpruned search at the same depth.
pub fn minimax(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> Result<i32, GoError> {
    if depth == 0 || game_is_over(board, side(maximizing)) {
        return Ok(evaluate(board));
    }

    let stone = side(maximizing);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for point in board.legal_moves(stone) {
        board.place(point, stone)?;
        let result = minimax(board, depth - 1, !maximizing, alpha, beta);
        board.undo()?;
        let score = result?;

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    Ok(best)
}

/// Pick the strongest placement for the given side, scoring every candidate
/// with a fresh full-width window at `depth`. The first candidate scanned
/// wins ties; `None` means the side has no legal move and should pass.
pub fn next_best_move(
    board: &mut Board,
    maximizing: bool,
    depth: u32,
) -> Result<Option<Point>, GoError> {
    let stone = side(maximizing);
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for point in board.legal_moves(stone) {
        board.place(point, stone)?;
        let result = minimax(board, depth, !maximizing, i32::MIN, i32::MAX);
        board.undo()?;
        let score = result?;

        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if best_move.is_none() || better {
            best_score = score;
            best_move = Some(point);
        }
    }

    if let Some(point) = best_move {
        tracing::debug!("minimax picked {:?} for {} (score {})", point, stone, best_score);
    }
    Ok(best_move)
}
