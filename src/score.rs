use crate::Point;
use crate::board::Board;
use crate::stone::Stone;

/// Simplified scoring: `(black, white)`.
///
/// Every maximal 4-connected empty region is flood-filled; a region counts
/// for a side only when every stone bordering it belongs to that side.
/// Each side's total is its credited territory plus twice its capture
/// count. Deliberately approximate: dead stones are not resolved and no
/// komi is applied.
pub fn calculate_score(board: &Board) -> (u32, u32) {
    let size = board.size();
    let cells = size as usize * size as usize;
    let idx = |(row, col): Point| row as usize * size as usize + col as usize;

    let mut visited = vec![false; cells];
    let mut black: u32 = 0;
    let mut white: u32 = 0;

    for row in 0..size {
        for col in 0..size {
            let start = (row, col);
            if visited[idx(start)] || board.stone_at(start).is_some() {
                continue;
            }

            // Flood-fill this empty region, noting which colors border it.
            let mut region: u32 = 0;
            let mut borders_black = false;
            let mut borders_white = false;
            let mut stack = vec![start];

            while let Some(p) = stack.pop() {
                let pi = idx(p);
                if visited[pi] {
                    continue;
                }
                visited[pi] = true;
                region += 1;

                for n in board.neighbors(p) {
                    match board.stone_at(n) {
                        Some(Stone::Black) => borders_black = true,
                        Some(Stone::White) => borders_white = true,
                        None => {
                            if !visited[idx(n)] {
                                stack.push(n);
                            }
                        }
                    }
                }
            }

            if borders_black && !borders_white {
                black += region;
            } else if borders_white && !borders_black {
                white += region;
            }
        }
    }

    black += 2 * board.captures(Stone::Black);
    white += 2 * board.captures(Stone::White);
    (black, white)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test helper: build a board from an ASCII layout.
    /// 'B' = Black, 'W' = White, '+' = Empty.
    fn board_from_layout(layout: &[&str]) -> Board {
        let rows: Vec<Vec<i8>> = layout
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'B' => Stone::Black.to_int(),
                        'W' => Stone::White.to_int(),
                        _ => 0,
                    })
                    .collect()
            })
            .collect();
        Board::from_rows(rows)
    }

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::with_size(9);
        assert_eq!(calculate_score(&board), (0, 0));
    }

    #[test]
    fn region_bordering_only_black_counts_for_black() {
        // Black wall on column 2: the two left columns (10 cells) are Black's;
        // the right side is open but also only borders Black.
        let board = board_from_layout(&[
            "++B++",
            "++B++",
            "++B++",
            "++B++",
            "++B++",
        ]);
        assert_eq!(calculate_score(&board), (20, 0));
    }

    #[test]
    fn split_board_credits_both_sides() {
        let board = board_from_layout(&[
            "+B+W+",
            "+B+W+",
            "+B+W+",
            "+B+W+",
            "+B+W+",
        ]);
        // Left column is Black's, right column is White's; the middle
        // column borders both and counts for neither.
        assert_eq!(calculate_score(&board), (5, 5));
    }

    #[test]
    fn mixed_border_region_counts_for_neither() {
        let board = board_from_layout(&[
            "B+W",
            "+++",
            "+++",
        ]);
        assert_eq!(calculate_score(&board), (0, 0));
    }

    #[test]
    fn captures_count_double() {
        let mut board = Board::with_size(9);
        // Black captures the lone white stone in the corner.
        board.place((0, 0), Stone::White).unwrap();
        board.place((0, 1), Stone::Black).unwrap();
        board.place((1, 0), Stone::Black).unwrap();
        assert_eq!(board.captures(Stone::Black), 1);

        let (black, white) = calculate_score(&board);
        // Territory: the whole empty area touches only Black (79 cells),
        // plus 2 x 1 capture.
        assert_eq!(black, 79 + 2);
        assert_eq!(white, 0);
    }

    #[test]
    fn board_method_delegates() {
        let board = board_from_layout(&[
            "++B++",
            "++B++",
            "++B++",
            "++B++",
            "++B++",
        ]);
        assert_eq!(board.calculate_score(), calculate_score(&board));
    }

    #[test]
    fn enclosed_eye_counts_even_when_surrounded() {
        let board = board_from_layout(&[
            "BBB",
            "B+B",
            "BBB",
        ]);
        assert_eq!(calculate_score(&board), (1, 0));
    }
}
