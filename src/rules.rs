// =============================================================================
// Win detection
//
// A colour wins when any three of its circles form one of three shapes:
//
//   * row:      same row, column indices summing to a multiple of 3
//   * column:   same column, row indices summing to a multiple of 3
//   * diagonal: a contiguous 3-cell diagonal run in either orientation
//
// The modulo-3 test is the rule, not an approximation of adjacency. On a
// 4-wide row it accepts exactly the contiguous triples, but on a 5-high
// column it also accepts rows {0, 2, 4}.
//
// Shapes are tried in the order row, column, diagonal, and within a shape
// the triples are visited in lexicographic index order. The first match is
// reported.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinShape {
    Row,
    Column,
    Diagonal,
}

/// Three cells forming a win, kept for highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub shape: WinShape,
    pub cells: [Position; 3],
}

pub fn check_row_win(a: Position, b: Position, c: Position) -> bool {
    a.row == b.row && a.row == c.row && (a.col + b.col + c.col) % 3 == 0
}

pub fn check_col_win(a: Position, b: Position, c: Position) -> bool {
    a.col == b.col && a.col == c.col && (a.row + b.row + c.row) % 3 == 0
}

/// Every 3-element combination of `positions`, in lexicographic index order.
fn triples(positions: &[Position]) -> impl Iterator<Item = [Position; 3]> + '_ {
    let n = positions.len();
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| (j + 1..n).map(move |k| [positions[i], positions[j], positions[k]]))
    })
}

pub fn row_win(positions: &[Position]) -> Option<WinLine> {
    triples(positions)
        .find(|&[a, b, c]| check_row_win(a, b, c))
        .map(|cells| WinLine { shape: WinShape::Row, cells })
}

pub fn col_win(positions: &[Position]) -> Option<WinLine> {
    triples(positions)
        .find(|&[a, b, c]| check_col_win(a, b, c))
        .map(|cells| WinLine { shape: WinShape::Column, cells })
}

/// Look for a centre cell with both diagonal neighbours present, trying the
/// up-left/down-right pairing before up-right/down-left.
pub fn diag_win(positions: &[Position]) -> Option<WinLine> {
    let offset = |p: Position, dr: i32, dc: i32| Position::new(p.row + dr, p.col + dc);
    for &centre in positions {
        for &end in positions {
            for (dr, dc) in [(-1, -1), (-1, 1)] {
                if end != offset(centre, dr, dc) {
                    continue;
                }
                let opposite = offset(centre, -dr, -dc);
                if positions.contains(&opposite) {
                    return Some(WinLine {
                        shape: WinShape::Diagonal,
                        cells: [centre, end, opposite],
                    });
                }
            }
        }
    }
    None
}

pub fn find_win(positions: &[Position]) -> Option<WinLine> {
    row_win(positions)
        .or_else(|| col_win(positions))
        .or_else(|| diag_win(positions))
}

pub fn is_win(positions: &[Position]) -> bool {
    find_win(positions).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn row_win_requires_shared_row() {
        assert!(!check_row_win(p(0, 0), p(1, 1), p(2, 2)));
        assert!(check_row_win(p(1, 0), p(1, 1), p(1, 2)));
        assert!(check_row_win(p(3, 1), p(3, 2), p(3, 3)));
    }

    #[test]
    fn row_win_rejects_gapped_triples() {
        assert!(!check_row_win(p(0, 0), p(0, 1), p(0, 3)));
        assert!(!check_row_win(p(2, 0), p(2, 2), p(2, 3)));
    }

    #[test]
    fn col_win_cases() {
        assert!(!check_col_win(p(0, 0), p(1, 1), p(2, 2)));
        assert!(!check_col_win(p(0, 0), p(1, 0), p(3, 0)));
        assert!(check_col_win(p(0, 1), p(1, 1), p(2, 1)));
        assert!(check_col_win(p(1, 4), p(2, 4), p(3, 4)));
    }

    /// Rows 0, 2 and 4 sum to 6, so the modulo rule accepts them.
    #[test]
    fn col_win_accepts_alternating_rows() {
        assert!(check_col_win(p(0, 2), p(2, 2), p(4, 2)));
    }

    #[test]
    fn diagonal_down_right() {
        let positions = [p(0, 0), p(1, 1), p(2, 2), p(0, 1)];
        let line = diag_win(&positions).expect("diagonal present");
        assert_eq!(line.shape, WinShape::Diagonal);
        assert_eq!(line.cells, [p(1, 1), p(0, 0), p(2, 2)]);
    }

    #[test]
    fn diagonal_down_left() {
        let positions = [p(4, 0), p(3, 1), p(5, 0), p(2, 2)];
        let line = diag_win(&positions).expect("anti-diagonal present");
        assert_eq!(line.cells, [p(3, 1), p(2, 2), p(4, 0)]);
    }

    #[test]
    fn no_diagonal() {
        assert!(diag_win(&[p(0, 1), p(3, 2), p(2, 4), p(0, 0)]).is_none());
        assert!(diag_win(&[p(0, 1), p(5, 2), p(0, 3), p(0, 4)]).is_none());
    }

    #[test]
    fn is_win_examples() {
        assert!(is_win(&[p(0, 0), p(1, 1), p(2, 2), p(0, 1)]));
        assert!(is_win(&[p(1, 1), p(5, 4), p(1, 2), p(1, 3)]));
        assert!(is_win(&[p(4, 0), p(3, 1), p(3, 0), p(2, 0)]));
        assert!(!is_win(&[p(0, 1), p(5, 2), p(0, 3), p(0, 4)]));
        assert!(!is_win(&[p(0, 0), p(3, 0), p(0, 4), p(2, 2)]));
    }

    #[test]
    fn row_checked_before_column() {
        // Row 1 (cols 0..2) and column 0 (rows 0..2) both complete.
        let positions = [p(0, 0), p(1, 0), p(2, 0), p(1, 1), p(1, 2)];
        let line = find_win(&positions).unwrap();
        assert_eq!(line.shape, WinShape::Row);
        assert_eq!(line.cells, [p(1, 0), p(1, 1), p(1, 2)]);
    }

    #[test]
    fn triples_visit_lexicographic_combinations() {
        let positions = [p(0, 0), p(0, 1), p(0, 2), p(0, 3)];
        let seen: Vec<[Position; 3]> = triples(&positions).collect();
        assert_eq!(
            seen,
            vec![
                [p(0, 0), p(0, 1), p(0, 2)],
                [p(0, 0), p(0, 1), p(0, 3)],
                [p(0, 0), p(0, 2), p(0, 3)],
                [p(0, 1), p(0, 2), p(0, 3)],
            ]
        );
    }

    #[test]
    fn fewer_than_three_positions_never_win() {
        assert!(!is_win(&[p(0, 0), p(1, 1)]));
        assert!(!is_win(&[]));
    }
}
