//! Perft (performance test) for verifying the legality pipeline.
//!
//! Counts only agree with published tables up to depth 4 from the starting
//! position; deeper trees need castling, en passant and promotion.

use crate::board::Board;

/// Count the leaf nodes of the legal-move tree at the given depth.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = *board;
        if child.play(mv).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Perft with a per-move breakdown, as `(move, node_count)` pairs sorted by
/// move text.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = board
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let mut child = *board;
            let count = match child.play(mv) {
                Ok(_) if depth > 1 => perft(&child, depth - 1),
                Ok(_) => 1,
                Err(_) => 0,
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
