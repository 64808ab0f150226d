use crate::coordinate::Coordinate;
use crate::game::Game;
use crate::movement::promotion_rank;
use crate::types::PieceKind;

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Legal moves of the side to move with each promotion choice spelled out.
pub fn expanded_moves(game: &Game) -> Vec<(Coordinate, Coordinate, Option<PieceKind>)> {
    let board = game.board();
    let mut out = Vec::new();
    for (from, to) in game.legal_moves() {
        let promotes = board.get(from).is_some_and(|p| {
            p.kind == PieceKind::Pawn && to.y == promotion_rank(board, p.color)
        });
        if promotes {
            out.extend(PROMOTIONS.iter().map(|&k| (from, to, Some(k))));
        } else {
            out.push((from, to, None));
        }
    }
    out
}

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(game: &Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = expanded_moves(game);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for (from, to, promotion) in moves {
        let mut next = game.clone();
        if next.play(from, to, promotion).is_ok() {
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}
