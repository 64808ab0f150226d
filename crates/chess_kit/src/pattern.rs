//! Movement geometries.
//!
//! A [`PatternRule`] pairs a set of direction templates with the
//! requirements every candidate step must satisfy. Rules are plain `const`
//! data; [`crate::path::PathGenerator`] turns them into concrete paths.

use crate::requirement::Requirement;
use crate::types::{CastleSide, Color};

/// One of the two opposite directions a ray expands into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inertia {
    Positive,
    Negative,
}

impl Inertia {
    pub const BOTH: [Inertia; 2] = [Inertia::Positive, Inertia::Negative];

    pub fn sign(self) -> i32 {
        match self {
            Inertia::Positive => 1,
            Inertia::Negative => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    /// Single jump by `(dx, dy)`.
    Offset(i32, i32),
    /// Single jump with `dy` measured toward the mover's side of advance
    /// (pawn geometry); mirrored for Black.
    Forward(i32, i32),
    /// Unbounded repetition of `(dx, dy)` in both inertias.
    Ray(i32, i32),
}

impl Template {
    /// Concrete step vectors for `color`, each paired with whether it repeats.
    pub fn directions(self, color: Color) -> Vec<((i32, i32), bool)> {
        match self {
            Template::Offset(dx, dy) => vec![((dx, dy), false)],
            Template::Forward(dx, dy) => vec![((dx, dy * color.forward()), false)],
            Template::Ray(dx, dy) => Inertia::BOTH
                .iter()
                .map(|i| ((dx * i.sign(), dy * i.sign()), true))
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternRule {
    pub name: &'static str,
    pub templates: &'static [Template],
    pub requirements: &'static [Requirement],
}

const STEP: &[Requirement] = &[Requirement::InsideBoard, Requirement::NoFriendlyCapture];

const SLIDE: &[Requirement] = &[
    Requirement::InsideBoard,
    Requirement::NoFriendlyCapture,
    Requirement::OriginNotAlreadyCaptured,
];

pub const ORTHOGONAL: &[Template] = &[Template::Ray(0, 1), Template::Ray(1, 0)];
pub const DIAGONAL: &[Template] = &[Template::Ray(1, 1), Template::Ray(1, -1)];
pub const ADJACENT: &[Template] = &[
    Template::Offset(0, 1),
    Template::Offset(1, 1),
    Template::Offset(1, 0),
    Template::Offset(1, -1),
    Template::Offset(0, -1),
    Template::Offset(-1, -1),
    Template::Offset(-1, 0),
    Template::Offset(-1, 1),
];
pub const L_SHAPES: &[Template] = &[
    Template::Offset(1, 2),
    Template::Offset(2, 1),
    Template::Offset(2, -1),
    Template::Offset(1, -2),
    Template::Offset(-1, -2),
    Template::Offset(-2, -1),
    Template::Offset(-2, 1),
    Template::Offset(-1, 2),
];

pub const PAWN_ADVANCE: PatternRule = PatternRule {
    name: "pawn advance",
    templates: &[Template::Forward(0, 1)],
    requirements: &[Requirement::InsideBoard, Requirement::TargetEmpty],
};

pub const PAWN_RUSH: PatternRule = PatternRule {
    name: "pawn rush",
    templates: &[Template::Forward(0, 2)],
    requirements: &[
        Requirement::InsideBoard,
        Requirement::OriginPieceUnmoved,
        Requirement::EmptyBetween,
        Requirement::TargetEmpty,
    ],
};

pub const PAWN_CAPTURE: PatternRule = PatternRule {
    name: "pawn capture",
    templates: &[Template::Forward(-1, 1), Template::Forward(1, 1)],
    requirements: &[Requirement::InsideBoard, Requirement::TargetIsEnemy],
};

pub const PAWN_EN_PASSANT: PatternRule = PatternRule {
    name: "en passant",
    templates: &[Template::Forward(-1, 1), Template::Forward(1, 1)],
    requirements: &[
        Requirement::InsideBoard,
        Requirement::TargetEmpty,
        Requirement::TargetIsFlankKill,
    ],
};

pub const KNIGHT_JUMP: PatternRule = PatternRule {
    name: "knight jump",
    templates: L_SHAPES,
    requirements: STEP,
};

pub const BISHOP_SLIDE: PatternRule = PatternRule {
    name: "bishop slide",
    templates: DIAGONAL,
    requirements: SLIDE,
};

pub const ROOK_SLIDE: PatternRule = PatternRule {
    name: "rook slide",
    templates: ORTHOGONAL,
    requirements: SLIDE,
};

pub const QUEEN_SLIDE: PatternRule = PatternRule {
    name: "queen slide",
    templates: &[
        Template::Ray(0, 1),
        Template::Ray(1, 0),
        Template::Ray(1, 1),
        Template::Ray(1, -1),
    ],
    requirements: SLIDE,
};

pub const KING_STEP: PatternRule = PatternRule {
    name: "king step",
    templates: ADJACENT,
    requirements: STEP,
};

pub const CASTLE_KING_SIDE: PatternRule = PatternRule {
    name: "castle king side",
    templates: &[Template::Offset(2, 0)],
    requirements: &[
        Requirement::InsideBoard,
        Requirement::OriginPieceUnmoved,
        Requirement::CastlingRookUnmoved(CastleSide::King),
        Requirement::EmptyBetweenKingAndRook(CastleSide::King),
        Requirement::CastlingPathSafe,
    ],
};

pub const CASTLE_QUEEN_SIDE: PatternRule = PatternRule {
    name: "castle queen side",
    templates: &[Template::Offset(-2, 0)],
    requirements: &[
        Requirement::InsideBoard,
        Requirement::OriginPieceUnmoved,
        Requirement::CastlingRookUnmoved(CastleSide::Queen),
        Requirement::EmptyBetweenKingAndRook(CastleSide::Queen),
        Requirement::CastlingPathSafe,
    ],
};
