//! Expansion of pattern rules into destination paths.
//!
//! A path is the ordered list of squares reachable by walking one direction
//! of one template, nearest first. Fixed offsets yield paths of length one.

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::pattern::PatternRule;
use crate::requirement::{Requirement, Step};
use crate::types::Color;

pub type Path = Vec<Coordinate>;

pub struct PathGenerator<'a> {
    board: &'a Board,
}

impl<'a> PathGenerator<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Non-empty paths of `rule` rooted at `root` for a `color` piece.
    pub fn paths(&self, rule: &PatternRule, root: Coordinate, color: Color) -> Vec<Path> {
        let mut out = Vec::new();
        for template in rule.templates {
            for ((dx, dy), repeats) in template.directions(color) {
                let path = self.walk(rule, root, color, (dx, dy), repeats);
                if !path.is_empty() {
                    out.push(path);
                }
            }
        }
        out
    }

    /// Concatenated paths of several rules, in rule order.
    pub fn paths_for_rules(
        &self,
        rules: &[PatternRule],
        root: Coordinate,
        color: Color,
    ) -> Vec<Path> {
        rules
            .iter()
            .flat_map(|rule| self.paths(rule, root, color))
            .collect()
    }

    fn walk(
        &self,
        rule: &PatternRule,
        root: Coordinate,
        color: Color,
        (dx, dy): (i32, i32),
        repeats: bool,
    ) -> Path {
        let mut path = Vec::new();
        let mut current = root;
        loop {
            let target = current.offset(dx, dy);
            // rays never leave the board, whatever the rule asks for
            if !self.board.contains(target) {
                break;
            }
            let step = Step {
                color,
                root,
                origin: current,
                target,
            };
            if !Requirement::all(rule.requirements, step, self.board) {
                break;
            }
            path.push(target);
            if !repeats {
                break;
            }
            current = target;
        }
        path
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod path_tests;
