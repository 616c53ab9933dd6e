//! Crossword and puzzle-set structures and their validators.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::content::validate_one_of;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

pub const DIFFICULTY_EASY: &str = "easy";
pub const DIFFICULTY_MEDIUM: &str = "medium";
pub const DIFFICULTY_HARD: &str = "hard";

/// All valid difficulty levels for crosswords and puzzle sets.
pub const VALID_DIFFICULTIES: &[&str] = &[DIFFICULTY_EASY, DIFFICULTY_MEDIUM, DIFFICULTY_HARD];

pub fn validate_difficulty(difficulty: &str) -> Result<(), CoreError> {
    validate_one_of("difficulty", difficulty, VALID_DIFFICULTIES)
}

// ---------------------------------------------------------------------------
// Crosswords
// ---------------------------------------------------------------------------

pub const DIRECTION_ACROSS: &str = "across";
pub const DIRECTION_DOWN: &str = "down";

pub const VALID_DIRECTIONS: &[&str] = &[DIRECTION_ACROSS, DIRECTION_DOWN];

pub const MIN_GRID_SIZE: i32 = 3;
pub const MAX_GRID_SIZE: i32 = 25;

/// One clue of a crossword. `row` / `col` are the 0-based start cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrosswordClue {
    pub number: i32,
    pub direction: String,
    pub row: i32,
    pub col: i32,
    pub clue: String,
    pub answer: String,
}

/// Validate a square grid dimension.
pub fn validate_grid_size(size: i32) -> Result<(), CoreError> {
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        return Err(CoreError::Validation(format!(
            "Grid size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {size}"
        )));
    }
    Ok(())
}

/// Validate every clue against a `grid_size` x `grid_size` grid.
///
/// Each answer must be letters only and fit inside the grid starting from
/// its cell in its direction. The pair (number, direction) must be unique.
pub fn validate_clues(grid_size: i32, clues: &[CrosswordClue]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();

    for clue in clues {
        let label = format!("Clue {} {}", clue.number, clue.direction);

        validate_one_of("clue direction", &clue.direction, VALID_DIRECTIONS)?;
        if clue.number < 1 {
            return Err(CoreError::Validation(format!(
                "{label}: number must be positive"
            )));
        }
        if !seen.insert((clue.number, clue.direction.as_str())) {
            return Err(CoreError::Validation(format!("{label}: duplicate clue")));
        }
        if clue.clue.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{label}: clue text must not be empty"
            )));
        }
        if clue.answer.is_empty() || !clue.answer.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::Validation(format!(
                "{label}: answer must contain letters only"
            )));
        }
        if clue.row < 0 || clue.col < 0 || clue.row >= grid_size || clue.col >= grid_size {
            return Err(CoreError::Validation(format!(
                "{label}: start cell ({}, {}) is outside the grid",
                clue.row, clue.col
            )));
        }

        let len = clue.answer.len() as i32;
        let start = if clue.direction == DIRECTION_ACROSS {
            clue.col
        } else {
            clue.row
        };
        if start + len > grid_size {
            return Err(CoreError::Validation(format!(
                "{label}: answer of length {len} does not fit in the grid"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Puzzle sets
// ---------------------------------------------------------------------------

/// Maximum number of options offered by one puzzle.
pub const MAX_OPTIONS: usize = 6;

/// A multiple-choice puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: i32,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Validate every puzzle in a set.
pub fn validate_puzzles(puzzles: &[Puzzle]) -> Result<(), CoreError> {
    for (i, puzzle) in puzzles.iter().enumerate() {
        let n = i + 1;
        if puzzle.question.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Puzzle {n}: question must not be empty"
            )));
        }
        if puzzle.options.len() < 2 || puzzle.options.len() > MAX_OPTIONS {
            return Err(CoreError::Validation(format!(
                "Puzzle {n}: must have between 2 and {MAX_OPTIONS} options"
            )));
        }
        if puzzle.options.iter().any(|o| o.trim().is_empty()) {
            return Err(CoreError::Validation(format!(
                "Puzzle {n}: options must not be empty"
            )));
        }
        if puzzle.answer_index < 0 || puzzle.answer_index as usize >= puzzle.options.len() {
            return Err(CoreError::Validation(format!(
                "Puzzle {n}: answer_index {} is out of range",
                puzzle.answer_index
            )));
        }
    }
    Ok(())
}
