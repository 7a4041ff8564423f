/// High-score persistence — a small JSON file holding the ten best scores.
///
/// All failures here are recoverable by design: a missing or corrupt file
/// reads as an empty board, and a failed write is logged and skipped so a
/// read-only home directory never interrupts play.

use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

const MAX_ENTRIES: usize = 10;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct ScoreBoard {
    scores: Vec<u32>,
}

#[derive(Debug)]
pub struct HighScores {
    path: PathBuf,
    board: ScoreBoard,
}

/// `$HOME/.garden_snake_scores.json`, falling back to the current directory.
pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".garden_snake_scores.json")
}

impl HighScores {
    /// Read the board from `path`.  Absence or malformed content is treated
    /// as "no scores yet", never an error.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let board = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<ScoreBoard>(&text) {
                Ok(board) => board,
                Err(err) => {
                    warn!("score file {} is malformed ({err}), starting fresh", path.display());
                    ScoreBoard::default()
                }
            },
            Err(_) => ScoreBoard::default(),
        };
        let mut scores = Self { path, board };
        scores.board.scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.board.scores.truncate(MAX_ENTRIES);
        scores
    }

    /// The best recorded score, 0 when the board is empty.
    pub fn best(&self) -> u32 {
        self.board.scores.first().copied().unwrap_or(0)
    }

    /// The board, best first.
    pub fn all(&self) -> &[u32] {
        &self.board.scores
    }

    /// Record a finished session's score.  Returns true when it is a new
    /// overall best.  The file is only rewritten when the board changed.
    pub fn record(&mut self, score: u32) -> bool {
        let new_best = score > self.best();
        let qualifies = score > 0
            && (self.board.scores.len() < MAX_ENTRIES
                || self.board.scores.last().is_some_and(|&low| score > low));
        if qualifies {
            self.board.scores.push(score);
            self.board.scores.sort_unstable_by(|a, b| b.cmp(a));
            self.board.scores.truncate(MAX_ENTRIES);
            self.save();
        }
        new_best
    }

    fn save(&self) {
        let text = match serde_json::to_string(&self.board) {
            Ok(text) => text,
            Err(err) => {
                warn!("could not serialize score board: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, text) {
            warn!("could not write score file {}: {err}", self.path.display());
        }
    }
}
