//! Scoring module - compare a submitted placement against the target layout
//!
//! Notes:
//! - Every layout cell counts towards `total`; an empty cell is simply wrong.
//! - Accuracy is `correct / total` as a percentage, rounded half up.
//! - Cells are compared by color id, not by block id: any block of the
//!   expected color is correct.

use crate::layout::LayoutEntry;
use crate::types::{CellIndex, Color, Difficulty, GameMode};

/// A block sitting on a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedBlock {
    pub position: CellIndex,
    pub block_id: usize,
    pub color: Color,
}

/// Per-cell comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellResult {
    pub position: CellIndex,
    pub expected: Color,
    pub actual: Option<Color>,
    pub is_correct: bool,
}

/// Scorer output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
    /// 0-100
    pub accuracy: u8,
    pub is_perfect: bool,
    pub cells: Vec<CellResult>,
}

/// Percentage of `correct` over `total`, rounded half up. Zero when `total == 0`.
pub fn accuracy_percent(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((200 * correct + total) / (2 * total)) as u8
}

/// Score `placed` against `layout`.
pub fn score(layout: &[LayoutEntry], placed: &[PlacedBlock]) -> ScoreSummary {
    let cells: Vec<CellResult> = layout
        .iter()
        .map(|entry| {
            let actual = placed
                .iter()
                .find(|p| p.position == entry.position)
                .map(|p| p.color);
            CellResult {
                position: entry.position,
                expected: entry.color,
                actual,
                is_correct: actual.map_or(false, |c| c.id == entry.color.id),
            }
        })
        .collect();

    let correct = cells.iter().filter(|c| c.is_correct).count();
    let total = layout.len();

    ScoreSummary {
        correct,
        total,
        accuracy: accuracy_percent(correct, total),
        is_perfect: correct == total,
        cells,
    }
}

/// Immutable summary of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub correct: usize,
    pub total: usize,
    pub accuracy: u8,
    pub is_perfect: bool,
    pub time_spent_seconds: u32,
    pub difficulty: Option<Difficulty>,
    pub mode: GameMode,
    pub level: u32,
    pub cells: Vec<CellResult>,
}

impl RoundResult {
    pub fn new(
        summary: ScoreSummary,
        time_spent_seconds: u32,
        difficulty: Option<Difficulty>,
        mode: GameMode,
        level: u32,
    ) -> Self {
        Self {
            correct: summary.correct,
            total: summary.total,
            accuracy: summary.accuracy,
            is_perfect: summary.is_perfect,
            time_spent_seconds,
            difficulty,
            mode,
            level,
            cells: summary.cells,
        }
    }

    /// A perfect challenge round unlocks the next level.
    pub fn can_continue(&self) -> bool {
        self.mode == GameMode::Challenge && self.is_perfect
    }

    pub fn evaluation(&self) -> Evaluation {
        Evaluation::rate(self.accuracy, self.time_spent_seconds)
    }
}

/// Result-screen verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluation {
    Lightning,
    Master,
    AllCorrect,
    Great,
    Fair,
    KeepPracticing,
}

impl Evaluation {
    pub fn rate(accuracy: u8, time_spent_seconds: u32) -> Self {
        match accuracy {
            100 if time_spent_seconds <= 10 => Evaluation::Lightning,
            100 if time_spent_seconds <= 20 => Evaluation::Master,
            100 => Evaluation::AllCorrect,
            80..=99 => Evaluation::Great,
            50..=79 => Evaluation::Fair,
            _ => Evaluation::KeepPracticing,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Evaluation::Lightning => "Perfect! Lightning fast!",
            Evaluation::Master => "Amazing! Memory master!",
            Evaluation::AllCorrect => "All correct! Well done!",
            Evaluation::Great => "Very good! Keep it up!",
            Evaluation::Fair => "Not bad, try again!",
            Evaluation::KeepPracticing => "Don't give up, keep practicing!",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Evaluation::Lightning => "⚡",
            Evaluation::Master => "🌟",
            Evaluation::AllCorrect => "✨",
            Evaluation::Great => "👍",
            Evaluation::Fair => "💪",
            Evaluation::KeepPracticing => "🤗",
        }
    }
}

/// `m:ss` from one minute up, `Ns` below.
pub fn format_time(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    if mins > 0 {
        format!("{}:{:02}", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PALETTE;

    fn layout_of(colors: &[usize]) -> Vec<LayoutEntry> {
        colors
            .iter()
            .enumerate()
            .map(|(position, &c)| LayoutEntry {
                position,
                color: PALETTE[c],
            })
            .collect()
    }

    fn as_placed(layout: &[LayoutEntry]) -> Vec<PlacedBlock> {
        layout
            .iter()
            .map(|e| PlacedBlock {
                position: e.position,
                block_id: e.position,
                color: e.color,
            })
            .collect()
    }

    #[test]
    fn test_perfect_placement() {
        let layout = layout_of(&[0, 1, 2, 0]);
        let summary = score(&layout, &as_placed(&layout));
        assert_eq!(summary.correct, 4);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.accuracy, 100);
        assert!(summary.is_perfect);
        assert!(summary.cells.iter().all(|c| c.is_correct));
    }

    #[test]
    fn test_empty_placement() {
        let layout = layout_of(&[0, 1, 2, 0]);
        let summary = score(&layout, &[]);
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.accuracy, 0);
        assert!(!summary.is_perfect);
        assert!(summary.cells.iter().all(|c| c.actual.is_none()));
    }

    #[test]
    fn test_same_color_from_other_cell_counts() {
        // Cells 0 and 3 share a color; swapping their blocks is still correct.
        let layout = layout_of(&[0, 1, 2, 0]);
        let mut placed = as_placed(&layout);
        placed[0].block_id = 3;
        placed[3].block_id = 0;
        assert!(score(&layout, &placed).is_perfect);
    }

    #[test]
    fn test_partial_placement_rounding() {
        let layout = layout_of(&[0, 1, 2]);
        let placed = as_placed(&layout[..1]);
        let summary = score(&layout, &placed);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.accuracy, 33);

        let placed = as_placed(&layout[..2]);
        assert_eq!(score(&layout, &placed).accuracy, 67);
    }

    #[test]
    fn test_wrong_color() {
        let layout = layout_of(&[0, 1]);
        let placed = [PlacedBlock {
            position: 0,
            block_id: 1,
            color: PALETTE[1],
        }];
        let summary = score(&layout, &placed);
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.cells[0].actual, Some(PALETTE[1]));
        assert_eq!(summary.cells[0].expected, PALETTE[0]);
    }

    #[test]
    fn test_accuracy_percent_half_up() {
        assert_eq!(accuracy_percent(1, 8), 13); // 12.5
        assert_eq!(accuracy_percent(5, 8), 63); // 62.5
        assert_eq!(accuracy_percent(0, 0), 0);
        assert_eq!(accuracy_percent(9, 9), 100);
    }

    #[test]
    fn test_evaluation_tiers() {
        assert_eq!(Evaluation::rate(100, 10), Evaluation::Lightning);
        assert_eq!(Evaluation::rate(100, 11), Evaluation::Master);
        assert_eq!(Evaluation::rate(100, 21), Evaluation::AllCorrect);
        assert_eq!(Evaluation::rate(80, 1), Evaluation::Great);
        assert_eq!(Evaluation::rate(50, 1), Evaluation::Fair);
        assert_eq!(Evaluation::rate(49, 1), Evaluation::KeepPracticing);
    }

    #[test]
    fn test_can_continue() {
        let layout = layout_of(&[0]);
        let perfect = score(&layout, &as_placed(&layout));
        let result = RoundResult::new(perfect.clone(), 3, None, GameMode::Challenge, 4);
        assert!(result.can_continue());
        let normal = RoundResult::new(perfect, 3, Some(Difficulty::Easy), GameMode::Normal, 1);
        assert!(!normal.can_continue());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0s");
        assert_eq!(format_time(59), "59s");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(125), "2:05");
    }
}
