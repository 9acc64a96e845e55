use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::round_to_tenth;
use super::domain::{Criterion, SubmissionId, VerdictTier};
use super::ScoreResult;

pub const DEFAULT_PODIUM_SIZE: usize = 3;

/// Ranked snapshot of one scored submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: SubmissionId,
    /// 1-based position; equal scores keep insertion order.
    pub rank: usize,
    pub podium: bool,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub entries: Vec<LeaderboardEntry>,
    pub explanation: Option<WinnerExplanation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginClass {
    Unopposed,
    Dominating,
    Convincing,
    Solid,
    Narrow,
}

impl MarginClass {
    pub fn of(margin: f64) -> Self {
        if margin >= 20.0 {
            MarginClass::Dominating
        } else if margin >= 10.0 {
            MarginClass::Convincing
        } else if margin >= 5.0 {
            MarginClass::Solid
        } else {
            MarginClass::Narrow
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MarginClass::Unopposed => "unopposed",
            MarginClass::Dominating => "dominating",
            MarginClass::Convincing => "convincing",
            MarginClass::Solid => "solid",
            MarginClass::Narrow => "narrow",
        }
    }
}

/// Per-criterion difference between two results, `first - second`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionGap {
    pub criterion: Criterion,
    pub first: f64,
    pub second: f64,
    pub gap: f64,
}

/// Why the top entry leads the runner-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerExplanation {
    pub leader: SubmissionId,
    pub runner_up: Option<SubmissionId>,
    pub margin: f64,
    pub margin_class: MarginClass,
    /// Up to three criteria where the leader is furthest ahead.
    pub advantages: Vec<CriterionGap>,
    pub fewer_deductions: bool,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub first: SubmissionId,
    pub second: SubmissionId,
    pub score_difference: f64,
    pub criteria: Vec<CriterionGap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardStatistics {
    pub total: usize,
    pub mean: f64,
    pub highest: f64,
    pub lowest: f64,
    pub range: f64,
    pub tier_counts: BTreeMap<VerdictTier, usize>,
}

#[derive(Debug, Clone)]
struct Slot {
    id: SubmissionId,
    sequence: u64,
    result: ScoreResult,
}

/// Ordered collection of scored submissions.
///
/// Every insertion re-sorts the whole board: final score descending, then
/// insertion sequence ascending.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    podium_size: usize,
    next_sequence: u64,
    slots: Vec<Slot>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::with_podium(DEFAULT_PODIUM_SIZE)
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_podium(podium_size: usize) -> Self {
        Self {
            podium_size,
            next_sequence: 0,
            slots: Vec::new(),
        }
    }

    /// Ranks `pairs` in one pass, treating their order as submission order.
    ///
    /// Every pair gets its own entry, including pairs that share an id.
    pub fn rank<I>(pairs: I, podium_size: usize) -> Standings
    where
        I: IntoIterator<Item = (SubmissionId, ScoreResult)>,
    {
        Self::from_pairs(pairs, podium_size).standings()
    }

    /// Builds a board holding every pair with a single sort.
    pub fn from_pairs<I>(pairs: I, podium_size: usize) -> Self
    where
        I: IntoIterator<Item = (SubmissionId, ScoreResult)>,
    {
        let slots: Vec<Slot> = pairs
            .into_iter()
            .zip(0u64..)
            .map(|((id, result), sequence)| Slot {
                id,
                sequence,
                result,
            })
            .collect();
        let mut board = Self {
            podium_size,
            next_sequence: slots.len() as u64,
            slots,
        };
        board.sort();
        board
    }

    /// Adds or replaces a result and returns its new rank.
    ///
    /// A replaced result keeps the sequence of the original insertion.
    pub fn insert(&mut self, id: SubmissionId, result: ScoreResult) -> usize {
        match self.slots.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => slot.result = result,
            None => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                self.slots.push(Slot {
                    id: id.clone(),
                    sequence,
                    result,
                });
            }
        }

        self.sort();
        self.rank_of(&id).unwrap_or(self.slots.len())
    }

    fn sort(&mut self) {
        self.slots.sort_by(|a, b| {
            b.result
                .final_score
                .total_cmp(&a.result.final_score)
                .then_with(|| a.sequence.cmp(&b.sequence))
        });
    }

    pub fn remove(&mut self, id: &SubmissionId) -> Option<ScoreResult> {
        let position = self.slots.iter().position(|slot| &slot.id == id)?;
        Some(self.slots.remove(position).result)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn rank_of(&self, id: &SubmissionId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| &slot.id == id)
            .map(|position| position + 1)
    }

    pub fn entries(&self) -> Vec<LeaderboardEntry> {
        self.top(self.slots.len())
    }

    pub fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        self.slots
            .iter()
            .take(n)
            .enumerate()
            .map(|(position, slot)| LeaderboardEntry {
                id: slot.id.clone(),
                rank: position + 1,
                podium: position < self.podium_size,
                result: slot.result.clone(),
            })
            .collect()
    }

    pub fn standings(&self) -> Standings {
        Standings {
            entries: self.entries(),
            explanation: self.explain_winner(),
        }
    }

    pub fn compare(&self, first: &SubmissionId, second: &SubmissionId) -> Option<HeadToHead> {
        let left = self.slots.iter().find(|slot| &slot.id == first)?;
        let right = self.slots.iter().find(|slot| &slot.id == second)?;

        Some(HeadToHead {
            first: left.id.clone(),
            second: right.id.clone(),
            score_difference: round_to_tenth(left.result.final_score - right.result.final_score),
            criteria: criterion_gaps(&left.result, &right.result),
        })
    }

    pub fn explain_winner(&self) -> Option<WinnerExplanation> {
        let leader = self.slots.first()?;
        let Some(runner_up) = self.slots.get(1) else {
            return Some(WinnerExplanation {
                leader: leader.id.clone(),
                runner_up: None,
                margin: 0.0,
                margin_class: MarginClass::Unopposed,
                advantages: Vec::new(),
                fewer_deductions: false,
                summary: format!(
                    "{} leads unopposed with {:.1}.",
                    leader.id, leader.result.final_score
                ),
            });
        };

        let margin = round_to_tenth(leader.result.final_score - runner_up.result.final_score);
        let margin_class = MarginClass::of(margin);

        let mut advantages: Vec<CriterionGap> = criterion_gaps(&leader.result, &runner_up.result)
            .into_iter()
            .filter(|gap| gap.gap > 0.0)
            .collect();
        advantages.sort_by(|a, b| b.gap.total_cmp(&a.gap));
        advantages.truncate(3);

        let fewer_deductions = leader.result.total_penalty < runner_up.result.total_penalty;

        let mut summary = format!(
            "{} leads {} by {:.1} points ({})",
            leader.id,
            runner_up.id,
            margin,
            margin_class.label()
        );
        if advantages.is_empty() {
            summary.push_str(" without a criterion-level edge.");
        } else {
            let labels: Vec<String> = advantages
                .iter()
                .map(|gap| format!("{} (+{:.1})", gap.criterion.label(), gap.gap))
                .collect();
            summary.push_str(&format!(", ahead on {}.", labels.join(", ")));
        }
        if fewer_deductions {
            summary.push_str(&format!(
                " It also lost fewer points to penalties ({:.1} vs {:.1}).",
                leader.result.total_penalty, runner_up.result.total_penalty
            ));
        }

        Some(WinnerExplanation {
            leader: leader.id.clone(),
            runner_up: Some(runner_up.id.clone()),
            margin,
            margin_class,
            advantages,
            fewer_deductions,
            summary,
        })
    }

    pub fn statistics(&self) -> LeaderboardStatistics {
        let mut tier_counts: BTreeMap<VerdictTier, usize> =
            VerdictTier::ALL.iter().map(|tier| (*tier, 0)).collect();
        for slot in &self.slots {
            *tier_counts.entry(slot.result.verdict).or_insert(0) += 1;
        }

        let scores: Vec<f64> = self
            .slots
            .iter()
            .map(|slot| slot.result.final_score)
            .collect();
        if scores.is_empty() {
            return LeaderboardStatistics {
                total: 0,
                mean: 0.0,
                highest: 0.0,
                lowest: 0.0,
                range: 0.0,
                tier_counts,
            };
        }

        let highest = scores.iter().copied().fold(f64::MIN, f64::max);
        let lowest = scores.iter().copied().fold(f64::MAX, f64::min);
        LeaderboardStatistics {
            total: scores.len(),
            mean: round_to_tenth(scores.iter().sum::<f64>() / scores.len() as f64),
            highest,
            lowest,
            range: round_to_tenth(highest - lowest),
            tier_counts,
        }
    }
}

fn criterion_gaps(first: &ScoreResult, second: &ScoreResult) -> Vec<CriterionGap> {
    first
        .criteria
        .iter()
        .filter_map(|left| {
            let right = second.criterion(left.criterion)?;
            Some(CriterionGap {
                criterion: left.criterion,
                first: left.score,
                second: right.score,
                gap: round_to_tenth(left.score - right.score),
            })
        })
        .collect()
}
