use serde::{Deserialize, Serialize};

use super::criteria::CriterionResult;
use super::penalties::PenaltyRecord;

/// Scores produced by combining weighted sub-scores with penalties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Σ sub-score × weight before penalties.
    pub weighted_score: f64,
    /// Sum of penalty deductions after the overall cap.
    pub total_penalty: f64,
    pub final_score: f64,
}

pub fn aggregate(
    criteria: &[CriterionResult],
    penalties: &[PenaltyRecord],
    penalty_cap: f64,
) -> Totals {
    let weighted_score: f64 = criteria
        .iter()
        .map(|result| result.score * result.weight)
        .sum();
    let total_penalty = penalties
        .iter()
        .map(|record| record.deduction)
        .sum::<f64>()
        .min(penalty_cap);
    let final_score = (weighted_score - total_penalty).clamp(0.0, 100.0);

    Totals {
        weighted_score: round_to_tenth(weighted_score),
        total_penalty: round_to_tenth(total_penalty),
        final_score: round_to_tenth(final_score),
    }
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judging::criteria::ScoreBand;
    use crate::judging::domain::{Criterion, PenaltyCategory};

    fn criterion(criterion: Criterion, score: f64, weight: f64) -> CriterionResult {
        CriterionResult {
            criterion,
            name: criterion.label().to_string(),
            score,
            weight,
            band: ScoreBand::Adequate,
            rationale: String::new(),
            findings: Vec::new(),
        }
    }

    #[test]
    fn penalties_come_off_the_weighted_sum() {
        let criteria = vec![
            criterion(Criterion::Innovation, 80.0, 0.5),
            criterion(Criterion::Impact, 60.0, 0.5),
        ];
        let penalties = vec![PenaltyRecord {
            category: PenaltyCategory::Vagueness,
            count: 4,
            deduction: 4.5,
        }];

        let totals = aggregate(&criteria, &penalties, 30.0);
        assert_eq!(totals.weighted_score, 70.0);
        assert_eq!(totals.total_penalty, 4.5);
        assert_eq!(totals.final_score, 65.5);
    }

    #[test]
    fn final_score_never_drops_below_zero() {
        let criteria = vec![criterion(Criterion::Innovation, 10.0, 1.0)];
        let penalties = vec![
            PenaltyRecord {
                category: PenaltyCategory::Buzzword,
                count: 20,
                deduction: 15.0,
            },
            PenaltyRecord {
                category: PenaltyCategory::Overclaim,
                count: 8,
                deduction: 15.0,
            },
            PenaltyRecord {
                category: PenaltyCategory::Vagueness,
                count: 9,
                deduction: 10.0,
            },
        ];

        let totals = aggregate(&criteria, &penalties, 30.0);
        assert_eq!(totals.total_penalty, 30.0);
        assert_eq!(totals.final_score, 0.0);
    }
}
