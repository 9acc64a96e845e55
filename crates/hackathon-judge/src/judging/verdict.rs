use super::config::{ConfigurationError, VerdictBand};
use super::domain::VerdictTier;

const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Contiguous verdict bands covering `[0, 100]`, sorted by lower bound.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictScale {
    bands: Vec<VerdictBand>,
}

impl VerdictScale {
    /// Sorts `bands` and checks that they tile `[0, 100]` once per tier, in tier order.
    pub fn new(mut bands: Vec<VerdictBand>) -> Result<Self, ConfigurationError> {
        if bands.len() != VerdictTier::ALL.len() {
            return Err(ConfigurationError::VerdictBands(format!(
                "expected {} bands, found {}",
                VerdictTier::ALL.len(),
                bands.len()
            )));
        }
        if bands.iter().any(|band| !band.min.is_finite() || !band.max.is_finite()) {
            return Err(ConfigurationError::VerdictBands(
                "band boundaries must be finite".to_string(),
            ));
        }

        bands.sort_by(|a, b| a.min.total_cmp(&b.min));

        for (band, tier) in bands.iter().zip(VerdictTier::ALL) {
            if band.tier != tier {
                return Err(ConfigurationError::VerdictBands(format!(
                    "band starting at {} is assigned {:?}, expected {:?}",
                    band.min, band.tier, tier
                )));
            }
            if band.min >= band.max {
                return Err(ConfigurationError::VerdictBands(format!(
                    "band for {:?} is empty or inverted",
                    band.tier
                )));
            }
        }

        if bands[0].min.abs() > BOUNDARY_TOLERANCE {
            return Err(ConfigurationError::VerdictBands(
                "lowest band must start at 0".to_string(),
            ));
        }
        if (bands[bands.len() - 1].max - 100.0).abs() > BOUNDARY_TOLERANCE {
            return Err(ConfigurationError::VerdictBands(
                "highest band must end at 100".to_string(),
            ));
        }
        for pair in bands.windows(2) {
            if (pair[0].max - pair[1].min).abs() > BOUNDARY_TOLERANCE {
                return Err(ConfigurationError::VerdictBands(format!(
                    "gap or overlap between {} and {}",
                    pair[0].max, pair[1].min
                )));
            }
        }

        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[VerdictBand] {
        &self.bands
    }

    /// Tier whose band contains `score`; out-of-range scores fall into the nearest end band.
    pub fn classify(&self, score: f64) -> VerdictTier {
        self.bands
            .iter()
            .rev()
            .find(|band| score >= band.min)
            .or_else(|| self.bands.first())
            .map(|band| band.tier)
            .unwrap_or(VerdictTier::NotReady)
    }

    /// Lower bound of the band assigned to `tier`.
    pub fn floor_of(&self, tier: VerdictTier) -> f64 {
        self.bands
            .iter()
            .find(|band| band.tier == tier)
            .map(|band| band.min)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judging::defaults::default_verdict_bands;

    #[test]
    fn band_edges_classify_upward() {
        let scale = VerdictScale::new(default_verdict_bands()).expect("default bands");
        assert_eq!(scale.classify(49.9), VerdictTier::NotReady);
        assert_eq!(scale.classify(50.0), VerdictTier::Average);
        assert_eq!(scale.classify(69.9), VerdictTier::Average);
        assert_eq!(scale.classify(70.0), VerdictTier::StrongContender);
        assert_eq!(scale.classify(84.9), VerdictTier::StrongContender);
        assert_eq!(scale.classify(85.0), VerdictTier::WinnerMaterial);
        assert_eq!(scale.classify(100.0), VerdictTier::WinnerMaterial);
        assert_eq!(scale.classify(0.0), VerdictTier::NotReady);
    }

    #[test]
    fn gaps_are_rejected() {
        let mut bands = default_verdict_bands();
        bands[1].max = 65.0;
        let error = VerdictScale::new(bands).expect_err("gap");
        assert!(matches!(error, ConfigurationError::VerdictBands(_)));
    }

    #[test]
    fn bands_may_arrive_unsorted() {
        let mut bands = default_verdict_bands();
        bands.reverse();
        let scale = VerdictScale::new(bands).expect("reordered bands");
        assert_eq!(scale.floor_of(VerdictTier::StrongContender), 70.0);
    }

    #[test]
    fn duplicate_tiers_are_rejected() {
        let mut bands = default_verdict_bands();
        bands[3].tier = VerdictTier::StrongContender;
        assert!(VerdictScale::new(bands).is_err());
    }
}
