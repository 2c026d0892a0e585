//! Categorical distributions: language mix, intents, resolution outcomes

use crate::model::{
    Intent, IntentCount, IntentFrequency, Language, LanguageDistribution, LanguageShare,
    ResolutionBreakdown, ResolutionCategory, ResolutionEntry,
};
use crate::source::RandomSource;
use crate::BASELINE_DAILY_CALLS;

/// Popularity bounds per intent, inclusive
const INTENT_RANGES: [(Intent, i64, i64); 5] = [
    (Intent::BillInquiry, 800, 1200),
    (Intent::OutageStatus, 600, 900),
    (Intent::PaymentConfirmation, 400, 600),
    (Intent::ComplaintStatus, 300, 500),
    (Intent::NewConnection, 200, 400),
];

const RESOLUTION_RANGES: [(ResolutionCategory, i64, i64); 4] = [
    (ResolutionCategory::AiResolved, 3000, 4000),
    (ResolutionCategory::HumanEscalation, 800, 1200),
    (ResolutionCategory::Abandoned, 100, 200),
    (ResolutionCategory::Transferred, 50, 150),
];

impl LanguageDistribution {
    /// Build the mix from the Telugu and Hindi shares; English takes the rest
    pub fn from_shares(telugu_pct: f64, hindi_pct: f64) -> Self {
        let english_pct = 100.0 - telugu_pct - hindi_pct;
        let shares = [telugu_pct, hindi_pct, english_pct]
            .into_iter()
            .zip(Language::ALL)
            .map(|(percentage, language)| LanguageShare {
                language,
                percentage,
                calls: (f64::from(BASELINE_DAILY_CALLS) * percentage / 100.0).floor().max(0.0) as u32,
            })
            .collect();
        Self { shares }
    }
}

pub fn generate_language_distribution<R: RandomSource + ?Sized>(rng: &mut R) -> LanguageDistribution {
    let telugu = rng.uniform_float(52.0, 62.0);
    let hindi = rng.uniform_float(22.0, 30.0);
    LanguageDistribution::from_shares(telugu, hindi)
}

/// Sample the five tracked intents, ranked by count
pub fn generate_top_intents<R: RandomSource + ?Sized>(rng: &mut R) -> IntentFrequency {
    let mut intents: Vec<IntentCount> = INTENT_RANGES
        .iter()
        .map(|&(intent, low, high)| IntentCount {
            intent,
            count: rng.uniform_int(low, high) as u32,
        })
        .collect();
    // stable: ties keep catalogue order
    intents.sort_by(|a, b| b.count.cmp(&a.count));
    IntentFrequency { intents }
}

pub fn generate_resolution_breakdown<R: RandomSource + ?Sized>(rng: &mut R) -> ResolutionBreakdown {
    let entries = RESOLUTION_RANGES
        .iter()
        .map(|&(category, low, high)| ResolutionEntry {
            category,
            count: rng.uniform_int(low, high) as u32,
        })
        .collect();
    ResolutionBreakdown { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{seeded_rng, PinnedSource};

    #[test]
    fn test_fixed_shares() {
        let dist = LanguageDistribution::from_shares(55.0, 25.0);
        let english = dist.share(Language::English).unwrap();
        assert!((english.percentage - 20.0).abs() < 1e-9);

        let calls: Vec<u32> = dist.shares.iter().map(|s| s.calls).collect();
        assert_eq!(calls, vec![2475, 1125, 900]);
    }

    #[test]
    fn test_language_order() {
        let dist = generate_language_distribution(&mut PinnedSource::Low);
        let order: Vec<Language> = dist.shares.iter().map(|s| s.language).collect();
        assert_eq!(order, Language::ALL.to_vec());
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let mut rng = seeded_rng(Some(5));
        for _ in 0..500 {
            let dist = generate_language_distribution(&mut rng);
            assert!((dist.total_percentage() - 100.0).abs() < 1e-9);
            let english = dist.share(Language::English).unwrap().percentage;
            assert!((8.0..=26.0).contains(&english));
        }
    }

    #[test]
    fn test_intents_ranked_descending() {
        let mut rng = seeded_rng(Some(17));
        for _ in 0..200 {
            let intents = generate_top_intents(&mut rng);
            assert_eq!(intents.intents.len(), 5);
            assert!(intents.intents.windows(2).all(|w| w[0].count >= w[1].count));
        }
    }

    #[test]
    fn test_intents_at_bounds() {
        let low = generate_top_intents(&mut PinnedSource::Low);
        assert_eq!(low.intents[0], IntentCount { intent: Intent::BillInquiry, count: 800 });
        assert_eq!(low.intents[4], IntentCount { intent: Intent::NewConnection, count: 200 });
        assert_eq!(low.top(2).len(), 2);
        assert_eq!(low.top(10).len(), 5);
    }

    #[test]
    fn test_resolution_breakdown_bounds() {
        let high = generate_resolution_breakdown(&mut PinnedSource::High);
        assert_eq!(high.count(ResolutionCategory::AiResolved), 4000);
        assert_eq!(high.count(ResolutionCategory::Transferred), 150);
        assert_eq!(high.total(), 4000 + 1200 + 200 + 150);

        let low = generate_resolution_breakdown(&mut PinnedSource::Low);
        assert_eq!(low.total(), 3000 + 800 + 100 + 50);
    }
}
