use std::io::{self, Write};

use crate::config::NarrativeConfig;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Comparison {
    Above,
    Below,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SuggestionTier {
    High,
    Moderate,
    Low,
}

impl Comparison {
    pub fn message(self) -> &'static str {
        match self {
            Comparison::Above => "You are above the average carbon emissions.",
            Comparison::Below => "You are below the average carbon emissions.",
        }
    }
}

impl SuggestionTier {
    pub fn message(self) -> &'static str {
        match self {
            SuggestionTier::High => {
                "Consider reducing your carbon footprint by using public transportation or biking."
            }
            SuggestionTier::Moderate => {
                "Consider reducing meat consumption or switching to renewable energy sources."
            }
            SuggestionTier::Low => "Great job! Keep maintaining a low carbon footprint.",
        }
    }
}

/// Equal to the average counts as below.
pub fn compare_with_average(total: f64, average: f64) -> Comparison {
    if total > average {
        Comparison::Above
    } else {
        Comparison::Below
    }
}

pub fn suggestion_tier(total: f64, cfg: &NarrativeConfig) -> SuggestionTier {
    if total > cfg.high_threshold {
        SuggestionTier::High
    } else if total > cfg.moderate_threshold {
        SuggestionTier::Moderate
    } else {
        SuggestionTier::Low
    }
}

/// Average line, comparison verdict, then one suggestion.
pub fn narrate(total: f64, cfg: &NarrativeConfig) -> Vec<String> {
    vec![
        format!(
            "Average annual emissions per person: {:.2} kg CO2",
            cfg.average_kg
        ),
        compare_with_average(total, cfg.average_kg).message().to_string(),
        suggestion_tier(total, cfg).message().to_string(),
    ]
}

pub fn write_narrative<W: Write>(mut writer: W, total: f64, cfg: &NarrativeConfig) -> io::Result<()> {
    writeln!(writer)?;
    for line in narrate(total, cfg) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_total_is_above_average_with_first_tier_advice() {
        let cfg = NarrativeConfig::default();
        let lines = narrate(25.0, &cfg);
        assert_eq!(lines[0], "Average annual emissions per person: 16.20 kg CO2");
        assert_eq!(lines[1], "You are above the average carbon emissions.");
        assert_eq!(lines[2], SuggestionTier::High.message());
    }

    #[test]
    fn tiers_follow_thresholds() {
        let cfg = NarrativeConfig::default();
        assert_eq!(suggestion_tier(20.5, &cfg), SuggestionTier::High);
        assert_eq!(suggestion_tier(20.0, &cfg), SuggestionTier::Moderate);
        assert_eq!(suggestion_tier(10.5, &cfg), SuggestionTier::Moderate);
        assert_eq!(suggestion_tier(10.0, &cfg), SuggestionTier::Low);
        assert_eq!(suggestion_tier(0.0, &cfg), SuggestionTier::Low);
    }

    #[test]
    fn comparison_boundary_is_below() {
        assert_eq!(compare_with_average(16.2, 16.2), Comparison::Below);
        assert_eq!(compare_with_average(16.21, 16.2), Comparison::Above);
        assert_eq!(compare_with_average(3.1, 16.2), Comparison::Below);
    }

    #[test]
    fn moderate_total_below_average() {
        let cfg = NarrativeConfig::default();
        let lines = narrate(12.0, &cfg);
        assert_eq!(lines[1], Comparison::Below.message());
        assert_eq!(lines[2], SuggestionTier::Moderate.message());
    }

    #[test]
    fn custom_average_is_reported() {
        let cfg = NarrativeConfig {
            average_kg: 4.0,
            ..NarrativeConfig::default()
        };
        let mut out = Vec::new();
        write_narrative(&mut out, 5.0, &cfg).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('\n'));
        assert!(text.contains("4.00 kg CO2"));
        assert!(text.contains(Comparison::Above.message()));
        assert!(text.contains(SuggestionTier::Low.message()));
    }
}
