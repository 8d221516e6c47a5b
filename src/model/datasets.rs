use crate::error::{RenderError, Result};

/// STAR understanding before/after, grouped by interview experience.
#[derive(Debug, Clone, Copy)]
pub struct LearningGains {
    pub categories: &'static [&'static str],
    pub pre_means: &'static [f64],
    pub post_means: &'static [f64],
    pub gains: &'static [f64],
}

/// Mean trust in the AI evaluation per interruption-frequency bucket.
#[derive(Debug, Clone, Copy)]
pub struct TrustGap {
    pub levels: &'static [&'static str],
    pub means: &'static [f64],
    pub std_devs: &'static [Option<f64>],
    pub colors: &'static [u32],
    pub gap_from: usize,
    pub gap_to: usize,
    pub gap_label: &'static str,
}

/// Answers to Q13, already ordered by descending count.
#[derive(Debug, Clone, Copy)]
pub struct FeatureUsefulness {
    pub features: &'static [&'static str],
    pub counts: &'static [u32],
    pub percentages: &'static [u32],
    pub colors: &'static [u32],
}

#[derive(Debug, Clone, Copy)]
pub struct SusDistribution {
    pub participants: &'static [&'static str],
    pub scores: &'static [f64],
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SusZone {
    pub label: &'static str,
    pub from: f64,
    pub to: f64,
    pub fill: u32,
    pub text: u32,
}

pub const LEARNING_GAINS: LearningGains = LearningGains {
    categories: &[
        "Novice\n(0-3 interviews)\nn=4",
        "Intermediate\n(4-10 interviews)\nn=4",
        "Expert\n(10+ interviews)\nn=2",
    ],
    pre_means: &[1.5, 3.0, 5.0],
    post_means: &[4.5, 4.0, 5.0],
    gains: &[3.0, 1.0, 0.0],
};

pub const TRUST_GAP: TrustGap = TrustGap {
    levels: &[
        "Never\n(n=2)",
        "Rarely\n(1 time)\n(n=4)",
        "Sometimes\n(2-3 times)\n(n=3)",
        "Often\n(4+ times)\n(n=1)",
    ],
    means: &[5.0, 4.0, 2.7, 3.0],
    std_devs: &[Some(0.0), Some(0.0), Some(0.6), None],
    colors: &[0x27AE60, 0x52BE80, 0xE67E22, 0xE74C3C],
    gap_from: 0,
    gap_to: 2,
    gap_label: "-1.7 points",
};

pub const FEATURE_USEFULNESS: FeatureUsefulness = FeatureUsefulness {
    features: &[
        "STAR Breakdown",
        "Improvement Plan",
        "Company-Specific\nFeedback",
        "Answer Comparison",
    ],
    counts: &[5, 3, 2, 1],
    percentages: &[50, 30, 20, 10],
    colors: &[0x3498DB, 0x9B59B6, 0xE67E22, 0xE67E22],
};

pub const SUS_DISTRIBUTION: SusDistribution = SusDistribution {
    participants: &["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9", "P10"],
    scores: &[85.0, 67.5, 75.0, 90.0, 70.0, 55.0, 77.5, 85.0, 62.5, 80.0],
    mean: 74.8,
    std_dev: 9.8,
};

// Adjective bands; text colors differ from fills for "Good" and "Excellent".
pub const SUS_ZONES: [SusZone; 4] = [
    SusZone {
        label: "Poor",
        from: 0.0,
        to: 50.0,
        fill: 0xFF0000,
        text: 0xFF0000,
    },
    SusZone {
        label: "OK",
        from: 50.0,
        to: 70.0,
        fill: 0xFFA500,
        text: 0xFFA500,
    },
    SusZone {
        label: "Good",
        from: 70.0,
        to: 85.0,
        fill: 0xFFFF00,
        text: 0x008000,
    },
    SusZone {
        label: "Excellent",
        from: 85.0,
        to: 100.0,
        fill: 0x008000,
        text: 0x006400,
    },
];

fn check_len(chart: &'static str, field: &str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(RenderError::MalformedData {
            chart,
            detail: format!("{field} has {got} entries, expected {expected}"),
        });
    }
    Ok(())
}

impl LearningGains {
    pub fn validate(&self) -> Result<()> {
        let n = self.categories.len();
        check_len("learning gains", "pre_means", n, self.pre_means.len())?;
        check_len("learning gains", "post_means", n, self.post_means.len())?;
        check_len("learning gains", "gains", n, self.gains.len())
    }
}

impl TrustGap {
    pub fn validate(&self) -> Result<()> {
        let n = self.levels.len();
        check_len("trust gap", "means", n, self.means.len())?;
        check_len("trust gap", "std_devs", n, self.std_devs.len())?;
        check_len("trust gap", "colors", n, self.colors.len())?;
        if self.gap_from >= n || self.gap_to >= n {
            return Err(RenderError::MalformedData {
                chart: "trust gap",
                detail: format!(
                    "gap arrow {}..{} outside {} levels",
                    self.gap_from, self.gap_to, n
                ),
            });
        }
        Ok(())
    }
}

impl FeatureUsefulness {
    pub fn validate(&self) -> Result<()> {
        let n = self.features.len();
        check_len("feature usefulness", "counts", n, self.counts.len())?;
        check_len("feature usefulness", "percentages", n, self.percentages.len())?;
        check_len("feature usefulness", "colors", n, self.colors.len())
    }
}

impl SusDistribution {
    pub fn validate(&self) -> Result<()> {
        check_len(
            "SUS distribution",
            "scores",
            self.participants.len(),
            self.scores.len(),
        )?;
        if self.scores.is_empty() {
            return Err(RenderError::MalformedData {
                chart: "SUS distribution",
                detail: "no scores".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/datasets.rs"]
mod tests;
