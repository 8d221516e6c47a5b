use std::path::Path;

use rand::Rng;

use crate::charts::{
    FeatureUsefulnessChart, Figure, LearningGainsChart, SusDistributionChart, TrustGapChart,
};
use crate::error::Result;
use crate::model::StyleProfile;
use crate::model::datasets::{FEATURE_USEFULNESS, LEARNING_GAINS, SUS_DISTRIBUTION, TRUST_GAP};
use crate::report::SavedFigure;
use crate::report::text::{progress_line, saved_line};

/// The four study figures in output order.
pub fn study_figures<R: Rng>(rng: &mut R) -> Result<Vec<Box<dyn Figure>>> {
    Ok(vec![
        Box::new(LearningGainsChart::new(LEARNING_GAINS)),
        Box::new(TrustGapChart::new(TRUST_GAP)),
        Box::new(FeatureUsefulnessChart::new(FEATURE_USEFULNESS)),
        Box::new(SusDistributionChart::new(SUS_DISTRIBUTION, rng)?),
    ])
}

/// Renders each figure in order, printing progress to stdout. Stops at the
/// first failure; files already written stay on disk.
pub fn write_figures(
    figures: &[Box<dyn Figure>],
    out_dir: &Path,
    style: &StyleProfile,
) -> Result<Vec<SavedFigure>> {
    let mut saved = Vec::with_capacity(figures.len());
    for fig in figures {
        println!("{}", progress_line(fig.index(), fig.name()));
        let path = fig.draw(out_dir, style)?;
        println!("{}", saved_line(&path));
        saved.push(SavedFigure {
            index: fig.index(),
            description: fig.description(),
            path,
        });
    }
    Ok(saved)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_render.rs"]
mod tests;
