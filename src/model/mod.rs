pub mod datasets;
pub mod palette;
pub mod style;

pub use datasets::{FeatureUsefulness, LearningGains, SusDistribution, TrustGap};
pub use style::StyleProfile;
