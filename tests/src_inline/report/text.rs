use super::*;
use std::path::PathBuf;

fn figure(index: usize, file_name: &'static str) -> SavedFigure {
    SavedFigure {
        index,
        description: "desc",
        path: PathBuf::from("docs/figures").join(file_name),
    }
}

#[test]
fn test_progress_and_saved_lines() {
    assert_eq!(
        progress_line(2, "Trust Gap Analysis"),
        "Generating Chart 2: Trust Gap Analysis..."
    );
    assert_eq!(
        saved_line(Path::new("docs/figures/chart2_trust_gap.png")),
        "✓ Saved: docs/figures/chart2_trust_gap.png"
    );
}

#[test]
fn test_summary_lists_each_file_once() {
    let figs = vec![
        figure(1, "chart1_learning_gains.png"),
        figure(2, "chart2_trust_gap.png"),
        figure(3, "chart3_feature_usefulness.png"),
        figure(4, "chart4_sus_distribution.png"),
    ];
    let text = render_summary_text(Path::new("/work/docs/figures"), &figs);
    assert!(text.contains("✓ ALL VISUALIZATIONS GENERATED SUCCESSFULLY!"));
    assert!(text.contains("Output Directory: /work/docs/figures"));
    assert!(text.contains(&"=".repeat(60)));
    let entries = text.lines().filter(|l| l.contains(".png")).count();
    assert_eq!(entries, 4);
    assert!(text.contains("  1. chart1_learning_gains.png"));
    assert!(text.contains("Next Steps:"));
}
