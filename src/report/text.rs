use std::path::Path;

use crate::report::SavedFigure;

const RULE_WIDTH: usize = 60;

const NEXT_STEPS: [&str; 3] = [
    "Add these charts to docs/FINAL_REPORT.md (Section 5: Results)",
    "Include in presentation slides 5-6",
    "Reference in discussion section",
];

pub fn progress_line(index: usize, name: &str) -> String {
    format!("Generating Chart {index}: {name}...")
}

pub fn saved_line(path: &Path) -> String {
    format!("✓ Saved: {}", path.display())
}

pub fn render_summary_text(out_dir: &Path, figures: &[SavedFigure]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\n"));
    out.push_str("✓ ALL VISUALIZATIONS GENERATED SUCCESSFULLY!\n");
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("\nOutput Directory: {}\n", out_dir.display()));

    out.push_str("\nGenerated Files:\n");
    for fig in figures {
        out.push_str(&file_entry(fig));
        out.push('\n');
    }

    out.push_str("\n💡 Next Steps:\n");
    for step in NEXT_STEPS {
        out.push_str(&format!("  - {step}\n"));
    }
    out.push_str(&format!("\n{rule}\n"));

    out
}

fn file_entry(fig: &SavedFigure) -> String {
    let name = fig
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("  {}. {:<32} - {}", fig.index, name, fig.description)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
