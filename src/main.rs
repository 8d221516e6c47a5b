mod charts;
mod error;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::Path;

use clap::Parser;
use rand::Rng;

use crate::model::StyleProfile;
use crate::pipeline::stage1_output::{DEFAULT_OUTPUT_DIR, display_dir, prepare_output_dir};
use crate::pipeline::stage2_render::{study_figures, write_figures};
use crate::report::text::render_summary_text;

/// Renders the Mocksy user-study charts (N=10) into docs/figures.
#[derive(Debug, Parser)]
#[command(name = "study-figures", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();
    let code = exit_code(run());
    if code != 0 {
        std::process::exit(code);
    }
}

/// Maps the run outcome to a process status, reporting failures on stderr.
fn exit_code(result: error::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn run() -> error::Result<()> {
    let style = StyleProfile::paper_v1();
    // Unseeded: only the SUS scatter's vertical jitter varies between runs.
    let mut rng = rand::thread_rng();
    render_study(Path::new(DEFAULT_OUTPUT_DIR), &style, &mut rng)
}

fn render_study<R: Rng>(dir: &Path, style: &StyleProfile, rng: &mut R) -> error::Result<()> {
    let out_dir = prepare_output_dir(dir)?;
    let (width, height) = style.pixel_size();
    tracing::info!(dpi = style.dpi, width, height, "rendering study figures");

    let figures = study_figures(rng)?;
    let saved = write_figures(&figures, &out_dir, style)?;

    print!("{}", render_summary_text(&display_dir(&out_dir), &saved));
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
