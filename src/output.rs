//! CLI output formatting.
//!
//! Output is information-centric: each slide is shown by positional index
//! and caption identity, with filesystem paths as indented `Source:` /
//! `Slide:` context lines, and a one-line total at the end.
//!
//! ```text
//! Slides
//! 001 photo1
//!     Source: in/photo1.jpg
//!     Slide:  out/photo1.jpg (400x200, captioned)
//! 002 photo2
//!     Source: in/photo2.png
//!     Slide:  out/photo2.jpg (400x200, captioned)
//!
//! Generated 2 slides
//! ```
//!
//! Format functions are pure (`Vec<String>`, no I/O) with `print_*`
//! wrappers that write to stdout, so tests can assert on the exact lines.

use crate::caption::caption_text;
use crate::config::SlideConfig;
use crate::pipeline::RunSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Describe what happened to every slide in a run.
pub fn format_run_output(summary: &RunSummary, config: &SlideConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if summary.slides.is_empty() {
        lines.push(format!(
            "No matching images in {}",
            config.input_dir.display()
        ));
        return lines;
    }

    let mut treatment = Vec::new();
    if summary.resized {
        treatment.push(format!("{}x{}", config.width, config.height));
    }
    if summary.captioned {
        treatment.push("captioned".to_string());
    }
    let detail = if treatment.is_empty() {
        String::new()
    } else {
        format!(" ({})", treatment.join(", "))
    };

    lines.push("Slides".to_string());
    for (pos, (source, slide)) in summary.sources.iter().zip(&summary.slides).enumerate() {
        lines.push(format!(
            "{} {}",
            format_index(pos + 1),
            caption_text(slide, &config.output_dir)
        ));
        lines.push(format!("    Source: {}", source.display()));
        lines.push(format!("    Slide:  {}{}", slide.display(), detail));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} slide{}",
        summary.slides.len(),
        if summary.slides.len() == 1 { "" } else { "s" }
    ));
    lines
}

/// Print the run summary to stdout.
pub fn print_run_output(summary: &RunSummary, config: &SlideConfig) {
    for line in format_run_output(summary, config) {
        println!("{}", line);
    }
}
