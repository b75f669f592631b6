//! Status command implementation
//!
//! Reports each expected day stub as pristine, modified, or missing, and
//! flags day-shaped files outside the generated range.

use std::path::PathBuf;

use console::Style;

use crate::cli::StatusArgs;
use crate::commands::target_dir;
use crate::error::Result;
use crate::scan::{self, ScanReport, StubState};

/// Run status command
pub fn run(dir: Option<PathBuf>, args: StatusArgs) -> Result<()> {
    let dir = target_dir(dir);
    let report = scan::scan(&dir)?;

    println!("Day stubs in {}:", dir.display());
    println!();

    if args.detailed {
        display_detailed(&report);
    } else {
        display_summary(&report);
    }

    if !report.strays.is_empty() {
        println!();
        println!(
            "{} {} file(s) outside the day range:",
            Style::new().bold().yellow().apply_to("Stray:"),
            report.strays.len()
        );
        for path in &report.strays {
            println!("  {}", path.display());
        }
    }

    Ok(())
}

fn display_summary(report: &ScanReport) {
    println!(
        "  {} {}",
        Style::new().bold().green().apply_to("pristine:"),
        report.count(&StubState::Pristine)
    );
    println!(
        "  {} {}",
        Style::new().bold().yellow().apply_to("modified:"),
        report.count(&StubState::Modified)
    );
    println!(
        "  {} {}",
        Style::new().bold().red().apply_to("missing: "),
        report.count(&StubState::Missing)
    );
}

fn display_detailed(report: &ScanReport) {
    for stub in &report.stubs {
        let label = match stub.state {
            StubState::Pristine => Style::new().green().apply_to("pristine"),
            StubState::Modified => Style::new().yellow().apply_to("modified"),
            StubState::Missing => Style::new().red().apply_to("missing"),
        };
        println!("  day{:02}  {}", stub.day, label);
    }
}
