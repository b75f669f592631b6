//! Generate command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::GenerateArgs;
use crate::commands::target_dir;
use crate::emitter;
use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::template;

/// Run generate command
pub fn run(dir: Option<PathBuf>, args: GenerateArgs) -> Result<()> {
    let dir = target_dir(dir);

    let progress = if args.quiet {
        None
    } else {
        Some(ProgressDisplay::new(template::days().count() as u64))
    };

    let written = match emitter::emit_all(&dir, progress.as_ref()) {
        Ok(written) => written,
        Err(e) => {
            if let Some(pb) = progress.as_ref() {
                pb.abandon();
            }
            return Err(e);
        }
    };

    if let Some(pb) = progress.as_ref() {
        pb.finish();
    }

    println!(
        "{} {} stub files in {}",
        Style::new().bold().green().apply_to("Generated"),
        written.len(),
        dir.display()
    );

    Ok(())
}
