//! Version command implementation

use crate::error::Result;
use crate::template;

/// Run version command
pub fn run() -> Result<()> {
    println!("daygen {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Stub range: {}", stub_range());

    Ok(())
}

/// The day range baked into this build, e.g. `day01..day25 (25 files)`
fn stub_range() -> String {
    format!(
        "day{:02}..day{:02} ({} files)",
        template::FIRST_DAY,
        template::LAST_DAY,
        template::days().count()
    )
}

fn rustc_version() -> &'static str {
    // This will be the version of rustc used to compile
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
