use anyhow::Result;
use tracing::{info, Level};

use symlink_rights::audit::{self, render};
use symlink_rights::config::Target;

fn main() -> Result<()> {
    // Diagnostics go to stderr; the report itself goes to stdout
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("symlink-rights v{}", symlink_rights::core::VERSION);

    let target = Target::default();
    let outcome = audit::run(&target);
    print!("{}", render::render(&outcome, &target));

    // Phase failures were already reported on the diagnostic stream; the
    // exit status stays successful either way
    Ok(())
}
