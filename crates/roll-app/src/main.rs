//! Rolling-ball AR demo
//!
//! Builds the inclined-plane/ball scene and runs the interactive view.
//! Space or Enter taps; q quits. Set RUST_LOG for build/session tracing.

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    roll_app::run_demo().context("demo exited with an error")?;

    Ok(())
}
