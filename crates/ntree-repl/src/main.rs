//! ntree entry point.
//!
//! Launch the interactive namespace shell:
//! ```bash
//! cargo run -p ntree-repl
//! ```

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    ntree_repl::run()
}
