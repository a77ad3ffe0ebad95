//! Eco One - 日々の活動からカーボンフットプリントを推定するCLIツール

mod advise;
mod cli;
mod collect;
mod config;
mod error;
mod estimate;
mod logging;
mod persist;
mod pipeline;
mod record;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();
    cli::run()
}
