// pkg-recall - lists the packages you installed, straight from shell history
//
// No flags, no config. Reads HOME and USER, scans bash and zsh history, prints one line.

use anyhow::Result;
use pkg_recall_lib::{Environment, ExtractError, Extractor};

fn main() -> Result<()> {
    // Diagnostics go to stderr, only when RUST_LOG asks for them
    env_logger::init();

    let env = Environment::from_process().map_err(friendly)?;
    let report = Extractor::new(env)
        .run_with(|shell| println!("{} not found, skipping...", shell))
        .map_err(friendly)?;

    println!("{}", report.packages);

    Ok(())
}

// Lead with the readable message, keep the raw error as the cause
fn friendly(err: ExtractError) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}
