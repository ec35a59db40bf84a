use std::io;

use anyhow::Result;
use tracing::info;

use gambit_repl::{Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gambit starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new(SessionConfig::default()).run(stdin.lock(), &mut stdout)?;
    Ok(())
}
