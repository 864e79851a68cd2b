//! scrimbal -- team balancer speaking a line-based session protocol.
//!
//! Reads commands from stdin and writes responses to stdout. Diagnostics go
//! to stderr; set `RUST_LOG=scrimbal=debug` to see every committed swap.

use std::io::{self, BufRead};
use std::path::Path;

use tracing_subscriber::EnvFilter;

use scrimbal::protocol::parser::{parse_command, Command};
use scrimbal::session::Session;

/// Runs the session loop, reading commands from stdin and writing
/// responses to stdout.
fn main() -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scrimbal=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Hello => session.handle_hello(&mut out)?,
            Command::IsReady => session.handle_isready(&mut out)?,
            Command::SetOption { name, value } => session.set_option(name, value),
            Command::NewMatch => session.new_match(),
            Command::Player { record } => {
                if let Err(e) = session.add_player(&record) {
                    eprintln!("{}", e);
                }
            }
            Command::Load { path } => {
                if let Err(e) = session.load(Path::new(&path)) {
                    eprintln!("{}", e);
                }
            }
            Command::Seed { seed } => session.set_seed(seed),
            Command::Go(params) => session.handle_go(&params, &mut out)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
