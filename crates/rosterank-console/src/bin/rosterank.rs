//! Interactive roster manager.
//!
//! Reads commands from stdin, one per line, and renders results to stdout.
//! An optional first argument names a config file; without one,
//! `rosterank.toml` is loaded when present and defaults apply otherwise.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::info;

use rosterank_config::AppConfig;
use rosterank_console::{Reply, Session};

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config '{}': {}", path, err);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::load("rosterank.toml").unwrap_or_default(),
    };

    rosterank_console::init();
    info!("session started");

    let mut session = Session::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    prompt(&mut stdout);
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            prompt(&mut stdout);
            continue;
        }

        match session.handle_line(&line) {
            Reply::Output(out) => {
                if !out.is_empty() {
                    let _ = writeln!(stdout, "{}", out);
                }
            }
            Reply::Quit => break,
        }
        prompt(&mut stdout);
    }

    info!("session ended");
    ExitCode::SUCCESS
}

fn prompt(stdout: &mut io::Stdout) {
    let _ = write!(stdout, "> ");
    let _ = stdout.flush();
}
