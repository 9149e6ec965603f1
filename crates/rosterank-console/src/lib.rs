//! Console presentation adapter for Rosterank.
//!
//! Translates user commands into calls on the core (validator, roster store,
//! ranking engine) and renders roster tables, ranking tables, and feedback
//! banners. The core never logs; all `tracing` events originate here.
//!
//! ## Log Levels
//!
//! - **INFO**: session lifecycle (start, quit)
//! - **DEBUG**: individual roster mutations and rankings

use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod command;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use render::{render_ranking, render_roster, render_summary};
pub use session::{Reply, Session};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the Rosterank banner and sets up tracing with an `EnvFilter`
/// defaulting to `rosterank_console=info`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive("rosterank_console=info".parse().unwrap())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init();
    });
}

fn print_banner() {
    let banner = format!("Rosterank v{} - Student Roster Manager", VERSION);
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan().bold());
    let _ = writeln!(stdout, "{}", "Type 'help' to list commands.".dimmed());
    let _ = stdout.flush();
}
