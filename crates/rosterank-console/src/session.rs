//! The interactive session: command dispatch over the core

use tracing::debug;

use rosterank_config::AppConfig;
use rosterank_core::{validate, RosterStore, StudentId};
use rosterank_ranking::{rank, Direction, RankingResult};

use crate::command::{Command, HELP_TEXT};
use crate::render;

/// The session's answer to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user; may be empty when feedback is suppressed.
    Output(String),
    /// The user asked to end the session.
    Quit,
}

/// One interactive roster session.
///
/// Owns the roster store and the currently displayed ranking. Every store
/// mutation discards the displayed ranking; it is only recomputed when the
/// user explicitly asks for a sort, mirroring the store's
/// revision-invalidation contract.
pub struct Session {
    store: RosterStore,
    direction: Direction,
    feedback: bool,
    colors: bool,
    last_ranking: Option<(u64, RankingResult)>,
}

impl Session {
    /// Creates a session from console configuration.
    pub fn new(config: &AppConfig) -> Self {
        Session {
            store: RosterStore::new(),
            direction: config.direction,
            feedback: config.feedback,
            colors: render::colors_enabled(config.color),
            last_ranking: None,
        }
    }

    /// Returns the roster store.
    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Returns the active ranking direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the displayed ranking, if it is still current.
    ///
    /// A ranking computed before any later store mutation is stale and
    /// reported as absent.
    pub fn current_ranking(&self) -> Option<&RankingResult> {
        match &self.last_ranking {
            Some((revision, result)) if *revision == self.store.revision() => Some(result),
            _ => None,
        }
    }

    /// Handles one line of user input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(err) => Reply::Output(render::error(&err.to_string(), self.colors)),
        }
    }

    fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Add { name, score } => self.add(&name, &score),
            Command::Remove { id } => self.remove(&id),
            Command::List => Reply::Output(render::render_roster(self.store.all(), self.colors)),
            Command::Sort => self.sort(),
            Command::Order(direction) => self.set_order(direction),
            Command::Clear => self.clear(),
            Command::Help => Reply::Output(HELP_TEXT.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    fn add(&mut self, name: &str, score: &str) -> Reply {
        let student = match validate(name, score) {
            Ok(student) => student,
            Err(err) => return Reply::Output(render::error(&err.to_string(), self.colors)),
        };

        debug!(name = %student.name(), score = student.score(), "student added");
        let message = format!(
            "Added {} with score {}.",
            student.name(),
            render::format_score(student.score())
        );
        self.store.append(student);
        self.last_ranking = None;
        self.success(&message)
    }

    fn remove(&mut self, id: &str) -> Reply {
        let matched: Vec<StudentId> = self
            .store
            .iter()
            .map(|r| r.id())
            .filter(|candidate| candidate.to_string().starts_with(id))
            .collect();

        let target = match matched.as_slice() {
            [] => {
                let message = format!("No student matching id '{}'.", id);
                return Reply::Output(render::error(&message, self.colors));
            }
            [only] => *only,
            many => {
                let message = format!("Id '{}' is ambiguous ({} matches).", id, many.len());
                return Reply::Output(render::error(&message, self.colors));
            }
        };

        match self.store.remove_by_id(target) {
            Ok(removed) => {
                debug!(name = %removed.name(), "student removed");
                self.last_ranking = None;
                self.success(&format!("Removed {}.", removed.name()))
            }
            Err(err) => Reply::Output(render::error(&err.to_string(), self.colors)),
        }
    }

    fn sort(&mut self) -> Reply {
        // Presentation policy: an empty roster clears the ranking display
        // instead of invoking the engine.
        if self.store.is_empty() {
            self.last_ranking = None;
            return Reply::Output(render::RANKING_PENDING.to_string());
        }

        let result = rank(self.store.all(), self.direction);
        debug!(
            direction = %result.direction,
            passes = result.stats.passes,
            swaps = result.stats.swaps,
            "roster ranked"
        );

        let mut out = render::render_ranking(&result, self.colors);
        out.push_str("\n\n");
        out.push_str(&render::render_summary(&result, self.colors));
        self.last_ranking = Some((self.store.revision(), result));
        Reply::Output(out)
    }

    fn set_order(&mut self, direction: Option<Direction>) -> Reply {
        self.direction = direction.unwrap_or_else(|| self.direction.toggled());

        // Re-rank immediately, as the original order toggle does.
        if !self.store.is_empty() {
            return self.sort();
        }

        self.success(&format!("Order set to {}.", self.direction.label()))
    }

    fn clear(&mut self) -> Reply {
        if self.store.is_empty() {
            return Reply::Output("Roster is already empty.".to_string());
        }

        self.store.clear();
        self.last_ranking = None;
        debug!("roster cleared");
        self.success("Student list cleared.")
    }

    fn success(&self, message: &str) -> Reply {
        if self.feedback {
            Reply::Output(render::success(message, self.colors))
        } else {
            Reply::Output(String::new())
        }
    }
}
