//! Interactive shell: the menu loop around a `Session`.
//!
//! Iteration 1 runs straight away. After that each round shows the
//! active rules and the menu, and only "Run" advances to the next
//! iteration. The game ends on quit, end of input, a triggered ban, or
//! (in challenge mode) a wrong answer.

mod console;
mod menu;

use std::io::{BufRead, Write};

pub use console::{is_end_of_input, Console};
pub use menu::MenuChoice;

use crate::core::GameConfig;
use crate::error::{GameError, Result};
use crate::rules::{Rule, RulePattern};
use crate::session::Session;

const RULE_WIDTH: usize = 55;

/// Why the game stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOver {
    /// A banned number came up.
    Banned(i64),
    /// Challenge mode answer did not match.
    WrongAnswer {
        number: i64,
        expected: String,
        given: String,
    },
}

/// How a shell run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Player quit, or input ended.
    Quit,
    /// The game ended by its own rules.
    GameOver(GameOver),
}

/// The menu loop.
pub struct Shell<R, W> {
    session: Session,
    config: GameConfig,
    console: Console<R, W>,
    iteration: u32,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with a fresh session from `config`.
    pub fn new(config: GameConfig, input: R, output: W) -> Result<Self> {
        let session = Session::from_config(&config)?;
        Ok(Self::with_session(session, config, input, output))
    }

    /// Create a shell around an existing session.
    pub fn with_session(session: Session, config: GameConfig, input: R, output: W) -> Self {
        Self {
            session,
            config,
            console: Console::new(input, output),
            iteration: 1,
        }
    }

    /// The session being played.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current iteration number.
    #[must_use]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Get the writer back.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Play until the game ends. End of input counts as a quit.
    pub fn run(&mut self) -> Result<Outcome> {
        match self.play() {
            Err(e) if is_end_of_input(&e) => {
                tracing::debug!("input closed");
                self.console.say("")?;
                Ok(Outcome::Quit)
            }
            other => other,
        }
    }

    fn play(&mut self) -> Result<Outcome> {
        loop {
            self.show_header()?;

            if self.iteration > 1 {
                self.console.say("\n  Active rules:")?;
                self.show_rules()?;
                self.show_menu()?;

                let choice = match self.console.prompt_int("\n  Choose: ")? {
                    Some(n) => MenuChoice::from_number(n),
                    None => continue,
                };

                match choice {
                    Some(MenuChoice::AddPredefined) => self.add_predefined()?,
                    Some(MenuChoice::AddCustom) => self.add_custom()?,
                    Some(MenuChoice::RemoveRule) => self.remove_rule()?,
                    Some(MenuChoice::ChangeRange) => self.change_range()?,
                    Some(MenuChoice::Run) => {}
                    Some(MenuChoice::Quit) => {
                        self.console.say("  Bye!")?;
                        return Ok(Outcome::Quit);
                    }
                    None => self.console.say("  ✗ Invalid choice.")?,
                }

                if choice != Some(MenuChoice::Run) {
                    continue;
                }
            }

            if let Some(over) = self.run_iteration()? {
                tracing::info!(iteration = self.iteration, cause = ?over, "game over");
                return Ok(Outcome::GameOver(over));
            }
            self.iteration += 1;
        }
    }

    // ---- display ----

    fn show_header(&mut self) -> Result<()> {
        let bar = "=".repeat(RULE_WIDTH);
        let header = format!(
            "  Iteration {}  |  Range: {}  |  Rules: {}",
            self.iteration,
            self.session.range(),
            self.session.rules().len()
        );
        self.console.say(format!("\n{}\n{}\n{}", bar, header, bar))
    }

    fn show_rules(&mut self) -> Result<()> {
        if self.session.rules().is_empty() {
            return self.console.say("    (no rules active)");
        }
        let lines: Vec<String> = self
            .session
            .rules()
            .iter()
            .enumerate()
            .map(|(idx, rule)| format!("    {:>2}. {}", idx + 1, rule))
            .collect();
        for line in lines {
            self.console.say(line)?;
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.say("")?;
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            self.console.say(format!("  {}. {}", idx + 1, choice.label()))?;
        }
        Ok(())
    }

    /// Print a recoverable error. End of input and bans propagate.
    fn report(&mut self, err: GameError) -> Result<()> {
        match err {
            GameError::Io(_) | GameError::BannedNumber(_) => Err(err),
            GameError::Conflict(reason) => {
                self.console.say(format!("\n  ⚠  Conflict detected: {}", reason))
            }
            other => self.console.say(format!("  ✗ {}", other)),
        }
    }

    fn confirm_added(&mut self, rule: &Rule) -> Result<()> {
        self.console.say(format!("  ✓ Rule added: [{}]", rule))
    }

    // ---- menu actions ----

    fn add_predefined(&mut self) -> Result<()> {
        self.console.say("\n  Predefined Rules:")?;
        let entries: Vec<String> = self
            .session
            .registry()
            .iter()
            .map(|(n, entry)| format!("    {}. {}", n, entry.label))
            .collect();
        for entry in entries {
            self.console.say(entry)?;
        }

        let selector = self.console.prompt("  Select: ")?;
        match self.session.add_predefined(&selector) {
            Ok(rule) => {
                let rule = rule.clone();
                self.confirm_added(&rule)
            }
            Err(e) => self.report(e),
        }
    }

    fn add_custom(&mut self) -> Result<()> {
        self.console.say("\n  Rule Patterns:")?;
        for (idx, pattern) in RulePattern::ALL.iter().enumerate() {
            self.console.say(format!("    {}. {}", idx + 1, pattern.label()))?;
        }

        let pattern = match self.console.prompt_int("  Select pattern: ")? {
            Some(n) => usize::try_from(n).ok().and_then(RulePattern::from_menu),
            None => return Ok(()),
        };
        let Some(pattern) = pattern else {
            return self.console.say("  ✗ Invalid pattern.");
        };

        let attempts = self.config.max_retries.max(1);
        for attempt in 1..=attempts {
            let mut args = Vec::with_capacity(pattern.params().len());
            for param in pattern.params() {
                args.push(self.console.prompt(&format!("  {}: ", param.name))?);
            }

            match self.session.add_custom(pattern, args.as_slice()) {
                Ok(rule) => {
                    let rule = rule.clone();
                    return self.confirm_added(&rule);
                }
                Err(e @ (GameError::Conflict(_) | GameError::InvalidParameter(_))) => {
                    self.report(e)?;
                    if attempt < attempts {
                        self.console.say(format!(
                            "  Please define a different rule (attempt {}/{}):",
                            attempt + 1,
                            attempts
                        ))?;
                    } else {
                        self.console.say("  ✗ Max retries reached. Returning to menu.")?;
                    }
                }
                Err(e) => return self.report(e),
            }
        }
        Ok(())
    }

    fn remove_rule(&mut self) -> Result<()> {
        if self.session.rules().is_empty() {
            return self.console.say("  No rules to remove.");
        }
        self.console.say("\n  Active rules:")?;
        self.show_rules()?;

        let Some(n) = self.console.prompt_int("  Remove rule #: ")? else {
            return Ok(());
        };
        let len = self.session.rules().len();
        let removed = match usize::try_from(n) {
            Ok(index) => self.session.remove_rule(index),
            Err(_) => Err(GameError::RuleIndex { index: 0, len }),
        };

        match removed {
            Ok(rule) => self.console.say(format!("  ✓ Removed: [{}]", rule)),
            Err(e) => self.report(e),
        }
    }

    fn change_range(&mut self) -> Result<()> {
        self.console.say("\n  Set number range:")?;
        loop {
            let start = self.console.prompt_int("    Start: ")?;
            let end = self.console.prompt_int("    End:   ")?;
            let (Some(start), Some(end)) = (start, end) else {
                continue;
            };

            match self.session.set_range(start, end) {
                Ok(range) => return self.console.say(format!("  ✓ Range set to {}", range)),
                Err(GameError::Range { .. }) => {
                    self.console.say("  ✗ Start must not exceed End.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    // ---- iteration ----

    fn run_iteration(&mut self) -> Result<Option<GameOver>> {
        let range = self.session.range();
        self.console.say(format!(
            "\n  Range {} ({} numbers) | Rules active: {}",
            range,
            range.count(),
            self.session.rules().len()
        ))?;

        for item in self.session.run_iteration() {
            let line = match item {
                Ok(line) => line,
                Err(GameError::BannedNumber(n)) => {
                    self.console.say(format!("\n  Game Over ❌ — {} is banned", n))?;
                    return Ok(Some(GameOver::Banned(n)));
                }
                Err(e) => return Err(e),
            };

            if !self.config.challenge {
                self.console.say(format!("  {}", line))?;
                continue;
            }

            let given = self.console.prompt(&format!("  {}: Your move? ", line.number))?;
            let given = given.trim();
            if given != line.text {
                self.console.say(format!(
                    "\n  ✗ Incorrect — expected: '{}'. Game Over.",
                    line.text
                ))?;
                return Ok(Some(GameOver::WrongAnswer {
                    number: line.number,
                    expected: line.text,
                    given: given.to_string(),
                }));
            }
        }

        if self.config.challenge {
            self.console.say("\n  ✓ All moves correct for this iteration.")?;
        }
        Ok(None)
    }
}
