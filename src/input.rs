use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::entries::{normalize_activity, Category, Entries};
use crate::error::FootprintError;
use crate::quantity::Quantity;

/// Typing this instead of an activity ends a loop.
pub const SENTINEL: &str = "done";

#[derive(Debug, Clone, PartialEq)]
enum CollectState {
    AwaitingActivity,
    AwaitingQuantity(String),
    Done,
}

/// Line-oriented console prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prompt for activity/quantity pairs until the sentinel or end of input.
    ///
    /// A quantity that fails to parse re-prompts for the same activity's
    /// quantity only.
    pub fn collect(&mut self, category: Category) -> Result<Entries, FootprintError> {
        let mut entries = Entries::new();
        let mut state = CollectState::AwaitingActivity;

        while state != CollectState::Done {
            state = match state {
                CollectState::AwaitingActivity => {
                    match self.ask(category.activity_prompt())? {
                        None => CollectState::Done,
                        Some(line) => {
                            let activity = normalize_activity(&line);
                            if activity == SENTINEL {
                                CollectState::Done
                            } else if activity.is_empty() {
                                CollectState::AwaitingActivity
                            } else {
                                CollectState::AwaitingQuantity(activity)
                            }
                        }
                    }
                }
                CollectState::AwaitingQuantity(activity) => {
                    match self.ask(&category.quantity_prompt(&activity))? {
                        None => {
                            warn!(activity = %activity, "input ended before a quantity was given");
                            CollectState::Done
                        }
                        Some(line) => match line.parse::<Quantity>() {
                            Ok(quantity) => {
                                debug!(activity = %activity, quantity = quantity.value(), "recorded entry");
                                entries.insert(activity, quantity);
                                CollectState::AwaitingActivity
                            }
                            Err(e) => {
                                warn!(error = %e, "rejected quantity");
                                writeln!(self.writer, "{}", category.retry_message())?;
                                CollectState::AwaitingQuantity(activity)
                            }
                        },
                    }
                }
                CollectState::Done => CollectState::Done,
            };
        }

        Ok(entries)
    }

    /// Print a prompt and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, FootprintError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
