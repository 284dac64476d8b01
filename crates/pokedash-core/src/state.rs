//! State management for Pokedash applications.
//!
//! This module implements the Elm Architecture pattern for predictable
//! state management: `State + Message → (State, Command)`. Side effects
//! are returned as [`Command`] values and interpreted by the shell driving
//! the application, so every transition stays synchronous and testable.
//!
//! # Examples
//!
//! ```
//! use pokedash_core::{Command, State};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum CounterMessage {
//!     Increment,
//!     Reset,
//! }
//!
//! impl State for Counter {
//!     type Message = CounterMessage;
//!
//!     fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
//!         match msg {
//!             CounterMessage::Increment => self.count += 1,
//!             CounterMessage::Reset => self.count = 0,
//!         }
//!         Command::None
//!     }
//! }
//!
//! let mut state = Counter::default();
//! state.update(CounterMessage::Increment);
//! assert_eq!(state.count, 1);
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application state trait.
///
/// Implements the Elm Architecture: State + Message → (State, Command).
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Message type for state updates
    type Message: Send;

    /// Update state in response to a message.
    ///
    /// Returns a command describing any side effect the shell should run.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;
}

/// Side effects requested by a state transition, as plain data.
///
/// The shell (CLI, test harness) interprets these and feeds resulting
/// messages back into [`State::update`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Command<M> {
    /// No effect
    #[default]
    None,
    /// Run several effects
    Batch(Vec<Command<M>>),
    /// Feed a follow-up message back into the update loop
    Message(M),
    /// Load the dataset from a CSV file
    LoadData {
        /// Path to the CSV resource
        path: PathBuf,
    },
}

impl<M> Command<M> {
    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
