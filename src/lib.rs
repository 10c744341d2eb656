//! Builds Google Chat card messages for CI builds and posts them to a webhook.
//!
//! The success or failure flavor of every input is picked from the build
//! outcome, which callers pass in explicitly.

pub mod assembler;
pub mod buttons;
pub mod config;
pub mod delivery;
pub mod error;
pub mod keyvalue;
pub mod logging;
pub mod markup;
pub mod message;

pub use assembler::{new_message, select_value};
pub use config::Config;
pub use error::{NotifyError, Result};
pub use message::Message;
