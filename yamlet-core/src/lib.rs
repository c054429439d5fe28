//! Streaming YAML events, delivered to typed listeners.
//!
//! A [`Parser`] owns a low-level [`Engine`], pulls its raw events one at a
//! time, translates them into [`Event`] records and hands each record to the
//! listeners registered for its kind, in registration order.
//!
//! ```
//! # #[cfg(feature = "libyaml")]
//! # fn main() -> yamlet_core::YamletResult<()> {
//! use yamlet_core::Parser;
//!
//! let mut scalars = Vec::new();
//! let mut parser = Parser::new_from_str("- a\n- b\n")?;
//! parser.on_scalar(|ev| scalars.push(ev.value.clone()));
//! parser.parse()?;
//! drop(parser);
//!
//! assert_eq!(scalars, ["a", "b"]);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "libyaml"))]
//! # fn main() {}
//! ```
extern crate core;

pub use config::ParserConfig;
#[cfg(feature = "libyaml")]
pub use engine::LibyamlEngine;
pub use engine::{Engine, RawEvent, RawEventData, VersionDirective};
pub use error::{EngineError, EngineErrorKind, Error, ListenerError, YamletResult};
pub use listener::{Callback, ListenerOutcome, Listeners, Subscribe};
pub use parser::{translate, Parser, ParserState};

pub use yamlet_common::*;

pub mod config;
pub mod engine;
pub mod error;
pub mod listener;
pub mod parser;
