//! Event System - thread-safe event dispatching
//!
//! Producers (transport and protocol layers) own a [`Subject`] and dispatch
//! named events on it; observers register as [`Listener`]s and receive them
//! without any coupling to the producer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Subject (Mutex<Vec<_>>)                  │
//! │  ┌─────────────────────────────────────────────────────┐    │
//! │  │  dispatch("reply", args) ─────────────────────────┐ │    │
//! │  └─────────────────────────────────────────────────────┘    │
//! │         │                                                   │
//! │         ▼  handler("reply")                                 │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
//! │  │  Listener 1  │  │  Listener 2  │  │  Listener N  │      │
//! │  │  Some(h) ✓   │  │  None → warn │  │  Err → warn  │      │
//! │  └──────────────┘  └──────────────┘  └──────────────┘      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use ncclient_foundation::event::{handler, EventArgs, Handler, Listener, Subject};
//!
//! // 1. Implement a listener
//! struct Printer;
//!
//! impl Listener for Printer {
//!     fn handler(&self, event: &str) -> Option<Handler<'_>> {
//!         match event {
//!             "reply" => handler(|args| {
//!                 println!("{}", args.get_as::<String>(0)?);
//!                 Ok(())
//!             }),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! // 2. Register it
//! let subject = Subject::new();
//! subject.add_listener(Arc::new(Printer));
//!
//! // 3. Dispatch
//! subject.dispatch("reply", &EventArgs::new().arg("hello world"));
//! ```

pub mod args;
pub mod listener;
pub mod subject;

// Re-exports
pub use args::EventArgs;
pub use listener::{handler, CallbackListener, Handler, Listener};
pub use subject::Subject;
