//! # ncclient-foundation
//!
//! Foundation layer for ncclient:
//! - Event: thread-safe `Subject` broadcasting named events to `Listener`s
//! - Config: Subject and logging settings (JSON)
//! - Logging: `tracing` subscriber setup
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Transport / Protocol layer (producer)                  │
//! │                     │ dispatch(event, args)             │
//! │                     ▼                                   │
//! │          Subject (single mutex, ordered listeners)      │
//! │                     │                                   │
//! │          ┌─────────┴─────────┐                         │
//! │          ▼                   ▼                         │
//! │   Listener::handler   failure → tracing::warn!         │
//! │   (reply, error...)   (next listener still runs)       │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod logging;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config
// ============================================================================
pub use config::{
    FoundationConfig, LoggingConfig, SubjectConfig, FOUNDATION_CONFIG_FILE, LOG_LEVELS,
};

// ============================================================================
// Event
// ============================================================================
pub use event::{
    // Args
    EventArgs,
    // Listener
    handler,
    CallbackListener,
    Handler,
    Listener,
    // Subject
    Subject,
};

// ============================================================================
// Logging
// ============================================================================
pub use logging::init_logging;
