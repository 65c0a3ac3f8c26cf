//! Config - foundation settings
//!
//! - `foundation.rs` - FoundationConfig (SubjectConfig + LoggingConfig)

mod foundation;

pub use foundation::{
    FoundationConfig, LoggingConfig, SubjectConfig, FOUNDATION_CONFIG_FILE, LOG_LEVELS,
};
