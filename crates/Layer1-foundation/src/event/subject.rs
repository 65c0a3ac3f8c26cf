//! Subject - thread-safe event dispatcher
//!
//! Keeps an ordered list of listeners behind one mutex and broadcasts named
//! events to them. A listener that fails never stops the broadcast.

use super::args::EventArgs;
use super::listener::Listener;
use crate::config::SubjectConfig;
use crate::{Error, Result};
use parking_lot::Mutex;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Logged in place of a listener whose `name()` panicked
const UNNAMED_LISTENER: &str = "<unnamed>";

/// Event-dispatching subject
///
/// Every operation holds the internal lock for its whole duration, so
/// operations on one Subject are totally ordered and a dispatch sees exactly
/// the listeners registered when it acquired the lock.
///
/// The same listener may be registered several times; it is then invoked
/// once per registration. Membership and removal compare listeners by
/// identity (the `Arc` allocation), not by value.
///
/// ## Usage
///
/// ```ignore
/// use ncclient_foundation::event::{CallbackListener, EventArgs, Subject};
///
/// let subject = Subject::new();
/// let listener: Arc<dyn Listener> = Arc::new(
///     CallbackListener::new("printer").on("reply", |args| {
///         println!("{}", args.get_as::<String>(0)?);
///         Ok(())
///     }),
/// );
///
/// subject.add_listener(listener.clone());
/// subject.dispatch("reply", &EventArgs::new().arg("hello world"));
/// subject.remove_listener(&listener);
/// ```
///
/// ## Reentrancy
///
/// Handlers run while the lock is held. A handler calling back into the
/// same Subject from its own thread deadlocks.
pub struct Subject {
    config: SubjectConfig,
    listeners: Mutex<Vec<Arc<dyn Listener>>>,
}

impl Subject {
    /// Empty subject with default settings
    pub fn new() -> Self {
        Self::with_config(SubjectConfig::default())
    }

    /// Empty subject with custom settings
    pub fn with_config(config: SubjectConfig) -> Self {
        Self {
            config,
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Subject seeded with an initial listener sequence
    pub fn with_listeners(listeners: impl IntoIterator<Item = Arc<dyn Listener>>) -> Self {
        Self {
            config: SubjectConfig::default(),
            listeners: Mutex::new(listeners.into_iter().collect()),
        }
    }

    pub fn config(&self) -> &SubjectConfig {
        &self.config
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Whether this exact listener is currently registered
    pub fn has_listener<L: Listener + ?Sized>(&self, listener: &Arc<L>) -> bool {
        self.listeners
            .lock()
            .iter()
            .any(|registered| same_listener(registered, listener))
    }

    /// Append a listener; duplicates are kept
    pub fn add_listener(&self, listener: Arc<dyn Listener>) {
        let mut listeners = self.listeners.lock();

        debug!(
            subject = %self.config.name,
            listener_name = %listener_name(listener.as_ref()),
            listener_count = listeners.len() + 1,
            "Registering listener"
        );

        listeners.push(listener);
    }

    /// Remove the first registration of `listener`, no-op if absent
    pub fn remove_listener<L: Listener + ?Sized>(&self, listener: &Arc<L>) {
        let mut listeners = self.listeners.lock();

        if let Some(index) = listeners
            .iter()
            .position(|registered| same_listener(registered, listener))
        {
            let removed = listeners.remove(index);
            debug!(
                subject = %self.config.name,
                listener_name = %listener_name(removed.as_ref()),
                listener_count = listeners.len(),
                "Unregistered listener"
            );
        }
    }

    /// Number of registrations (duplicates counted)
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    /// Names of the registered listeners in registration order
    pub fn listener_names(&self) -> Vec<String> {
        self.listeners
            .lock()
            .iter()
            .map(|l| listener_name(l.as_ref()))
            .collect()
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Broadcast `event` with `args` to every registered listener
    ///
    /// Listeners are invoked in registration order. A listener without a
    /// handler for `event`, or whose handler errors or panics, is logged at
    /// WARN and skipped. Nothing is returned or propagated to the caller.
    pub fn dispatch(&self, event: &str, args: &EventArgs) {
        let listeners = self.listeners.lock();

        for listener in listeners.iter() {
            let name = listener_name(listener.as_ref());

            match deliver(listener.as_ref(), &name, event, args) {
                Ok(()) => {
                    if self.config.trace_deliveries {
                        trace!(
                            subject = %self.config.name,
                            listener_name = %name,
                            event,
                            "Delivered event to listener"
                        );
                    }
                }
                Err(e) => {
                    debug_assert!(e.is_delivery_failure());
                    warn!(
                        subject = %self.config.name,
                        listener_name = %name,
                        event,
                        error = %e,
                        "Listener failed to handle event"
                    );
                }
            }
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("config", &self.config)
            .field("listeners", &self.listener_names())
            .finish()
    }
}

// ============================================================================
// Delivery
// ============================================================================

/// Listener name for logs; a panicking `name()` falls back to [`UNNAMED_LISTENER`]
fn listener_name(listener: &dyn Listener) -> String {
    panic::catch_unwind(AssertUnwindSafe(|| listener.name().to_string()))
        .unwrap_or_else(|_| UNNAMED_LISTENER.to_string())
}

/// Invoke one listener's handler, converting every failure into an `Error`
///
/// Panics are caught here so they never unwind past this listener. `name`
/// is resolved by the caller so no listener code runs outside a guard.
fn deliver(listener: &dyn Listener, name: &str, event: &str, args: &EventArgs) -> Result<()> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        listener.handler(event).map(|handler| handler(args))
    }));

    match outcome {
        Ok(Some(Ok(()))) => Ok(()),
        Ok(Some(Err(e))) => Err(Error::HandlerFailed {
            listener: name.to_string(),
            event: event.to_string(),
            message: format!("{:#}", e),
        }),
        Ok(None) => Err(Error::missing_handler(name, event)),
        Err(payload) => Err(Error::HandlerPanicked {
            listener: name.to_string(),
            event: event.to_string(),
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Identity comparison on the shared allocation, ignoring vtables
fn same_listener<L: Listener + ?Sized>(registered: &Arc<dyn Listener>, listener: &Arc<L>) -> bool {
    Arc::as_ptr(registered) as *const () == Arc::as_ptr(listener) as *const ()
}

// ============================================================================
// Tests
// ============================================================================
