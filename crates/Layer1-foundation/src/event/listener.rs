//! Listener - capability trait for objects receiving dispatched events
//!
//! A listener does not implement a fixed set of callbacks. Instead the
//! Subject asks it for the handler matching an event name, and a listener
//! that has none simply answers `None`.

use super::args::EventArgs;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Handler
// ============================================================================

/// Callable returned by [`Listener::handler`] for one invocation
pub type Handler<'a> = Box<dyn FnOnce(&EventArgs) -> anyhow::Result<()> + 'a>;

/// Box a closure into a [`Handler`]
pub fn handler<'a, F>(f: F) -> Option<Handler<'a>>
where
    F: FnOnce(&EventArgs) -> anyhow::Result<()> + 'a,
{
    Some(Box::new(f))
}

// ============================================================================
// Listener Trait
// ============================================================================

/// Event listener
///
/// Implementations are shared between threads by the Subject, so any
/// state they mutate from a handler needs interior synchronization.
///
/// Handlers run while the Subject's lock is held. A handler must not call
/// back into the same Subject (`add_listener`, `remove_listener`,
/// `has_listener`, `dispatch`) from its own thread or it will deadlock.
///
/// ```ignore
/// struct Printer;
///
/// impl Listener for Printer {
///     fn handler(&self, event: &str) -> Option<Handler<'_>> {
///         match event {
///             "reply" => handler(|args| {
///                 println!("{}", args.get_as::<String>(0)?);
///                 Ok(())
///             }),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Listener: Send + Sync {
    /// Listener name (for logging)
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handler for `event`, `None` if this listener does not handle it
    fn handler(&self, event: &str) -> Option<Handler<'_>>;
}

// ============================================================================
// CallbackListener
// ============================================================================

type Callback = Arc<dyn Fn(&EventArgs) -> anyhow::Result<()> + Send + Sync>;

/// Listener assembled from closures keyed by event name
///
/// ```ignore
/// let listener = Arc::new(
///     CallbackListener::new("printer")
///         .on("reply", |args| { println!("{:?}", args.get(0)); Ok(()) })
///         .on("error", |args| { eprintln!("{:?}", args.get(0)); Ok(()) }),
/// );
/// subject.add_listener(listener.clone());
/// ```
#[derive(Clone)]
pub struct CallbackListener {
    name: String,
    callbacks: HashMap<String, Callback>,
}

impl CallbackListener {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            callbacks: HashMap::new(),
        }
    }

    /// Register the callback for `event`, replacing an earlier one
    pub fn on<F>(mut self, event: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&EventArgs) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.callbacks.insert(event.into(), Arc::new(callback));
        self
    }

    pub fn handles(&self, event: &str) -> bool {
        self.callbacks.contains_key(event)
    }

    /// Event names this listener handles, sorted
    pub fn events(&self) -> Vec<&str> {
        let mut events: Vec<&str> = self.callbacks.keys().map(String::as_str).collect();
        events.sort_unstable();
        events
    }
}

impl Listener for CallbackListener {
    fn name(&self) -> &str {
        &self.name
    }

    fn handler(&self, event: &str) -> Option<Handler<'_>> {
        let callback = self.callbacks.get(event)?;
        handler(move |args| callback(args))
    }
}

impl fmt::Debug for CallbackListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackListener")
            .field("name", &self.name)
            .field("events", &self.events())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Named;

    impl Listener for Named {
        fn handler(&self, _event: &str) -> Option<Handler<'_>> {
            None
        }
    }

    #[test]
    fn test_default_name_is_type_name() {
        assert!(Named.name().ends_with("Named"));
    }

    #[test]
    fn test_callback_listener_lookup() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let listener = CallbackListener::new("printer")
            .on("reply", move |args| {
                sink.lock().push(args.get_as::<String>(0)?);
                Ok(())
            })
            .on("error", |_| Ok(()));

        assert_eq!(listener.name(), "printer");
        assert_eq!(listener.events(), vec!["error", "reply"]);
        assert!(listener.handles("reply"));
        assert!(listener.handler("undefined").is_none());

        let reply = listener.handler("reply").expect("reply handler");
        reply(&EventArgs::new().arg("hello world")).unwrap();
        assert_eq!(*seen.lock(), vec!["hello world".to_string()]);
    }

    #[test]
    fn test_callback_error_is_returned() {
        let listener = CallbackListener::new("strict").on("reply", |args| {
            let _: u64 = args.get_as(0)?;
            Ok(())
        });

        let reply = listener.handler("reply").expect("reply handler");
        assert!(reply(&EventArgs::new().arg("nan")).is_err());
    }
}
