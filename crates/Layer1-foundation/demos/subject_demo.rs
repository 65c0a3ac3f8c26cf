//! Subject walkthrough: one listener handling `reply` and `error`
//!
//! ```text
//! cargo run -p ncclient-foundation --example subject_demo
//! ```

use ncclient_foundation::{
    handler, init_logging, EventArgs, Handler, Listener, LoggingConfig, Subject, SubjectConfig,
};
use std::sync::Arc;

struct Printer;

impl Listener for Printer {
    fn name(&self) -> &str {
        "printer"
    }

    fn handler(&self, event: &str) -> Option<Handler<'_>> {
        match event {
            "reply" => handler(|args| {
                println!("{}", args.get_as::<String>(0)?);
                Ok(())
            }),
            "error" => handler(|args| {
                println!("{}", args.get_as::<String>(0)?);
                Ok(())
            }),
            _ => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(&LoggingConfig::debug())?;

    let subject = Subject::with_config(SubjectConfig::named("demo").with_trace_deliveries(true));
    subject.add_listener(Arc::new(Printer));

    subject.dispatch("reply", &EventArgs::new().arg("hello world"));
    subject.dispatch("error", &EventArgs::new().arg("bye world"));
    // no handler: logged as a warning, dispatch still returns
    subject.dispatch("undefined", &EventArgs::new().arg("happy delivering"));

    Ok(())
}
