//! Per-line dispatch.
//!
//! One line goes through tokenize, resolve, build arguments, invoke and
//! outcome handling. Nothing is kept between lines. Every error that a
//! single line can produce is reported through the UI and swallowed by
//! [`Invoker::invoke`]; [`Invoker::dispatch`] returns them typed instead.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, warn};

use super::{CommandRegistry, InvocationContext, Outcome};
use crate::args::{tokenize, ArgumentVector, LookupMode};
use crate::error::{Result, ShellError};
use crate::session::Session;
use crate::ui::UserInterface;

thread_local! {
    static IN_COMMAND: Cell<bool> = const { Cell::new(false) };
}

/// Send panics raised inside a running command to the debug log.
///
/// [`Invoker::invoke`] already reports those as faults. Panics anywhere
/// else still reach the previous hook.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if in_command() {
            debug!("Command panicked: {}", info);
        } else {
            previous(info);
        }
    }));
}

fn in_command() -> bool {
    IN_COMMAND.with(Cell::get)
}

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The line was blank; nothing ran.
    Empty,
    /// The command ran to completion. Holds the canonical name.
    Completed { command: String },
    /// The line failed and the failure was reported.
    Failed,
}

/// Resolves input lines to commands and runs them.
pub struct Invoker {
    registry: CommandRegistry,
    lookup: LookupMode,
}

impl Invoker {
    /// Create an invoker over a fully built registry.
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            lookup: LookupMode::default(),
        }
    }

    /// Set the not-found policy used for every argument vector built here.
    pub fn with_lookup(mut self, lookup: LookupMode) -> Self {
        self.lookup = lookup;
        self
    }

    /// The commands this invoker can run.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The not-found policy in effect.
    pub fn lookup_mode(&self) -> LookupMode {
        self.lookup
    }

    /// Run one line, reporting any failure to the UI.
    pub fn invoke(
        &self,
        line: &str,
        session: &mut Session,
        ui: &mut dyn UserInterface,
    ) -> Dispatch {
        match self.dispatch(line, session, ui) {
            Ok(dispatch) => dispatch,
            Err(err) => {
                report(&err, ui);
                Dispatch::Failed
            }
        }
    }

    /// Run one line, returning failures as errors.
    ///
    /// Only per-line errors are returned: `CommandNotFound`,
    /// `InvalidUsage` and `UnhandledFault`.
    pub fn dispatch(
        &self,
        line: &str,
        session: &mut Session,
        ui: &mut dyn UserInterface,
    ) -> Result<Dispatch> {
        let mut tokens = tokenize(line).into_iter();
        let Some(name) = tokens.next() else {
            return Ok(Dispatch::Empty);
        };

        let command = self.registry.resolve(&name)?;
        let args = ArgumentVector::with_lookup(tokens, self.lookup);
        let canonical = command.descriptor().name().to_string();
        debug!(
            "Dispatching '{}' as '{}' with {:?}",
            name,
            canonical,
            args.tokens()
        );

        let result = {
            let mut ctx = InvocationContext {
                invoker: self,
                session,
                ui,
                invoked_as: &name,
            };
            let outer = IN_COMMAND.with(|flag| flag.replace(true));
            let result = panic::catch_unwind(AssertUnwindSafe(|| command.invoke(&args, &mut ctx)));
            IN_COMMAND.with(|flag| flag.set(outer));
            result
        };

        match result {
            Ok(Ok(Outcome::Success)) => Ok(Dispatch::Completed { command: canonical }),
            Ok(Ok(Outcome::InvalidUsage)) => {
                let report = command.syntax_error(&name);
                Err(ShellError::InvalidUsage {
                    command: name,
                    report,
                })
            }
            Ok(Err(err)) => Err(ShellError::UnhandledFault {
                command: name,
                message: err.to_string(),
            }),
            Err(payload) => Err(ShellError::UnhandledFault {
                command: name,
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

fn report(err: &ShellError, ui: &mut dyn UserInterface) {
    match err {
        ShellError::CommandNotFound { name } => {
            warn!("Unknown command '{}'", name);
            ui.error(&err.to_string());
            ui.message("Type 'help' to see available commands.");
        }
        ShellError::InvalidUsage { command, report } => {
            debug!("Invalid usage of '{}'", command);
            ui.error(&err.to_string());
            if let Some(report) = report {
                ui.show_usage(report);
            }
        }
        ShellError::UnhandledFault { command, message } => {
            error!("Command '{}' faulted: {}", command, message);
            ui.error(&err.to_string());
        }
        other => {
            error!("{}", other);
            ui.error(&other.to_string());
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, CommandDescriptor};
    use crate::ui::MockUI;

    /// Records the arguments it sees and answers according to its mode.
    struct StubCommand {
        descriptor: CommandDescriptor,
        mode: Reply,
    }

    enum Reply {
        Succeed,
        Reject { with_usage: bool },
        Fail,
        Panic,
        ReportScope,
    }

    impl Command for StubCommand {
        fn descriptor(&self) -> &CommandDescriptor {
            &self.descriptor
        }

        fn invoke(
            &self,
            args: &ArgumentVector,
            ctx: &mut InvocationContext<'_>,
        ) -> Result<Outcome> {
            ctx.ui.message(&format!("{}:{}", ctx.invoked_as, args.tokens().join(",")));
            match self.mode {
                Reply::Succeed => Ok(Outcome::Success),
                Reply::Reject { .. } => Ok(Outcome::InvalidUsage),
                Reply::Fail => Err(anyhow::anyhow!("boom").into()),
                Reply::Panic => panic!("kaboom"),
                Reply::ReportScope => {
                    ctx.ui.message(&format!("in_command={}", in_command()));
                    Ok(Outcome::Success)
                }
            }
        }

        fn usage(&self, invoked_as: &str) -> Option<Vec<String>> {
            match self.mode {
                Reply::Reject { with_usage: true } => {
                    Some(vec![format!("{} <value>", invoked_as)])
                }
                _ => None,
            }
        }
    }

    fn invoker() -> Invoker {
        let mut registry = CommandRegistry::new();
        let stubs = [
            ("color", vec!["col"], Reply::Succeed),
            ("strict", vec![], Reply::Reject { with_usage: true }),
            ("vague", vec![], Reply::Reject { with_usage: false }),
            ("fail", vec![], Reply::Fail),
            ("panic", vec![], Reply::Panic),
            ("scope", vec![], Reply::ReportScope),
        ];
        for (name, aliases, mode) in stubs {
            registry
                .register(Box::new(StubCommand {
                    descriptor: CommandDescriptor::new(name, "").with_aliases(aliases),
                    mode,
                }))
                .unwrap();
        }
        Invoker::new(registry)
    }

    fn session() -> Session {
        Session::new("tester", "box", "/tmp")
    }

    #[test]
    fn empty_line_dispatches_nothing() {
        let mut ui = MockUI::new();
        let mut session = session();
        assert_eq!(invoker().invoke("", &mut session, &mut ui), Dispatch::Empty);
        assert_eq!(invoker().invoke("   \t", &mut session, &mut ui), Dispatch::Empty);
        assert!(ui.messages().is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn passes_remaining_tokens_as_arguments() {
        let mut ui = MockUI::new();
        let mut session = session();
        let result = invoker().invoke("color -f red", &mut session, &mut ui);
        assert_eq!(
            result,
            Dispatch::Completed {
                command: "color".into()
            }
        );
        assert!(ui.has_message("color:-f,red"));
    }

    #[test]
    fn alias_reports_canonical_name_but_keeps_typed_name() {
        let mut ui = MockUI::new();
        let mut session = session();
        let result = invoker().invoke("col -bn blue", &mut session, &mut ui);
        assert_eq!(
            result,
            Dispatch::Completed {
                command: "color".into()
            }
        );
        assert!(ui.has_message("col:-b,-n,blue"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut ui = MockUI::new();
        let mut session = session();
        let before = session.clone();

        let err = invoker()
            .dispatch("nosuchcmd foo", &mut session, &mut ui)
            .unwrap_err();
        assert!(matches!(err, ShellError::CommandNotFound { ref name } if name == "nosuchcmd"));

        assert_eq!(invoker().invoke("nosuchcmd foo", &mut session, &mut ui), Dispatch::Failed);
        assert!(ui.has_error("Unknown command: nosuchcmd"));
        assert_eq!(session, before);
    }

    #[test]
    fn invalid_usage_carries_report_for_typed_name() {
        let mut ui = MockUI::new();
        let mut session = session();
        let err = invoker().dispatch("strict", &mut session, &mut ui).unwrap_err();
        match err {
            ShellError::InvalidUsage { command, report } => {
                assert_eq!(command, "strict");
                assert_eq!(report.unwrap().usage(), &["strict <value>".to_string()]);
            }
            other => panic!("unexpected {other:?}"),
        }

        invoker().invoke("strict", &mut session, &mut ui);
        assert!(ui.has_error("Invalid usage of 'strict'"));
        assert_eq!(ui.usages().len(), 1);
    }

    #[test]
    fn invalid_usage_without_formatter_is_generic() {
        let mut ui = MockUI::new();
        let mut session = session();
        assert_eq!(invoker().invoke("vague x", &mut session, &mut ui), Dispatch::Failed);
        assert!(ui.has_error("Invalid usage of 'vague'"));
        assert!(ui.usages().is_empty());
    }

    #[test]
    fn command_errors_become_faults() {
        let mut ui = MockUI::new();
        let mut session = session();
        let err = invoker().dispatch("fail", &mut session, &mut ui).unwrap_err();
        assert!(matches!(err, ShellError::UnhandledFault { ref message, .. } if message == "boom"));
    }

    #[test]
    fn panics_become_faults_and_dispatch_continues() {
        let mut ui = MockUI::new();
        let mut session = session();
        let invoker = invoker();
        assert_eq!(invoker.invoke("panic", &mut session, &mut ui), Dispatch::Failed);
        assert!(ui.has_error("kaboom"));

        let next = invoker.invoke("color", &mut session, &mut ui);
        assert!(matches!(next, Dispatch::Completed { .. }));
    }

    #[test]
    fn lookup_mode_reaches_arguments() {
        let invoker = Invoker::new(CommandRegistry::new()).with_lookup(LookupMode::Strict);
        assert_eq!(invoker.lookup_mode(), LookupMode::Strict);
        assert!(invoker.registry().is_empty());
    }

    #[test]
    fn command_scope_is_tracked_for_panic_hook() {
        let mut ui = MockUI::new();
        let mut session = session();
        assert!(!in_command());
        invoker().invoke("scope", &mut session, &mut ui);
        assert!(ui.has_message("in_command=true"));
        assert!(!in_command());

        invoker().invoke("panic", &mut session, &mut ui);
        assert!(!in_command());
    }
}
