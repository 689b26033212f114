//! Structured user messaging
//!
//! Commands report conditions (swapped endpoints, skipped files, failed
//! fetches) through the [`Reporter`] seam instead of printing directly, so
//! tests and alternate front ends can assert on emitted notices.

use console::Style;

/// Severity of a reported notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Sink for user-facing notices
pub trait Reporter {
    fn report(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.report(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Severity::Error, message);
    }
}

/// Reporter printing to the terminal, warnings and errors styled
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => println!("{}", message),
            Severity::Warning => {
                println!("{}", Style::new().yellow().apply_to(message));
            }
            Severity::Error => {
                eprintln!("{}", Style::new().red().apply_to(message));
            }
        }
    }
}

/// Reporter recording notices for assertions in tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryReporter {
    events: std::cell::RefCell<Vec<(Severity, String)>>,
}

#[cfg(test)]
impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events.borrow().clone()
    }

    pub fn contains(&self, severity: Severity, fragment: &str) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|(s, m)| *s == severity && m.contains(fragment))
    }
}

#[cfg(test)]
impl Reporter for MemoryReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.events.borrow_mut().push((severity, message.to_string()));
    }
}
