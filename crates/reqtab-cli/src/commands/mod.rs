pub mod extract;
pub mod requirements;

use reqtab_core::events::{EventSeverity, ScanEvent};

/// Print warning-level scan diagnostics to stderr.
pub fn report_warnings(events: &[ScanEvent]) {
    for event in events {
        if event.severity() == EventSeverity::Warning {
            eprintln!("  warning: {event}");
        }
    }
}
