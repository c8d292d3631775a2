//! Shared helpers for the workspace-level integration tests.

use std::sync::Once;

use rcalc::{ReplConfig, ReplSession};

static INIT: Once = Once::new();

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Feeds `lines` to a fresh session and returns what a terminal would show,
/// prompts included. Stops at the exit keyword like the interactive loop.
pub fn transcript(config: ReplConfig, lines: &[&str]) -> String {
    let mut session = ReplSession::new(config);
    let mut out = String::new();
    for line in lines {
        out.push_str(&session.prompt());
        out.push_str(line);
        out.push('\n');
        let outcome = session.handle_line(line);
        if let Some(text) = outcome.render() {
            out.push_str(&text);
            out.push('\n');
        }
        if outcome == rcalc::ReplOutcome::Exit {
            break;
        }
    }
    out
}
