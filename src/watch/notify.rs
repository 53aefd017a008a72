//! Notification output for matched issues.

use std::io::{self, Write};

use crate::github::Issue;

/// Write one notification line per issue to `out`, in input order.
pub fn notify_to<W: Write>(out: &mut W, issues: &[Issue]) -> io::Result<()> {
    for issue in issues {
        writeln!(
            out,
            "New security issue detected: {} - {}",
            issue.title, issue.url
        )?;
    }
    Ok(())
}

/// Print notification lines to stdout.
/// Write failures to stdout are not reported anywhere.
pub fn notify(issues: &[Issue]) {
    let stdout = io::stdout();
    let _ = notify_to(&mut stdout.lock(), issues);
}
