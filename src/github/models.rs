//! Issue model.

use serde::Deserialize;

/// An open issue reduced to the fields the watcher uses.
///
/// Built fresh from each API response and discarded at the end of the cycle;
/// there is no cross-cycle identity.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Issue {
    /// Issue title, matched against the configured keywords.
    pub title: String,

    /// Web URL shown in notifications.
    #[serde(rename = "html_url")]
    pub url: String,
}
