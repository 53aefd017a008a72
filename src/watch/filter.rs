//! Client-side keyword filtering of issue titles.

use crate::github::Issue;

/// Keep the issues whose title contains any keyword, case-insensitively.
///
/// A single left-to-right pass, so matches keep their API order. Matching
/// stops at the first keyword hit per issue.
pub fn filter_issues(issues: Vec<Issue>, keywords: &[String]) -> Vec<Issue> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    issues
        .into_iter()
        .filter(|issue| {
            let title = issue.title.to_lowercase();
            keywords.iter().any(|keyword| title.contains(keyword))
        })
        .collect()
}
