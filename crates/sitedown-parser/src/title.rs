//! Page title lookup.

use sitedown_core::{Result, SitedownError};

/// Return the text of the first `# ` heading line in `markdown`.
///
/// # Example
///
/// ```
/// use sitedown_parser::extract_title;
///
/// let title = extract_title("# Hello  \n\nBody").unwrap();
/// assert_eq!(title, "Hello");
/// ```
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(SitedownError::MissingTitle)
}
