use std::borrow::Cow;

/// Expand `$VAR` / `${VAR}` references in a user supplied path.
///
/// Unknown variables expand to the empty string, like a POSIX shell.
///
/// # Example
/// ```
/// use cg_source::path::expand_path;
/// assert_eq!(expand_path("plain/file.gif"), "plain/file.gif");
/// ```
#[must_use]
pub fn expand_path(path: &str) -> Cow<'_, str> {
    shellexpand::env_with_context_no_errors(path, |var| {
        Some(std::env::var(var).unwrap_or_default())
    })
}
