//! Utility functions for input parsing

/// Extract the status id from a pasted thread link.
///
/// The id is the final non-empty path segment of the URL, with any query
/// string or fragment stripped. Inputs that do not parse as URLs are treated
/// as bare ids: trimmed, query-stripped, and returned as-is.
///
/// # Examples
///
/// ```
/// use threadbind::utils::parse_status_id;
///
/// assert_eq!(
///     parse_status_id("https://twitter.com/user/status/12345?s=20"),
///     "12345"
/// );
/// assert_eq!(parse_status_id("12345"), "12345");
/// ```
pub fn parse_status_id(input: &str) -> String {
    let trimmed = input.trim();

    if let Ok(parsed) = url::Url::parse(trimmed)
        && let Some(segments) = parsed.path_segments()
        && let Some(last) = segments.filter(|s| !s.is_empty()).next_back()
    {
        return last.to_string();
    }

    // Bare id, or something the URL parser rejected: strip any query string
    // and take the final slash-separated segment by hand.
    let no_query = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
    no_query
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or(no_query)
        .to_string()
}
