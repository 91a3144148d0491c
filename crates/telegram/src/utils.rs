//! Utility functions for argument parsing and formatting

pub use proxy::render::escape_html;

/// First argument, treating an empty token as absent
pub fn first_arg(args: &[String]) -> Option<&str> {
    args.first().map(String::as_str).filter(|arg| !arg.is_empty())
}

/// Page number from an optional argument
///
/// Leading digits are read and the rest ignored, so `2abc` is page 2.
/// Absent, empty, non-numeric, negative and overflowing input all mean
/// page 0. Pages past the end are left to the renderer.
pub fn parse_page(arg: Option<&String>) -> usize {
    let page = match arg {
        Some(page) => page.trim_start().strip_prefix('+').unwrap_or(page.trim_start()),
        None => return 0,
    };
    let digits = page.len() - page.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    page[..digits].parse::<usize>().unwrap_or(0)
}

/// Split a `host:port` argument
///
/// Only the first two `:`-separated pieces are used; a missing port is
/// returned as an empty string.
pub fn split_host_port(target: &str) -> (&str, &str) {
    let mut parts = target.split(':');
    let host = parts.next().unwrap_or("");
    let port = parts.next().unwrap_or("");
    (host, port)
}

/// Wrap text in a preformatted block for the HTML parse mode
pub fn preformatted(text: &str) -> String {
    format!("<pre>{}</pre>", escape_html(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_first_arg() {
        assert_eq!(first_arg(&args(&["US", "2"])), Some("US"));
        assert_eq!(first_arg(&args(&["", "2"])), None);
        assert_eq!(first_arg(&[]), None);
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None), 0);
        assert_eq!(parse_page(Some(&"2".to_string())), 2);
        assert_eq!(parse_page(Some(&"".to_string())), 0);
        assert_eq!(parse_page(Some(&"abc".to_string())), 0);
        assert_eq!(parse_page(Some(&"-3".to_string())), 0);
        assert_eq!(parse_page(Some(&"99999999999999999999999".to_string())), 0);
    }

    #[test]
    fn test_parse_page_reads_leading_digits() {
        assert_eq!(parse_page(Some(&"2abc".to_string())), 2);
        assert_eq!(parse_page(Some(&"3.5".to_string())), 3);
        assert_eq!(parse_page(Some(&"+4".to_string())), 4);
        assert_eq!(parse_page(Some(&"abc2".to_string())), 0);
    }

    #[test]
    fn test_split_host_port() {
        assert_eq!(split_host_port("1.2.3.4:8080"), ("1.2.3.4", "8080"));
        assert_eq!(split_host_port("1.2.3.4"), ("1.2.3.4", ""));
        assert_eq!(split_host_port("a:b:c"), ("a", "b"));
    }

    #[test]
    fn test_preformatted_escapes() {
        assert_eq!(preformatted("{\"a\": \"<b>\"}"), "<pre>{&quot;a&quot;: &quot;&lt;b&gt;&quot;}</pre>");
    }
}
