//! Command text parsing

/// A verb and its arguments, as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: String,
    pub args: Vec<String>,
}

/// Split message text on single spaces into a verb and its arguments
///
/// The split is literal: consecutive spaces yield empty arguments and
/// nothing is trimmed. Empty text yields an empty verb and no arguments.
pub fn parse(text: &str) -> Command {
    let mut tokens = text.split(' ').map(str::to_string);
    let verb = tokens.next().unwrap_or_default();
    Command {
        verb,
        args: tokens.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verb_and_args() {
        let cmd = parse("/check 1.2.3.4:8080");
        assert_eq!(cmd.verb, "/check");
        assert_eq!(cmd.args, vec!["1.2.3.4:8080"]);
    }

    #[test]
    fn test_parse_verb_only() {
        let cmd = parse("/start");
        assert_eq!(cmd.verb, "/start");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_parse_empty_text() {
        let cmd = parse("");
        assert_eq!(cmd.verb, "");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_parse_keeps_empty_tokens() {
        let cmd = parse("/proxies  US");
        assert_eq!(cmd.verb, "/proxies");
        assert_eq!(cmd.args, vec!["", "US"]);

        let cmd = parse("/proxies US ");
        assert_eq!(cmd.args, vec!["US", ""]);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let cmd = parse("/START now");
        assert_eq!(cmd.verb, "/START");
        assert_eq!(cmd.args, vec!["now"]);
    }
}
