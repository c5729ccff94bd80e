use aho_corasick::AhoCorasick;

use crate::error::{Error, Result};
use crate::literal::exact_literals;

/// Case-insensitive "does the haystack contain any of these tokens" matcher.
///
/// Patterns that are plain literal alternations (the common case:
/// `android|webos|iphone`) are compiled into one Aho-Corasick automaton;
/// anything needing a regex engine (look-around, classes) falls back to
/// `fancy_regex`.
pub(crate) enum TokenMatcher {
    Literals(AhoCorasick),
    Pattern(fancy_regex::Regex),
}

impl TokenMatcher {
    pub fn compile(name: &'static str, pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(Error::EmptyPattern(name));
        }

        if let Some(literals) = exact_literals(pattern) {
            let ac = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(&literals)?;
            tracing::debug!(name, literals = literals.len(), "token matcher: aho-corasick");
            return Ok(Self::Literals(ac));
        }

        let re = fancy_regex::Regex::new(&format!("(?i)(?:{})", pattern))?;
        tracing::debug!(name, "token matcher: fancy-regex");
        Ok(Self::Pattern(re))
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        if haystack.is_empty() {
            return false;
        }
        match self {
            Self::Literals(ac) => ac.is_match(haystack),
            Self::Pattern(re) => re.is_match(haystack).unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_alternation_uses_automaton() {
        let m = TokenMatcher::compile("t", "iphone|ipod").unwrap();
        assert!(matches!(m, TokenMatcher::Literals(_)));
        assert!(m.is_match("Mozilla/5.0 (IPHONE; CPU iPhone OS 17_0)"));
        assert!(!m.is_match("Mozilla/5.0 (X11; Linux x86_64)"));
    }

    #[test]
    fn lookahead_falls_back_to_regex() {
        let m = TokenMatcher::compile("t", "tablet(?! pc)").unwrap();
        assert!(matches!(m, TokenMatcher::Pattern(_)));
        assert!(m.is_match("Android 4.0; Tablet; rv:41.0"));
        assert!(!m.is_match("Windows NT 6.1; Tablet PC 2.0"));
    }

    #[test]
    fn anchored_pattern_keeps_anchor() {
        let m = TokenMatcher::compile("t", "^ipad").unwrap();
        assert!(matches!(m, TokenMatcher::Pattern(_)));
        assert!(m.is_match("iPad; CPU OS 12_2"));
        assert!(!m.is_match("Mozilla (iPad)"));
    }

    #[test]
    fn word_boundaries_respected() {
        let m = TokenMatcher::compile("t", r"\bsilk\b").unwrap();
        assert!(matches!(m, TokenMatcher::Pattern(_)));
        assert!(m.is_match("Silk/3.13 Safari"));
        assert!(!m.is_match("Mozilla silkworm"));
    }

    #[test]
    fn empty_pattern_rejected() {
        assert!(matches!(
            TokenMatcher::compile("mobile", "  "),
            Err(Error::EmptyPattern("mobile"))
        ));
    }

    #[test]
    fn empty_haystack_never_matches() {
        let m = TokenMatcher::compile("t", "a").unwrap();
        assert!(!m.is_match(""));
    }
}
