//! Declarative first-match cascades.
//!
//! A cascade is a slice of `(Rule, value)` pairs tried top to bottom; the
//! first rule that holds yields its value. Most rules are plain substring
//! tests, a few need a predicate combining several tokens.

#[derive(Clone, Copy)]
pub(crate) enum Rule {
    /// Holds when any of the tokens occurs in the UA.
    Any(&'static [&'static str]),
    /// Holds when the predicate accepts the UA.
    Test(fn(&str) -> bool),
}

impl Rule {
    pub fn matches(&self, ua: &str) -> bool {
        match self {
            Rule::Any(tokens) => contains_any(ua, tokens),
            Rule::Test(test) => test(ua),
        }
    }
}

pub(crate) fn first_match<T: Copy>(rules: &[(Rule, T)], ua: &str) -> Option<T> {
    rules
        .iter()
        .find(|(rule, _)| rule.matches(ua))
        .map(|&(_, value)| value)
}

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_both(ua: &str) -> bool {
        ua.contains("a") && ua.contains("z")
    }

    const RULES: &[(Rule, u8)] = &[
        (Rule::Test(has_both), 1),
        (Rule::Any(&["a", "b"]), 2),
        (Rule::Any(&["z"]), 3),
    ];

    #[test]
    fn order_decides() {
        assert_eq!(first_match(RULES, "zap"), Some(1));
        assert_eq!(first_match(RULES, "bz"), Some(2));
        assert_eq!(first_match(RULES, "z"), Some(3));
        assert_eq!(first_match(RULES, "q"), None);
    }
}
