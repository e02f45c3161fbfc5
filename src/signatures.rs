use aho_corasick::AhoCorasick;

use crate::error::Result;

/// Ordered table of substring signatures, each entry carrying a value.
///
/// Every entry owns one or more literal tokens. All tokens are compiled into a
/// single automaton so the UA is scanned once; when several entries hit, the
/// one declared first wins, as if the entries had been tried in order.
pub(crate) struct SignatureSet<T> {
    automaton: AhoCorasick,
    /// Maps automaton pattern index → entry index.
    pattern_to_entry: Vec<usize>,
    /// Entry data indexed by entry index.
    data: Vec<T>,
}

impl<T> SignatureSet<T> {
    pub fn build(items: impl IntoIterator<Item = (&'static [&'static str], T)>) -> Result<Self> {
        let mut patterns: Vec<&'static str> = Vec::new();
        let mut pattern_to_entry: Vec<usize> = Vec::new();
        let mut data: Vec<T> = Vec::new();

        for (entry, (tokens, value)) in items.into_iter().enumerate() {
            patterns.extend_from_slice(tokens);
            pattern_to_entry.extend(std::iter::repeat(entry).take(tokens.len()));
            data.push(value);
        }

        let automaton = AhoCorasick::new(&patterns)?;

        Ok(Self {
            automaton,
            pattern_to_entry,
            data,
        })
    }

    /// Value of the lowest-index entry with a token inside `ua`.
    pub fn match_first(&self, ua: &str) -> Option<&T> {
        // Overlapping search is needed: a leftmost match could hide a token
        // of an earlier entry that starts later in the haystack.
        self.automaton
            .find_overlapping_iter(ua)
            .map(|m| self.pattern_to_entry[m.pattern().as_usize()])
            .min()
            .map(|entry| &self.data[entry])
    }

    /// Number of entries (not tokens).
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SignatureSet<&'static str> {
        SignatureSet::build([
            (&["googlebot"] as &[_], "google"),
            (&["bot"] as &[_], "generic"),
            (&["yandex", "yadirectfetcher"] as &[_], "yandex"),
        ])
        .unwrap()
    }

    #[test]
    fn earlier_entry_beats_earlier_position() {
        let set = table();
        // "bot" appears inside "robot" before "googlebot" starts.
        assert_eq!(set.match_first("robot googlebot"), Some(&"google"));
        assert_eq!(set.match_first("some robot"), Some(&"generic"));
    }

    #[test]
    fn any_token_selects_the_entry() {
        let set = table();
        assert_eq!(set.match_first("yadirectfetcher/1.0"), Some(&"yandex"));
        assert_eq!(set.match_first("mozilla/5.0"), None);
        assert_eq!(set.len(), 3);
    }
}
