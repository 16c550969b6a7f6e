use std::collections::BTreeMap;

/// Source phrase → English token table, kept in match order.
///
/// Entries are ordered by descending phrase length (in characters), ties broken by the
/// phrase itself, so a compound term is always replaced before any shorter key it contains.
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    entries: Vec<(String, String)>,
}

impl PhraseDictionary {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        // Later duplicates win, the same way a map literal behaves
        let merged: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();

        let mut entries: Vec<(String, String)> = merged.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| {
            b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b))
        });

        PhraseDictionary { entries }
    }

    /// Replace every known phrase with `|token|`
    pub fn apply(&self, title: &str) -> String {
        let mut remaining = title.to_string();
        for (phrase, token) in &self.entries {
            if remaining.contains(phrase.as_str()) {
                remaining = remaining.replace(phrase.as_str(), &format!("|{}|", token));
            }
        }
        remaining
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Curated exact-match title → slug exceptions
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: BTreeMap<String, String>,
}

impl OverrideTable {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        OverrideTable {
            entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries.get(title).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_ordered_longest_first() {
        let dict = PhraseDictionary::from_pairs(vec![
            ("核心", "core"),
            ("核心竞争力", "core-competitiveness"),
            ("聊", "on"),
            ("工程师", "engineer"),
        ]);
        let keys: Vec<&str> = dict.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["核心竞争力", "工程师", "核心", "聊"]);
    }

    #[test]
    fn test_apply_prefers_compound_phrase() {
        let dict = PhraseDictionary::from_pairs(vec![
            ("核心", "core"),
            ("竞争", "compete"),
            ("核心竞争", "core-competition"),
        ]);
        assert_eq!(dict.apply("我的核心竞争"), "我的|core-competition|");
    }

    #[test]
    fn test_later_duplicate_wins() {
        let dict = PhraseDictionary::from_pairs(vec![("集成", "integration"), ("集成", "integrate")]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.apply("集成"), "|integrate|");
    }
}
