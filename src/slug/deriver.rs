use lazy_static::lazy_static;
use regex::Regex;

use super::{OverrideTable, PhraseDictionary, Slug, SlugStrategy, MAX_SLUG_LEN};
use crate::utils::error::MigrateError;

lazy_static! {
    static ref TOKEN_DELIMITERS: Regex = Regex::new(r"[|｜\s：:？?！!，,、。；;]").unwrap();
    static ref ASCII_TOKEN: Regex = Regex::new(r"^[a-zA-Z0-9-]+$").unwrap();
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9-]").unwrap();
    static ref REPEATED_HYPHENS: Regex = Regex::new(r"-{2,}").unwrap();
    static ref NON_WORD_CHARS: Regex = Regex::new(r"[^a-zA-Z0-9_\s-]").unwrap();
    static ref WORD_SEPARATORS: Regex = Regex::new(r"[\s_]+").unwrap();
}

/// Derives slugs from titles using one strategy plus the override table
#[derive(Debug, Clone)]
pub struct SlugDeriver {
    strategy: SlugStrategy,
    dictionary: PhraseDictionary,
    overrides: OverrideTable,
}

impl SlugDeriver {
    pub fn new(strategy: SlugStrategy, dictionary: PhraseDictionary, overrides: OverrideTable) -> Self {
        SlugDeriver { strategy, dictionary, overrides }
    }

    #[cfg(test)]
    pub fn strategy(&self) -> SlugStrategy {
        self.strategy
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Derive a slug string; empty when nothing usable survives
    pub fn derive_slug(&self, title: &str) -> String {
        if let Some(curated) = self.overrides.get(title) {
            return curated.to_string();
        }

        self.derive_automatic(title)
    }

    /// Derive with the configured strategy, ignoring overrides
    pub fn derive_automatic(&self, title: &str) -> String {
        match self.strategy {
            SlugStrategy::Dictionary => derive_with_dictionary(title, &self.dictionary),
            SlugStrategy::Simple => derive_simple(title),
        }
    }

    /// Derive and validate. An empty or otherwise invalid result is an error.
    pub fn derive(&self, title: &str) -> Result<Slug, MigrateError> {
        let raw = self.derive_slug(title);
        if raw.is_empty() {
            return Err(MigrateError::Slug(format!(
                "no translatable words in title `{}`", title
            )));
        }
        Slug::new(raw)
    }
}

/// Dictionary-assisted derivation. Untranslated fragments are dropped, not transliterated.
pub fn derive_with_dictionary(title: &str, dictionary: &PhraseDictionary) -> String {
    let replaced = dictionary.apply(title);

    let tokens: Vec<&str> = TOKEN_DELIMITERS
        .split(&replaced)
        .filter(|part| ASCII_TOKEN.is_match(part))
        .collect();

    normalize(&tokens.join("-"))
}

/// Word-character derivation for titles already in the Latin alphabet
pub fn derive_simple(title: &str) -> String {
    let stripped = NON_WORD_CHARS.replace_all(title.trim(), "");
    let hyphenated = WORD_SEPARATORS.replace_all(&stripped, "-");
    normalize(&hyphenated)
}

/// Lowercase, keep `[a-z0-9-]`, collapse and trim hyphens, cap the length
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let collapsed = REPEATED_HYPHENS.replace_all(&cleaned, "-");
    let trimmed = collapsed.trim_matches('-');

    // Only ASCII is left, so byte slicing is safe
    let capped = if trimmed.len() > MAX_SLUG_LEN { &trimmed[..MAX_SLUG_LEN] } else { trimmed };
    capped.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::{tables, validate_slug};

    const CAMP_TITLE: &str = "同学，为什么我建议你关注 1024 实训营？";

    fn builtin(strategy: SlugStrategy) -> SlugDeriver {
        SlugDeriver::new(
            strategy,
            PhraseDictionary::from_pairs(tables::builtin_dictionary()),
            OverrideTable::from_pairs(tables::builtin_overrides()),
        )
    }

    fn is_conforming(slug: &str) -> bool {
        slug.is_empty() || validate_slug(slug).is_ok()
    }

    #[test]
    fn test_dictionary_drops_untranslated_fragments() {
        let deriver = SlugDeriver::new(
            SlugStrategy::Dictionary,
            PhraseDictionary::from_pairs(tables::builtin_dictionary()),
            OverrideTable::default(),
        );
        assert_eq!(deriver.derive_slug(CAMP_TITLE), "why-suggest-follow-1024-techcamp");
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(
            builtin(SlugStrategy::Dictionary).derive_slug(CAMP_TITLE),
            "why-you-should-join-1024-techcamp"
        );
        assert_eq!(
            builtin(SlugStrategy::Simple).derive_slug(CAMP_TITLE),
            "why-you-should-join-1024-techcamp"
        );
    }

    #[test]
    fn test_override_ignores_dictionary_content() {
        let deriver = SlugDeriver::new(
            SlugStrategy::Dictionary,
            PhraseDictionary::from_pairs(vec![("架构设计", "something-else")]),
            OverrideTable::from_pairs(vec![("架构设计从何入手？", "where-to-start-architecture-design")]),
        );
        assert_eq!(deriver.derive_slug("架构设计从何入手？"), "where-to-start-architecture-design");
    }

    #[test]
    fn test_longest_match_precedence() {
        let dict = PhraseDictionary::from_pairs(vec![
            ("工程", "project"),
            ("实践", "practice"),
            ("工程实践", "engineering-practice"),
        ]);
        assert_eq!(derive_with_dictionary("工程实践分享", &dict), "engineering-practice");

        let dict = PhraseDictionary::from_pairs(vec![("核心", "core"), ("核心竞争力", "core-competitiveness")]);
        assert_eq!(
            derive_with_dictionary("工程师的核心竞争力", &dict),
            "core-competitiveness"
        );
    }

    #[test]
    fn test_mixed_language_keeps_ascii_words() {
        let deriver = builtin(SlugStrategy::Dictionary);
        assert_eq!(
            deriver.derive_automatic("GitHub PR 合并三选一：主分支该怎么选？"),
            "github-pr-merge-three-options-main-branch-which-to-choose"
        );
    }

    #[test]
    fn test_untranslatable_title_is_empty_and_rejected() {
        let deriver = builtin(SlugStrategy::Dictionary);
        assert_eq!(deriver.derive_slug("你好世界"), "");
        assert!(matches!(deriver.derive("你好世界"), Err(MigrateError::Slug(_))));
        assert_eq!(deriver.derive_slug("？！，、"), "");
    }

    #[test]
    fn test_simple_strategy() {
        assert_eq!(derive_simple("Hello, World! Rust_in Action"), "hello-world-rust-in-action");
        assert_eq!(derive_simple("  --Trailing--  "), "trailing");
        assert_eq!(derive_simple("中文标题"), "");
    }

    #[test]
    fn test_normalize_caps_length_without_trailing_hyphen() {
        let long = format!("{}-{}", "a".repeat(99), "b".repeat(20));
        let slug = normalize(&long);
        assert_eq!(slug, "a".repeat(99));

        let long = "ab-".repeat(60);
        let slug = normalize(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(validate_slug(&slug).is_ok());
    }

    #[test]
    fn test_deterministic_and_conforming() {
        let deriver = builtin(SlugStrategy::Dictionary);
        let titles = [
            CAMP_TITLE,
            "当 AI 能写代码，工程师的核心竞争力是什么？",
            "Code Review 不是什么——盘点5个常见误区",
            "llpyg: LLGo 快速集成 Python 生态的桥梁",
            "一行之差：为什么你的文件末尾应该留一个空行？",
            "X绘图-我们是如何让AI更好的融入我们的产品的",
            "--!!--",
            "",
            "Ünïcödé café",
        ];
        for title in titles {
            let first = deriver.derive_slug(title);
            assert_eq!(first, deriver.derive_slug(title));
            assert!(is_conforming(&first), "{:?} -> {:?}", title, first);
            assert!(first.len() <= MAX_SLUG_LEN);

            let simple = derive_simple(title);
            assert!(is_conforming(&simple), "{:?} -> {:?}", title, simple);
        }
    }

    #[test]
    fn test_builtin_overrides_are_valid_slugs() {
        for (title, slug) in tables::builtin_overrides() {
            assert!(validate_slug(slug).is_ok(), "{} -> {}", title, slug);
        }
    }
}
