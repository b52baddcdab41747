use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Fixed relative-time phrases. The string form is the canonical phrase
/// reported back to callers as `relative_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Tomorrow,
    #[strum(serialize = "next week")]
    NextWeek,
    #[strum(serialize = "next month")]
    NextMonth,
    #[strum(serialize = "this weekend")]
    ThisWeekend,
    #[strum(serialize = "next weekend")]
    NextWeekend,
}

/// Spelled-out numerals accepted in place of digits ("in two weeks").
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NumberWord {
    A,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
}

impl NumberWord {
    pub fn value(self) -> u64 {
        match self {
            NumberWord::A | NumberWord::One => 1,
            NumberWord::Two => 2,
            NumberWord::Three => 3,
            NumberWord::Four => 4,
            NumberWord::Five => 5,
            NumberWord::Six => 6,
            NumberWord::Seven => 7,
        }
    }
}

/// Turns a numeral token into a count.
///
/// Accepts any [`NumberWord`] (case-insensitive) or a base-10 digit string.
/// Digit strings beyond `u64` saturate to `u64::MAX`; anything that is not a
/// number at all counts as 1.
///
/// ```
/// # use eventdate_core::keywords::parse_number;
/// assert_eq!(parse_number("three"), 3);
/// assert_eq!(parse_number("12"), 12);
/// assert_eq!(parse_number("many"), 1);
/// ```
pub fn parse_number(token: &str) -> u64 {
    if let Ok(word) = token.to_ascii_lowercase().parse::<NumberWord>() {
        return word.value();
    }
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return 1;
    }
    token.parse::<u64>().unwrap_or(u64::MAX)
}

/// Wraps `phrase` in ASCII word boundaries: only `[0-9A-Za-z_]` count as word
/// characters, so "ñtomorrow" still contains "tomorrow".
pub(crate) fn whole_word(phrase: &str) -> String {
    format!(r"(?-u:\b){phrase}(?-u:\b)")
}

/// A synonym compiled into its whole-word pattern.
struct Rewrite {
    alias: String,
    keyword: Keyword,
    pattern: Regex,
}

struct Registry {
    /// alias or canonical phrase → keyword
    phrases: HashMap<String, Keyword>,
    /// longest alias first
    rewrites: Vec<Rewrite>,
}

pub struct Keywords;

impl Keywords {
    /// Returns the **global phrase registry**.
    ///
    /// Initialized once on first access and seeded with every canonical
    /// phrase mapping to itself. Keys are stored lowercased. Synonym patterns
    /// are compiled when added, so [`normalize`](Self::normalize) only runs them.
    fn registry() -> &'static RwLock<Registry> {
        static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| {
            let phrases: HashMap<String, Keyword> = Keyword::iter()
                .map(|keyword| (keyword.as_ref().to_string(), keyword))
                .collect();
            RwLock::new(Registry {
                phrases,
                rewrites: Vec::new(),
            })
        });
        &REGISTRY
    }

    /// Extends the global registry with user-defined **synonyms**.
    ///
    /// Each pair is `(alias, target)`. The `target` must already be known to the
    /// registry (a canonical phrase or a synonym of one); unknown targets are
    /// skipped. Both sides are lowercased.
    ///
    /// Typical call site is `Config::load()`, fed from the `[synonyms]` table:
    ///
    /// ```toml
    /// [synonyms]
    /// tmrw = "tomorrow"
    /// "next wknd" = "next weekend"
    /// ```
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = Self::registry()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for (alias, target) in synonyms {
            let alias = alias.to_lowercase();
            let Some(&keyword) = reg.phrases.get(&target.to_lowercase()) else {
                debug!("ignoring synonym '{alias}': unknown target '{target}'");
                continue;
            };
            if Self::is_canonical(&alias) {
                continue;
            }
            let pattern = match Regex::new(&whole_word(&regex::escape(&alias))) {
                Ok(pattern) => pattern,
                Err(e) => {
                    warn!("ignoring synonym '{alias}': {e}");
                    continue;
                }
            };
            reg.phrases.insert(alias.clone(), keyword);
            reg.rewrites.retain(|rewrite| rewrite.alias != alias);
            reg.rewrites.push(Rewrite {
                alias,
                keyword,
                pattern,
            });
        }
        reg.rewrites.sort_by(|a, b| {
            b.alias
                .len()
                .cmp(&a.alias.len())
                .then_with(|| a.alias.cmp(&b.alias))
        });
    }

    /// Returns `true` if `word` is one of the canonical phrases (eg "tomorrow").
    pub fn is_canonical(word: &str) -> bool {
        let lower = word.to_lowercase();
        Keyword::iter().any(|key| key.as_ref() == lower.as_str())
    }

    /// Rewrites every registered synonym found in `text` (as a whole word) into
    /// its canonical phrase. Longer aliases are rewritten first.
    ///
    /// `text` is expected to be lowercased already.
    pub fn normalize(text: &str) -> String {
        let reg = Self::registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut out = text.to_string();
        for rewrite in &reg.rewrites {
            if rewrite.pattern.is_match(&out) {
                let canonical: &str = rewrite.keyword.as_ref();
                debug!("rewriting synonym '{}' as '{canonical}'", rewrite.alias);
                out = rewrite.pattern.replace_all(&out, canonical).into_owned();
            }
        }
        out
    }
}
