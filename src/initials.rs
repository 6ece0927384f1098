use anyhow::Result;

/// Exact display names whose natural abbreviation would be confusing
/// (acronym-style names, repeated letters)
const OVERRIDES: &[(&str, &str)] = &[
    ("The AA", "AA"),
    ("ATSG", "AT"),
    ("IOR", "IR"),
    ("KAPS", "KP"),
];

/// Trailing qualifiers that carry no brand identity
const SUFFIXES: &[&str] = &[" (JV)", " Inc", " Group"];

/// Connective words skipped when picking representative letters
const STOPWORDS: &[&str] = &["the", "of", "and", "&"];

/// One rule in the derivation chain. Strategies are tried in order;
/// the first one returning `Some` wins.
pub trait InitialsStrategy {
    fn derive(&self, display_name: &str) -> Option<String>;
    fn name(&self) -> &'static str;
}

fn strip_suffixes(name: &str) -> &str {
    let mut stripped = name;
    for suffix in SUFFIXES {
        if let Some(rest) = stripped.strip_suffix(suffix) {
            stripped = rest;
        }
    }
    stripped
}

fn first_two_upper(word: &str) -> String {
    word.chars()
        .take(2)
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Literal lookup of hand-picked abbreviations
pub struct OverrideLookup;

impl InitialsStrategy for OverrideLookup {
    fn derive(&self, display_name: &str) -> Option<String> {
        OVERRIDES
            .iter()
            .find(|(name, _)| *name == display_name)
            .map(|(_, initials)| initials.to_string())
    }

    fn name(&self) -> &'static str {
        "Override Lookup"
    }
}

/// First two letters of a single-word name, after suffix stripping
pub struct SingleWord;

impl InitialsStrategy for SingleWord {
    fn derive(&self, display_name: &str) -> Option<String> {
        let stripped = strip_suffixes(display_name);
        let words: Vec<&str> = stripped.split_whitespace().collect();
        match words.as_slice() {
            [word] => Some(first_two_upper(word)),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "Single Word"
    }
}

/// First letters of the first two non-stopword words
pub struct SignificantWords;

impl InitialsStrategy for SignificantWords {
    fn derive(&self, display_name: &str) -> Option<String> {
        let stripped = strip_suffixes(display_name);
        let words: Vec<&str> = stripped.split_whitespace().collect();
        if words.len() < 2 {
            return None;
        }
        let mut acc = String::new();
        for word in words.iter().take(2) {
            if STOPWORDS.contains(&word.to_lowercase().as_str()) {
                continue;
            }
            if let Some(first) = word.chars().next() {
                acc.extend(first.to_uppercase());
            }
        }
        if acc.is_empty() {
            return None;
        }
        Some(acc.chars().take(2).collect())
    }

    fn name(&self) -> &'static str {
        "Significant Words"
    }
}

/// Degenerate fallback: first two letters of the first word
pub struct FirstWordFallback;

impl InitialsStrategy for FirstWordFallback {
    fn derive(&self, display_name: &str) -> Option<String> {
        let stripped = strip_suffixes(display_name);
        let first = stripped.split_whitespace().next()?;
        Some(first_two_upper(first))
    }

    fn name(&self) -> &'static str {
        "First Word Fallback"
    }
}

/// Maps a company display name to a 1-2 letter abbreviation by running
/// an ordered chain of strategies
pub struct InitialsDeriver {
    strategies: Vec<Box<dyn InitialsStrategy>>,
}

impl InitialsDeriver {
    /// Build the default chain: override lookup, single word,
    /// significant words, first-word fallback
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(OverrideLookup),
                Box::new(SingleWord),
                Box::new(SignificantWords),
                Box::new(FirstWordFallback),
            ],
        }
    }

    /// Derive initials for a display name. Empty and whitespace-only
    /// names are rejected.
    pub fn derive(&self, display_name: &str) -> Result<String> {
        if display_name.trim().is_empty() {
            anyhow::bail!("Cannot derive initials from an empty company name");
        }
        for strategy in &self.strategies {
            if let Some(initials) = strategy.derive(display_name) {
                return Ok(initials);
            }
        }
        let tried: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        anyhow::bail!(
            "No strategy produced initials for {:?} (tried: {})",
            display_name,
            tried.join(", ")
        );
    }
}

impl Default for InitialsDeriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive initials with the default strategy chain
pub fn derive_initials(display_name: &str) -> Result<String> {
    InitialsDeriver::new().derive(display_name)
}
