use crate::{categories, exceptions, rules};
use std::collections::{HashMap, HashSet};

/// Anglicized English pluralization: `schema` becomes `schemas`, not
/// `schemata`.
pub struct Inflector {
    irregular_singles: HashMap<&'static str, &'static str>,
    irregular_plurals: HashSet<&'static str>,
    uncountable: HashSet<&'static str>,
}

impl Default for Inflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector {
    pub fn new() -> Self {
        let mut irregular_singles = HashMap::new();
        let mut irregular_plurals = HashSet::new();

        for (single, plural) in exceptions::IRREGULAR {
            irregular_singles.insert(*single, *plural);
            irregular_plurals.insert(*plural);
        }

        Self {
            irregular_singles,
            irregular_plurals,
            uncountable: categories::UNCOUNTABLE.iter().copied().collect(),
        }
    }

    /// Pluralize a single word or the last segment of a compound identifier
    /// (`OrderItem` -> `OrderItems`). The casing of the input is kept.
    pub fn pluralize(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        let token = word.to_lowercase();

        if self.is_uncountable(&token) || self.irregular_plurals.contains(token.as_str()) {
            return word.to_owned();
        }

        if let Some(plural) = self.irregular_singles.get(token.as_str()) {
            return restore_case(word, plural);
        }

        for rule in rules::PLURAL_RULES.iter() {
            let Some(captures) = rule.pattern.captures(word) else {
                continue;
            };
            let Some(matched) = captures.get(0) else {
                continue;
            };
            let mut replacement = String::new();
            captures.expand(rule.replacement, &mut replacement);

            let restored = if matched.as_str().is_empty() {
                let previous = word[..matched.start()].chars().last().map(String::from).unwrap_or_default();
                restore_case(&previous, &replacement)
            } else {
                restore_case(matched.as_str(), &replacement)
            };

            return format!("{}{}{}", &word[..matched.start()], restored, &word[matched.end()..]);
        }

        word.to_owned()
    }

    fn is_uncountable(&self, token: &str) -> bool {
        self.uncountable.contains(token) || categories::UNCOUNTABLE_SUFFIXES.iter().any(|re| re.is_match(token))
    }
}

/// Apply the casing of `word` to `token`.
fn restore_case(word: &str, token: &str) -> String {
    if word == token {
        return token.to_owned();
    }

    if word == word.to_lowercase() {
        return token.to_lowercase();
    }

    if word == word.to_uppercase() {
        return token.to_uppercase();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let mut token_chars = token.chars();
            match token_chars.next() {
                Some(head) => head.to_uppercase().chain(token_chars.as_str().to_lowercase().chars()).collect(),
                None => String::new(),
            }
        }
        _ => token.to_lowercase(),
    }
}
