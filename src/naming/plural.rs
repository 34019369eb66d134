//! English pluralization for entity names.
//!
//! Rules are matched against the end of the word, last rule first, and the
//! first match wins. The table follows the Rails inflector, which is what
//! existing MFD projects were generated with, so `Category` becomes
//! `Categories` and `News` stays `News`.

use regex::Regex;
use std::sync::LazyLock;

/// Words that never change.
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// Irregular singular/plural pairs, matched as word suffixes.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("mombie", "mombies"),
];

/// Suffix rules in declaration order. Later rules take precedence.
const RULES: &[(&str, &str)] = &[
    ("([a-z])$", "${1}s"),
    ("s$", "s"),
    ("^(ax|test)is$", "${1}es"),
    ("(octop|vir)us$", "${1}i"),
    ("(octop|vir)i$", "${1}i"),
    ("(alias|status|campus)$", "${1}es"),
    ("(bu)s$", "${1}ses"),
    ("(buffal|tomat)o$", "${1}oes"),
    ("([ti])um$", "${1}a"),
    ("([ti])a$", "${1}a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(hive)$", "${1}s"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    ("^(m|l)ouse$", "${1}ice"),
    ("^(m|l)ice$", "${1}ice"),
    ("^(ox)$", "${1}en"),
    ("^(oxen)$", "${1}"),
    ("(quiz)$", "${1}zes"),
];

/// Every rule in three variants, tried in this order: upper case, as
/// written, case-insensitive. The upper case variant keeps all-caps names
/// all-caps.
static COMPILED: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    RULES
        .iter()
        .rev()
        .flat_map(|(find, replace)| {
            [
                (find.to_ascii_uppercase(), replace.to_ascii_uppercase()),
                (find.to_string(), replace.to_string()),
                (format!("(?i){find}"), replace.to_string()),
            ]
        })
        .map(|(find, replace)| (Regex::new(&find).unwrap(), replace))
        .collect()
});

/// Pluralize a single English word or a CamelCase identifier.
///
/// Returns the input unchanged when no rule applies.
pub fn inflect(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_ascii_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some(plural) = irregular(word) {
        return plural;
    }

    for (re, replace) in COMPILED.iter() {
        if re.is_match(word) {
            return re.replace(word, replace.as_str()).into_owned();
        }
    }

    word.to_string()
}

/// Match an irregular suffix in upper, title or lower case.
fn irregular(word: &str) -> Option<String> {
    for (singular, plural) in IRREGULAR {
        let cases = [
            (singular.to_ascii_uppercase(), plural.to_ascii_uppercase()),
            (title(singular), title(plural)),
            (singular.to_string(), plural.to_string()),
        ];

        for (from, to) in cases {
            if let Some(stem) = word.strip_suffix(from.as_str()) {
                return Some(format!("{stem}{to}"));
            }
        }
    }
    None
}

fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflect_regular() {
        assert_eq!(inflect("Tag"), "Tags");
        assert_eq!(inflect("Region"), "Regions");
        assert_eq!(inflect("VfsFolder"), "VfsFolders");
        assert_eq!(inflect("EncryptionKey"), "EncryptionKeys");
    }

    #[test]
    fn test_inflect_consonant_y() {
        assert_eq!(inflect("Category"), "Categories");
        assert_eq!(inflect("City"), "Cities");
        assert_eq!(inflect("Country"), "Countries");
    }

    #[test]
    fn test_inflect_sibilants() {
        assert_eq!(inflect("Box"), "Boxes");
        assert_eq!(inflect("Match"), "Matches");
        assert_eq!(inflect("Address"), "Addresses");
        assert_eq!(inflect("Status"), "Statuses");
    }

    #[test]
    fn test_inflect_already_plural() {
        assert_eq!(inflect("News"), "News");
        assert_eq!(inflect("Settings"), "Settings");
    }

    #[test]
    fn test_inflect_irregular_keeps_case() {
        assert_eq!(inflect("Person"), "People");
        assert_eq!(inflect("SalesPerson"), "SalesPeople");
        assert_eq!(inflect("child"), "children");
    }

    #[test]
    fn test_inflect_uncountable() {
        assert_eq!(inflect("Equipment"), "Equipment");
        assert_eq!(inflect("sheep"), "sheep");
    }

    #[test]
    fn test_inflect_f_ending() {
        assert_eq!(inflect("Wife"), "Wives");
        assert_eq!(inflect("Shelf"), "Shelves");
    }

    #[test]
    fn test_inflect_all_caps() {
        assert_eq!(inflect("CATEGORY"), "CATEGORIES");
        assert_eq!(inflect("BOX"), "BOXES");
        assert_eq!(inflect("TAG"), "TAGS");
    }

    #[test]
    fn test_every_rule_compiles() {
        assert_eq!(COMPILED.len(), RULES.len() * 3);
    }

    #[test]
    fn test_inflect_empty() {
        assert_eq!(inflect(""), "");
    }
}
