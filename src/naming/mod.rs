//! Identifier transforms shared by the project model and route generation.
//!
//! | Function       | Example                              |
//! |----------------|--------------------------------------|
//! | [`var_name`]   | `VfsFile` -> `vfsFile`, `TagIDs` -> `tagIds` |
//! | [`make_plural`]| `Category` -> `Categories`           |
//! | [`url_name`]   | `EncryptionKeys` -> `encryption-keys`|
//! | [`is_reserved`]| `Switch` -> `true`                   |

mod plural;

use heck::ToKebabCase;

const ID: &str = "ID";
const IDS: &str = "IDs";

/// Go keywords. Entity names become Go identifiers in the server code.
const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// JS/TS reserved words not already covered by [`GO_KEYWORDS`].
const JS_KEYWORDS: &[&str] = &[
    "await",
    "catch",
    "class",
    "debugger",
    "delete",
    "do",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "function",
    "implements",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "private",
    "protected",
    "public",
    "static",
    "super",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "void",
    "while",
    "with",
    "yield",
];

/// Names the generated model code defines itself.
const MODEL_RESERVED: &[&str] = &[
    "Columns",
    "Tables",
    "Searcher",
    "ErrEmptyValue",
    "ErrMaxLength",
    "ErrWrongValue",
    "Status",
    "OpFunc",
];

/// Lower camel case variable name.
///
/// A trailing `ID`/`IDs` is normalized to `Id`/`Ids` first.
pub fn var_name(name: &str) -> String {
    let name = if let Some(stem) = name.strip_suffix(IDS) {
        format!("{stem}Ids")
    } else if let Some(stem) = name.strip_suffix(ID) {
        format!("{stem}Id")
    } else {
        name.to_string()
    };

    lower_first(&name)
}

/// Plural form of an entity name.
pub fn make_plural(name: &str) -> String {
    if name.ends_with(ID) {
        return format!("{name}s");
    }

    let plural = plural::inflect(name);
    if plural != name {
        return plural;
    }

    if name.ends_with('s') {
        name.to_string()
    } else {
        format!("{name}s")
    }
}

/// Kebab case URL segment.
pub fn url_name(name: &str) -> String {
    name.to_kebab_case()
}

/// Check if `name` collides with a Go or JS keyword (case-insensitive).
pub fn is_reserved(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    GO_KEYWORDS.contains(&lower.as_str()) || JS_KEYWORDS.contains(&lower.as_str())
}

/// Check if `name` collides with an identifier of the generated model code.
pub fn is_reserved_by_model(name: &str) -> bool {
    MODEL_RESERVED.contains(&name)
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_name() {
        assert_eq!(var_name("Category"), "category");
        assert_eq!(var_name("EncryptionKey"), "encryptionKey");
        assert_eq!(var_name("VfsFile"), "vfsFile");
        assert_eq!(var_name("News"), "news");
    }

    #[test]
    fn test_var_name_id_suffix() {
        assert_eq!(var_name("CategoryID"), "categoryId");
        assert_eq!(var_name("TagIDs"), "tagIds");
        assert_eq!(var_name("ID"), "id");
    }

    #[test]
    fn test_var_name_empty() {
        assert_eq!(var_name(""), "");
    }

    #[test]
    fn test_make_plural() {
        assert_eq!(make_plural("Category"), "Categories");
        assert_eq!(make_plural("News"), "News");
        assert_eq!(make_plural("VfsFile"), "VfsFiles");
        assert_eq!(make_plural("CategoryID"), "CategoryIDs");
    }

    #[test]
    fn test_url_name() {
        assert_eq!(url_name("EncryptionKeys"), "encryption-keys");
        assert_eq!(url_name("VfsFolders"), "vfs-folders");
        assert_eq!(url_name("News"), "news");
    }

    #[test]
    fn test_terminal_path_derivation() {
        let derive = |name: &str| url_name(&make_plural(name));
        assert_eq!(derive("Category"), "categories");
        assert_eq!(derive("Country"), "countries");
        assert_eq!(derive("EncryptionKey"), "encryption-keys");
        assert_eq!(derive("VfsFolder"), "vfs-folders");
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("Switch"));
        assert!(is_reserved("class"));
        assert!(is_reserved("MAP"));
        assert!(!is_reserved("News"));
    }

    #[test]
    fn test_is_reserved_by_model() {
        assert!(is_reserved_by_model("Status"));
        assert!(!is_reserved_by_model("status"));
        assert!(!is_reserved_by_model("Category"));
    }
}
