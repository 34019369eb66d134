//! Count formatting for log messages.

use crate::naming::make_plural;

/// Format count with noun, pluralizing the noun when needed.
///
/// - `plural_count(0, "entity")` -> `"0 entities"`
/// - `plural_count(1, "route")` -> `"1 route"`
/// - `plural_count(2, "namespace")` -> `"2 namespaces"`
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {}", make_plural(noun))
    }
}
