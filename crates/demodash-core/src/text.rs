// crates/demodash-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Querétaro` -> `Queretaro`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use demodash_core::text::fold_key;
///
/// assert_eq!(fold_key("San José"), "san jose");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Treats a blank string as "nothing selected".
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
