//! Name conversion helpers.
//!
//! The host program declares methods in PascalCase; everything emitted for
//! the browser side (bridge entry keys, handler names, subject variables,
//! listener parameters) is camelCase, obtained by lowering only the first
//! character.

/// Lowers the first character of `s` when it is uppercase.
///
/// Everything after the first character is left untouched; a string that
/// does not start with an uppercase letter (including the empty string) is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use jslib_codegen::naming::lower_first;
///
/// assert_eq!(lower_first("ShowMessage"), "showMessage");
/// assert_eq!(lower_first("Foo"), "foo");
/// assert_eq!(lower_first("f"), "f");
/// assert_eq!(lower_first(""), "");
/// assert_eq!(lower_first("already"), "already");
/// ```
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            first.to_lowercase().collect::<String>() + chars.as_str()
        }
        _ => s.to_string(),
    }
}
