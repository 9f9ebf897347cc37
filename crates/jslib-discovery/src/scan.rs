//! Rust source scanning declaration source.
//!
//! Walks a directory of Rust sources and reads marker attributes off free
//! functions, so the exportable set can be declared next to the code that
//! implements it. Recognized markers:
//!
//! - `#[angular_exposed]` or `#[angular_exposed(game_object = "Name")]`
//! - `#[string_array]`
//!
//! Doc comments on a marked function are carried as declaration
//! documentation. Files are visited in file-name order so repeated scans
//! yield an identical declaration sequence.

use crate::source::DeclarationSource;
use jslib_core::{Declaration, Error, Marker, Result};
use std::fs;
use std::path::{Path, PathBuf};
use syn::{Expr, ExprLit, FnArg, Item, ItemFn, Lit, LitStr, Meta, Pat};
use walkdir::WalkDir;

const EXPOSED_ATTR: &str = "angular_exposed";
const STRING_ARRAY_ATTR: &str = "string_array";

/// Declaration source that parses Rust source files.
///
/// # Examples
///
/// ```
/// use jslib_discovery::SourceScanner;
///
/// let declarations = SourceScanner::parse(
///     r#"
///     /// Fires when the popup opens.
///     #[angular_exposed]
///     fn show_message() {}
///
///     fn helper() {}
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(declarations.len(), 2);
/// assert!(declarations[0].is_exposed());
/// assert!(!declarations[1].is_exposed());
/// ```
#[derive(Debug, Clone)]
pub struct SourceScanner {
    root: PathBuf,
}

impl SourceScanner {
    /// Creates a scanner over `root`, which may be a directory tree or a
    /// single `.rs` file.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory or file this scanner reads.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parses one source text into candidate declarations.
    ///
    /// Every free function becomes a candidate; markers and documentation
    /// are attached where present. Item order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`] when the text is not parseable Rust or a
    /// marker attribute has malformed arguments.
    pub fn parse(text: &str) -> Result<Vec<Declaration>> {
        let file = syn::parse_file(text).map_err(|e| Error::Source {
            message: "failed to parse Rust source".to_string(),
            source: Some(Box::new(e)),
        })?;

        file.items
            .iter()
            .filter_map(|item| match item {
                Item::Fn(function) => Some(declaration_from_fn(function)),
                _ => None,
            })
            .collect()
    }
}

impl DeclarationSource for SourceScanner {
    fn declarations(&self) -> Result<Vec<Declaration>> {
        let mut declarations = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::Source {
                message: format!("failed to walk {}", self.root.display()),
                source: Some(Box::new(e)),
            })?;
            if !entry.file_type().is_file()
                || entry.path().extension().is_none_or(|ext| ext != "rs")
            {
                continue;
            }

            let text = fs::read_to_string(entry.path()).map_err(|e| Error::Source {
                message: format!("failed to read {}", entry.path().display()),
                source: Some(Box::new(e)),
            })?;
            let mut found = Self::parse(&text)?;
            tracing::debug!(
                file = %entry.path().display(),
                candidates = found.len(),
                "scanned source file"
            );
            declarations.append(&mut found);
        }

        Ok(declarations)
    }
}

fn declaration_from_fn(function: &ItemFn) -> Result<Declaration> {
    let mut declaration = Declaration::new(function.sig.ident.to_string());

    for (index, input) in function.sig.inputs.iter().enumerate() {
        let FnArg::Typed(pat_type) = input else {
            continue;
        };
        let name = match pat_type.pat.as_ref() {
            Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
            _ => format!("arg{index}"),
        };
        declaration = declaration.with_parameter(name);
    }

    let mut doc_lines = Vec::new();
    for attr in &function.attrs {
        if attr.path().is_ident("doc") {
            if let Some(line) = doc_text(&attr.meta) {
                doc_lines.push(line);
            }
        } else if attr.path().is_ident(EXPOSED_ATTR) {
            let game_object_name = exposed_game_object(attr, &declaration.name)?;
            declaration = declaration.with_marker(Marker::Exposed { game_object_name });
        } else if attr.path().is_ident(STRING_ARRAY_ATTR) {
            declaration = declaration.with_marker(Marker::StringArray);
        }
    }
    if !doc_lines.is_empty() {
        declaration = declaration.with_documentation(doc_lines.join(" "));
    }

    Ok(declaration)
}

fn doc_text(meta: &Meta) -> Option<String> {
    let Meta::NameValue(name_value) = meta else {
        return None;
    };
    let Expr::Lit(ExprLit {
        lit: Lit::Str(text), ..
    }) = &name_value.value
    else {
        return None;
    };
    let line = text.value().trim().to_string();
    (!line.is_empty()).then_some(line)
}

fn exposed_game_object(attr: &syn::Attribute, method: &str) -> Result<Option<String>> {
    if matches!(attr.meta, Meta::Path(_)) {
        return Ok(None);
    }

    let mut game_object = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("game_object") {
            let value: LitStr = meta.value()?.parse()?;
            game_object = Some(value.value());
            Ok(())
        } else {
            Err(meta.error("expected `game_object = \"...\"`"))
        }
    })
    .map_err(|e| Error::Source {
        message: format!("malformed {EXPOSED_ATTR} attribute on {method}"),
        source: Some(Box::new(e)),
    })?;

    Ok(game_object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collects_all_free_functions() {
        let declarations = SourceScanner::parse(
            r"
            #[angular_exposed]
            fn show_message() {}

            fn helper(x: u32) -> u32 { x }
            ",
        )
        .unwrap();

        assert_eq!(declarations.len(), 2);
        assert!(declarations[0].is_exposed());
        assert!(!declarations[1].is_exposed());
        assert_eq!(declarations[1].parameters, vec!["x".to_string()]);
    }

    #[test]
    fn test_parse_reads_game_object_argument() {
        let declarations = SourceScanner::parse(
            r#"
            #[angular_exposed(game_object = "SceneInformer")]
            fn set_scene_name(scene_name: String) {}
            "#,
        )
        .unwrap();

        assert_eq!(declarations[0].game_object_name(), Some("SceneInformer"));
        assert_eq!(declarations[0].parameters, vec!["scene_name".to_string()]);
    }

    #[test]
    fn test_parse_reads_string_array_marker() {
        let declarations = SourceScanner::parse(
            r"
            #[angular_exposed]
            #[string_array]
            fn send_tag(value: String) {}
            ",
        )
        .unwrap();

        assert!(declarations[0].has_string_array_marker());
    }

    #[test]
    fn test_parse_joins_doc_lines() {
        let declarations = SourceScanner::parse(
            r"
            /// Fires when the popup opens.
            /// Carries no payload.
            #[angular_exposed]
            fn show_message() {}
            ",
        )
        .unwrap();

        assert_eq!(
            declarations[0].documentation.as_deref(),
            Some("Fires when the popup opens. Carries no payload.")
        );
    }

    #[test]
    fn test_parse_rejects_malformed_marker_arguments() {
        let err = SourceScanner::parse(
            r"
            #[angular_exposed(informer)]
            fn show_message() {}
            ",
        )
        .unwrap_err();

        assert!(err.is_source_error());
        assert!(format!("{err}").contains("show_message"));
    }

    #[test]
    fn test_parse_rejects_invalid_rust() {
        let err = SourceScanner::parse("fn broken(").unwrap_err();
        assert!(err.is_source_error());
    }

    #[test]
    fn test_scanner_visits_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b.rs"),
            "#[angular_exposed]\nfn from_b() {}\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("a.rs"),
            "#[angular_exposed]\nfn from_a() {}\n",
        )
        .unwrap();

        let scanner = SourceScanner::new(dir.path());
        let names: Vec<_> = scanner
            .declarations()
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["from_a", "from_b"]);
    }

    #[test]
    fn test_scanner_skips_non_rust_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not rust").unwrap();
        std::fs::write(
            dir.path().join("informer.rs"),
            "#[angular_exposed]\nfn show_message() {}\n",
        )
        .unwrap();

        let scanner = SourceScanner::new(dir.path());
        assert_eq!(scanner.declarations().unwrap().len(), 1);
    }
}
