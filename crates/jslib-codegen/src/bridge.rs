//! Bridge artifact emission.
//!
//! Renders the descriptor list into the `.jslib` module merged into the
//! WebGL loader's library. Each entry forwards the engine call to a global
//! browser handler named `<lowerFirst(method)>FromUnity`; entries with a
//! payload receive a native string pointer plus a buffer size and decode the
//! pointer with `UTF8ToString` before forwarding.

use crate::naming::lower_first;
use crate::template_engine::TemplateEngine;
use jslib_core::{MethodDescriptor, Result};
use serde::Serialize;

/// Fixed opening line of the bridge module.
const BRIDGE_OPEN: &str = "mergeInto(LibraryManager.library, {\n";
/// Fixed closing line of the bridge module.
const BRIDGE_CLOSE: &str = "});\n";

#[derive(Debug, Serialize)]
struct EntryContext {
    entry_name: String,
    handler_name: String,
    parameter_name: Option<String>,
    has_parameter: bool,
}

impl EntryContext {
    fn new(descriptor: &MethodDescriptor) -> Self {
        let lower_name = lower_first(descriptor.method_name());
        Self {
            entry_name: lower_name.clone(),
            handler_name: format!("{lower_name}FromUnity"),
            parameter_name: descriptor.parameter_name().map(str::to_string),
            has_parameter: descriptor.has_parameter(),
        }
    }
}

/// Generator for the bridge (`.jslib`) artifact.
///
/// # Examples
///
/// ```
/// use jslib_codegen::BridgeGenerator;
/// use jslib_core::MethodDescriptor;
///
/// let generator = BridgeGenerator::new().unwrap();
/// let bridge = generator
///     .generate(&[MethodDescriptor::void("ShowMessage")])
///     .unwrap();
///
/// assert!(bridge.starts_with("mergeInto(LibraryManager.library, {"));
/// assert!(bridge.contains("window.showMessageFromUnity();"));
/// ```
#[derive(Debug)]
pub struct BridgeGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl BridgeGenerator<'_> {
    /// Creates a bridge generator with the built-in entry template.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Renders the full bridge module for the given descriptors.
    ///
    /// Entries appear in descriptor order, each followed by a blank line,
    /// inside the fixed `mergeInto` block. The output is a pure function of
    /// the descriptor list.
    ///
    /// # Errors
    ///
    /// Returns error if entry rendering fails.
    pub fn generate(&self, descriptors: &[MethodDescriptor]) -> Result<String> {
        let mut content = String::from(BRIDGE_OPEN);
        for descriptor in descriptors {
            let context = EntryContext::new(descriptor);
            content.push_str(&self.engine.render("bridge/entry", &context)?);
            content.push('\n');
            tracing::debug!(entry = %context.entry_name, "rendered bridge entry");
        }
        content.push_str(BRIDGE_CLOSE);

        tracing::info!(entries = descriptors.len(), "bridge artifact rendered");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_descriptor_list_yields_bare_block() {
        let generator = BridgeGenerator::new().unwrap();
        let bridge = generator.generate(&[]).unwrap();
        assert_eq!(bridge, "mergeInto(LibraryManager.library, {\n});\n");
    }

    #[test]
    fn test_void_entry_takes_no_payload() {
        let generator = BridgeGenerator::new().unwrap();
        let bridge = generator
            .generate(&[MethodDescriptor::void("ShowMessage")])
            .unwrap();

        assert!(bridge.contains("  showMessage: function () {\n"));
        assert!(bridge.contains("    window.showMessageFromUnity();\n"));
        assert!(!bridge.contains("UTF8ToString"));
    }

    #[test]
    fn test_parameter_entry_decodes_native_string() {
        let generator = BridgeGenerator::new().unwrap();
        let bridge = generator
            .generate(&[MethodDescriptor::string_array("SendTag", "value")])
            .unwrap();

        assert!(bridge.contains("  sendTag: function (value, size) {\n"));
        assert!(bridge.contains("    window.sendTagFromUnity(UTF8ToString(value));\n"));
    }

    #[test]
    fn test_string_and_string_array_entries_are_identical_in_shape() {
        // The bridge only cares about parameter presence; the array upgrade
        // happens client-side.
        let generator = BridgeGenerator::new().unwrap();
        let plain = generator
            .generate(&[MethodDescriptor::string("SendTag", "value")])
            .unwrap();
        let array = generator
            .generate(&[MethodDescriptor::string_array("SendTag", "value")])
            .unwrap();
        assert_eq!(plain, array);
    }

    #[test]
    fn test_full_module_layout() {
        let generator = BridgeGenerator::new().unwrap();
        let bridge = generator
            .generate(&[
                MethodDescriptor::void("ShowMessage"),
                MethodDescriptor::string_array("SendTag", "value"),
            ])
            .unwrap();

        let expected = "mergeInto(LibraryManager.library, {\n  showMessage: function () {\n    window.showMessageFromUnity();\n  },\n\n  sendTag: function (value, size) {\n    window.sendTagFromUnity(UTF8ToString(value));\n  },\n\n});\n";
        assert_eq!(bridge, expected);
    }

    #[test]
    fn test_entries_keep_descriptor_order() {
        let generator = BridgeGenerator::new().unwrap();
        let bridge = generator
            .generate(&[
                MethodDescriptor::void("Zulu"),
                MethodDescriptor::void("Alpha"),
            ])
            .unwrap();

        let zulu = bridge.find("zulu:").unwrap();
        let alpha = bridge.find("alpha:").unwrap();
        assert!(zulu < alpha);
    }

    #[test]
    fn test_emission_is_deterministic() {
        let generator = BridgeGenerator::new().unwrap();
        let descriptors = vec![
            MethodDescriptor::void("ShowMessage"),
            MethodDescriptor::string("SetSceneName", "sceneName"),
        ];

        let first = generator.generate(&descriptors).unwrap();
        let second = generator.generate(&descriptors).unwrap();
        assert_eq!(first, second);
    }
}
