//! Template engine for artifact emission.
//!
//! Wraps Handlebars with the built-in bridge and client templates
//! pre-registered. Emission is purely template substitution, so the engine
//! runs in strict mode (missing context fields fail the render) and with
//! HTML escaping disabled (the artifacts are code, not markup - quotes must
//! survive verbatim).
//!
//! # Examples
//!
//! ```
//! use jslib_codegen::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({
//!     "handler_name": "showMessageFromUnity",
//!     "subject_name": "showMessageSubject",
//! });
//! let listener = engine.render("client/listener_void", &context).unwrap();
//! assert!(listener.contains("showMessageSubject.next();"));
//! ```

use handlebars::Handlebars;
use jslib_core::{Error, Result};
use serde::Serialize;

/// Template engine with the generator's built-in templates registered.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across thread
/// boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new engine with all built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen with
    /// valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        // The output is JavaScript/TypeScript; never HTML-escape it
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_builtin_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_builtin_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        const TEMPLATES: &[(&str, &str)] = &[
            (
                "bridge/entry",
                include_str!("../templates/bridge/entry.jslib.hbs"),
            ),
            (
                "client/header",
                include_str!("../templates/client/header.ts.hbs"),
            ),
            (
                "client/subject",
                include_str!("../templates/client/subject.ts.hbs"),
            ),
            (
                "client/class_open",
                include_str!("../templates/client/class_open.ts.hbs"),
            ),
            (
                "client/observable",
                include_str!("../templates/client/observable.ts.hbs"),
            ),
            (
                "client/constructor",
                include_str!("../templates/client/constructor.ts.hbs"),
            ),
            (
                "client/registration",
                include_str!("../templates/client/registration.ts.hbs"),
            ),
            (
                "client/listener_void",
                include_str!("../templates/client/listener_void.ts.hbs"),
            ),
            (
                "client/listener_string",
                include_str!("../templates/client/listener_string.ts.hbs"),
            ),
            (
                "client/listener_string_array",
                include_str!("../templates/client/listener_string_array.ts.hbs"),
            ),
        ];

        for &(name, template) in TEMPLATES {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| Error::TemplateError {
                    message: format!("failed to register template '{name}': {e}"),
                })?;
        }
        Ok(())
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if the template name is unknown, the context cannot be
    /// serialized, or a placeholder is missing from the context.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("rendering '{template_name}' failed: {e}"),
            })
    }

    /// Registers a custom template, replacing any existing one of that name.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use jslib_codegen::TemplateEngine;
    /// use serde_json::json;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine
    ///     .register_template_string("banner", "// {{tool}}")
    ///     .unwrap();
    /// let out = engine.render("banner", &json!({"tool": "exporter"})).unwrap();
    /// assert_eq!(out, "// exporter");
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("failed to register template '{name}': {e}"),
            })
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new().expect("failed to create default TemplateEngine")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_default_trait() {
        let _engine = TemplateEngine::default();
    }

    #[test]
    fn test_render_bridge_entry_without_parameter() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "entry_name": "showMessage",
            "handler_name": "showMessageFromUnity",
            "has_parameter": false,
            "parameter_name": null,
        });

        let rendered = engine.render("bridge/entry", &context).unwrap();
        assert_eq!(
            rendered,
            "  showMessage: function () {\n    window.showMessageFromUnity();\n  },\n"
        );
    }

    #[test]
    fn test_render_bridge_entry_with_parameter() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "entry_name": "sendTag",
            "handler_name": "sendTagFromUnity",
            "has_parameter": true,
            "parameter_name": "value",
        });

        let rendered = engine.render("bridge/entry", &context).unwrap();
        assert_eq!(
            rendered,
            "  sendTag: function (value, size) {\n    window.sendTagFromUnity(UTF8ToString(value));\n  },\n"
        );
    }

    #[test]
    fn test_render_subject_line_keeps_quotes_unescaped() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "subject_name": "sendTagSubject",
            "subject_class": "BehaviorSubject",
            "typescript_type": "string[]",
            "default_value": "[]",
        });

        let rendered = engine.render("client/subject", &context).unwrap();
        assert_eq!(
            rendered,
            "const sendTagSubject: BehaviorSubject<string[]> = new BehaviorSubject<string[]>([]);\n"
        );
    }

    #[test]
    fn test_render_registration_line() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({"handler_name": "sendTagFromUnity"});

        let rendered = engine.render("client/registration", &context).unwrap();
        assert_eq!(
            rendered,
            "    window[\"sendTagFromUnity\"] = this.sendTagFromUnity;\n"
        );
    }

    #[test]
    fn test_render_observable_with_and_without_documentation() {
        let engine = TemplateEngine::new().unwrap();

        let documented = json!({
            "lower_name": "sendTag",
            "typescript_type": "string[]",
            "subject_name": "sendTagSubject",
            "documentation": "Tag selection changed.",
        });
        let rendered = engine.render("client/observable", &documented).unwrap();
        assert_eq!(
            rendered,
            "  /** Tag selection changed. */\n  public sendTag$: Observable<string[]> = sendTagSubject.asObservable();\n"
        );

        let bare = json!({
            "lower_name": "sendTag",
            "typescript_type": "string[]",
            "subject_name": "sendTagSubject",
            "documentation": null,
        });
        let rendered = engine.render("client/observable", &bare).unwrap();
        assert_eq!(
            rendered,
            "  public sendTag$: Observable<string[]> = sendTagSubject.asObservable();\n"
        );
    }

    #[test]
    fn test_render_nonexistent_template() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render("nonexistent/template", &json!({}));

        assert!(result.is_err());
        assert!(result.unwrap_err().is_template_error());
    }

    #[test]
    fn test_strict_mode_fails_on_missing_field() {
        let engine = TemplateEngine::new().unwrap();
        // Missing everything the subject template needs
        let result = engine.render("client/subject", &json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_register_invalid_template_syntax() {
        let mut engine = TemplateEngine::new().unwrap();
        let result = engine.register_template_string("invalid", "Hello {{name");
        assert!(result.is_err());
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateEngine>();
    }
}
