//! Client artifact emission.
//!
//! Renders the descriptor list into the typed Angular service that receives
//! the bridge's global handler calls and republishes them as RxJS streams.
//! The artifact is assembled from fixed sections in a contractual order:
//! banner, imports, global subjects, class doc + opening, observable fields,
//! constructor, listener registration, listener bodies, class close. Front-end
//! tooling consumes this file verbatim, so ordering and whitespace are part
//! of the contract.

use crate::naming::lower_first;
use crate::template_engine::TemplateEngine;
use jslib_core::{MethodDescriptor, Result, ReturnKind};
use serde::Serialize;
use serde_json::json;

const SUBJECTS_NOTE: &str = "// NOTE: These subjects are used as a more global scope, so we can access it in JavaScript function of Unity.\n";
const SETUP_OPEN: &str = "  private setupUnityListeners(): void {\n";
const SETUP_CLOSE: &str = "  }\n\n";
const CLASS_CLOSE: &str = "}\n";

#[derive(Debug, Serialize)]
struct MethodContext {
    lower_name: String,
    handler_name: String,
    subject_name: String,
    parameter_name: Option<String>,
    typescript_type: &'static str,
    subject_class: &'static str,
    default_value: &'static str,
    documentation: Option<String>,
    #[serde(skip)]
    return_kind: ReturnKind,
}

impl MethodContext {
    fn new(descriptor: &MethodDescriptor) -> Self {
        let lower_name = lower_first(descriptor.method_name());
        let kind = descriptor.return_kind();

        // Non-void streams replay their latest value to late subscribers.
        let subject_class = if kind.is_void() {
            "Subject"
        } else {
            "BehaviorSubject"
        };

        Self {
            handler_name: format!("{lower_name}FromUnity"),
            subject_name: format!("{lower_name}Subject"),
            lower_name,
            parameter_name: descriptor.parameter_name().map(lower_first),
            typescript_type: kind.typescript_type(),
            subject_class,
            default_value: kind.default_value(),
            documentation: descriptor.documentation().map(str::to_string),
            return_kind: kind,
        }
    }

    const fn listener_template(&self) -> &'static str {
        match self.return_kind {
            ReturnKind::Void => "client/listener_void",
            ReturnKind::String => "client/listener_string",
            ReturnKind::StringArray => "client/listener_string_array",
        }
    }
}

/// Generator for the typed client service artifact.
///
/// # Examples
///
/// ```
/// use jslib_codegen::ClientGenerator;
/// use jslib_core::MethodDescriptor;
///
/// let generator = ClientGenerator::new().unwrap();
/// let client = generator
///     .generate(&[MethodDescriptor::string_array("SendTag", "value")])
///     .unwrap();
///
/// assert!(client.contains("export class UnityJSLibExportedService {"));
/// assert!(client.contains("sendTagSubject.next(split);"));
/// ```
#[derive(Debug)]
pub struct ClientGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl ClientGenerator<'_> {
    /// Creates a client generator with the built-in section templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Renders the full client service for the given descriptors.
    ///
    /// Descriptors appear in discovery order within every section. Listener
    /// methods are separated by one blank line, except after the final one.
    ///
    /// # Errors
    ///
    /// Returns error if any section fails to render.
    pub fn generate(&self, descriptors: &[MethodDescriptor]) -> Result<String> {
        let contexts: Vec<MethodContext> = descriptors.iter().map(MethodContext::new).collect();

        let mut content = self.engine.render("client/header", &json!({}))?;

        // Global subjects, one per method
        content.push_str(SUBJECTS_NOTE);
        for context in &contexts {
            content.push_str(&self.engine.render("client/subject", context)?);
        }
        content.push('\n');

        // Service class: doc block, decorator, public observable views
        content.push_str(&self.engine.render("client/class_open", &json!({}))?);
        for context in &contexts {
            content.push_str(&self.engine.render("client/observable", context)?);
        }
        content.push('\n');

        content.push_str(&self.engine.render("client/constructor", &json!({}))?);

        // Handler registration onto the window side-table
        content.push_str(SETUP_OPEN);
        for context in &contexts {
            content.push_str(&self.engine.render("client/registration", context)?);
        }
        content.push_str(SETUP_CLOSE);

        // Listener bodies, blank-line separated except after the last
        for (index, context) in contexts.iter().enumerate() {
            content.push_str(&self.engine.render(context.listener_template(), context)?);
            if index + 1 != contexts.len() {
                content.push('\n');
            }
            tracing::debug!(listener = %context.handler_name, "rendered client listener");
        }
        content.push_str(CLASS_CLOSE);

        tracing::info!(methods = descriptors.len(), "client artifact rendered");
        Ok(content)
    }
}
