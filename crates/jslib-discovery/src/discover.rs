//! The discovery pass: candidate declarations to method descriptors.

use crate::source::DeclarationSource;
use jslib_core::{Declaration, Error, MethodDescriptor, Result};

/// Builds the ordered descriptor list for one generation pass.
///
/// Filters the candidate set to declarations carrying the exposure marker,
/// validates arity, and classifies each match:
///
/// - no parameter: `Void`
/// - one parameter: `String`, upgraded to `StringArray` when the string-array
///   marker sits on the same declaration
/// - more than one parameter: the pass fails
///
/// Discovery order is preserved and never sorted; the emitters rely on it.
///
/// The string-array marker must be attached to the exact declaration being
/// classified. It is never matched against other declarations that happen to
/// share the name.
///
/// # Errors
///
/// Returns [`Error::Arity`] for a declaration with more than one parameter
/// (the entire pass aborts, no descriptors are produced), or the source's
/// error if the candidate set cannot be enumerated.
///
/// # Examples
///
/// ```
/// use jslib_core::{Declaration, Marker, ReturnKind};
/// use jslib_discovery::{StaticDeclarations, discover};
///
/// let source = StaticDeclarations::new(vec![
///     Declaration::new("ShowMessage").with_marker(Marker::exposed()),
///     Declaration::new("SendTag")
///         .with_parameter("value")
///         .with_marker(Marker::exposed())
///         .with_marker(Marker::StringArray),
///     Declaration::new("NotExported").with_parameter("ignored"),
/// ]);
///
/// let descriptors = discover(&source).unwrap();
/// assert_eq!(descriptors.len(), 2);
/// assert_eq!(descriptors[0].return_kind(), ReturnKind::Void);
/// assert_eq!(descriptors[1].return_kind(), ReturnKind::StringArray);
/// ```
pub fn discover(source: &dyn DeclarationSource) -> Result<Vec<MethodDescriptor>> {
    let declarations = source.declarations()?;
    tracing::debug!(candidates = declarations.len(), "enumerated declarations");

    let mut descriptors = Vec::new();
    for declaration in &declarations {
        if !declaration.is_exposed() {
            continue;
        }
        descriptors.push(classify(declaration)?);
    }

    tracing::info!(discovered = descriptors.len(), "discovery pass complete");
    Ok(descriptors)
}

fn classify(declaration: &Declaration) -> Result<MethodDescriptor> {
    let count = declaration.parameters.len();
    if count > 1 {
        return Err(Error::Arity {
            method: declaration.name.clone(),
            count,
        });
    }

    let mut descriptor = if count == 1 {
        let parameter = declaration.parameters[0].clone();
        if declaration.has_string_array_marker() {
            MethodDescriptor::string_array(&declaration.name, parameter)
        } else {
            MethodDescriptor::string(&declaration.name, parameter)
        }
    } else {
        MethodDescriptor::void(&declaration.name)
    };

    if let Some(documentation) = &declaration.documentation {
        descriptor = descriptor.with_documentation(documentation);
    }

    tracing::debug!(
        method = %declaration.name,
        kind = %descriptor.return_kind(),
        "classified declaration"
    );
    Ok(descriptor)
}
