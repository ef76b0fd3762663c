//! Placeholder interface synthesis for matched declarations.

use super::matcher::PropertyMatch;
use crate::defaults::Defaults;

/// A generated `interface <Name>Props { ... }` block for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDeclaration {
    pub name: String,
    pub props: Vec<String>,
    pub type_marker: String,
    pub follow_up_comment: String,
}

impl GeneratedDeclaration {
    pub fn from_match(m: &PropertyMatch, defaults: &Defaults) -> Self {
        Self {
            name: m.name.clone(),
            props: m.props(),
            type_marker: defaults.type_marker.clone(),
            follow_up_comment: defaults.follow_up_comment.clone(),
        }
    }

    pub fn interface_name(&self) -> String {
        format!("{}Props", self.name)
    }

    /// Render the interface block, one property per line.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.props.len() + 2);
        lines.push(format!("interface {} {{", self.interface_name()));
        for prop in &self.props {
            let mut line = format!("    {}: {};", prop, self.type_marker);
            if !self.follow_up_comment.is_empty() {
                line.push_str(" // ");
                line.push_str(&self.follow_up_comment);
            }
            lines.push(line);
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

/// The declaration line with its parameter annotated by the generated interface.
pub fn annotated_signature(m: &PropertyMatch) -> String {
    format!(
        "export function {}({{ {} }}: {}Props) {{",
        m.name, m.props_raw, m.name
    )
}

/// Full replacement for a match: interface, blank line, annotated declaration.
pub fn replacement_for(m: &PropertyMatch, defaults: &Defaults) -> String {
    let declaration = GeneratedDeclaration::from_match(m, defaults);
    format!("{}\n\n{}", declaration.render(), annotated_signature(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_match() -> PropertyMatch {
        PropertyMatch {
            matched: "export function Widget({ a, b, c }) {".to_string(),
            name: "Widget".to_string(),
            props_raw: "a, b, c".to_string(),
            start: 0,
        }
    }

    #[test]
    fn renders_interface_block() {
        let decl = GeneratedDeclaration::from_match(&widget_match(), &Defaults::default());
        assert_eq!(
            decl.render(),
            "interface WidgetProps {\n    a: any; // TODO: Add proper type\n    b: any; // TODO: Add proper type\n    c: any; // TODO: Add proper type\n}"
        );
    }

    #[test]
    fn annotated_signature_references_interface() {
        assert_eq!(
            annotated_signature(&widget_match()),
            "export function Widget({ a, b, c }: WidgetProps) {"
        );
    }

    #[test]
    fn replacement_separates_with_blank_line() {
        let text = replacement_for(&widget_match(), &Defaults::default());
        assert!(text.starts_with("interface WidgetProps {\n"));
        assert!(text.ends_with("}\n\nexport function Widget({ a, b, c }: WidgetProps) {"));
    }

    #[test]
    fn custom_marker_and_empty_comment() {
        let defaults = Defaults {
            type_marker: "unknown".to_string(),
            follow_up_comment: String::new(),
            ..Defaults::default()
        };
        let decl = GeneratedDeclaration::from_match(&widget_match(), &defaults);
        assert!(decl.render().contains("    a: unknown;\n"));
        assert!(!decl.render().contains("//"));
    }
}
