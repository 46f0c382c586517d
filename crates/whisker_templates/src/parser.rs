//! Template compilation.
//!
//! Supported tags:
//!
//! ```text
//! {{name}}   {{{name}}}   {{&name}}      - variables
//! {{#name}}...{{/name}}                  - sections
//! {{^name}}...{{/name}}                  - inverted sections
//! {{! comment }}                         - comments
//! ```

use std::str::FromStr;

use regex::{Captures, Regex};
use tracing::debug;
use whisker_core::Path;

use crate::error::{TemplateError, TemplateResult};

/// A node of a compiled template.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    /// `{{name}}`, `{{{name}}}` and `{{&name}}` all substitute the same way;
    /// escaping belongs to the output writer.
    Variable { path: Path },
    Section {
        path: Path,
        inverted: bool,
        children: Vec<Node>,
    },
}

/// A compiled template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Compile `source` with a fresh parser.
    pub fn compile(source: &str) -> TemplateResult<Self> {
        TemplateParser::new().parse(source)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

struct OpenSection {
    name: String,
    path: Path,
    inverted: bool,
    line: usize,
    children: Vec<Node>,
}

/// Regex-driven template parser.
pub struct TemplateParser {
    tag_pattern: Regex,
}

impl Default for TemplateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateParser {
    /// Create a new template parser.
    pub fn new() -> Self {
        Self {
            // {{{raw}}} first, then {{sigil name}}
            tag_pattern: Regex::new(
                r"(?s)\{\{\{\s*(.*?)\s*\}\}\}|\{\{\s*([#^/!&>=<$]?)\s*(.*?)\s*\}\}",
            )
            .unwrap(),
        }
    }

    /// Compile `source` into a [`Template`].
    pub fn parse(&self, source: &str) -> TemplateResult<Template> {
        let mut root = Vec::new();
        let mut open: Vec<OpenSection> = Vec::new();
        let mut cursor = 0;
        let mut line = 1;

        for caps in self.tag_pattern.captures_iter(source) {
            let Some(tag) = caps.get(0) else {
                continue;
            };
            let before = &source[cursor..tag.start()];
            line += before.matches('\n').count();
            if !before.is_empty() {
                current(&mut open, &mut root).push(Node::Text(before.to_string()));
            }

            self.handle_tag(&caps, line, &mut open, &mut root)?;

            line += tag.as_str().matches('\n').count();
            cursor = tag.end();
        }

        if cursor < source.len() {
            current(&mut open, &mut root).push(Node::Text(source[cursor..].to_string()));
        }

        if let Some(section) = open.pop() {
            return Err(TemplateError::UnclosedSection {
                name: section.name,
                line: section.line,
            });
        }

        debug!("Compiled template with {} top-level nodes", root.len());
        Ok(Template { nodes: root })
    }

    fn handle_tag(
        &self,
        caps: &Captures<'_>,
        line: usize,
        open: &mut Vec<OpenSection>,
        root: &mut Vec<Node>,
    ) -> TemplateResult<()> {
        if let Some(name) = caps.get(1) {
            let path = parse_path(name.as_str(), line)?;
            current(open, root).push(Node::Variable { path });
            return Ok(());
        }

        let sigil = caps.get(2).map_or("", |m| m.as_str());
        let name = caps.get(3).map_or("", |m| m.as_str());

        match sigil {
            "!" => {}
            "" | "&" => {
                let path = parse_path(name, line)?;
                current(open, root).push(Node::Variable { path });
            }
            "#" | "^" => {
                let path = parse_path(name, line)?;
                open.push(OpenSection {
                    name: name.to_string(),
                    path,
                    inverted: sigil == "^",
                    line,
                    children: Vec::new(),
                });
            }
            "/" => {
                let Some(section) = open.pop() else {
                    return Err(TemplateError::UnexpectedClose {
                        name: name.to_string(),
                        line,
                    });
                };
                if section.name != name {
                    return Err(TemplateError::MismatchedClose {
                        expected: section.name,
                        found: name.to_string(),
                        line,
                    });
                }
                current(open, root).push(Node::Section {
                    path: section.path,
                    inverted: section.inverted,
                    children: section.children,
                });
            }
            other => {
                return Err(TemplateError::UnsupportedTag {
                    sigil: other.to_string(),
                    line,
                });
            }
        }
        Ok(())
    }
}

/// The node list new nodes are appended to: the innermost open section's
/// children, or the template root.
fn current<'v>(open: &'v mut [OpenSection], root: &'v mut Vec<Node>) -> &'v mut Vec<Node> {
    match open.last_mut() {
        Some(section) => &mut section.children,
        None => root,
    }
}

fn parse_path(raw: &str, line: usize) -> TemplateResult<Path> {
    Path::parse(raw).map_err(|source| TemplateError::InvalidTag { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(path: &str) -> Node {
        Node::Variable {
            path: Path::parse(path).unwrap(),
        }
    }

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    #[test]
    fn test_parse_text_and_variables() {
        let template = Template::compile("Hello, {{ name }}! {{foo.bar}}").unwrap();
        assert_eq!(
            template.nodes(),
            [text("Hello, "), var("name"), text("! "), var("foo.bar")]
        );
    }

    #[test]
    fn test_parse_triple_and_ampersand_variables() {
        let template = Template::compile("{{{a}}}{{& b }}").unwrap();
        assert_eq!(template.nodes(), [var("a"), var("b")]);
    }

    #[test]
    fn test_malformed_triple_stache_is_rejected() {
        let err = Template::compile("x\n{{{a}}").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidTag { line: 2, .. }));

        assert!(Template::compile("{{a}}}").is_ok());
        assert!(Template::compile("{{a.{b}}}").is_err());
    }

    #[test]
    fn test_parse_nested_sections() {
        let template = Template::compile("{{#foo}}{{^bar}}{{.}}{{/bar}}{{/foo}}").unwrap();
        assert_eq!(
            template.nodes(),
            [Node::Section {
                path: Path::parse("foo").unwrap(),
                inverted: false,
                children: vec![Node::Section {
                    path: Path::parse("bar").unwrap(),
                    inverted: true,
                    children: vec![var(".")],
                }],
            }]
        );
    }

    #[test]
    fn test_comments_are_dropped() {
        let template = Template::compile("a{{! a\nmultiline }}b").unwrap();
        assert_eq!(template.nodes(), [text("a"), text("b")]);
    }

    #[test]
    fn test_unclosed_section() {
        let err = Template::compile("line one\n{{#foo}}\n").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::UnclosedSection { ref name, line: 2 } if name == "foo"
        ));
    }

    #[test]
    fn test_mismatched_and_unexpected_close() {
        let err = Template::compile("{{#foo}}{{/bar}}").unwrap_err();
        assert!(matches!(err, TemplateError::MismatchedClose { .. }));

        let err = Template::compile("{{/foo}}").unwrap_err();
        assert!(matches!(err, TemplateError::UnexpectedClose { .. }));
    }

    #[test]
    fn test_unsupported_and_invalid_tags() {
        let err = Template::compile("{{> partial}}").unwrap_err();
        assert!(matches!(err, TemplateError::UnsupportedTag { ref sigil, .. } if sigil == ">"));

        let err = Template::compile("\n\n{{a..b}}").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidTag { line: 3, .. }));

        assert!(Template::compile("{{}}").is_err());
    }
}
