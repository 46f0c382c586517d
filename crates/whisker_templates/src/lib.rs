//! # whisker_templates
//!
//! Mustache-style template compilation and rendering.
//!
//! Templates are compiled into a node tree once and rendered against any
//! root the renderer's registry has a getter for. Missing keys and nulls
//! render as empty strings; only malformed templates, invalid paths and
//! exceeding the depth limit are errors.
//!
//! ## Example
//!
//! ```rust
//! use whisker_formats::{DataDocument, DataFormat};
//! use whisker_templates::{RenderSettings, Renderer};
//!
//! let doc = DataDocument::from_str(r#"{ "items": ["a", "b"] }"#, DataFormat::Json).unwrap();
//! let renderer = Renderer::standard(RenderSettings::default());
//!
//! let out = renderer.render("{{#items}}[{{.}}]{{/items}}", doc.as_node()).unwrap();
//! assert_eq!(out, "[a][b]");
//! ```

pub mod error;
pub mod parser;
pub mod renderer;
pub mod settings;

pub use error::{TemplateError, TemplateResult};
pub use parser::{Node, Template, TemplateParser};
pub use renderer::{Renderer, RendererBuilder};
pub use settings::{RenderSettings, DEFAULT_MAX_DEPTH};
