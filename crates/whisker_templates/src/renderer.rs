//! Template rendering.

use std::any::Any;
use std::sync::Arc;

use tracing::{debug, info};
use whisker_core::{ContextStack, FormatSupport, GetterRegistry, Lookup, Pass, Resolver, Section};
use whisker_formats::standard_registry;

use crate::error::TemplateResult;
use crate::parser::{Node, Template, TemplateParser};
use crate::settings::RenderSettings;

/// Renders templates against data trees.
///
/// A renderer owns an immutable getter registry and can be shared between
/// threads; every render call uses its own context stack.
pub struct Renderer {
    registry: Arc<GetterRegistry>,
    settings: RenderSettings,
    parser: TemplateParser,
}

impl Renderer {
    /// Create a renderer from a prepared registry.
    pub fn new(registry: Arc<GetterRegistry>, settings: RenderSettings) -> Self {
        Self {
            registry,
            settings,
            parser: TemplateParser::new(),
        }
    }

    /// Create a renderer with JSON and YAML support installed.
    pub fn standard(settings: RenderSettings) -> Self {
        Self::new(Arc::new(standard_registry()), settings)
    }

    pub fn builder() -> RendererBuilder {
        RendererBuilder::default()
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn registry(&self) -> &GetterRegistry {
        &self.registry
    }

    /// Compile a template for repeated rendering.
    pub fn compile(&self, source: &str) -> TemplateResult<Template> {
        self.parser.parse(source)
    }

    /// Compile and render `source` against `data`.
    pub fn render(&self, source: &str, data: &dyn Any) -> TemplateResult<String> {
        let template = self.compile(source)?;
        self.render_template(&template, data)
    }

    /// Render a compiled template against `data`.
    pub fn render_template(&self, template: &Template, data: &dyn Any) -> TemplateResult<String> {
        let resolver = Resolver::new(&self.registry, self.settings.ignore_case);
        let mut stack = ContextStack::with_root(data).with_max_depth(self.settings.max_depth);
        let mut out = String::new();

        self.render_nodes(template.nodes(), &mut stack, &resolver, &mut out)?;
        Ok(out)
    }

    /// Resolve a single path against `data`, as a variable tag would.
    pub fn lookup(&self, path: &str, data: &dyn Any) -> TemplateResult<Lookup> {
        let stack = ContextStack::with_root(data);
        let resolver = Resolver::new(&self.registry, self.settings.ignore_case);
        Ok(resolver.resolve_str(path, &stack)?)
    }

    fn render_nodes(
        &self,
        nodes: &[Node],
        stack: &mut ContextStack<'_>,
        resolver: &Resolver<'_>,
        out: &mut String,
    ) -> TemplateResult<()> {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Variable { path } => out.push_str(&resolver.resolve(path, stack).render()),
                Node::Section {
                    path,
                    inverted,
                    children,
                } => {
                    let section = Section::plan(resolver.resolve(path, stack), *inverted);
                    for pass in section.passes() {
                        match pass {
                            Pass::Unchanged => self.render_nodes(children, stack, resolver, out)?,
                            Pass::Push(value) => {
                                let mut scope = stack.scope_value(value.clone())?;
                                self.render_nodes(children, &mut scope, resolver, out)?;
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("registry", &self.registry)
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for [`Renderer`].
#[derive(Debug, Default)]
pub struct RendererBuilder {
    registry: GetterRegistry,
    settings: RenderSettings,
}

impl RendererBuilder {
    /// Install support for a data format.
    pub fn with_format(mut self, format: impl FormatSupport) -> Self {
        self.registry.install(&format);
        self
    }

    pub fn settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.settings.ignore_case = ignore_case;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.settings.max_depth = max_depth;
        self
    }

    pub fn build(self) -> Renderer {
        info!(
            "Building renderer with formats {:?} (ignore_case: {})",
            self.registry.formats(),
            self.settings.ignore_case
        );
        debug!("Registered node types: {:?}", self.registry.type_names());
        Renderer::new(Arc::new(self.registry), self.settings)
    }
}
