//! Context stack and path resolution.

use std::any::Any;
use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::error::{CoreError, CoreResult};
use crate::lookup::Lookup;
use crate::path::{Path, CURRENT};
use crate::registry::GetterRegistry;
use crate::value::Value;

/// One level of the context stack.
pub enum Frame<'a> {
    /// A caller-supplied node, resolved through the registry.
    Node(&'a dyn Any),
    /// A value pushed by a section.
    Value(Value),
}

impl std::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node(_) => write!(f, "Node(..)"),
            Self::Value(v) => write!(f, "Value({:?})", v),
        }
    }
}

/// The active rendering scopes, innermost last.
///
/// Frames are only added through [`ContextStack::scope`], whose guard pops
/// the frame again when dropped.
#[derive(Debug, Default)]
pub struct ContextStack<'a> {
    frames: Vec<Frame<'a>>,
    max_depth: Option<usize>,
}

impl<'a> ContextStack<'a> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack whose outermost frame is `root`.
    pub fn with_root(root: &'a dyn Any) -> Self {
        Self {
            frames: vec![Frame::Node(root)],
            max_depth: None,
        }
    }

    /// Limit the number of frames, root included.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn innermost(&self) -> Option<&Frame<'a>> {
        self.frames.last()
    }

    /// Push `frame` for the lifetime of the returned guard.
    pub fn scope(&mut self, frame: Frame<'a>) -> CoreResult<Scope<'_, 'a>> {
        if let Some(limit) = self.max_depth {
            if self.frames.len() >= limit {
                return Err(CoreError::DepthExceeded { limit });
            }
        }
        self.frames.push(frame);
        Ok(Scope { stack: self })
    }

    /// Shorthand for pushing a section value.
    pub fn scope_value(&mut self, value: Value) -> CoreResult<Scope<'_, 'a>> {
        self.scope(Frame::Value(value))
    }

    /// Resolve `path` against this stack.
    pub fn resolve(&self, path: &Path, registry: &GetterRegistry, ignore_case: bool) -> Lookup {
        Resolver::new(registry, ignore_case).resolve(path, self)
    }
}

/// Guard returned by [`ContextStack::scope`]; pops its frame on drop.
#[derive(Debug)]
pub struct Scope<'s, 'a> {
    stack: &'s mut ContextStack<'a>,
}

impl<'a> Deref for Scope<'_, 'a> {
    type Target = ContextStack<'a>;

    fn deref(&self) -> &Self::Target {
        self.stack
    }
}

impl DerefMut for Scope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stack
    }
}

impl Drop for Scope<'_, '_> {
    fn drop(&mut self) {
        self.stack.frames.pop();
    }
}

/// Resolves paths against a context stack.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r GetterRegistry,
    ignore_case: bool,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r GetterRegistry, ignore_case: bool) -> Self {
        Self {
            registry,
            ignore_case,
        }
    }

    /// Parse and resolve a raw path string.
    pub fn resolve_str(&self, raw: &str, stack: &ContextStack<'_>) -> CoreResult<Lookup> {
        let path = Path::parse(raw)?;
        Ok(self.resolve(&path, stack))
    }

    /// Resolve `path` against `stack`.
    ///
    /// The root segment is searched from the innermost frame outwards; the
    /// first frame that reports `Found` or `FoundNull` wins. Later segments
    /// only look at the value the previous segment produced and stop at the
    /// first miss or null.
    pub fn resolve(&self, path: &Path, stack: &ContextStack<'_>) -> Lookup {
        if path.is_current() {
            return stack
                .innermost()
                .map_or(Lookup::NotFound, |frame| self.lookup_frame(frame, CURRENT));
        }

        let root = path.root();
        let mut current = stack
            .frames
            .iter()
            .rev()
            .map(|frame| self.lookup_frame(frame, root))
            .find(Lookup::is_present)
            .unwrap_or(Lookup::NotFound);

        for segment in path.rest() {
            let Lookup::Found(value) = &current else {
                break;
            };
            current = value.get(segment, self.ignore_case);
        }

        if current.is_not_found() {
            trace!("Path not found: {}", path);
        }
        current
    }

    fn lookup_frame(&self, frame: &Frame<'_>, key: &str) -> Lookup {
        match frame {
            Frame::Value(value) => value.get(key, self.ignore_case),
            Frame::Node(node) => self.registry.lookup(*node, key, self.ignore_case),
        }
    }
}
