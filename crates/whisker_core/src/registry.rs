//! Getter registry keyed by the runtime type of data nodes.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::lookup::Lookup;
use crate::value::Value;

/// Type-erased value getter: `(node, key, ignore_case) -> Lookup`.
pub type ValueGetter = dyn Fn(&dyn Any, &str, bool) -> Lookup + Send + Sync;

/// Support for one data format.
///
/// A format registers one getter per concrete node type it defines, for
/// example one for its mapping type and one for its key/value pair type.
pub trait FormatSupport {
    /// Short name of the format (e.g. "json").
    fn name(&self) -> &str;

    /// Register the format's getters.
    fn register(&self, registry: &mut GetterRegistry);
}

struct Entry {
    type_name: &'static str,
    getter: Box<ValueGetter>,
}

/// A registry of value getters.
///
/// The registry maps concrete node types to the getter that knows how to
/// look keys up on them. It is built once during configuration and then
/// shared read-only between renders.
pub struct GetterRegistry {
    getters: HashMap<TypeId, Entry>,
    formats: Vec<String>,
}

impl GetterRegistry {
    /// Create a registry that knows only [`Value`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<Value, _>(Value::get);
        registry
    }

    /// Create a registry with no getters at all.
    pub fn empty() -> Self {
        Self {
            getters: HashMap::new(),
            formats: Vec::new(),
        }
    }

    /// Register the getter for nodes of type `T`.
    ///
    /// If a getter for `T` already exists, it will be replaced.
    pub fn register<T, F>(&mut self, getter: F)
    where
        T: Any,
        F: Fn(&T, &str, bool) -> Lookup + Send + Sync + 'static,
    {
        let type_name = type_name::<T>();
        let erased = move |node: &dyn Any, key: &str, ignore_case: bool| {
            node.downcast_ref::<T>()
                .map_or(Lookup::NotFound, |node| getter(node, key, ignore_case))
        };

        let previous = self.getters.insert(
            TypeId::of::<T>(),
            Entry {
                type_name,
                getter: Box::new(erased),
            },
        );
        if previous.is_some() {
            debug!("Replacing getter for {}", type_name);
        } else {
            debug!("Registering getter for {}", type_name);
        }
    }

    /// Install every getter of a format.
    pub fn install(&mut self, format: &dyn FormatSupport) {
        debug!("Installing format: {}", format.name());
        format.register(self);
        if !self.formats.iter().any(|f| f == format.name()) {
            self.formats.push(format.name().to_string());
        }
    }

    /// Builder-style [`install`](Self::install).
    pub fn with_format(mut self, format: impl FormatSupport) -> Self {
        self.install(&format);
        self
    }

    /// Remove the getter for `T`.
    pub fn unregister<T: Any>(&mut self) -> bool {
        debug!("Unregistering getter for {}", type_name::<T>());
        self.getters.remove(&TypeId::of::<T>()).is_some()
    }

    /// Get the getter for the runtime type of `node`.
    pub fn get_for(&self, node: &dyn Any) -> Option<&ValueGetter> {
        self.getters
            .get(&node.type_id())
            .map(|entry| entry.getter.as_ref())
    }

    /// Look `key` up on `node`.
    ///
    /// Nodes without a registered getter report `NotFound`.
    pub fn lookup(&self, node: &dyn Any, key: &str, ignore_case: bool) -> Lookup {
        match self.get_for(node) {
            Some(getter) => getter(node, key, ignore_case),
            None => {
                trace!("No getter registered for node while looking up {:?}", key);
                Lookup::NotFound
            }
        }
    }

    /// Check if a getter for `T` is registered.
    pub fn contains<T: Any>(&self) -> bool {
        self.getters.contains_key(&TypeId::of::<T>())
    }

    /// Names of all node types with a getter, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.getters.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        names
    }

    /// Names of installed formats, in installation order.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    pub fn len(&self) -> usize {
        self.getters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.getters.is_empty()
    }
}

impl Default for GetterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GetterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetterRegistry")
            .field("types", &self.type_names())
            .field("formats", &self.formats)
            .finish()
    }
}
