//! # whisker_core
//!
//! Value resolution for the whisker template renderer.
//!
//! This crate turns a dotted variable path and a stack of loosely typed data
//! nodes into a value the renderer can substitute, test for truthiness or
//! iterate over.
//!
//! # Architecture
//!
//! - **Value**: the closed model every input node is classified into
//! - **Lookup**: `Found`, `FoundNull` or `NotFound`, never conflated
//! - **Registry**: maps concrete node types to the getter that reads them
//! - **Context stack**: scoped frames searched innermost first
//! - **Section**: the passes a `{{#section}}` or `{{^inverted}}` makes
//!
//! # Example
//!
//! ```rust
//! use whisker_core::{ContextStack, GetterRegistry, Lookup, Mapping, Path, Value};
//!
//! let inner: Mapping = [("bar", "x")].into_iter().collect();
//! let root = Value::from([("foo", Value::from(inner))].into_iter().collect::<Mapping>());
//!
//! let registry = GetterRegistry::new();
//! let stack = ContextStack::with_root(&root);
//! let path = Path::parse("foo.bar").unwrap();
//!
//! assert_eq!(stack.resolve(&path, &registry, false), Lookup::Found(Value::from("x")));
//! ```

pub mod context;
pub mod error;
pub mod lookup;
pub mod path;
pub mod registry;
pub mod section;
pub mod value;

// Re-export main types for convenience
pub use context::{ContextStack, Frame, Resolver, Scope};
pub use error::{CoreError, CoreResult};
pub use lookup::{find_entry, Lookup};
pub use path::{Path, CURRENT};
pub use registry::{FormatSupport, GetterRegistry, ValueGetter};
pub use section::{Pass, Passes, Section};
pub use value::{Mapping, Number, Value, ValueKind};
