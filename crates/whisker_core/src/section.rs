//! Section iteration.
//!
//! A [`Section`] turns the lookup that controls `{{#name}}` or `{{^name}}`
//! into the rendering passes of the section body:
//!
//! | controlling value | `{{#name}}`            | `{{^name}}`     |
//! |-------------------|------------------------|-----------------|
//! | falsy             | no pass                | one, unchanged  |
//! | sequence          | one push per element   | no pass         |
//! | other truthy      | one push of the value  | no pass         |

use tracing::debug;

use crate::lookup::Lookup;
use crate::value::Value;

/// One rendering pass of a section body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pass<'s> {
    /// Render against the current stack.
    Unchanged,
    /// Render with this value pushed as the innermost frame.
    Push(&'s Value),
}

#[derive(Debug, Clone, PartialEq)]
enum Plan {
    Skip,
    Unchanged,
    Single(Value),
    Each(Vec<Value>),
}

/// The passes a section will make over its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    plan: Plan,
}

impl Section {
    /// Plan the passes for a section controlled by `lookup`.
    pub fn plan(lookup: Lookup, inverted: bool) -> Self {
        let truthy = lookup.is_truthy();
        let plan = match (inverted, lookup) {
            (true, _) if truthy => Plan::Skip,
            (true, _) => Plan::Unchanged,
            (false, _) if !truthy => Plan::Skip,
            (false, Lookup::Found(Value::Sequence(items))) => Plan::Each(items),
            (false, Lookup::Found(value)) => Plan::Single(value),
            (false, _) => Plan::Skip,
        };
        debug!("Section plan: {:?}", plan);
        Self { plan }
    }

    /// Iterate over the passes. Each call starts from the first pass.
    pub fn passes(&self) -> Passes<'_> {
        Passes {
            plan: &self.plan,
            next: 0,
        }
    }

    pub fn len(&self) -> usize {
        match &self.plan {
            Plan::Skip => 0,
            Plan::Unchanged | Plan::Single(_) => 1,
            Plan::Each(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Iterator returned by [`Section::passes`].
#[derive(Debug, Clone)]
pub struct Passes<'s> {
    plan: &'s Plan,
    next: usize,
}

impl<'s> Iterator for Passes<'s> {
    type Item = Pass<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let pass = match self.plan {
            Plan::Skip => None,
            Plan::Unchanged if self.next == 0 => Some(Pass::Unchanged),
            Plan::Single(value) if self.next == 0 => Some(Pass::Push(value)),
            Plan::Each(items) => items.get(self.next).map(Pass::Push),
            Plan::Unchanged | Plan::Single(_) => None,
        };
        if pass.is_some() {
            self.next += 1;
        }
        pass
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = match self.plan {
            Plan::Skip => 0,
            Plan::Unchanged | Plan::Single(_) => 1,
            Plan::Each(items) => items.len(),
        };
        let remaining = total.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Passes<'_> {}
