//! The configuration tree: namespaces, variables, dependency tables.
//!
//! Namespaces keep variables and child namespaces in insertion order,
//! which is what makes header emission deterministic. Name uniqueness is
//! enforced on insertion: variables and child namespaces share one name
//! universe per parent, since both become identifiers in the same C++
//! scope.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::scalar::ScalarKind;

/// Axis a dependency table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyAxis {
    /// Selected by the project mode (`development` / `production`).
    Mode,
    /// Selected by the build type (`debug` / `release`).
    Type,
}

impl DependencyAxis {
    /// Parse a marker value; `None` for anything but the two known axes.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mode" => Some(DependencyAxis::Mode),
            "type" => Some(DependencyAxis::Type),
            _ => None,
        }
    }
}

/// Per-variable rule selecting the final value by mode or build type.
///
/// The table maps axis values (e.g. `development`) to the text that the
/// resolver substitutes. Table keys are document-side names and are never
/// identifier-normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub axis: DependencyAxis,
    pub values: IndexMap<String, String>,
}

/// A single named, typed configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub kind: ScalarKind,
    pub value: String,
    pub dependency: Option<DependencySpec>,
}

impl Variable {
    /// A plain variable with a fixed value.
    pub fn new(name: impl Into<String>, kind: ScalarKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            dependency: None,
        }
    }

    /// A dependency-bearing variable. These are always emitted as strings;
    /// the value stays empty until the resolver runs.
    pub fn dependent(name: impl Into<String>, spec: DependencySpec) -> Self {
        Self {
            name: name.into(),
            kind: ScalarKind::String,
            value: String::new(),
            dependency: Some(spec),
        }
    }
}

/// A named grouping node: variables plus child namespaces, both in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
    variables: Vec<Variable>,
    children: IndexMap<String, Namespace>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn children(&self) -> impl Iterator<Item = &Namespace> {
        self.children.values()
    }

    pub fn child(&self, name: &str) -> Option<&Namespace> {
        self.children.get(name)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.children.is_empty()
    }

    /// Append a variable. `path` is the dotted document path of this
    /// namespace, used for error reporting only.
    pub fn push_variable(&mut self, variable: Variable, path: &str) -> Result<()> {
        self.check_name(&variable.name, path)?;
        self.variables.push(variable);
        Ok(())
    }

    /// Append a child namespace.
    pub fn insert_child(&mut self, child: Namespace, path: &str) -> Result<()> {
        self.check_name(&child.name, path)?;
        self.children.insert(child.name.clone(), child);
        Ok(())
    }

    /// Insert a child namespace ahead of all existing children. Used to
    /// place the project namespace first in the emitted header.
    pub fn prepend_child(&mut self, child: Namespace, path: &str) -> Result<()> {
        self.check_name(&child.name, path)?;
        self.children.shift_insert(0, child.name.clone(), child);
        Ok(())
    }

    pub(crate) fn variables_mut(&mut self) -> impl Iterator<Item = &mut Variable> {
        self.variables.iter_mut()
    }

    pub(crate) fn children_mut(&mut self) -> impl Iterator<Item = &mut Namespace> {
        self.children.values_mut()
    }

    fn check_name(&self, name: &str, path: &str) -> Result<()> {
        if self.children.contains_key(name) || self.variables.iter().any(|v| v.name == name) {
            return Err(Error::DuplicateName {
                path: path.to_string(),
                name: name.to_string(),
            });
        }
        Ok(())
    }
}
