//! A bidirectional registry between variable names and [`Var`] indices.

use std::collections::HashMap;

use contracts::*;

use crate::{Error, Formula, Result, Var};

/// Maps variable names to dense indices starting at 1, and back.
///
/// A map is never changed in place once built. `with_variable`, `without_variable` and `renamed`
/// return a derived map; every variable they do not touch keeps its index. Removing a variable
/// leaves its slot empty rather than shifting the variables after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableMap {
    // Slot 0 is always `None`.
    names: Vec<Option<String>>,
    indices: HashMap<String, Var>,
}

impl Default for VariableMap {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableMap {
    pub fn new() -> Self {
        VariableMap {
            names: vec![None],
            indices: HashMap::new(),
        }
    }

    /// Builds a map from names in iteration order. Repeated names keep their first index.
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut map = VariableMap::new();
        for name in names {
            map.push(name.into());
        }

        map
    }

    /// Builds a map over the free variables of `form`, in order of first occurrence.
    pub fn of(form: &Formula) -> Self {
        Self::from_names(form.variables())
    }

    /// The number of variables currently mapped.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The highest index ever handed out by this map (or its ancestors), 0 if none.
    pub fn max_index(&self) -> u32 {
        self.names.len().saturating_sub(1) as u32
    }

    pub fn index(&self, name: &str) -> Option<Var> {
        self.indices.get(name).copied()
    }

    pub fn name(&self, var: Var) -> Option<&str> {
        self.names.get(var.0 as usize)?.as_deref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    pub fn has_index(&self, var: Var) -> bool {
        self.name(var).is_some()
    }

    /// Like [`VariableMap::index`], but a missing name is an error.
    pub fn require(&self, name: &str) -> Result<Var> {
        self.index(name).ok_or_else(|| Error::UnknownVariable {
            name: name.to_owned(),
        })
    }

    /// Resolves a signed literal index against this map.
    pub fn resolve(&self, signed: i32) -> Result<(&str, bool)> {
        let index = signed.unsigned_abs();
        Var::new(index)
            .and_then(|var| self.name(var))
            .map(|name| (name, signed > 0))
            .ok_or(Error::IndexOutOfRange {
                index,
                max: self.max_index(),
            })
    }

    /// All mapped variables in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| Some((Var(i as u32), name.as_deref()?)))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(_, name)| name)
    }

    /// Returns a map that additionally contains `name` at the next free index.
    pub fn with_variable(&self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if self.contains(&name) {
            return Err(Error::DuplicateVariable { name });
        }

        let mut map = self.clone();
        map.push(name);
        Ok(map)
    }

    /// Returns a map that additionally contains every name in `names` that is not already mapped.
    pub fn with_variables<S: Into<String>>(&self, names: impl IntoIterator<Item = S>) -> Self {
        let mut map = self.clone();
        for name in names {
            map.push(name.into());
        }

        map
    }

    /// Returns a map without `name`. The freed index is not reused.
    pub fn without_variable(&self, name: &str) -> Result<Self> {
        let var = self.require(name)?;
        let mut map = self.clone();
        map.indices.remove(name);
        map.names[var.0 as usize] = None;
        Ok(map)
    }

    /// Returns a map in which `old` is called `new`, keeping its index.
    pub fn renamed(&self, old: &str, new: impl Into<String>) -> Result<Self> {
        let new = new.into();
        let var = self.require(old)?;
        if old == new {
            return Ok(self.clone());
        }
        if self.contains(&new) {
            return Err(Error::DuplicateVariable { name: new });
        }

        let mut map = self.clone();
        map.indices.remove(old);
        map.indices.insert(new.clone(), var);
        map.names[var.0 as usize] = Some(new);
        Ok(map)
    }

    /// Checks that every literal in `form` names a mapped variable.
    pub fn check(&self, form: &Formula) -> Result<()> {
        form.variables()
            .into_iter()
            .try_for_each(|name| self.require(name).map(drop))
    }

    /// Returns a name starting with `prefix` that is not mapped yet, advancing `counter`.
    pub(crate) fn fresh_name(&self, prefix: &str, counter: &mut usize) -> String {
        loop {
            *counter += 1;
            let name = format!("{}{}", prefix, counter);
            if !self.contains(&name) {
                return name;
            }
        }
    }

    #[debug_ensures(self.names[0].is_none())]
    fn push(&mut self, name: String) {
        if self.indices.contains_key(&name) {
            return;
        }

        let var = Var(self.names.len() as u32);
        self.names.push(Some(name.clone()));
        self.indices.insert(name, var);
    }
}
