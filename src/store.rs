//! In-memory equation store.
//!
//! Each record keeps the raw text next to its compiled tree and both are
//! inserted under a single write lock, so a reader never sees one without
//! the other. Identifiers start at 1 and are never reused.

use crate::ast::{Bindings, CachingCompiler, CompilerConfig, ExpressionNode};
use crate::error::StoreError;
use log::debug;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A stored equation. Cloning shares the compiled tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub id: u64,
    pub text: String,
    pub tree: Arc<ExpressionNode>,
}

pub struct EquationStore {
    compiler: CachingCompiler,
    equations: RwLock<BTreeMap<u64, Equation>>,
    next_id: AtomicU64,
}

impl EquationStore {
    pub fn new() -> Self {
        Self::with_config(CompilerConfig::default())
    }

    pub fn with_config(config: CompilerConfig) -> Self {
        Self {
            compiler: CachingCompiler::new(config),
            equations: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Compiles `text` and stores it, returning the new identifier.
    ///
    /// Invalid text is rejected before an identifier is allocated.
    pub fn store(&self, text: &str) -> Result<u64, StoreError> {
        let tree = self
            .compiler
            .compile(text)
            .map_err(StoreError::InvalidEquation)?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let equation = Equation {
            id,
            text: text.to_string(),
            tree,
        };
        self.write().insert(id, equation);

        debug!("Stored equation {}: {}", id, text);
        Ok(id)
    }

    pub fn get(&self, id: u64) -> Result<Equation, StoreError> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::EquationNotFound(id))
    }

    /// All stored equations, ordered by identifier.
    pub fn all(&self) -> Vec<Equation> {
        self.read().values().cloned().collect()
    }

    /// Evaluates the equation stored under `id` against `bindings`.
    pub fn evaluate(&self, id: u64, bindings: &Bindings) -> Result<f64, StoreError> {
        // Clone the Arc out so evaluation runs without holding the lock.
        let tree = self
            .read()
            .get(&id)
            .map(|equation| Arc::clone(&equation.tree))
            .ok_or(StoreError::EquationNotFound(id))?;
        debug!("Evaluating equation {} with {:?}", id, bindings);
        tree.evaluate(bindings).map_err(StoreError::Evaluation)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<u64, Equation>> {
        self.equations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<u64, Equation>> {
        self.equations
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for EquationStore {
    fn default() -> Self {
        Self::new()
    }
}
