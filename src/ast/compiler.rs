use crate::ast::{build, to_postfix, tokenize, ExpressionNode};
use crate::error::{ExpressionError, Result};
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Compiles equation text into an expression tree.
///
/// Runs tokenize, postfix conversion and tree building in order and stops at
/// the first error, so no partial tree is ever returned.
pub fn compile(expression: &str) -> Result<ExpressionNode> {
    debug!("Compiling expression: {}", expression);
    if expression.trim().is_empty() {
        return Err(ExpressionError::malformed(
            "expression cannot be null or empty",
        ));
    }

    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    build(&postfix)
}

const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(128) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Maximum number of compiled trees kept by a [`CachingCompiler`].
    pub cache_capacity: NonZeroUsize,
}

impl CompilerConfig {
    pub fn with_cache_capacity(cache_capacity: NonZeroUsize) -> Self {
        Self { cache_capacity }
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// A compiler that memoizes trees by their source text.
///
/// Trees are handed out as `Arc`s so the same compiled expression can be
/// evaluated from many threads. Failed compilations are not cached.
pub struct CachingCompiler {
    cache: Mutex<LruCache<String, Arc<ExpressionNode>>>,
}

impl CachingCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(config.cache_capacity)),
        }
    }

    pub fn compile(&self, expression: &str) -> Result<Arc<ExpressionNode>> {
        if let Some(tree) = self.lock().get(expression) {
            debug!("Cache hit: {}", expression);
            return Ok(Arc::clone(tree));
        }

        debug!("Cache miss: {}", expression);
        let tree = Arc::new(compile(expression)?);
        self.lock().put(expression.to_string(), Arc::clone(&tree));
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, Arc<ExpressionNode>>> {
        // The cache holds no invariants a panicking holder could break.
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for CachingCompiler {
    fn default() -> Self {
        Self::new(CompilerConfig::default())
    }
}
