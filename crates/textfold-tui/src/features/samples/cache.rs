//! Memoization of fold renderings.

use std::cell::RefCell;
use std::collections::HashMap;

use textfold_core::fold::FoldState;
use textfold_core::span::StyledLine;

/// Cache of fold renderings keyed by `(sample index, width, fold state)`.
///
/// Folding re-measures and re-truncates the sample text, which is wasteful
/// to repeat every frame for unchanged inputs. Uses interior mutability
/// (`RefCell`) so the render pass can fill the cache through a shared
/// reference.
#[derive(Debug, Default)]
pub struct FoldCache {
    cache: RefCell<HashMap<(usize, usize, FoldState), Vec<StyledLine>>>,
}

impl FoldCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all cached renderings.
    ///
    /// Call this on terminal resize to invalidate width-dependent entries.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Drops every cached rendering of one sample.
    ///
    /// Call this when the sample's fold state changes.
    pub fn invalidate_sample(&self, sample: usize) {
        self.cache
            .borrow_mut()
            .retain(|(cached, _, _), _| *cached != sample);
    }

    pub fn get(&self, sample: usize, width: usize, fold: FoldState) -> Option<Vec<StyledLine>> {
        self.cache.borrow().get(&(sample, width, fold)).cloned()
    }

    pub fn insert(&self, sample: usize, width: usize, fold: FoldState, lines: Vec<StyledLine>) {
        self.cache.borrow_mut().insert((sample, width, fold), lines);
    }

    #[cfg(test)]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}
