//! Review session: the caller-owned state around the filter engine.
//!
//! Three pieces of state with explicit transitions, instead of ambient UI
//! globals: the full collection (set once per load), the filter spec
//! (mutated by operator input), and the current view (replaced wholesale by
//! every apply, clear, and reload). Editing the spec never changes the view
//! until `apply_filters` runs, and every apply recomputes from the full
//! collection.

use crate::filter::{self, FilterSpec};
use crate::models::{NewTestResult, TestResultRecord};
use crate::store::{ResultStore, StoreError};

/// In-memory state for browsing and filtering test results.
#[derive(Debug, Default)]
pub struct ReviewSession {
    all_results: Vec<TestResultRecord>,
    spec: FilterSpec,
    view: Vec<TestResultRecord>,
}

impl ReviewSession {
    /// Empty session: no results loaded, empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the full collection from the store. The view shows everything
    /// until filters are applied.
    pub async fn load<S: ResultStore + ?Sized>(&mut self, store: &S) -> Result<(), StoreError> {
        let results = store.list_results().await?;
        self.view = results.clone();
        self.all_results = results;
        Ok(())
    }

    /// Submit a new result and reload, so the next filter pass sees it.
    pub async fn submit<S: ResultStore + ?Sized>(
        &mut self,
        store: &S,
        new: &NewTestResult,
    ) -> Result<(), StoreError> {
        store.create_result(new).await?;
        self.load(store).await
    }

    /// The current filter spec.
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Mutable access for operator edits. Does not change the view.
    pub fn spec_mut(&mut self) -> &mut FilterSpec {
        &mut self.spec
    }

    /// Recompute the view from the full collection under the current spec.
    pub fn apply_filters(&mut self) {
        self.view = filter::apply(&self.all_results, &self.spec);
    }

    /// Reset the spec and show the full collection again.
    pub fn clear_filters(&mut self) {
        self.spec.clear();
        self.view = filter::clear_view(&self.all_results);
    }

    /// The currently displayed view.
    pub fn view(&self) -> &[TestResultRecord] {
        &self.view
    }

    /// The full collection as last loaded.
    pub fn all_results(&self) -> &[TestResultRecord] {
        &self.all_results
    }
}
