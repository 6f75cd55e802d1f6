//! Loading/error/data state shared by every page.
//!
//! DESIGN
//! ======
//! Pages follow one lifecycle: `begin` on mount, `finish` when the service
//! call resolves. Mutations edit `items` in place after the server confirms
//! them and report failures through `fail` without rolling anything back.

#[cfg(test)]
#[path = "view_state_test.rs"]
mod view_state_test;

use crate::net::error::ApiError;

/// A fetched list plus its loading and error flags.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T> ListState<T> {
    /// Start a (re)load: set loading and clear any previous error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a load result. Items are kept as-is when the load fails.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(items) => self.items = items,
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }

    /// Surface a mutation failure.
    pub fn fail(&mut self, err: &ApiError) {
        self.error = Some(err.to_string());
    }

    /// Insert a newly created item at the top of the list.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    pub fn remove_where(&mut self, mut matches: impl FnMut(&T) -> bool) {
        self.items.retain(|item| !matches(item));
    }

    /// Replace every item matching `matches` with a clone of `item`.
    pub fn replace_where(&mut self, mut matches: impl FnMut(&T) -> bool, item: &T)
    where
        T: Clone,
    {
        for slot in &mut self.items {
            if matches(slot) {
                *slot = item.clone();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single fetched value (detail screens).
#[derive(Clone, Debug, PartialEq)]
pub struct ItemState<T> {
    pub value: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ItemState<T> {
    fn default() -> Self {
        Self { value: None, loading: false, error: None }
    }
}

impl<T> ItemState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<T, ApiError>) {
        match result {
            Ok(value) => self.value = Some(value),
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.error = Some(err.to_string());
    }
}

/// Ticket counter for reloads that can overlap; only the newest ticket may
/// apply its result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Start a new load and return its ticket.
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}
