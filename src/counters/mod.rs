//! Counter service
//!
//! Ties a record source (and optionally a sink) to the reconciliation core.
//! Every listing is a fresh fetch-and-assemble cycle; nothing is cached here.

mod crud;
mod query;

use chrono::NaiveDate;

use crate::config::ClientConfig;
use crate::error::CounterResult;
use crate::source::{RecordSink, RecordSource};
use crate::types::{Counter, CounterForm, RawRecord};
use crate::utils::time::{current_timestamp, today};

/// Counter operations over a record source
pub struct CounterService<S> {
    pub(crate) source: S,
    pub(crate) config: ClientConfig,
    fixed_today: Option<NaiveDate>,
    fixed_now: Option<u64>,
}

impl<S: RecordSource> CounterService<S> {
    /// Create a service with default configuration
    pub fn new(source: S) -> Self {
        Self::with_config(source, ClientConfig::default())
    }

    pub fn with_config(source: S, config: ClientConfig) -> Self {
        Self {
            source,
            config,
            fixed_today: None,
            fixed_now: None,
        }
    }

    /// Pin the current date and timestamp instead of reading the clock
    pub fn with_clock(mut self, today: NaiveDate, now: u64) -> Self {
        self.fixed_today = Some(today);
        self.fixed_now = Some(now);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(today)
    }

    pub(crate) fn now(&self) -> u64 {
        self.fixed_now.unwrap_or_else(current_timestamp)
    }

    // Query operations (from query.rs)
    pub fn list_counters(
        &self,
        author: Option<&str>,
        require_public: bool,
    ) -> CounterResult<Vec<Counter>> {
        query::list_counters(self, author, require_public)
    }

    pub fn get_counter(&self, slug: &str) -> CounterResult<Counter> {
        query::get_counter(self, slug)
    }
}

impl<S: RecordSource + RecordSink> CounterService<S> {
    // Write operations (from crud.rs)
    pub fn create_counter(&self, author: &str, form: &CounterForm) -> CounterResult<Counter> {
        crud::create_counter(self, author, form)
    }

    pub fn update_counter(
        &self,
        author: &str,
        previous: &str,
        form: &CounterForm,
    ) -> CounterResult<Counter> {
        crud::update_counter(self, author, previous, form)
    }

    pub fn delete_counter(&self, author: &str, slug: &str) -> CounterResult<RawRecord> {
        crud::delete_counter(self, author, slug)
    }
}
