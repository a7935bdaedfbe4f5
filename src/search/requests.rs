use std::collections::VecDeque;

use crate::core::error::Result;
use crate::core::server::SearchServer;
use crate::core::types::{DocId, Document, DocumentStatus};

const MINUTES_IN_DAY: u64 = 1440;

/// Tracks how many recent requests came back empty.
///
/// Every request advances an internal clock by one minute; requests older
/// than a day fall out of the window. Useful for throttling callers that
/// keep asking questions the index cannot answer.
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<RequestRecord>,
    no_result_count: usize,
    current_time: u64,
}

struct RequestRecord {
    timestamp: u64,
    is_empty: bool,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        RequestQueue {
            server,
            requests: VecDeque::new(),
            no_result_count: 0,
            current_time: 0,
        }
    }

    /// Default ACTUAL-status search, recorded in the rolling window.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let results = self.server.find_top(raw_query)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Predicate-filtered search, recorded in the rolling window.
    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let results = self.server.find_top_with(raw_query, predicate)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Number of empty-result requests inside the current day window.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    fn record(&mut self, is_empty: bool) {
        self.current_time += 1;
        while let Some(oldest) = self.requests.front() {
            if self.current_time - oldest.timestamp < MINUTES_IN_DAY {
                break;
            }
            if oldest.is_empty {
                self.no_result_count -= 1;
            }
            self.requests.pop_front();
        }
        if is_empty {
            self.no_result_count += 1;
        }
        self.requests.push_back(RequestRecord {
            timestamp: self.current_time,
            is_empty,
        });
    }
}
