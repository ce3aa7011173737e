// SPDX-License-Identifier: MPL-2.0
//! Records confirmed during the current session, newest first.

use super::PainRecordDraft;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: VecDeque<PainRecordDraft>,
    limit: usize,
}

impl SessionHistory {
    /// Keeps at most `limit` entries (at least one).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Adds `draft` in front, dropping the oldest entry when full.
    pub fn push(&mut self, draft: PainRecordDraft) {
        if self.entries.len() == self.limit {
            self.entries.pop_back();
        }
        self.entries.push_front(draft);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PainRecordDraft> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new(crate::app::config::SESSION_HISTORY_LIMIT)
    }
}
