// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed case store.
//!
//! [`CaseStore`] owns the full collection of cases, assigns identifiers,
//! and persists to a single JSON file: a pretty-printed UTF-8 array of
//! case objects, rewritten in full on every mutation. The store assumes it
//! is the only writer of its backing file; there is no locking, and a
//! concurrent writer on the same path is last-write-wins.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::case::{now, Case, Priority, Status};
use crate::error::Result;

/// Hard ceiling on the backing file size. Larger files are refused at load
/// time so a runaway data file cannot exhaust memory.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A partial update to a case: one optional field per mutable attribute.
///
/// Only fields that are `Some` are applied. Values bypass the per-field
/// helpers on [`Case`], so assigning here does not append a note line;
/// the update timestamp is refreshed once for the whole batch.
#[derive(Debug, Clone, Default)]
pub struct CaseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
}

impl CaseUpdate {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
    }
}

/// The in-memory index of cases plus its persistence responsibility.
#[derive(Debug)]
pub struct CaseStore {
    path: PathBuf,
    cases: BTreeMap<u64, Case>,
    next_id: u64,
}

impl CaseStore {
    /// Opens the store over the given backing file, loading any existing
    /// data. Performs blocking file I/O.
    ///
    /// Never fails: a missing file yields an empty store, and a corrupt or
    /// oversized one is discarded with a warning, leaving the store empty
    /// with the id counter reset to 1.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = CaseStore {
            path: path.into(),
            cases: BTreeMap::new(),
            next_id: 1,
        };
        if let Err(e) = store.load() {
            tracing::warn!(
                "failed to load cases from {}: {}; starting empty",
                store.path.display(),
                e
            );
            store.cases.clear();
            store.next_id = 1;
        }
        store
    }

    /// The backing file path this store was opened over.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates a new case, persists the store, and returns the stored case.
    ///
    /// Ids are allocated from a counter that only increases over the
    /// store's lifetime, so no two cases created by one store ever share
    /// an id, even across deletes.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        assignee: Option<String>,
    ) -> Result<Case> {
        let id = self.next_id;
        let case = Case::new(id, title.into(), description.into(), priority, assignee, now());
        self.cases.insert(id, case.clone());
        self.next_id += 1;
        self.save()?;
        Ok(case)
    }

    /// Looks up a case by id. Pure read, no persistence.
    pub fn get(&self, id: u64) -> Option<&Case> {
        self.cases.get(&id)
    }

    /// Returns all cases matching the given filters, newest first.
    ///
    /// Both filters must match when present; `None` matches everything.
    /// Ordering is `created_at` descending with ties broken by `id`
    /// descending, so among equal timestamps the most recently allocated
    /// case sorts first.
    pub fn list(&self, status: Option<Status>, priority: Option<Priority>) -> Vec<&Case> {
        let mut cases: Vec<&Case> = self
            .cases
            .values()
            .filter(|c| status.is_none_or(|s| c.status == s))
            .filter(|c| priority.is_none_or(|p| c.priority == p))
            .collect();
        cases.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        cases
    }

    /// Applies a partial update to a case, persists, and returns the
    /// updated case. Returns `Ok(None)` without touching the backing file
    /// if the id does not exist.
    pub fn update(&mut self, id: u64, update: CaseUpdate) -> Result<Option<Case>> {
        let Some(case) = self.cases.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            case.title = title;
        }
        if let Some(description) = update.description {
            case.description = description;
        }
        if let Some(status) = update.status {
            case.status = status;
        }
        if let Some(priority) = update.priority {
            case.priority = priority;
        }
        if let Some(assignee) = update.assignee {
            case.assignee = Some(assignee);
        }
        case.updated_at = now();
        let case = case.clone();
        self.save()?;
        Ok(Some(case))
    }

    /// Appends a timestamped note to a case, persists, and returns the
    /// updated case. Returns `Ok(None)` without persisting if the id does
    /// not exist.
    pub fn append_note(&mut self, id: u64, text: &str) -> Result<Option<Case>> {
        let Some(case) = self.cases.get_mut(&id) else {
            return Ok(None);
        };
        case.append_note(text);
        let case = case.clone();
        self.save()?;
        Ok(Some(case))
    }

    /// Deletes a case. Returns whether a removal occurred; the backing
    /// file is rewritten only when it did.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        if self.cases.remove(&id).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Number of cases currently in the store.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if the store holds no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Rewrites the backing file with the full collection, ordered by id.
    fn save(&self) -> Result<()> {
        let cases: Vec<&Case> = self.cases.values().collect();
        let json = serde_json::to_string_pretty(&cases)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }

    /// Loads the backing file into the empty store.
    ///
    /// A missing file and an oversized file both leave the store empty
    /// without error; the caller handles parse failures by resetting, so
    /// a bad file never yields a partially loaded mapping.
    fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let size = fs::metadata(&self.path)?.len();
        if size > MAX_FILE_SIZE {
            tracing::warn!(
                "data file {} is {} bytes (limit {}); refusing to load",
                self.path.display(),
                size,
                MAX_FILE_SIZE
            );
            return Ok(());
        }
        let raw = fs::read_to_string(&self.path)?;
        let cases: Vec<Case> = serde_json::from_str(&raw)?;
        for case in cases {
            if case.id >= self.next_id {
                self.next_id = case.id + 1;
            }
            self.cases.insert(case.id, case);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
