#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use sweep_core::{
    Collection, CollectionItem, LibraryClient, Mutation, NamedId, Page, SweepError,
};

/// In-memory library that serves fixed collections and records every call.
#[derive(Default)]
pub struct ScriptedLibrary {
    collections: HashMap<Collection, Vec<CollectionItem>>,
    album_tracks: HashMap<String, Vec<NamedId>>,
    reported_total: Option<u32>,
    fail_on_write: Option<usize>,
    reads: Mutex<Vec<(Collection, u32, u32)>>,
    album_reads: Mutex<Vec<String>>,
    writes: Mutex<Vec<(Mutation, Vec<String>)>>,
}

impl ScriptedLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, collection: Collection, items: Vec<CollectionItem>) -> Self {
        self.collections.insert(collection, items);
        self
    }

    pub fn with_album_tracks(mut self, album_id: &str, tracks: Vec<NamedId>) -> Self {
        self.album_tracks.insert(album_id.to_string(), tracks);
        self
    }

    /// Reports this `total` on every page regardless of how many items exist.
    pub fn with_reported_total(mut self, total: u32) -> Self {
        self.reported_total = Some(total);
        self
    }

    /// Makes the n-th write call (1-indexed) fail.
    pub fn failing_on_write(mut self, n: usize) -> Self {
        self.fail_on_write = Some(n);
        self
    }

    pub fn reads(&self) -> Vec<(Collection, u32, u32)> {
        self.reads.lock().unwrap().clone()
    }

    pub fn album_reads(&self) -> Vec<String> {
        self.album_reads.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<(Mutation, Vec<String>)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn write_sizes(&self) -> Vec<usize> {
        self.writes().iter().map(|(_, ids)| ids.len()).collect()
    }
}

#[async_trait(?Send)]
impl LibraryClient for ScriptedLibrary {
    async fn fetch_page(
        &self,
        collection: Collection,
        limit: u32,
        offset: u32,
    ) -> Result<Page<CollectionItem>, SweepError> {
        self.reads.lock().unwrap().push((collection, limit, offset));

        let items = self
            .collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let start = (offset as usize).min(items.len());
        let end = (start + limit as usize).min(items.len());

        Ok(Page {
            items: items[start..end].to_vec(),
            total: self.reported_total.unwrap_or(items.len() as u32),
        })
    }

    async fn album_tracks(&self, album_id: &str) -> Result<Vec<NamedId>, SweepError> {
        self.album_reads.lock().unwrap().push(album_id.to_string());
        Ok(self.album_tracks.get(album_id).cloned().unwrap_or_default())
    }

    async fn apply(&self, mutation: Mutation, ids: &[String]) -> Result<(), SweepError> {
        let mut writes = self.writes.lock().unwrap();
        if self.fail_on_write == Some(writes.len() + 1) {
            return Err(SweepError::Request("429 Too Many Requests".to_string()));
        }
        writes.push((mutation, ids.to_vec()));
        Ok(())
    }
}

pub fn artist(name: &str, id: &str) -> NamedId {
    NamedId::new(name, id)
}

pub fn item(id: &str, artists: Vec<NamedId>) -> CollectionItem {
    CollectionItem {
        id: id.to_string(),
        name: format!("Item {}", id),
        artists,
    }
}

/// `count` items, each credited to its own single artist `artist-{i}`.
pub fn solo_items(count: usize) -> Vec<CollectionItem> {
    (0..count)
        .map(|i| {
            item(
                &format!("item-{}", i),
                vec![artist(&format!("Artist {:03}", i), &format!("artist-{}", i))],
            )
        })
        .collect()
}
