/*
    spotify-sweep-rs | Rust CLI tool to follow artists and save tracks from your Spotify library.
    Copyright (C) 2025  Israel Alberto Roldan Vega

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Largest page the saved-library endpoints will return.
pub const MAX_PAGE_SIZE: u32 = 50;
/// Largest ID list the follow/save endpoints accept in one call.
pub const MAX_BATCH_SIZE: usize = 50;

/// A `(name, id)` pair. The name is only ever used for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedId {
    pub name: String,
    pub id: String,
}

impl NamedId {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// One saved track or saved album, reduced to what the sweeps need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: String,
    pub name: String,
    pub artists: Vec<NamedId>, // in the order Spotify lists them
}

/// One page of a paged read.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u32, // declared collection size when this page was served
}

/// Which saved collection a paged read walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    SavedTracks,
    SavedAlbums,
}

/// Which mutating endpoint a batch is submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mutation {
    FollowArtists,
    SaveTracks,
}

impl Mutation {
    /// Verb used in progress logs.
    pub fn verb(&self) -> &'static str {
        match self {
            Mutation::FollowArtists => "Following",
            Mutation::SaveTracks => "Saving",
        }
    }
}

/// Picks which artists of an item get collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Only the first listed artist of each item.
    #[default]
    First,
    /// Every listed artist of each item.
    All,
}

impl SelectionPolicy {
    pub fn from_all_artists(all_artists: bool) -> Self {
        if all_artists {
            SelectionPolicy::All
        } else {
            SelectionPolicy::First
        }
    }

    /// Applies the policy to a single item's sub-items.
    pub fn select<'a>(&self, sub_items: &'a [NamedId]) -> &'a [NamedId] {
        match self {
            SelectionPolicy::First => &sub_items[..sub_items.len().min(1)],
            SelectionPolicy::All => sub_items,
        }
    }
}

/// The public operations a sweep can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    FollowFromTracks,
    FollowFromAlbums,
    SaveTracksFromAlbums,
}

impl Operation {
    pub fn collection(&self) -> Collection {
        match self {
            Operation::FollowFromTracks => Collection::SavedTracks,
            Operation::FollowFromAlbums | Operation::SaveTracksFromAlbums => {
                Collection::SavedAlbums
            }
        }
    }

    pub fn mutation(&self) -> Mutation {
        match self {
            Operation::FollowFromTracks | Operation::FollowFromAlbums => Mutation::FollowArtists,
            Operation::SaveTracksFromAlbums => Mutation::SaveTracks,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::FollowFromTracks => "follow artists from saved tracks",
            Operation::FollowFromAlbums => "follow artists from saved albums",
            Operation::SaveTracksFromAlbums => "save tracks from saved albums",
        };
        f.write_str(label)
    }
}

/// IDs collected across all pages, unique by ID.
///
/// Names live in a parallel set and are only used for the final report, so two
/// different artists sharing a name produce one name but two IDs.
#[derive(Debug, Default)]
pub struct IdentifierSet {
    names: HashSet<String>,
    ids: HashSet<String>,
}

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the ID was not already present.
    pub fn insert(&mut self, entry: NamedId) -> bool {
        self.names.insert(entry.name);
        self.ids.insert(entry.id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Splits into `(sorted names, ids in set order)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        let mut names: Vec<String> = self.names.into_iter().collect();
        names.sort();
        (names, self.ids.into_iter().collect())
    }
}

/// Outcome of one sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub operation: Operation,
    pub policy: Option<SelectionPolicy>, // None for album-track saving
    pub names: Vec<String>,              // sorted
    pub ids: Vec<String>,                // submission order, unsorted
    pub pages_fetched: u32,
    pub items_scanned: u32,
    pub batches_planned: usize,
    pub batches_submitted: usize,
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<NamedId> {
        vec![
            NamedId::new("A", "a"),
            NamedId::new("B", "b"),
            NamedId::new("C", "c"),
        ]
    }

    #[test]
    fn test_first_policy_takes_only_first_sub_item() {
        let artists = abc();
        let picked = SelectionPolicy::First.select(&artists);
        assert_eq!(picked, &[NamedId::new("A", "a")]);
    }

    #[test]
    fn test_all_policy_takes_every_sub_item() {
        let artists = abc();
        assert_eq!(SelectionPolicy::All.select(&artists).len(), 3);
    }

    #[test]
    fn test_first_policy_on_empty_sub_items() {
        assert!(SelectionPolicy::First.select(&[]).is_empty());
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(SelectionPolicy::from_all_artists(true), SelectionPolicy::All);
        assert_eq!(SelectionPolicy::from_all_artists(false), SelectionPolicy::First);
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::First);
    }

    #[test]
    fn test_identifier_set_dedups_by_id() {
        let mut set = IdentifierSet::new();
        assert!(set.insert(NamedId::new("Xavier", "X")));
        assert!(!set.insert(NamedId::new("Xavier", "X")));
        assert!(set.insert(NamedId::new("Yolanda", "Y")));

        assert_eq!(set.len(), 2);
        assert!(set.contains_id("X"));
    }

    #[test]
    fn test_identifier_set_same_name_different_ids() {
        let mut set = IdentifierSet::new();
        set.insert(NamedId::new("Nirvana", "us"));
        set.insert(NamedId::new("Nirvana", "uk"));

        let (names, ids) = set.into_parts();
        assert_eq!(names, vec!["Nirvana".to_string()]);
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_identifier_set_names_come_out_sorted() {
        let mut set = IdentifierSet::new();
        for (name, id) in [("Queen", "1"), ("ABBA", "2"), ("Muse", "3")] {
            set.insert(NamedId::new(name, id));
        }

        let (names, _) = set.into_parts();
        assert_eq!(names, vec!["ABBA", "Muse", "Queen"]);
    }

    #[test]
    fn test_operation_wiring() {
        assert_eq!(Operation::FollowFromTracks.collection(), Collection::SavedTracks);
        assert_eq!(Operation::FollowFromAlbums.mutation(), Mutation::FollowArtists);
        assert_eq!(Operation::SaveTracksFromAlbums.mutation(), Mutation::SaveTracks);
        assert_eq!(
            Operation::SaveTracksFromAlbums.to_string(),
            "save tracks from saved albums"
        );
    }

    #[test]
    fn test_report_serializes() {
        let report = SweepReport {
            operation: Operation::FollowFromAlbums,
            policy: Some(SelectionPolicy::All),
            names: vec!["ABBA".to_string()],
            ids: vec!["2".to_string()],
            pages_fetched: 1,
            items_scanned: 1,
            batches_planned: 1,
            batches_submitted: 1,
            dry_run: false,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"FollowFromAlbums\""));
        assert!(json.contains("\"All\""));
    }
}
