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

use crate::models::{Collection, CollectionItem, Mutation, NamedId, Page};
use crate::sweep::SweepError;
use async_trait::async_trait;

/// The slice of a music library API the sweeps talk to.
///
/// `spotify::SpotifyLibrary` is the real implementation; tests drive the
/// sweeps through scripted in-memory clients.
#[async_trait(?Send)]
pub trait LibraryClient {
    /// Reads one page of a saved collection starting at `offset`.
    async fn fetch_page(
        &self,
        collection: Collection,
        limit: u32,
        offset: u32,
    ) -> Result<Page<CollectionItem>, SweepError>;

    /// Lists every track of an album.
    async fn album_tracks(&self, album_id: &str) -> Result<Vec<NamedId>, SweepError>;

    /// Submits one batch of IDs to a mutating endpoint. Batching is done by the caller.
    async fn apply(&self, mutation: Mutation, ids: &[String]) -> Result<(), SweepError>;
}

#[async_trait(?Send)]
impl<C: LibraryClient + ?Sized> LibraryClient for &C {
    async fn fetch_page(
        &self,
        collection: Collection,
        limit: u32,
        offset: u32,
    ) -> Result<Page<CollectionItem>, SweepError> {
        (**self).fetch_page(collection, limit, offset).await
    }

    async fn album_tracks(&self, album_id: &str) -> Result<Vec<NamedId>, SweepError> {
        (**self).album_tracks(album_id).await
    }

    async fn apply(&self, mutation: Mutation, ids: &[String]) -> Result<(), SweepError> {
        (**self).apply(mutation, ids).await
    }
}
