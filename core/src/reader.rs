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

use crate::library::LibraryClient;
use crate::models::{Collection, CollectionItem};
use crate::sweep::SweepError;
use log::debug;

/// Offset-based cursor over a saved collection.
///
/// Keeps requesting pages until the number of items seen reaches the `total`
/// reported by the latest page, or a page comes back empty. The empty-page
/// check covers a library that shrinks while it is being read.
pub struct PageReader<'a, C: LibraryClient + ?Sized> {
    client: &'a C,
    collection: Collection,
    page_size: u32,
    fetched: u32,
    total: Option<u32>,
    requests: u32,
    exhausted: bool,
}

impl<'a, C: LibraryClient + ?Sized> PageReader<'a, C> {
    pub fn new(client: &'a C, collection: Collection, page_size: u32) -> Self {
        Self {
            client,
            collection,
            page_size,
            fetched: 0,
            total: None,
            requests: 0,
            exhausted: false,
        }
    }

    /// Fetches the next page. `Ok(None)` once the collection is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<CollectionItem>>, SweepError> {
        if self.exhausted {
            return Ok(None);
        }
        if let Some(total) = self.total {
            if self.fetched >= total {
                self.exhausted = true;
                return Ok(None);
            }
        }

        debug!(
            "Requesting {:?} page {} (offset {})",
            self.collection, self.requests, self.fetched
        );
        let page = self
            .client
            .fetch_page(self.collection, self.page_size, self.fetched)
            .await?;
        self.requests += 1;
        self.total = Some(page.total);

        if page.items.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }

        self.fetched += page.items.len() as u32;
        Ok(Some(page.items))
    }

    /// Requests issued so far, including a final empty page.
    pub fn requests(&self) -> u32 {
        self.requests
    }

    /// Items retrieved so far.
    pub fn fetched(&self) -> u32 {
        self.fetched
    }
}
