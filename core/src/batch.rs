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
use crate::models::Mutation;
use crate::sweep::SweepError;
use log::info;

/// Number of calls needed to submit `len` IDs in chunks of `batch_size`.
pub fn batch_count(len: usize, batch_size: usize) -> usize {
    len.div_ceil(batch_size.max(1))
}

/// Submits `ids` in consecutive chunks of at most `batch_size`, one call at a time.
///
/// Stops at the first failing chunk; chunks already submitted stay applied.
/// Returns the number of calls made.
pub async fn submit_in_batches<C: LibraryClient + ?Sized>(
    client: &C,
    mutation: Mutation,
    ids: &[String],
    batch_size: usize,
) -> Result<usize, SweepError> {
    let batch_size = batch_size.max(1);
    let total = batch_count(ids.len(), batch_size);

    for (i, chunk) in ids.chunks(batch_size).enumerate() {
        info!("{} request {} / {}", mutation.verb(), i + 1, total);
        client.apply(mutation, chunk).await?;
    }

    Ok(total)
}
