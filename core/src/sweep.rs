use crate::batch::{batch_count, submit_in_batches};
use crate::config::SweepConfig;
use crate::library::LibraryClient;
use crate::models::{
    Collection, IdentifierSet, NamedId, Operation, SelectionPolicy, SweepReport,
};
use crate::reader::PageReader;
use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Spotify API error: {0}")]
    Spotify(#[from] rspotify::ClientError),
    #[error("Invalid Spotify ID: {0}")]
    InvalidId(String),
    #[error("Library request failed: {0}")]
    Request(String),
}

/// Runs the collect-and-batch sweeps against a library client.
pub struct Sweeper<C> {
    client: C,
    config: SweepConfig,
}

impl<C: LibraryClient> Sweeper<C> {
    pub fn new(client: C) -> Self {
        Self::with_config(client, SweepConfig::default())
    }

    pub fn with_config(client: C, config: SweepConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Dispatches to the sweep behind `operation`. The policy is ignored when saving album tracks.
    pub async fn run(
        &self,
        operation: Operation,
        policy: SelectionPolicy,
    ) -> Result<SweepReport, SweepError> {
        match operation {
            Operation::FollowFromTracks => self.follow_artists_from_tracks(policy).await,
            Operation::FollowFromAlbums => self.follow_artists_from_albums(policy).await,
            Operation::SaveTracksFromAlbums => self.save_tracks_from_albums().await,
        }
    }

    /// Follows the artists of every saved track.
    pub async fn follow_artists_from_tracks(
        &self,
        policy: SelectionPolicy,
    ) -> Result<SweepReport, SweepError> {
        self.follow_artists(Operation::FollowFromTracks, policy).await
    }

    /// Follows the artists of every saved album.
    pub async fn follow_artists_from_albums(
        &self,
        policy: SelectionPolicy,
    ) -> Result<SweepReport, SweepError> {
        self.follow_artists(Operation::FollowFromAlbums, policy).await
    }

    /// Saves every track of every saved album.
    pub async fn save_tracks_from_albums(&self) -> Result<SweepReport, SweepError> {
        let operation = Operation::SaveTracksFromAlbums;
        info!("Getting all saved albums, and saving their tracks.");

        let mut found = IdentifierSet::new();
        let mut reader =
            PageReader::new(&self.client, Collection::SavedAlbums, self.config.page_size());

        while let Some(albums) = reader.next_page().await? {
            for album in &albums {
                debug!("Listing tracks of album {} ({})", album.name, album.id);
                for track in self.client.album_tracks(&album.id).await? {
                    collect(&mut found, track);
                }
            }
        }

        self.submit(operation, None, found, reader.requests(), reader.fetched())
            .await
    }

    async fn follow_artists(
        &self,
        operation: Operation,
        policy: SelectionPolicy,
    ) -> Result<SweepReport, SweepError> {
        info!("Starting: {} ({:?} artist policy)", operation, policy);

        let mut found = IdentifierSet::new();
        let mut reader =
            PageReader::new(&self.client, operation.collection(), self.config.page_size());

        while let Some(items) = reader.next_page().await? {
            for item in &items {
                for artist in policy.select(&item.artists) {
                    collect(&mut found, artist.clone());
                }
            }
        }

        self.submit(
            operation,
            Some(policy),
            found,
            reader.requests(),
            reader.fetched(),
        )
        .await
    }

    async fn submit(
        &self,
        operation: Operation,
        policy: Option<SelectionPolicy>,
        found: IdentifierSet,
        pages_fetched: u32,
        items_scanned: u32,
    ) -> Result<SweepReport, SweepError> {
        let mutation = operation.mutation();
        let batch_size = self.config.batch_size();
        let (names, ids) = found.into_parts();
        let batches_planned = batch_count(ids.len(), batch_size);

        let batches_submitted = if self.config.dry_run {
            info!(
                "Dry run: skipping {} request(s) for {} ID(s)",
                batches_planned,
                ids.len()
            );
            0
        } else {
            info!("{} {} found ID(s)", mutation.verb(), ids.len());
            submit_in_batches(&self.client, mutation, &ids, batch_size).await?
        };

        info!("Done: {}", operation);

        Ok(SweepReport {
            operation,
            policy,
            names,
            ids,
            pages_fetched,
            items_scanned,
            batches_planned,
            batches_submitted,
            dry_run: self.config.dry_run,
        })
    }
}

fn collect(found: &mut IdentifierSet, entry: NamedId) {
    // Local files have no Spotify ID and cannot be followed or saved.
    if entry.id.is_empty() {
        debug!("Skipping '{}': no Spotify ID", entry.name);
        return;
    }
    found.insert(entry);
}
