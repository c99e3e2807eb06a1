use crate::library::LibraryClient;
use crate::models::{Collection, CollectionItem, Mutation, NamedId, Page};
use crate::sweep::SweepError;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use rspotify::{
    model::{AlbumId, ArtistId, FullAlbum, FullTrack, SimplifiedArtist, SimplifiedTrack, TrackId},
    prelude::*,
    AuthCodeSpotify,
};
use std::sync::Arc;

/// `LibraryClient` backed by an authenticated rspotify client.
pub struct SpotifyLibrary {
    spotify: Arc<AuthCodeSpotify>,
}

impl SpotifyLibrary {
    pub fn new(spotify: AuthCodeSpotify) -> Self {
        Self {
            spotify: Arc::new(spotify),
        }
    }
}

#[async_trait(?Send)]
impl LibraryClient for SpotifyLibrary {
    async fn fetch_page(
        &self,
        collection: Collection,
        limit: u32,
        offset: u32,
    ) -> Result<Page<CollectionItem>, SweepError> {
        match collection {
            Collection::SavedTracks => {
                let page = self
                    .spotify
                    .current_user_saved_tracks_manual(None, Some(limit), Some(offset))
                    .await?;
                Ok(Page {
                    total: page.total,
                    items: page
                        .items
                        .into_iter()
                        .map(|saved| track_item(saved.track))
                        .collect(),
                })
            }
            Collection::SavedAlbums => {
                let page = self
                    .spotify
                    .current_user_saved_albums_manual(None, Some(limit), Some(offset))
                    .await?;
                Ok(Page {
                    total: page.total,
                    items: page
                        .items
                        .into_iter()
                        .map(|saved| album_item(saved.album))
                        .collect(),
                })
            }
        }
    }

    async fn album_tracks(&self, album_id: &str) -> Result<Vec<NamedId>, SweepError> {
        let id = AlbumId::from_id(album_id)
            .map_err(|_| SweepError::InvalidId(album_id.to_string()))?;

        // The paginator walks every page, so albums longer than one page are covered.
        let tracks: Vec<SimplifiedTrack> = self.spotify.album_track(id, None).try_collect().await?;

        Ok(tracks.into_iter().map(simplified_track).collect())
    }

    async fn apply(&self, mutation: Mutation, ids: &[String]) -> Result<(), SweepError> {
        match mutation {
            Mutation::FollowArtists => {
                let artist_ids = ids
                    .iter()
                    .map(|id| {
                        ArtistId::from_id(id.as_str())
                            .map_err(|_| SweepError::InvalidId(id.clone()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                self.spotify.user_follow_artists(artist_ids).await?;
            }
            Mutation::SaveTracks => {
                let track_ids = ids
                    .iter()
                    .map(|id| {
                        TrackId::from_id(id.as_str())
                            .map_err(|_| SweepError::InvalidId(id.clone()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                self.spotify.current_user_saved_tracks_add(track_ids).await?;
            }
        }
        Ok(())
    }
}

fn artist_entry(artist: SimplifiedArtist) -> NamedId {
    NamedId {
        id: artist.id.map(|id| id.id().to_string()).unwrap_or_default(),
        name: artist.name,
    }
}

fn track_item(track: FullTrack) -> CollectionItem {
    CollectionItem {
        id: track.id.map(|id| id.id().to_string()).unwrap_or_default(),
        name: track.name,
        artists: track.artists.into_iter().map(artist_entry).collect(),
    }
}

fn album_item(album: FullAlbum) -> CollectionItem {
    CollectionItem {
        id: album.id.id().to_string(),
        name: album.name,
        artists: album.artists.into_iter().map(artist_entry).collect(),
    }
}

fn simplified_track(track: SimplifiedTrack) -> NamedId {
    NamedId {
        id: track.id.map(|id| id.id().to_string()).unwrap_or_default(),
        name: track.name,
    }
}
