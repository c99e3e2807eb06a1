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

use log::debug;
use rspotify::{prelude::*, scopes, AuthCodeSpotify, Config, Credentials, OAuth};
use thiserror::Error;

/// Used when `RSPOTIFY_REDIRECT_URI` is not set. Must be registered in the Spotify dashboard.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/callback";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to initialize Spotify client: {0}")]
    ClientConfig(String),
    #[error("Spotify authentication failed: {0}")]
    Spotify(#[from] rspotify::ClientError),
}

/// Initializes and authenticates a Spotify client using the Authorization Code Flow.
///
/// Credentials come from `RSPOTIFY_CLIENT_ID` / `RSPOTIFY_CLIENT_SECRET`, the
/// redirect URI from `RSPOTIFY_REDIRECT_URI` (or [`DEFAULT_REDIRECT_URI`]).
/// The token is cached and refreshed by rspotify; when no cached token is
/// usable the user is sent to the authorization URL.
pub async fn get_spotify_client() -> Result<AuthCodeSpotify, AuthError> {
    let creds = Credentials::from_env().ok_or_else(|| {
        AuthError::ClientConfig("Missing RSPOTIFY_CLIENT_ID or RSPOTIFY_CLIENT_SECRET".to_string())
    })?;

    // - user-library-read: To page through saved tracks and albums.
    // - user-follow-modify: To follow artists.
    // - user-library-modify: To save album tracks.
    let scopes = scopes!(
        "user-library-read",
        "user-follow-modify",
        "user-library-modify"
    );

    let oauth = OAuth::from_env(scopes.clone()).unwrap_or_else(|| {
        debug!("RSPOTIFY_REDIRECT_URI not set, using {}", DEFAULT_REDIRECT_URI);
        OAuth {
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scopes,
            ..Default::default()
        }
    });

    // `token_cached: true` saves the token to .spotify_token_cache.json.
    let config = Config {
        token_cached: true,
        token_refreshing: true,
        ..Default::default()
    };

    let spotify = AuthCodeSpotify::with_config(creds, oauth, config);

    let url = spotify.get_authorize_url(false)?;

    // Reuses a cached token when possible, otherwise opens the browser and
    // waits for the redirected URL to be pasted back.
    spotify.prompt_for_token(&url).await?;

    Ok(spotify)
}
