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

pub mod auth;
pub mod batch;
pub mod config;
pub mod library;
pub mod models;
pub mod reader;
pub mod spotify;
pub mod sweep;

// Re-export key items for convenience
pub use auth::get_spotify_client;
pub use config::SweepConfig;
pub use library::LibraryClient;
pub use models::{
    Collection, CollectionItem, IdentifierSet, Mutation, NamedId, Operation, Page,
    SelectionPolicy, SweepReport,
};
pub use spotify::SpotifyLibrary;
pub use sweep::{SweepError, Sweeper};
