// SPDX-License-Identifier: MPL-2.0
//! Fixed song catalog shown in the music player section.

use serde::{Deserialize, Serialize};

/// Index of a catalog entry. Only ever minted by [`Catalog::iter`] or by
/// tests; the state machine validates it against the catalog on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SongId(usize);

impl SongId {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One playlist entry: a display title and the external link opened when
/// the entry is pressed a second time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub url: String,
}

impl Song {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Ordered song list, immutable after startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog(Vec<Song>);

impl Catalog {
    #[must_use]
    pub fn new(songs: Vec<Song>) -> Self {
        Self(songs)
    }

    #[must_use]
    pub fn get(&self, id: SongId) -> Option<&Song> {
        self.0.get(id.index())
    }

    #[must_use]
    pub fn contains(&self, id: SongId) -> bool {
        id.index() < self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SongId, &Song)> {
        self.0.iter().enumerate().map(|(i, s)| (SongId::new(i), s))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
