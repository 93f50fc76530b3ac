//! Wishlists and the movie entries embedded in them
//!
//! Wishlist movies are embedded copies (title, genre, year), not references
//! to catalogue movies. Each entry gets its own `_id` so it can be removed
//! individually.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_text, SharedError};

/// A named list of movies someone wants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub movies: Vec<WishlistMovie>,
}

/// A movie entry embedded in a wishlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistMovie {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub genre: Vec<String>,
    pub release_year: i32,
}

/// Body of `POST /api/wishlists/:id/movies`, also used for entries in a
/// wishlist create/update body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistMovieInput {
    pub title: Option<String>,
    pub genre: Option<Vec<String>>,
    pub release_year: Option<i32>,
}

impl WishlistMovieInput {
    pub fn into_entry(self) -> Result<WishlistMovie, SharedError> {
        Ok(WishlistMovie {
            id: Uuid::new_v4(),
            title: require_text("title", self.title)?,
            genre: self.genre.ok_or_else(|| SharedError::missing("genre"))?,
            release_year: self
                .release_year
                .ok_or_else(|| SharedError::missing("releaseYear"))?,
        })
    }
}

/// Body of `POST /api/wishlists` and `PUT /api/wishlists/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishlistInput {
    pub name: Option<String>,
    pub movies: Option<Vec<WishlistMovieInput>>,
}

impl WishlistInput {
    pub fn into_wishlist(self, id: Uuid) -> Result<Wishlist, SharedError> {
        let movies = match self.movies {
            Some(entries) => entries
                .into_iter()
                .map(WishlistMovieInput::into_entry)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Wishlist {
            id,
            name: require_text("name", self.name)?,
            movies,
        })
    }

    /// Apply an update; a supplied `movies` list replaces the existing one
    pub fn apply_to(self, wishlist: &mut Wishlist) -> Result<(), SharedError> {
        if let Some(name) = self.name {
            wishlist.name = require_text("name", Some(name))?;
        }
        if let Some(entries) = self.movies {
            wishlist.movies = entries
                .into_iter()
                .map(WishlistMovieInput::into_entry)
                .collect::<Result<Vec<_>, _>>()?;
        }
        Ok(())
    }
}

impl Wishlist {
    /// Remove an embedded movie, returning whether it was present
    pub fn remove_movie(&mut self, movie_id: Uuid) -> bool {
        let before = self.movies.len();
        self.movies.retain(|entry| entry.id != movie_id);
        self.movies.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_without_movies_starts_empty() {
        let input = WishlistInput {
            name: Some("80s Movies".into()),
            movies: None,
        };
        let wishlist = input.into_wishlist(Uuid::new_v4()).unwrap();
        assert_eq!(wishlist.name, "80s Movies");
        assert!(wishlist.movies.is_empty());
    }

    #[test]
    fn test_invalid_embedded_movie_rejects_whole_wishlist() {
        let input = WishlistInput {
            name: Some("Broken".into()),
            movies: Some(vec![WishlistMovieInput {
                title: Some("Tron".into()),
                genre: None,
                release_year: Some(1982),
            }]),
        };
        assert_eq!(
            input.into_wishlist(Uuid::new_v4()).unwrap_err(),
            SharedError::missing("genre")
        );
    }

    #[test]
    fn test_remove_movie_reports_absence() {
        let mut wishlist = WishlistInput {
            name: Some("List".into()),
            movies: Some(vec![WishlistMovieInput {
                title: Some("Tron".into()),
                genre: Some(vec!["Sci-Fi".into()]),
                release_year: Some(1982),
            }]),
        }
        .into_wishlist(Uuid::new_v4())
        .unwrap();

        let entry_id = wishlist.movies[0].id;
        assert!(!wishlist.remove_movie(Uuid::new_v4()));
        assert!(wishlist.remove_movie(entry_id));
        assert!(wishlist.movies.is_empty());
    }
}
