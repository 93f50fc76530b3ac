//! Movie documents and their request payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_text, SharedError};

/// A catalogued movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Document ID
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    /// One or more genres
    pub genre: Vec<String>,
    pub release_year: i32,
    /// ID of the media type this copy is held on
    pub format: Uuid,
    pub director: String,
    pub lead_actors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /api/movies` and `PUT /api/movies/:id`
///
/// Every field is optional at the type level so that presence can be
/// reported as a validation message rather than a deserialization error.
/// Creation requires all fields except `description`; updates apply only the
/// fields supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    pub title: Option<String>,
    pub genre: Option<Vec<String>>,
    pub release_year: Option<i32>,
    pub format: Option<Uuid>,
    pub director: Option<String>,
    pub lead_actors: Option<Vec<String>>,
    pub description: Option<String>,
}

impl MovieInput {
    /// Build a new movie, failing on the first missing required field
    pub fn into_movie(self, id: Uuid) -> Result<Movie, SharedError> {
        let genre = self.genre.ok_or_else(|| SharedError::missing("genre"))?;
        if genre.is_empty() {
            return Err(SharedError::validation("genre", "genre must list at least one genre"));
        }

        Ok(Movie {
            id,
            title: require_text("title", self.title)?,
            genre,
            release_year: self
                .release_year
                .ok_or_else(|| SharedError::missing("releaseYear"))?,
            format: self.format.ok_or_else(|| SharedError::missing("format"))?,
            director: require_text("director", self.director)?,
            lead_actors: self
                .lead_actors
                .ok_or_else(|| SharedError::missing("leadActors"))?,
            description: self.description,
        })
    }

    /// Overwrite the supplied fields of an existing movie
    pub fn apply_to(self, movie: &mut Movie) -> Result<(), SharedError> {
        if let Some(title) = self.title {
            movie.title = require_text("title", Some(title))?;
        }
        if let Some(genre) = self.genre {
            if genre.is_empty() {
                return Err(SharedError::validation("genre", "genre must list at least one genre"));
            }
            movie.genre = genre;
        }
        if let Some(year) = self.release_year {
            movie.release_year = year;
        }
        if let Some(format) = self.format {
            movie.format = format;
        }
        if let Some(director) = self.director {
            movie.director = require_text("director", Some(director))?;
        }
        if let Some(actors) = self.lead_actors {
            movie.lead_actors = actors;
        }
        if let Some(description) = self.description {
            movie.description = Some(description);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> MovieInput {
        MovieInput {
            title: Some("Alien".into()),
            genre: Some(vec!["Horror".into(), "Sci-Fi".into()]),
            release_year: Some(1979),
            format: Some(Uuid::new_v4()),
            director: Some("Ridley Scott".into()),
            lead_actors: Some(vec!["Sigourney Weaver".into()]),
            description: None,
        }
    }

    #[test]
    fn test_into_movie_requires_release_year() {
        let input = MovieInput {
            release_year: None,
            ..complete_input()
        };
        let err = input.into_movie(Uuid::new_v4()).unwrap_err();
        assert_eq!(err, SharedError::missing("releaseYear"));
    }

    #[test]
    fn test_into_movie_rejects_empty_genre_list() {
        let input = MovieInput {
            genre: Some(vec![]),
            ..complete_input()
        };
        assert!(input.into_movie(Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_apply_to_only_touches_supplied_fields() {
        let mut movie = complete_input().into_movie(Uuid::new_v4()).unwrap();
        let before = movie.clone();

        let patch = MovieInput {
            director: Some("James Cameron".into()),
            ..MovieInput::default()
        };
        patch.apply_to(&mut movie).unwrap();

        assert_eq!(movie.director, "James Cameron");
        assert_eq!(movie.title, before.title);
        assert_eq!(movie.genre, before.genre);
    }

    #[test]
    fn test_movie_json_uses_camel_case_and_underscore_id() {
        let movie = complete_input().into_movie(Uuid::new_v4()).unwrap();
        let json = serde_json::to_value(&movie).unwrap();
        assert!(json.get("_id").is_some());
        assert_eq!(json["releaseYear"], 1979);
        assert!(json.get("description").is_none());
    }
}
