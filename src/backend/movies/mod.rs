//! Movies Module
//!
//! CRUD over the `movies` collection.
//!
//! - `GET /api/movies`, `GET /api/movies/:id` - open
//! - `POST /api/movies`, `PUT /api/movies/:id` - read-write or admin
//! - `DELETE /api/movies/:id` - admin

use uuid::Uuid;

use crate::backend::storage::Document;
use crate::shared::models::Movie;

pub mod handlers;

impl Document for Movie {
    const COLLECTION: &'static str = "movies";

    fn id(&self) -> Uuid {
        self.id
    }
}
