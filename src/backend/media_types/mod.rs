//! Media Types Module
//!
//! CRUD over the `media_types` collection. `mediaType` names are unique;
//! uniqueness is checked before each write.

use uuid::Uuid;

use crate::backend::storage::Document;
use crate::shared::models::MediaType;

pub mod handlers;

impl Document for MediaType {
    const COLLECTION: &'static str = "media_types";

    fn id(&self) -> Uuid {
        self.id
    }
}
