//! Contacts Module
//!
//! CRUD over the `contacts` collection. Response shapes differ from the
//! other resources: create returns `{id}` and update returns 204 with no
//! body.

use uuid::Uuid;

use crate::backend::storage::Document;
use crate::shared::models::Contact;

pub mod handlers;

impl Document for Contact {
    const COLLECTION: &'static str = "contacts";

    fn id(&self) -> Uuid {
        self.id
    }
}
