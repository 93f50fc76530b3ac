//! Wishlists Module
//!
//! CRUD over the `wishlists` collection plus adding and removing embedded
//! movie entries. Every write route is admin-only; reads are open.

use uuid::Uuid;

use crate::backend::storage::Document;
use crate::shared::models::Wishlist;

pub mod handlers;

impl Document for Wishlist {
    const COLLECTION: &'static str = "wishlists";

    fn id(&self) -> Uuid {
        self.id
    }
}
