//! Catalogue document types
//!
//! Each resource has a stored document type and an `*Input` payload type.
//! Inputs carry every field as `Option` so handlers can report which field
//! is missing; `into_*` builds a new document and `apply_to` performs a
//! partial update.

pub mod contact;
pub mod media_type;
pub mod movie;
pub mod wishlist;

pub use contact::{Contact, ContactInput};
pub use media_type::{MediaType, MediaTypeInput};
pub use movie::{Movie, MovieInput};
pub use wishlist::{Wishlist, WishlistInput, WishlistMovie, WishlistMovieInput};
