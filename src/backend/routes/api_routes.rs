/**
 * Resource Routes
 *
 * | Resource | GET | POST / PUT | DELETE |
 * |---|---|---|---|
 * | `/api/movies` | open | read-write, admin | admin |
 * | `/api/media-types` | open | read-write, admin | admin |
 * | `/api/wishlists` (incl. `/:id/movies`) | open | admin | admin |
 * | `/api/contacts` | open | read-write, admin | admin |
 */

use axum::{
    routing::{delete, get, post, put, MethodRouter},
    Router,
};

use crate::backend::contacts::handlers::{
    create_contact, delete_contact, get_contact, list_contacts, update_contact,
};
use crate::backend::media_types::handlers::{
    create_media_type, delete_media_type, get_media_type, list_media_types, update_media_type,
};
use crate::backend::middleware::{gated, ADMINS, EDITORS};
use crate::backend::movies::handlers::{
    create_movie, delete_movie, get_movie, list_movies, update_movie,
};
use crate::backend::server::state::AppState;
use crate::backend::wishlists::handlers::{
    add_wishlist_movie, create_wishlist, delete_wishlist, get_wishlist, list_wishlists,
    remove_wishlist_movie, update_wishlist,
};

/// Configure resource routes
///
/// Reads are open. Writes go through `gated`, which verifies the bearer
/// token and then checks the role against the route's allowed set.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let editors = |method_router: MethodRouter<AppState>| gated(method_router, app_state, EDITORS);
    let admins = |method_router: MethodRouter<AppState>| gated(method_router, app_state, ADMINS);

    router
        .route(
            "/api/movies",
            get(list_movies).merge(editors(post(create_movie))),
        )
        .route(
            "/api/movies/{id}",
            get(get_movie)
                .merge(editors(put(update_movie)))
                .merge(admins(delete(delete_movie))),
        )
        .route(
            "/api/media-types",
            get(list_media_types).merge(editors(post(create_media_type))),
        )
        .route(
            "/api/media-types/{id}",
            get(get_media_type)
                .merge(editors(put(update_media_type)))
                .merge(admins(delete(delete_media_type))),
        )
        .route(
            "/api/wishlists",
            get(list_wishlists).merge(admins(post(create_wishlist))),
        )
        .route(
            "/api/wishlists/{id}",
            get(get_wishlist).merge(admins(put(update_wishlist).delete(delete_wishlist))),
        )
        .route("/api/wishlists/{id}/movies", admins(post(add_wishlist_movie)))
        .route(
            "/api/wishlists/{id}/movies/{movie_id}",
            admins(delete(remove_wishlist_movie)),
        )
        .route(
            "/api/contacts",
            get(list_contacts).merge(editors(post(create_contact))),
        )
        .route(
            "/api/contacts/{id}",
            get(get_contact)
                .merge(editors(put(update_contact)))
                .merge(admins(delete(delete_contact))),
        )
}
