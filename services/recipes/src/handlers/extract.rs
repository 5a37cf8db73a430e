//! Extractors whose rejections render as [`RecipesServiceError`], so malformed
//! bodies, queries and paths answer with the usual `{kind, message}` JSON.

use axum::extract::{FromRequest, FromRequestParts, Path, Query};

use crate::error::RecipesServiceError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(RecipesServiceError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(RecipesServiceError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(RecipesServiceError))]
pub struct AppPath<T>(pub T);
