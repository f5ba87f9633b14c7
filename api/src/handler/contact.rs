use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::extractor::Payload;
use crate::model::contact::{ContactResponse, CreateContactRequest};

pub async fn register_contact(
    State(registry): State<AppRegistry>,
    Payload(req): Payload<CreateContactRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let contact = registry.contact_repository().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ContactResponse::from(contact))))
}

pub async fn show_contact_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ContactResponse>>> {
    registry
        .contact_repository()
        .find_all()
        .await
        .map(|contacts| contacts.into_iter().map(ContactResponse::from).collect())
        .map(Json)
}
