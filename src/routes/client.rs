use actix_web::{HttpResponse, get, post, put, web};
use validator::Validate;

use crate::forms::FormError;
use crate::forms::client::{ClientPayload, SearchClientParams};
use crate::repository::InMemoryRepository;
use crate::routes::ApiError;
use crate::services::ServiceError;
use crate::services::client::{create_client, get_client_by_id, search_client, update_client};

#[post("/clients")]
pub async fn add_client(
    store: web::Data<InMemoryRepository>,
    web::Json(payload): web::Json<ClientPayload>,
) -> Result<HttpResponse, ApiError> {
    payload.validate().map_err(FormError::from)?;

    let created = {
        let mut repo = store.lock();
        create_client(&mut *repo, payload.into())?
    };

    Ok(HttpResponse::Created().json(created))
}

#[get("/clients/search")]
pub async fn search_clients(
    store: web::Data<InMemoryRepository>,
    web::Query(params): web::Query<SearchClientParams>,
) -> Result<HttpResponse, ApiError> {
    if !params.has_criteria() {
        return Err(ServiceError::NoSearchCriteriaProvided.into());
    }

    let SearchClientParams {
        first_name,
        id_number,
        mobile_number,
    } = params;

    let found = {
        let repo = store.lock();
        search_client(&*repo, first_name, id_number, mobile_number)?
    };

    match found {
        Some(client) => Ok(HttpResponse::Ok().json(client)),
        None => Err(ServiceError::ClientNotFound.into()),
    }
}

#[get("/clients/{id_number}")]
pub async fn show_client(
    store: web::Data<InMemoryRepository>,
    id_number: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let client = {
        let repo = store.lock();
        get_client_by_id(&*repo, &id_number)?
    };

    Ok(HttpResponse::Ok().json(client))
}

#[put("/clients/{id_number}")]
pub async fn save_client(
    store: web::Data<InMemoryRepository>,
    id_number: web::Path<String>,
    web::Json(payload): web::Json<ClientPayload>,
) -> Result<HttpResponse, ApiError> {
    payload.validate().map_err(FormError::from)?;

    let updated = {
        let mut repo = store.lock();
        update_client(&mut *repo, &id_number, payload.into())?
    };

    Ok(HttpResponse::Ok().json(updated))
}
