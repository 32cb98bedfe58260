//! Business rules of the client registry.
//!
//! Every function here runs against one repository borrow; callers sharing a
//! store must hold its lock for the whole call.

use crate::domain::client::{Client, ClientSearchQuery};
use crate::domain::types::SaIdNumber;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

fn ensure_valid_id_number(id_number: &str) -> ServiceResult<()> {
    SaIdNumber::new(id_number).map(|_| ()).map_err(|err| {
        log::warn!("Rejected ID number {id_number:?}: {err}");
        ServiceError::InvalidIdNumber
    })
}

/// Returns `true` when more than `own` clients hold `id_number`.
fn id_number_taken<R>(repo: &R, id_number: &str, own: usize) -> ServiceResult<bool>
where
    R: ClientReader + ?Sized,
{
    Ok(repo.count_clients_by_id_number(id_number)? > own)
}

/// Returns `true` when more than `own` clients hold `mobile_number`.
/// A missing number never collides.
fn mobile_number_taken<R>(repo: &R, mobile_number: Option<&str>, own: usize) -> ServiceResult<bool>
where
    R: ClientReader + ?Sized,
{
    match mobile_number {
        Some(mobile) => Ok(repo.count_clients_by_mobile_number(mobile)? > own),
        None => Ok(false),
    }
}

/// Validates and appends a new client.
///
/// Checks run in order and the first failure wins: ID number format, ID
/// number uniqueness, mobile number uniqueness.
pub fn create_client<R>(repo: &mut R, candidate: Client) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    ensure_valid_id_number(&candidate.id_number)?;

    if id_number_taken(&*repo, &candidate.id_number, 0)? {
        log::warn!("Client with ID number {} already exists", candidate.id_number);
        return Err(ServiceError::DuplicateIdNumber);
    }

    if mobile_number_taken(&*repo, candidate.mobile_number.as_deref(), 0)? {
        log::warn!("Mobile number of client {} is taken", candidate.id_number);
        return Err(ServiceError::DuplicateMobileNumber);
    }

    let created = repo.insert_client(candidate)?;
    log::info!("Created client {}", created.id_number);
    Ok(created)
}

/// Fetches a client by its ID number. Absence is an error.
pub fn get_client_by_id<R>(repo: &R, id_number: &str) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_by_id(id_number)?
        .ok_or(ServiceError::ClientNotFound)
}

/// Overwrites every field of the client stored under `id_number`.
///
/// The target must exist before the replacement is looked at. Uniqueness is
/// checked against the other clients only: keeping the current ID or mobile
/// number is never a conflict, taking one held by another client always is.
pub fn update_client<R>(repo: &mut R, id_number: &str, replacement: Client) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let existing = get_client_by_id(&*repo, id_number)?;

    ensure_valid_id_number(&replacement.id_number)?;

    let own_id = usize::from(existing.id_number == replacement.id_number);
    if id_number_taken(&*repo, &replacement.id_number, own_id)? {
        log::warn!(
            "Cannot move client {id_number} to ID number {}: already taken",
            replacement.id_number
        );
        return Err(ServiceError::DuplicateIdNumber);
    }

    let own_mobile = usize::from(existing.mobile_number == replacement.mobile_number);
    if mobile_number_taken(&*repo, replacement.mobile_number.as_deref(), own_mobile)? {
        log::warn!("Cannot update client {id_number}: mobile number taken");
        return Err(ServiceError::DuplicateMobileNumber);
    }

    let updated = repo.replace_client(id_number, replacement)?;
    log::info!("Updated client {id_number} -> {}", updated.id_number);
    Ok(updated)
}

/// Finds the first client matching a single criterion.
///
/// The first supplied criterion wins in the order first name, ID number,
/// mobile number. No criterion, or no match, yields `Ok(None)`.
pub fn search_client<R>(
    repo: &R,
    first_name: Option<String>,
    id_number: Option<String>,
    mobile_number: Option<String>,
) -> ServiceResult<Option<Client>>
where
    R: ClientReader + ?Sized,
{
    match ClientSearchQuery::from_criteria(first_name, id_number, mobile_number) {
        Some(query) => Ok(repo.find_client(&query)?),
        None => Ok(None),
    }
}

/// Runs each client through [`create_client`], skipping the rejected ones.
/// Returns the number of clients stored.
pub fn seed_clients<R>(repo: &mut R, clients: Vec<Client>) -> usize
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let mut stored = 0;
    for client in clients {
        let id_number = client.id_number.clone();
        match create_client(&mut *repo, client) {
            Ok(_) => stored += 1,
            Err(err) => log::warn!("Skipping seeded client {id_number:?}: {err}"),
        }
    }
    stored
}
