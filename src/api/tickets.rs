// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Ticket endpoints, mounted under `/ticket`.
//!
//! Tickets live inside a project and carry a back-reference to it. The
//! creator plays the owner role for gated mutations; assignees need not
//! be members of the enclosing project.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{
        AssigneesRequest, CreateTicketRequest, DeleteTicketRequest, MessageResponse, ProjectQuery,
        TextResponse, Ticket, TicketInfoResponse, TicketListResponse, TicketQuery, TicketSummary,
        UpdateTicketRequest,
    },
    state::AppState,
    storage::{Owned, ProjectRepository, TicketRepository, UserRepository},
};

/// Date format used for deadlines on the wire.
const DEADLINE_FORMAT: &str = "%Y-%m-%d";

fn parse_deadline(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, DEADLINE_FORMAT)
        .map_err(|_| ApiError::bad_request("Invalid deadline date!"))
}

fn summaries(tickets: Vec<Ticket>) -> Vec<TicketSummary> {
    tickets
        .into_iter()
        .map(|ticket| TicketSummary {
            title: ticket.title,
            id: ticket.id,
        })
        .collect()
}

#[utoipa::path(
    post,
    path = "/ticket/create",
    request_body = CreateTicketRequest,
    tag = "Tickets",
    responses(
        (status = 200, description = "Ticket created", body = TextResponse),
        (status = 400, description = "Missing fields, bad date, or unknown project"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<CreateTicketRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    if request.project_id.is_empty()
        || request.title.is_empty()
        || request.description.is_empty()
        || request.deadline.is_empty()
    {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    let deadline = parse_deadline(&request.deadline)?;

    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);
    let projects = ProjectRepository::new(&storage);
    let tickets = TicketRepository::new(&storage);

    let mut project = projects
        .find(&request.project_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the project!"))?;

    let assignees = users.resolve_usernames(&request.assignees)?;

    let ticket = Ticket {
        id: Uuid::new_v4().to_string(),
        title: request.title,
        description: request.description,
        creator: caller.user_id,
        assignees,
        project: project.id.clone(),
        deadline,
        status: "pending".to_string(),
        creation: Utc::now(),
    };
    tickets.create(&ticket)?;

    project.tickets.push(ticket.id);
    projects.update(&project)?;

    Ok(Json(TextResponse::new("Ticket created successfully!")))
}

#[utoipa::path(
    delete,
    path = "/ticket/delete",
    request_body = DeleteTicketRequest,
    tag = "Tickets",
    responses(
        (status = 200, description = "Ticket deleted", body = TextResponse),
        (status = 400, description = "Missing fields or unknown ticket"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Auth(_caller): Auth,
    Json(request): Json<DeleteTicketRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    if request.ticket_id.is_empty() {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    let storage = state.storage.write().await;
    let tickets = TicketRepository::new(&storage);

    // Any authenticated caller may delete; there is no ownership re-check
    // on this route. The id stays in the project's ticket set and dangles.
    let ticket = tickets
        .find(&request.ticket_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the ticket!"))?;
    tickets.delete(&ticket.id)?;

    Ok(Json(TextResponse::new("ticket deleted successfully!")))
}

#[utoipa::path(
    put,
    path = "/ticket/update",
    request_body = UpdateTicketRequest,
    tag = "Tickets",
    responses(
        (status = 200, description = "Ticket updated", body = TextResponse),
        (status = 400, description = "Missing fields, bad date, or unknown ticket"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller did not create the ticket"),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<UpdateTicketRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    if request.ticket_id.is_empty()
        || request.new_title.is_empty()
        || request.new_description.is_empty()
        || request.new_deadline.is_empty()
        || request.new_status.is_empty()
    {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    let deadline = parse_deadline(&request.new_deadline)?;

    let storage = state.storage.write().await;
    let tickets = TicketRepository::new(&storage);

    let mut ticket = tickets
        .find(&request.ticket_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the ticket!"))?;

    if !ticket.is_owned_by(&caller.user_id) {
        return Err(ApiError::forbidden("Ticket not owned by the user!!"));
    }

    ticket.title = request.new_title;
    ticket.description = request.new_description;
    ticket.deadline = deadline;
    // Status is free-form, any string is accepted
    ticket.status = request.new_status;
    tickets.update(&ticket)?;

    Ok(Json(TextResponse::new("Ticket updated successfully!")))
}

#[utoipa::path(
    get,
    path = "/ticket/info",
    params(TicketQuery),
    tag = "Tickets",
    responses(
        (status = 200, description = "Ticket details", body = TicketInfoResponse),
        (status = 400, description = "Unknown ticket"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn info(
    State(state): State<AppState>,
    Auth(_caller): Auth,
    Query(query): Query<TicketQuery>,
) -> Result<Json<TicketInfoResponse>, ApiError> {
    let storage = state.storage.read().await;
    let users = UserRepository::new(&storage);
    let tickets = TicketRepository::new(&storage);

    let ticket = tickets
        .find(&query.ticket_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the ticket!"))?;

    let assignees = users.usernames_for(&ticket.assignees)?;
    let creator = users
        .find(&ticket.creator)?
        .ok_or_else(|| ApiError::bad_request("Can't find the user!"))?
        .username;

    Ok(Json(TicketInfoResponse {
        title: ticket.title,
        description: ticket.description,
        creator,
        assignees,
        status: ticket.status,
        deadline: ticket.deadline.format(DEADLINE_FORMAT).to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/ticket/add-assignees",
    request_body = AssigneesRequest,
    tag = "Tickets",
    responses(
        (status = 200, description = "Assignees added", body = MessageResponse),
        (status = 400, description = "Missing id or empty username list"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller did not create the ticket"),
        (status = 404, description = "Unknown ticket"),
    )
)]
pub async fn add_assignees(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<AssigneesRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if request.ticket_id.is_empty() || request.usernames.is_empty() {
        return Err(ApiError::bad_request(
            "Ticket ID and usernames are required.",
        ));
    }

    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);
    let tickets = TicketRepository::new(&storage);

    let mut ticket = tickets
        .find(&request.ticket_id)?
        .ok_or_else(|| ApiError::not_found("Ticket not found."))?;

    if !ticket.is_owned_by(&caller.user_id) {
        return Err(ApiError::forbidden(
            "Only the ticket creator can add assignees.",
        ));
    }

    // Set union: re-adding an existing assignee changes nothing. Assignees
    // are not required to be members of the enclosing project.
    for id in users.resolve_usernames(&request.usernames)? {
        if !ticket.assignees.contains(&id) {
            ticket.assignees.push(id);
        }
    }
    tickets.update(&ticket)?;

    Ok(Json(MessageResponse::new("Assignees added successfully.")))
}

#[utoipa::path(
    post,
    path = "/ticket/remove-assignees",
    request_body = AssigneesRequest,
    tag = "Tickets",
    responses(
        (status = 200, description = "Assignees removed", body = MessageResponse),
        (status = 400, description = "Missing id or empty username list"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller did not create the ticket"),
        (status = 404, description = "Unknown ticket"),
    )
)]
pub async fn remove_assignees(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<AssigneesRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if request.ticket_id.is_empty() || request.usernames.is_empty() {
        return Err(ApiError::bad_request(
            "Ticket ID and usernames are required.",
        ));
    }

    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);
    let tickets = TicketRepository::new(&storage);

    let mut ticket = tickets
        .find(&request.ticket_id)?
        .ok_or_else(|| ApiError::not_found("Ticket not found."))?;

    if !ticket.is_owned_by(&caller.user_id) {
        return Err(ApiError::forbidden(
            "Only the ticket creator can remove assignees.",
        ));
    }

    // Set difference: removing an absent assignee changes nothing
    let removed = users.resolve_usernames(&request.usernames)?;
    ticket.assignees.retain(|assignee| !removed.contains(assignee));
    tickets.update(&ticket)?;

    Ok(Json(MessageResponse::new("Assignees removed successfully.")))
}

#[utoipa::path(
    get,
    path = "/ticket/get-all-in-project",
    params(ProjectQuery),
    tag = "Tickets",
    responses(
        (status = 200, description = "Tickets in the project, possibly empty", body = TicketListResponse),
        (status = 400, description = "Unknown project"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn get_all_in_project(
    State(state): State<AppState>,
    Auth(_caller): Auth,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<TicketListResponse>, ApiError> {
    let storage = state.storage.read().await;
    let projects = ProjectRepository::new(&storage);
    let tickets = TicketRepository::new(&storage);

    if !projects.exists(&query.project_id) {
        return Err(ApiError::bad_request("Can't find the project!"));
    }

    let in_project = tickets.list_in_project(&query.project_id)?;

    Ok(Json(TicketListResponse {
        tickets: summaries(in_project),
    }))
}

#[utoipa::path(
    get,
    path = "/ticket/get-owned-by-user",
    tag = "Tickets",
    responses(
        (status = 200, description = "Tickets created by the caller, possibly empty", body = TicketListResponse),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn get_owned_by_user(
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<TicketListResponse>, ApiError> {
    let storage = state.storage.read().await;
    let tickets = TicketRepository::new(&storage);

    let created = tickets.list_created_by(&caller.user_id)?;

    Ok(Json(TicketListResponse {
        tickets: summaries(created),
    }))
}

#[utoipa::path(
    get,
    path = "/ticket/get-assigned-to-user",
    tag = "Tickets",
    responses(
        (status = 200, description = "Tickets assigned to the caller", body = TicketListResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Nothing assigned to the caller"),
    )
)]
pub async fn get_assigned_to_user(
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<TicketListResponse>, ApiError> {
    let storage = state.storage.read().await;
    let tickets = TicketRepository::new(&storage);

    let assigned = tickets.list_assigned_to(&caller.user_id)?;

    // Mirrors the joined-projects policy: an empty set is an error here
    if assigned.is_empty() {
        return Err(ApiError::not_found("No assigned tickets found!"));
    }

    Ok(Json(TicketListResponse {
        tickets: summaries(assigned),
    }))
}
