// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Project endpoints, mounted under `/project`.
//!
//! The caller who creates a project is its owner for good. Owner-gated
//! mutations compare stored user ids via [`Owned`]; membership grants
//! association only, never mutation rights.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{
        CreateProjectRequest, DeleteProjectRequest, MembershipRequest, MessageResponse, Project,
        ProjectInfoResponse, ProjectListResponse, ProjectQuery, ProjectSummary, TextResponse,
        UpdateProjectRequest,
    },
    state::AppState,
    storage::{Owned, ProjectRepository, UserRepository},
};

fn summaries(projects: Vec<Project>) -> Vec<ProjectSummary> {
    projects
        .into_iter()
        .map(|project| ProjectSummary {
            title: project.title,
            id: project.id,
        })
        .collect()
}

#[utoipa::path(
    post,
    path = "/project/create",
    request_body = CreateProjectRequest,
    tag = "Projects",
    responses(
        (status = 200, description = "Project created", body = TextResponse),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<CreateProjectRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    if request.title.is_empty() || request.description.is_empty() {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);
    let projects = ProjectRepository::new(&storage);

    // Unknown usernames are dropped, duplicates collapse
    let members = users.resolve_usernames(&request.members)?;

    let project = Project {
        id: Uuid::new_v4().to_string(),
        title: request.title,
        description: request.description,
        owner: caller.user_id,
        members,
        tickets: Vec::new(),
        creation: Utc::now(),
    };
    projects.create(&project)?;

    Ok(Json(TextResponse::new("Project created successfully!")))
}

#[utoipa::path(
    delete,
    path = "/project/delete",
    request_body = DeleteProjectRequest,
    tag = "Projects",
    responses(
        (status = 200, description = "Project deleted", body = TextResponse),
        (status = 400, description = "Missing fields or unknown project"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Auth(_caller): Auth,
    Json(request): Json<DeleteProjectRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    if request.project_id.is_empty() {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    let storage = state.storage.write().await;
    let projects = ProjectRepository::new(&storage);

    // Any authenticated caller may delete; there is no ownership re-check
    // on this route. Tickets keep their back-reference and dangle.
    let project = projects
        .find(&request.project_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the project!"))?;
    projects.delete(&project.id)?;

    Ok(Json(TextResponse::new("Project deleted successfully!")))
}

#[utoipa::path(
    get,
    path = "/project/info",
    params(ProjectQuery),
    tag = "Projects",
    responses(
        (status = 200, description = "Project details", body = ProjectInfoResponse),
        (status = 400, description = "Unknown project"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn info(
    State(state): State<AppState>,
    Auth(_caller): Auth,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<ProjectInfoResponse>, ApiError> {
    let storage = state.storage.read().await;
    let users = UserRepository::new(&storage);
    let projects = ProjectRepository::new(&storage);

    let project = projects
        .find(&query.project_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the project!"))?;

    let members = users.usernames_for(&project.members)?;
    let owner = users
        .find(&project.owner)?
        .ok_or_else(|| ApiError::bad_request("Can't find the user!"))?
        .username;

    Ok(Json(ProjectInfoResponse {
        title: project.title,
        description: project.description,
        members,
        owner,
    }))
}

#[utoipa::path(
    get,
    path = "/project/get-owned-by-user",
    tag = "Projects",
    responses(
        (status = 200, description = "Projects owned by the caller, possibly empty", body = ProjectListResponse),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn get_owned_by_user(
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let storage = state.storage.read().await;
    let projects = ProjectRepository::new(&storage);

    let owned = projects.list_owned_by(&caller.user_id)?;

    Ok(Json(ProjectListResponse {
        projects: summaries(owned),
    }))
}

#[utoipa::path(
    get,
    path = "/project/get-joined-by-user",
    tag = "Projects",
    responses(
        (status = 200, description = "Projects where the caller is a member", body = ProjectListResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Caller is a member of no project"),
    )
)]
pub async fn get_joined_by_user(
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let storage = state.storage.read().await;
    let projects = ProjectRepository::new(&storage);

    let joined = projects.list_with_member(&caller.user_id)?;

    // Unlike the owned listing, an empty membership set is an error here
    if joined.is_empty() {
        return Err(ApiError::not_found("No joined projects found!"));
    }

    Ok(Json(ProjectListResponse {
        projects: summaries(joined),
    }))
}

#[utoipa::path(
    put,
    path = "/project/update",
    request_body = UpdateProjectRequest,
    tag = "Projects",
    responses(
        (status = 200, description = "Project updated", body = TextResponse),
        (status = 400, description = "Missing fields or unknown project"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller does not own the project"),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    if request.project_id.is_empty()
        || request.new_title.is_empty()
        || request.new_description.is_empty()
    {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    let storage = state.storage.write().await;
    let projects = ProjectRepository::new(&storage);

    let mut project = projects
        .find(&request.project_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the project!"))?;

    if !project.is_owned_by(&caller.user_id) {
        return Err(ApiError::forbidden("Project not owned by the user!!"));
    }

    project.title = request.new_title;
    project.description = request.new_description;
    projects.update(&project)?;

    Ok(Json(TextResponse::new("Project updated successfully!")))
}

#[utoipa::path(
    post,
    path = "/project/add-members",
    request_body = MembershipRequest,
    tag = "Projects",
    responses(
        (status = 200, description = "Members added", body = MessageResponse),
        (status = 400, description = "Missing id or empty username list"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller does not own the project"),
        (status = 404, description = "Unknown project"),
    )
)]
pub async fn add_members(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if request.project_id.is_empty() || request.usernames.is_empty() {
        return Err(ApiError::bad_request(
            "Project ID and usernames are required.",
        ));
    }

    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);
    let projects = ProjectRepository::new(&storage);

    let mut project = projects
        .find(&request.project_id)?
        .ok_or_else(|| ApiError::not_found("Project not found."))?;

    if !project.is_owned_by(&caller.user_id) {
        return Err(ApiError::forbidden(
            "Only the project owner can add members.",
        ));
    }

    // Set union: re-adding an existing member changes nothing
    for id in users.resolve_usernames(&request.usernames)? {
        if !project.members.contains(&id) {
            project.members.push(id);
        }
    }
    projects.update(&project)?;

    Ok(Json(MessageResponse::new("Members added successfully.")))
}

#[utoipa::path(
    post,
    path = "/project/remove-members",
    request_body = MembershipRequest,
    tag = "Projects",
    responses(
        (status = 200, description = "Members removed", body = MessageResponse),
        (status = 400, description = "Missing id or empty username list"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller does not own the project"),
        (status = 404, description = "Unknown project"),
    )
)]
pub async fn remove_members(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if request.project_id.is_empty() || request.usernames.is_empty() {
        return Err(ApiError::bad_request(
            "Project ID and usernames are required.",
        ));
    }

    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);
    let projects = ProjectRepository::new(&storage);

    let mut project = projects
        .find(&request.project_id)?
        .ok_or_else(|| ApiError::not_found("Project not found."))?;

    if !project.is_owned_by(&caller.user_id) {
        return Err(ApiError::forbidden(
            "Only the project owner can remove members.",
        ));
    }

    // Set difference: removing an absent member changes nothing
    let removed = users.resolve_usernames(&request.usernames)?;
    project.members.retain(|member| !removed.contains(member));
    projects.update(&project)?;

    Ok(Json(MessageResponse::new("Members removed successfully.")))
}
