// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! HTTP surface: router assembly and OpenAPI documentation.
//!
//! Three route groups mirror the three collections: `/user-auth` for
//! accounts and credentials, `/project` and `/ticket` for the tracked
//! resources. Interactive docs are served at `/docs`.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        AssigneesRequest, CreateProjectRequest, CreateTicketRequest, DeleteAccountRequest,
        DeleteProjectRequest, DeleteTicketRequest, MembershipRequest, MessageResponse,
        ProjectInfoResponse, ProjectListResponse, ProjectSummary, ResetPasswordRequest,
        SigninRequest, SignupRequest, TextResponse, TicketInfoResponse, TicketListResponse,
        TicketSummary, TokenResponse, UpdateProfileRequest, UpdateProjectRequest,
        UpdateTicketRequest, UserInfoResponse,
    },
    state::AppState,
};

pub mod projects;
pub mod tickets;
pub mod users;

pub fn router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/signup", post(users::signup))
        .route("/signin", post(users::signin))
        .route("/update", put(users::update_profile))
        .route("/reset-password", put(users::reset_password))
        .route("/delete", delete(users::delete_account))
        .route("/info", get(users::info));

    let project_routes = Router::new()
        .route("/create", post(projects::create))
        .route("/delete", delete(projects::delete))
        .route("/info", get(projects::info))
        .route("/get-owned-by-user", get(projects::get_owned_by_user))
        .route("/get-joined-by-user", get(projects::get_joined_by_user))
        .route("/update", put(projects::update))
        .route("/add-members", post(projects::add_members))
        .route("/remove-members", post(projects::remove_members));

    let ticket_routes = Router::new()
        .route("/create", post(tickets::create))
        .route("/delete", delete(tickets::delete))
        .route("/update", put(tickets::update))
        .route("/info", get(tickets::info))
        .route("/add-assignees", post(tickets::add_assignees))
        .route("/remove-assignees", post(tickets::remove_assignees))
        .route("/get-all-in-project", get(tickets::get_all_in_project))
        .route("/get-owned-by-user", get(tickets::get_owned_by_user))
        .route("/get-assigned-to-user", get(tickets::get_assigned_to_user));

    Router::new()
        .nest("/user-auth", user_routes)
        .nest("/project", project_routes)
        .nest("/ticket", ticket_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::signup,
        users::signin,
        users::update_profile,
        users::reset_password,
        users::delete_account,
        users::info,
        projects::create,
        projects::delete,
        projects::info,
        projects::get_owned_by_user,
        projects::get_joined_by_user,
        projects::update,
        projects::add_members,
        projects::remove_members,
        tickets::create,
        tickets::delete,
        tickets::update,
        tickets::info,
        tickets::add_assignees,
        tickets::remove_assignees,
        tickets::get_all_in_project,
        tickets::get_owned_by_user,
        tickets::get_assigned_to_user
    ),
    components(
        schemas(
            TextResponse,
            MessageResponse,
            SignupRequest,
            SigninRequest,
            TokenResponse,
            UpdateProfileRequest,
            ResetPasswordRequest,
            DeleteAccountRequest,
            UserInfoResponse,
            CreateProjectRequest,
            DeleteProjectRequest,
            ProjectInfoResponse,
            UpdateProjectRequest,
            MembershipRequest,
            ProjectSummary,
            ProjectListResponse,
            CreateTicketRequest,
            DeleteTicketRequest,
            UpdateTicketRequest,
            TicketInfoResponse,
            AssigneesRequest,
            TicketSummary,
            TicketListResponse
        )
    ),
    tags(
        (name = "Users", description = "Registration, sign-in and profile management"),
        (name = "Projects", description = "Project lifecycle and membership"),
        (name = "Tickets", description = "Ticket lifecycle and assignees")
    )
)]
struct ApiDoc;
