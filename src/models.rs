// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! # Data Models
//!
//! Persisted records for the three collections (users, projects, tickets)
//! plus the request/response structures used by the REST API. API types
//! derive `Serialize`/`Deserialize` and `ToSchema` for JSON handling and
//! OpenAPI documentation.
//!
//! All cross-record references are stored as raw string identifiers with no
//! foreign-key enforcement; readers resolve them on demand and drop ids that
//! no longer resolve.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// =============================================================================
// Persisted Records
// =============================================================================

/// A registered user account.
///
/// `password_hash` is a self-describing bcrypt digest; the plaintext is never
/// stored. `username` and `email` are globally unique across the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier (UUID)
    pub id: String,
    /// Unique login handle
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Bcrypt digest of the password (never the plaintext)
    pub password_hash: String,
    /// Optional pronouns, set via profile update
    #[serde(default)]
    pub pronouns: Option<String>,
    /// Admin flag; stored at registration, always false
    pub is_admin: bool,
    /// When the account was created
    pub joining: DateTime<Utc>,
}

/// A named workspace owned by exactly one user.
///
/// The owner is set at creation and never changes. Members grant association
/// only, no mutation rights; the owner need not appear in `members`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Unique project identifier (UUID)
    pub id: String,
    /// Project title
    pub title: String,
    /// Project description
    pub description: String,
    /// User id of the owner (write-once)
    pub owner: String,
    /// User ids of members, no duplicates
    pub members: Vec<String>,
    /// Ticket ids created inside this project
    pub tickets: Vec<String>,
    /// When the project was created
    pub creation: DateTime<Utc>,
}

/// A unit of work scoped to a project.
///
/// The creator is set at creation and never changes. `status` is free-form;
/// any string is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    /// Unique ticket identifier (UUID)
    pub id: String,
    /// Ticket title
    pub title: String,
    /// Ticket description
    pub description: String,
    /// User id of the creator (write-once)
    pub creator: String,
    /// User ids of assignees, no duplicates
    pub assignees: Vec<String>,
    /// Id of the project this ticket belongs to
    pub project: String,
    /// Due date
    pub deadline: NaiveDate,
    /// Free-form status string ("pending" on creation)
    pub status: String,
    /// When the ticket was created
    pub creation: DateTime<Utc>,
}

// =============================================================================
// Common Response Shapes
// =============================================================================

/// Success acknowledgement carrying a `text` field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TextResponse {
    /// Human-readable confirmation
    pub text: String,
}

impl TextResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Success acknowledgement carrying a `message` field (membership endpoints).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// User API Models
// =============================================================================

/// Request body for POST /user-auth/signup.
///
/// Fields default to empty so a missing field reports the same
/// "enter all the fields" error as an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Request body for POST /user-auth/signin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SigninRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response for a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed identity token; send back in the `x-auth-token` header
    pub token: String,
}

/// Request body for PUT /user-auth/update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub new_name: String,
    #[serde(default)]
    pub new_pronouns: String,
}

/// Request body for PUT /user-auth/reset-password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_new_password: String,
}

/// Request body for DELETE /user-auth/delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteAccountRequest {
    #[serde(default)]
    pub password: String,
}

/// Response for GET /user-auth/info.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserInfoResponse {
    pub username: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
}

// =============================================================================
// Project API Models
// =============================================================================

/// Request body for POST /project/create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Optional initial member usernames; unknown names are dropped
    #[serde(default)]
    pub members: Vec<String>,
}

/// Request body for DELETE /project/delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteProjectRequest {
    #[serde(default)]
    pub project_id: String,
}

/// Query parameters for project lookups.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ProjectQuery {
    #[serde(default)]
    pub project_id: String,
}

/// Response for GET /project/info.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ProjectInfoResponse {
    pub title: String,
    pub description: String,
    /// Member usernames (unresolvable ids are dropped)
    pub members: Vec<String>,
    /// Username of the project owner
    pub owner: String,
}

/// Request body for PUT /project/update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub new_title: String,
    #[serde(default)]
    pub new_description: String,
}

/// Request body for the membership endpoints (add-members / remove-members).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MembershipRequest {
    #[serde(default)]
    pub project_id: String,
    /// Usernames to add or remove; unknown names are silently dropped
    #[serde(default)]
    pub usernames: Vec<String>,
}

/// One entry in a project listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ProjectSummary {
    pub title: String,
    pub id: String,
}

/// Response for the project listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
}

// =============================================================================
// Ticket API Models
// =============================================================================

/// Request body for POST /ticket/create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Optional initial assignee usernames; unknown names are dropped
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Due date in `YYYY-MM-DD` format
    #[serde(default)]
    pub deadline: String,
}

/// Request body for DELETE /ticket/delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteTicketRequest {
    #[serde(default)]
    pub ticket_id: String,
}

/// Query parameters for ticket lookups.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct TicketQuery {
    #[serde(default)]
    pub ticket_id: String,
}

/// Request body for PUT /ticket/update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTicketRequest {
    #[serde(default)]
    pub ticket_id: String,
    #[serde(default)]
    pub new_title: String,
    #[serde(default)]
    pub new_description: String,
    /// New due date in `YYYY-MM-DD` format
    #[serde(default)]
    pub new_deadline: String,
    /// New status; free-form, any string accepted
    #[serde(default)]
    pub new_status: String,
}

/// Response for GET /ticket/info.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TicketInfoResponse {
    pub title: String,
    pub description: String,
    /// Username of the ticket creator
    pub creator: String,
    /// Assignee usernames (unresolvable ids are dropped)
    pub assignees: Vec<String>,
    pub status: String,
    /// Due date formatted `YYYY-MM-DD`
    pub deadline: String,
}

/// Request body for the assignee endpoints (add-assignees / remove-assignees).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssigneesRequest {
    #[serde(default)]
    pub ticket_id: String,
    /// Usernames to add or remove; unknown names are silently dropped
    #[serde(default)]
    pub usernames: Vec<String>,
}

/// One entry in a ticket listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TicketSummary {
    pub title: String,
    pub id: String,
}

/// Response for the ticket listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TicketListResponse {
    pub tickets: Vec<TicketSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_defaults_missing_fields_to_empty() {
        let request: SignupRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(request.username, "alice");
        assert!(request.password.is_empty());
        assert!(request.email.is_empty());
    }

    #[test]
    fn user_record_round_trips_without_pronouns() {
        let user = User {
            id: "u1".into(),
            username: "alice".into(),
            email: "alice@x.com".into(),
            name: "Alice".into(),
            password_hash: "$2b$08$hash".into(),
            pronouns: None,
            is_admin: false,
            joining: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn user_info_omits_absent_pronouns() {
        let info = UserInfoResponse {
            username: "alice".into(),
            email: "alice@x.com".into(),
            name: "Alice".into(),
            pronouns: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("pronouns"));
    }
}
