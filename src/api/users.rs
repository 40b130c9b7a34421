// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Account endpoints: registration, sign-in, profile and credential
//! management. Routes are mounted under `/user-auth`.

use axum::{extract::State, Json};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    auth::{
        password::{self, StrengthViolation},
        Auth,
    },
    error::ApiError,
    models::{
        DeleteAccountRequest, ResetPasswordRequest, SigninRequest, SignupRequest, TextResponse,
        TokenResponse, UpdateProfileRequest, User, UserInfoResponse,
    },
    state::AppState,
    storage::UserRepository,
};

/// Map a password-strength violation to its user-visible message.
fn strength_error(violation: StrengthViolation) -> ApiError {
    match violation {
        StrengthViolation::TooShort => {
            ApiError::bad_request("Password should be atleast 6 characters :)")
        }
        StrengthViolation::MissingCharacterClass => ApiError::bad_request(
            "Password must contain at least one uppercase letter, one lowercase letter, and one number.",
        ),
    }
}

/// Hashing backend failures are internal errors, never silently accepted.
fn hashing_error(err: bcrypt::BcryptError) -> ApiError {
    tracing::error!(error = %err, "password hashing failed");
    ApiError::internal()
}

#[utoipa::path(
    post,
    path = "/user-auth/signup",
    request_body = SignupRequest,
    tag = "Users",
    responses(
        (status = 200, description = "Account created", body = TextResponse),
        (status = 400, description = "Validation failure or username/email taken"),
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    if request.username.is_empty()
        || request.password.is_empty()
        || request.confirm_password.is_empty()
        || request.name.is_empty()
        || request.email.is_empty()
    {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    password::validate_strength(&request.password).map_err(strength_error)?;

    if request.confirm_password != request.password {
        return Err(ApiError::bad_request("Both the passwords dont match -_-"));
    }

    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);

    // Username first, then email; both must be free before any write
    if users.find_by_username(&request.username)?.is_some() {
        return Err(ApiError::bad_request("User name already taken ;)"));
    }
    if users.find_by_email(&request.email)?.is_some() {
        return Err(ApiError::bad_request("email already taken ;)"));
    }

    let password_hash = password::hash_password(&request.password).map_err(hashing_error)?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        username: request.username,
        email: request.email,
        name: request.name,
        password_hash,
        pronouns: None,
        is_admin: false,
        joining: Utc::now(),
    };
    users.create(&user)?;

    Ok(Json(TextResponse::new("User created successfully!")))
}

#[utoipa::path(
    post,
    path = "/user-auth/signin",
    request_body = SigninRequest,
    tag = "Users",
    responses(
        (status = 200, description = "Signed identity token", body = TokenResponse),
        (status = 400, description = "Unknown username or incorrect password"),
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    let storage = state.storage.read().await;
    let users = UserRepository::new(&storage);

    let user = users
        .find_by_username(&request.username)?
        .ok_or_else(|| ApiError::bad_request("User with this username does not exist"))?;

    let matches =
        password::verify_password(&request.password, &user.password_hash).map_err(hashing_error)?;
    if !matches {
        return Err(ApiError::bad_request("Incorrect password :("));
    }

    let token = state.tokens.issue(&user.id).map_err(|e| {
        tracing::error!(error = %e, "token signing failed");
        ApiError::internal()
    })?;

    Ok(Json(TokenResponse { token }))
}

#[utoipa::path(
    put,
    path = "/user-auth/update",
    request_body = UpdateProfileRequest,
    tag = "Users",
    responses(
        (status = 200, description = "Profile updated", body = TextResponse),
        (status = 400, description = "Missing fields or unknown user"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);

    let mut user = users
        .find(&caller.user_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the user!"))?;

    if request.new_name.is_empty() || request.new_pronouns.is_empty() {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    user.name = request.new_name;
    user.pronouns = Some(request.new_pronouns);
    users.update(&user)?;

    Ok(Json(TextResponse::new("User updated successfully!")))
}

#[utoipa::path(
    put,
    path = "/user-auth/reset-password",
    request_body = ResetPasswordRequest,
    tag = "Users",
    responses(
        (status = 200, description = "Password updated", body = TextResponse),
        (status = 400, description = "Validation failure or wrong old password"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);

    let mut user = users
        .find(&caller.user_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the user!"))?;

    if request.old_password.is_empty()
        || request.new_password.is_empty()
        || request.confirm_new_password.is_empty()
    {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    // Re-authenticate before a destructive change
    let matches = password::verify_password(&request.old_password, &user.password_hash)
        .map_err(hashing_error)?;
    if !matches {
        return Err(ApiError::bad_request("Incorrect password :("));
    }

    password::validate_strength(&request.new_password).map_err(strength_error)?;

    if request.new_password != request.confirm_new_password {
        return Err(ApiError::bad_request("Both the passwords dont match -_-"));
    }

    user.password_hash = password::hash_password(&request.new_password).map_err(hashing_error)?;
    users.update(&user)?;

    Ok(Json(TextResponse::new("Password updated successfully!")))
}

#[utoipa::path(
    delete,
    path = "/user-auth/delete",
    request_body = DeleteAccountRequest,
    tag = "Users",
    responses(
        (status = 200, description = "Account deleted", body = TextResponse),
        (status = 400, description = "Missing password or wrong password"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn delete_account(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<DeleteAccountRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    let storage = state.storage.write().await;
    let users = UserRepository::new(&storage);

    let user = users
        .find(&caller.user_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the user!"))?;

    if request.password.is_empty() {
        return Err(ApiError::bad_request("Please enter all the fields -_-"));
    }

    // Re-authenticate before a destructive change
    let matches =
        password::verify_password(&request.password, &user.password_hash).map_err(hashing_error)?;
    if !matches {
        return Err(ApiError::bad_request("Incorrect password :("));
    }

    users.delete(&user.id)?;

    Ok(Json(TextResponse::new("User deleted successfully!")))
}

#[utoipa::path(
    get,
    path = "/user-auth/info",
    tag = "Users",
    responses(
        (status = 200, description = "Caller's profile", body = UserInfoResponse),
        (status = 400, description = "Unknown user"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn info(
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<UserInfoResponse>, ApiError> {
    let storage = state.storage.read().await;
    let users = UserRepository::new(&storage);

    let user = users
        .find(&caller.user_id)?
        .ok_or_else(|| ApiError::bad_request("Can't find the user!"))?;

    Ok(Json(UserInfoResponse {
        username: user.username,
        email: user.email,
        name: user.name,
        pronouns: user.pronouns,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthenticatedUser, TokenIssuer};
    use crate::storage::{FileStorage, StoragePaths};
    use axum::http::StatusCode;
    use tempfile::TempDir;

    fn test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let mut storage = FileStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize");
        let state = AppState::new(storage, TokenIssuer::new("test-secret"));
        (state, dir)
    }

    fn signup_request(username: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
            name: username.to_string(),
            email: format!("{username}@x.com"),
        }
    }

    async fn register(state: &AppState, username: &str, password: &str) {
        signup(
            State(state.clone()),
            Json(signup_request(username, password)),
        )
        .await
        .expect("signup succeeds");
    }

    async fn caller_for(state: &AppState, username: &str) -> AuthenticatedUser {
        let storage = state.storage.read().await;
        let user = UserRepository::new(&storage)
            .find_by_username(username)
            .unwrap()
            .expect("registered user");
        AuthenticatedUser { user_id: user.id }
    }

    async fn user_count(state: &AppState) -> usize {
        let storage = state.storage.read().await;
        UserRepository::new(&storage).list_all().unwrap().len()
    }

    #[tokio::test]
    async fn signup_rejects_empty_fields() {
        let (state, _dir) = test_state();
        let mut request = signup_request("alice", "Passw0rd");
        request.email = String::new();

        let err = signup(State(state.clone()), Json(request)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Please enter all the fields -_-");
        assert_eq!(user_count(&state).await, 0);
    }

    #[tokio::test]
    async fn signup_rejects_weak_passwords() {
        let (state, _dir) = test_state();

        let err = signup(State(state.clone()), Json(signup_request("alice", "Ab1")))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Password should be atleast 6 characters :)");

        for weak in ["alllowercase1", "ALLUPPERCASE1", "NoDigitsHere"] {
            let err = signup(State(state.clone()), Json(signup_request("alice", weak)))
                .await
                .unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(
                err.message,
                "Password must contain at least one uppercase letter, one lowercase letter, and one number."
            );
        }

        // No record was created by any rejected attempt
        assert_eq!(user_count(&state).await, 0);
    }

    #[tokio::test]
    async fn signup_rejects_mismatched_confirmation() {
        let (state, _dir) = test_state();
        let mut request = signup_request("alice", "Passw0rd");
        request.confirm_password = "Passw0re".to_string();

        let err = signup(State(state.clone()), Json(request)).await.unwrap_err();
        assert_eq!(err.message, "Both the passwords dont match -_-");
    }

    #[tokio::test]
    async fn signup_rejects_duplicate_username_and_email() {
        let (state, _dir) = test_state();
        register(&state, "alice", "Passw0rd").await;

        let err = signup(State(state.clone()), Json(signup_request("alice", "Passw0rd")))
            .await
            .unwrap_err();
        assert_eq!(err.message, "User name already taken ;)");

        let mut request = signup_request("alice2", "Passw0rd");
        request.email = "alice@x.com".to_string();
        let err = signup(State(state.clone()), Json(request)).await.unwrap_err();
        assert_eq!(err.message, "email already taken ;)");

        assert_eq!(user_count(&state).await, 1);
    }

    #[tokio::test]
    async fn signin_round_trip_resolves_same_user() {
        let (state, _dir) = test_state();
        register(&state, "alice", "Passw0rd").await;

        let Json(response) = signin(
            State(state.clone()),
            Json(SigninRequest {
                username: "alice".to_string(),
                password: "Passw0rd".to_string(),
            }),
        )
        .await
        .expect("signin succeeds");

        let verified_id = state.tokens.verify(&response.token).unwrap();
        let caller = caller_for(&state, "alice").await;
        assert_eq!(verified_id, caller.user_id);
    }

    #[tokio::test]
    async fn signin_distinguishes_unknown_user_from_wrong_password() {
        let (state, _dir) = test_state();
        register(&state, "alice", "Passw0rd").await;

        let err = signin(
            State(state.clone()),
            Json(SigninRequest {
                username: "bob".to_string(),
                password: "Passw0rd".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "User with this username does not exist");

        let err = signin(
            State(state.clone()),
            Json(SigninRequest {
                username: "alice".to_string(),
                password: "WrongPassw0rd".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Incorrect password :(");
    }

    #[tokio::test]
    async fn update_profile_sets_name_and_pronouns() {
        let (state, _dir) = test_state();
        register(&state, "alice", "Passw0rd").await;
        let caller = caller_for(&state, "alice").await;

        update_profile(
            State(state.clone()),
            Auth(caller.clone()),
            Json(UpdateProfileRequest {
                new_name: "Alice A.".to_string(),
                new_pronouns: "she/her".to_string(),
            }),
        )
        .await
        .expect("update succeeds");

        let Json(profile) = info(State(state.clone()), Auth(caller)).await.unwrap();
        assert_eq!(profile.name, "Alice A.");
        assert_eq!(profile.pronouns.as_deref(), Some("she/her"));
    }

    #[tokio::test]
    async fn reset_password_requires_old_password_and_policy() {
        let (state, _dir) = test_state();
        register(&state, "alice", "Passw0rd").await;
        let caller = caller_for(&state, "alice").await;

        let err = reset_password(
            State(state.clone()),
            Auth(caller.clone()),
            Json(ResetPasswordRequest {
                old_password: "WrongPassw0rd".to_string(),
                new_password: "NewPassw0rd".to_string(),
                confirm_new_password: "NewPassw0rd".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "Incorrect password :(");

        let err = reset_password(
            State(state.clone()),
            Auth(caller.clone()),
            Json(ResetPasswordRequest {
                old_password: "Passw0rd".to_string(),
                new_password: "weak".to_string(),
                confirm_new_password: "weak".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "Password should be atleast 6 characters :)");

        reset_password(
            State(state.clone()),
            Auth(caller),
            Json(ResetPasswordRequest {
                old_password: "Passw0rd".to_string(),
                new_password: "NewPassw0rd1".to_string(),
                confirm_new_password: "NewPassw0rd1".to_string(),
            }),
        )
        .await
        .expect("reset succeeds");

        // Old password no longer works, new one does
        let err = signin(
            State(state.clone()),
            Json(SigninRequest {
                username: "alice".to_string(),
                password: "Passw0rd".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "Incorrect password :(");

        signin(
            State(state.clone()),
            Json(SigninRequest {
                username: "alice".to_string(),
                password: "NewPassw0rd1".to_string(),
            }),
        )
        .await
        .expect("signin with new password succeeds");
    }

    #[tokio::test]
    async fn delete_account_reverifies_password() {
        let (state, _dir) = test_state();
        register(&state, "alice", "Passw0rd").await;
        let caller = caller_for(&state, "alice").await;

        let err = delete_account(
            State(state.clone()),
            Auth(caller.clone()),
            Json(DeleteAccountRequest {
                password: "WrongPassw0rd".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "Incorrect password :(");
        assert_eq!(user_count(&state).await, 1);

        delete_account(
            State(state.clone()),
            Auth(caller),
            Json(DeleteAccountRequest {
                password: "Passw0rd".to_string(),
            }),
        )
        .await
        .expect("delete succeeds");
        assert_eq!(user_count(&state).await, 0);
    }

    #[tokio::test]
    async fn info_returns_profile() {
        let (state, _dir) = test_state();
        register(&state, "alice", "Passw0rd").await;
        let caller = caller_for(&state, "alice").await;

        let Json(profile) = info(State(state.clone()), Auth(caller)).await.unwrap();
        assert_eq!(
            profile,
            UserInfoResponse {
                username: "alice".to_string(),
                email: "alice@x.com".to_string(),
                name: "alice".to_string(),
                pronouns: None,
            }
        );
    }
}
