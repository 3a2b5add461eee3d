//! Profile handlers - always scoped to the resolved identity.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use chrono::Utc;

use cinelog_core::domain::User;
use cinelog_core::validation;
use cinelog_shared::dto::{ProfileUpdateResponse, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::{upload, urls};

fn user_response(state: &AppState, user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        dob: user.dob,
        profile_pic: urls::absolutize_opt(&state.public_base_url, user.profile_pic.as_deref()),
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

/// GET /profile
pub async fn get_profile(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(user_response(&state, user)))
}

/// PUT /profile
///
/// Sparse update: only the supplied fields change. The target record is
/// always the token's user, never a client-supplied id.
pub async fn update_profile(
    state: web::Data<AppState>,
    identity: Identity,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = upload::collect(payload).await?;

    let mut user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if let Some(first_name) = form.text("firstName") {
        user.first_name = first_name.to_string();
    }
    if let Some(last_name) = form.text("lastName") {
        user.last_name = last_name.to_string();
    }
    if let Some(dob) = form.text("dob") {
        user.dob = Some(validation::parse_dob(dob)?);
    }

    if let Some(file) = &form.file {
        let new_pic = state.storage.store(&file.filename, &file.bytes).await?;

        // Replacing the picture retires the previous file
        if let Some(old_pic) = user.profile_pic.replace(new_pic) {
            if let Err(e) = state.storage.delete(&old_pic).await {
                tracing::warn!(error = %e, "Failed to delete previous profile picture");
            }
        }
    }

    user.updated_at = Utc::now();
    let updated = state.users.update(user).await?;

    tracing::info!(user_id = %updated.id, "Profile updated");

    Ok(HttpResponse::Ok().json(ProfileUpdateResponse {
        message: "Profile updated successfully".to_string(),
        user: user_response(&state, updated),
    }))
}
