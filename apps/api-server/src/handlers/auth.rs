//! Signup and login handlers.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};

use cinelog_core::domain::User;
use cinelog_core::validation;
use cinelog_shared::dto::{LoginRequest, LoginResponse, SignupResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::{upload, urls};

/// POST /signup
///
/// Creates the account but deliberately does not issue a session token;
/// the client logs in as a separate step.
pub async fn signup(state: web::Data<AppState>, payload: Multipart) -> AppResult<HttpResponse> {
    let form = upload::collect(payload).await?;

    let (Some(email), Some(password), Some(first_name), Some(last_name)) = (
        form.text("email"),
        form.text("password"),
        form.text("firstName"),
        form.text("lastName"),
    ) else {
        return Err(AppError::BadRequest(
            "Email, password, first name, and last name are required".to_string(),
        ));
    };

    validation::validate_email(email)?;
    validation::validate_password(password)?;

    let dob = form.text("dob").map(validation::parse_dob).transpose()?;

    if state.users.email_exists(email).await? {
        return Err(AppError::Conflict("Email already exists".to_string()));
    }

    let password_hash = state.passwords.hash(password)?;

    // The picture lands on disk before the row exists; a failed insert
    // can orphan the file.
    let profile_pic = match &form.file {
        Some(file) => Some(state.storage.store(&file.filename, &file.bytes).await?),
        None => None,
    };

    let user = User::new(
        email.to_string(),
        password_hash,
        first_name.to_string(),
        last_name.to_string(),
        dob,
        profile_pic,
    );
    let saved = state.users.insert(user).await?;

    tracing::info!(user_id = %saved.id, "User created");

    Ok(HttpResponse::Created().json(SignupResponse {
        message: "User created successfully".to_string(),
        user_id: saved.id,
        profile_pic: urls::absolutize_opt(&state.public_base_url, saved.profile_pic.as_deref()),
    }))
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    // Unknown email and wrong password take the same exit
    let Some(user) = state.users.find_by_email(&req.email).await? else {
        return Err(AppError::InvalidCredentials);
    };

    if !state.passwords.verify(&req.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.tokens.generate_token(user.id, &user.email)?;

    tracing::info!(user_id = %user.id, "Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        first_name: user.first_name,
        last_name: user.last_name,
        profile_pic: urls::absolutize_opt(&state.public_base_url, user.profile_pic.as_deref()),
    }))
}
