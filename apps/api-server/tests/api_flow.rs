//! End-to-end API tests against in-memory repositories and a temp
//! uploads directory.

use std::sync::Arc;

use actix_web::{App, test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use api_server::handlers;
use api_server::state::AppState;
use cinelog_infra::{
    Argon2PasswordService, InMemoryMovieRepository, InMemoryUserRepository, JwtConfig,
    JwtTokenService, LocalFileStorage,
};

const BASE_URL: &str = "http://localhost:3000";

fn test_state() -> AppState {
    let uploads = std::env::temp_dir().join(format!("cinelog-api-test-{}", Uuid::new_v4()));

    AppState {
        users: Arc::new(InMemoryUserRepository::new()),
        movies: Arc::new(InMemoryMovieRepository::new()),
        storage: Arc::new(LocalFileStorage::new(uploads)),
        tokens: Arc::new(JwtTokenService::new(JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiration_secs: 3600,
            issuer: "cinelog-test".to_string(),
        })),
        passwords: Arc::new(Argon2PasswordService::new()),
        public_base_url: BASE_URL.to_string(),
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .app_data(web::Data::new($state.tokens.clone()))
                .configure(handlers::configure_routes),
        )
        .await
    };
}

const BOUNDARY: &str = "----cinelog-test-boundary";

/// Build a multipart/form-data body from text fields and an optional
/// file part named `profilePic`.
fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"profilePic\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={BOUNDARY}"),
        body,
    )
}

fn signup_request(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> test::TestRequest {
    let (content_type, body) = multipart_body(fields, file);
    test::TestRequest::post()
        .uri("/signup")
        .insert_header(("content-type", content_type))
        .set_payload(body)
}

async fn signup_user<S>(app: &S, email: &str, password: &str) -> Value
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = signup_request(
        &[
            ("email", email),
            ("password", password),
            ("firstName", "A"),
            ("lastName", "B"),
            ("dob", "2000-01-01"),
        ],
        None,
    )
    .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201, "signup should succeed");
    test::read_body_json(resp).await
}

async fn login_token<S>(app: &S, email: &str, password: &str) -> String
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": email, "password": password}))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 200, "login should succeed");
    let body: Value = test::read_body_json(resp).await;
    body["token"].as_str().expect("token in response").to_string()
}

#[actix_web::test]
async fn full_catalog_lifecycle() {
    let state = test_state();
    let app = test_app!(state);

    // signup -> 201 with userId
    let signup = signup_user(&app, "a@x.com", "Abc123!").await;
    assert!(signup["userId"].is_string());

    // login -> 200 with token and profile fields
    let token = login_token(&app, "a@x.com", "Abc123!").await;

    // create movie -> 201
    let req = test::TestRequest::post()
        .uri("/movies")
        .insert_header(("authorization", format!("Bearer {token}")))
        .set_json(json!({"title": "Dune", "year": 2021, "poster": "http://p/d.jpg"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    let movie_id = created["movie"]["_id"].as_str().unwrap().to_string();

    // list -> exactly the created movie, poster unchanged (already absolute)
    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(("authorization", format!("Bearer {token}")))
        .to_request();
    let movies: Value = test::call_and_read_body_json(&app, req).await;
    let movies = movies.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["_id"], movie_id.as_str());
    assert_eq!(movies[0]["title"], "Dune");
    assert_eq!(movies[0]["year"], 2021);
    assert_eq!(movies[0]["poster"], "http://p/d.jpg");

    // delete -> 200 with confirmation
    let req = test::TestRequest::delete()
        .uri(&format!("/movies/{movie_id}"))
        .insert_header(("authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // list -> empty again
    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(("authorization", format!("Bearer {token}")))
        .to_request();
    let movies: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(movies.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn login_failure_is_indistinguishable() {
    let state = test_state();
    let app = test_app!(state);

    signup_user(&app, "a@x.com", "Abc123!").await;

    // Unknown email
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "nobody@x.com", "password": "Abc123!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let unknown_email_body = test::read_body(resp).await;

    // Wrong password for a real account
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "a@x.com", "password": "Wrong123!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let wrong_password_body = test::read_body(resp).await;

    assert_eq!(unknown_email_body, wrong_password_body);
}

#[actix_web::test]
async fn catalog_is_ownership_scoped() {
    let state = test_state();
    let app = test_app!(state);

    signup_user(&app, "a@x.com", "Abc123!").await;
    signup_user(&app, "b@x.com", "Def456!").await;

    let token_a = login_token(&app, "a@x.com", "Abc123!").await;
    let token_b = login_token(&app, "b@x.com", "Def456!").await;

    // A creates a movie
    let req = test::TestRequest::post()
        .uri("/movies")
        .insert_header(("authorization", format!("Bearer {token_a}")))
        .set_json(json!({"title": "Dune", "year": 2021, "poster": "http://p/d.jpg"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let movie_id = created["movie"]["_id"].as_str().unwrap().to_string();

    // B's list never includes A's movies
    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(("authorization", format!("Bearer {token_b}")))
        .to_request();
    let movies: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(movies.as_array().unwrap().len(), 0);

    // B's update against A's movie reads as absence, not denial
    let req = test::TestRequest::put()
        .uri(&format!("/movies/{movie_id}"))
        .insert_header(("authorization", format!("Bearer {token_b}")))
        .set_json(json!({"title": "Hijacked"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // Same for delete
    let req = test::TestRequest::delete()
        .uri(&format!("/movies/{movie_id}"))
        .insert_header(("authorization", format!("Bearer {token_b}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // A's movie is untouched
    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(("authorization", format!("Bearer {token_a}")))
        .to_request();
    let movies: Value = test::call_and_read_body_json(&app, req).await;
    let movies = movies.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Dune");
}

#[actix_web::test]
async fn partial_movie_update_keeps_omitted_fields() {
    let state = test_state();
    let app = test_app!(state);

    signup_user(&app, "a@x.com", "Abc123!").await;
    let token = login_token(&app, "a@x.com", "Abc123!").await;

    let req = test::TestRequest::post()
        .uri("/movies")
        .insert_header(("authorization", format!("Bearer {token}")))
        .set_json(json!({"title": "Dune", "year": 2021, "poster": "http://p/d.jpg"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let movie_id = created["movie"]["_id"].as_str().unwrap().to_string();

    // Update only the year; title and poster must survive
    let req = test::TestRequest::put()
        .uri(&format!("/movies/{movie_id}"))
        .insert_header(("authorization", format!("Bearer {token}")))
        .set_json(json!({"year": 2024}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["title"], "Dune");
    assert_eq!(updated["year"], 2024);
    assert_eq!(updated["poster"], "http://p/d.jpg");

    // Empty update is a no-op
    let req = test::TestRequest::put()
        .uri(&format!("/movies/{movie_id}"))
        .insert_header(("authorization", format!("Bearer {token}")))
        .set_json(json!({}))
        .to_request();
    let unchanged: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(unchanged["title"], "Dune");
    assert_eq!(unchanged["year"], 2024);
    assert_eq!(unchanged["poster"], "http://p/d.jpg");
}

#[actix_web::test]
async fn relative_poster_expands_to_absolute_url() {
    let state = test_state();
    let app = test_app!(state);

    signup_user(&app, "a@x.com", "Abc123!").await;
    let token = login_token(&app, "a@x.com", "Abc123!").await;

    let req = test::TestRequest::post()
        .uri("/movies")
        .insert_header(("authorization", format!("Bearer {token}")))
        .set_json(json!({"title": "Alien", "year": 1979, "poster": "alien.jpg"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(("authorization", format!("Bearer {token}")))
        .to_request();
    let movies: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        movies[0]["poster"],
        format!("{BASE_URL}/uploads/alien.jpg")
    );
}

#[actix_web::test]
async fn signup_rejects_bad_input() {
    let state = test_state();
    let app = test_app!(state);

    // Missing required fields
    let req = signup_request(&[("email", "a@x.com")], None).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Invalid email
    let req = signup_request(
        &[
            ("email", "not-an-email"),
            ("password", "Abc123!"),
            ("firstName", "A"),
            ("lastName", "B"),
        ],
        None,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Password without a special character
    let req = signup_request(
        &[
            ("email", "a@x.com"),
            ("password", "Abc123"),
            ("firstName", "A"),
            ("lastName", "B"),
        ],
        None,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Duplicate email, case-insensitively
    signup_user(&app, "a@x.com", "Abc123!").await;
    let req = signup_request(
        &[
            ("email", "A@X.com"),
            ("password", "Abc123!"),
            ("firstName", "A"),
            ("lastName", "B"),
        ],
        None,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email already exists");
}

#[actix_web::test]
async fn signup_stores_picture_and_profile_serves_absolute_url() {
    let state = test_state();
    let app = test_app!(state);

    let req = signup_request(
        &[
            ("email", "a@x.com"),
            ("password", "Abc123!"),
            ("firstName", "A"),
            ("lastName", "B"),
            ("dob", "2000-01-01"),
        ],
        Some(("avatar.png", b"fake-png-bytes")),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let signup: Value = test::read_body_json(resp).await;

    let pic = signup["profilePic"].as_str().unwrap();
    assert!(pic.starts_with(&format!("{BASE_URL}/uploads/")));
    assert!(pic.ends_with("avatar.png"));

    let token = login_token(&app, "a@x.com", "Abc123!").await;
    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(("authorization", format!("Bearer {token}")))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(profile["email"], "a@x.com");
    assert_eq!(profile["dob"], "2000-01-01");
    assert_eq!(profile["profilePic"], pic);
    // The password hash never leaves the server
    assert!(profile.get("password").is_none());
    assert!(profile.get("passwordHash").is_none());
}

#[actix_web::test]
async fn profile_update_is_sparse() {
    let state = test_state();
    let app = test_app!(state);

    signup_user(&app, "a@x.com", "Abc123!").await;
    let token = login_token(&app, "a@x.com", "Abc123!").await;

    let (content_type, body) = multipart_body(&[("firstName", "Renamed")], None);
    let req = test::TestRequest::put()
        .uri("/profile")
        .insert_header(("authorization", format!("Bearer {token}")))
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;

    assert_eq!(updated["user"]["firstName"], "Renamed");
    // Untouched fields keep their prior values
    assert_eq!(updated["user"]["lastName"], "B");
    assert_eq!(updated["user"]["dob"], "2000-01-01");
}

#[actix_web::test]
async fn protected_routes_require_a_valid_token() {
    let state = test_state();
    let app = test_app!(state);

    // No token
    let req = test::TestRequest::get().uri("/movies").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Malformed header
    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(("authorization", "Bearer"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Garbage token
    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(("authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid or expired token");
}
