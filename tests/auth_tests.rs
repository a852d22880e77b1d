use actix_web::{http::StatusCode, test};
use bloglist_api::{
    LoginRequest, LoginResponse, NewUserRequest, TokenValidationRequest, TokenValidationResponse,
    UserResponse, create_base_app,
};

fn register_request(username: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/users")
        .set_json(NewUserRequest {
            username: username.to_string(),
            name: "Test User".to_string(),
            password: password.to_string(),
        })
}

fn login_request(username: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/login")
        .set_json(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
}

#[actix_web::test]
async fn test_login_with_valid_credentials_returns_token() {
    let app = test::init_service(create_base_app()).await;

    let resp = test::call_service(&app, register_request("mluukkai", "salainen").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED, "Registration should succeed");

    let resp = test::call_service(&app, login_request("mluukkai", "salainen").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "Login should succeed");

    let body: LoginResponse = test::read_body_json(resp).await;
    assert!(body.success, "Login should be successful");
    assert!(body.token.is_some(), "Token should be present");
    assert_eq!(body.message, "Login successful");
}

#[actix_web::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = test::init_service(create_base_app()).await;
    test::call_service(&app, register_request("mluukkai", "salainen").to_request()).await;

    let resp = test::call_service(&app, login_request("mluukkai", "wrong").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: LoginResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.token.is_none(), "No token on failed login");
}

#[actix_web::test]
async fn test_login_with_unknown_user_is_unauthorized() {
    let app = test::init_service(create_base_app()).await;

    let resp = test::call_service(&app, login_request("ghost", "boo").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_issued_token_validates_back_to_the_user() {
    let app = test::init_service(create_base_app()).await;
    test::call_service(&app, register_request("mluukkai", "salainen").to_request()).await;

    let login: LoginResponse = test::read_body_json(
        test::call_service(&app, login_request("mluukkai", "salainen").to_request()).await,
    )
    .await;
    let token = login.token.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/login/validate")
        .set_json(TokenValidationRequest { token })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: TokenValidationResponse = test::read_body_json(resp).await;
    assert!(body.valid, "Freshly issued token should validate");
    assert!(body.user_id.is_some(), "Validation should return the user ID");
}

#[actix_web::test]
async fn test_garbage_token_fails_validation() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/login/validate")
        .set_json(TokenValidationRequest {
            token: "garbage".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: TokenValidationResponse = test::read_body_json(resp).await;
    assert!(!body.valid);
    assert!(body.user_id.is_none());
}

#[actix_web::test]
async fn test_registration_rejects_short_username_and_password() {
    let app = test::init_service(create_base_app()).await;

    let resp = test::call_service(&app, register_request("ab", "sekret").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "Username below 3 characters");

    let resp = test::call_service(&app, register_request("valid", "ab").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "Password below 3 characters");
}

#[actix_web::test]
async fn test_registration_rejects_duplicate_usernames() {
    let app = test::init_service(create_base_app()).await;

    let resp = test::call_service(&app, register_request("unique", "sekret").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, register_request("unique", "sekret").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_user_listing_has_no_credential_fields() {
    let app = test::init_service(create_base_app()).await;
    test::call_service(&app, register_request("mluukkai", "salainen").to_request()).await;

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(
        !body_str.contains("password"),
        "User listing must not leak credentials: {}",
        body_str
    );

    let users: Vec<UserResponse> = serde_json::from_str(body_str).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "mluukkai");
}
