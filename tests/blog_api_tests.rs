use actix_web::{http::StatusCode, test};
use bloglist_api::{
    Blog, BlogStore, LoginRequest, LoginResponse, NewBlogRequest, NewUserRequest, UserStore,
    create_app_with_state, create_base_app,
};

fn seeded_store() -> BlogStore {
    let store = BlogStore::new();
    let fixtures = [
        ("React patterns", "Michael Chan", "https://reactpatterns.com/", 7),
        (
            "Go To Statement Considered Harmful",
            "Edsger W. Dijkstra",
            "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
            5,
        ),
        (
            "Canonical string reduction",
            "Edsger W. Dijkstra",
            "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html",
            12,
        ),
        (
            "First class tests",
            "Robert C. Martin",
            "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll",
            10,
        ),
        (
            "TDD harms architecture",
            "Robert C. Martin",
            "http://blog.cleancoder.com/uncle-bob/2017/03/03/TDD-Harms-Architecture.html",
            0,
        ),
        (
            "Type wars",
            "Robert C. Martin",
            "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
            2,
        ),
    ];

    for (title, author, url, likes) in fixtures {
        store.create(
            NewBlogRequest {
                title: title.to_string(),
                author: author.to_string(),
                url: url.to_string(),
                likes,
            },
            None,
        );
    }

    store
}

/// Integration test for blog listing
///
/// Mirrors the behavior a fresh deployment must have: the endpoint
/// returns JSON and exactly the records that were stored, in insertion
/// order.
#[actix_web::test]
async fn test_get_blogs_returns_seeded_records_as_json() {
    let app = test::init_service(create_app_with_state(seeded_store(), UserStore::new())).await;

    let req = test::TestRequest::get().uri("/api/blogs").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(
        content_type.contains("application/json"),
        "Expected JSON content type, got: {}",
        content_type
    );

    let blogs: Vec<Blog> = test::read_body_json(resp).await;
    assert_eq!(blogs.len(), 6, "Expected all six seeded blog posts");
    assert_eq!(blogs[0].title, "React patterns", "Insertion order should be preserved");
}

#[actix_web::test]
async fn test_create_blog_without_token_is_unauthorized() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .set_json(&NewBlogRequest {
            title: "Unauthorized post".to_string(),
            author: "Nobody".to_string(),
            url: "http://example.com".to_string(),
            likes: 0,
        })
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_create_blog_with_token_stores_the_post() {
    let app = test::init_service(create_base_app()).await;

    // Register a user and log in to obtain a bearer token.
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&NewUserRequest {
            username: "root".to_string(),
            name: "Superuser".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(&LoginRequest {
            username: "root".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let login: LoginResponse = test::read_body_json(resp).await;
    let token = login.token.expect("Login should return a token");

    // Create a post with the token.
    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(&NewBlogRequest {
            title: "Async Rust in practice".to_string(),
            author: "Superuser".to_string(),
            url: "http://example.com/async".to_string(),
            likes: 3,
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Blog = test::read_body_json(resp).await;
    assert_eq!(created.title, "Async Rust in practice");
    assert!(created.user_id.is_some(), "Created post should carry its owner");

    // The post shows up in the listing.
    let req = test::TestRequest::get().uri("/api/blogs").to_request();
    let blogs: Vec<Blog> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0].id, created.id);
}

#[actix_web::test]
async fn test_create_blog_defaults_likes_to_zero() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&NewUserRequest {
            username: "writer".to_string(),
            name: "Writer".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(&LoginRequest {
            username: "writer".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    let login: LoginResponse = test::read_body_json(test::call_service(&app, req).await).await;
    let token = login.token.unwrap();

    // No likes field in the payload at all.
    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(&serde_json::json!({
            "title": "Likes left out",
            "author": "Writer",
            "url": "http://example.com/likes"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Blog = test::read_body_json(resp).await;
    assert_eq!(created.likes, 0, "Missing likes should default to zero");
}

#[actix_web::test]
async fn test_create_blog_with_empty_title_is_rejected() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&NewUserRequest {
            username: "writer".to_string(),
            name: "Writer".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(&LoginRequest {
            username: "writer".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    let login: LoginResponse = test::read_body_json(test::call_service(&app, req).await).await;
    let token = login.token.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(&NewBlogRequest {
            title: "   ".to_string(),
            author: "Writer".to_string(),
            url: "http://example.com".to_string(),
            likes: 0,
        })
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_blog_replaces_the_like_count() {
    let store = seeded_store();
    let target = store.list()[0].clone();
    let app = test::init_service(create_app_with_state(store, UserStore::new())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/blogs/{}", target.id))
        .set_json(&serde_json::json!({ "likes": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Blog = test::read_body_json(resp).await;
    assert_eq!(updated.likes, 42);
    assert_eq!(updated.id, target.id);
}

#[actix_web::test]
async fn test_update_unknown_blog_is_not_found() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/blogs/no-such-id")
        .set_json(&serde_json::json!({ "likes": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_blog_by_owner_removes_the_post() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&NewUserRequest {
            username: "owner".to_string(),
            name: "Owner".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(&LoginRequest {
            username: "owner".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    let login: LoginResponse = test::read_body_json(test::call_service(&app, req).await).await;
    let token = login.token.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(&NewBlogRequest {
            title: "Short-lived".to_string(),
            author: "Owner".to_string(),
            url: "http://example.com".to_string(),
            likes: 0,
        })
        .to_request();
    let created: Blog = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/blogs/{}", created.id))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/api/blogs").to_request();
    let blogs: Vec<Blog> = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(blogs.is_empty(), "Deleted post should be gone from the listing");
}

#[actix_web::test]
async fn test_delete_blog_by_another_user_is_forbidden() {
    let app = test::init_service(create_base_app()).await;

    // First user creates a post.
    for (username, name) in [("owner", "Owner"), ("intruder", "Intruder")] {
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(&NewUserRequest {
                username: username.to_string(),
                name: name.to_string(),
                password: "sekret".to_string(),
            })
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(&LoginRequest {
            username: "owner".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    let login: LoginResponse = test::read_body_json(test::call_service(&app, req).await).await;
    let owner_token = login.token.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("Authorization", format!("Bearer {owner_token}")))
        .set_json(&NewBlogRequest {
            title: "Keep out".to_string(),
            author: "Owner".to_string(),
            url: "http://example.com".to_string(),
            likes: 0,
        })
        .to_request();
    let created: Blog = test::read_body_json(test::call_service(&app, req).await).await;

    // Second user tries to delete it.
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(&LoginRequest {
            username: "intruder".to_string(),
            password: "sekret".to_string(),
        })
        .to_request();
    let login: LoginResponse = test::read_body_json(test::call_service(&app, req).await).await;
    let intruder_token = login.token.unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/blogs/{}", created.id))
        .insert_header(("Authorization", format!("Bearer {intruder_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // The post is still there.
    let req = test::TestRequest::get().uri("/api/blogs").to_request();
    let blogs: Vec<Blog> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(blogs.len(), 1);
}

#[actix_web::test]
async fn test_delete_blog_without_token_is_unauthorized() {
    let store = seeded_store();
    let target = store.list()[0].clone();
    let app = test::init_service(create_app_with_state(store, UserStore::new())).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/blogs/{}", target.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
