#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, create_user, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::school_class;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_json(uri: &str, payload: Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap()
    }

    /// Test Case: Protected route without an Authorization header
    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/students")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Missing or invalid token");
    }

    /// Test Case: Protected route with a token that matches no user
    #[tokio::test]
    async fn unknown_token_is_forbidden() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/vaccines")
            .header("Authorization", "Bearer not-a-real-token")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    /// Test Case: Register, then log in with the same credentials
    #[tokio::test]
    async fn register_then_login_returns_same_token() {
        let (app, _) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/register",
                json!({ "username": "nurse.joy", "password": "longenough", "roles": ["nurse"] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let registered = get_json_body(response).await;
        let token = registered["data"]["token"].as_str().unwrap().to_string();
        assert_eq!(token.len(), 64);
        assert!(registered["data"]["user"].get("passwordHash").is_none());
        assert!(registered["data"]["user"].get("token").is_none());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/login",
                json!({ "username": "nurse.joy", "password": "longenough" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["token"], token);

        let req = Request::builder()
            .method("GET")
            .uri("/api/auth/me")
            .header("Authorization", format!("Bearer {}", token))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["username"], "nurse.joy");
    }

    /// Test Case: Registering a taken username
    #[tokio::test]
    async fn duplicate_username_is_conflict() {
        let (app, app_state) = make_test_app().await;
        create_user(app_state.db(), "taken").await;

        let response = app
            .oneshot(post_json(
                "/api/auth/register",
                json!({ "username": "taken", "password": "longenough" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    /// Test Case: Wrong password
    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let (app, app_state) = make_test_app().await;
        create_user(app_state.db(), "someone").await;

        let response = app
            .oneshot(post_json(
                "/api/auth/login",
                json!({ "username": "someone", "password": "not-the-password" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Invalid credentials");
    }

    /// Test Case: Rotating a token invalidates the old one
    #[tokio::test]
    async fn rotated_token_replaces_old_one() {
        let (app, app_state) = make_test_app().await;
        let user = create_user(app_state.db(), "rotator").await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/rotate")
            .header("Authorization", bearer(&user))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        let fresh = json["data"]["token"].as_str().unwrap().to_string();
        assert_ne!(fresh, user.token);

        let stale = Request::builder()
            .method("GET")
            .uri("/api/auth/me")
            .header("Authorization", bearer(&user))
            .body(AxumBody::empty())
            .unwrap();
        assert_eq!(app.clone().oneshot(stale).await.unwrap().status(), StatusCode::FORBIDDEN);

        let current = Request::builder()
            .method("GET")
            .uri("/api/auth/me")
            .header("Authorization", format!("Bearer {}", fresh))
            .body(AxumBody::empty())
            .unwrap();
        assert_eq!(app.oneshot(current).await.unwrap().status(), StatusCode::OK);
    }

    /// Test Case: Unauthenticated write is rejected before anything is stored
    #[tokio::test]
    async fn post_without_token_creates_nothing() {
        let (app, app_state) = make_test_app().await;

        let response = app
            .oneshot(post_json("/api/classes", json!({ "name": "Grade 9", "section": "A" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let count = school_class::Entity::find().count(app_state.db()).await.unwrap();
        assert_eq!(count, 0);
    }

    /// Test Case: Username length is checked after trimming
    #[tokio::test]
    async fn padded_short_username_is_rejected() {
        let (app, _) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/register",
                json!({ "username": "  ab ", "password": "longenough" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(post_json(
                "/api/auth/register",
                json!({ "username": "  abc ", "password": "longenough" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(get_json_body(response).await["data"]["user"]["username"], "abc");
    }

    /// Test Case: Malformed or incomplete JSON body
    #[tokio::test]
    async fn malformed_body_is_bad_request_envelope() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from("{ not json"))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().starts_with("Invalid request body"));

        let response = app
            .oneshot(post_json("/api/auth/login", json!({ "username": "nobody" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["success"], false);
    }
}
