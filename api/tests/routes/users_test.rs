#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, create_user, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::user;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn send_json(method: &str, uri: &str, caller: &user::Model, payload: &Value) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", bearer(caller))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(payload).unwrap()))
            .unwrap()
    }

    fn get(uri: &str, caller: &user::Model) -> Request<AxumBody> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .header("Authorization", bearer(caller))
            .body(AxumBody::empty())
            .unwrap()
    }

    /// Test Case: Filter by role and by partial username
    #[tokio::test]
    async fn list_filters_by_role_and_username() {
        let (app, app_state) = make_test_app().await;
        let admin = create_user(app_state.db(), "admin").await;

        let payload = json!({
            "username": "Head.Nurse",
            "password": "longenough",
            "contact": "555-0199",
            "roles": ["nurse", "coordinator"]
        });
        let response = app
            .clone()
            .oneshot(send_json("POST", "/api/users", &admin, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = get_json_body(response).await;
        assert!(created["data"].get("token").is_none());
        assert!(created["data"].get("passwordHash").is_none());

        let json = get_json_body(
            app.clone()
                .oneshot(get("/api/users?role=coordinator", &admin))
                .await
                .unwrap(),
        )
        .await;
        let users = json["data"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["username"], "Head.Nurse");

        let json = get_json_body(
            app.clone()
                .oneshot(get("/api/users?username=head", &admin))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);

        // `admin` was created with the nurse role only.
        let json = get_json_body(app.oneshot(get("/api/users?role=nurse", &admin)).await.unwrap()).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    /// Test Case: Renaming onto a taken username, and replacing a missing user
    #[tokio::test]
    async fn rename_onto_taken_username_is_conflict() {
        let (app, app_state) = make_test_app().await;
        let admin = create_user(app_state.db(), "admin").await;
        let other = create_user(app_state.db(), "other").await;

        let payload = json!({ "id": other.id, "username": "admin", "roles": [] });
        let response = app
            .clone()
            .oneshot(send_json("PUT", "/api/users", &admin, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let payload = json!({ "id": other.id, "username": "renamed", "contact": "555-0000" });
        let response = app
            .clone()
            .oneshot(send_json("PUT", "/api/users", &admin, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["username"], "renamed");
        assert_eq!(json["data"]["contact"], "555-0000");

        // The password was left out, so the old one still works.
        let reloaded = user::Model::find_by_id(app_state.db(), &other.id).await.unwrap().unwrap();
        assert!(reloaded.verify_password("password123"));

        let payload = json!({ "id": "missing", "username": "ghost" });
        let response = app
            .oneshot(send_json("PUT", "/api/users", &admin, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Delete a user, then fetch and delete again
    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let admin = create_user(app_state.db(), "admin").await;
        let other = create_user(app_state.db(), "other").await;

        let response = app
            .clone()
            .oneshot(get(&format!("/api/users/{}", other.id), &admin))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["data"]["username"], "other");

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/api/users/{}", other.id))
            .header("Authorization", bearer(&admin))
            .body(AxumBody::empty())
            .unwrap();
        assert_eq!(app.clone().oneshot(req).await.unwrap().status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get(&format!("/api/users/{}", other.id), &admin))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/api/users/{}", other.id))
            .header("Authorization", bearer(&admin))
            .body(AxumBody::empty())
            .unwrap();
        assert_eq!(app.oneshot(req).await.unwrap().status(), StatusCode::NOT_FOUND);
    }
}
