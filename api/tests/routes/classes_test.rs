#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, create_user, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::student::{self, NewStudent};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn send_json(method: &str, uri: &str, token: &str, payload: &Value) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", token)
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(payload).unwrap()))
            .unwrap()
    }

    fn without_body(method: &str, uri: &str, token: &str) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", token)
            .body(AxumBody::empty())
            .unwrap()
    }

    /// Test Case: Create, filter, replace, and delete a class
    #[tokio::test]
    async fn class_crud_round() {
        let (app, app_state) = make_test_app().await;
        let token = bearer(&create_user(app_state.db(), "nurse").await);

        let mut ids = Vec::new();
        for (name, section) in [("Grade 5", "A"), ("Grade 5", "B"), ("Grade 6", "A")] {
            let response = app
                .clone()
                .oneshot(send_json(
                    "POST",
                    "/api/classes",
                    &token,
                    &json!({ "name": name, "section": section }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            ids.push(get_json_body(response).await["data"]["id"].as_str().unwrap().to_string());
        }

        let json = get_json_body(
            app.clone()
                .oneshot(without_body("GET", "/api/classes?name=grade%205", &token))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);

        let json = get_json_body(
            app.clone()
                .oneshot(without_body("GET", "/api/classes?name=Grade%205&section=B", &token))
                .await
                .unwrap(),
        )
        .await;
        let classes = json["data"].as_array().unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0]["id"], ids[1]);

        let response = app
            .clone()
            .oneshot(send_json(
                "PUT",
                "/api/classes",
                &token,
                &json!({ "id": ids[2], "name": "Grade 7", "section": "C" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["name"], "Grade 7");
        assert_eq!(json["data"]["section"], "C");

        let response = app
            .clone()
            .oneshot(without_body("DELETE", &format!("/api/classes/{}", ids[0]), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(without_body("GET", &format!("/api/classes/{}", ids[0]), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Missing classes answer 404, empty names answer 400
    #[tokio::test]
    async fn missing_class_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let token = bearer(&create_user(app_state.db(), "nurse").await);

        let response = app
            .clone()
            .oneshot(without_body("GET", "/api/classes/missing", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Class not found");

        let response = app
            .clone()
            .oneshot(send_json(
                "PUT",
                "/api/classes",
                &token,
                &json!({ "id": "missing", "name": "Grade 1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(without_body("DELETE", "/api/classes/missing", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(send_json("POST", "/api/classes", &token, &json!({ "name": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Test Case: Deleting a class leaves its students unassigned
    #[tokio::test]
    async fn deleting_class_unassigns_students() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let token = bearer(&create_user(db, "nurse").await);

        let response = app
            .clone()
            .oneshot(send_json("POST", "/api/classes", &token, &json!({ "name": "Grade 2" })))
            .await
            .unwrap();
        let class_id = get_json_body(response).await["data"]["id"].as_str().unwrap().to_string();

        let pupil = student::Model::create(
            db,
            NewStudent {
                name: "Ada".into(),
                class_id: Some(class_id.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let response = app
            .oneshot(without_body("DELETE", &format!("/api/classes/{}", class_id), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let reloaded = student::Model::find_by_id(db, &pupil.id).await.unwrap().unwrap();
        assert_eq!(reloaded.class_id, None);
    }
}
