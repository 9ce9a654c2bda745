#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, create_user, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::{
        student::{self, NewStudent},
        vaccination_record,
        vaccine::{self, NewVaccine},
    };
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_record(token: &str, payload: &Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri("/api/records")
            .header("Authorization", token)
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(payload).unwrap()))
            .unwrap()
    }

    /// Test Case: Second dose of the same vaccine for the same student
    #[tokio::test]
    async fn duplicate_record_is_conflict_and_not_stored() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let nurse = create_user(db, "nurse").await;
        let student = student::Model::create(
            db,
            NewStudent {
                name: "Ada".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let vaccine = vaccine::Model::create(
            db,
            NewVaccine {
                name: "MMR".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let payload = json!({
            "studentId": student.id,
            "vaccineId": vaccine.id,
            "date": "2025-09-02",
            "batchId": "B-1"
        });

        let response = app.clone().oneshot(post_record(&bearer(&nurse), &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["administeredBy"], nurse.id);
        assert_eq!(json["data"]["student"]["name"], "Ada");
        assert_eq!(json["data"]["vaccine"]["name"], "MMR");

        let mut again = payload.clone();
        again["date"] = json!("2025-09-03");
        let response = app.oneshot(post_record(&bearer(&nurse), &again)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(get_json_body(response).await["success"], false);

        let count = vaccination_record::Entity::find().count(db).await.unwrap();
        assert_eq!(count, 1);
    }

    /// Test Case: Record for a student that does not exist
    #[tokio::test]
    async fn unknown_student_is_bad_request() {
        let (app, app_state) = make_test_app().await;
        let nurse = create_user(app_state.db(), "nurse").await;
        let vaccine = vaccine::Model::create(
            app_state.db(),
            NewVaccine {
                name: "MMR".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let payload = json!({ "studentId": "ghost", "vaccineId": vaccine.id, "date": "2025-09-02" });
        let response = app.oneshot(post_record(&bearer(&nurse), &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Test Case: Malformed date bound on the list query
    #[tokio::test]
    async fn bad_from_date_is_bad_request() {
        let (app, app_state) = make_test_app().await;
        let nurse = create_user(app_state.db(), "nurse").await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/records?fromDate=yesterday")
            .header("Authorization", bearer(&nurse))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn put_record(token: &str, payload: &Value) -> Request<AxumBody> {
        Request::builder()
            .method("PUT")
            .uri("/api/records")
            .header("Authorization", token)
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(payload).unwrap()))
            .unwrap()
    }

    /// Test Case: Edit a record as another user, then move it onto a taken pair
    #[tokio::test]
    async fn replace_keeps_administrator_and_guards_duplicates() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let nurse = create_user(db, "nurse").await;
        let editor = create_user(db, "editor").await;
        let mut students = Vec::new();
        for name in ["Ada", "Ben"] {
            students.push(
                student::Model::create(
                    db,
                    NewStudent {
                        name: name.into(),
                        ..Default::default()
                    },
                )
                .await
                .unwrap(),
            );
        }
        let vaccine = vaccine::Model::create(
            db,
            NewVaccine {
                name: "MMR".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let mut ids = Vec::new();
        for student in &students {
            let payload = json!({ "studentId": student.id, "vaccineId": vaccine.id, "date": "2025-09-02" });
            let response = app.clone().oneshot(post_record(&bearer(&nurse), &payload)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            ids.push(get_json_body(response).await["data"]["id"].as_str().unwrap().to_string());
        }

        let payload = json!({
            "id": ids[0],
            "studentId": students[0].id,
            "vaccineId": vaccine.id,
            "date": "2025-09-09",
            "notes": "Corrected date"
        });
        let response = app.clone().oneshot(put_record(&bearer(&editor), &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["date"], "2025-09-09");
        assert_eq!(json["data"]["administeredBy"], nurse.id);

        let payload = json!({
            "id": ids[1],
            "studentId": students[0].id,
            "vaccineId": vaccine.id,
            "date": "2025-09-10"
        });
        let response = app.clone().oneshot(put_record(&bearer(&editor), &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let payload = json!({
            "id": "missing",
            "studentId": students[1].id,
            "vaccineId": vaccine.id,
            "date": "2025-09-10"
        });
        let response = app.oneshot(put_record(&bearer(&editor), &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Administering user that does not exist
    #[tokio::test]
    async fn unknown_administrator_is_bad_request() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let nurse = create_user(db, "nurse").await;
        let student = student::Model::create(
            db,
            NewStudent {
                name: "Ada".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let vaccine = vaccine::Model::create(
            db,
            NewVaccine {
                name: "MMR".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let payload = json!({
            "studentId": student.id,
            "vaccineId": vaccine.id,
            "date": "2025-09-02",
            "administeredBy": "no-such-user"
        });
        let response = app.oneshot(post_record(&bearer(&nurse), &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_json_body(response).await["message"],
            "User 'no-such-user' does not exist"
        );
        assert_eq!(vaccination_record::Entity::find().count(db).await.unwrap(), 0);
    }
}
