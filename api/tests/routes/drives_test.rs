#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, create_user, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use chrono::{Duration, Utc};
    use db::models::{
        school_class,
        student::{self, NewStudent},
        user, vaccination_drive,
        vaccination_record::{self, NewRecord},
        vaccine::{self, NewVaccine},
    };
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::json;
    use tower::ServiceExt;

    struct TestData {
        nurse: user::Model,
        class_id: String,
        vaccine: vaccine::Model,
        students: Vec<student::Model>,
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let nurse = create_user(db, "nurse").await;
        let class = school_class::Model::create(db, "Grade 1", None).await.unwrap();
        let vaccine = vaccine::Model::create(
            db,
            NewVaccine {
                name: "MMR".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let mut students = Vec::new();
        for name in ["Ada", "Ben"] {
            students.push(
                student::Model::create(
                    db,
                    NewStudent {
                        name: name.into(),
                        class_id: Some(class.id.clone()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap(),
            );
        }

        TestData {
            nurse,
            class_id: class.id,
            vaccine,
            students,
        }
    }

    /// Test Case: Two target students, one vaccine, one dose given
    #[tokio::test]
    async fn drive_detail_reports_half_coverage() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let start = (Utc::now() - Duration::days(1)).to_rfc3339();
        let end = (Utc::now() + Duration::days(1)).to_rfc3339();
        let payload = json!({
            "name": "Autumn MMR",
            "startDate": start,
            "endDate": end,
            "targetClasses": [data.class_id],
            "vaccineIds": [data.vaccine.id],
            "status": "planned"
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/drives")
            .header("Authorization", bearer(&data.nurse))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = get_json_body(response).await;
        let drive_id = created["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(created["data"]["createdBy"], data.nurse.id);
        assert_eq!(created["data"]["computedStatus"], "ongoing");
        assert_eq!(created["data"]["status"], "planned");

        vaccination_record::Model::create(
            app_state.db(),
            NewRecord {
                student_id: data.students[0].id.clone(),
                date: Utc::now().date_naive(),
                drive_id: Some(drive_id.clone()),
                vaccine_id: data.vaccine.id.clone(),
                administered_by: Some(data.nurse.id.clone()),
                batch_id: None,
                notes: None,
            },
        )
        .await
        .unwrap();

        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/drives/{}", drive_id))
            .header("Authorization", bearer(&data.nurse))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let drive = &json["data"];
        assert_eq!(drive["registeredStudents"], 2);
        assert_eq!(drive["vaccinatedStudents"], 1);
        assert_eq!(drive["expectedTotalDoses"], 2);
        assert_eq!(drive["totalVaccinationRecords"], 1);
        assert_eq!(drive["percentVaccinated"], 50.0);
        assert_eq!(drive["vaccines"][0]["name"], "MMR");
    }

    /// Test Case: Status filter uses the dates, and rejects unknown values
    #[tokio::test]
    async fn list_filters_by_computed_status() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        for (name, start, end) in [
            ("past", Utc::now() - Duration::days(10), Utc::now() - Duration::days(5)),
            ("future", Utc::now() + Duration::days(5), Utc::now() + Duration::days(10)),
        ] {
            let payload = json!({
                "name": name,
                "startDate": start.to_rfc3339(),
                "endDate": end.to_rfc3339(),
                // The stored label never drives filtering.
                "status": "ongoing"
            });
            let req = Request::builder()
                .method("POST")
                .uri("/api/drives")
                .header("Authorization", bearer(&data.nurse))
                .header(CONTENT_TYPE, "application/json")
                .body(AxumBody::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap();
            assert_eq!(app.clone().oneshot(req).await.unwrap().status(), StatusCode::CREATED);
        }

        let req = Request::builder()
            .method("GET")
            .uri("/api/drives?status=upcoming")
            .header("Authorization", bearer(&data.nurse))
            .body(AxumBody::empty())
            .unwrap();
        let json = get_json_body(app.clone().oneshot(req).await.unwrap()).await;
        let drives = json["data"].as_array().unwrap();
        assert_eq!(drives.len(), 1);
        assert_eq!(drives[0]["name"], "future");

        let req = Request::builder()
            .method("GET")
            .uri("/api/drives?status=ongoing")
            .header("Authorization", bearer(&data.nurse))
            .body(AxumBody::empty())
            .unwrap();
        let json = get_json_body(app.clone().oneshot(req).await.unwrap()).await;
        assert!(json["data"].as_array().unwrap().is_empty());

        let req = Request::builder()
            .method("GET")
            .uri("/api/drives?status=paused")
            .header("Authorization", bearer(&data.nurse))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Test Case: A deleted vaccine silently drops out of the drive's vaccine list
    #[tokio::test]
    async fn deleted_vaccine_is_dropped_from_drive() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let extra = vaccine::Model::create(
            app_state.db(),
            NewVaccine {
                name: "Polio".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let payload = json!({
            "name": "Combined",
            "startDate": "2030-01-01",
            "endDate": "2030-01-02",
            "vaccineIds": [data.vaccine.id, extra.id]
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/drives")
            .header("Authorization", bearer(&data.nurse))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();
        let created = get_json_body(app.clone().oneshot(req).await.unwrap()).await;
        let drive_id = created["data"]["id"].as_str().unwrap().to_string();

        vaccine::Model::delete(app_state.db(), &extra.id).await.unwrap();

        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/drives/{}", drive_id))
            .header("Authorization", bearer(&data.nurse))
            .body(AxumBody::empty())
            .unwrap();
        let json = get_json_body(app.oneshot(req).await.unwrap()).await;
        let vaccines = json["data"]["vaccines"].as_array().unwrap();
        assert_eq!(vaccines.len(), 1);
        assert_eq!(vaccines[0]["id"], data.vaccine.id);
        assert_eq!(json["data"]["vaccineIds"].as_array().unwrap().len(), 2);
    }

    /// Test Case: Another user edits a drive without naming a creator
    #[tokio::test]
    async fn replace_by_other_user_keeps_creator() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let editor = create_user(app_state.db(), "editor").await;

        let payload = json!({
            "name": "Spring Polio",
            "startDate": "2030-03-01",
            "endDate": "2030-03-05",
            "targetClasses": [data.class_id],
            "vaccineIds": [data.vaccine.id]
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/drives")
            .header("Authorization", bearer(&data.nurse))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();
        let created = get_json_body(app.clone().oneshot(req).await.unwrap()).await;
        let drive_id = created["data"]["id"].as_str().unwrap().to_string();

        let payload = json!({
            "id": drive_id,
            "name": "Spring Polio (moved)",
            "startDate": "2030-04-01",
            "endDate": "2030-04-05",
            "vaccineIds": [data.vaccine.id]
        });
        let req = Request::builder()
            .method("PUT")
            .uri("/api/drives")
            .header("Authorization", bearer(&editor))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["name"], "Spring Polio (moved)");
        assert_eq!(json["data"]["createdBy"], data.nurse.id);
        assert!(json["data"]["targetClasses"].as_array().unwrap().is_empty());

        let stored = vaccination_drive::Model::find_by_id(app_state.db(), &drive_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.created_by, Some(data.nurse.id.clone()));

        let mut missing = payload.clone();
        missing["id"] = json!("missing");
        let req = Request::builder()
            .method("PUT")
            .uri("/api/drives")
            .header("Authorization", bearer(&editor))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(&missing).unwrap()))
            .unwrap();
        assert_eq!(app.oneshot(req).await.unwrap().status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Creator id that names no user
    #[tokio::test]
    async fn unknown_creator_is_bad_request() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let payload = json!({
            "name": "Ghost drive",
            "createdBy": "no-such-user",
            "startDate": "2030-01-01",
            "endDate": "2030-01-02"
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/drives")
            .header("Authorization", bearer(&data.nurse))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_json_body(response).await["message"],
            "User 'no-such-user' does not exist"
        );

        let count = vaccination_drive::Entity::find().count(app_state.db()).await.unwrap();
        assert_eq!(count, 0);
    }
}
