#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, create_user, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::json;
    use tower::ServiceExt;

    /// Test Case: Create a vaccine, append a batch, and read it back filtered by batch id
    #[tokio::test]
    async fn batches_are_appended_in_order() {
        let (app, app_state) = make_test_app().await;
        let user = create_user(app_state.db(), "stock.keeper").await;

        let payload = json!({
            "name": "MMR",
            "manufacturer": "Acme Bio",
            "vaccineType": "live attenuated",
            "dosesPerVial": 10,
            "batches": [{ "batchId": "B-1", "expiryDate": "2026-06-01" }]
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/vaccines")
            .header("Authorization", bearer(&user))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = get_json_body(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let batch = json!({ "batchId": "B-2", "receivedDate": "2025-10-01" });
        let req = Request::builder()
            .method("POST")
            .uri(format!("/api/vaccines/{}/batches", id))
            .header("Authorization", bearer(&user))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(&batch).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["batches"][0]["batchId"], "B-1");
        assert_eq!(json["data"]["batches"][1]["batchId"], "B-2");

        let req = Request::builder()
            .method("GET")
            .uri("/api/vaccines?batchId=B-2&manufacturer=acme")
            .header("Authorization", bearer(&user))
            .body(AxumBody::empty())
            .unwrap();
        let json = get_json_body(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["id"], id);
    }

    /// Test Case: Appending a batch to a missing vaccine
    #[tokio::test]
    async fn batch_for_unknown_vaccine_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let user = create_user(app_state.db(), "stock.keeper").await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/vaccines/missing/batches")
            .header("Authorization", bearer(&user))
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(r#"{"batchId":"B-9"}"#))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["message"], "Vaccine not found");
    }
}
