use axum::Router;
use registry::AppRegistry;

pub mod booking;
pub mod contact;
pub mod health;
pub mod pms;
pub mod room;

pub fn routes() -> Router<AppRegistry> {
    let api_routers = Router::new()
        .merge(room::build_room_routers())
        .merge(booking::build_booking_routers())
        .merge(contact::build_contact_routers())
        .merge(pms::build_pms_routers());

    Router::new()
        .merge(health::build_health_check_routers())
        .nest("/api", api_routers)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use registry::AppRegistry;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        super::routes().with_state(AppRegistry::in_memory())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn booking_payload(room_id: i64) -> Value {
        json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane.doe@example.com",
            "phone": "555-0100",
            "roomId": room_id,
            "checkIn": "2024-01-01",
            "checkOut": "2024-01-04",
            "guests": 2,
            "specialRequests": null,
            "totalAmount": "548.55"
        })
    }

    #[tokio::test]
    async fn health_endpoint_reports_healthy() {
        let res = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"healthy");
    }

    #[tokio::test]
    async fn room_list_serves_the_seeded_catalog() {
        let res = app().oneshot(get("/api/rooms")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let rooms = body_json(res).await;
        let rooms = rooms.as_array().unwrap();
        assert_eq!(rooms.len(), 6);
        assert_eq!(rooms[0]["id"], 1);
        assert_eq!(rooms[0]["name"], "Standard King Room");
        assert_eq!(rooms[0]["type"], "standard");
        assert_eq!(rooms[0]["price"], "159");
        assert_eq!(rooms[0]["maxOccupancy"], 2);
        assert_eq!(rooms[0]["available"], true);
    }

    #[tokio::test]
    async fn rooms_by_type_is_case_sensitive() {
        let app = app();

        let res = app.clone().oneshot(get("/api/rooms/type/suite")).await.unwrap();
        let suites = body_json(res).await;
        assert_eq!(suites.as_array().unwrap().len(), 2);

        let res = app.oneshot(get("/api/rooms/type/Suite")).await.unwrap();
        let none = body_json(res).await;
        assert!(none.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn room_detail_and_bad_ids() {
        let app = app();

        let res = app.clone().oneshot(get("/api/rooms/3")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["name"], "Executive Suite");

        let res = app.clone().oneshot(get("/api/rooms/99")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        // A non-numeric id acts like an absent one.
        let res = app.oneshot(get("/api/rooms/penthouse")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(res).await["message"], "Room not found");
    }

    #[tokio::test]
    async fn quote_derives_the_stay_price() {
        let res = app()
            .oneshot(get(
                "/api/rooms/1/quote?checkIn=2024-01-01&checkOut=2024-01-04",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let quote = body_json(res).await;
        assert_eq!(quote["nights"], 3);
        assert_eq!(quote["subtotal"], 477.0);
        assert_eq!(quote["taxes"], 71.55);
        assert_eq!(quote["total"], 548.55);
    }

    #[tokio::test]
    async fn quote_refuses_a_non_positive_range() {
        let app = app();

        let res = app
            .clone()
            .oneshot(get(
                "/api/rooms/1/quote?checkIn=2024-01-04&checkOut=2024-01-01",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = app
            .oneshot(get(
                "/api/rooms/1/quote?checkIn=2024-01-04&checkOut=2024-01-04",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn booking_against_a_missing_room_writes_nothing() {
        let app = app();

        let res = app
            .clone()
            .oneshot(json_request("POST", "/api/bookings", booking_payload(999)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(res).await["message"], "Room not found");

        let res = app.oneshot(get("/api/bookings")).await.unwrap();
        assert!(body_json(res).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn booking_creation_persists_with_defaults() {
        let app = app();

        let res = app
            .clone()
            .oneshot(json_request("POST", "/api/bookings", booking_payload(1)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let booking = body_json(res).await;
        assert_eq!(booking["id"], 1);
        assert_eq!(booking["roomId"], 1);
        assert_eq!(booking["status"], "confirmed");
        assert_eq!(booking["specialRequests"], Value::Null);
        assert!(booking["createdAt"].is_string());

        let res = app.oneshot(get("/api/bookings")).await.unwrap();
        let bookings = body_json(res).await;
        assert_eq!(bookings.as_array().unwrap().len(), 1);
        assert_eq!(bookings[0]["totalAmount"], "548.55");
    }

    #[tokio::test]
    async fn booking_shape_errors_name_the_offending_field() {
        let mut payload = booking_payload(1);
        payload.as_object_mut().unwrap().remove("firstName");

        let res = app()
            .oneshot(json_request("POST", "/api/bookings", payload))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let message = body_json(res).await["message"].as_str().unwrap().to_string();
        assert!(message.contains("firstName"), "got: {message}");
    }

    #[tokio::test]
    async fn booking_rejects_a_malformed_total_amount() {
        let mut payload = booking_payload(1);
        payload["totalAmount"] = json!("-10");

        let res = app()
            .oneshot(json_request("POST", "/api/bookings", payload))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn status_update_paths() {
        let app = app();
        let res = app
            .clone()
            .oneshot(json_request("POST", "/api/bookings", booking_payload(2)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        // Missing status value is a 400.
        let res = app
            .clone()
            .oneshot(json_request("PATCH", "/api/bookings/1/status", json!({})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["message"], "Status is required");

        // Unknown booking id is a 404 and mutates nothing.
        let res = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                "/api/bookings/42/status",
                json!({"status": "cancelled"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = app.clone().oneshot(get("/api/bookings")).await.unwrap();
        assert_eq!(body_json(res).await[0]["status"], "confirmed");

        // Any non-empty status value is accepted.
        let res = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                "/api/bookings/1/status",
                json!({"status": "no-show"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["status"], "no-show");
    }

    #[tokio::test]
    async fn contact_submission_round_trips() {
        let app = app();

        let res = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/contacts",
                json!({
                    "firstName": "John",
                    "lastName": "Smith",
                    "email": "john.smith@example.com",
                    "subject": "Parking",
                    "message": "Is valet parking available?"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let contact = body_json(res).await;
        assert_eq!(contact["id"], 1);
        assert_eq!(contact["phone"], Value::Null);

        let res = app.oneshot(get("/api/contacts")).await.unwrap();
        assert_eq!(body_json(res).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn contact_requires_its_fields() {
        let res = app()
            .oneshot(json_request(
                "POST",
                "/api/contacts",
                json!({
                    "firstName": "John",
                    "lastName": "Smith",
                    "email": "john.smith@example.com",
                    "subject": "Parking"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn pms_status_aggregates_counts() {
        let app = app();

        let res = app.clone().oneshot(get("/api/pms/status")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let status = body_json(res).await;
        assert_eq!(status["status"], "connected");
        assert_eq!(status["availableRooms"], 6);
        assert_eq!(status["totalBookings"], 0);
        assert!(status["lastSync"].is_string());

        app.clone()
            .oneshot(json_request("POST", "/api/bookings", booking_payload(1)))
            .await
            .unwrap();

        let res = app.oneshot(get("/api/pms/status")).await.unwrap();
        assert_eq!(body_json(res).await["totalBookings"], 1);
    }
}
