//! Integration tests for the scan endpoint and its reporting views.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires PostgreSQL (config/test.toml)"]
async fn test_entry_then_exit_round() {
    let app = helpers::TestApp::new().await;
    let campus = app.create_campus("Beirut", "BEI").await;
    app.create_spot(campus, "BEI-001", false).await;
    app.create_spot(campus, "BEI-002", true).await;
    app.create_user("Rima Haddad", "r.haddad@liu.edu.lb", "instructor", Some(campus))
        .await;

    let entry = app
        .scan(&format!("CAMPUS:{campus}"), "r.haddad@liu.edu.lb")
        .await;
    assert_eq!(entry.status, StatusCode::OK);
    assert_eq!(entry.body["status"], "success");
    assert_eq!(entry.body["type"], "ENTRY");
    assert_eq!(entry.body["spot_number"], "BEI-001");
    assert!(entry.body["entry_time"].is_string());

    let exit = app
        .scan(&format!("CAMPUS:{campus}"), "r.haddad@liu.edu.lb")
        .await;
    assert_eq!(exit.status, StatusCode::OK);
    assert_eq!(exit.body["type"], "EXIT");
    assert_eq!(exit.body["spot_number"], "BEI-001");
    assert!(exit.body["duration"].is_string());
}

#[tokio::test]
#[ignore = "requires PostgreSQL (config/test.toml)"]
async fn test_short_code_prefix_resolution() {
    let app = helpers::TestApp::new().await;
    let campus = app.create_campus("Beirut", "BEI").await;
    app.create_spot(campus, "BEI-001", false).await;
    app.create_user("Omar Fares", "o.fares@liu.edu.lb", "staff", Some(campus))
        .await;

    let entry = app.scan("BEI-WALL-04", "o.fares@liu.edu.lb").await;
    assert_eq!(entry.status, StatusCode::OK);
    assert_eq!(entry.body["type"], "ENTRY");
}

#[tokio::test]
#[ignore = "requires PostgreSQL (config/test.toml)"]
async fn test_denials_are_http_200() {
    let app = helpers::TestApp::new().await;
    let campus = app.create_campus("Beirut", "BEI").await;
    app.create_user("Rima Haddad", "r.haddad@liu.edu.lb", "instructor", Some(campus))
        .await;

    let invalid = app.scan("ZZZ-NOWHERE", "r.haddad@liu.edu.lb").await;
    assert_eq!(invalid.status, StatusCode::OK);
    assert_eq!(invalid.body["status"], "error");
    assert_eq!(invalid.body["type"], "DENIED");
    assert_eq!(invalid.body["message"], "invalid code");

    let unknown = app
        .scan(&format!("CAMPUS:{campus}"), "nobody@liu.edu.lb")
        .await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(unknown.body["message"], "user not found/not authorized");

    // No spots seeded, so a valid user is denied for capacity.
    let full = app
        .scan(&format!("CAMPUS:{campus}"), "r.haddad@liu.edu.lb")
        .await;
    assert_eq!(full.body["message"], "no available spots");
}

#[tokio::test]
#[ignore = "requires PostgreSQL (config/test.toml)"]
async fn test_cross_campus_entry_is_restricted() {
    let app = helpers::TestApp::new().await;
    let beirut = app.create_campus("Beirut", "BEI").await;
    let tripoli = app.create_campus("Tripoli", "TRP").await;
    app.create_spot(beirut, "BEI-001", false).await;
    app.create_user("Nour Saab", "n.saab@liu.edu.lb", "staff", Some(tripoli))
        .await;

    let denied = app
        .scan(&format!("CAMPUS:{beirut}"), "n.saab@liu.edu.lb")
        .await;
    assert_eq!(denied.body["type"], "DENIED");
    assert_eq!(denied.body["message"], "campus restricted");
}

#[tokio::test]
#[ignore = "requires PostgreSQL (config/test.toml)"]
async fn test_malformed_body_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/scan",
            Some(serde_json::json!({
                "scanned_code": "",
                "user_email": "not-an-email",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires PostgreSQL (config/test.toml)"]
async fn test_open_sessions_listing() {
    let app = helpers::TestApp::new().await;
    let campus = app.create_campus("Beirut", "BEI").await;
    app.create_spot(campus, "BEI-001", false).await;
    app.create_spot(campus, "BEI-002", false).await;
    app.create_user("Rima Haddad", "r.haddad@liu.edu.lb", "instructor", Some(campus))
        .await;
    app.create_user("Omar Fares", "o.fares@liu.edu.lb", "staff", Some(campus))
        .await;

    app.scan(&format!("CAMPUS:{campus}"), "r.haddad@liu.edu.lb")
        .await;
    app.scan(&format!("CAMPUS:{campus}"), "o.fares@liu.edu.lb")
        .await;

    let listing = app.request("GET", "/api/sessions/open", None).await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.body["data"]["total_items"], 2);
    assert_eq!(listing.body["data"]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (config/test.toml)"]
async fn test_campus_availability_counts() {
    let app = helpers::TestApp::new().await;
    let campus = app.create_campus("Beirut", "BEI").await;
    app.create_spot(campus, "BEI-001", false).await;
    app.create_spot(campus, "BEI-002", false).await;
    app.create_spot(campus, "BEI-003", true).await;
    app.create_user("Rima Haddad", "r.haddad@liu.edu.lb", "instructor", Some(campus))
        .await;

    app.scan(&format!("CAMPUS:{campus}"), "r.haddad@liu.edu.lb")
        .await;

    let availability = app
        .request("GET", &format!("/api/campuses/{campus}/availability"), None)
        .await;
    assert_eq!(availability.status, StatusCode::OK);
    assert_eq!(availability.body["data"]["total"], 2);
    assert_eq!(availability.body["data"]["free"], 1);
    assert_eq!(availability.body["data"]["occupied"], 1);

    let missing = app
        .request("GET", "/api/campuses/9999/availability", None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (config/test.toml)"]
async fn test_health_endpoints() {
    let app = helpers::TestApp::new().await;

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["data"]["status"], "ok");

    let detailed = app.request("GET", "/api/health/detailed", None).await;
    assert_eq!(detailed.status, StatusCode::OK);
    assert_eq!(detailed.body["data"]["database"], "connected");
}
