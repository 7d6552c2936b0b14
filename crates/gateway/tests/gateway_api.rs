//! Gateway integration tests against an in-process stub API.
//!
//! Each test spins up a small axum router on an ephemeral port and points
//! a real [`Gateway`] at it, so the full reqwest path (bearer header,
//! multipart encoding, envelope normalization) is exercised.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use qabul_core::models::{
    Attachment, CreateCourse, CreateDegree, CreateRegistrationCard, CreateStudent, GeneralDegree,
    Qualification,
};
use qabul_gateway::messages::MSG_LOGIN_FIRST;
use qabul_gateway::{Gateway, GatewayConfig, Session};
use serde_json::json;

/// Shared observer for stub handlers.
#[derive(Default)]
struct StubState {
    hits: AtomicUsize,
    last_auth: Mutex<Option<String>>,
    last_body: Mutex<Option<serde_json::Value>>,
    multipart_parts: Mutex<Vec<String>>,
}

type Shared = Arc<StubState>;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{addr}")
}

fn gateway(base_url: &str, token: Option<&str>) -> Gateway {
    let session = match token {
        Some(token) => Arc::new(Session::with_token(token)),
        None => Arc::new(Session::new()),
    };
    Gateway::new(GatewayConfig::new(base_url), session)
}

async fn university_names(State(state): State<Shared>, headers: HeaderMap) -> Json<serde_json::Value> {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(json!({
        "succeeded": true,
        "data": [
            {"id": 1, "name": "جامعة القاهرة"},
            {"id": 2, "name": "جامعة عين شمس"},
        ]
    }))
}

// --- Missing token short-circuit ---

#[tokio::test]
async fn missing_token_short_circuits_without_network_call() {
    let state = Shared::default();
    let app = Router::new()
        .route("/University/names", get(university_names))
        .with_state(state.clone());
    let base = serve(app).await;

    let gw = gateway(&base, None);
    let outcome = gw.list_universities().await;

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some(MSG_LOGIN_FIRST));
    assert_eq!(state.hits.load(Ordering::SeqCst), 0, "no request may be issued");
}

// --- Bearer header + list normalization ---

#[tokio::test]
async fn bearer_token_is_attached_and_envelope_normalized() {
    let state = Shared::default();
    let app = Router::new()
        .route("/University/names", get(university_names))
        .with_state(state.clone());
    let base = serve(app).await;

    let gw = gateway(&base, Some("t0k3n"));
    let outcome = gw.list_universities().await;

    assert!(outcome.success);
    assert_eq!(outcome.data.unwrap().len(), 2);
    assert_eq!(
        state.last_auth.lock().unwrap().as_deref(),
        Some("Bearer t0k3n")
    );
}

// --- Create returning the authoritative entity ---

#[tokio::test]
async fn create_degree_returns_server_entity() {
    async fn create(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
        Json(json!({
            "succeeded": true,
            "data": {
                "id": 101,
                "name": body["name"],
                "departmentId": body["departmentId"],
                "generalDegree": body["generalDegree"],
                "standardDurationYears": body["standardDurationYears"],
            }
        }))
    }
    let app = Router::new().route("/Degree", post(create));
    let base = serve(app).await;

    let gw = gateway(&base, Some("t"));
    let input = CreateDegree {
        name: "Master of Science".into(),
        description: None,
        department_id: Some(3),
        standard_duration_years: Some(2),
        general_degree: GeneralDegree::Basic,
    };
    let outcome = gw.add_degree(&input).await;

    assert!(outcome.success, "{:?}", outcome.message);
    let degree = outcome.data.unwrap();
    assert_eq!(degree.id, 101);
    assert_eq!(degree.name, "Master of Science");
    assert_eq!(degree.department_id, 3);
}

// --- Business rejection on delete ---

#[tokio::test]
async fn delete_rejection_passes_backend_message_verbatim() {
    async fn reject() -> Json<serde_json::Value> {
        Json(json!({"succeeded": false, "message": "الدفعة مرتبطة ببيانات أخرى"}))
    }
    let app = Router::new().route("/Intake/{id}", delete(reject));
    let base = serve(app).await;

    let gw = gateway(&base, Some("t"));
    let outcome = gw.delete_intake(9).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("الدفعة مرتبطة ببيانات أخرى"));
}

// --- Malformed body over the wire ---

#[tokio::test]
async fn non_json_body_becomes_failure_message() {
    async fn broken() -> &'static str {
        "<html>proxy error</html>"
    }
    let app = Router::new().route("/Instructor", get(broken));
    let base = serve(app).await;

    let gw = gateway(&base, Some("t"));
    let outcome = gw.list_instructors().await;

    assert!(!outcome.success);
    assert!(outcome.message.unwrap().contains("<html>proxy error</html>"));
}

// --- Multipart card submission ---

#[tokio::test]
async fn card_submission_is_multipart_with_attachments() {
    async fn add_card(State(state): State<Shared>, mut multipart: Multipart) -> Json<serde_json::Value> {
        let mut parts = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or("").to_string();
            let file = field.file_name().map(str::to_string);
            let _ = field.bytes().await.unwrap();
            parts.push(match file {
                Some(file) => format!("{name}={file}"),
                None => name,
            });
        }
        *state.multipart_parts.lock().unwrap() = parts;
        Json(json!({"succeeded": true, "data": null}))
    }
    let state = Shared::default();
    let app = Router::new()
        .route("/RegisterationCard/AddRegistrationCard", post(add_card))
        .with_state(state.clone());
    let base = serve(app).await;

    let gw = gateway(&base, Some("t"));
    let input = CreateRegistrationCard {
        national_id: "29805120102345".into(),
        student_name: "سارة محمود".into(),
        request_type: "ماجستير".into(),
        degree_id: Some(4),
        department_id: Some(3),
        msar_id: None,
        semester_id: Some(1),
        language_id: Some(2),
    };
    let attachments = vec![Attachment {
        field_name: "bachelorDegreeImage".into(),
        file_name: "bachelor.png".into(),
        mime: "image/png".into(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }];

    let outcome = gw.add_card(&input, attachments).await;
    assert!(outcome.success, "{:?}", outcome.message);
    // Create response omitted the entity body: caller reconciles by reload.
    assert!(outcome.data.is_none());

    let parts = state.multipart_parts.lock().unwrap().clone();
    assert!(parts.contains(&"nationalId".to_string()));
    assert!(parts.contains(&"bachelorDegreeImage=bachelor.png".to_string()));
    // Unselected optional fields must not be sent at all.
    assert!(!parts.iter().any(|p| p.starts_with("msarId")));
}

// --- Dependent track lookup ---

#[tokio::test]
async fn track_lookup_passes_degree_id_and_parses_raw_array() {
    async fn msarat(
        axum::extract::Query(params): axum::extract::Query<
            std::collections::HashMap<String, String>,
        >,
    ) -> Json<serde_json::Value> {
        assert_eq!(params.get("degreeId").map(String::as_str), Some("4"));
        // PascalCase fields, no envelope: both quirks at once.
        Json(json!([{"Id": 11, "Name": "أمن المعلومات"}]))
    }
    let app = Router::new().route("/Lookups/GetMsaratByDegreeId", get(msarat));
    let base = serve(app).await;

    let gw = gateway(&base, Some("t"));
    let outcome = gw.msarat_by_degree(4).await;

    assert!(outcome.success, "{:?}", outcome.message);
    let options = outcome.data.unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].id, 11);
    assert_eq!(options[0].name, "أمن المعلومات");
}

// --- Student fetch by national id ---

#[tokio::test]
async fn student_fetch_uses_national_id_path_segment() {
    async fn by_national(
        axum::extract::Path(id): axum::extract::Path<String>,
    ) -> Json<serde_json::Value> {
        Json(json!({
            "succeeded": true,
            "data": {
                "nationalId": id,
                "firstName": "سارة",
                "lastName": "محمود",
            }
        }))
    }
    let app = Router::new().route("/Student/getByNationalNum/{id}", get(by_national));
    let base = serve(app).await;

    let gw = gateway(&base, Some("t"));
    let outcome = gw.get_student("29805120102345").await;

    assert!(outcome.success, "{:?}", outcome.message);
    let student = outcome.data.unwrap();
    assert_eq!(student.national_id, "29805120102345");
    assert_eq!(student.first_name, "سارة");
}

// --- Course payload shape ---

#[tokio::test]
async fn course_creation_omits_unset_optionals() {
    async fn create(
        State(state): State<Shared>,
        Json(body): Json<serde_json::Value>,
    ) -> Json<serde_json::Value> {
        *state.last_body.lock().unwrap() = Some(body);
        Json(json!({"succeeded": true, "data": null}))
    }
    let state = Shared::default();
    let app = Router::new()
        .route("/Course", post(create))
        .with_state(state.clone());
    let base = serve(app).await;

    let gw = gateway(&base, Some("t"));
    let input = CreateCourse {
        id: None,
        code: "CS101".into(),
        name: "Programming I".into(),
        credit_hours: 3,
        is_optional: false,
        semester: Some(1),
        department_id: Some(2),
        degree_id: Some(5),
        msar_id: None,
        prerequisites: vec!["MATH100".into()],
        instructors: vec![7],
        description: None,
    };
    let outcome = gw.add_course(&input).await;
    assert!(outcome.success, "{:?}", outcome.message);
    assert!(outcome.data.is_none());

    let body = state.last_body.lock().unwrap().clone().unwrap();
    let map = body.as_object().unwrap();
    assert!(!map.contains_key("id"), "unset id must not be sent");
    assert!(!map.contains_key("msarId"), "unset track must not be sent");
    assert_eq!(body["prerequisites"][0], "MATH100");
    assert_eq!(body["instructors"][0], 7);
}

// --- Student registration payload shape ---

#[tokio::test]
async fn student_registration_serializes_nested_qualifications() {
    async fn add(
        State(state): State<Shared>,
        Json(body): Json<serde_json::Value>,
    ) -> Json<serde_json::Value> {
        *state.last_body.lock().unwrap() = Some(body);
        Json(json!({"succeeded": true, "data": null}))
    }
    let state = Shared::default();
    let app = Router::new()
        .route("/Student/add", post(add))
        .with_state(state.clone());
    let base = serve(app).await;

    let gw = gateway(&base, Some("t"));
    let input = CreateStudent {
        national_id: "29805120102345".into(),
        first_name: "سارة".into(),
        last_name: "محمود".into(),
        phone: None,
        email: None,
        university_id: Some(1),
        college_id: Some(2),
        department_id: Some(3),
        program_id: None,
        degree_id: Some(4),
        msar_id: None,
        gpa: Some(3.2),
        qualifications: vec![Qualification {
            qualification_type_id: Some(2),
            institution: "جامعة القاهرة".into(),
            grade_id: Some(1),
            date_obtained: None,
        }],
    };
    let outcome = gw.add_student(&input).await;
    assert!(outcome.success, "{:?}", outcome.message);

    let body = state.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["qualifications"][0]["qualificationTypeId"], 2);
    assert_eq!(body["qualifications"][0]["institution"], "جامعة القاهرة");
    assert!(body.get("phone").is_none(), "unset phone must not be sent");
}

#[tokio::test]
async fn course_update_reuses_creation_shape_with_id() {
    async fn update(
        State(state): State<Shared>,
        Json(body): Json<serde_json::Value>,
    ) -> Json<serde_json::Value> {
        *state.last_body.lock().unwrap() = Some(body.clone());
        Json(json!({"succeeded": true, "data": body}))
    }
    let state = Shared::default();
    let app = Router::new()
        .route("/Course", axum::routing::put(update))
        .with_state(state.clone());
    let base = serve(app).await;

    let gw = gateway(&base, Some("t"));
    let input = CreateCourse {
        id: Some(44),
        code: "CS101".into(),
        name: "Programming I".into(),
        credit_hours: 3,
        is_optional: false,
        semester: Some(1),
        department_id: Some(2),
        degree_id: Some(5),
        msar_id: None,
        prerequisites: vec![],
        instructors: vec![],
        description: None,
    };
    let outcome = gw.update_course(&input).await;
    assert!(outcome.success, "{:?}", outcome.message);

    let body = state.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["id"], 44);
}
