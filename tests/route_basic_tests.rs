use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use trivia::config::BankConfig;
use trivia::server::router::{TriviaState, trivia_router};
use trivia::{MemoryStore, QuestionBank};
use trivia_schema::{Category, Question};

/// 12 questions (ids 1-12, category 1) and 2 categories.
fn app() -> Router {
    let categories = vec![
        Category {
            id: 1,
            kind: "Science".to_string(),
        },
        Category {
            id: 2,
            kind: "Art".to_string(),
        },
    ];
    let questions = (1..=12).map(|id| Question {
        id,
        question: if id == 3 {
            "What is the Title of the periodic table's first element?".to_string()
        } else {
            format!("Science question number {id}")
        },
        answer: format!("answer {id}"),
        category: 1,
        difficulty: 1 + id % 5,
    });
    let store = MemoryStore::with_records(categories, questions);
    let bank = QuestionBank::new(Arc::new(store), &BankConfig::default());
    trivia_router(TriviaState::new(bank))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not JSON")
    };
    (status, value)
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question id"))
        .collect()
}

#[tokio::test]
async fn categories_are_listed_as_id_map() {
    let app = app();
    let (status, body) = send(&app, "GET", "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "categories": {"1": "Science", "2": "Art"}})
    );
}

#[tokio::test]
async fn empty_store_has_no_categories() {
    let bank = QuestionBank::new(Arc::new(MemoryStore::new()), &BankConfig::default());
    let app = trivia_router(TriviaState::new(bank));
    let (status, body) = send(&app, "GET", "/categories", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "error": 404, "message": "not found"})
    );
}

#[tokio::test]
async fn questions_are_paginated_by_id() {
    let app = app();

    let (status, body) = send(&app, "GET", "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["totalQuestions"], 10);
    assert_eq!(body["currentCategory"], Value::Null);
    assert_eq!(body["categories"]["2"], "Art");

    let (status, body) = send(&app, "GET", "/questions?page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![11, 12]);
    assert_eq!(body["totalQuestions"], 2);

    // Non-numeric falls back to the first page.
    let (status, body) = send(&app, "GET", "/questions?page=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).first(), Some(&1));
}

#[tokio::test]
async fn page_bounds() {
    let app = app();

    let (status, body) = send(&app, "GET", "/questions?page=3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], 404);

    let (status, body) = send(&app, "GET", "/questions?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "error": 400, "message": "bad request"})
    );

    let (status, _) = send(&app, "GET", "/questions?page=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Past the end of any result set, not a fallback to page 1.
    let (status, body) = send(&app, "GET", "/questions?page=99999999999999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, "GET", "/questions?page=-99999999999999999999", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_then_delete_question() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "difficulty": "2",
            "category": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "created": 13}));

    let (status, body) = send(&app, "GET", "/categories/2/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![13]);
    assert_eq!(body["questions"][0]["difficulty"], 2);

    let (status, body) = send(&app, "DELETE", "/questions/13", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": 13}));

    let (status, body) = send(&app, "DELETE", "/questions/13", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, "DELETE", "/questions/not-a-number", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_question_validation() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({"question": "Q?", "answer": "A", "difficulty": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"success": false, "error": 422, "message": "unprocessable"})
    );

    // Unknown category is a store failure.
    let (status, _) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({"question": "Q?", "answer": "A", "difficulty": 1, "category": 77})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Malformed JSON.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/questions")
                .header("content-type", "application/json")
                .body(Body::from("not-json"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": "title"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![3]);
    assert_eq!(body["totalQuestions"], 1);
    assert_eq!(body["currentCategory"], Value::Null);

    let (status, body) = send(
        &app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": "NUMBER 1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 10, 11, 12]);

    let (status, body) = send(
        &app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": "no such text"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalQuestions"], 0);
}

#[tokio::test]
async fn empty_or_missing_search_term_is_not_found() {
    let app = app();
    let (status, _) = send(
        &app,
        "POST",
        "/questions/search",
        Some(json!({"searchTerm": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/questions/search", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn questions_by_category() {
    let app = app();

    let (status, body) = send(&app, "GET", "/categories/1/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=12).collect::<Vec<_>>());
    assert_eq!(body["totalQuestions"], 12);
    assert_eq!(body["currentCategory"], 1);

    // Known category without questions.
    let (status, body) = send(&app, "GET", "/categories/2/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "not found");

    // Unknown category.
    let (status, body) = send(&app, "GET", "/categories/1000/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "category not found");
}

#[tokio::test]
async fn quiz_never_repeats_and_signals_exhaustion() {
    let app = app();
    let mut previous: Vec<i64> = Vec::new();

    for _ in 0..12 {
        let (status, body) = send(
            &app,
            "POST",
            "/quizzes",
            Some(json!({
                "previous_questions": previous,
                "quiz_category": {"id": 1, "type": "Science"}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["question"]["id"].as_i64().expect("a question");
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({
            "previous_questions": previous,
            "quiz_category": {"id": 1, "type": "science"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn quiz_all_categories_sentinel() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({
            "previous_questions": (1..=11).collect::<Vec<i64>>(),
            "quiz_category": {"type": "click", "id": 0}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 12);
}

#[tokio::test]
async fn quiz_request_validation() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({"quiz_category": {"type": "click", "id": 0}})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({"previous_questions": []})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Category without questions has no candidates.
    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({"previous_questions": [], "quiz_category": {"type": "Art", "id": "2"}})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], 422);

    // Well-formed JSON with the wrong shape.
    let (status, _) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({"previous_questions": "1,2", "quiz_category": {"id": 1}})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_route_and_request_id() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/nope")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-123")
    );

    let (_, body) = send(&app, "GET", "/nope", None).await;
    assert_eq!(
        body,
        json!({"success": false, "error": 404, "message": "not found"})
    );
}

#[tokio::test]
async fn cors_headers_are_present() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/categories")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn sqlite_store_behind_the_router() {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let db_path = std::env::temp_dir().join(format!(
        "trivia_routes_{}_{nanos}.sqlite",
        std::process::id()
    ));
    let database_url = format!("sqlite:{}", db_path.to_str().unwrap());

    let db = trivia::db::spawn(&database_url).await.unwrap();
    db.seed_categories(vec!["Science".to_string(), "Art".to_string()])
        .await
        .unwrap();
    let bank = QuestionBank::new(Arc::new(db), &BankConfig::default());
    let app = trivia_router(TriviaState::new(bank));

    let (status, body) = send(&app, "GET", "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"], json!({"1": "Science", "2": "Art"}));

    // The foreign key rejects an unknown category; the client sees 422.
    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({"question": "Q?", "answer": "A", "difficulty": 1, "category": 77})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"success": false, "error": 422, "message": "unprocessable"})
    );
    let (status, _) = send(&app, "GET", "/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let question = json!({
        "question": "What is the chemical symbol for gold?",
        "answer": "Au",
        "difficulty": 2,
        "category": 1
    });
    let (status, body) = send(&app, "POST", "/questions", Some(question.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let first = body["created"].as_i64().expect("created id");

    let (status, _) = send(&app, "DELETE", &format!("/questions/{first}"), None).await;
    assert_eq!(status, StatusCode::OK);

    // A quiz client that already saw `first` must still be offered the new question.
    let (_, body) = send(&app, "POST", "/questions", Some(question)).await;
    let second = body["created"].as_i64().expect("created id");
    assert_ne!(second, first);

    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({
            "previous_questions": [first],
            "quiz_category": {"type": "Science", "id": 1}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], second);

    for suffix in ["-wal", "-shm", ""] {
        let _ = tokio::fs::remove_file(format!("{}{suffix}", db_path.display())).await;
    }
}
