//! HTTP API 端到端测试
//!
//! 通过 oneshot 驱动完整 Router，数据库为内存 SQLite

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use trivia::infrastructure::http::{build_router, AppState};
use trivia::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, DbPool, SqliteCategoryRepository,
    SqliteQuestionRepository,
};

const CATEGORIES: &[&str] = &["Science", "Art", "Geography"];

/// (question, answer, category, difficulty)
const QUESTIONS: &[(&str, &str, i64, i64)] = &[
    ("What is the chemical symbol for gold?", "Au", 1, 2),
    ("Which planet is known as the Red Planet?", "Mars", 1, 1),
    ("Who painted the Mona Lisa?", "Leonardo da Vinci", 2, 1),
    ("Which Dutch painter cut off part of his ear?", "Vincent van Gogh", 2, 2),
    ("What is the title of the painting of melting clocks?", "The Persistence of Memory", 2, 4),
];

async fn empty_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

async fn insert_categories(pool: &DbPool, names: &[&str]) {
    for name in names {
        sqlx::query("INSERT INTO categories (type) VALUES (?)")
            .bind(*name)
            .execute(pool)
            .await
            .unwrap();
    }
}

async fn insert_question(
    pool: &DbPool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) {
    sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(pool)
    .await
    .unwrap();
}

fn app(pool: &DbPool) -> Router {
    let state = AppState::new(
        Arc::new(SqliteQuestionRepository::new(pool.clone())),
        Arc::new(SqliteCategoryRepository::new(pool.clone())),
    );
    build_router(Arc::new(state))
}

/// 3 个分类、5 道题（分类 1 有 2 道，分类 3 没有题）
async fn sample_app() -> (Router, DbPool) {
    let pool = empty_pool().await;
    insert_categories(&pool, CATEGORIES).await;
    for (question, answer, category, difficulty) in QUESTIONS {
        insert_question(&pool, question, answer, *category, *difficulty).await;
    }
    (app(&pool), pool)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(
        body,
        &json!({"success": false, "error": expected.as_u16(), "message": message})
    );
}

fn question_ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

// ============================================================================
// GET /categories
// ============================================================================

#[tokio::test]
async fn test_list_categories() {
    let (app, _pool) = sample_app().await;
    let (status, body) = get(&app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "categories": {"1": "Science", "2": "Art", "3": "Geography"}
        })
    );
}

#[tokio::test]
async fn test_list_categories_empty_is_not_found() {
    let pool = empty_pool().await;
    let (status, body) = get(&app(&pool), "/categories").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

// ============================================================================
// GET /questions
// ============================================================================

#[tokio::test]
async fn test_list_questions_first_page() {
    let (app, _pool) = sample_app().await;
    let (status, body) = get(&app, "/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["total_questions"], json!(5));
    assert_eq!(body["current_category"], Value::Null);
    assert_eq!(body["categories"]["2"], json!("Art"));
    assert_eq!(question_ids(&body), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        body["questions"][0],
        json!({
            "id": 1,
            "question": "What is the chemical symbol for gold?",
            "answer": "Au",
            "category": 1,
            "difficulty": 2
        })
    );
}

#[tokio::test]
async fn test_list_questions_paginates_by_ten() {
    let (app, pool) = sample_app().await;
    for i in 0..8 {
        insert_question(&pool, &format!("Extra question {}?", i), "x", 3, 1).await;
    }

    let (status, body) = get(&app, "/questions?page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question_ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], json!(13));

    let (status, body) = get(&app, "/questions?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question_ids(&body), vec![11, 12, 13]);

    let (status, body) = get(&app, "/questions?page=3").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_list_questions_bad_page_values() {
    let (app, _pool) = sample_app().await;

    let (status, body) = get(&app, "/questions?page=1000").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");

    let (status, body) = get(&app, "/questions?page=0").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");

    // 无法解析的页码按第 1 页处理
    let (status, body) = get(&app, "/questions?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question_ids(&body).len(), 5);
}

#[tokio::test]
async fn test_list_questions_overflowing_page_is_not_found() {
    let (app, _pool) = sample_app().await;

    let (status, body) = get(&app, "/questions?page=99999999999999999999").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");

    let (status, body) = get(&app, "/questions?page=-99999999999999999999").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_list_questions_empty_store_is_not_found() {
    let pool = empty_pool().await;
    insert_categories(&pool, CATEGORIES).await;
    let (status, body) = get(&app(&pool), "/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

// ============================================================================
// DELETE /questions/:id
// ============================================================================

#[tokio::test]
async fn test_delete_question() {
    let (app, _pool) = sample_app().await;

    let (status, body) = send(&app, Method::DELETE, "/questions/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["total_questions"], json!(4));
    assert_eq!(body["deleted_question"]["id"], json!(3));
    assert_eq!(body["deleted_question"]["answer"], json!("Leonardo da Vinci"));

    let (_, body) = get(&app, "/questions").await;
    assert_eq!(question_ids(&body), vec![1, 2, 4, 5]);
    assert_eq!(body["total_questions"], json!(4));

    let (status, body) = send(&app, Method::DELETE, "/questions/3", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_delete_question_non_integer_id() {
    let (app, _pool) = sample_app().await;
    let (status, body) = send(&app, Method::DELETE, "/questions/abc", None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

// ============================================================================
// POST /questions
// ============================================================================

#[tokio::test]
async fn test_create_question() {
    let (app, _pool) = sample_app().await;

    let (status, body) = post(
        &app,
        "/questions",
        json!({
            "question": "What is the largest ocean?",
            "answer": "Pacific",
            "difficulty": 1,
            "category": "3"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "added_question": {
                "id": 6,
                "question": "What is the largest ocean?",
                "answer": "Pacific",
                "category": 3,
                "difficulty": 1
            },
            "total_questions": 6
        })
    );

    let (_, body) = get(&app, "/categories/3/questions").await;
    assert_eq!(question_ids(&body), vec![6]);
}

#[tokio::test]
async fn test_create_question_does_not_validate_category() {
    let (app, _pool) = sample_app().await;
    let (status, body) = post(
        &app,
        "/questions",
        json!({"question": "Orphan?", "answer": "Yes", "category": 99}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["added_question"]["category"], json!(99));
    assert_eq!(body["added_question"]["difficulty"], Value::Null);
}

#[tokio::test]
async fn test_create_question_missing_fields() {
    let (app, _pool) = sample_app().await;

    let (status, body) = post(
        &app,
        "/questions",
        json!({"question": null, "answer": "A", "difficulty": 1, "category": 1}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable");

    let (status, body) = post(&app, "/questions", json!({"question": "Q?"})).await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable");

    let (_, body) = get(&app, "/questions").await;
    assert_eq!(body["total_questions"], json!(5));
}

#[tokio::test]
async fn test_create_question_malformed_body() {
    let (app, _pool) = sample_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/questions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = post(
        &app,
        "/questions",
        json!({"question": "Q?", "answer": "A", "category": "art"}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable");
}

#[tokio::test]
async fn test_search_questions() {
    let (app, _pool) = sample_app().await;

    let (status, body) = post(&app, "/questions", json!({"searchTerm": "TITLE"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(question_ids(&body), vec![5]);
    assert_eq!(body["total_questions"], json!(1));
    assert_eq!(body["current_category"], Value::Null);

    let (_, body) = post(&app, "/questions", json!({"searchTerm": "which"})).await;
    assert_eq!(question_ids(&body), vec![2, 4]);
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let (app, pool) = sample_app().await;
    insert_question(&pool, "Who wrote ÉMILE?", "Rousseau", 2, 3).await;

    let (status, body) = post(&app, "/questions", json!({"searchTerm": "émile"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question_ids(&body), vec![6]);
    assert_eq!(body["total_questions"], json!(1));
}

#[tokio::test]
async fn test_search_without_matches_is_empty_success() {
    let (app, _pool) = sample_app().await;
    let (status, body) = post(&app, "/questions", json!({"searchTerm": "quantum"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "questions": [],
            "total_questions": 0,
            "current_category": null
        })
    );
}

// ============================================================================
// GET /categories/:id/questions
// ============================================================================

#[tokio::test]
async fn test_questions_by_category() {
    let (app, _pool) = sample_app().await;

    let (status, body) = get(&app, "/categories/1/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question_ids(&body), vec![1, 2]);
    assert_eq!(body["total_questions"], json!(2));
    assert_eq!(body["current_category"], Value::Null);
    assert!(body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|q| q["category"] == json!(1)));
}

#[tokio::test]
async fn test_questions_by_empty_category() {
    let (app, _pool) = sample_app().await;
    let (status, body) = get(&app, "/categories/3/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["total_questions"], json!(0));
}

#[tokio::test]
async fn test_questions_by_out_of_range_category() {
    let (app, _pool) = sample_app().await;

    for uri in ["/categories/4/questions", "/categories/0/questions"] {
        let (status, body) = get(&app, uri).await;
        assert_error(status, &body, StatusCode::BAD_REQUEST, "Bad Request");
    }
}

// ============================================================================
// POST /quizzes
// ============================================================================

#[tokio::test]
async fn test_quiz_returns_unseen_question_in_category() {
    let (app, _pool) = sample_app().await;

    for _ in 0..20 {
        let (status, body) = post(
            &app,
            "/quizzes",
            json!({"previous_questions": [3], "quiz_category": {"type": "Art", "id": 2}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(id == 4 || id == 5, "unexpected question {}", id);
        assert_eq!(body["question"]["category"], json!(2));
    }
}

#[tokio::test]
async fn test_quiz_any_category() {
    let (app, _pool) = sample_app().await;

    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previous_questions": [1, 2, 3, 4], "quiz_category": {"type": "click", "id": 0}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], json!(5));
}

#[tokio::test]
async fn test_quiz_exhausted_category() {
    let (app, _pool) = sample_app().await;

    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previous_questions": [1, 2], "quiz_category": {"id": "1"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn test_quiz_malformed_category() {
    let (app, _pool) = sample_app().await;

    let (status, body) = post(&app, "/quizzes", json!({"previous_questions": []})).await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable");

    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": {"id": "science"}}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable");
}

// ============================================================================
// Misc
// ============================================================================

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let (app, _pool) = sample_app().await;
    let (status, body) = get(&app, "/nope").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_ping() {
    let (app, _pool) = sample_app().await;
    let (status, body) = get(&app, "/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["database"], json!("ok"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _pool) = sample_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/questions")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for method in ["GET", "POST", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {} in {}", method, methods);
    }
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("authorization"));
}
