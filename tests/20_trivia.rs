mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{spawn_app, TestApp};

async fn create_category(app: &TestApp, kind: &str) -> Result<i64> {
    let res = app
        .client
        .post(app.url("/api/categories"))
        .json(&json!({ "type": kind }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED, "category create failed");
    Ok(res.json::<Value>().await?["category"]["id"].as_i64().unwrap())
}

async fn create_question(app: &TestApp, question: &str, category: i64) -> Result<Value> {
    let res = app
        .client
        .post(app.url("/api/questions"))
        .json(&json!({
            "question": question,
            "answer": "42",
            "category": category,
            "difficulty": 2,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED, "question create failed");
    Ok(res.json::<Value>().await?["question"].clone())
}

#[tokio::test]
async fn categories_roundtrip() -> Result<()> {
    let app = spawn_app().await?;

    let res = app.client.get(app.url("/api/categories")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["categories"].as_array().unwrap().is_empty());

    let id = create_category(&app, "Science").await?;

    let res = app.client.get(app.url("/api/categories")).send().await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["categories"], json!([{ "id": id, "type": "Science" }]));

    Ok(())
}

#[tokio::test]
async fn question_create_names_the_missing_field() -> Result<()> {
    let app = spawn_app().await?;
    let category = create_category(&app, "Science").await?;

    let cases = [
        (json!({ "answer": "x", "category": category, "difficulty": 1 }), "question"),
        (json!({ "question": "  ", "answer": "x", "category": category, "difficulty": 1 }), "question"),
        (json!({ "question": "q", "category": category, "difficulty": 1 }), "answer"),
        (json!({ "question": "q", "answer": "x", "difficulty": 1 }), "category"),
        (json!({ "question": "q", "answer": "x", "category": category }), "difficulty"),
        (json!({ "question": "q", "answer": "x", "category": category, "difficulty": 0 }), "difficulty"),
    ];

    for (payload, field) in cases {
        let res = app.client.post(app.url("/api/questions")).json(&payload).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload should fail: {}", payload);
        let body = res.json::<Value>().await?;
        assert_eq!(body["field"], json!(field), "wrong field named: {}", body);
        assert_eq!(body["message"], json!(format!("{} field is missing a value", field)));
    }

    // A dangling category id is rejected before the write
    let res = app
        .client
        .post(app.url("/api/questions"))
        .json(&json!({ "question": "q", "answer": "x", "category": 9999, "difficulty": 1 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["message"], "category does not exist");

    Ok(())
}

#[tokio::test]
async fn questions_paginate_in_insertion_order() -> Result<()> {
    let app = spawn_app().await?;
    let category = create_category(&app, "History").await?;

    for i in 1..=12 {
        create_question(&app, &format!("Question number {}", i), category).await?;
    }

    let res = app.client.get(app.url("/api/questions")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[0]["question"], "Question number 1");
    assert_eq!(body["page"], json!(1));
    assert_eq!(body["total_questions"], json!(12));
    assert_eq!(body["current_category"], json!(""));
    assert_eq!(body["categories"].as_array().unwrap().len(), 1);

    let res = app.client.get(app.url("/api/questions?page=2")).send().await?;
    let body = res.json::<Value>().await?;
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0]["question"], "Question number 11");

    // A page past the end is an empty list, not an error
    let res = app.client.get(app.url("/api/questions?page=3")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["questions"].as_array().unwrap().is_empty());
    assert_eq!(body["total_questions"], json!(12));

    Ok(())
}

#[tokio::test]
async fn question_delete_is_idempotent_at_the_contract_level() -> Result<()> {
    let app = spawn_app().await?;
    let category = create_category(&app, "Sports").await?;
    let question = create_question(&app, "How long is a marathon?", category).await?;
    let id = question["id"].as_i64().unwrap();

    let res = app
        .client
        .delete(app.url(&format!("/api/questions/{}/delete", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], json!(true));

    // Second delete is a clean 404
    let res = app
        .client
        .delete(app.url(&format!("/api/questions/{}/delete", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.client.get(app.url("/api/questions")).send().await?;
    assert_eq!(res.json::<Value>().await?["total_questions"], json!(0));

    Ok(())
}

#[tokio::test]
async fn search_matches_substrings_case_insensitively() -> Result<()> {
    let app = spawn_app().await?;
    let category = create_category(&app, "Geography").await?;

    create_question(&app, "What is the largest lake in Africa?", category).await?;
    create_question(&app, "Which country has the longest coastline?", category).await?;
    create_question(&app, "Name the deepest lake on Earth.", category).await?;

    let res = app
        .client
        .post(app.url("/api/search/questions?search=LAKE"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    // Ordered by id
    assert_eq!(questions[0]["question"], "What is the largest lake in Africa?");
    assert_eq!(questions[1]["question"], "Name the deepest lake on Earth.");

    let res = app
        .client
        .post(app.url("/api/search/questions?search=volcano"))
        .send()
        .await?;
    let body = res.json::<Value>().await?;
    assert!(body["questions"].as_array().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn questions_filter_by_category() -> Result<()> {
    let app = spawn_app().await?;
    let science = create_category(&app, "Science").await?;
    let art = create_category(&app, "Art").await?;

    create_question(&app, "What is the speed of light?", science).await?;
    create_question(&app, "Who painted The Starry Night?", art).await?;

    let res = app
        .client
        .get(app.url(&format!("/api/categories/{}/questions", science)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["category"].as_i64(), Some(science));

    Ok(())
}

#[tokio::test]
async fn play_excludes_previous_questions_and_drains_to_empty() -> Result<()> {
    let app = spawn_app().await?;
    let science = create_category(&app, "Science").await?;
    let art = create_category(&app, "Art").await?;

    create_question(&app, "What is the speed of light?", science).await?;
    create_question(&app, "Which planet has the most moons?", science).await?;
    create_question(&app, "Who painted The Starry Night?", art).await?;

    // Drawing in a category never repeats a previous question
    let res = app
        .client
        .post(app.url("/api/questions/play"))
        .json(&json!({
            "category": science,
            "previous_questions": ["What is the speed of light?"],
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["question"]["question"], "Which planet has the most moons?");
    assert_eq!(body["question"]["category"].as_i64(), Some(science));

    // Exhausted pool yields an empty question, repeatedly
    for _ in 0..3 {
        let res = app
            .client
            .post(app.url("/api/questions/play"))
            .json(&json!({
                "category": science,
                "previous_questions": [
                    "What is the speed of light?",
                    "Which planet has the most moons?",
                ],
            }))
            .send()
            .await?;
        let body = res.json::<Value>().await?;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["question"], json!(""));
    }

    // Category 0 means the whole pool
    let res = app
        .client
        .post(app.url("/api/questions/play"))
        .json(&json!({
            "category": 0,
            "previous_questions": [
                "What is the speed of light?",
                "Which planet has the most moons?",
            ],
        }))
        .send()
        .await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["question"]["question"], "Who painted The Starry Night?");

    Ok(())
}

#[tokio::test]
async fn deleting_a_category_cascades_its_questions() -> Result<()> {
    let app = spawn_app().await?;
    let category = create_category(&app, "Ephemera").await?;
    create_question(&app, "Will this survive?", category).await?;

    let res = app
        .client
        .delete(app.url(&format!("/api/categories/{}", category)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.client.get(app.url("/api/questions")).send().await?;
    assert_eq!(res.json::<Value>().await?["total_questions"], json!(0));

    // Unknown category is a 404
    let res = app
        .client
        .delete(app.url(&format!("/api/categories/{}", category)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
