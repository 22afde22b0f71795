#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use common::{bearer, data_list, setup};

#[actix_web::test]
async fn create_homework_forces_teacher_and_defaults_max_score() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let other = ctx.teacher("t_bob").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/teacher/homeworks")
        .insert_header(bearer(&teacher))
        .set_json(json!({
            "title": "  Fractions worksheet ",
            "group_id": 7,
            "deadline": "2026-01-24T12:00:00Z",
            "teacher_id": other.id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["teacher_id"], teacher.id);
    assert_eq!(body["data"]["title"], "Fractions worksheet");
    assert_eq!(body["data"]["group_id"], 7);
    assert_eq!(body["data"]["max_score"], 100.0);
    assert_eq!(body["data"]["deadline"], "2026-01-24T12:00:00Z");
}

#[actix_web::test]
async fn create_homework_validation_failure() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/teacher/homeworks")
        .insert_header(bearer(&teacher))
        .set_json(json!({"title": "", "max_score": -5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1001);
    let fields: Vec<&str> = data_list(&body)
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "max_score"]);

    let req = test::TestRequest::get()
        .uri("/api/v1/teacher/homeworks")
        .insert_header(bearer(&teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(data_list(&body).is_empty());
}

#[actix_web::test]
async fn list_is_newest_first_and_filtered_by_group() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let older = ctx.homework(teacher.id, Some(7), 100.0, 1_700_000_000).await;
    let newest = ctx.homework(teacher.id, Some(8), 100.0, 1_700_000_300).await;
    let middle = ctx.homework(teacher.id, Some(7), 100.0, 1_700_000_100).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/teacher/homeworks")
        .insert_header(bearer(&teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = data_list(&body)
        .iter()
        .map(|h| h["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![newest.id, middle.id, older.id]);

    let req = test::TestRequest::get()
        .uri("/api/v1/teacher/homeworks?group_id=7")
        .insert_header(bearer(&teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = data_list(&body)
        .iter()
        .map(|h| h["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![middle.id, older.id]);
}

#[actix_web::test]
async fn same_second_creations_fall_back_to_id_order() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let first = ctx.homework(teacher.id, None, 100.0, 1_700_000_000).await;
    let second = ctx.homework(teacher.id, None, 100.0, 1_700_000_000).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/teacher/homeworks")
        .insert_header(bearer(&teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = data_list(&body)
        .iter()
        .map(|h| h["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[actix_web::test]
async fn other_teacher_sees_nothing_for_same_group() {
    let ctx = setup().await;
    let alice = ctx.teacher("t_alice").await;
    let bob = ctx.teacher("t_bob").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/teacher/homeworks")
        .insert_header(bearer(&alice))
        .set_json(json!({"title": "Essay", "group_id": 7}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/teacher/homeworks?group_id=7")
        .insert_header(bearer(&bob))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(data_list(&body).is_empty());
}
