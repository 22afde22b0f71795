#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use common::{bearer, data_list, setup};

#[actix_web::test]
async fn create_single_attendance_forces_teacher() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let other = ctx.teacher("t_bob").await;
    let student = ctx.student("s_one").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/teacher/attendance")
        .insert_header(bearer(&teacher))
        .set_json(json!({
            "student_id": student.id,
            "group_id": 7,
            "date": "2025-03-14",
            "status": "late",
            "teacher": other.id,
            "teacher_id": other.id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let records = data_list(&body);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["teacher_id"], teacher.id);
    assert_eq!(records[0]["student_id"], student.id);
    assert_eq!(records[0]["date"], "2025-03-14");
    assert_eq!(records[0]["status"], "late");
}

#[actix_web::test]
async fn create_batch_of_three() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let s1 = ctx.student("s_one").await;
    let s2 = ctx.student("s_two").await;
    let s3 = ctx.student("s_three").await;
    let app = init_app!(ctx);

    let entries: Vec<Value> = [&s1, &s2, &s3]
        .iter()
        .map(|s| json!({"student_id": s.id, "group_id": 7, "date": "2025-03-14"}))
        .collect();
    let req = test::TestRequest::post()
        .uri("/api/v1/teacher/attendance")
        .insert_header(bearer(&teacher))
        .set_json(entries)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let records = data_list(&body);
    assert_eq!(records.len(), 3);
    let students: Vec<i64> = records
        .iter()
        .map(|r| r["student_id"].as_i64().unwrap())
        .collect();
    assert_eq!(students, vec![s1.id, s2.id, s3.id]);
    assert!(records.iter().all(|r| r["teacher_id"] == teacher.id));
    assert!(records.iter().all(|r| r["status"] == "present"));
}

#[actix_web::test]
async fn batch_with_unknown_student_persists_nothing() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let s1 = ctx.student("s_one").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/teacher/attendance")
        .insert_header(bearer(&teacher))
        .set_json(json!([
            {"student_id": s1.id, "group_id": 7, "date": "2025-03-14"},
            {"student_id": 9999, "group_id": 7, "date": "2025-03-14"}
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1001);
    assert_eq!(body["data"][0]["field"], "[1].student_id");

    let req = test::TestRequest::get()
        .uri("/api/v1/teacher/attendance")
        .insert_header(bearer(&teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(data_list(&body).is_empty());
}

#[actix_web::test]
async fn invalid_entry_is_rejected_with_field_errors() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/teacher/attendance")
        .insert_header(bearer(&teacher))
        .set_json(json!({"student_id": 1, "group_id": 7, "date": "14/03/2025"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"][0]["field"], "date");
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/teacher/attendance")
        .insert_header(bearer(&teacher))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"student_id\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}

#[actix_web::test]
async fn list_orders_by_date_desc_then_student_asc() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let s1 = ctx.student("s_one").await;
    let s2 = ctx.student("s_two").await;
    let s3 = ctx.student("s_three").await;
    let app = init_app!(ctx);

    // 故意打乱写入顺序
    let req = test::TestRequest::post()
        .uri("/api/v1/teacher/attendance")
        .insert_header(bearer(&teacher))
        .set_json(json!([
            {"student_id": s3.id, "group_id": 7, "date": "2025-03-13"},
            {"student_id": s2.id, "group_id": 7, "date": "2025-03-14"},
            {"student_id": s3.id, "group_id": 7, "date": "2025-03-14"},
            {"student_id": s1.id, "group_id": 7, "date": "2025-03-14"},
            {"student_id": s1.id, "group_id": 7, "date": "2025-03-13"}
        ]))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/teacher/attendance")
        .insert_header(bearer(&teacher))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let order: Vec<(String, i64)> = data_list(&body)
        .iter()
        .map(|r| {
            (
                r["date"].as_str().unwrap().to_string(),
                r["student_id"].as_i64().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        order,
        vec![
            ("2025-03-14".to_string(), s1.id),
            ("2025-03-14".to_string(), s2.id),
            ("2025-03-14".to_string(), s3.id),
            ("2025-03-13".to_string(), s1.id),
            ("2025-03-13".to_string(), s3.id),
        ]
    );
}

#[actix_web::test]
async fn list_filters_and_ownership() {
    let ctx = setup().await;
    let alice = ctx.teacher("t_alice").await;
    let bob = ctx.teacher("t_bob").await;
    let s1 = ctx.student("s_one").await;
    let app = init_app!(ctx);

    for (teacher, group, date) in [
        (&alice, 7, "2025-03-14"),
        (&alice, 8, "2025-03-14"),
        (&alice, 7, "2025-03-15"),
        (&bob, 7, "2025-03-14"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/teacher/attendance")
            .insert_header(bearer(teacher))
            .set_json(json!({"student_id": s1.id, "group_id": group, "date": date}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    for (query, expected) in [
        ("", 3),
        ("?group_id=7", 2),
        ("?date=2025-03-14", 2),
        ("?group_id=7&date=2025-03-14", 1),
        ("?group_id=9", 0),
        ("?group_id=&date=", 3),
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/teacher/attendance{query}"))
            .insert_header(bearer(&alice))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let records = data_list(&body);
        assert_eq!(records.len(), expected, "query {query}");
        assert!(records.iter().all(|r| r["teacher_id"] == alice.id));
    }
}

#[actix_web::test]
async fn list_with_unparsable_date_is_bad_request() {
    let ctx = setup().await;
    let teacher = ctx.teacher("t_alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/teacher/attendance?date=yesterday")
        .insert_header(bearer(&teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/teacher/attendance?group_id=seven")
        .insert_header(bearer(&teacher))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
