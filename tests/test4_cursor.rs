use chrono::NaiveDate;
use vertica_backend::VerticaBackendError;
use vertica_backend::config::DatabaseSettings;
use vertica_backend::connection::VerticaConnection;
use vertica_backend::driver::ErrorKind;
use vertica_backend::test_utils::{MockDriver, MockScript};
use vertica_backend::types::SqlValue;

fn settings(use_tz: bool) -> DatabaseSettings {
    DatabaseSettings {
        name: "analytics".to_string(),
        use_tz,
        ..Default::default()
    }
}

async fn open(
    driver: &MockDriver,
    use_tz: bool,
) -> VerticaConnection<vertica_backend::test_utils::MockConnection> {
    VerticaConnection::open(driver, &settings(use_tz))
        .await
        .expect("mock connect")
}

#[tokio::test]
async fn booleans_are_sent_as_integers() {
    let driver = MockDriver::new();
    let conn = open(&driver, false).await;
    let mut cursor = conn.cursor().await.unwrap();

    cursor
        .execute(
            "INSERT INTO t (a, b, c) VALUES (?, ?, ?)",
            &[
                SqlValue::Bool(true),
                SqlValue::Bool(false),
                SqlValue::Text("x".to_string()),
            ],
        )
        .await
        .unwrap();

    let executed = driver.script.executed();
    assert_eq!(executed.len(), 1);
    assert_eq!(
        executed[0].1[0],
        vec![
            SqlValue::Int(1),
            SqlValue::Int(0),
            SqlValue::Text("x".to_string())
        ]
    );
    assert_eq!(cursor.last_params()[0], SqlValue::Int(1));
    assert_eq!(cursor.last_sql(), "INSERT INTO t (a, b, c) VALUES (?, ?, ?)");
}

#[tokio::test]
async fn integrity_errors_are_retyped() {
    let driver = MockDriver::new();
    driver
        .script
        .push_error(ErrorKind::Integrity, "duplicate key value");
    let conn = open(&driver, false).await;
    let mut cursor = conn.cursor().await.unwrap();

    let err = cursor
        .execute("INSERT INTO t VALUES (?)", &[SqlValue::Int(1)])
        .await
        .unwrap_err();
    match err {
        VerticaBackendError::IntegrityError { message, .. } => {
            assert_eq!(message, "duplicate key value");
        }
        other => panic!("expected integrity error, got {other:?}"),
    }
}

#[tokio::test]
async fn other_driver_errors_become_database_errors() {
    let driver = MockDriver::new();
    driver
        .script
        .push_error(ErrorKind::Operational, "connection reset");
    let conn = open(&driver, false).await;
    let mut cursor = conn.cursor().await.unwrap();

    let err = cursor.execute("SELECT 1", &[]).await.unwrap_err();
    match err {
        VerticaBackendError::DatabaseError(e) => {
            assert_eq!(e.message(), "connection reset");
            assert_eq!(e.kind(), ErrorKind::Operational);
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_batch_with_placeholder_is_a_noop() {
    let driver = MockDriver::new();
    let conn = open(&driver, false).await;
    let mut cursor = conn.cursor().await.unwrap();

    cursor
        .execute_many("INSERT INTO t VALUES (?)", &[])
        .await
        .unwrap();
    assert!(driver.script.executed().is_empty());
}

#[tokio::test]
async fn empty_batch_without_placeholder_is_forwarded() {
    let driver = MockDriver::new();
    let conn = open(&driver, false).await;
    let mut cursor = conn.cursor().await.unwrap();

    cursor.execute_many("DELETE FROM t", &[]).await.unwrap();
    assert_eq!(driver.script.executed().len(), 1);
}

#[tokio::test]
async fn batch_parameters_are_formatted_per_set() {
    let driver = MockDriver::new();
    let conn = open(&driver, false).await;
    let mut cursor = conn.cursor().await.unwrap();

    cursor
        .execute_many(
            "INSERT INTO t VALUES (?)",
            &[vec![SqlValue::Bool(true)], vec![SqlValue::Bool(false)]],
        )
        .await
        .unwrap();

    let executed = driver.script.executed();
    assert_eq!(executed[0].1.len(), 2);
    assert_eq!(executed[0].1[0], vec![SqlValue::Int(1)]);
    assert_eq!(executed[0].1[1], vec![SqlValue::Int(0)]);
}

#[tokio::test]
async fn naive_datetimes_are_stamped_utc_when_tz_aware() {
    let naive = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    let script = MockScript::new();
    script.push_rows(vec![vec![SqlValue::Timestamp(naive)]]);
    let driver = MockDriver::with_script(script);
    let conn = open(&driver, true).await;
    let mut cursor = conn.cursor().await.unwrap();

    cursor.execute("SELECT created_at FROM t", &[]).await.unwrap();
    let row = cursor.fetch_one().await.unwrap().unwrap();
    assert_eq!(row[0], SqlValue::TimestampTz(naive.and_utc()));
}

#[tokio::test]
async fn naive_datetimes_pass_through_when_not_tz_aware() {
    let naive = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    let script = MockScript::new();
    script.push_rows(vec![vec![SqlValue::Timestamp(naive)]]);
    let driver = MockDriver::with_script(script);
    let conn = open(&driver, false).await;
    let mut cursor = conn.cursor().await.unwrap();

    cursor.execute("SELECT created_at FROM t", &[]).await.unwrap();
    let row = cursor.fetch_one().await.unwrap().unwrap();
    assert_eq!(row[0], SqlValue::Timestamp(naive));
}

#[tokio::test]
async fn fetch_variants_drain_the_result_set() {
    let script = MockScript::new();
    script.push_rows(vec![
        vec![SqlValue::Int(1)],
        vec![SqlValue::Int(2)],
        vec![SqlValue::Int(3)],
    ]);
    let driver = MockDriver::with_script(script);
    let conn = open(&driver, false).await;
    let mut cursor = conn.cursor().await.unwrap();

    cursor.execute("SELECT n FROM t", &[]).await.unwrap();
    assert_eq!(cursor.row_count(), 3);

    let chunk = cursor.fetch_many(2).await.unwrap();
    assert_eq!(chunk.len(), 2);

    let rest = cursor.fetch_all().await.unwrap();
    assert_eq!(rest, vec![vec![SqlValue::Int(3)]]);

    assert_eq!(cursor.fetch_one().await.unwrap(), None);
}

#[tokio::test]
async fn iteration_forwards_to_the_native_cursor() {
    let script = MockScript::new();
    script.push_rows(vec![vec![SqlValue::Int(1)], vec![SqlValue::Int(2)]]);
    let driver = MockDriver::with_script(script);
    let conn = open(&driver, false).await;
    let mut cursor = conn.cursor().await.unwrap();

    cursor.execute("SELECT n FROM t", &[]).await.unwrap();
    let mut seen = Vec::new();
    while let Some(row) = cursor.next_row().await.unwrap() {
        seen.push(row);
    }
    assert_eq!(seen.len(), 2);
}
