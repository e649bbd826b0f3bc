use std::sync::Arc;
use std::time::Duration;

use jiff::{SignedDuration, Timestamp};
use minitube_core::{Video, VideoId, VideoPatch};
use minitube_storage::{MySqlRepository, ReadRepository, Repository, StorageError};
use minitube_test_infra::mysql::{MySqlServer, MysqlConfig};
use sqlx::mysql::MySqlPoolOptions;

struct Fixture {
    _mysql: MySqlServer,
    repo: MySqlRepository,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::new(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let url = mysql.database_url().await.expect("mysql url");
        let pool = connect_with_retry(&url).await;

        let repo = MySqlRepository::new(pool);
        repo.migrate().await.expect("create schema");

        Self {
            _mysql: mysql,
            repo,
        }
    }
}

async fn connect_with_retry(url: &str) -> sqlx::MySqlPool {
    let mut last_error = None;

    for _ in 0..20 {
        match MySqlPoolOptions::new()
            .max_connections(8)
            .connect(url)
            .await
        {
            Ok(pool) => return pool,
            Err(err) => {
                last_error = Some(err);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }
    }

    panic!("failed to connect mysql: {last_error:?}");
}

fn id(value: &str) -> VideoId {
    VideoId::new_unchecked(value)
}

fn video(id_str: &str, upload_date: Timestamp) -> Video {
    Video {
        id: id(id_str),
        title: format!("Video {id_str}"),
        description: "described".to_string(),
        video_url: "https://example.com/v.mp4".to_string(),
        thumbnail_url: "https://example.com/v.jpg".to_string(),
        duration: 90,
        views: 0,
        upload_date,
    }
}

#[tokio::test]
async fn insert_and_get_roundtrips_all_columns() {
    let fixture = Fixture::start().await;
    let upload_date: Timestamp = "2024-05-01T12:00:00.123456Z".parse().unwrap();
    let mut original = video("abc123", upload_date);
    original.views = 12_500;

    fixture.repo.insert(original.clone()).await.unwrap();

    let got = fixture.repo.get(&id("abc123")).await.unwrap().unwrap();
    assert_eq!(got, original);
}

#[tokio::test]
async fn insert_conflicts_when_id_already_exists() {
    let fixture = Fixture::start().await;
    let now = Timestamp::now();

    fixture.repo.insert(video("abc123", now)).await.unwrap();
    let err = fixture.repo.insert(video("abc123", now)).await.unwrap_err();

    assert!(matches!(err, StorageError::Conflict(_)));
}

#[tokio::test]
async fn ids_compare_byte_for_byte() {
    let fixture = Fixture::start().await;
    let now = Timestamp::now();

    fixture.repo.insert(video("abc123", now)).await.unwrap();
    fixture.repo.insert(video("ABC123", now)).await.unwrap();
    fixture.repo.insert(video("b", now)).await.unwrap();

    assert!(fixture.repo.get(&id("Abc123")).await.unwrap().is_none());
    assert!(fixture.repo.record_view(&id("ABC12")).await.unwrap().is_none());

    let listed = fixture.repo.list().await.unwrap();
    let ids: Vec<_> = listed.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "abc123", "ABC123"]);
}

#[tokio::test]
async fn list_orders_by_upload_date_descending() {
    let fixture = Fixture::start().await;
    let now = Timestamp::now();

    for (name, minutes_ago) in [("b", 5), ("a", 0), ("c", 10)] {
        fixture
            .repo
            .insert(video(name, now - SignedDuration::from_mins(minutes_ago)))
            .await
            .unwrap();
    }

    let listed = fixture.repo.list().await.unwrap();
    let ids: Vec<_> = listed.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].upload_date >= pair[1].upload_date));
}

#[tokio::test]
async fn record_view_increments_and_returns_post_increment_record() {
    let fixture = Fixture::start().await;
    fixture
        .repo
        .insert(video("viewed", Timestamp::now()))
        .await
        .unwrap();

    let first = fixture.repo.record_view(&id("viewed")).await.unwrap().unwrap();
    let second = fixture.repo.record_view(&id("viewed")).await.unwrap().unwrap();

    assert_eq!(first.views, 1);
    assert_eq!(second.views, 2);
    assert!(fixture.repo.record_view(&id("missing")).await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_record_view_does_not_lose_increments() {
    let fixture = Fixture::start().await;
    fixture
        .repo
        .insert(video("hot", Timestamp::now()))
        .await
        .unwrap();

    let repo = Arc::new(fixture.repo.clone());
    let mut handles = vec![];
    for _ in 0..20 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.record_view(&VideoId::new_unchecked("hot")).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let got = fixture.repo.get(&id("hot")).await.unwrap().unwrap();
    assert_eq!(got.views, 20);
}

#[tokio::test]
async fn update_replaces_only_supplied_fields() {
    let fixture = Fixture::start().await;
    fixture
        .repo
        .insert(video("editable", Timestamp::now()))
        .await
        .unwrap();

    let patch = VideoPatch::builder().title("Renamed").duration(300).build();
    let updated = fixture
        .repo
        .update(&id("editable"), patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.duration, 300);
    assert_eq!(updated.description, "described");
    assert!(fixture
        .repo
        .update(&id("missing"), VideoPatch::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn delete_removes_record() {
    let fixture = Fixture::start().await;
    fixture
        .repo
        .insert(video("gone", Timestamp::now()))
        .await
        .unwrap();

    assert!(fixture.repo.delete(&id("gone")).await.unwrap());
    assert!(fixture.repo.get(&id("gone")).await.unwrap().is_none());
    assert!(!fixture.repo.delete(&id("gone")).await.unwrap());
}
