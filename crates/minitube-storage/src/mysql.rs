use async_trait::async_trait;
use jiff::Timestamp;
use minitube_core::repository::{ReadRepository, Repository, Result};
use minitube_core::{StorageError, Video, VideoId, VideoPatch};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, Row};
use tracing::debug;

const SCHEMA: &str = include_str!("../ddl/mysql/videos.sql");

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, description, video_url, thumbnail_url, duration, views, upload_date
    FROM videos
"#;

/// MySQL implementation of the repository contract.
///
/// Upload dates are stored as microseconds since the Unix epoch so that
/// videos created within the same second still list in creation order.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `videos` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!("videos schema is in place");
        Ok(())
    }
}

fn parse_upload_date(micros: i64) -> Result<Timestamp> {
    Timestamp::from_microsecond(micros).map_err(|e| {
        StorageError::InvalidData(format!("invalid upload_date timestamp '{micros}': {e}"))
    })
}

fn video_from_row(row: &MySqlRow) -> Result<Video> {
    let id: String = row.try_get("id").map_err(map_sqlx_error)?;
    let upload_date: i64 = row.try_get("upload_date").map_err(map_sqlx_error)?;

    Ok(Video {
        id: VideoId::new_unchecked(id),
        title: row.try_get("title").map_err(map_sqlx_error)?,
        description: row.try_get("description").map_err(map_sqlx_error)?,
        video_url: row.try_get("video_url").map_err(map_sqlx_error)?,
        thumbnail_url: row.try_get("thumbnail_url").map_err(map_sqlx_error)?,
        duration: row.try_get("duration").map_err(map_sqlx_error)?,
        views: row.try_get("views").map_err(map_sqlx_error)?,
        upload_date: parse_upload_date(upload_date)?,
    })
}

async fn select_video<'e, E>(executor: E, id: &VideoId) -> Result<Option<Video>>
where
    E: sqlx::Executor<'e, Database = MySql>,
{
    let sql = format!("{SELECT_COLUMNS} WHERE id = ? LIMIT 1");
    let row = sqlx::query(&sql)
        .bind(id.as_str())
        .fetch_optional(executor)
        .await
        .map_err(map_sqlx_error)?;

    row.as_ref().map(video_from_row).transpose()
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn list(&self) -> Result<Vec<Video>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY upload_date DESC, id DESC");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(video_from_row).collect()
    }

    async fn get(&self, id: &VideoId) -> Result<Option<Video>> {
        select_video(&self.pool, id).await
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn insert(&self, video: Video) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO videos
                (id, title, description, video_url, thumbnail_url, duration, views, upload_date)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(video.id.as_str())
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.video_url)
        .bind(&video.thumbnail_url)
        .bind(video.duration)
        .bind(video.views)
        .bind(video.upload_date.as_microsecond())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(StorageError::Conflict(video.id.to_string())),
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn record_view(&self, id: &VideoId) -> Result<Option<Video>> {
        // The increment happens in SQL, so concurrent viewers serialize on
        // the row lock instead of racing a read-then-write.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query("UPDATE videos SET views = views + 1 WHERE id = ?")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let video = select_video(&mut *tx, id).await?;
        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(video)
    }

    async fn update(&self, id: &VideoId, patch: VideoPatch) -> Result<Option<Video>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            r#"
            UPDATE videos
            SET title = COALESCE(?, title),
                description = COALESCE(?, description),
                video_url = COALESCE(?, video_url),
                thumbnail_url = COALESCE(?, thumbnail_url),
                duration = COALESCE(?, duration)
            WHERE id = ?
            "#,
        )
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.video_url)
        .bind(patch.thumbnail_url)
        .bind(patch.duration)
        .bind(id.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let video = select_video(&mut *tx, id).await?;
        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(video)
    }

    async fn delete(&self, id: &VideoId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM videos WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
