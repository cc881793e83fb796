//! Database value conversion through sqlx
//!
//! An absent value binds as SQL `NULL` and a `NULL` column decodes to an
//! absent value. Present values go through the driver's own conversion for
//! `T`, and its errors are returned unchanged.

use crate::Optional;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{ColumnIndex, Database, Decode, Encode, Row, Type, TypeInfo, ValueRef};

impl<T, DB> Type<DB> for Optional<T>
where
    T: Type<DB>,
    DB: Database,
{
    fn type_info() -> DB::TypeInfo {
        T::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        ty.is_null() || T::compatible(ty)
    }
}

impl<'q, T, DB> Encode<'q, DB> for Optional<T>
where
    T: Encode<'q, DB> + Type<DB> + 'q,
    DB: Database,
{
    fn encode(self, buf: &mut <DB as Database>::ArgumentBuffer<'q>) -> Result<IsNull, BoxDynError> {
        match self.into_option() {
            Some(v) => v.encode(buf),
            None => Ok(IsNull::Yes),
        }
    }

    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self.ptr() {
            Some(v) => v.encode_by_ref(buf),
            None => Ok(IsNull::Yes),
        }
    }

    fn produces(&self) -> Option<DB::TypeInfo> {
        match self.ptr() {
            Some(v) => v.produces(),
            None => Some(T::type_info()),
        }
    }

    fn size_hint(&self) -> usize {
        self.ptr().map_or(0, |v| v.size_hint())
    }
}

impl<'r, T, DB> Decode<'r, DB> for Optional<T>
where
    T: Decode<'r, DB>,
    DB: Database,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            Ok(Self::none())
        } else {
            T::decode(value).map(Self::some)
        }
    }
}

impl<T> Optional<T> {
    /// Read column `index` of `row` into this option.
    ///
    /// On success the option is replaced. On failure the `sqlx::Error` is
    /// returned as is and the option keeps its previous value, since sqlx
    /// decodes into a fresh value and never touches the target.
    pub fn scan<'r, R, I>(&mut self, row: &'r R, index: I) -> Result<(), sqlx::Error>
    where
        R: Row,
        I: ColumnIndex<R>,
        Self: Decode<'r, R::Database> + Type<R::Database>,
    {
        match row.try_get::<Self, I>(index) {
            Ok(value) => {
                *self = value;
                log::trace!("Scanned optional column: present={}", self.is_some());
                Ok(())
            }
            Err(e) => {
                log::debug!("Failed to scan optional column: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{Connection, Sqlite, SqliteConnection};

    /// A value whose driver encoding always fails
    struct Unstorable;

    impl Type<Sqlite> for Unstorable {
        fn type_info() -> <Sqlite as Database>::TypeInfo {
            <i64 as Type<Sqlite>>::type_info()
        }
    }

    impl<'q> Encode<'q, Sqlite> for Unstorable {
        fn encode_by_ref(
            &self,
            _buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
        ) -> Result<IsNull, BoxDynError> {
            Err("value cannot be stored".into())
        }
    }

    async fn setup_test_db() -> SqliteConnection {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut conn = SqliteConnection::connect("sqlite::memory:").await.unwrap();
        sqlx::query("CREATE TABLE ids (id INTEGER PRIMARY KEY AUTOINCREMENT, n INTEGER)")
            .execute(&mut conn)
            .await
            .unwrap();
        conn
    }

    async fn roundtrip(conn: &mut SqliteConnection, input: Optional<i64>) -> Optional<i64> {
        let id = sqlx::query("INSERT INTO ids (n) VALUES (?)")
            .bind(input)
            .execute(&mut *conn)
            .await
            .unwrap()
            .last_insert_rowid();

        let row = sqlx::query("SELECT n FROM ids WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *conn)
            .await
            .unwrap();

        let mut got = Optional::none();
        got.scan(&row, 0).unwrap();
        got
    }

    #[tokio::test]
    async fn test_some_roundtrip() {
        let mut conn = setup_test_db().await;
        assert_eq!(roundtrip(&mut conn, Optional::some(123)).await, Optional::some(123));
    }

    #[tokio::test]
    async fn test_none_roundtrip() {
        let mut conn = setup_test_db().await;
        assert_eq!(roundtrip(&mut conn, Optional::none()).await, Optional::none());

        // the column really holds NULL
        let nulls: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ids WHERE n IS NULL")
            .fetch_one(&mut conn)
            .await
            .unwrap();
        assert_eq!(nulls, 1);
    }

    #[tokio::test]
    async fn test_scan_null() {
        let mut conn = setup_test_db().await;
        let row = sqlx::query("SELECT NULL").fetch_one(&mut conn).await.unwrap();

        let mut got = Optional::some(1_i64);
        got.scan(&row, 0).unwrap();
        assert_eq!(got, Optional::none());
    }

    #[tokio::test]
    async fn test_scan_mismatch_keeps_previous_value() {
        let mut conn = setup_test_db().await;
        let row = sqlx::query("SELECT 'abc'").fetch_one(&mut conn).await.unwrap();

        let mut got = Optional::some(7_i64);
        let err = got.scan(&row, 0).unwrap_err();

        assert!(matches!(err, sqlx::Error::ColumnDecode { .. }), "unexpected error: {err:?}");
        assert_eq!(got, Optional::some(7));
    }

    #[tokio::test]
    async fn test_scan_missing_column() {
        let mut conn = setup_test_db().await;
        let row = sqlx::query("SELECT 1 AS n").fetch_one(&mut conn).await.unwrap();

        let mut got = Optional::<i64>::none();
        let err = got.scan(&row, "missing").unwrap_err();
        assert!(matches!(err, sqlx::Error::ColumnNotFound(_)));
    }

    #[tokio::test]
    async fn test_encode_error_propagates() {
        let mut conn = setup_test_db().await;

        let err = sqlx::query("INSERT INTO ids (n) VALUES (?)")
            .bind(Optional::some(Unstorable))
            .execute(&mut conn)
            .await
            .unwrap_err();

        assert!(matches!(err, sqlx::Error::Encode(_)), "unexpected error: {err:?}");
        assert!(err.to_string().contains("value cannot be stored"));
    }

    #[tokio::test]
    async fn test_absent_value_skips_encoder() {
        let mut conn = setup_test_db().await;

        sqlx::query("INSERT INTO ids (n) VALUES (?)")
            .bind(Optional::<Unstorable>::none())
            .execute(&mut conn)
            .await
            .unwrap();

        let nulls: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ids WHERE n IS NULL")
            .fetch_one(&mut conn)
            .await
            .unwrap();
        assert_eq!(nulls, 1);
    }
}
