//! Chirp use-cases: validation, moderation and storage.
//!
//! Every entry point validates before touching the repository, so an
//! oversized chirp never reaches storage. Persistence failures are logged
//! with full detail and surfaced as internal errors with a fixed public
//! message.

use std::sync::Arc;

use mockable::Clock;
use tracing::error;

use crate::domain::ports::{ChirpPersistenceError, ChirpRepository};
use crate::domain::{Chirp, ChirpBody, ChirpId, ChirpValidationError, Error, NewChirp, UserId};

/// Public message for chirps over the length limit.
pub const CHIRP_TOO_LONG: &str = "Chirp is too long";

/// Chirp service used by the HTTP adapter.
#[derive(Clone)]
pub struct ChirpService {
    chirps: Arc<dyn ChirpRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl ChirpService {
    /// Create a service over `chirps`, timestamping with `clock`.
    ///
    /// # Examples
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use chirpy::domain::ChirpService;
    /// # use chirpy::outbound::persistence::{DbPool, DieselChirpRepository, PoolConfig};
    /// # use mockable::DefaultClock;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/chirpy")).await?;
    /// let service = ChirpService::new(
    ///     Arc::new(DieselChirpRepository::new(pool)),
    ///     Arc::new(DefaultClock),
    /// );
    /// let chirps = service.list_chirps().await?;
    /// # let _ = chirps;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(chirps: Arc<dyn ChirpRepository>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { chirps, clock }
    }

    /// Check the length of `raw` and return its moderated form.
    ///
    /// Never touches storage.
    pub fn validate_chirp(&self, raw: &str) -> Result<ChirpBody, Error> {
        ChirpBody::new(raw).map_err(map_validation_error)
    }

    /// Validate, moderate and store a chirp owned by `user_id`.
    pub async fn create_chirp(&self, raw: &str, user_id: UserId) -> Result<Chirp, Error> {
        let body = self.validate_chirp(raw)?;
        let new_chirp = NewChirp::new(body, user_id, self.clock.utc());
        self.chirps
            .create(&new_chirp)
            .await
            .map_err(|err| persistence_failure(&err, "Error creating chirp"))
    }

    /// Every stored chirp, oldest first.
    pub async fn list_chirps(&self) -> Result<Vec<Chirp>, Error> {
        self.chirps
            .list()
            .await
            .map_err(|err| persistence_failure(&err, "Error retrieving chirps"))
    }

    /// Fetch one chirp; a missing chirp is [`crate::domain::ErrorCode::NotFound`].
    pub async fn get_chirp(&self, id: &ChirpId) -> Result<Chirp, Error> {
        self.chirps
            .find_by_id(id)
            .await
            .map_err(|err| persistence_failure(&err, "Error retrieving chirp"))?
            .ok_or_else(|| Error::not_found("Chirp not found"))
    }
}

fn map_validation_error(err: ChirpValidationError) -> Error {
    match err {
        ChirpValidationError::TooLong { .. } => Error::invalid_request(CHIRP_TOO_LONG),
    }
}

fn persistence_failure(err: &ChirpPersistenceError, public_message: &'static str) -> Error {
    error!(error = %err, "{public_message}");
    Error::internal(public_message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockChirpRepository;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock;

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            fixture_now().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            fixture_now()
        }
    }

    fn fixture_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[fixture]
    fn owner() -> UserId {
        UserId::random()
    }

    fn service(repo: MockChirpRepository) -> ChirpService {
        ChirpService::new(Arc::new(repo), Arc::new(FixtureClock))
    }

    #[rstest]
    #[tokio::test]
    async fn create_chirp_stores_moderated_body(owner: UserId) {
        let mut repo = MockChirpRepository::new();
        repo.expect_create()
            .withf(move |chirp| {
                chirp.body.as_ref() == "This is a **** opinion I need to share"
                    && chirp.user_id == owner
                    && chirp.created_at == fixture_now()
            })
            .times(1)
            .returning(|chirp| Ok(chirp.clone().into_chirp()));

        let chirp = service(repo)
            .create_chirp("This is a kerfuffle opinion I need to share", owner)
            .await
            .expect("chirp is created");

        assert_eq!(chirp.body, "This is a **** opinion I need to share");
        assert_eq!(chirp.user_id, owner);
    }

    #[rstest]
    #[tokio::test]
    async fn create_chirp_rejects_long_body_without_storing(owner: UserId) {
        let mut repo = MockChirpRepository::new();
        repo.expect_create().never();

        let err = service(repo)
            .create_chirp(&"a".repeat(141), owner)
            .await
            .expect_err("oversized chirp is rejected");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), CHIRP_TOO_LONG);
    }

    #[rstest]
    #[case(ChirpPersistenceError::connection("refused"))]
    #[case(ChirpPersistenceError::query("database error"))]
    #[tokio::test]
    async fn create_chirp_hides_persistence_detail(
        owner: UserId,
        #[case] failure: ChirpPersistenceError,
    ) {
        let mut repo = MockChirpRepository::new();
        repo.expect_create()
            .return_once(move |_| Err(failure));

        let err = service(repo)
            .create_chirp("hello", owner)
            .await
            .expect_err("store failure surfaces");

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "Error creating chirp");
    }

    #[rstest]
    #[tokio::test]
    async fn get_chirp_maps_missing_to_not_found() {
        let mut repo = MockChirpRepository::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));

        let err = service(repo)
            .get_chirp(&ChirpId::random())
            .await
            .expect_err("missing chirp");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn get_chirp_distinguishes_failure_from_absence() {
        let mut repo = MockChirpRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Err(ChirpPersistenceError::query("database error")));

        let err = service(repo)
            .get_chirp(&ChirpId::random())
            .await
            .expect_err("store failure");

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "Error retrieving chirp");
    }

    #[rstest]
    #[tokio::test]
    async fn list_chirps_passes_through_repository_order(owner: UserId) {
        let first = NewChirp::new(
            ChirpBody::new("first").expect("valid"),
            owner,
            fixture_now(),
        )
        .into_chirp();
        let second = NewChirp::new(
            ChirpBody::new("second").expect("valid"),
            owner,
            fixture_now(),
        )
        .into_chirp();
        let expected = vec![first, second];
        let stored = expected.clone();
        let mut repo = MockChirpRepository::new();
        repo.expect_list().return_once(move || Ok(stored));

        let chirps = service(repo).list_chirps().await.expect("list succeeds");

        assert_eq!(chirps, expected);
    }

    #[rstest]
    fn validate_chirp_never_touches_storage() {
        let mut repo = MockChirpRepository::new();
        repo.expect_create().never();
        repo.expect_list().never();
        repo.expect_find_by_id().never();

        let body = service(repo)
            .validate_chirp("Sharbert sharbert")
            .expect("valid body");

        assert_eq!(body.as_ref(), "**** ****");
    }
}
