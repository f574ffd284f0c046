//! Shared helpers for the Chirpy integration suites.
//!
//! Integration tests compile as separate crates, so the in-memory repository
//! doubles and the app builder live here and are pulled in with `mod support;`.

#![allow(dead_code, reason = "Each suite uses a different subset of helpers.")]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use chirpy::domain::ports::{
    ChirpPersistenceError, ChirpRepository, UserPersistenceError, UserRepository,
};
use chirpy::domain::{
    Chirp, ChirpId, ChirpService, HitCounter, NewChirp, NewUser, Platform, User, UserService,
};
use chirpy::inbound::http::assets::StaticFiles;
use chirpy::inbound::http::routes::{StaticRoots, configure};
use chirpy::inbound::http::state::HttpState;
use chirpy::middleware::Trace;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use tempfile::TempDir;

/// Clock advancing one second per reading so insert order is observable.
pub struct TickingClock {
    ticks: AtomicI64,
}

impl Default for TickingClock {
    fn default() -> Self {
        Self {
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        let start = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid start time");
        start + Duration::seconds(tick)
    }
}

/// Users held in memory; emails must be unique like the real table.
///
/// Deleting users removes their chirps, mirroring `ON DELETE CASCADE`.
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    chirps: Arc<InMemoryChirps>,
}

impl InMemoryUsers {
    pub fn cascading_to(chirps: Arc<InMemoryChirps>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            chirps,
        }
    }

    pub fn count(&self) -> usize {
        self.rows.lock().expect("users lock").len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut rows = self.rows.lock().expect("users lock");
        if rows.iter().any(|row| row.email == user.email) {
            return Err(UserPersistenceError::query("unique constraint violated"));
        }
        let stored = user.clone().into_user();
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn delete_all(&self) -> Result<u64, UserPersistenceError> {
        let mut rows = self.rows.lock().expect("users lock");
        let deleted = rows.len() as u64;
        let ids: Vec<_> = rows.drain(..).map(|user| user.id).collect();
        self.chirps
            .rows
            .lock()
            .expect("chirps lock")
            .retain(|chirp| !ids.contains(&chirp.user_id));
        Ok(deleted)
    }
}

/// Chirps held in memory, optionally failing every call.
#[derive(Default)]
pub struct InMemoryChirps {
    rows: Mutex<Vec<Chirp>>,
    failing: Mutex<bool>,
}

impl InMemoryChirps {
    pub fn fail_with_connection_errors(&self) {
        *self.failing.lock().expect("failing lock") = true;
    }

    pub fn count(&self) -> usize {
        self.rows.lock().expect("chirps lock").len()
    }

    fn check(&self) -> Result<(), ChirpPersistenceError> {
        if *self.failing.lock().expect("failing lock") {
            return Err(ChirpPersistenceError::connection("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl ChirpRepository for InMemoryChirps {
    async fn create(&self, chirp: &NewChirp) -> Result<Chirp, ChirpPersistenceError> {
        self.check()?;
        let stored = chirp.clone().into_chirp();
        self.rows.lock().expect("chirps lock").push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Chirp>, ChirpPersistenceError> {
        self.check()?;
        let mut rows = self.rows.lock().expect("chirps lock").clone();
        rows.sort_by_key(|chirp| (chirp.created_at, *chirp.id.as_uuid()));
        Ok(rows)
    }

    async fn find_by_id(&self, id: &ChirpId) -> Result<Option<Chirp>, ChirpPersistenceError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .expect("chirps lock")
            .iter()
            .find(|chirp| chirp.id == *id)
            .cloned())
    }
}

/// Everything a suite needs to drive the full route table.
pub struct Harness {
    pub users: Arc<InMemoryUsers>,
    pub chirps: Arc<InMemoryChirps>,
    pub hits: Arc<HitCounter>,
    pub clock: Arc<TickingClock>,
    pub platform: Platform,
    pub site: TempDir,
}

impl Harness {
    /// Fresh stores and a static site containing `index.html` and
    /// `assets/logo.png`.
    pub fn new(platform: Platform) -> Self {
        let site = tempfile::tempdir().expect("temp site");
        std::fs::write(site.path().join("index.html"), "<h1>Welcome to Chirpy</h1>")
            .expect("write index");
        std::fs::create_dir(site.path().join("assets")).expect("create assets");
        std::fs::write(site.path().join("assets/logo.png"), [0x89, b'P', b'N', b'G'])
            .expect("write logo");
        let chirps = Arc::new(InMemoryChirps::default());
        Self {
            users: Arc::new(InMemoryUsers::cascading_to(chirps.clone())),
            chirps,
            hits: Arc::new(HitCounter::new()),
            clock: Arc::new(TickingClock::default()),
            platform,
            site,
        }
    }

    pub fn state(&self) -> HttpState {
        HttpState::new(
            UserService::new(self.users.clone(), self.clock.clone()),
            ChirpService::new(self.chirps.clone(), self.clock.clone()),
            self.hits.clone(),
            self.platform,
        )
    }

    pub fn roots(&self) -> StaticRoots {
        StaticRoots {
            app: StaticFiles::open(self.site.path()).expect("open app root"),
            assets: StaticFiles::open(self.site.path().join("assets")).expect("open assets root"),
        }
    }

    /// The application as the server builds it, minus Swagger UI.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let state = web::Data::new(self.state());
        let roots = self.roots();
        App::new()
            .wrap(Trace)
            .configure(move |cfg| configure(cfg, state, roots))
    }
}
