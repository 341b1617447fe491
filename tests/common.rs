use vaga_livre::{
    api::router::create_router,
    config::Config,
    domain::models::{
        condominium::Condominium,
        spot::{AvailabilitySlot, NewSpotParams, ParkingSpot, SpotCategory},
        user::{NewResidentParams, User, UserStatus},
    },
    infra::factory::{build_state, seed_manager},
    state::AppState,
};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            default_timezone: chrono_tz::UTC,
            log_dir: "./logs".to_string(),
            bootstrap_manager_email: None,
            bootstrap_manager_name: "Síndico".to_string(),
        };

        let state = Arc::new(build_state(config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// A condominium whose calendar days are UTC days, so fixture dates read plainly.
    pub async fn condominium(&self, name: &str) -> Condominium {
        let condo = Condominium::new(name.to_string(), "Rua das Flores, 100".to_string(), "UTC".to_string());
        self.state.condominium_repo.create(&condo).await.unwrap()
    }

    pub async fn manager(&self, email: &str) -> User {
        seed_manager(self.state.user_repo.as_ref(), "Síndico", email).await.unwrap().unwrap()
    }

    /// An approved manager whose authority is limited to one condominium.
    pub async fn condominium_manager(&self, condominium_id: &str, email: &str) -> User {
        let user = User::new_manager("Síndico".to_string(), email.to_string(), Some(condominium_id.to_string()));
        self.state.user_repo.create(&user).await.unwrap()
    }

    pub async fn resident(&self, condominium_id: &str, email: &str) -> User {
        let user = User::new_resident(NewResidentParams {
            condominium_id: condominium_id.to_string(),
            full_name: format!("Resident {}", email),
            email: email.to_string(),
            phone: None,
            apartment: Some("12B".to_string()),
        });
        let created = self.state.user_repo.create(&user).await.unwrap();
        self.state.user_repo.update_status(&created.id, UserStatus::Approved).await.unwrap()
    }

    pub async fn spot(&self, owner: &User, slots: &[(DateTime<Utc>, DateTime<Utc>)]) -> ParkingSpot {
        let mut spot = ParkingSpot::new(NewSpotParams {
            condominium_id: owner.condominium_id.clone().unwrap(),
            owner_id: owner.id.clone(),
            number: format!("G-{}", &Uuid::new_v4().to_string()[..4]),
            category: SpotCategory::Standard,
            location: "Garagem 1".to_string(),
            is_available: true,
        });
        spot.slots = slots.iter()
            .map(|(s, e)| AvailabilitySlot::new(spot.id.clone(), *s, *e, false, None))
            .collect();
        self.state.spot_repo.create(&spot).await.unwrap()
    }

    pub async fn request(&self, method: &str, uri: &str, user_id: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = user_id {
            builder = builder.header("X-User-Id", id);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
        (status, json)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
