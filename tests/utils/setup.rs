use super::{request::RequestBuilder, user::User};
use chrono::{Duration, Utc};
use entity::{event_locations, locations, provinces, users};
use eventos_backend::State;
use http::StatusCode;
use migration::{Migrator, MigratorTrait};
use reqwest::Client;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DbConn, EntityTrait, Set};
use serde_json::{json, Value};
use std::{
    env,
    net::SocketAddr,
    sync::atomic::{AtomicU64, Ordering},
};
use tokio::net::TcpListener;

static USER_NUM: AtomicU64 = AtomicU64::new(0);

/// A freshly migrated in-memory database with the service running against it
/// on an ephemeral port. Tests talk to it over real HTTP and may also reach
/// into `db` directly to seed rows or assert on stored state.
pub struct App {
    addr: SocketAddr,
    client: Client,
    pub db: DbConn,
}

impl App {
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        if env::var("JWT_SECRET").is_err() {
            env::set_var("JWT_SECRET", "test-secret");
        }

        // a single pooled connection keeps every handle on the same
        // in-memory database
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);

        let db = Database::connect(opts)
            .await
            .expect("failed to open database");

        Migrator::fresh(&db).await.expect("failed to run migrations");

        let state = State::with_database(db.clone()).await;

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind listener");
        let addr = listener.local_addr().expect("failed to get local address");

        tokio::spawn(async move {
            eventos_backend::run(listener, state)
                .await
                .expect("server exited with error");
        });

        Self {
            addr,
            client: Client::new(),
            db,
        }
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(format!("http://{}{}", self.addr, url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(format!("http://{}{}", self.addr, url)))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(format!("http://{}{}", self.addr, url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(format!("http://{}{}", self.addr, url)))
    }

    /// Registers a fresh user through the API and logs them in.
    pub async fn register_user(&self) -> User {
        let number = USER_NUM.fetch_add(1, Ordering::Relaxed);
        let username = format!("user{number}@example.com");

        let res = self
            .post("/api/user/register")
            .json(&json!({
                "first_name": "Test",
                "last_name": "User",
                "username": username,
                "password": "pass123",
            }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        self.login(&username, "pass123").await
    }

    pub async fn login(&self, username: &str, password: &str) -> User {
        let res = self
            .post("/api/user/login")
            .json(&json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        let token = body["token"].as_str().expect("no token in response");

        let user = users::Entity::find_by_username(username)
            .one(&self.db)
            .await
            .expect("failed to query user")
            .expect("user not in database");

        User::new(user.id, username.to_owned(), token.to_owned())
    }

    /// Seeds a province, a location and a venue owned by `owner`.
    pub async fn create_event_location(
        &self,
        owner: &User,
        max_capacity: i32,
    ) -> event_locations::Model {
        let province = provinces::ActiveModel {
            name: Set("Buenos Aires".to_owned()),
            full_name: Set("Provincia de Buenos Aires".to_owned()),
            latitude: Set(-34.61),
            longitude: Set(-58.38),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("failed to insert province");

        let location = locations::ActiveModel {
            name: Set("Villa Crespo".to_owned()),
            id_province: Set(province.id),
            latitude: Set(-34.6),
            longitude: Set(-58.44),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("failed to insert location");

        event_locations::ActiveModel {
            id_location: Set(location.id),
            name: Set("Club Deportivo".to_owned()),
            full_address: Set("Av. Corrientes 5500".to_owned()),
            max_capacity: Set(max_capacity),
            latitude: Set(-34.6),
            longitude: Set(-58.44),
            id_creator_user: Set(owner.id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("failed to insert event location")
    }

    /// Creates an event through the API and returns the response body.
    /// `overrides` is merged over a sensible default payload.
    pub async fn create_event(&self, owner: &User, location_id: i32, overrides: Value) -> Value {
        let mut body = json!({
            "name": "Concierto de Jazz",
            "description": "Una noche de jazz en vivo",
            "id_event_location": location_id,
            "start_date": days_from_now(1),
            "duration_in_minutes": 120,
            "price": 1500.0,
            "enabled_for_enrollment": true,
            "max_assistance": 10,
        });
        merge(&mut body, &overrides);

        let res = self.post("/api/event").user(owner).json(&body).send().await;
        assert_eq!(res.status(), StatusCode::CREATED);

        res.json().await
    }
}

fn merge(base: &mut Value, overrides: &Value) {
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }
}

pub fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

/// Today's date with a start time that is still in the future, which must
/// not matter: the enrollment freeze is per calendar day.
pub fn later_today() -> String {
    format!("{}T23:59:00", Utc::now().date_naive())
}
