//! Test harness with testcontainers for integration testing.
//!
//! Uses one shared Postgres container per test binary. The container and
//! migrations are initialized on first use, then reused. Tests isolate their
//! data by creating a fresh church through [`TestHarness::new_church`].

use anyhow::{Context, Result};
use axum::Router;
use platesync_core::common::ChurchId;
use platesync_core::domains::churches::Church;
use platesync_core::kernel::ServerDeps;
use platesync_core::server::build_app;
use sqlx::PgPool;
use std::sync::atomic::{AtomicUsize, Ordering};
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

static CHURCH_SEQ: AtomicUsize = AtomicUsize::new(0);

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        // Run migrations once on the shared database
        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness that manages test infrastructure.
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let church = ctx.new_church().await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: PgPool,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Database pool is automatically dropped
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        Ok(Self { db_pool })
    }

    /// Create a church with an id no other test uses.
    pub async fn new_church(&self) -> ChurchId {
        let seq = CHURCH_SEQ.fetch_add(1, Ordering::SeqCst);
        let id = ChurchId::parse(format!("TEST-{}-{}", std::process::id(), seq))
            .expect("valid church id");
        Church::create(&id, "Test Church", &self.db_pool)
            .await
            .expect("Failed to create test church");
        id
    }

    /// Production dependencies over the test database
    pub fn deps(&self) -> ServerDeps {
        ServerDeps::new(self.db_pool.clone())
    }

    /// Full router over the test database
    pub fn app(&self) -> Router {
        build_app(self.db_pool.clone())
    }
}
