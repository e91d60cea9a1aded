//! faultline-cli: drives a short production-like scenario.
//!
//! 直接呼び出しのシミュレータを一通り叩き、バックグラウンドタスクを
//! 全種類起動して完了をポーリングで待ち、最後に掃除して集計を表示します。
//! 失敗は全て Capture Gateway 経由で報告されます。

use std::sync::Arc;

use tokio::time::{Duration, sleep};
use tracing_subscriber::EnvFilter;

use faultline_core::backend::{BackendFailureRates, SimulatedBackend};
use faultline_core::capture::{CaptureGateway, Level, Reporter};
use faultline_core::config::{AppConfig, StorageMode};
use faultline_core::domain::NewUser;
use faultline_core::fault::FaultProfile;
use faultline_core::ports::{SystemClock, ThreadEntropy, UlidGenerator};
use faultline_core::sim::Simulators;
use faultline_core::store::{EntityStore, InMemoryUserStore, MockUserStore};
use faultline_core::tasks::{TaskArgs, TaskKind, TaskRegistry};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load configuration: {e}");
            return;
        }
    };
    tracing::info!(
        environment = config.environment(),
        storage = ?config.storage,
        "starting faultline scenario"
    );

    // (A) ports と capture gateway を構築
    let entropy = Arc::new(ThreadEntropy);
    let clock = Arc::new(SystemClock);
    let capture: Arc<dyn CaptureGateway> = Arc::new(Reporter::from_config(
        config.capture_dsn.as_deref(),
        config.environment(),
    ));

    let store: Arc<dyn EntityStore> = match config.storage {
        StorageMode::Memory => Arc::new(InMemoryUserStore::seeded(clock.clone()).await),
        StorageMode::Mock => Arc::new(MockUserStore::new(clock.clone(), entropy.clone())),
    };

    let backend = Arc::new(SimulatedBackend::new(
        config.external_api_base_url.clone(),
        entropy.clone(),
        BackendFailureRates::default(),
    ));

    // デモなので遅延は 1/20 に縮めて回す
    let profile = FaultProfile::default().with_latency_scale(0.05);
    let sims = Arc::new(Simulators::new(
        entropy.clone(),
        clock.clone(),
        backend,
        profile,
    ));

    // (B) 直接呼び出しのシミュレータを一巡
    run_direct_simulations(&sims, &capture, config.timeout_seconds).await;

    // (C) エンティティストアの基本操作
    exercise_entity_store(store.as_ref(), &capture).await;

    // (D) バックグラウンドタスクを全種類起動してポーリング
    let registry = TaskRegistry::new(
        sims,
        Arc::new(UlidGenerator::new(SystemClock)),
        clock,
        capture.clone(),
    );

    let mut ids = Vec::new();
    for kind in TaskKind::ALL {
        match registry.start_task(kind.name(), TaskArgs::default()).await {
            Ok(id) => {
                tracing::info!(task = %kind, id = %id, "task started");
                ids.push(id);
            }
            Err(e) => tracing::error!(task = %kind, "failed to start: {e}"),
        }
    }

    loop {
        let counts = registry.counts().await;
        if counts.pending == 0 {
            tracing::info!(
                completed = counts.completed,
                failed = counts.failed,
                "all tasks reached a terminal state"
            );
            break;
        }
        sleep(Duration::from_millis(100)).await;
    }

    for id in &ids {
        if let Ok(view) = registry.get_task_status(*id).await {
            tracing::info!(id = %id, status = ?view.status, error = ?view.error, "task finished");
        }
    }

    let removed = registry.cleanup_completed_tasks().await;
    tracing::info!(removed, "cleaned up terminal task records");

    capture.report_message("faultline scenario finished", Level::Info);
}

async fn run_direct_simulations(
    sims: &Simulators,
    capture: &Arc<dyn CaptureGateway>,
    timeout_secs: u64,
) {
    report_on_error(capture, sims.validate_email("user@example.com").await, "validate_email");
    report_on_error(
        capture,
        sims.calculate_discount(100.0, 10.0, "vip").await,
        "calculate_discount",
    );
    report_on_error(
        capture,
        sims.process_payment("4242424242424242", 125.0).await,
        "process_payment",
    );
    report_on_error(capture, sims.send_notification(42, "hello").await, "send_notification");
    report_on_error(capture, sims.fetch_weather_data("Tokyo").await, "fetch_weather_data");
    report_on_error(
        capture,
        sims.call_external_api("/json", timeout_secs).await,
        "call_external_api",
    );
}

async fn exercise_entity_store(store: &dyn EntityStore, capture: &Arc<dyn CaptureGateway>) {
    match store.create(NewUser::new("demo@example.com", "Demo User")).await {
        Ok(user) => tracing::info!(id = user.id, "created user"),
        Err(e) => {
            capture.report_exception(&e);
            tracing::warn!("user creation failed: {e}");
        }
    }
    match store.list().await {
        Ok(users) => tracing::info!(count = users.len(), "listed users"),
        Err(e) => {
            capture.report_exception(&e);
            tracing::warn!("user listing failed: {e}");
        }
    }
}

fn report_on_error<T: std::fmt::Debug>(
    capture: &Arc<dyn CaptureGateway>,
    result: Result<T, faultline_core::domain::FaultError>,
    what: &str,
) {
    match result {
        Ok(report) => tracing::info!(simulator = what, ?report, "simulation succeeded"),
        Err(e) => {
            // fail path は必ず capture へ報告してから記録する
            capture.report_exception(&e);
            tracing::warn!(simulator = what, "simulation failed: {e}");
        }
    }
}
