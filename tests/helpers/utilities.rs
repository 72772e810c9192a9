use serde_json::{Value, json};
use std::env;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn init() -> Instant {
    let ci_var = "CI";

    let _ = match env::var_os(ci_var) {
        Some(_) => tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::INFO)
            .with_current_span(true)
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .try_init(),
    };

    Instant::now()
}

pub fn teardown(start_time: Instant, test_name: &str) {
    let elapsed = start_time.elapsed();
    info!("{} seconds for test {}", elapsed.as_secs_f64(), test_name);
}

/// Document as returned by the controller for an existing alert object list.
pub fn controller_document(name: &str, source: &str, objects: &[&str]) -> Value {
    json!({
        "name": name,
        "objects": objects,
        "source": source,
        "tenant_ref": "https://10.10.25.42/api/tenant/admin#admin",
        "url": format!("https://10.10.25.42/api/alertobjectlist/alertobjectlist-{}", name),
        "uuid": format!("alertobjectlist-{}", name),
    })
}
