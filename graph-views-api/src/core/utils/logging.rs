use tracing_subscriber::{
    fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::new(format!(
        "graph_views={},graph_views_api={}",
        log_level, log_level
    ))
}

pub fn init_global_logger(log_level: String) {
    if let Err(err) = tracing_subscriber::registry()
        .with(fmt::layer().pretty().with_span_events(FmtSpan::NONE))
        .with(get_log_env(log_level))
        .try_init()
    {
        eprintln!(
            "Failed to initialize global logger. This might be due to a global subscriber already being set: {}",
            err
        );
    }
}

pub fn global_info_logger() {
    init_global_logger("INFO".to_string())
}
