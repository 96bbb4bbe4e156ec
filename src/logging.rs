use tracing_subscriber::EnvFilter;

/// 로그 레벨 결정: RUST_LOG > --debug > 기본(warn)
pub fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

/// tracing subscriber 초기화 (stderr, compact)
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(debug)));

    // 이미 초기화된 경우(테스트 등)는 무시
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
