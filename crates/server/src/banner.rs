pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");

    let banner = format!(
        r#"
 ┌─────────────────────────────────────┐
 │  ▶ marquee  ·  popular movies & tv  │
 │    v{:<32}│
 └─────────────────────────────────────┘
"#,
        version
    );

    tracing::info!("{}", banner);
}
