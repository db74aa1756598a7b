/// Single-threaded runtime the demo serves from.
pub fn runtime() -> tokio::io::Result<tokio::runtime::Runtime> {
    tracing::debug!(flavor = "current_thread", "Building tokio runtime");
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
