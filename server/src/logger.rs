use crate::args::Verbosity;

pub fn setup(verbosity: Verbosity) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let span_events = if verbosity.include_spans {
        tracing_subscriber::fmt::format::FmtSpan::NEW | tracing_subscriber::fmt::format::FmtSpan::CLOSE
    } else {
        tracing_subscriber::fmt::format::FmtSpan::NONE
    };

    tracing_subscriber::fmt()
        .with_max_level(verbosity.level)
        .with_span_events(span_events)
        .with_writer(std::io::stderr)
        .try_init()
}
