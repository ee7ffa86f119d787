/// Install the global subscriber on stderr. `RUST_LOG` filters, with `info`
/// as the fallback.
pub fn init(json: bool) -> eyre::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
}
