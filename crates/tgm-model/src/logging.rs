use crate::Result;

/// Initialize tracing output for a process embedding the model.
///
/// Without the `subscriber` feature this is a no-op; the model still emits
/// `tracing` events, they are just not collected here.
pub fn init(service_name: &str) -> Result<()> {
    let _ = service_name;

    #[cfg(feature = "subscriber")]
    {
        use tracing_subscriber::{fmt, EnvFilter};

        // Default: info for the model and the embedding service.
        // Can be overridden with `RUST_LOG`.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("info,tgm_model=info,{service_name}=info"))
        });

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| crate::Error::Config(format!("tracing subscriber: {e}")))?;
    }

    Ok(())
}
