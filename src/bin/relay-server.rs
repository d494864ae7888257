//! Standalone event relay server.
//!
//! Wires configuration, the HTTP transport, and a logging dispatch
//! callback: every decoded event is written to the structured log. Embed
//! the library and register your own callback to attach real automation.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use event_relay::logging::init_structured_logging;
use event_relay::{EventDispatcher, ListenerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();

    let config = ListenerConfig::from_env().context("invalid listener configuration")?;

    let dispatcher = Arc::new(EventDispatcher::new());
    dispatcher.register_callback(|payload| {
        info!(event_type = %payload.event_type(), "Received lifecycle event");
        Ok(())
    });

    event_relay::web::listen(config, dispatcher)
        .await
        .context("event listener terminated")?;
    Ok(())
}
