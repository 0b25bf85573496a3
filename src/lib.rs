// src/lib.rs
//! Tessera: interned, validated category tokens.
//!
//! A [`TokenRegistry`] turns names like `"pickaxe"` into shared [`Token`]
//! handles, one per name, rejecting anything outside `[a-z_]`. The
//! [`bus`] and [`overlay`] modules model overlay customization events for
//! hosts that want a typed, cancellable dispatch loop.

pub mod bus;
pub mod config;
pub mod error;
pub mod name;
pub mod overlay;
pub mod registry;
pub mod token;
pub mod tool_type;

pub use bus::{Dispatch, EventBus, EventResult, ListenerId, ListenerOptions, LogicalSide, Priority};
pub use config::{EmptyNamePolicy, RegistryConfig};
pub use error::{BusError, InvalidNameError, InvalidNameKind, Result};
pub use name::NameRule;
pub use overlay::{BossBar, BossEventProgress, Chat, DebugText, OverlayEvent, OverlayKind};
pub use registry::{global, install_global, TokenRegistry};
pub use token::Token;
pub use tool_type::ToolType;

/// Install a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`,
/// defaulting to `debug` when the variable is unset or unparsable.
/// Safe to call more than once; later calls are no-ops.
#[cfg(feature = "logging")]
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
