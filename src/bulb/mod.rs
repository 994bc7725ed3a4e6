// bulb/mod.rs
mod shelly;
pub use shelly::ShellyBulb;

use crate::error::TransportError;

/// Anything that can receive an RGB color. The HTTP handler only talks to
/// this trait; `ShellyBulb` is the real network-backed implementation.
#[async_trait::async_trait]
pub trait ColorSink: Send + Sync {
    async fn set_color(&self, red: u8, green: u8, blue: u8) -> Result<(), TransportError>;
}
