//! Platform capability traits for the BLE radio and advertiser
//!
//! The controller never talks to the OS Bluetooth stack directly; it resolves
//! these capabilities per start attempt, so a radio toggled off between calls
//! is observed instead of assumed away.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::payload::{AdvertiseSettings, AdvertisementPayload};

// ----------------------------------------------------------------------------
// Completion Sink
// ----------------------------------------------------------------------------

/// Completion sink for one start request.
///
/// The driver resolves it exactly once: `Ok(())` when the advertisement is on
/// air, `Err(code)` with the platform error code otherwise. The one-shot
/// channel makes double delivery impossible by construction.
pub type StartSink = oneshot::Sender<Result<(), i32>>;

/// Platform error codes reported through [`StartSink`].
pub mod start_failure {
    /// Advertisement payload larger than the platform allows.
    pub const DATA_TOO_LARGE: i32 = 1;
    /// No advertising instance is free.
    pub const TOO_MANY_ADVERTISERS: i32 = 2;
    /// The platform already has this advertisement started.
    pub const ALREADY_STARTED: i32 = 3;
    /// Internal platform failure.
    pub const INTERNAL_ERROR: i32 = 4;
    /// Advertising is not supported on this hardware.
    pub const FEATURE_UNSUPPORTED: i32 = 5;
}

// ----------------------------------------------------------------------------
// Capability Traits
// ----------------------------------------------------------------------------

/// The platform's Bluetooth radio.
#[async_trait]
pub trait RadioAdapter: Send + Sync {
    /// Whether the radio exists and is currently powered on.
    async fn is_powered(&self) -> bool;

    /// Resolve the advertiser capability, `None` when the platform cannot
    /// advertise.
    async fn advertiser(&self) -> Option<Arc<dyn Advertiser>>;
}

/// The platform's BLE advertiser capability.
#[async_trait]
pub trait Advertiser: Send + Sync {
    /// Submit the start request. The outcome is reported through `done`,
    /// exactly once, possibly after this call returns.
    async fn start(
        &self,
        settings: AdvertiseSettings,
        payload: AdvertisementPayload,
        done: StartSink,
    );

    /// Tear down the running advertisement.
    async fn stop(&self) -> Result<(), String>;
}
