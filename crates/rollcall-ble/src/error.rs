//! Error types for the advertising controller

use thiserror::Error;

// ----------------------------------------------------------------------------
// Error Types
// ----------------------------------------------------------------------------

/// Failures of a `start_advertising` attempt.
///
/// Each attempt resolves exactly once, to success or to one of these.
#[derive(Error, Debug)]
pub enum StartError {
    /// Bluetooth radio absent or powered off.
    #[error("Bluetooth is not enabled")]
    RadioUnavailable,

    /// The platform exposes no BLE advertiser.
    #[error("BLE advertising not supported on this device")]
    AdvertiserUnsupported,

    /// The platform rejected or aborted the start request.
    #[error("Failed to start advertising: {0}")]
    AdvertiseStartFailed(i32),

    /// Another session is pending or active on this controller.
    #[error("An advertising session is already pending or active")]
    SessionAlreadyPending,

    /// The driver dropped the completion sink without reporting an outcome.
    #[error("Advertising driver went away before reporting an outcome")]
    DriverGone,
}

impl StartError {
    /// Stable tag surfaced across the host boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RadioUnavailable => "BLUETOOTH_NOT_ENABLED",
            Self::AdvertiserUnsupported => "ADVERTISER_NOT_AVAILABLE",
            Self::AdvertiseStartFailed(_) | Self::DriverGone => "ADVERTISE_FAILED",
            Self::SessionAlreadyPending => "SESSION_ALREADY_PENDING",
        }
    }
}

/// Failures of a `stop_advertising` attempt.
///
/// Stopping an inactive session is not an error; it reports `false` instead.
#[derive(Error, Debug)]
pub enum StopError {
    /// The platform raised an error while tearing the advertisement down.
    #[error("Failed to stop advertising: {0}")]
    StopFailed(String),
}

impl StopError {
    /// Stable tag surfaced across the host boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StopFailed(_) => "STOP_ADVERTISE_FAILED",
        }
    }
}
