//! Advertising settings and payload types

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ----------------------------------------------------------------------------
// Settings
// ----------------------------------------------------------------------------

/// Discovery-latency bias for the advertisement duty cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvertiseMode {
    /// Infrequent broadcasts, minimal battery drain.
    LowPower,
    /// Middle ground between latency and battery.
    Balanced,
    /// Fastest discovery by nearby scanners.
    LowLatency,
}

impl AdvertiseMode {
    /// Advertising interval requested from the platform.
    pub fn interval(&self) -> Duration {
        match self {
            Self::LowPower => Duration::from_millis(1000),
            Self::Balanced => Duration::from_millis(250),
            Self::LowLatency => Duration::from_millis(100),
        }
    }
}

/// Radiated power bias for the advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxPowerLevel {
    Low,
    Medium,
    High,
}

impl TxPowerLevel {
    /// Requested transmit power in dBm.
    pub fn dbm(&self) -> i16 {
        match self {
            Self::Low => -15,
            Self::Medium => -7,
            Self::High => 1,
        }
    }
}

/// Settings applied to one advertising session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertiseSettings {
    /// Discovery-latency bias.
    pub mode: AdvertiseMode,
    /// Transmit power bias.
    pub tx_power: TxPowerLevel,
    /// Whether the advertisement accepts inbound connections.
    pub connectable: bool,
}

impl Default for AdvertiseSettings {
    /// Fastest discovery, strongest broadcast, presence only.
    fn default() -> Self {
        Self {
            mode: AdvertiseMode::LowLatency,
            tx_power: TxPowerLevel::High,
            connectable: false,
        }
    }
}

impl AdvertiseSettings {
    /// Create settings with the default broadcast policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the discovery-latency bias.
    pub fn with_mode(mut self, mode: AdvertiseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the transmit power bias.
    pub fn with_tx_power(mut self, tx_power: TxPowerLevel) -> Self {
        self.tx_power = tx_power;
        self
    }

    /// Allow or forbid inbound connections.
    pub fn with_connectable(mut self, connectable: bool) -> Self {
        self.connectable = connectable;
        self
    }
}

// ----------------------------------------------------------------------------
// Payload
// ----------------------------------------------------------------------------

/// Payload broadcast for one advertising session. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisementPayload {
    /// Derived identifier attached as a service UUID.
    pub service_uuid: Uuid,
    /// Whether the device's human-readable name is included.
    pub include_device_name: bool,
}

impl AdvertisementPayload {
    /// Build the payload for a session identified by `service_uuid`.
    pub fn new(service_uuid: Uuid) -> Self {
        Self {
            service_uuid,
            include_device_name: true,
        }
    }
}
