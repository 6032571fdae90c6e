//! Fallback radio for platforms without BLE advertising support

use std::sync::Arc;

use tracing::warn;

use crate::driver::{Advertiser, RadioAdapter};

// ----------------------------------------------------------------------------
// Fallback Implementation
// ----------------------------------------------------------------------------

/// Radio stand-in for unsupported platforms; always reports the radio absent.
pub struct FallbackRadio;

impl FallbackRadio {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FallbackRadio {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RadioAdapter for FallbackRadio {
    async fn is_powered(&self) -> bool {
        warn!(
            "BLE advertising not supported on this platform. This device will not be \
            discoverable. Consider using a supported platform (Linux with BlueZ)."
        );
        false
    }

    async fn advertiser(&self) -> Option<Arc<dyn Advertiser>> {
        None
    }
}
