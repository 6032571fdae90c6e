//! Platform radio implementations and detection

pub mod fallback;
#[cfg(target_os = "linux")]
pub mod linux;

use std::sync::Arc;

use crate::driver::{Advertiser, RadioAdapter};

// ----------------------------------------------------------------------------
// Platform Detection and Factory
// ----------------------------------------------------------------------------

/// Platform-specific radio enum
pub enum PlatformRadio {
    #[cfg(target_os = "linux")]
    Linux(linux::LinuxRadio),
    #[allow(dead_code)]
    Fallback(fallback::FallbackRadio),
}

impl PlatformRadio {
    /// Create the appropriate radio for the current platform
    pub fn new() -> Self {
        #[cfg(target_os = "linux")]
        {
            Self::Linux(linux::LinuxRadio::new())
        }
        #[cfg(not(target_os = "linux"))]
        {
            Self::Fallback(fallback::FallbackRadio::new())
        }
    }
}

impl Default for PlatformRadio {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RadioAdapter for PlatformRadio {
    async fn is_powered(&self) -> bool {
        match self {
            #[cfg(target_os = "linux")]
            Self::Linux(ref radio) => radio.is_powered().await,
            Self::Fallback(ref radio) => radio.is_powered().await,
        }
    }

    async fn advertiser(&self) -> Option<Arc<dyn Advertiser>> {
        match self {
            #[cfg(target_os = "linux")]
            Self::Linux(ref radio) => radio.advertiser().await,
            Self::Fallback(ref radio) => radio.advertiser().await,
        }
    }
}
