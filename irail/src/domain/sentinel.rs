//! Literal sentinel strings of the iRail wire format.
//!
//! iRail encodes several flags as magic strings instead of typed values.
//! They are matched exactly as written here.

/// `platforminfo.normal` value meaning the platform is the scheduled one.
pub const PLATFORM_NORMAL: &str = "1";

/// `delay` value meaning the train runs on time.
pub const DELAY_ON_TIME: &str = "0";

/// `delay` value meaning the train is cancelled.
pub const DELAY_CANCELLED: &str = "cancel";

/// `canceled` value meaning the stop is cancelled.
pub const CANCELED_FLAG: &str = "1";

/// Via id of the implicit first transfer, which has no vehicle-change banner.
pub const PLACEHOLDER_VIA_ID: &str = "0";
