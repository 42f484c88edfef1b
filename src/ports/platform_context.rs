//! Platform context port.

/// Read-only view of purchase restrictions imposed by the runtime platform.
pub trait PlatformContextProvider: Send + Sync {
    /// True when running inside a mobile app context whose store rules
    /// disallow purchase flows handled outside the store.
    fn is_restricted_mobile_context(&self) -> bool;
}
