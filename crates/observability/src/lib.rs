//! Tracing setup shared by storefront binaries.

/// Initialize process-wide tracing with JSON output.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;

#[cfg(test)]
mod tests {
    #[test]
    fn default_init_can_be_repeated() {
        super::init();
        super::init();
        ::tracing::debug!("subscriber installed once");
    }
}
