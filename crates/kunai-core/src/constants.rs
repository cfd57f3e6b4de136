/// Product identity shared across crates
pub const PRODUCT_NAME: &str = "Kunai";
pub const PRODUCT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// PRODID written on every VCALENDAR the workspace produces (RFC 5545 §3.7.3).
pub const PRODID: &str = const_str::concat!(
    "-//",
    PRODUCT_NAME,
    "//iCalendar Mapper ",
    PRODUCT_VERSION,
    "//EN"
);

/// Environment prefix for configuration overrides (`KUNAI_CODEC__FOLD_LINES`, ...).
pub const ENV_PREFIX: &str = "KUNAI";

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "kunai.toml";
