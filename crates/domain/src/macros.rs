//! Macro for implementing Display and FromStr for status enums
//!
//! Generates both conversions from a single variant/string table so the
//! textual form used in logs, config and serde stays in one place.
//!
//! # Example
//!
//! ```rust
//! use eventstatus_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ReviewPhase {
//!     Open,
//!     Closed,
//! }
//!
//! impl_domain_status_conversions!(ReviewPhase {
//!     Open => "open",
//!     Closed => "closed",
//! });
//!
//! assert_eq!(ReviewPhase::Open.to_string(), "open");
//! assert_eq!("CLOSED".parse::<ReviewPhase>().unwrap(), ReviewPhase::Closed);
//! ```

/// Implements Display and FromStr traits for status enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations
///
/// Display writes the mapped string verbatim (mixed case such as
/// `"inReview"` is preserved). Parsing compares ASCII case-insensitively.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
