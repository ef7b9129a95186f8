//! # Lookupseed - Enum-backed lookup tables for SQLite
//!
//! A fixed, code-defined enumeration is mirrored into a reference table so
//! that dependent records can carry a plain integer foreign key while their
//! public API deals in the enumeration type.
//!
//! Lookupseed provides:
//! - Static member tables for `#[repr(i32)]` enums, declared with [`lookup_enum!`]
//! - An idempotent, additive-only seeder that reconciles a lookup table
//!   against its enumeration
//! - A typed foreign-key projection ([`LookupCode`]) over the stored integer
//! - SQLite-backed storage for the seeded rows

pub mod code;
pub mod config;
pub mod descriptor;
pub mod row;
pub mod seed;
pub mod storage;

// Re-exports for convenient access
pub use code::LookupCode;
pub use descriptor::{EnumDescriptor, EnumMember, LookupEnum, Repr};
pub use row::LookupRow;
pub use seed::{LookupStore, reconcile, reconcile_enum};
pub use storage::SqliteLookupStore;

/// Result type alias for lookupseed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lookupseed operations
///
/// The first three are configuration mistakes in an enumeration declaration.
/// They abort a reconciliation pass before anything is staged and are not
/// expected once the enumeration compiles in its final shape.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{type_name}` does not describe a closed enumeration: {reason}")]
    InvalidType { type_name: String, reason: String },

    #[error("`{type_name}` is declared {repr}; lookup enums must use a plain 32-bit signed representation")]
    UnsupportedUnderlyingType {
        type_name: String,
        repr: descriptor::Repr,
    },

    #[error("member `{type_name}::{member}` has value {value}; lookup ids must be strictly positive")]
    NonPositiveValue {
        type_name: String,
        member: String,
        value: i64,
    },

    #[error("`{0}` is not a valid lookup table name")]
    InvalidTableName(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
