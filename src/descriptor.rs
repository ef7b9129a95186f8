//! Enum descriptors - static member tables behind lookup enums
//!
//! Instead of inspecting types at runtime, every lookup enum carries an
//! explicit declaration-order table of `(name, value, description)` entries.
//! The [`lookup_enum!`] macro declares the enum and its table in one place,
//! so macro-declared enums are well-formed by construction; hand-built
//! descriptors go through [`EnumDescriptor::validate`] before seeding.

use serde::Serialize;

use crate::{Error, Result};

/// Underlying integer representation declared for an enumeration.
///
/// Only `I32` is seedable; everything else is rejected up front because the
/// lookup table's primary key is a plain 32-bit signed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Repr {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl Repr {
    /// Get the string representation of the repr
    pub fn as_str(&self) -> &'static str {
        match self {
            Repr::I8 => "repr(i8)",
            Repr::I16 => "repr(i16)",
            Repr::I32 => "repr(i32)",
            Repr::I64 => "repr(i64)",
            Repr::U8 => "repr(u8)",
            Repr::U16 => "repr(u16)",
            Repr::U32 => "repr(u32)",
            Repr::U64 => "repr(u64)",
        }
    }
}

impl std::fmt::Display for Repr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single enumeration member as declared in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Symbolic name, e.g. `Brilliant`
    pub name: &'static str,
    /// Declared integer value. Carried wide so that out-of-range declarations
    /// are representable and rejectable instead of silently truncated.
    pub value: i64,
    /// Human-readable annotation; empty when the declaration carries none
    pub description: &'static str,
}

/// Descriptor of a closed enumeration: its name, its declared representation,
/// and its members in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumDescriptor {
    /// Type name of the enumeration, e.g. `Rating`
    pub type_name: &'static str,
    /// Declared underlying representation
    pub repr: Repr,
    /// Members in declaration order
    pub members: &'static [EnumMember],
}

impl EnumDescriptor {
    /// Check that this descriptor describes a genuine, seedable enumeration.
    ///
    /// Checks run in a fixed order and the first violation wins:
    /// closed-enumeration shape (non-empty, unique names, unique values),
    /// then representation (`repr(i32)` only), then per-member value range
    /// (strictly positive, fitting the declared representation). Zero stays
    /// reserved for the "unset" state on dependent records.
    pub fn validate(&self) -> Result<()> {
        if self.members.is_empty() {
            return Err(self.invalid("member list is empty"));
        }

        let mut seen_names = std::collections::HashSet::new();
        let mut seen_values = std::collections::HashSet::new();
        for member in self.members {
            if !seen_names.insert(member.name) {
                return Err(self.invalid(&format!("duplicate member name `{}`", member.name)));
            }
            if !seen_values.insert(member.value) {
                return Err(self.invalid(&format!("duplicate member value {}", member.value)));
            }
        }

        if self.repr != Repr::I32 {
            return Err(Error::UnsupportedUnderlyingType {
                type_name: self.type_name.to_string(),
                repr: self.repr,
            });
        }

        for member in self.members {
            if member.value <= 0 {
                return Err(Error::NonPositiveValue {
                    type_name: self.type_name.to_string(),
                    member: member.name.to_string(),
                    value: member.value,
                });
            }
            if member.value > i64::from(i32::MAX) {
                return Err(self.invalid(&format!(
                    "member `{}` has value {} which does not fit repr(i32)",
                    member.name, member.value
                )));
            }
        }

        Ok(())
    }

    /// Find the member declared for `value`, if any
    pub fn member_by_value(&self, value: i32) -> Option<&'static EnumMember> {
        self.members.iter().find(|m| m.value == i64::from(value))
    }

    /// Find the member with the given symbolic name, if any
    pub fn member_by_name(&self, name: &str) -> Option<&'static EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }

    fn invalid(&self, reason: &str) -> Error {
        Error::InvalidType {
            type_name: self.type_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Implemented by `#[repr(i32)]` enums that back a lookup table.
///
/// Use [`lookup_enum!`] to declare the enum and this impl together.
pub trait LookupEnum: Copy + Sized + 'static {
    /// The declaration-order member table for this enumeration
    fn descriptor() -> &'static EnumDescriptor;

    /// The underlying integer carried by `self`
    fn value(self) -> i32;

    /// Resolve an integer back to a member, if one is declared for it
    fn from_value(value: i32) -> Option<Self>;

    /// Symbolic name of `self`, from the member table
    fn name(self) -> &'static str {
        Self::descriptor()
            .member_by_value(self.value())
            .map(|m| m.name)
            .unwrap_or("")
    }

    /// Description annotation of `self`; empty when the declaration carries none
    fn description(self) -> &'static str {
        Self::descriptor()
            .member_by_value(self.value())
            .map(|m| m.description)
            .unwrap_or("")
    }
}

/// Declare a `#[repr(i32)]` enumeration together with its lookup descriptor.
///
/// Every variant takes an explicit value and, optionally, a description
/// literal after a comma. Variants without one get the empty string, matching
/// what ends up in the `description` column.
///
/// ```
/// lookupseed::lookup_enum! {
///     pub enum Rating {
///         Brilliant = 1, "Something really good";
///         Good = 2;
///         Average = 3;
///         Bad = 4;
///         Terrible = 5, "Something really bad";
///     }
/// }
///
/// use lookupseed::LookupEnum;
/// assert_eq!(Rating::Bad.value(), 4);
/// assert_eq!(Rating::from_value(5), Some(Rating::Terrible));
/// assert_eq!(Rating::Good.description(), "");
/// ```
#[macro_export]
macro_rules! lookup_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident = $value:literal $(, $desc:literal)? );+ $(;)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $variant = $value ),+
        }

        impl $crate::LookupEnum for $name {
            fn descriptor() -> &'static $crate::EnumDescriptor {
                static DESCRIPTOR: $crate::EnumDescriptor = $crate::EnumDescriptor {
                    type_name: stringify!($name),
                    repr: $crate::Repr::I32,
                    members: &[
                        $(
                            $crate::EnumMember {
                                name: stringify!($variant),
                                value: $value,
                                description: $crate::lookup_enum!(@desc $($desc)?),
                            }
                        ),+
                    ],
                };
                &DESCRIPTOR
            }

            fn value(self) -> i32 {
                self as i32
            }

            fn from_value(value: i32) -> Option<Self> {
                match value {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }
        }
    };

    (@desc) => {
        ""
    };
    (@desc $desc:literal) => {
        $desc
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::lookup_enum! {
        enum Rating {
            Brilliant = 1, "Something really good";
            Good = 2;
            Average = 3;
            Bad = 4;
            Terrible = 5, "Something really bad";
            Jarl = 6;
        }
    }

    #[test]
    fn test_generated_descriptor_is_valid() {
        let desc = Rating::descriptor();
        desc.validate().unwrap();

        assert_eq!(desc.type_name, "Rating");
        assert_eq!(desc.repr, Repr::I32);
        assert_eq!(desc.members.len(), 6);
        assert_eq!(desc.members[0].name, "Brilliant");
        assert_eq!(desc.members[0].value, 1);
        assert_eq!(desc.members[5].name, "Jarl");
    }

    #[test]
    fn test_value_resolution_roundtrip() {
        for member in Rating::descriptor().members {
            let rating = Rating::from_value(member.value as i32).unwrap();
            assert_eq!(i64::from(rating.value()), member.value);
            assert_eq!(rating.name(), member.name);
        }
        assert_eq!(Rating::from_value(0), None);
        assert_eq!(Rating::from_value(99), None);
    }

    #[test]
    fn test_description_annotation() {
        assert_eq!(Rating::Brilliant.description(), "Something really good");
        assert_eq!(Rating::Terrible.description(), "Something really bad");
        assert_eq!(Rating::Good.description(), "");
    }

    #[test]
    fn test_validate_rejects_empty_member_list() {
        let desc = EnumDescriptor {
            type_name: "Empty",
            repr: Repr::I32,
            members: &[],
        };
        assert!(matches!(
            desc.validate(),
            Err(crate::Error::InvalidType { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_values() {
        let desc = EnumDescriptor {
            type_name: "Dup",
            repr: Repr::I32,
            members: &[
                EnumMember { name: "A", value: 1, description: "" },
                EnumMember { name: "B", value: 1, description: "" },
            ],
        };
        assert!(matches!(
            desc.validate(),
            Err(crate::Error::InvalidType { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_wide_repr() {
        let desc = EnumDescriptor {
            type_name: "Wide",
            repr: Repr::I64,
            members: &[EnumMember { name: "A", value: 1, description: "" }],
        };
        assert!(matches!(
            desc.validate(),
            Err(crate::Error::UnsupportedUnderlyingType { .. })
        ));

        let unsigned = EnumDescriptor {
            type_name: "Unsigned",
            repr: Repr::U32,
            members: &[EnumMember { name: "A", value: 1, description: "" }],
        };
        assert!(matches!(
            unsigned.validate(),
            Err(crate::Error::UnsupportedUnderlyingType { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_values() {
        static ZERO: &[EnumMember] = &[EnumMember { name: "Worst", value: 0, description: "" }];
        static NEGATIVE: &[EnumMember] = &[EnumMember { name: "Worst", value: -1, description: "" }];

        for (members, bad) in [(ZERO, 0), (NEGATIVE, -1)] {
            let desc = EnumDescriptor {
                type_name: "Bad",
                repr: Repr::I32,
                members,
            };
            match desc.validate() {
                Err(crate::Error::NonPositiveValue { member, value, .. }) => {
                    assert_eq!(member, "Worst");
                    assert_eq!(value, bad);
                }
                other => panic!("expected NonPositiveValue, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_values_wider_than_i32() {
        const HUGE: i64 = i32::MAX as i64 + 1;
        let desc = EnumDescriptor {
            type_name: "Overflow",
            repr: Repr::I32,
            members: &[EnumMember { name: "Huge", value: HUGE, description: "" }],
        };
        assert!(matches!(
            desc.validate(),
            Err(crate::Error::InvalidType { .. })
        ));
    }

    #[test]
    fn test_member_lookup() {
        let desc = Rating::descriptor();
        assert_eq!(desc.member_by_value(4).unwrap().name, "Bad");
        assert_eq!(desc.member_by_value(7), None);
        assert_eq!(desc.member_by_name("Average").unwrap().value, 3);
        assert_eq!(desc.member_by_name("Missing"), None);
    }
}
