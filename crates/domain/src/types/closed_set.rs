//! Closed enumerations parsed through lookup tables.
//!
//! Every rules vocabulary (modifiers, skills, dice, creature types...) is a
//! closed set with one canonical external spelling per variant. The
//! `closed_enum!` macro declares the enum together with its lookup table so
//! that all of them share a single parse path and a single error message.

use std::collections::HashMap;

use crate::error::{DomainError, DomainResult};

/// A closed set of variants with canonical external names.
pub trait ClosedSet: Copy + 'static {
    /// Human readable name of the set, used in error messages.
    const KIND: &'static str;

    /// Canonical name to variant table, built once on first use.
    fn lookup() -> &'static HashMap<&'static str, Self>;
}

/// Parse a canonical name (case-insensitive) into a variant of `T`.
pub fn parse_closed<T: ClosedSet>(raw: &str) -> DomainResult<T> {
    let key = raw.trim().to_uppercase();
    T::lookup()
        .get(key.as_str())
        .copied()
        .ok_or_else(|| DomainError::invalid_data(format!("Unknown {}: '{}'", T::KIND, raw)))
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Canonical external name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl $crate::types::closed_set::ClosedSet for $name {
            const KIND: &'static str = $kind;

            fn lookup() -> &'static ::std::collections::HashMap<&'static str, Self> {
                static TABLE: ::once_cell::sync::Lazy<
                    ::std::collections::HashMap<&'static str, $name>,
                > = ::once_cell::sync::Lazy::new(|| {
                    $name::ALL.iter().map(|v| (v.as_str(), *v)).collect()
                });
                &TABLE
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::types::closed_set::parse_closed(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use closed_enum;
