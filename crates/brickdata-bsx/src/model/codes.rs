// crates/brickdata-bsx/src/model/codes.rs

//! Fixed enumerated codes used by item fields and the item view.
//!
//! The code strings come from BrickStock (`bricklink.h` / `bricklink.cpp`).

use crate::error::BsxError;
use serde::{Deserialize, Serialize};

/// Declares a closed code enum with `code`, `from_code` and `ALL`.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The fixed wire code.
            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Looks a variant up by its wire code.
            pub fn from_code(code: &str) -> Result<Self, BsxError> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(BsxError::UnknownCode {
                        code_type: $label,
                        value: code.into(),
                    }),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl core::str::FromStr for $name {
            type Err = BsxError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::from_code(s)
            }
        }
    };
}

code_enum! {
    /// Lot status (`<Status>`).
    Status, "Status" {
        Include => "I",
        Exclude => "X",
        Extra => "E",
        Unknown => "?",
    }
}

code_enum! {
    /// Item condition (`<Condition>`).
    Condition, "Condition" {
        New => "N",
        Used => "U",
    }
}

code_enum! {
    /// Completeness of a set (`<SubCondition>`).
    SubCondition, "SubCondition" {
        None => "?",
        Complete => "C",
        Incomplete => "I",
        /// Mint in sealed box.
        Misb => "M",
    }
}

code_enum! {
    /// Sort direction of the item view (`<SortDirection>`).
    SortDirection, "SortDirection" {
        Ascending => "A",
        Descending => "D",
    }
}
