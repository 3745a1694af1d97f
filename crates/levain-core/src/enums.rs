//! String-backed enums used in recipe documents.
//!
//! Each enum has:
//! - Serialize as its kebab/lowercase string
//! - Deserialize accepting known variants plus an `Other(String)` catch-all,
//!   so documents written by newer or hand-edited tools still load
//! - `as_str()`, `is_builtin()`, `Display`, `FromStr`

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Macro: defines an enum with known string variants + an Other(String) fallback.
// ---------------------------------------------------------------------------
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident,
        variants: [
            $( ($variant:ident, $str:literal) ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            /// A value this version does not know about.
            Other(String),
        }

        impl $name {
            /// All built-in variants, in declaration order.
            pub const BUILTIN: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Returns the string representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $str, )+
                    Self::Other(s) => s.as_str(),
                }
            }

            /// Returns `true` if this is a built-in (non-`Other`) variant.
            pub fn is_builtin(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from(s))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $str => Self::$variant, )+
                    other => Self::Other(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $( $str => Self::$variant, )+
                    _ => Self::Other(s),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }
    };
}

define_enum! {
    /// The raising agent of a dough.
    ///
    /// Unknown values are kept verbatim and behave like active dry yeast
    /// (scaling factor 1.0).
    LeaveningType, default = ActiveDryYeast,
    variants: [
        (ActiveDryYeast, "active-dry-yeast"),
        (InstantYeast, "instant-yeast"),
        (CakeYeast, "cake-yeast"),
        (SourdoughStarter, "sourdough-starter"),
        (Poolish, "poolish"),
    ]
}

impl LeaveningType {
    /// Potency multiplier relative to active dry yeast.
    pub fn builtin_scaling(&self) -> f64 {
        match self {
            Self::ActiveDryYeast => 1.0,
            Self::InstantYeast => 0.75,
            Self::CakeYeast => 3.0,
            Self::SourdoughStarter => 20.0,
            Self::Poolish => 0.15,
            Self::Other(_) => 1.0,
        }
    }
}

define_enum! {
    /// What an ingredient contributes to the dough. Informational only.
    IngredientType, default = Generic,
    variants: [
        (Flour, "flour"),
        (Water, "water"),
        (Generic, "generic"),
    ]
}
