use serde::{Deserialize, Serialize};

use super::ModelError;

/// Wire code every choice field uses for "asked, no evidence".
pub const UNKNOWN_CODE: &str = "unknown";

/// Macro to generate a form choice with as_str + std::str::FromStr pattern.
///
/// Every choice carries an explicit `Unknown` variant, which is also its
/// default (an untouched select box).
macro_rules! choice_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant,)+
            #[default]
            #[serde(rename = "unknown")]
            Unknown,
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s,)+
                    Self::Unknown => UNKNOWN_CODE,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant),)+
                    UNKNOWN_CODE => Ok(Self::Unknown),
                    _ => Err(ModelError::InvalidChoice {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum!(Breathing {
    Yes => "yes",
    No => "no",
    Abnormal => "abnormal",
});

choice_enum!(Consciousness {
    Yes => "yes",
    No => "no",
});

choice_enum!(Bleeding {
    None => "none",
    Mild => "mild",
    Severe => "severe",
});

// chest_pain, vomiting, dizziness
choice_enum!(YesNo {
    Yes => "yes",
    No => "no",
});

choice_enum!(PainLevel {
    None => "none",
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});
