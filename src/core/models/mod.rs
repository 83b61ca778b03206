//! Domain models for `unimate`
//!
//! Each screen of the campus companion owns one record type. Category fields that
//! are drawn from a fixed set are enums that serialize as their display label.

pub mod club;
pub mod community;
pub mod complaint;
pub mod grade;
pub mod job;
pub mod lost_found;
pub mod reminder;

pub use club::{Club, ClubCategory};
pub use community::{Community, Resource};
pub use complaint::{ComplaintKind, EmergencyKind};
pub use grade::{grade_points, GradeRecord};
pub use job::{Job, JobType};
pub use lost_found::{LostFoundCategory, LostFoundItem};
pub use reminder::{Priority, Reminder, ReminderCategory};

/// Declare a closed category set whose variants serialize, display and parse as
/// the given labels. Parsing is exact and case-sensitive.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// Every value of the set, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The label stored in records and compared by category selectors.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(format!(
                        "Unknown {} '{s}' (expected one of: {})",
                        stringify!($name),
                        [$($label),+].join(", ")
                    )),
                }
            }
        }
    };
}

pub(crate) use labeled_enum;
