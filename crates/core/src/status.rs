//! Status helper enums mapping to SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding lookup table created by the initial migration.

use serde::Serialize;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Resolve a database status ID, `None` for ids outside the seed data.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( $val => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Lowercase name as stored in the lookup table's `name` column.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_status_enum! {
    /// Student academic status.
    StudentStatus {
        Active = 1 => "active",
        Inactive = 2 => "inactive",
        Graduated = 3 => "graduated",
    }
}

define_status_enum! {
    /// Enrollment record lifecycle. Only `Enrolled` is ever written by the core.
    EnrollmentStatus {
        Enrolled = 1 => "enrolled",
        Completed = 2 => "completed",
        Dropped = 3 => "dropped",
    }
}

define_status_enum! {
    /// Outcome recorded in a course history row.
    CourseHistoryStatus {
        Passed = 1 => "passed",
        Failed = 2 => "failed",
    }
}

define_status_enum! {
    /// Course kind.
    CourseType {
        Core = 1 => "core",
        Elective = 2 => "elective",
    }
}

define_status_enum! {
    /// Half of the academic year a course or term belongs to.
    SemesterOrder {
        Fall = 1 => "fall",
        Spring = 2 => "spring",
    }
}
