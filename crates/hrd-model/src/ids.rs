#![deny(unsafe_code)]

use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of a country record.
    CountryId
);
record_id!(
    /// Identifier of a state record.
    StateId
);
record_id!(
    /// Identifier of a city record.
    CityId
);
record_id!(
    /// Identifier of a department record.
    DepartmentId
);
record_id!(
    /// Identifier of an employee record.
    EmployeeId
);
record_id!(
    /// Identifier of a team record.
    TeamId
);
record_id!(
    /// Identifier of a user account owned by the excluded auth layer.
    UserId
);
