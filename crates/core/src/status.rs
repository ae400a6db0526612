//! Construction flags.

/// The `assigned`/`null` flag pair passed to constructors and the factory.
///
/// The three constructor call shapes map onto it as:
/// no flags → [`Status::PRESENT`], one flag → [`Status::assigned`],
/// two flags → [`Status::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status {
    /// Whether the field is present
    pub assigned: bool,
    /// Whether the field is explicitly null
    pub null: bool,
}

impl Status {
    /// Present with a value
    pub const PRESENT: Status = Status {
        assigned: true,
        null: false,
    };

    /// Present and null
    pub const NULL: Status = Status {
        assigned: true,
        null: true,
    };

    /// Absent
    pub const UNASSIGNED: Status = Status {
        assigned: false,
        null: false,
    };

    /// Both flags given
    pub fn new(assigned: bool, null: bool) -> Self {
        Status { assigned, null }
    }

    /// Only the assigned flag given
    pub fn assigned(assigned: bool) -> Self {
        Status {
            assigned,
            null: false,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::PRESENT
    }
}
