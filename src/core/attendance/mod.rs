//! Subject roster and attendance ledger
//!
//! The roster is allocated once per process from [`AllocationRules`]; the
//! ledger lives in memory only and is discarded at exit.

pub mod allocator;
pub mod register;
pub mod summary;

pub use allocator::{AllocationRules, Elective, Roster};
pub use register::{AttendanceLedger, AttendanceRegister};
pub use summary::{
    LearnerAttendance, LearnerSessions, SchoolAttendance, SeatUsage, SubjectAttendance,
    SubjectSessions, SubjectTotals,
};
