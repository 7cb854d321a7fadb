//! Pure space programming logic for SpacePlan.
//!
//! This crate contains the calculation engine that turns department
//! staffing counts into a rentable square-footage requirement. Functions
//! take plain data and return results, with no file access, no terminal, no
//! clock (apart from stamping a creation date in [`SpaceProgram::new`]).
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`calculator`] | Net → usable → adjusted → rentable conversion pipeline |
//! | [`error`] | Validation and lookup errors |
//! | [`policy`] | Remote-work policies and their area factors (6 keys) |
//! | [`program`] | Departments, support spaces, the program aggregate, validation |
//! | [`remote`] | What-if comparison of every remote-work policy |
//! | [`standards`] | Default per-unit area standards (20 categories) |
//!
//! ```
//! use spaceplan_logic::calculator::SpaceCalculator;
//! use spaceplan_logic::program::{Department, SpaceProgram, WorkspaceTier};
//!
//! let mut program = SpaceProgram::default();
//! program.departments.push(
//!     Department::new("Eng")
//!         .with(WorkspaceTier::StandardWorkstation, 10)
//!         .with(WorkspaceTier::StandardOffice, 2),
//! );
//!
//! let report = SpaceCalculator::new(&program).calculate_totals();
//! assert_eq!(report.totals.total_staff, 12);
//! assert!((report.totals.rentable_sf - 1459.35).abs() < 0.01);
//! ```

pub mod calculator;
pub mod error;
pub mod policy;
pub mod program;
pub mod remote;
pub mod standards;

pub use calculator::{SpaceCalculator, SpaceReport};
pub use error::SpaceError;
pub use policy::RemoteWorkPolicy;
pub use program::{Department, SpaceProgram, SupportSpaces};
pub use remote::{RemoteWorkAnalysis, RemoteWorkAnalyzer};
