//! SpacePlan Core - persistence and configuration around the pure engine.
//!
//! - [`persistence`]: JSON documents for [`SpaceProgram`](spaceplan_logic::SpaceProgram)
//!   and a directory-backed [`ProgramStore`](persistence::ProgramStore)
//! - [`config`]: `spaceplan.toml` loading and defaults for new programs
//! - [`demo`]: a realistic sample program

pub mod config;
pub mod demo;
pub mod persistence;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::PlannerConfig;
    pub use crate::persistence::{PersistenceError, ProgramStore, ProgramSummary};
    pub use spaceplan_logic::calculator::{SpaceCalculator, SpaceReport};
    pub use spaceplan_logic::remote::{RemoteWorkAnalysis, RemoteWorkAnalyzer};
    pub use spaceplan_logic::{
        Department, RemoteWorkPolicy, SpaceError, SpaceProgram, SupportSpaces,
    };
}
