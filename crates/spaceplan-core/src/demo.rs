//! Demo program — a mid-size headquarters used by the `demo` command and
//! the integration tests.

use spaceplan_logic::program::{
    Department, SpaceProgram, SupportCategory, SupportSpaces, WorkspaceTier,
};
use spaceplan_logic::RemoteWorkPolicy;

/// Acme Technologies' headquarters relocation program.
pub fn demo_program() -> SpaceProgram {
    use WorkspaceTier::*;

    let departments = vec![
        Department::new("Executive Leadership")
            .with(ExecutiveOffice, 5)
            .with(LargeOffice, 3)
            .with(StandardOffice, 2),
        Department::new("Finance & Accounting")
            .with(StandardOffice, 4)
            .with(SmallOffice, 2)
            .with(StandardWorkstation, 12),
        Department::new("Human Resources")
            .with(StandardOffice, 2)
            .with(SmallOffice, 3)
            .with(StandardWorkstation, 8),
        Department::new("Marketing & Sales")
            .with(LargeOffice, 2)
            .with(StandardOffice, 6)
            .with(StandardWorkstation, 20)
            .with(OpenWorkstation, 15),
        Department::new("Engineering")
            .with(LargeOffice, 4)
            .with(StandardOffice, 8)
            .with(LargeWorkstation, 25)
            .with(StandardWorkstation, 35),
        Department::new("Product Management")
            .with(StandardOffice, 6)
            .with(StandardWorkstation, 12),
        Department::new("Customer Success")
            .with(SmallOffice, 2)
            .with(StandardWorkstation, 18)
            .with(OpenWorkstation, 10),
        Department::new("IT & Operations")
            .with(StandardOffice, 3)
            .with(StandardWorkstation, 8),
    ];

    let support_spaces = SupportSpaces::default()
        .with(SupportCategory::SmallConference, 6)
        .with(SupportCategory::MediumConference, 4)
        .with(SupportCategory::LargeConference, 2)
        .with(SupportCategory::HuddleRoom, 8)
        .with(SupportCategory::PhoneBooth, 12)
        .with(SupportCategory::BreakRoom, 3)
        .with(SupportCategory::Reception, 1)
        .with(SupportCategory::CopyPrint, 2)
        .with(SupportCategory::Storage, 3)
        .with(SupportCategory::ServerRoom, 1)
        .with(SupportCategory::WellnessRoom, 2)
        .with(SupportCategory::TrainingRoom, 1)
        .with(SupportCategory::CollaborationArea, 4);

    SpaceProgram {
        location: "Denver, Colorado".to_string(),
        project_name: "New HQ Space Planning".to_string(),
        prepared_by: "ABC Architecture Partners".to_string(),
        departments,
        support_spaces,
        circulation_factor: 0.35,
        loss_factor: 0.15,
        remote_work_policy: RemoteWorkPolicy::HybridModerate,
        notes: "Initial programming for new headquarters relocation. \
                Client anticipates 10% growth over next 3 years. \
                Hybrid work policy allows 2 days remote per week."
            .to_string(),
        ..SpaceProgram::new("Acme Technologies Inc.")
    }
}
