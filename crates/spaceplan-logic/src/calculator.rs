//! Space calculation pipeline — staffing counts to rentable square feet.
//!
//! The conversion runs in a fixed order:
//!
//! 1. **Net assignable** = Σ department areas + Σ support areas
//! 2. **Usable** = net × (1 + circulation factor)
//! 3. **Adjusted usable** = usable × remote-work factor
//! 4. **Rentable** = adjusted × (1 + loss factor)
//!
//! Circulation depends on the full net area; the loss factor applies to the
//! remote-adjusted area. Swapping steps 3 and 4 changes the result.

use serde::{Deserialize, Serialize};

use crate::policy::RemoteWorkPolicy;
use crate::program::{Department, SpaceProgram, SupportCategory, WorkspaceTier};

/// Area by workspace tier for one department (SF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentBreakdown {
    pub open_workstations: f64,
    pub standard_workstations: f64,
    pub large_workstations: f64,
    pub small_offices: f64,
    pub standard_offices: f64,
    pub large_offices: f64,
    pub executive_offices: f64,
    pub total: f64,
}

impl DepartmentBreakdown {
    pub fn area(&self, tier: WorkspaceTier) -> f64 {
        match tier {
            WorkspaceTier::OpenWorkstation => self.open_workstations,
            WorkspaceTier::StandardWorkstation => self.standard_workstations,
            WorkspaceTier::LargeWorkstation => self.large_workstations,
            WorkspaceTier::SmallOffice => self.small_offices,
            WorkspaceTier::StandardOffice => self.standard_offices,
            WorkspaceTier::LargeOffice => self.large_offices,
            WorkspaceTier::ExecutiveOffice => self.executive_offices,
        }
    }
}

/// Area by support category (SF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportBreakdown {
    pub small_conference: f64,
    pub medium_conference: f64,
    pub large_conference: f64,
    pub huddle_rooms: f64,
    pub phone_booths: f64,
    pub break_rooms: f64,
    pub reception_areas: f64,
    pub copy_print_centers: f64,
    pub storage_rooms: f64,
    pub server_rooms: f64,
    pub wellness_rooms: f64,
    pub training_rooms: f64,
    pub collaboration_areas: f64,
    pub total: f64,
}

impl SupportBreakdown {
    pub fn area(&self, category: SupportCategory) -> f64 {
        match category {
            SupportCategory::SmallConference => self.small_conference,
            SupportCategory::MediumConference => self.medium_conference,
            SupportCategory::LargeConference => self.large_conference,
            SupportCategory::HuddleRoom => self.huddle_rooms,
            SupportCategory::PhoneBooth => self.phone_booths,
            SupportCategory::BreakRoom => self.break_rooms,
            SupportCategory::Reception => self.reception_areas,
            SupportCategory::CopyPrint => self.copy_print_centers,
            SupportCategory::Storage => self.storage_rooms,
            SupportCategory::ServerRoom => self.server_rooms,
            SupportCategory::WellnessRoom => self.wellness_rooms,
            SupportCategory::TrainingRoom => self.training_rooms,
            SupportCategory::CollaborationArea => self.collaboration_areas,
        }
    }
}

/// Company metadata echoed into the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub location: String,
    pub project_name: String,
    pub prepared_by: String,
    pub date: String,
}

/// One department's line in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentResult {
    pub name: String,
    pub staff: u64,
    pub breakdown: DepartmentBreakdown,
}

/// Every intermediate quantity of the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceTotals {
    pub total_staff: u64,
    pub department_sf: f64,
    pub support_sf: f64,
    pub net_assignable_sf: f64,
    pub circulation_factor: f64,
    pub circulation_sf: f64,
    pub usable_sf: f64,
    pub remote_work_policy: RemoteWorkPolicy,
    pub remote_work_description: String,
    pub remote_adjustment_factor: f64,
    pub adjusted_usable_sf: f64,
    pub loss_factor: f64,
    pub loss_sf: f64,
    pub rentable_sf: f64,
}

/// Area per person at each stage; zero when there is no staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceMetrics {
    pub sf_per_person_net: f64,
    pub sf_per_person_usable: f64,
    pub sf_per_person_adjusted: f64,
    pub sf_per_person_rentable: f64,
}

/// Fully itemized calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceReport {
    pub company: CompanyInfo,
    pub departments: Vec<DepartmentResult>,
    pub support_spaces: SupportBreakdown,
    pub totals: SpaceTotals,
    pub metrics: SpaceMetrics,
    pub notes: String,
}

/// Calculates area requirements for a borrowed program.
#[derive(Debug, Clone, Copy)]
pub struct SpaceCalculator<'a> {
    program: &'a SpaceProgram,
}

impl<'a> SpaceCalculator<'a> {
    pub fn new(program: &'a SpaceProgram) -> Self {
        Self { program }
    }

    pub fn program(&self) -> &'a SpaceProgram {
        self.program
    }

    fn tier_sf(&self, dept: &Department, tier: WorkspaceTier) -> f64 {
        dept.count(tier) as f64 * self.program.standard_sf(tier.standard_key())
    }

    fn support_sf(&self, category: SupportCategory) -> f64 {
        self.program.support_spaces.count(category) as f64
            * self.program.standard_sf(category.standard_key())
    }

    /// Area per workspace tier for one department, plus the total.
    pub fn calculate_department_area(&self, dept: &Department) -> DepartmentBreakdown {
        let total = WorkspaceTier::all()
            .iter()
            .fold(0.0, |acc, tier| acc + self.tier_sf(dept, *tier));

        DepartmentBreakdown {
            open_workstations: self.tier_sf(dept, WorkspaceTier::OpenWorkstation),
            standard_workstations: self.tier_sf(dept, WorkspaceTier::StandardWorkstation),
            large_workstations: self.tier_sf(dept, WorkspaceTier::LargeWorkstation),
            small_offices: self.tier_sf(dept, WorkspaceTier::SmallOffice),
            standard_offices: self.tier_sf(dept, WorkspaceTier::StandardOffice),
            large_offices: self.tier_sf(dept, WorkspaceTier::LargeOffice),
            executive_offices: self.tier_sf(dept, WorkspaceTier::ExecutiveOffice),
            total,
        }
    }

    /// Area per support category for the program, plus the total.
    pub fn calculate_support_area(&self) -> SupportBreakdown {
        let total = SupportCategory::all()
            .iter()
            .fold(0.0, |acc, c| acc + self.support_sf(*c));

        SupportBreakdown {
            small_conference: self.support_sf(SupportCategory::SmallConference),
            medium_conference: self.support_sf(SupportCategory::MediumConference),
            large_conference: self.support_sf(SupportCategory::LargeConference),
            huddle_rooms: self.support_sf(SupportCategory::HuddleRoom),
            phone_booths: self.support_sf(SupportCategory::PhoneBooth),
            break_rooms: self.support_sf(SupportCategory::BreakRoom),
            reception_areas: self.support_sf(SupportCategory::Reception),
            copy_print_centers: self.support_sf(SupportCategory::CopyPrint),
            storage_rooms: self.support_sf(SupportCategory::Storage),
            server_rooms: self.support_sf(SupportCategory::ServerRoom),
            wellness_rooms: self.support_sf(SupportCategory::WellnessRoom),
            training_rooms: self.support_sf(SupportCategory::TrainingRoom),
            collaboration_areas: self.support_sf(SupportCategory::CollaborationArea),
            total,
        }
    }

    /// Full report using the program's own remote-work policy.
    pub fn calculate_totals(&self) -> SpaceReport {
        self.calculate_totals_with_policy(self.program.remote_work_policy)
    }

    /// Full report with `policy` substituted for the program's policy.
    ///
    /// The program itself is never modified, so scenario runs can share it.
    pub fn calculate_totals_with_policy(&self, policy: RemoteWorkPolicy) -> SpaceReport {
        let p = self.program;

        let mut departments = Vec::with_capacity(p.departments.len());
        let mut department_sf = 0.0;
        let mut total_staff = 0u64;
        for dept in &p.departments {
            let breakdown = self.calculate_department_area(dept);
            let staff = dept.total_staff();
            department_sf += breakdown.total;
            total_staff += staff;
            departments.push(DepartmentResult {
                name: dept.name.clone(),
                staff,
                breakdown,
            });
        }

        let support = self.calculate_support_area();
        let net_assignable_sf = department_sf + support.total;

        let circulation_sf = net_assignable_sf * p.circulation_factor;
        let usable_sf = net_assignable_sf + circulation_sf;

        let remote_factor = policy.factor();
        let adjusted_usable_sf = usable_sf * remote_factor;

        let loss_sf = adjusted_usable_sf * p.loss_factor;
        let rentable_sf = adjusted_usable_sf + loss_sf;

        tracing::debug!(
            policy = %policy,
            total_staff,
            net_assignable_sf,
            usable_sf,
            adjusted_usable_sf,
            rentable_sf,
            "space totals calculated"
        );

        SpaceReport {
            company: CompanyInfo {
                name: p.company_name.clone(),
                location: p.location.clone(),
                project_name: p.project_name.clone(),
                prepared_by: p.prepared_by.clone(),
                date: p.date_created.clone(),
            },
            departments,
            support_spaces: support.clone(),
            totals: SpaceTotals {
                total_staff,
                department_sf,
                support_sf: support.total,
                net_assignable_sf,
                circulation_factor: p.circulation_factor,
                circulation_sf,
                usable_sf,
                remote_work_policy: policy,
                remote_work_description: policy.description().to_string(),
                remote_adjustment_factor: remote_factor,
                adjusted_usable_sf,
                loss_factor: p.loss_factor,
                loss_sf,
                rentable_sf,
            },
            metrics: SpaceMetrics {
                sf_per_person_net: per_person(net_assignable_sf, total_staff),
                sf_per_person_usable: per_person(usable_sf, total_staff),
                sf_per_person_adjusted: per_person(adjusted_usable_sf, total_staff),
                sf_per_person_rentable: per_person(rentable_sf, total_staff),
            },
            notes: p.notes.clone(),
        }
    }
}

fn per_person(area: f64, staff: u64) -> f64 {
    if staff > 0 {
        area / staff as f64
    } else {
        0.0
    }
}
