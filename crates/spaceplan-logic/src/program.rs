//! Space program data model — departments, shared support spaces, and the
//! program aggregate that is the sole input to calculation.
//!
//! Counts are unsigned, so negative headcounts cannot be represented.
//! Factors and custom areas are floats and are checked by
//! [`validate_program`] before a program is accepted at a boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SpaceError;
use crate::policy::RemoteWorkPolicy;
use crate::standards::{self, keys, SpaceStandard};

/// Default circulation overhead (corridors, aisles) as a fraction of net area.
pub const DEFAULT_CIRCULATION_FACTOR: f64 = 0.35;
/// Default usable-to-rentable loss factor.
pub const DEFAULT_LOSS_FACTOR: f64 = 0.15;

// ============================================================================
// CATEGORIES
// ============================================================================

/// Workspace tier assigned to a member of staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceTier {
    OpenWorkstation,
    StandardWorkstation,
    LargeWorkstation,
    SmallOffice,
    StandardOffice,
    LargeOffice,
    ExecutiveOffice,
}

impl WorkspaceTier {
    pub fn all() -> &'static [WorkspaceTier] {
        &[
            Self::OpenWorkstation,
            Self::StandardWorkstation,
            Self::LargeWorkstation,
            Self::SmallOffice,
            Self::StandardOffice,
            Self::LargeOffice,
            Self::ExecutiveOffice,
        ]
    }

    /// Field name used in persisted documents and breakdowns.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::OpenWorkstation => "open_workstations",
            Self::StandardWorkstation => "standard_workstations",
            Self::LargeWorkstation => "large_workstations",
            Self::SmallOffice => "small_offices",
            Self::StandardOffice => "standard_offices",
            Self::LargeOffice => "large_offices",
            Self::ExecutiveOffice => "executive_offices",
        }
    }

    pub fn standard_key(&self) -> &'static str {
        match self {
            Self::OpenWorkstation => keys::WORKSTATION_OPEN,
            Self::StandardWorkstation => keys::WORKSTATION_STANDARD,
            Self::LargeWorkstation => keys::WORKSTATION_LARGE,
            Self::SmallOffice => keys::OFFICE_SMALL,
            Self::StandardOffice => keys::OFFICE_STANDARD,
            Self::LargeOffice => keys::OFFICE_LARGE,
            Self::ExecutiveOffice => keys::OFFICE_EXECUTIVE,
        }
    }
}

/// Shared amenity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportCategory {
    SmallConference,
    MediumConference,
    LargeConference,
    HuddleRoom,
    PhoneBooth,
    BreakRoom,
    Reception,
    CopyPrint,
    Storage,
    ServerRoom,
    WellnessRoom,
    TrainingRoom,
    CollaborationArea,
}

impl SupportCategory {
    pub fn all() -> &'static [SupportCategory] {
        &[
            Self::SmallConference,
            Self::MediumConference,
            Self::LargeConference,
            Self::HuddleRoom,
            Self::PhoneBooth,
            Self::BreakRoom,
            Self::Reception,
            Self::CopyPrint,
            Self::Storage,
            Self::ServerRoom,
            Self::WellnessRoom,
            Self::TrainingRoom,
            Self::CollaborationArea,
        ]
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            Self::SmallConference => "small_conference",
            Self::MediumConference => "medium_conference",
            Self::LargeConference => "large_conference",
            Self::HuddleRoom => "huddle_rooms",
            Self::PhoneBooth => "phone_booths",
            Self::BreakRoom => "break_rooms",
            Self::Reception => "reception_areas",
            Self::CopyPrint => "copy_print_centers",
            Self::Storage => "storage_rooms",
            Self::ServerRoom => "server_rooms",
            Self::WellnessRoom => "wellness_rooms",
            Self::TrainingRoom => "training_rooms",
            Self::CollaborationArea => "collaboration_areas",
        }
    }

    pub fn standard_key(&self) -> &'static str {
        match self {
            Self::SmallConference => keys::CONFERENCE_SMALL,
            Self::MediumConference => keys::CONFERENCE_MEDIUM,
            Self::LargeConference => keys::CONFERENCE_LARGE,
            Self::HuddleRoom => keys::HUDDLE_ROOM,
            Self::PhoneBooth => keys::PHONE_BOOTH,
            Self::BreakRoom => keys::BREAK_ROOM,
            Self::Reception => keys::RECEPTION,
            Self::CopyPrint => keys::COPY_PRINT,
            Self::Storage => keys::STORAGE,
            Self::ServerRoom => keys::SERVER_ROOM,
            Self::WellnessRoom => keys::WELLNESS_ROOM,
            Self::TrainingRoom => keys::TRAINING_ROOM,
            Self::CollaborationArea => keys::COLLABORATION_AREA,
        }
    }
}

// ============================================================================
// DEPARTMENT
// ============================================================================

/// A department and its staff, counted by workspace tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Department {
    pub name: String,
    #[serde(default)]
    pub open_workstations: u32,
    #[serde(default)]
    pub standard_workstations: u32,
    #[serde(default)]
    pub large_workstations: u32,
    #[serde(default)]
    pub small_offices: u32,
    #[serde(default)]
    pub standard_offices: u32,
    #[serde(default)]
    pub large_offices: u32,
    #[serde(default)]
    pub executive_offices: u32,
}

impl Department {
    /// Empty department with no staff.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            open_workstations: 0,
            standard_workstations: 0,
            large_workstations: 0,
            small_offices: 0,
            standard_offices: 0,
            large_offices: 0,
            executive_offices: 0,
        }
    }

    /// Builder-style count setter.
    pub fn with(mut self, tier: WorkspaceTier, count: u32) -> Self {
        self.set_count(tier, count);
        self
    }

    pub fn count(&self, tier: WorkspaceTier) -> u32 {
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

    pub fn set_count(&mut self, tier: WorkspaceTier, count: u32) {
        let slot = match tier {
            WorkspaceTier::OpenWorkstation => &mut self.open_workstations,
            WorkspaceTier::StandardWorkstation => &mut self.standard_workstations,
            WorkspaceTier::LargeWorkstation => &mut self.large_workstations,
            WorkspaceTier::SmallOffice => &mut self.small_offices,
            WorkspaceTier::StandardOffice => &mut self.standard_offices,
            WorkspaceTier::LargeOffice => &mut self.large_offices,
            WorkspaceTier::ExecutiveOffice => &mut self.executive_offices,
        };
        *slot = count;
    }

    /// One seat per person, so headcount is the sum of all tiers.
    ///
    /// Summed as `u64` so a document full of `u32::MAX` counts cannot wrap.
    pub fn total_staff(&self) -> u64 {
        WorkspaceTier::all()
            .iter()
            .map(|t| u64::from(self.count(*t)))
            .sum()
    }
}

// ============================================================================
// SUPPORT SPACES
// ============================================================================

/// Shared amenity room counts for the whole program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SupportSpaces {
    pub small_conference: u32,
    pub medium_conference: u32,
    pub large_conference: u32,
    pub huddle_rooms: u32,
    pub phone_booths: u32,
    pub break_rooms: u32,
    pub reception_areas: u32,
    pub copy_print_centers: u32,
    pub storage_rooms: u32,
    pub server_rooms: u32,
    pub wellness_rooms: u32,
    pub training_rooms: u32,
    pub collaboration_areas: u32,
}

impl SupportSpaces {
    pub fn with(mut self, category: SupportCategory, count: u32) -> Self {
        self.set_count(category, count);
        self
    }

    pub fn count(&self, category: SupportCategory) -> u32 {
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

    pub fn set_count(&mut self, category: SupportCategory, count: u32) {
        let slot = match category {
            SupportCategory::SmallConference => &mut self.small_conference,
            SupportCategory::MediumConference => &mut self.medium_conference,
            SupportCategory::LargeConference => &mut self.large_conference,
            SupportCategory::HuddleRoom => &mut self.huddle_rooms,
            SupportCategory::PhoneBooth => &mut self.phone_booths,
            SupportCategory::BreakRoom => &mut self.break_rooms,
            SupportCategory::Reception => &mut self.reception_areas,
            SupportCategory::CopyPrint => &mut self.copy_print_centers,
            SupportCategory::Storage => &mut self.storage_rooms,
            SupportCategory::ServerRoom => &mut self.server_rooms,
            SupportCategory::WellnessRoom => &mut self.wellness_rooms,
            SupportCategory::TrainingRoom => &mut self.training_rooms,
            SupportCategory::CollaborationArea => &mut self.collaboration_areas,
        };
        *slot = count;
    }

    pub fn total_rooms(&self) -> u64 {
        SupportCategory::all()
            .iter()
            .map(|c| u64::from(self.count(*c)))
            .sum()
    }
}

// ============================================================================
// PROGRAM
// ============================================================================

fn default_circulation_factor() -> f64 {
    DEFAULT_CIRCULATION_FACTOR
}

fn default_loss_factor() -> f64 {
    DEFAULT_LOSS_FACTOR
}

/// A complete space program: metadata, staffing, amenities, and factors.
///
/// Missing fields in a stored document take the same defaults as
/// [`SpaceProgram::default`]; unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpaceProgram {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub prepared_by: String,
    /// Creation date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date_created: String,

    /// Departments in display order.
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub support_spaces: SupportSpaces,

    #[serde(default = "default_circulation_factor")]
    pub circulation_factor: f64,
    #[serde(default = "default_loss_factor")]
    pub loss_factor: f64,
    #[serde(default)]
    pub remote_work_policy: RemoteWorkPolicy,

    /// Per-program overrides, consulted before the default table.
    #[serde(default)]
    pub custom_standards: BTreeMap<String, SpaceStandard>,

    #[serde(default)]
    pub notes: String,
}

impl Default for SpaceProgram {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            location: String::new(),
            project_name: String::new(),
            prepared_by: String::new(),
            date_created: String::new(),
            departments: Vec::new(),
            support_spaces: SupportSpaces::default(),
            circulation_factor: DEFAULT_CIRCULATION_FACTOR,
            loss_factor: DEFAULT_LOSS_FACTOR,
            remote_work_policy: RemoteWorkPolicy::FullOnsite,
            custom_standards: BTreeMap::new(),
            notes: String::new(),
        }
    }
}

impl SpaceProgram {
    /// New program for a company, dated today.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            date_created: chrono::Local::now().format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Resolve a standard: custom override first, then the default table.
    pub fn space_standard(&self, key: &str) -> Option<SpaceStandard> {
        self.custom_standards
            .get(key)
            .cloned()
            .or_else(|| standards::default_standard(key).map(|d| d.to_standard()))
    }

    /// Per-unit area for a category; categories in neither table are zero.
    pub fn standard_sf(&self, key: &str) -> f64 {
        match self.custom_standards.get(key) {
            Some(custom) => custom.sf,
            None => standards::default_sf(key),
        }
    }

    pub fn total_staff(&self) -> u64 {
        self.departments.iter().map(Department::total_staff).sum()
    }

    /// First validation error, if any.
    pub fn validate(&self) -> Result<(), SpaceError> {
        match validate_program(self).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Validation plus the boundary rule that a program needs departments.
    pub fn ensure_calculable(&self) -> Result<(), SpaceError> {
        self.validate()?;
        if self.departments.is_empty() {
            return Err(SpaceError::EmptyProgram);
        }
        Ok(())
    }
}

/// Validate a program, returning all errors found.
///
/// Factors above 1.0 are accepted but logged; there is no upper bound.
pub fn validate_program(program: &SpaceProgram) -> Vec<SpaceError> {
    let mut errors = Vec::new();

    check_factor("circulation_factor", program.circulation_factor, &mut errors);
    check_factor("loss_factor", program.loss_factor, &mut errors);

    for (key, standard) in &program.custom_standards {
        check_non_negative(&format!("custom_standards.{key}.sf"), standard.sf, &mut errors);
    }

    errors
}

fn check_factor(field: &str, value: f64, errors: &mut Vec<SpaceError>) {
    let before = errors.len();
    check_non_negative(field, value, errors);
    if errors.len() == before && value > 1.0 {
        tracing::warn!(field, value, "factor above 100% accepted");
    }
}

fn check_non_negative(field: &str, value: f64, errors: &mut Vec<SpaceError>) {
    if !value.is_finite() {
        errors.push(SpaceError::NonFiniteValue {
            field: field.to_string(),
        });
    } else if value < 0.0 {
        errors.push(SpaceError::NegativeCount {
            field: field.to_string(),
            value,
        });
    }
}
