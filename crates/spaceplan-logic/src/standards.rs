//! Default space standards — per-unit area for every workspace and
//! support-space category, in square feet.
//!
//! The table is a process-wide constant. Programs customise it through an
//! explicit override map (see [`crate::program::SpaceProgram::custom_standards`]),
//! never by mutating these defaults.

use serde::{Deserialize, Serialize};

/// A per-unit area standard for one space category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpaceStandard {
    #[serde(default)]
    pub name: String,
    /// Area per unit in square feet.
    pub sf: f64,
    #[serde(default)]
    pub description: String,
}

impl SpaceStandard {
    pub fn new(name: impl Into<String>, sf: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sf,
            description: description.into(),
        }
    }
}

/// Static entry in the default standards table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardDef {
    pub key: &'static str,
    pub name: &'static str,
    pub sf: f64,
    pub description: &'static str,
}

impl StandardDef {
    pub fn to_standard(&self) -> SpaceStandard {
        SpaceStandard::new(self.name, self.sf, self.description)
    }
}

/// Category ids used as keys into the standards table.
pub mod keys {
    pub const WORKSTATION_OPEN: &str = "workstation_open";
    pub const WORKSTATION_STANDARD: &str = "workstation_standard";
    pub const WORKSTATION_LARGE: &str = "workstation_large";
    pub const OFFICE_SMALL: &str = "office_small";
    pub const OFFICE_STANDARD: &str = "office_standard";
    pub const OFFICE_LARGE: &str = "office_large";
    pub const OFFICE_EXECUTIVE: &str = "office_executive";
    pub const CONFERENCE_SMALL: &str = "conference_small";
    pub const CONFERENCE_MEDIUM: &str = "conference_medium";
    pub const CONFERENCE_LARGE: &str = "conference_large";
    pub const HUDDLE_ROOM: &str = "huddle_room";
    pub const PHONE_BOOTH: &str = "phone_booth";
    pub const BREAK_ROOM: &str = "break_room";
    pub const RECEPTION: &str = "reception";
    pub const COPY_PRINT: &str = "copy_print";
    pub const STORAGE: &str = "storage";
    pub const SERVER_ROOM: &str = "server_room";
    pub const WELLNESS_ROOM: &str = "wellness_room";
    pub const TRAINING_ROOM: &str = "training_room";
    pub const COLLABORATION_AREA: &str = "collaboration_area";
}

const fn def(
    key: &'static str,
    name: &'static str,
    sf: f64,
    description: &'static str,
) -> StandardDef {
    StandardDef {
        key,
        name,
        sf,
        description,
    }
}

/// Industry-typical areas for North American office fit-outs.
pub static DEFAULT_STANDARDS: [StandardDef; 20] = [
    // ── Workstations ───────────────────────────────────────────
    def(keys::WORKSTATION_OPEN, "Open Workstation", 48.0, "Open plan workstation"),
    def(keys::WORKSTATION_STANDARD, "Standard Workstation", 64.0, "Standard cubicle workstation"),
    def(keys::WORKSTATION_LARGE, "Large Workstation", 80.0, "Large/senior workstation"),
    // ── Private offices ────────────────────────────────────────
    def(keys::OFFICE_SMALL, "Small Private Office", 100.0, "Small enclosed office"),
    def(keys::OFFICE_STANDARD, "Standard Private Office", 150.0, "Standard private office"),
    def(keys::OFFICE_LARGE, "Large Private Office", 200.0, "Executive/large private office"),
    def(keys::OFFICE_EXECUTIVE, "Executive Suite", 300.0, "C-suite/executive office"),
    // ── Meeting ────────────────────────────────────────────────
    def(keys::CONFERENCE_SMALL, "Small Conference Room", 150.0, "4-6 person meeting room"),
    def(keys::CONFERENCE_MEDIUM, "Medium Conference Room", 300.0, "8-12 person conference room"),
    def(keys::CONFERENCE_LARGE, "Large Conference Room", 500.0, "16-20 person board room"),
    def(keys::HUDDLE_ROOM, "Huddle Room", 80.0, "2-4 person huddle space"),
    def(keys::PHONE_BOOTH, "Phone Booth", 35.0, "Single person phone/focus booth"),
    // ── Amenities & services ───────────────────────────────────
    def(keys::BREAK_ROOM, "Break Room", 200.0, "Kitchen/break area"),
    def(keys::RECEPTION, "Reception Area", 250.0, "Reception/waiting area"),
    def(keys::COPY_PRINT, "Copy/Print Center", 100.0, "Copy/print/mail area"),
    def(keys::STORAGE, "Storage Room", 150.0, "General storage"),
    def(keys::SERVER_ROOM, "Server/IT Room", 120.0, "Server/IT closet"),
    def(keys::WELLNESS_ROOM, "Wellness/Mother's Room", 80.0, "Wellness/lactation room"),
    def(keys::TRAINING_ROOM, "Training Room", 600.0, "Large training/all-hands room"),
    def(keys::COLLABORATION_AREA, "Collaboration Zone", 200.0, "Open collaboration space"),
];

/// Look up a default standard by category id.
pub fn default_standard(key: &str) -> Option<&'static StandardDef> {
    DEFAULT_STANDARDS.iter().find(|d| d.key == key)
}

/// Default per-unit area for a category id; unknown ids have zero area.
pub fn default_sf(key: &str) -> f64 {
    default_standard(key).map(|d| d.sf).unwrap_or(0.0)
}
