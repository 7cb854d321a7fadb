//! Remote-work scenario analysis.
//!
//! Holds staffing fixed and reruns the calculation once per policy,
//! measuring each scenario's savings against the full on-site baseline.
//! The policy is passed to the calculator explicitly, so the program is
//! only ever borrowed immutably.

use serde::{Deserialize, Serialize};

use crate::calculator::SpaceCalculator;
use crate::policy::RemoteWorkPolicy;
use crate::program::SpaceProgram;

/// Share of staff that still needs a dedicated desk under hybrid-moderate hoteling.
const HOTELING_DESK_RATIO: f64 = 0.7;

/// One policy's outcome relative to the on-site baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyScenario {
    pub policy: RemoteWorkPolicy,
    pub description: String,
    pub reduction_factor: f64,
    pub adjusted_usable_sf: f64,
    pub adjusted_rentable_sf: f64,
    pub usable_sf_saved: f64,
    pub rentable_sf_saved: f64,
    pub percent_reduction: f64,
}

/// Templated planning advice attached to an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub text: String,
}

/// Comparison of every remote-work policy for one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteWorkAnalysis {
    pub base_usable_sf: f64,
    pub base_rentable_sf: f64,
    /// One entry per policy, in declaration order.
    pub scenarios: Vec<PolicyScenario>,
    pub recommendations: Vec<Recommendation>,
}

impl RemoteWorkAnalysis {
    pub fn scenario(&self, policy: RemoteWorkPolicy) -> Option<&PolicyScenario> {
        self.scenarios.iter().find(|s| s.policy == policy)
    }
}

/// Runs the six-policy comparison for a borrowed program.
#[derive(Debug, Clone, Copy)]
pub struct RemoteWorkAnalyzer<'a> {
    calculator: SpaceCalculator<'a>,
}

impl<'a> RemoteWorkAnalyzer<'a> {
    pub fn new(program: &'a SpaceProgram) -> Self {
        Self {
            calculator: SpaceCalculator::new(program),
        }
    }

    pub fn analyze_scenarios(&self) -> RemoteWorkAnalysis {
        let base = self
            .calculator
            .calculate_totals_with_policy(RemoteWorkPolicy::FullOnsite);
        let base_usable_sf = base.totals.usable_sf;
        let base_rentable_sf = base.totals.rentable_sf;

        let scenarios: Vec<PolicyScenario> = RemoteWorkPolicy::all()
            .iter()
            .map(|&policy| {
                let totals = self.calculator.calculate_totals_with_policy(policy).totals;
                let reduction_factor = 1.0 - policy.factor();
                tracing::debug!(
                    policy = %policy,
                    rentable_sf = totals.rentable_sf,
                    "remote work scenario"
                );
                PolicyScenario {
                    policy,
                    description: policy.description().to_string(),
                    reduction_factor,
                    adjusted_usable_sf: totals.adjusted_usable_sf,
                    adjusted_rentable_sf: totals.rentable_sf,
                    usable_sf_saved: base_usable_sf - totals.adjusted_usable_sf,
                    rentable_sf_saved: base_rentable_sf - totals.rentable_sf,
                    percent_reduction: reduction_factor * 100.0,
                }
            })
            .collect();

        RemoteWorkAnalysis {
            base_usable_sf,
            base_rentable_sf,
            scenarios,
            recommendations: recommendations(base.totals.total_staff),
        }
    }
}

/// Fixed advice; only the hoteling desk count depends on the program.
pub fn recommendations(total_staff: u64) -> Vec<Recommendation> {
    let hoteling_desks = (total_staff as f64 * HOTELING_DESK_RATIO) as u64;
    vec![
        Recommendation {
            category: "Hoteling Strategy".to_string(),
            text: format!(
                "For hybrid policies, consider implementing desk hoteling. \
                 With {total_staff} staff and a hybrid-moderate policy (2 days remote), \
                 you could reduce dedicated desks to approximately {hoteling_desks} stations."
            ),
        },
        Recommendation {
            category: "Meeting Space".to_string(),
            text: "With increased remote work, consider reallocating saved space to \
                   additional video-conference enabled meeting rooms and collaboration zones \
                   to support hybrid meetings."
                .to_string(),
        },
        Recommendation {
            category: "Amenity Enhancement".to_string(),
            text: "Remote work policies often work best when office amenities are enhanced. \
                   Consider adding: focus/phone booths, wellness rooms, and upgraded break areas \
                   to make in-office days more productive."
                .to_string(),
        },
    ]
}
