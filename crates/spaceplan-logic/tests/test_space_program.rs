//! Integration tests for the full calculation pipeline.
//!
//! Exercises: SpaceProgram → SpaceCalculator → SpaceReport
//! → RemoteWorkAnalyzer → RemoteWorkAnalysis
//!
//! All tests are pure logic with no files or terminal.

use spaceplan_logic::calculator::SpaceCalculator;
use spaceplan_logic::policy::RemoteWorkPolicy;
use spaceplan_logic::program::{
    Department, SpaceProgram, SupportCategory, SupportSpaces, WorkspaceTier,
};
use spaceplan_logic::remote::RemoteWorkAnalyzer;
use spaceplan_logic::standards::{keys, SpaceStandard};
use spaceplan_logic::SpaceError;

// ── Helpers ────────────────────────────────────────────────────────────

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn mixed_program() -> SpaceProgram {
    let mut program = SpaceProgram::new("Globex");
    program.location = "Springfield".into();
    program.circulation_factor = 0.30;
    program.loss_factor = 0.12;
    program.remote_work_policy = RemoteWorkPolicy::HybridLight;
    program.departments = vec![
        Department::new("Leadership")
            .with(WorkspaceTier::ExecutiveOffice, 2)
            .with(WorkspaceTier::LargeOffice, 1),
        Department::new("Sales")
            .with(WorkspaceTier::OpenWorkstation, 20)
            .with(WorkspaceTier::SmallOffice, 2),
        Department::new("R&D")
            .with(WorkspaceTier::LargeWorkstation, 15)
            .with(WorkspaceTier::StandardOffice, 3),
    ];
    program.support_spaces = SupportSpaces::default()
        .with(SupportCategory::SmallConference, 2)
        .with(SupportCategory::MediumConference, 1)
        .with(SupportCategory::PhoneBooth, 6)
        .with(SupportCategory::BreakRoom, 1)
        .with(SupportCategory::Reception, 1);
    program
}

// ── Pipeline coherence ─────────────────────────────────────────────────

#[test]
fn pipeline_stage_identities() {
    let program = mixed_program();
    let report = SpaceCalculator::new(&program).calculate_totals();
    let t = &report.totals;

    // 2×300 + 200 | 20×48 + 2×100 | 15×80 + 3×150
    assert!(close(report.departments[0].breakdown.total, 800.0));
    assert!(close(report.departments[1].breakdown.total, 1160.0));
    assert!(close(report.departments[2].breakdown.total, 1650.0));
    assert!(close(t.department_sf, 3610.0));

    // 2×150 + 300 + 6×35 + 200 + 250
    assert!(close(t.support_sf, 1260.0));
    assert!(close(t.net_assignable_sf, t.department_sf + t.support_sf));
    assert!(close(t.circulation_sf, t.net_assignable_sf * 0.30));
    assert!(close(t.usable_sf, t.net_assignable_sf + t.circulation_sf));
    assert!(close(t.adjusted_usable_sf, t.usable_sf * 0.85));
    assert!(close(t.loss_sf, t.adjusted_usable_sf * 0.12));
    assert!(close(t.rentable_sf, t.adjusted_usable_sf + t.loss_sf));
    assert_eq!(t.total_staff, 3 + 22 + 18);
}

#[test]
fn department_sums_match_totals() {
    let program = mixed_program();
    let report = SpaceCalculator::new(&program).calculate_totals();
    let staff: u64 = report.departments.iter().map(|d| d.staff).sum();
    let area: f64 = report.departments.iter().map(|d| d.breakdown.total).sum();
    assert_eq!(staff, report.totals.total_staff);
    assert_eq!(staff, program.total_staff());
    assert!(close(area, report.totals.department_sf));
}

#[test]
fn metrics_divide_by_headcount() {
    let program = mixed_program();
    let report = SpaceCalculator::new(&program).calculate_totals();
    let staff = report.totals.total_staff as f64;
    let m = &report.metrics;
    assert!(close(m.sf_per_person_net, report.totals.net_assignable_sf / staff));
    assert!(close(m.sf_per_person_usable, report.totals.usable_sf / staff));
    assert!(close(m.sf_per_person_adjusted, report.totals.adjusted_usable_sf / staff));
    assert!(close(m.sf_per_person_rentable, report.totals.rentable_sf / staff));
}

#[test]
fn company_metadata_echoed() {
    let program = mixed_program();
    let report = SpaceCalculator::new(&program).calculate_totals();
    assert_eq!(report.company.name, "Globex");
    assert_eq!(report.company.location, "Springfield");
    assert_eq!(report.company.date, program.date_created);
}

#[test]
fn deterministic_output() {
    let program = mixed_program();
    let a = SpaceCalculator::new(&program).calculate_totals();
    let b = SpaceCalculator::new(&program).calculate_totals();
    assert_eq!(a, b);
}

// ── Specific scenario ──────────────────────────────────────────────────

#[test]
fn eng_department_reference_figures() {
    let mut program = SpaceProgram::default();
    program.departments.push(
        Department::new("Eng")
            .with(WorkspaceTier::StandardWorkstation, 10)
            .with(WorkspaceTier::StandardOffice, 2),
    );

    let onsite = SpaceCalculator::new(&program).calculate_totals();
    assert!(close(onsite.totals.rentable_sf, 1459.35));
    assert!((onsite.metrics.sf_per_person_rentable - 121.6).abs() < 0.05);

    program.remote_work_policy = RemoteWorkPolicy::HybridModerate;
    let hybrid = SpaceCalculator::new(&program).calculate_totals();
    assert!(close(hybrid.totals.adjusted_usable_sf, 888.3));
    assert!(close(hybrid.totals.loss_sf, 133.245));
    assert!(close(hybrid.totals.rentable_sf, 1021.545));
}

#[test]
fn loss_applies_after_remote_adjustment() {
    let mut program = mixed_program();
    program.remote_work_policy = RemoteWorkPolicy::RemoteFirst;
    let t = SpaceCalculator::new(&program).calculate_totals().totals;
    // Circulation is computed on full net area...
    assert!(close(t.circulation_sf, t.net_assignable_sf * program.circulation_factor));
    // ...loss on the shrunk area.
    assert!(close(t.loss_sf, t.usable_sf * 0.40 * program.loss_factor));
}

#[test]
fn custom_overrides_only_touch_their_category() {
    let base = mixed_program();
    let mut custom = base.clone();
    custom.custom_standards.insert(
        keys::PHONE_BOOTH.into(),
        SpaceStandard::new("Pod", 25.0, "Acoustic pod"),
    );
    let a = SpaceCalculator::new(&base).calculate_totals();
    let b = SpaceCalculator::new(&custom).calculate_totals();
    assert!(close(a.support_spaces.phone_booths - b.support_spaces.phone_booths, 60.0));
    assert!(close(a.totals.department_sf, b.totals.department_sf));
}

// ── Scenario analysis ──────────────────────────────────────────────────

#[test]
fn analysis_matches_direct_calculation() {
    let program = mixed_program();
    let analysis = RemoteWorkAnalyzer::new(&program).analyze_scenarios();
    for scenario in &analysis.scenarios {
        let mut direct = program.clone();
        direct.remote_work_policy = scenario.policy;
        let t = SpaceCalculator::new(&direct).calculate_totals().totals;
        assert_eq!(scenario.adjusted_usable_sf, t.adjusted_usable_sf);
        assert_eq!(scenario.adjusted_rentable_sf, t.rentable_sf);
    }
}

#[test]
fn analysis_leaves_program_unchanged() {
    let program = mixed_program();
    let snapshot = program.clone();
    let _ = RemoteWorkAnalyzer::new(&program).analyze_scenarios();
    assert_eq!(program, snapshot);
}

#[test]
fn analysis_ordering_invariant() {
    let program = mixed_program();
    let analysis = RemoteWorkAnalyzer::new(&program).analyze_scenarios();
    let percents: Vec<f64> = analysis
        .scenarios
        .iter()
        .map(|s| s.percent_reduction.round())
        .collect();
    assert_eq!(percents, vec![0.0, 15.0, 30.0, 45.0, 60.0, 85.0]);
    for w in analysis.scenarios.windows(2) {
        assert!(w[1].adjusted_rentable_sf <= w[0].adjusted_rentable_sf);
    }
}

#[test]
fn scenarios_parallelize_over_shared_program() {
    let program = mixed_program();
    let sequential = RemoteWorkAnalyzer::new(&program).analyze_scenarios();

    let threaded: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = RemoteWorkPolicy::all()
            .iter()
            .map(|&policy| {
                let program = &program;
                s.spawn(move || {
                    SpaceCalculator::new(program)
                        .calculate_totals_with_policy(policy)
                        .totals
                        .rentable_sf
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected: Vec<f64> = sequential
        .scenarios
        .iter()
        .map(|s| s.adjusted_rentable_sf)
        .collect();
    assert_eq!(threaded, expected);
}

// ── Boundary validation ────────────────────────────────────────────────

#[test]
fn boundary_rejects_empty_program() {
    let program = SpaceProgram::new("Empty Co");
    assert_eq!(program.ensure_calculable(), Err(SpaceError::EmptyProgram));
}

#[test]
fn boundary_rejects_negative_factor() {
    let mut program = mixed_program();
    program.loss_factor = -0.05;
    assert!(matches!(
        program.ensure_calculable(),
        Err(SpaceError::NegativeCount { .. })
    ));
}

#[test]
fn headcount_beyond_u32_range_does_not_wrap() {
    let program: SpaceProgram = serde_json::from_str(
        r#"{"departments": [
            {"name": "A", "open_workstations": 4294967295},
            {"name": "B", "open_workstations": 1}
        ]}"#,
    )
    .unwrap();
    assert!(program.ensure_calculable().is_ok());

    let report = SpaceCalculator::new(&program).calculate_totals();
    let expected = u64::from(u32::MAX) + 1;
    assert_eq!(report.totals.total_staff, expected);
    assert_eq!(report.departments[0].staff, u64::from(u32::MAX));
    assert_eq!(program.total_staff(), expected);
    // 48 SF per open workstation, so net area per person stays 48.
    assert!(close(report.metrics.sf_per_person_net, 48.0));
}
