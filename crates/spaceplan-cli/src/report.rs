//! Plain-text rendering of calculation and scenario results.
//!
//! Renders the engine's output verbatim; nothing here recomputes a figure.

use std::fmt::Write;

use spaceplan_core::persistence::ProgramSummary;
use spaceplan_logic::calculator::SpaceReport;
use spaceplan_logic::remote::RemoteWorkAnalysis;
use spaceplan_logic::standards::DEFAULT_STANDARDS;
use spaceplan_logic::RemoteWorkPolicy;

const WIDTH: usize = 60;

/// Whole square feet with thousands separators, e.g. `1,459`.
pub fn fmt_sf(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn rule(c: char) -> String {
    std::iter::repeat(c).take(WIDTH).collect()
}

pub fn render_totals(report: &SpaceReport) -> String {
    let t = &report.totals;
    let m = &report.metrics;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "SPACE PROGRAMMING RESULTS");
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "Company:  {}", report.company.name);
    let _ = writeln!(out, "Location: {}", report.company.location);
    if !report.company.project_name.is_empty() {
        let _ = writeln!(out, "Project:  {}", report.company.project_name);
    }
    let _ = writeln!(out, "Date:     {}", report.company.date);
    let _ = writeln!(out, "{}", rule('-'));

    let _ = writeln!(out, "\nDEPARTMENTS");
    for dept in &report.departments {
        let _ = writeln!(
            out,
            "  {:<30} {:>5} staff {:>12} SF",
            dept.name,
            dept.staff,
            fmt_sf(dept.breakdown.total)
        );
    }

    let _ = writeln!(out, "\n{:^WIDTH$}", "TOTALS");
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(out, "  Total Headcount:         {:>15} persons", t.total_staff);
    let _ = writeln!(out, "  Department Space:        {:>15} SF", fmt_sf(t.department_sf));
    let _ = writeln!(out, "  Support Space:           {:>15} SF", fmt_sf(t.support_sf));
    let _ = writeln!(out, "  Net Assignable SF:       {:>15} SF", fmt_sf(t.net_assignable_sf));
    let circulation = format!("Circulation ({:.0}%):", t.circulation_factor * 100.0);
    let _ = writeln!(out, "  {circulation:<25}{:>15} SF", fmt_sf(t.circulation_sf));
    let _ = writeln!(out, "  Usable Square Feet:      {:>15} SF", fmt_sf(t.usable_sf));
    let _ = writeln!(out, "\n  Remote Policy: {}", t.remote_work_description);
    let _ = writeln!(out, "  Adjusted Usable SF:      {:>15} SF", fmt_sf(t.adjusted_usable_sf));
    let loss = format!("Loss Factor ({:.0}%):", t.loss_factor * 100.0);
    let _ = writeln!(out, "  {loss:<25}{:>15} SF", fmt_sf(t.loss_sf));
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(out, "  RENTABLE SQUARE FEET:    {:>15} SF", fmt_sf(t.rentable_sf));
    let _ = writeln!(out, "{}", rule('='));

    let _ = writeln!(out, "\n{:^WIDTH$}", "KEY METRICS");
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(out, "  SF per Person (Net):      {:>14.1} SF", m.sf_per_person_net);
    let _ = writeln!(out, "  SF per Person (Usable):   {:>14.1} SF", m.sf_per_person_usable);
    let _ = writeln!(out, "  SF per Person (Adjusted): {:>14.1} SF", m.sf_per_person_adjusted);
    let _ = writeln!(out, "  SF per Person (Rentable): {:>14.1} SF", m.sf_per_person_rentable);

    if !report.notes.is_empty() {
        let _ = writeln!(out, "\nNotes: {}", report.notes);
    }
    out
}

pub fn render_analysis(analysis: &RemoteWorkAnalysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "REMOTE WORK IMPACT ANALYSIS");
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(
        out,
        "Base Usable SF (Full On-Site):   {:>12} SF",
        fmt_sf(analysis.base_usable_sf)
    );
    let _ = writeln!(
        out,
        "Base Rentable SF (Full On-Site): {:>12} SF",
        fmt_sf(analysis.base_rentable_sf)
    );
    let _ = writeln!(out, "{}", rule('-'));

    let _ = writeln!(
        out,
        "\n{:<20} {:>10} {:>12} {:>12}",
        "Policy", "Reduction", "Adj. RSF", "SF Saved"
    );
    let _ = writeln!(out, "{}", rule('-'));
    for s in &analysis.scenarios {
        let _ = writeln!(
            out,
            "{:<20} {:>9.0}% {:>12} {:>12}",
            s.policy.label(),
            s.percent_reduction,
            fmt_sf(s.adjusted_rentable_sf),
            fmt_sf(s.rentable_sf_saved)
        );
    }

    let _ = writeln!(out, "\n{}", rule('-'));
    let _ = writeln!(out, "RECOMMENDATIONS:");
    for rec in &analysis.recommendations {
        let _ = writeln!(out, "\n{}:", rec.category);
        let _ = writeln!(out, "  {}", rec.text);
    }
    out
}

pub fn render_policies() -> String {
    let mut out = String::new();
    for policy in RemoteWorkPolicy::all() {
        let _ = writeln!(
            out,
            "{:<16} {:>5.2}  {}",
            policy.key(),
            policy.factor(),
            policy.description()
        );
    }
    out
}

pub fn render_standards() -> String {
    let mut out = String::new();
    for d in DEFAULT_STANDARDS.iter() {
        let _ = writeln!(
            out,
            "{:<22} {:>6} SF  {:<26} {}",
            d.key,
            fmt_sf(d.sf),
            d.name,
            d.description
        );
    }
    out
}

pub fn render_listing(programs: &[ProgramSummary]) -> String {
    if programs.is_empty() {
        return "No saved programs.\n".to_string();
    }
    let mut out = String::new();
    for (i, p) in programs.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} - {} ({})  [{}]",
            i + 1,
            p.company_name,
            p.location,
            p.date_created,
            p.filename
        );
    }
    out
}
