use std::io::{self, Write};

use crate::report::{AtomTypeSummary, Range, Report, SectionSummary};
use crate::util::text::{composition, truncate};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_file_summary(report: &Report) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Source", report.source.clone()),
        ("Configurations", report.configurations.to_string()),
        ("Sections", report.sections.len().to_string()),
        ("Atom Types", report.atom_types.len().to_string()),
        ("Basis Sets", report.basis_sets.to_string()),
    ];
    if let Some(comment) = &report.comment {
        rows.insert(1, ("Comment", comment.clone()));
    }

    print_kv_table(&mut out, "File Summary", &rows);
}

/// One table per section, titled `[i/n] name`.
pub fn print_section_summary(
    position: usize,
    total: usize,
    section: &SectionSummary,
    structures: usize,
) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Atoms", section.atoms.to_string()),
        ("Atom Types", composition(&section.composition)),
        ("Structures", format!("{} / {}", section.structures, structures)),
        ("Energy (eV)", format_range(section.energy, 4)),
        ("Energy/atom (eV)", format_range(section.energy_per_atom, 4)),
        ("Pressure (kbar)", format_range(section.pressure, 2)),
        ("Volume (Å³)", format_range(section.volume, 2)),
    ];
    if let Some(radius) = section.non_periodic_radius {
        rows.push(("Non-periodic r", format!("{radius:.3} Å")));
    }

    let title = format!("[{position}/{total}] {}", section.name);
    print_kv_table(&mut out, &title, &rows);
}

pub fn print_type_distribution(types: &[AtomTypeSummary]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let total = types
        .iter()
        .fold(0usize, |sum, t| sum.saturating_add(t.atoms));
    if total == 0 {
        return;
    }

    let mut sorted: Vec<(&str, usize)> =
        types.iter().map(|t| (t.name.as_str(), t.atoms)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);
    let widths = [name_w, count_w, dist_w];

    let _ = writeln!(out, "{INDENT}┌─ Atom Type Distribution ─┐");
    let _ = writeln!(out, "{}", rule(&widths, ['┌', '┬', '┐']));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        "Type", "Atoms", "Distribution"
    );
    let _ = writeln!(out, "{}", rule(&widths, ['├', '┼', '┤']));

    for (name, count) in &sorted {
        let pct = (*count as f64 / total as f64) * 100.0;
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            truncate(name, name_w),
            count,
            dist_cell
        );
    }

    let _ = writeln!(out, "{}", rule(&widths, ['└', '┴', '┘']));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let widths = [key_w, val_w];

    let _ = writeln!(
        out,
        "{INDENT}┌─ {} ─┐",
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule(&widths, ['┌', '┬', '┐']));
    let _ = writeln!(out, "{INDENT}│ {:<key_w$} │ {:>val_w$} │", "Metric", "Value");
    let _ = writeln!(out, "{}", rule(&widths, ['├', '┼', '┤']));

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w)
        );
    }

    let _ = writeln!(out, "{}", rule(&widths, ['└', '┴', '┘']));
}

/// A horizontal table border over columns of the given content widths.
fn rule(widths: &[usize], [left, mid, right]: [char; 3]) -> String {
    let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    let separator = mid.to_string();
    format!("{INDENT}{left}{}{right}", cells.join(separator.as_str()))
}

fn format_range(range: Option<Range>, precision: usize) -> String {
    match range {
        None => "n/a".to_string(),
        Some(r) if r.min == r.max => format!("{:.precision$}", r.min),
        Some(r) => format!("{:.precision$} … {:.precision$}", r.min, r.max),
    }
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
