use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::InspectArgs;
use crate::display::{
    Context as DisplayContext, Progress, print_file_summary, print_section_summary,
    print_type_distribution,
};
use crate::io::input_label;
use crate::report::Report;

use super::{read_container, read_substeps};

const TOTAL_STEPS: u8 = 3;

pub fn run_inspect(args: InspectArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading MLAB file");
    let container = read_container(&args.io)?;
    progress.complete_step("Reading MLAB file", &read_substeps(&container));

    progress.step("Checking consistency");
    if args.strict {
        mlab::validate(&container).context("Validation failed")?;
        progress.complete_step("Checking consistency", &["no problems found".to_string()]);
    } else {
        progress.complete_step("Checking consistency", &["skipped (use --strict)".to_string()]);
    }

    progress.step("Grouping sections");
    let sections = mlab::group_into_sections(&container);
    let report = Report::new(input_label(args.io.input.as_deref()), &container, &sections);
    progress.complete_step(
        "Grouping sections",
        &[format!("{} sections", report.sections.len())],
    );
    progress.finish("Inspection complete");

    if args.json {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report).context("Failed to write JSON")?;
        writeln!(stdout).context("Failed to write JSON")?;
        return Ok(());
    }

    print_file_summary(&report);
    print_type_distribution(&report.atom_types);
    let total = report.sections.len();
    for (i, section) in report.sections.iter().enumerate() {
        print_section_summary(i + 1, total, section, report.configurations);
    }

    Ok(())
}
