use anyhow::{Context, Result};

use crate::cli::ValidateArgs;
use crate::display::{Context as DisplayContext, Progress};

use super::{read_container, read_substeps};

const TOTAL_STEPS: u8 = 2;

/// Parses, then checks consistency.
///
/// A parse failure is always an error. A consistency problem is reported on
/// stdout and only fails the run with `--deny`.
pub fn run_validate(args: ValidateArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading MLAB file");
    let container = read_container(&args.io)?;
    progress.complete_step("Reading MLAB file", &read_substeps(&container));
    println!("format ok");

    progress.step("Checking consistency");
    let outcome = mlab::validate(&container);
    progress.complete_step("Checking consistency", &[]);

    match outcome {
        Ok(()) => {
            println!("no problems found");
            progress.finish("Validation complete");
            Ok(())
        }
        Err(problem) if args.deny => {
            progress.finish("Validation failed");
            Err(problem).context("Validation failed")
        }
        Err(problem) => {
            println!("{problem}");
            println!("note this may not be the only problem!");
            progress.finish("Validation found a problem");
            Ok(())
        }
    }
}
