use promptpair_core::report;

use super::super::args::SheetArgs;
use crate::exit_codes::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

pub(crate) fn run(args: SheetArgs) -> anyhow::Result<i32> {
    let evaluation = match report::json::load_run(&args.input) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(EXIT_RUNTIME_ERROR);
        }
    };

    let out = args.output.unwrap_or_else(|| args.input.with_extension("csv"));
    report::sheet::write_sheet(&evaluation, &out)?;
    eprintln!("Spreadsheet written to {}", out.display());
    Ok(EXIT_SUCCESS)
}
