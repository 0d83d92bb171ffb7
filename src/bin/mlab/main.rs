use std::process::ExitCode;

mod cli;
mod commands;
mod display;
mod io;
mod report;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let ctx = display::Context::detect().with_quiet(cli.command.io().quiet);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::dispatch(cli.command, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
