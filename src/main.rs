//! Stagehand installer CLI entrypoint.
//!
//! Loads the manifest named on the command line, resolves the destination
//! root (honouring `DESTDIR`), and runs the category installers in their
//! fixed order. Exit code 0 on success, 1 on any fatal condition.

use clap::Parser;
use stagehand::cli::Cli;
use stagehand::destdir::{resolve_destination, staging_override};
use stagehand::error::Result;
use stagehand::executor::SystemCommandExecutor;
use stagehand::manifest::InstallManifest;
use stagehand::output::write_line;
use stagehand::pipeline::{InstallContext, run_install};
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    let manifest = InstallManifest::load(&cli.manifest)?;
    let staging = staging_override()?;
    let dest_root = resolve_destination(&manifest.prefix, staging.as_deref());

    let executor = SystemCommandExecutor;
    let context = InstallContext {
        manifest: &manifest,
        dest_root: &dest_root,
        executor: &executor,
    };

    if cli.quiet {
        let mut sink = std::io::sink();
        run_install(&context, &mut sink)
    } else {
        run_install(&context, stderr)
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(stderr, err);
            1
        }
    }
}
