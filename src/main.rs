// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use kcdev_install::config::InstallerConfig;
use kcdev_install::error::{
    InstallError, Result, format_error_chain, format_error_verbose, get_exit_code,
};
use kcdev_install::install::{InstallOutcome, Installer};
use kcdev_install::logging;
use kcdev_install::paths::package::resolve_package_root;
use kcdev_install::platform::HostPlatform;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "kcdev-install")]
#[command(
    author,
    version,
    about = "Resolve and record the kcdev binary for this platform",
    long_about = "Resolve and record the kcdev binary for this platform

Runs as the package's postinstall hook. Picks bin/<os>-<arch>/kcdev for the
host, checks that it exists and writes its absolute path to bin/.binary-path.
Set KCDEV_PACKAGE_ROOT to run against a package directory other than the one
containing this installer."
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run() -> Result<InstallOutcome> {
    let package_root = resolve_package_root()?;
    let config = InstallerConfig::load(&package_root)?;
    let platform = HostPlatform;

    let mut installer = Installer::new(&platform, &package_root, &config)?;
    installer.run()
}

fn report_error(error: &InstallError, verbose: u8) {
    if verbose > 0 {
        let use_color = std::io::stderr().is_terminal();
        eprintln!("{}", format_error_verbose(error, use_color));
    } else {
        eprintln!("{}", format_error_chain(error));
    }
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    match run() {
        Ok(outcome) => println!("{}", outcome.confirmation()),
        Err(e) => {
            log::debug!("Installation failed ({})", e.kind());
            report_error(&e, cli.verbose);
            std::process::exit(get_exit_code(&e));
        }
    }
}
