use std::env;

use cbepm::cli::{self, Invocation, RunMode};
use cbepm::installer;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match cli::parse(&args) {
        Invocation::NoArgs => println!("write -h for help"),
        Invocation::Help => cli::print_help(),
        Invocation::Install => {
            if let Err(e) = installer::install_vendors().await {
                eprintln!("Install failed: {}", e);
                std::process::exit(1);
            }
        }
        Invocation::Run(Some(RunMode::Dev)) => println!("run development"),
        // "run build" is advertised in the help text but has no action yet.
        Invocation::Run(Some(RunMode::Build)) => {}
        Invocation::Run(None) => {}
        Invocation::UnknownCommand(command) => println!("{} command not found", command),
        Invocation::UnknownRunArg(arg) => {
            println!("{} command not found, write -h for help", arg)
        }
    }
}
