#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Run,
    Install,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Dev,
    Build,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    NoArgs,
    Help,
    Install,
    Run(Option<RunMode>),
    UnknownCommand(String),
    UnknownRunArg(String),
}

impl Command {
    fn parse(arg: &str) -> Option<Command> {
        match arg {
            "-h" | "-help" => Some(Command::Help),
            "run" => Some(Command::Run),
            "install" => Some(Command::Install),
            _ => None,
        }
    }
}

impl RunMode {
    fn parse(arg: &str) -> Option<RunMode> {
        match arg {
            "dev" => Some(RunMode::Dev),
            "build" => Some(RunMode::Build),
            _ => None,
        }
    }
}

pub fn parse<S: AsRef<str>>(args: &[S]) -> Invocation {
    let first = match args.first() {
        Some(first) => first.as_ref(),
        None => return Invocation::NoArgs,
    };

    match Command::parse(first) {
        None => Invocation::UnknownCommand(first.to_string()),
        Some(Command::Help) => Invocation::Help,
        Some(Command::Install) => Invocation::Install,
        Some(Command::Run) => match args.get(1) {
            None => Invocation::Run(None),
            Some(arg) => match RunMode::parse(arg.as_ref()) {
                Some(mode) => Invocation::Run(Some(mode)),
                None => Invocation::UnknownRunArg(arg.as_ref().to_string()),
            },
        },
    }
}

pub fn print_help() {
    println!("1. run       = to run the engine");
    println!("2. install   = to install the engine");
    println!("3. run dev   = to run in development mode");
    println!("4. run build = to build the engine");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        assert_eq!(parse::<&str>(&[]), Invocation::NoArgs);
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(&["-h"]), Invocation::Help);
        assert_eq!(parse(&["-help"]), Invocation::Help);
    }

    #[test]
    fn test_install() {
        assert_eq!(parse(&["install"]), Invocation::Install);
    }

    #[test]
    fn test_run_modes() {
        assert_eq!(parse(&["run"]), Invocation::Run(None));
        assert_eq!(parse(&["run", "dev"]), Invocation::Run(Some(RunMode::Dev)));
        assert_eq!(parse(&["run", "build"]), Invocation::Run(Some(RunMode::Build)));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse(&["xyz"]),
            Invocation::UnknownCommand("xyz".to_string())
        );
    }

    #[test]
    fn test_unknown_run_arg() {
        assert_eq!(
            parse(&["run", "xyz"]),
            Invocation::UnknownRunArg("xyz".to_string())
        );
    }
}
