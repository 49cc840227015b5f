use libpivec::config::{self, Config};
use libpivec::errors::*;

pub const USAGE: &'static str = "\
Usage: pivec [OPTION]...

Configure the Raspberry Pi composite video encoder from user mode.
Turning color off disables both the color burst and the modulated chroma
signal, which gives a clean high resolution picture on monochrome CRTs
without the moving dither pattern. Needs access to /dev/mem.

Tested on the Pi 4 and Pi Zero 2 W and expected to work on the Pi 1, 2, 3
and Zero. The Pi 5 moved composite video to its southbridge and is not
supported.

OPTIONS:
  -c, --color on|off   Turn the color burst and chrominance on or off
                       (left unchanged when not given)
  -v, --verbose        Print board details and the resulting encoder state
  -h, -?, --help       Show this text
";

#[derive(Debug, PartialEq)]
pub enum Action {
    Run(Config),
    Help,
}

/// Turns command line arguments (without the program name) into an action.
pub fn parse<It>(mut args: It) -> Result<Action>
    where It: Iterator<Item=String> {
    let mut config = Config::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--color" => {
                let value = args.next().ok_or(ErrorKind::MissingColorValue)?;
                config.color = Some(config::parse_color(&value)?);
            }
            "-v" | "--verbose" => config.verbose = true,
            "-h" | "-?" | "--help" => return Ok(Action::Help),
            switch if switch.starts_with('-') => {
                return Err(ErrorKind::UnknownSwitch(switch.to_owned()).into())
            }
            other => return Err(ErrorKind::UnexpectedArgument(other.to_owned()).into()),
        }
    }

    Ok(Action::Run(config))
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse_strs(args: &[&str]) -> Result<Action> {
        parse(args.iter().map(|s| s.to_string()))
    }

    fn run_config(args: &[&str]) -> Config {
        match parse_strs(args).unwrap() {
            Action::Run(config) => config,
            Action::Help => panic!("unexpected help for {:?}", args),
        }
    }

    #[test]
    fn no_args() {
        let config = run_config(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.color, None);
    }

    #[test]
    fn color_and_verbose() {
        let config = run_config(&["-c", "off", "-v"]);
        assert_eq!(config.color, Some(false));
        assert!(config.verbose);

        let config = run_config(&["--color", "on"]);
        assert_eq!(config.color, Some(true));
        assert!(!config.verbose);
    }

    #[test]
    fn last_color_wins() {
        assert_eq!(run_config(&["-c", "off", "-c", "on"]).color, Some(true));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse_strs(&["-v", "-h", "--bogus"]).unwrap(), Action::Help);
        assert_eq!(parse_strs(&["-?"]).unwrap(), Action::Help);
    }

    #[test]
    fn color_switch_without_value() {
        let err = parse_strs(&["-v", "-c"]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_BAD_COLOR_VALUE);
        assert!(err.is_usage_error());
    }

    #[test]
    fn bad_color_value() {
        let err = parse_strs(&["-c", "maybe"]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_BAD_COLOR_VALUE);
    }

    #[test]
    fn unknown_switch() {
        let err = parse_strs(&["-x"]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_UNKNOWN_SWITCH);
    }

    #[test]
    fn stray_argument() {
        let err = parse_strs(&["/dev/ttyS0"]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_UNEXPECTED_ARGUMENT);
    }
}
