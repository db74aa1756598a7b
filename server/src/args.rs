pub fn parse() -> Args {
    <Args as clap::Parser>::parse()
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Port to serve on
    #[arg(short, long, default_value = "8080", value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Print the route listing as JSON and exit
    #[arg(short, long)]
    list: bool,
}

impl Args {
    fn verbosity(&self) -> Verbosity {
        let (level, include_spans) = match self.verbosity {
            0 => (tracing::Level::ERROR, false),
            1 => (tracing::Level::WARN, false),
            2 => (tracing::Level::INFO, false),
            3 => (tracing::Level::INFO, true),
            4 => (tracing::Level::DEBUG, true),
            _ => (tracing::Level::TRACE, true),
        };

        Verbosity {
            level,
            include_spans,
        }
    }

    pub fn decompose(self) -> (Verbosity, u16, bool) {
        (self.verbosity(), self.port, self.list)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Verbosity {
    pub level: tracing::Level,
    pub include_spans: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &[&str]) -> Result<Args, clap::Error> {
        <Args as clap::Parser>::try_parse_from(std::iter::once("server").chain(input.iter().copied()))
    }

    #[test]
    fn defaults() {
        let (verbosity, port, list) = args(&[]).unwrap().decompose();
        assert_eq!(verbosity.level, tracing::Level::ERROR);
        assert!(!verbosity.include_spans);
        assert_eq!(port, 8080);
        assert!(!list);
    }

    #[test]
    fn verbosity_count() {
        let (verbosity, _, _) = args(&["-vvvv"]).unwrap().decompose();
        assert_eq!(verbosity.level, tracing::Level::DEBUG);
        assert!(verbosity.include_spans);
    }

    #[test]
    fn port_zero_rejected() {
        assert!(args(&["-p", "0"]).is_err());
    }

    #[test]
    fn list() {
        let (_, port, list) = args(&["--list", "--port", "27"]).unwrap().decompose();
        assert_eq!(port, 27);
        assert!(list);
    }
}
