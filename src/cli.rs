use crate::driver::Mode;

pub const USAGE: &str = "\
usage: shader_build [--clean]

Compiles every stale .vert/.frag shader under resources/shaders with glslc.

options:
  --clean     remove compiled *.spv files instead of compiling
  -h, --help  print this message";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args {
    pub clean: bool,
    pub help: bool,
}

impl Args {
    pub fn parse() -> anyhow::Result<Args> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parses arguments with the program name already stripped.
    pub fn parse_from<I, S>(args: I) -> anyhow::Result<Args>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Args::default();

        for arg in args {
            match arg.as_ref() {
                "--clean" => parsed.clean = true,
                "-h" | "--help" => parsed.help = true,
                other => anyhow::bail!("unrecognized argument: {other:?}\n\n{USAGE}"),
            }
        }

        Ok(parsed)
    }

    pub fn mode(&self) -> Mode {
        if self.clean {
            Mode::Clean
        } else {
            Mode::Build
        }
    }
}
