use std::path::PathBuf;

use anyhow::{bail, Context};

use bowlsaver_core::Vector;
use bowlsaver_designer::JigState;

/// Application-level types for the root crate
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub center: Option<Vector>,
    pub rotation: Option<f64>,
    pub radius: Option<f64>,
    pub commit: bool,
    pub show_help: bool,
}

pub const USAGE: &str = "\
Usage: bowlsaver [CONFIG] [--move X Y] [--rotate DEG] [--radius R] [--commit]

  CONFIG         jig configuration file (.toml or .json)
  --move X Y     cutter pivot position in mm
  --rotate DEG   arm rotation in degrees
  --radius R     cut radius in mm
  --commit       commit the resulting cut to the history
";

impl CliOptions {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.show_help = true,
                "--commit" => options.commit = true,
                "--move" => {
                    let x = number(args.next(), "--move X")?;
                    let y = number(args.next(), "--move Y")?;
                    options.center = Some(Vector::new(x, y));
                }
                "--rotate" => options.rotation = Some(number(args.next(), "--rotate")?),
                "--radius" => options.radius = Some(number(args.next(), "--radius")?),
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                path => {
                    if options.config_path.is_some() {
                        bail!("more than one configuration file given");
                    }
                    options.config_path = Some(PathBuf::from(path));
                }
            }
        }
        Ok(options)
    }

    /// Applies the requested pose on top of the configured one.
    pub fn apply(&self, state: &mut JigState) {
        if let Some(radius) = self.radius {
            state.set_radius(radius);
        }
        if let Some(rotation) = self.rotation {
            state.rotate(rotation);
        }
        if let Some(center) = self.center {
            state.move_to(center);
        }
        if self.commit {
            state.add_current_cut();
        }
    }
}

fn number(arg: Option<String>, what: &str) -> anyhow::Result<f64> {
    let raw = arg.with_context(|| format!("{what} needs a value"))?;
    let value: f64 = raw
        .parse()
        .with_context(|| format!("{what}: '{raw}' is not a number"))?;
    if !value.is_finite() {
        bail!("{what}: '{raw}' is not finite");
    }
    Ok(value)
}
