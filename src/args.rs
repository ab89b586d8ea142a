use crate::recolor::palette::HUE_STEPS;
use crate::recolor::{ColorChoice, RecolorConfig, parse_hex_color};
use crate::template_matching::Rect;
use image::Rgb;
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Gui,
    /// Run without a window using a fixed selection and color
    Headless { selection: Rect, color: ColorChoice },
}

#[derive(Debug)]
pub struct Args {
    pub mode: Mode,
    pub debug_mode: bool,
    pub config: RecolorConfig,
}

/// Result of parsing the command line
#[derive(Debug)]
pub enum Command {
    Run(Args),
    Help,
    Version,
}

impl Args {
    /// Parse the process arguments. Prints help, version or the parse error
    /// and returns `None` when there is nothing to run.
    pub fn parse() -> Option<Self> {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(&args) {
            Ok(Command::Run(args)) => Some(args),
            Ok(Command::Help) => {
                print_help();
                None
            }
            Ok(Command::Version) => {
                println!("Symbol Recolor v{}", env!("APP_VERSION_DISPLAY"));
                None
            }
            Err(message) => {
                eprintln!("❌ {}", message);
                print_help();
                None
            }
        }
    }

    /// Parse flags (program name already stripped).
    pub fn parse_from(args: &[String]) -> Result<Command, String> {
        let mut config = RecolorConfig::default();
        let mut debug_mode = false;
        let mut selection: Option<Rect> = None;
        let mut color: Option<ColorChoice> = None;

        for arg in args {
            if arg == "--help" || arg == "-h" {
                return Ok(Command::Help);
            } else if arg == "--version" || arg == "-v" {
                return Ok(Command::Version);
            } else if arg == "--debug" {
                debug_mode = true;
            } else if let Some(path) = arg.strip_prefix("--input=") {
                config.input_path = non_empty(path, "--input")?.into();
            } else if let Some(path) = arg.strip_prefix("--output=") {
                config.output_path = non_empty(path, "--output")?.into();
            } else if let Some(val) = arg.strip_prefix("--select=") {
                selection = Some(parse_rect(val)?);
            } else if let Some(val) = arg.strip_prefix("--hue=") {
                let hue: u8 = val
                    .parse()
                    .map_err(|_| format!("Invalid hue value: {}", val))?;
                if hue as u32 >= HUE_STEPS {
                    return Err(format!("Hue must be below {}, got {}", HUE_STEPS, hue));
                }
                color = Some(ColorChoice::Hue(hue));
            } else if let Some(val) = arg.strip_prefix("--color=") {
                color = Some(ColorChoice::Exact(parse_color(val)?));
            } else {
                return Err(format!("Unknown argument: {}", arg));
            }
        }

        let mode = match (selection, color) {
            (Some(selection), color) => Mode::Headless {
                selection,
                color: color.unwrap_or(ColorChoice::Hue(0)),
            },
            (None, Some(_)) => {
                return Err("--hue/--color only apply together with --select".to_string());
            }
            (None, None) => Mode::Gui,
        };

        Ok(Command::Run(Args {
            mode,
            debug_mode,
            config,
        }))
    }
}

fn non_empty<'a>(value: &'a str, flag: &str) -> Result<&'a str, String> {
    if value.is_empty() {
        Err(format!("{} needs a path", flag))
    } else {
        Ok(value)
    }
}

fn parse_numbers<const N: usize>(value: &str, what: &str) -> Result<[u32; N], String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != N {
        return Err(format!("Expected {} comma-separated numbers for {}, got '{}'", N, what, value));
    }
    let mut out = [0u32; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("Invalid number '{}' in {}", part, what))?;
    }
    Ok(out)
}

fn parse_rect(value: &str) -> Result<Rect, String> {
    let [x, y, w, h] = parse_numbers::<4>(value, "--select")?;
    Ok(Rect::new(x, y, w, h))
}

fn parse_color(value: &str) -> Result<Rgb<u8>, String> {
    if value.starts_with('#') {
        return parse_hex_color(value).ok_or_else(|| format!("Invalid hex color: {}", value));
    }
    let [r, g, b] = parse_numbers::<3>(value, "--color")?;
    let channel = |c: u32| u8::try_from(c).map_err(|_| format!("Color channel {} exceeds 255", c));
    Ok(Rgb([channel(r)?, channel(g)?, channel(b)?]))
}

fn print_help() {
    println!("🎨 Symbol Recolor");
    println!();
    println!("USAGE:");
    println!("    symbol-recolor [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    (no flags)          Open the GUI on modified_image.png");
    println!("    --input=PATH        Image to recolor (default: modified_image.png)");
    println!("    --output=PATH       Where to write the result (default: modified_image_2.png)");
    println!("    --select=X,Y,W,H    Skip the GUI and use this symbol rectangle");
    println!("    --hue=N             With --select: pick hue row N (0-179, default 0)");
    println!("    --color=R,G,B       With --select: use this color instead of a hue");
    println!("    --color=#RRGGBB     Same, as a hex color");
    println!("    --debug             Enable debug logging");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    symbol-recolor");
    println!("    symbol-recolor --input=scan.png --output=scan-recolored.png");
    println!("    symbol-recolor --select=120,40,16,16 --hue=60");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<Command, String> {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Args::parse_from(&owned)
    }

    fn run_args(args: &[&str]) -> Args {
        match parse(args) {
            Ok(Command::Run(args)) => args,
            other => panic!("expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_open_gui() {
        let args = run_args(&[]);
        assert_eq!(args.mode, Mode::Gui);
        assert!(!args.debug_mode);
        assert_eq!(args.config.input_path, PathBuf::from("modified_image.png"));
        assert_eq!(args.config.output_path, PathBuf::from("modified_image_2.png"));
    }

    #[test]
    fn test_paths_and_debug() {
        let args = run_args(&["--input=a.png", "--output=b.png", "--debug"]);
        assert_eq!(args.config.input_path, PathBuf::from("a.png"));
        assert_eq!(args.config.output_path, PathBuf::from("b.png"));
        assert!(args.debug_mode);
    }

    #[test]
    fn test_headless_defaults_to_hue_zero() {
        let args = run_args(&["--select=1,2,3,4"]);
        assert_eq!(
            args.mode,
            Mode::Headless {
                selection: Rect::new(1, 2, 3, 4),
                color: ColorChoice::Hue(0)
            }
        );
    }

    #[test]
    fn test_headless_with_color() {
        let args = run_args(&["--select=0,0,5,5", "--color=0,255,0"]);
        assert_eq!(
            args.mode,
            Mode::Headless {
                selection: Rect::new(0, 0, 5, 5),
                color: ColorChoice::Exact(Rgb([0, 255, 0]))
            }
        );
    }

    #[test]
    fn test_headless_with_hex_color() {
        let args = run_args(&["--select=0,0,5,5", "--color=#10ff00"]);
        assert_eq!(
            args.mode,
            Mode::Headless {
                selection: Rect::new(0, 0, 5, 5),
                color: ColorChoice::Exact(Rgb([16, 255, 0]))
            }
        );
        assert!(parse(&["--select=0,0,5,5", "--color=#12345"]).is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["--select=1,2,3"]).is_err());
        assert!(parse(&["--select=0,0,5,5", "--hue=180"]).is_err());
        assert!(parse(&["--select=0,0,5,5", "--color=0,256,0"]).is_err());
        assert!(parse(&["--hue=10"]).is_err());
        assert!(parse(&["--input="]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert!(matches!(parse(&["-h"]), Ok(Command::Help)));
        assert!(matches!(parse(&["--version"]), Ok(Command::Version)));
    }
}
