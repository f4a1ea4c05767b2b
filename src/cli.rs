// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;
use glam::IVec2;

#[derive(Parser, Debug, Clone)]
#[command(name = "display-binding")]
#[command(about = "Binds a video output surface to the display it sits on", long_about = None)]
pub struct Cli {
    /// Ignore per-display pixel ratios and render at ratio 1.0
    #[arg(
        long = "no-hidpi",
        env = "VIDEO_DEVICE_NO_HIDPI",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_hidpi: bool,

    /// Resolve positions against a JSON display layout instead of opening a window
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Surface position to resolve, as `x,y` (repeatable, used with --layout)
    #[arg(long = "probe", value_parser = parse_point)]
    pub probes: Vec<IVec2>,

    /// Initial surface width in logical pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Initial surface height in logical pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Skip GPU presentation and only track the window
    #[arg(long = "no-gpu", default_value = "false")]
    pub no_gpu: bool,
}

/// Parse `x,y` into a desktop-space point
pub fn parse_point(s: &str) -> Result<IVec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid x in `{}`: {}", s, e))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid y in `{}`: {}", s, e))?;
    Ok(IVec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("10,20"), Ok(IVec2::new(10, 20)));
        assert_eq!(parse_point(" -1920 , 5 "), Ok(IVec2::new(-1920, 5)));
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("1,b").is_err());
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["display-binding"]);
        assert!(!cli.no_hidpi);
        assert!(cli.layout.is_none());
        assert!(cli.probes.is_empty());
        assert_eq!((cli.width, cli.height), (800, 600));
    }

    #[test]
    fn collects_repeated_probes() {
        let cli = Cli::parse_from([
            "display-binding",
            "--layout",
            "desk.json",
            "--probe",
            "10,10",
            "--probe",
            "2000,10",
        ]);
        assert_eq!(cli.probes, vec![IVec2::new(10, 10), IVec2::new(2000, 10)]);
        assert_eq!(cli.layout, Some(PathBuf::from("desk.json")));
    }
}
