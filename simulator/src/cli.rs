//! Command-line options.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "simulator", about = "Desktop preview of the 800x480 HVAC touch panel")]
pub struct Args {
    /// Window scale factor.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=4))]
    pub scale: u32,

    /// Start with the inspector enabled.
    #[arg(long)]
    pub inspect: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["simulator"]);
        assert_eq!(args.scale, 1);
        assert!(!args.inspect);
        assert_eq!(args.log, "info");
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from(["simulator", "--scale", "2", "--inspect", "--log", "debug"]);
        assert_eq!(args.scale, 2);
        assert!(args.inspect);
        assert_eq!(args.log, "debug");
    }

    #[test]
    fn test_scale_out_of_range() {
        assert!(Args::try_parse_from(["simulator", "--scale", "0"]).is_err());
        assert!(Args::try_parse_from(["simulator", "--scale", "9"]).is_err());
    }
}
