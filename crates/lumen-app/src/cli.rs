use clap::{Parser, ValueEnum};

/// Where the starter scene is created.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, ValueEnum)]
pub enum BackendArg {
    /// No GPU: validate and print the scene summary.
    Null,
    /// Offscreen wgpu device, no window.
    Headless,
    /// Interactive window.
    #[default]
    Window,
}

/// User-specified command line parameters
#[derive(Debug, Parser)]
#[clap(name = "lumen", about)]
pub struct Args {
    #[clap(long, short = 'b', value_enum, default_value_t = BackendArg::Window)]
    /// Engine backend the scene is created on.
    pub backend: BackendArg,

    #[clap(long)]
    /// Log filter in `env_logger` syntax. Overrides `RUST_LOG`.
    pub log: Option<String>,

    #[clap(long)]
    /// Uses a UV sphere instead of the default box.
    pub sphere: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_window_box() {
        let args = Args::try_parse_from(["lumen"]).unwrap();
        assert_eq!(args.backend, BackendArg::Window);
        assert!(args.log.is_none());
        assert!(!args.sphere);
    }

    #[test]
    fn parses_all_flags() {
        let args =
            Args::try_parse_from(["lumen", "--backend", "headless", "--log", "debug", "--sphere"])
                .unwrap();
        assert_eq!(args.backend, BackendArg::Headless);
        assert_eq!(args.log.as_deref(), Some("debug"));
        assert!(args.sphere);
    }

    #[test]
    fn short_backend_flag() {
        let args = Args::try_parse_from(["lumen", "-b", "null"]).unwrap();
        assert_eq!(args.backend, BackendArg::Null);
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Args::try_parse_from(["lumen", "--backend", "vulkan"]).is_err());
    }
}
