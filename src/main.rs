#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context;
    use clap::Parser;
    use log::info;
    use polydrift::{
        config::SceneConfig, constants::WINDOW_TITLE, fullscreen::FixedWindow,
        render_loop::RenderLoop, shapes::ShapeKind,
    };
    use std::path::PathBuf;
    use three_d::WindowSettings;

    #[derive(Parser, Debug, Clone)]
    #[command(
        author,
        version,
        about = "polydrift - pastel polyhedra drifting around two counter-rotating pivots"
    )]
    pub struct Args {
        /// JSON scene config. Flags below override its values.
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Number of objects.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Number of distinct colors.
        #[arg(long)]
        palette_size: Option<usize>,

        /// Shapes to pick from, uniformly.
        #[arg(long, value_delimiter = ',')]
        shapes: Option<Vec<ShapeKind>>,

        /// Seed for a reproducible scene.
        #[arg(short = 's', long)]
        seed: Option<u64>,

        /// Camera travel towards the scene per frame.
        #[arg(long)]
        dolly: Option<f32>,

        /// Borderless window covering the screen.
        #[arg(long)]
        borderless: bool,

        #[arg(long, default_value = WINDOW_TITLE)]
        title: String,

        /// Logging level.
        #[arg(long, default_value = "info", value_parser = ["info", "trace"])]
        log: String,

        /// Print the effective scene config as JSON and exit.
        #[arg(long)]
        print_config: bool,
    }

    impl Args {
        pub fn scene_config(&self) -> anyhow::Result<SceneConfig> {
            let mut config = match &self.config {
                Some(path) => SceneConfig::from_file(path)?,
                None => SceneConfig::default(),
            };

            if let Some(count) = self.count {
                config.count = count;
            }
            if let Some(palette_size) = self.palette_size {
                config.palette_size = palette_size;
            }
            if let Some(shapes) = &self.shapes {
                config.shapes = shapes.clone();
            }
            if self.seed.is_some() {
                config.seed = self.seed;
            }
            if let Some(dolly) = self.dolly {
                config.dolly = dolly;
            }

            config.validate().context("invalid scene config")?;
            Ok(config)
        }
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();

        let level = match args.log.as_str() {
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        };
        pretty_env_logger::formatted_timed_builder()
            .filter_level(log::LevelFilter::Off)
            .filter_module("polydrift", level)
            .init();

        let config = args.scene_config()?;
        if args.print_config {
            println!("{}", config.to_json()?);
            return Ok(());
        }

        info!("Building scene...");
        let rl = RenderLoop::initialize(config)?;

        let settings = WindowSettings {
            title: args.title.clone(),
            max_size: None,
            borderless: args.borderless,
            ..Default::default()
        };

        rl.run(settings, FixedWindow)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Write;

        fn parse(args: &[&str]) -> Args {
            Args::try_parse_from(std::iter::once("polydrift").chain(args.iter().copied()))
                .unwrap()
        }

        fn config_file(json: &str) -> tempfile::NamedTempFile {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(json.as_bytes()).unwrap();
            file
        }

        #[test]
        fn test_no_flags_gives_defaults() {
            let args = parse(&[]);
            assert_eq!(args.scene_config().unwrap(), SceneConfig::default());
            assert!(!args.print_config);
            assert_eq!(args.title, WINDOW_TITLE);
        }

        #[test]
        fn test_flags_override_config_file() {
            let file = config_file(r#"{ "count": 12, "palette_size": 4, "seed": 1, "dolly": 0.5 }"#);
            let path = file.path().to_str().unwrap();

            let config = parse(&["--config", path, "--seed", "99", "--shapes", "cube,dodecahedron"])
                .scene_config()
                .unwrap();
            // from the file
            assert_eq!(config.count, 12);
            assert_eq!(config.palette_size, 4);
            assert_eq!(config.dolly, 0.5);
            // from the flags
            assert_eq!(config.seed, Some(99));
            assert_eq!(config.shapes, vec![ShapeKind::Cube, ShapeKind::Dodecahedron]);
        }

        #[test]
        fn test_every_override() {
            let config = parse(&[
                "-n",
                "7",
                "--palette-size",
                "3",
                "--shapes",
                "octahedron",
                "-s",
                "5",
                "--dolly",
                "0.01",
            ])
            .scene_config()
            .unwrap();
            assert_eq!(config.count, 7);
            assert_eq!(config.palette_size, 3);
            assert_eq!(config.shapes, vec![ShapeKind::Octahedron]);
            assert_eq!(config.seed, Some(5));
            assert_eq!(config.dolly, 0.01);
        }

        #[test]
        fn test_overrides_are_validated() {
            assert!(parse(&["--palette-size", "0"]).scene_config().is_err());

            // a valid file value does not rescue an invalid flag
            let file = config_file(r#"{ "palette_size": 2 }"#);
            let path = file.path().to_str().unwrap();
            let config = parse(&["-c", path, "--palette-size", "0"]).scene_config();
            assert!(config.is_err());
        }

        #[test]
        fn test_bad_flags_rejected() {
            let parse_err = |args: &[&str]| {
                Args::try_parse_from(std::iter::once("polydrift").chain(args.iter().copied()))
                    .is_err()
            };
            assert!(parse_err(&["--shapes", "sphere"]));
            assert!(parse_err(&["--log", "debug"]));
            assert!(parse_err(&["--count", "-1"]));
        }

        #[test]
        fn test_missing_config_file() {
            assert!(parse(&["--config", "/nonexistent/polydrift.json"]).scene_config().is_err());
        }

        #[test]
        fn test_print_config_output_reads_back() {
            let args = parse(&["--print-config", "--seed", "3", "--borderless"]);
            assert!(args.print_config);
            assert!(args.borderless);

            let config = args.scene_config().unwrap();
            let json = config.to_json().unwrap();
            assert_eq!(SceneConfig::from_json_str(&json).unwrap(), config);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

// the browser build starts from `polydrift::web::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
