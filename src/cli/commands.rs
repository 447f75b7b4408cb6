use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Pattern-based inventory of HTTP routes in a source tree
#[derive(Parser, Debug)]
#[command(
    name = "routescan",
    about = "Inventory HTTP routes, parameters, headers and env vars in a source tree",
    version,
    author,
    long_about = "routescan walks a directory of JavaScript/TypeScript sources and matches \
                  route declarations, mount prefixes, request parameter reads, header reads, \
                  environment variable reads and comments with plain text patterns. Results \
                  are written as JSON, text and CSV reports under <output-dir>/<folder name>/.\n\n\
                  Examples:\n  \
                  routescan ./backend\n  \
                  routescan ./backend --include-tests\n  \
                  routescan ./backend -o reports -x node_modules -x dist\n  \
                  routescan ./backend --ext .mjs --ext .cjs --format json"
)]
pub struct CliArgs {
    #[arg(value_name = "DIRECTORY", help = "Root directory to scan")]
    pub directory: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Report root directory [default: data, env: ROUTESCAN_OUTPUT_DIR]"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Also scan *.spec.* and *.test.* files")]
    pub include_tests: bool,

    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXT",
        help = "File extension to scan, repeatable [default: .js .ts, env: ROUTESCAN_EXTENSIONS]"
    )]
    pub extensions: Vec<String>,

    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "DIR",
        help = "Directory name to skip, repeatable"
    )]
    pub exclude: Vec<String>,

    #[arg(long, help = "Honor .gitignore files and skip hidden entries")]
    pub gitignore: bool,

    #[arg(
        long,
        value_name = "TAG",
        help = "Value prefix in the synthetic query string [default: TAG, env: ROUTESCAN_QUERY_TAG]"
    )]
    pub query_tag: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Summary output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["routescan", "./backend"]);
        assert_eq!(args.directory, PathBuf::from("./backend"));
        assert!(args.output_dir.is_none());
        assert!(!args.include_tests);
        assert!(args.extensions.is_empty());
        assert!(args.exclude.is_empty());
        assert!(!args.gitignore);
        assert!(args.query_tag.is_none());
        assert_eq!(args.format, OutputFormatArg::Human);
    }

    #[test]
    fn test_all_options() {
        let args = CliArgs::parse_from([
            "routescan",
            "./backend",
            "-o",
            "reports",
            "--include-tests",
            "--ext",
            ".mjs",
            "-e",
            "cjs",
            "-x",
            "node_modules",
            "--exclude",
            "dist",
            "--gitignore",
            "--query-tag",
            "FUZZ",
            "--format",
            "json",
        ]);

        assert_eq!(args.output_dir, Some(PathBuf::from("reports")));
        assert!(args.include_tests);
        assert_eq!(args.extensions, vec![".mjs", "cjs"]);
        assert_eq!(args.exclude, vec!["node_modules", "dist"]);
        assert!(args.gitignore);
        assert_eq!(args.query_tag, Some("FUZZ".to_string()));
        assert_eq!(args.format, OutputFormatArg::Json);
    }

    #[test]
    fn test_directory_is_required() {
        let err = CliArgs::try_parse_from(["routescan"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(CliArgs::try_parse_from(["routescan", ".", "-v", "-q"]).is_err());

        let args = CliArgs::parse_from(["routescan", ".", "-q"]);
        assert!(args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["routescan", ".", "--log-level", "debug"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
