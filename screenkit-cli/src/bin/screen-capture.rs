//! Standalone CLI tool for screenshots, OCR and screenshot listing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use screenkit_core::capture::{CaptureMode, CaptureRequest, DEFAULT_OUTPUT};
use screenkit_core::errors::ScreenkitError;
use screenkit_core::listing::list_screenshots;
use screenkit_core::ocr::{self, OcrConfig, DEFAULT_LANGUAGE};

#[derive(Parser, Debug)]
#[command(
    name = "screen-capture",
    version,
    about = "Capture the screen with the OS screenshot utility, run OCR, list screenshots"
)]
struct Args {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Capture a window
    #[arg(short, long)]
    window: bool,

    /// Select a screen region interactively
    #[arg(short, long)]
    interactive: bool,

    /// Capture through the xcap library instead of the OS utility
    #[arg(short = 'p', long = "python", visible_alias = "library")]
    library: bool,

    /// Recognize the text in IMAGE
    #[arg(long, value_name = "IMAGE")]
    ocr: Option<PathBuf>,

    /// List screenshot files in DIR (default: current directory)
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    list: Option<PathBuf>,

    /// Tesseract language for --ocr
    #[arg(long, env = "SCREENKIT_OCR_LANG", default_value = DEFAULT_LANGUAGE)]
    ocr_lang: String,

    /// Tesseract data directory for --ocr
    #[arg(long, env = "SCREENKIT_TESSDATA")]
    tessdata: Option<PathBuf>,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, PartialEq)]
enum Task {
    Ocr(PathBuf),
    List(PathBuf),
    Capture(CaptureMode),
}

impl Args {
    fn task(&self) -> Task {
        if let Some(image) = &self.ocr {
            Task::Ocr(image.clone())
        } else if let Some(dir) = &self.list {
            Task::List(dir.clone())
        } else {
            Task::Capture(CaptureMode::from_flags(self.window, self.interactive, self.library))
        }
    }

    fn ocr_config(&self) -> OcrConfig {
        let config = OcrConfig::new().with_language(&self.ocr_lang);
        match &self.tessdata {
            Some(dir) => config.with_tessdata(dir),
            None => config,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<(), ScreenkitError> {
    match args.task() {
        Task::Ocr(image) => {
            let text = ocr::recognize(&image, &args.ocr_config())?;
            if text.is_empty() {
                println!("OCR result:\n(no text recognized)");
            } else {
                println!("OCR result:\n{text}");
            }
        }
        Task::List(dir) => {
            let files = list_screenshots(&dir)?;
            println!("Screenshot files ({}):", files.len());
            for file in &files {
                println!("  - {}", file.display());
            }
        }
        Task::Capture(mode) => {
            let path = CaptureRequest::new(mode, Some(args.output.as_path()))?.execute()?;
            println!("Screenshot saved: {}", path.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ScreenkitError::MissingDependency { capability, hint }) => {
            eprintln!("screen-capture: {capability} is not available");
            eprintln!("{hint}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("screen-capture: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("screen-capture").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_flags_is_full_screen_to_default_file() {
        let args = parse(&[]);
        assert_eq!(args.task(), Task::Capture(CaptureMode::FullScreen));
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_mode_flags() {
        assert_eq!(parse(&["-w"]).task(), Task::Capture(CaptureMode::Window));
        assert_eq!(parse(&["-i"]).task(), Task::Capture(CaptureMode::Region));
        assert_eq!(parse(&["-p"]).task(), Task::Capture(CaptureMode::Library));
        assert_eq!(parse(&["--library"]).task(), Task::Capture(CaptureMode::Library));
        assert_eq!(parse(&["-p", "-w", "-i"]).task(), Task::Capture(CaptureMode::Library));
    }

    #[test]
    fn test_list_defaults_to_current_directory() {
        assert_eq!(parse(&["--list"]).task(), Task::List(PathBuf::from(".")));
        assert_eq!(parse(&["--list", "shots"]).task(), Task::List(PathBuf::from("shots")));
    }

    #[test]
    fn test_ocr_takes_precedence() {
        assert_eq!(
            parse(&["--ocr", "a.png", "--list", "-w"]).task(),
            Task::Ocr(PathBuf::from("a.png"))
        );
    }

    #[test]
    fn test_ocr_config_from_flags() {
        let args = parse(&["--ocr", "a.png", "--ocr-lang", "eng", "--tessdata", "/td"]);
        let config = args.ocr_config();
        assert_eq!(config.language, "eng");
        assert_eq!(config.tessdata, Some(PathBuf::from("/td")));
    }
}
