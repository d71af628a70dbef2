//! Standalone CLI tool for mouse input and natural-language commands.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use screenkit_core::action::{parse_drag_range, Action, ClickKind, Point};
use screenkit_core::command;
use screenkit_core::errors::ScreenkitError;
use screenkit_core::input::{default_driver, Automator, NativeDriver};
use screenkit_core::settings::InputSettings;

const USAGE: &str = "\
screen-click - usage:
  screen-click --x 100 --y 200            # click (100, 200)
  screen-click --x 100 --y 200 --double   # double-click
  screen-click --x 100 --y 200 --right    # right-click
  screen-click --drag 100,100:500,500     # drag
  screen-click --scroll -300              # scroll down 300
  screen-click --get-size                 # screen size
  screen-click --get-pos                  # current mouse position

Natural-language commands:
  screen-click --text '点击 100, 200'
  screen-click --text '双击 500, 300'
  screen-click --text 'right click 800, 600'
  screen-click --text '拖拽从 100, 100 到 500, 500'
  screen-click --text 'scroll down'";

#[derive(Parser, Debug)]
#[command(name = "screen-click", version, about = "Click, drag and scroll the mouse")]
struct Args {
    /// X coordinate
    #[arg(long)]
    x: Option<u32>,

    /// Y coordinate
    #[arg(long)]
    y: Option<u32>,

    /// Double-click
    #[arg(long)]
    double: bool,

    /// Right-click
    #[arg(long)]
    right: bool,

    /// Middle-click
    #[arg(long)]
    middle: bool,

    /// Drag: start_x,start_y:end_x,end_y
    #[arg(long, value_name = "RANGE")]
    drag: Option<String>,

    /// Scroll wheel clicks: positive up, negative down
    #[arg(long, allow_negative_numbers = true)]
    scroll: Option<i32>,

    /// Print the screen size
    #[arg(long)]
    get_size: bool,

    /// Print the mouse position after a short delay
    #[arg(long)]
    get_pos: bool,

    /// Natural-language command, e.g. '双击 500, 300'
    #[arg(long)]
    text: Option<String>,

    /// Do not abort when the pointer sits in a screen corner
    #[arg(long, env = "SCREENKIT_NO_FAIL_SAFE")]
    no_fail_safe: bool,

    /// Pause after each action, in milliseconds
    #[arg(long, env = "SCREENKIT_PAUSE_MS", default_value_t = 100)]
    pause_ms: u64,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, PartialEq)]
enum Plan {
    ScreenSize,
    Position,
    DragRange(String),
    Act(Action),
    Usage,
}

impl Args {
    fn point(&self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }

    fn click_kind(&self) -> ClickKind {
        if self.double {
            ClickKind::Double
        } else if self.right {
            ClickKind::Right
        } else if self.middle {
            ClickKind::Middle
        } else {
            ClickKind::Single
        }
    }

    fn plan(&self) -> Plan {
        if self.get_size {
            return Plan::ScreenSize;
        }
        if self.get_pos {
            return Plan::Position;
        }
        if let Some(range) = &self.drag {
            return Plan::DragRange(range.clone());
        }
        if let Some(amount) = self.scroll {
            return Plan::Act(Action::Scroll {
                amount,
                at: self.point(),
            });
        }
        if let Some(at) = self.point() {
            return Plan::Act(Action::Click {
                at,
                kind: self.click_kind(),
            });
        }
        match self.text.as_deref().and_then(command::classify) {
            Some(action) => Plan::Act(action),
            None => Plan::Usage,
        }
    }

    fn settings(&self) -> InputSettings {
        InputSettings::new()
            .with_fail_safe(!self.no_fail_safe)
            .with_pause(Duration::from_millis(self.pause_ms))
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn automator(args: &Args) -> Result<Automator<NativeDriver>, ScreenkitError> {
    Ok(Automator::new(default_driver()?, args.settings()))
}

fn perform(automator: &mut Automator<NativeDriver>, action: Action) -> Result<(), ScreenkitError> {
    automator.perform(action)?;
    match action {
        Action::Click { at, kind } => println!("✓ {kind} click at {at}"),
        Action::Drag(cmd) => println!("✓ dragged from {} to {}", cmd.start, cmd.end),
        Action::Scroll { amount, .. } => {
            let direction = if amount > 0 { "up" } else { "down" };
            println!("✓ scrolled {direction} {}", amount.unsigned_abs());
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), ScreenkitError> {
    match args.plan() {
        Plan::ScreenSize => {
            let (width, height) = automator(args)?.screen_size()?;
            println!("Screen size: {width} x {height}");
        }
        Plan::Position => {
            let mut automator = automator(args)?;
            println!(
                "Move the mouse to the target; its position is shown in {} seconds...",
                automator.settings().position_delay.as_secs()
            );
            let (x, y) = automator.position()?;
            println!("Current mouse position: ({x}, {y})");
        }
        Plan::DragRange(range) => match parse_drag_range(&range) {
            Ok(cmd) => perform(&mut automator(args)?, Action::Drag(cmd))?,
            Err(ScreenkitError::MalformedInput(_)) => {
                println!("Invalid drag range: {range}");
                println!("Expected format: --drag 100,100:500,500");
            }
            Err(e) => return Err(e),
        },
        Plan::Act(action) => perform(&mut automator(args)?, action)?,
        Plan::Usage => println!("{USAGE}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ScreenkitError::MissingDependency { capability, hint }) => {
            eprintln!("screen-click: {capability} is not available");
            eprintln!("{hint}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("screen-click: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use screenkit_core::action::DragCommand;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("screen-click").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_flags_prints_usage() {
        assert_eq!(parse(&[]).plan(), Plan::Usage);
    }

    #[test]
    fn test_coordinate_click_kinds() {
        let click = |kind| {
            Plan::Act(Action::Click {
                at: Point::new(100, 200),
                kind,
            })
        };
        assert_eq!(parse(&["--x", "100", "--y", "200"]).plan(), click(ClickKind::Single));
        assert_eq!(
            parse(&["--x", "100", "--y", "200", "--double"]).plan(),
            click(ClickKind::Double)
        );
        assert_eq!(
            parse(&["--x", "100", "--y", "200", "--right"]).plan(),
            click(ClickKind::Right)
        );
        assert_eq!(
            parse(&["--x", "100", "--y", "200", "--middle"]).plan(),
            click(ClickKind::Middle)
        );
    }

    #[test]
    fn test_x_without_y_is_not_a_click() {
        assert_eq!(parse(&["--x", "100"]).plan(), Plan::Usage);
    }

    #[test]
    fn test_flag_precedence() {
        assert_eq!(parse(&["--get-size", "--get-pos"]).plan(), Plan::ScreenSize);
        assert_eq!(parse(&["--get-pos", "--drag", "1,2:3,4"]).plan(), Plan::Position);
        assert_eq!(
            parse(&["--drag", "1,2:3,4", "--scroll", "5"]).plan(),
            Plan::DragRange("1,2:3,4".into())
        );
        assert_eq!(
            parse(&["--scroll", "-300", "--x", "10", "--y", "20"]).plan(),
            Plan::Act(Action::Scroll {
                amount: -300,
                at: Some(Point::new(10, 20)),
            })
        );
        assert!(matches!(
            parse(&["--x", "1", "--y", "2", "--text", "scroll up"]).plan(),
            Plan::Act(Action::Click { .. })
        ));
    }

    #[test]
    fn test_text_commands() {
        assert_eq!(
            parse(&["--text", "拖拽从 100, 100 到 500, 500"]).plan(),
            Plan::Act(Action::Drag(DragCommand {
                start: Point::new(100, 100),
                end: Point::new(500, 500),
            }))
        );
        assert_eq!(
            parse(&["--text", "scroll down"]).plan(),
            Plan::Act(Action::Scroll { amount: -300, at: None })
        );
        assert_eq!(parse(&["--text", "nothing useful"]).plan(), Plan::Usage);
    }

    #[test]
    fn test_malformed_drag_does_not_touch_input() {
        // Malformed ranges are reported before any driver is created.
        let args = parse(&["--drag", "abc:def"]);
        assert_eq!(args.plan(), Plan::DragRange("abc:def".into()));
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_settings_from_flags() {
        let s = parse(&["--no-fail-safe", "--pause-ms", "0"]).settings();
        assert!(!s.fail_safe);
        assert_eq!(s.pause, Duration::ZERO);
    }
}
