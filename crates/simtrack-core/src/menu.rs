//! Interactive results menu.
//!
//! A blocking read-evaluate loop: list the profiles, read a choice, show the
//! chosen profile's results, repeat until the exit option is picked.

use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use anyhow::Result;

use crate::error::SelectionError;
use crate::profile::Profile;
use crate::traits::ChartViewer;

/// A source of operator input lines.
pub trait LineSource {
    /// Next line without its terminator, or `None` once input is closed.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from the process stdin.
///
/// Stdin is locked only for the duration of each read, so a chart viewer can
/// read from it between menu prompts.
#[derive(Debug, Default)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(trim_newline(line))),
        }
    }
}

/// Reads lines from any buffered reader.
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(trim_newline(line))),
        }
    }
}

fn trim_newline(mut line: String) -> String {
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
    line
}

/// A valid menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Show results for the profile at this zero-based index.
    View(usize),
    Exit,
}

/// Parse a line typed at the prompt against a menu of `profile_count`
/// profiles plus the trailing exit entry.
pub fn parse_choice(input: &str, profile_count: usize) -> Result<MenuChoice, SelectionError> {
    let trimmed = input.trim();
    let out_of_range = || SelectionError::OutOfRange {
        choice: trimmed.to_string(),
        max: profile_count + 1,
    };
    let choice: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => SelectionError::NotANumber(trimmed.to_string()),
    })?;

    let exit = profile_count as i64 + 1;
    if (1..exit).contains(&choice) {
        Ok(MenuChoice::View((choice - 1) as usize))
    } else if choice == exit {
        Ok(MenuChoice::Exit)
    } else {
        Err(out_of_range())
    }
}

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The operator picked the exit option.
    Requested,
    /// Input closed before the exit option was picked.
    InputClosed,
}

/// What happened during one menu session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSummary {
    /// Number of times a profile's results were shown.
    pub views: usize,
    /// Number of lines rejected with a re-prompt.
    pub rejected: usize,
    pub exit: MenuExit,
}

fn print_menu(profiles: &[Profile], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n--- Results Viewer Menu ---")?;
    for (i, profile) in profiles.iter().enumerate() {
        writeln!(out, "{}. View results for {}", i + 1, profile.name())?;
    }
    writeln!(out, "{}. Exit", profiles.len() + 1)?;
    write!(out, "Choose an option: ")?;
    out.flush()
}

/// Run the menu until the exit option is chosen or input closes.
pub fn run_menu(
    profiles: &[Profile],
    input: &mut dyn LineSource,
    out: &mut dyn Write,
    viewer: &mut dyn ChartViewer,
) -> Result<MenuSummary> {
    let mut views = 0;
    let mut rejected = 0;

    loop {
        print_menu(profiles, out)?;

        let Some(line) = input.next_line()? else {
            tracing::warn!("input closed before exit was chosen");
            writeln!(out)?;
            return Ok(MenuSummary {
                views,
                rejected,
                exit: MenuExit::InputClosed,
            });
        };

        match parse_choice(&line, profiles.len()) {
            Ok(MenuChoice::View(idx)) => {
                let profile = &profiles[idx];
                tracing::debug!(profile = profile.name(), "showing results");
                profile.show_results(out, viewer)?;
                views += 1;
            }
            Ok(MenuChoice::Exit) => {
                writeln!(out, "Exiting...")?;
                return Ok(MenuSummary {
                    views,
                    rejected,
                    exit: MenuExit::Requested,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejected menu input");
                writeln!(out, "{}", e.prompt_message())?;
                rejected += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmotionalState;
    use crate::traits::PerformanceChart;

    #[derive(Default)]
    struct CountingViewer {
        owners: Vec<String>,
    }

    impl ChartViewer for CountingViewer {
        fn display(&mut self, chart: &PerformanceChart) -> anyhow::Result<()> {
            self.owners.push(chart.owner.clone());
            Ok(())
        }
    }

    fn make_profiles() -> Vec<Profile> {
        let mut first = Profile::new("Gabriel Machado", "Medicine", 2024);
        first
            .record_session(
                "Basic Suturing",
                88,
                410,
                2,
                3,
                EmotionalState::Relaxed,
                &mut io::sink(),
            )
            .unwrap();
        let second = Profile::new("Camila Padalino", "Medicine", 2024);
        vec![first, second]
    }

    fn run(input: &str, profiles: &[Profile]) -> (MenuSummary, String, Vec<String>) {
        let mut lines = ReaderLines::new(input.as_bytes());
        let mut out = Vec::new();
        let mut viewer = CountingViewer::default();
        let summary = run_menu(profiles, &mut lines, &mut out, &mut viewer).unwrap();
        (summary, String::from_utf8(out).unwrap(), viewer.owners)
    }

    #[test]
    fn parse_choice_cases() {
        assert_eq!(parse_choice("1", 2), Ok(MenuChoice::View(0)));
        assert_eq!(parse_choice(" 2 ", 2), Ok(MenuChoice::View(1)));
        assert_eq!(parse_choice("3", 2), Ok(MenuChoice::Exit));
        assert_eq!(
            parse_choice("5", 2),
            Err(SelectionError::OutOfRange {
                choice: "5".into(),
                max: 3
            })
        );
        assert_eq!(
            parse_choice("0", 2),
            Err(SelectionError::OutOfRange {
                choice: "0".into(),
                max: 3
            })
        );
        assert_eq!(
            parse_choice("-1", 2),
            Err(SelectionError::OutOfRange {
                choice: "-1".into(),
                max: 3
            })
        );
        assert_eq!(
            parse_choice("abc", 2),
            Err(SelectionError::NotANumber("abc".into()))
        );
        assert_eq!(parse_choice("1", 0), Ok(MenuChoice::Exit));
    }

    #[test]
    fn integers_beyond_i64_are_invalid_options() {
        for input in ["99999999999999999999", "-99999999999999999999"] {
            let err = parse_choice(input, 2).unwrap_err();
            assert_eq!(
                err,
                SelectionError::OutOfRange {
                    choice: input.into(),
                    max: 3
                }
            );
            assert_eq!(err.prompt_message(), "Invalid option, please try again.");
        }
        assert_eq!(
            parse_choice("9999999999999999999x", 2),
            Err(SelectionError::NotANumber("9999999999999999999x".into()))
        );
    }

    #[test]
    fn oversized_integer_reprompts_with_invalid_option() {
        let profiles = make_profiles();
        let (summary, out, _) = run("99999999999999999999\n3\n", &profiles);

        assert_eq!(summary.rejected, 1);
        assert!(out.contains("Invalid option, please try again.\n"));
        assert!(!out.contains("Please enter a valid number."));
    }

    #[test]
    fn menu_lists_profiles_and_exit() {
        let profiles = make_profiles();
        let (_, out, _) = run("3\n", &profiles);

        assert!(out.contains("--- Results Viewer Menu ---"));
        assert!(out.contains("1. View results for Gabriel Machado\n"));
        assert!(out.contains("2. View results for Camila Padalino\n"));
        assert!(out.contains("3. Exit\n"));
        assert!(out.contains("Choose an option: "));
    }

    #[test]
    fn exit_option_ends_loop_without_showing() {
        let profiles = make_profiles();
        let (summary, out, shown) = run("3\n", &profiles);

        assert_eq!(summary.exit, MenuExit::Requested);
        assert_eq!(summary.views, 0);
        assert!(shown.is_empty());
        assert!(out.ends_with("Exiting...\n"));
        assert!(!out.contains("Results for"));
    }

    #[test]
    fn out_of_range_and_garbage_reprompt() {
        let profiles = make_profiles();
        let (summary, out, shown) = run("5\nabc\n3\n", &profiles);

        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.exit, MenuExit::Requested);
        assert!(shown.is_empty());
        assert!(out.contains("Invalid option, please try again.\n"));
        assert!(out.contains("Please enter a valid number.\n"));
        assert_eq!(out.matches("--- Results Viewer Menu ---").count(), 3);
    }

    #[test]
    fn viewing_profiles_then_exiting() {
        let profiles = make_profiles();
        let (summary, out, shown) = run("1\n2\n3\n", &profiles);

        assert_eq!(summary.views, 2);
        assert_eq!(shown, vec!["Gabriel Machado".to_string()]);
        assert!(out.contains("Results for Gabriel Machado:"));
        assert!(out.contains("Camila Padalino has not completed any modules yet."));
    }

    #[test]
    fn closed_input_ends_loop() {
        let profiles = make_profiles();
        let (summary, out, _) = run("abc\n", &profiles);

        assert_eq!(summary.exit, MenuExit::InputClosed);
        assert_eq!(summary.rejected, 1);
        assert!(!out.contains("Exiting..."));
    }

    #[test]
    fn crlf_input_is_accepted() {
        let profiles = make_profiles();
        let (summary, _, _) = run("3\r\n", &profiles);
        assert_eq!(summary.exit, MenuExit::Requested);
    }
}
