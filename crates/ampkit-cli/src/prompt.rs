//! Terminal prompts for choosing skills and an install location.

use std::io::{self, BufRead, IsTerminal};

use console::{style, Key, Term};

const REQUIRED_WARNING: &str = "Please select at least one option.";

/// One option in a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown for the option.
    pub label: String,
    /// Optional dimmed hint shown next to the highlighted option.
    pub hint:  Option<String>,
}

impl Choice {
    /// Create a choice without a hint.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint:  None,
        }
    }

    /// Attach a hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    /// The user confirmed a value.
    Answered(T),
    /// The user backed out.
    Cancelled,
}

/// Source of answers to the installer's questions.
pub trait Prompter {
    /// Ask for any number of `choices`; returns the chosen indices in
    /// ascending order. With `required`, an empty answer is not accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    fn multiselect(
        &mut self,
        message: &str,
        choices: &[Choice],
        required: bool,
    ) -> io::Result<Prompted<Vec<usize>>>;

    /// Ask for exactly one of `choices`; returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written, or if
    /// `choices` is empty.
    fn select(&mut self, message: &str, choices: &[Choice]) -> io::Result<Prompted<usize>>;
}

/// [`Prompter`] backed by the user's terminal.
///
/// On a TTY the prompts are driven by the keyboard: arrows (or `j`/`k`) move,
/// space toggles, enter confirms, escape or Ctrl-C cancels. When stdin is not
/// a terminal the options are numbered and answers are read line by line;
/// end of input cancels.
pub struct ConsolePrompter {
    term:  Term,
    input: Option<Box<dyn BufRead>>,
}

impl ConsolePrompter {
    /// Create a prompter drawing on stderr and reading from stdin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            term:  Term::stderr(),
            input: None,
        }
    }

    /// Create a prompter that reads numbered answers from `input`, one per
    /// line, instead of the keyboard.
    pub fn with_input(input: impl BufRead + 'static) -> Self {
        Self {
            term:  Term::stderr(),
            input: Some(Box::new(input)),
        }
    }

    fn interactive(&self) -> bool {
        self.input.is_none() && self.term.is_term() && io::stdin().is_terminal()
    }

    /// Read one key; escape and Ctrl-C map to `None`.
    ///
    /// `read_key_raw` hands Ctrl-C back as a key instead of raising SIGINT.
    fn read_key(&self) -> io::Result<Option<Key>> {
        match self.term.read_key_raw()? {
            Key::Escape | Key::CtrlC => Ok(None),
            key => Ok(Some(key)),
        }
    }

    fn render(
        &self,
        message: &str,
        choices: &[Choice],
        cursor: usize,
        checked: Option<&[bool]>,
        warning: Option<&str>,
    ) -> io::Result<usize> {
        self.term.write_line(&format!(
            "{} {}",
            style("?").cyan().bold(),
            style(message).bold()
        ))?;

        for (i, choice) in choices.iter().enumerate() {
            let active = i == cursor;
            let pointer = if active {
                style("❯").cyan().to_string()
            } else {
                " ".to_owned()
            };
            let label = if active {
                style(&choice.label).cyan().to_string()
            } else {
                choice.label.clone()
            };
            let hint = match (&choice.hint, active) {
                (Some(hint), true) => format!(" {}", style(format!("({hint})")).dim()),
                _ => String::new(),
            };
            let line = match checked {
                Some(flags) if flags.get(i).copied().unwrap_or(false) => {
                    format!("  {pointer} {} {label}{hint}", style("◼").green())
                }
                Some(_) => format!("  {pointer} ◻ {label}{hint}"),
                None => format!("  {pointer} {label}{hint}"),
            };
            self.term.write_line(&line)?;
        }

        let mut lines = choices.len() + 1;
        if let Some(warning) = warning {
            self.term.write_line(&style(warning).yellow().to_string())?;
            lines += 1;
        }
        Ok(lines)
    }

    fn clear(&self, lines: usize) -> io::Result<()> {
        if lines > 0 {
            self.term.clear_last_lines(lines)?;
        }
        Ok(())
    }

    fn finish(&self, message: &str, answer: Option<&str>) -> io::Result<()> {
        let line = match answer {
            Some(answer) => format!(
                "{} {} {}",
                style("✔").green(),
                style(message).bold(),
                style(answer).dim()
            ),
            None => format!("{} {}", style("■").red(), style(message).bold()),
        };
        self.term.write_line(&line)
    }

    fn multiselect_keys(
        &self,
        message: &str,
        choices: &[Choice],
        required: bool,
    ) -> io::Result<Prompted<Vec<usize>>> {
        let mut cursor = 0;
        let mut checked = vec![false; choices.len()];
        let mut warning = None;
        let mut drawn = 0;

        let _cursor = HiddenCursor::hide(&self.term)?;
        let outcome = loop {
            self.clear(drawn)?;
            drawn = self.render(message, choices, cursor, Some(checked.as_slice()), warning)?;

            match self.read_key()? {
                None => break Prompted::Cancelled,
                Some(Key::ArrowUp | Key::Char('k')) => {
                    cursor = (cursor + choices.len() - 1) % choices.len();
                }
                Some(Key::ArrowDown | Key::Char('j')) => cursor = (cursor + 1) % choices.len(),
                Some(Key::Char(' ')) => {
                    checked[cursor] = !checked[cursor];
                    warning = None;
                }
                Some(Key::Enter) => {
                    let picked: Vec<usize> = checked
                        .iter()
                        .enumerate()
                        .filter_map(|(i, on)| on.then_some(i))
                        .collect();
                    if required && picked.is_empty() {
                        warning = Some(REQUIRED_WARNING);
                        continue;
                    }
                    break Prompted::Answered(picked);
                }
                Some(_) => {}
            }
        };
        self.clear(drawn)?;

        match &outcome {
            Prompted::Answered(picked) => {
                let labels: Vec<&str> = picked.iter().map(|&i| choices[i].label.as_str()).collect();
                self.finish(message, Some(&labels.join(", ")))?;
            }
            Prompted::Cancelled => self.finish(message, None)?,
        }
        Ok(outcome)
    }

    fn select_keys(&self, message: &str, choices: &[Choice]) -> io::Result<Prompted<usize>> {
        let mut cursor = 0;
        let mut drawn = 0;

        let _cursor = HiddenCursor::hide(&self.term)?;
        let outcome = loop {
            self.clear(drawn)?;
            drawn = self.render(message, choices, cursor, None, None)?;

            match self.read_key()? {
                None => break Prompted::Cancelled,
                Some(Key::ArrowUp | Key::Char('k')) => {
                    cursor = (cursor + choices.len() - 1) % choices.len();
                }
                Some(Key::ArrowDown | Key::Char('j')) => cursor = (cursor + 1) % choices.len(),
                Some(Key::Enter) => break Prompted::Answered(cursor),
                Some(_) => {}
            }
        };
        self.clear(drawn)?;

        match outcome {
            Prompted::Answered(i) => self.finish(message, Some(&choices[i].label))?,
            Prompted::Cancelled => self.finish(message, None)?,
        }
        Ok(outcome)
    }

    fn print_numbered(&self, message: &str, choices: &[Choice]) -> io::Result<()> {
        self.term.write_line(&format!(
            "{} {}",
            style("?").cyan().bold(),
            style(message).bold()
        ))?;
        for (i, choice) in choices.iter().enumerate() {
            let hint = choice
                .hint
                .as_deref()
                .map(|h| format!(" {}", style(format!("({h})")).dim()))
                .unwrap_or_default();
            self.term
                .write_line(&format!("  {}. {}{hint}", i + 1, choice.label))?;
        }
        Ok(())
    }

    /// Prompt for one line of input; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(&style(prompt).cyan().to_string())?;
        self.term.flush()?;

        let mut line = String::new();
        let read = match &mut self.input {
            Some(input) => input.read_line(&mut line)?,
            None => io::stdin().lock().read_line(&mut line)?,
        };
        if read == 0 {
            self.term.write_line("")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn multiselect_lines(
        &mut self,
        message: &str,
        choices: &[Choice],
        required: bool,
    ) -> io::Result<Prompted<Vec<usize>>> {
        self.print_numbered(message, choices)?;
        loop {
            let Some(input) = self.read_line("Enter numbers separated by commas: ")? else {
                self.finish(message, None)?;
                return Ok(Prompted::Cancelled);
            };
            match multiselect_reply(&input, choices.len(), required) {
                Ok(picked) => return Ok(Prompted::Answered(picked)),
                Err(warning) => self.term.write_line(&style(warning).yellow().to_string())?,
            }
        }
    }

    fn select_lines(&mut self, message: &str, choices: &[Choice]) -> io::Result<Prompted<usize>> {
        self.print_numbered(message, choices)?;
        loop {
            let Some(input) = self.read_line("Enter a number: ")? else {
                self.finish(message, None)?;
                return Ok(Prompted::Cancelled);
            };
            match select_reply(&input, choices.len()) {
                Ok(picked) => return Ok(Prompted::Answered(picked)),
                Err(warning) => self.term.write_line(&style(warning).yellow().to_string())?,
            }
        }
    }
}

/// Shows the terminal cursor again when dropped.
struct HiddenCursor<'a>(&'a Term);

impl<'a> HiddenCursor<'a> {
    fn hide(term: &'a Term) -> io::Result<Self> {
        term.hide_cursor()?;
        Ok(Self(term))
    }
}

impl Drop for HiddenCursor<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.0.show_cursor() {
            log::debug!("failed to restore cursor: {e}");
        }
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for ConsolePrompter {
    fn multiselect(
        &mut self,
        message: &str,
        choices: &[Choice],
        required: bool,
    ) -> io::Result<Prompted<Vec<usize>>> {
        if choices.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "prompt has no choices",
            ));
        }
        if self.interactive() {
            self.multiselect_keys(message, choices, required)
        } else {
            self.multiselect_lines(message, choices, required)
        }
    }

    fn select(&mut self, message: &str, choices: &[Choice]) -> io::Result<Prompted<usize>> {
        if choices.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "prompt has no choices",
            ));
        }
        if self.interactive() {
            self.select_keys(message, choices)
        } else {
            self.select_lines(message, choices)
        }
    }
}

/// Interpret one multi-select answer line; `Err` carries the warning to show
/// before asking again.
fn multiselect_reply(input: &str, max: usize, required: bool) -> Result<Vec<usize>, String> {
    match parse_numbers(input, max) {
        Some(picked) if required && picked.is_empty() => Err(REQUIRED_WARNING.to_owned()),
        Some(picked) => Ok(picked),
        None => Err(range_warning(max)),
    }
}

/// Interpret one select answer line; exactly one number is accepted.
fn select_reply(input: &str, max: usize) -> Result<usize, String> {
    match parse_numbers(input, max).as_deref() {
        Some(&[picked]) => Ok(picked),
        _ => Err(range_warning(max)),
    }
}

fn range_warning(max: usize) -> String {
    format!("Please enter numbers between 1 and {max}.")
}

/// Parse 1-based option numbers separated by commas or whitespace into
/// sorted, deduplicated 0-based indices. `None` if any token is not a number
/// in `1..=max`.
fn parse_numbers(input: &str, max: usize) -> Option<Vec<usize>> {
    let mut picked = Vec::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => picked.push(n - 1),
            _ => return None,
        }
    }
    picked.sort_unstable();
    picked.dedup();
    Some(picked)
}
