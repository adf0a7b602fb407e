use std::io::{stdout, BufWriter, Stdout, Write};

use termion::raw::{IntoRawMode, RawTerminal};
use termion::screen::{AlternateScreen, IntoAlternateScreen};
use termion::{clear, color, cursor, style};

use super::stack::{OperandMode, STACK_SIZE};

const FIELD_WIDTH: usize = 28;
const HELP: &str = "Enter: push  + - * /: operate  ~: sign  Esc: clear  Ctrl-C: quit";

/// Output side of the calculator: one field per stack slot, the input field,
/// and a notification that stays up until dismissed.
pub trait Screen {
    fn set_slot(&mut self, index: usize, text: &str);
    fn set_input(&mut self, text: &str);
    fn set_status(&mut self, text: &str);
    fn alert(&mut self, message: &str);
    fn dismiss_alert(&mut self);
    fn draw(&mut self) -> Result<(), std::io::Error>;
}

/// Formats one stack slot for its display field.
///
/// Legacy mode shows empty slots and falsy values (0, -0, NaN) as `0`;
/// otherwise an empty slot is blank and a computed 0 stays visible.
pub fn format_slot(slot: Option<f64>, mode: OperandMode) -> String {
    match (slot, mode) {
        (None, OperandMode::Strict) => String::new(),
        (None, OperandMode::Legacy) => String::from("0"),
        (Some(val), OperandMode::Legacy) if val == 0.0 || val.is_nan() => String::from("0"),
        (Some(val), _) => format_number(val),
    }
}

pub fn format_number(val: f64) -> String {
    if val.is_nan() {
        String::from("NaN")
    } else if val.is_infinite() {
        String::from(if val > 0.0 { "Infinity" } else { "-Infinity" })
    } else if val == 0.0 {
        // Don't show -0
        String::from("0")
    } else if val.abs() >= 1e21 || val.abs() < 1e-6 {
        // Exponent form keeps extreme values inside the field: 1e+300, 1.5e-7
        let exp = format!("{:e}", val);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        format!("{}", val)
    }
}

// Column just past the input text; "> " takes the first two
fn input_cursor_col(input: &str) -> u16 {
    u16::try_from(input.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(3)
}

pub struct Terminal {
    slots: [String; STACK_SIZE],
    input: String,
    status: Option<String>,
    alert: Option<String>,
    // Buffered so a whole frame goes out with one flush; raw mode so keys
    // arrive without waiting for a newline; alternate screen so the
    // calculator doesn't scribble over the shell history
    output: BufWriter<RawTerminal<AlternateScreen<Stdout>>>,
}

impl Terminal {
    pub fn new() -> Result<Self, std::io::Error> {
        Ok(Terminal {
            slots: Default::default(),
            input: String::new(),
            status: None,
            alert: None,
            output: BufWriter::new(stdout().into_alternate_screen()?.into_raw_mode()?),
        })
    }

    fn draw_slots(&mut self) -> Result<(), std::io::Error> {
        write!(self.output, "┌{}┐\r\n", "─".repeat(FIELD_WIDTH + 5))?;
        for (i, text) in self.slots.iter().enumerate() {
            write!(
                self.output,
                "│ {}{}:{} {:>width$} │\r\n",
                style::Bold,
                i + 1,
                style::Reset,
                text,
                width = FIELD_WIDTH,
            )?;
        }
        write!(self.output, "└{}┘\r\n", "─".repeat(FIELD_WIDTH + 5))?;
        Ok(())
    }
}

impl Screen for Terminal {
    fn set_slot(&mut self, index: usize, text: &str) {
        debug_assert!(index < STACK_SIZE, "Invalid slot!");
        self.slots[index] = text.to_string();
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn set_status(&mut self, text: &str) {
        self.status = Some(text.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn draw(&mut self) -> Result<(), std::io::Error> {
        write!(self.output, "{}{}", clear::All, cursor::Goto(1, 1))?;
        write!(self.output, "{}RPN calculator{}\r\n", style::Bold, style::Reset)?;

        self.draw_slots()?;

        write!(self.output, "> {}", self.input)?;
        let (input_col, input_row) = (input_cursor_col(&self.input), 12);

        if let Some(message) = &self.alert {
            write!(
                self.output,
                "\r\n\n{}{}{} (press any key){}",
                color::Fg(color::Red),
                style::Bold,
                message,
                style::Reset,
            )?;
        }

        if let Some(status) = &self.status {
            write!(self.output, "\r\n\n{}", status)?;
        }

        write!(self.output, "\r\n\n{}{}{}", style::Faint, HELP, style::Reset)?;

        // Park the cursor at the end of the input field
        write!(self.output, "{}", cursor::Goto(input_col, input_row))?;

        // One syscall per frame
        self.output.flush()?;
        Ok(())
    }
}
