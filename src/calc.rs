use std::io;

use log::{debug, info};

pub mod beeper;
pub mod display;
pub mod error;
pub mod input;
pub mod keypad;
pub mod stack;


use display::Screen;
use error::CalcError;
use keypad::Action;
use stack::{OperandMode, Operator};

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    // Empty slots act as zero operands and render as 0
    pub legacy: bool,
    // Show operand depth and raw slots under the input field
    pub debug: bool,
}

/// RPN calculator bound to a screen: a stack of 8 slots, an input field, and
/// the six triggers (enter, the four operators, clear).
pub struct Calculator<S: Screen> {
    stack: stack::Stack,
    input: input::InputField,
    screen: S,
    beeper: Option<beeper::Beeper>,
    alert_up: bool,
    debug_mode: bool,
}

impl<S: Screen> Calculator<S> {
    pub fn new(screen: S, beeper: Option<beeper::Beeper>, options: Options) -> Self {
        let mode = if options.legacy {
            OperandMode::Legacy
        } else {
            OperandMode::Strict
        };

        let mut calc = Calculator {
            stack: stack::Stack::new(mode),
            input: input::InputField::new(),
            screen,
            beeper,
            alert_up: false,
            debug_mode: options.debug,
        };

        // Fill the display fields before the first frame
        calc.render();
        calc
    }

    /// Reads keys until the user quits or stdin closes.
    pub fn run(mut self, mut keypad: keypad::Keypad) -> Result<(), io::Error> {
        self.screen.draw()?;

        while let Some(action) = keypad.next_action() {
            if !self.handle(action?)? {
                break;
            }
        }

        info!("calculator closed with stack {:?}", self.stack.slots());
        Ok(())
    }

    /// Handles one action and redraws. Returns `false` when the user quits.
    pub fn handle(&mut self, action: Action) -> Result<bool, io::Error> {
        if action == Action::Quit {
            return Ok(false);
        }

        // An alert blocks everything until a key dismisses it
        if self.alert_up {
            self.alert_up = false;
            self.screen.dismiss_alert();
            self.screen.draw()?;
            return Ok(true);
        }

        match action {
            Action::Type(c) => {
                self.input.push(c);
                self.screen.set_input(self.input.text());
            }
            Action::Backspace => {
                self.input.backspace();
                self.screen.set_input(self.input.text());
            }
            Action::Negate => {
                self.input.negate();
                self.screen.set_input(self.input.text());
            }
            Action::Enter => self.enter(),
            Action::Operate(Operator::Add) => self.add(),
            Action::Operate(Operator::Subtract) => self.subtract(),
            Action::Operate(Operator::Multiply) => self.multiply(),
            Action::Operate(Operator::Divide) => self.divide(),
            Action::Clear => self.clear(),
            Action::Quit | Action::Ignore => {}
        }

        self.screen.draw()?;
        Ok(true)
    }

    /// Pushes the input field's number onto the stack.
    pub fn enter(&mut self) {
        let parsed = input::parse_number(self.input.text());
        match parsed {
            Ok(number) => {
                if let Some(dropped) = self.stack.push(number) {
                    debug!("stack full, discarded {}", dropped);
                }
                debug!("entered {}", number);
                self.clear_input();
                self.render();
            }
            // Input stays so the user can fix it
            Err(err) => self.report(err),
        }
    }

    pub fn add(&mut self) {
        self.operate(Operator::Add);
    }

    pub fn subtract(&mut self) {
        self.operate(Operator::Subtract);
    }

    pub fn multiply(&mut self) {
        self.operate(Operator::Multiply);
    }

    pub fn divide(&mut self) {
        self.operate(Operator::Divide);
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.clear_input();
        self.render();
        debug!("cleared");
    }

    /// Copies every stack slot into its display field.
    pub fn render(&mut self) {
        let mode = self.stack.mode();
        for (i, &slot) in self.stack.slots().iter().enumerate() {
            self.screen.set_slot(i, &display::format_slot(slot, mode));
        }

        if self.debug_mode {
            let status = format!(
                "depth: {}, operands: {:?}, slots: {:?}",
                self.stack.depth(),
                mode,
                self.stack.slots()
            );
            self.screen.set_status(&status);
        }
    }

    #[cfg(test)]
    pub fn stack(&self) -> &stack::Stack {
        &self.stack
    }

    #[cfg(test)]
    pub fn input(&self) -> &input::InputField {
        &self.input
    }

    #[cfg(test)]
    pub fn screen(&self) -> &S {
        &self.screen
    }

    #[cfg(test)]
    pub fn alert_up(&self) -> bool {
        self.alert_up
    }

    fn operate(&mut self, op: Operator) {
        match self.stack.apply(op) {
            Ok(result) => {
                debug!("{} -> {}", op.symbol(), result);
                self.render();
            }
            // Nothing moved, so the display fields are left alone
            Err(err) => self.report(err),
        }
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.screen.set_input(self.input.text());
    }

    fn report(&mut self, err: CalcError) {
        match &err {
            CalcError::InvalidInput { input } => info!("rejected input {:?}", input),
            CalcError::InsufficientOperands { available } => {
                info!("operator needs 2 operands, {} available", available)
            }
            CalcError::DivisionByZero => info!("division by zero"),
        }

        self.screen.alert(&err.to_string());
        self.alert_up = true;

        if let Some(beeper) = &self.beeper {
            beeper.beep();
        }
    }
}
