use std::io;

use termion::event::Key;
use termion::input::TermRead;

use super::stack::Operator;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Type(char),
    Backspace,
    Negate,
    Enter,
    Operate(Operator),
    Clear,
    Quit,
    Ignore,
}

// Operator keys, checked before anything is typed into the input field
const OPERATOR_KEYS: [(Key, Operator); 4] = [
    (Key::Char('+'), Operator::Add),
    (Key::Char('-'), Operator::Subtract),
    (Key::Char('*'), Operator::Multiply),
    (Key::Char('/'), Operator::Divide),
];

pub fn action_for(key: Key) -> Action {
    if let Some(&(_, op)) = OPERATOR_KEYS.iter().find(|&&(op_key, _)| op_key == key) {
        return Action::Operate(op);
    }

    match key {
        Key::Char('\n') | Key::Char('\r') => Action::Enter,
        Key::Char('~') => Action::Negate,
        Key::Char(c) if !c.is_control() => Action::Type(c),
        Key::Backspace => Action::Backspace,
        Key::Esc => Action::Clear,
        Key::Ctrl('c') | Key::Ctrl('d') => Action::Quit,
        _ => Action::Ignore,
    }
}

/// Blocking reader of terminal keystrokes.
pub struct Keypad {
    input: termion::input::Keys<io::Stdin>,
}

impl Keypad {
    pub fn new() -> Keypad {
        Keypad {
            input: io::stdin().keys(),
        }
    }

    /// Waits for the next key. `None` once stdin is closed.
    pub fn next_action(&mut self) -> Option<Result<Action, io::Error>> {
        self.input.next().map(|key| key.map(action_for))
    }
}
