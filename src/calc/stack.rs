use super::error::CalcError;

pub const STACK_SIZE: usize = 8;

/// How empty slots are treated when an operator needs operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandMode {
    // Only entered or computed values are operands
    Strict,
    // Empty slots read as 0, so operators never run short
    Legacy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    // Operands in entry order: `second` was pushed before `top`
    pub fn apply(self, second: f64, top: f64) -> f64 {
        match self {
            Operator::Add => second + top,
            Operator::Subtract => second - top,
            Operator::Multiply => second * top,
            Operator::Divide => second / top,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// Fixed 8-slot stack. Slot 0 is the most recent value; occupied slots are
/// always contiguous from the front.
#[derive(Debug)]
pub struct Stack {
    slots: [Option<f64>; STACK_SIZE],
    mode: OperandMode,
}

impl Stack {
    pub fn new(mode: OperandMode) -> Stack {
        Stack {
            slots: [None; STACK_SIZE],
            mode,
        }
    }

    /// Pushes `val` to the front. Returns the value that fell off the back,
    /// if the stack was full.
    pub fn push(self: &mut Stack, val: f64) -> Option<f64> {
        // Last slot wraps around to the front, then gets overwritten
        self.slots.rotate_right(1);
        let dropped = self.slots[0].take();
        self.slots[0] = Some(val);
        dropped
    }

    /// Pops `top` and `second`, pushes `second op top` and returns it.
    /// On error the stack is left untouched.
    pub fn apply(self: &mut Stack, op: Operator) -> Result<f64, CalcError> {
        let (top, second) = match (self.operand(0), self.operand(1)) {
            (Some(top), Some(second)) => (top, second),
            _ => {
                return Err(CalcError::InsufficientOperands {
                    available: self.depth(),
                })
            }
        };

        if op == Operator::Divide && top == 0.0 {
            return Err(CalcError::DivisionByZero);
        }

        let result = op.apply(second, top);

        // Two out, one in: shift everything up by one and free the last slot
        self.slots.rotate_left(1);
        self.slots[0] = Some(result);
        self.slots[STACK_SIZE - 1] = None;

        Ok(result)
    }

    pub fn clear(&mut self) {
        self.slots = [None; STACK_SIZE];
    }

    pub fn depth(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    pub fn mode(&self) -> OperandMode {
        self.mode
    }

    pub fn slots(&self) -> &[Option<f64>; STACK_SIZE] {
        &self.slots
    }

    /// Slot contents with empty slots read as 0.
    #[cfg(test)]
    pub fn values(&self) -> [f64; STACK_SIZE] {
        self.slots.map(|slot| slot.unwrap_or(0.0))
    }

    fn operand(&self, index: usize) -> Option<f64> {
        match self.mode {
            OperandMode::Strict => self.slots[index],
            OperandMode::Legacy => Some(self.slots[index].unwrap_or(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(mode: OperandMode, values: &[f64]) -> Stack {
        // Push in reverse so values[0] ends up on top
        let mut stack = Stack::new(mode);
        for &val in values.iter().rev() {
            stack.push(val);
        }
        stack
    }

    #[test]
    fn push_to_front() {
        let mut stack = Stack::new(OperandMode::Strict);
        assert_eq!(None, stack.push(1.0));
        assert_eq!(None, stack.push(2.5));

        assert_eq!(2, stack.depth());
        assert_eq!([2.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], stack.values());
        assert_eq!(None, stack.slots()[2]);
    }

    #[test]
    fn push_discards_oldest() {
        let mut stack = Stack::new(OperandMode::Strict);
        for i in 1..=8 {
            assert_eq!(None, stack.push(i as f64));
        }
        assert_eq!(STACK_SIZE, stack.depth());

        assert_eq!(Some(1.0), stack.push(9.0));
        assert_eq!(Some(2.0), stack.push(10.0));
        assert_eq!(STACK_SIZE, stack.slots().len());
        assert_eq!([10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0], stack.values());
    }

    #[test]
    fn add() {
        let mut stack = stack_of(OperandMode::Strict, &[3.0, 2.0]);
        assert_eq!(Ok(5.0), stack.apply(Operator::Add));
        assert_eq!([5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], stack.values());
        assert_eq!(1, stack.depth());
    }

    #[test]
    fn subtract_second_minus_top() {
        let mut stack = stack_of(OperandMode::Strict, &[3.0, 2.0]);
        assert_eq!(Ok(-1.0), stack.apply(Operator::Subtract));
        assert_eq!([-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], stack.values());
    }

    #[test]
    fn multiply_and_divide() {
        let mut stack = stack_of(OperandMode::Strict, &[4.0, 6.0, 7.0]);
        assert_eq!(Ok(24.0), stack.apply(Operator::Multiply));
        assert_eq!([24.0, 7.0], stack.values()[..2]);

        // 7 / 24
        assert_eq!(Ok(7.0 / 24.0), stack.apply(Operator::Divide));
        assert_eq!(1, stack.depth());
    }

    #[test]
    fn lower_slots_move_up() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut stack = stack_of(OperandMode::Strict, &values);
        assert_eq!(Ok(3.0), stack.apply(Operator::Add));

        assert_eq!([3.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 0.0], stack.values());
        assert_eq!(None, stack.slots()[7]);
        assert_eq!(7, stack.depth());
    }

    #[test]
    fn divide_by_zero_keeps_operands() {
        let mut stack = stack_of(OperandMode::Strict, &[0.0, 5.0]);
        assert_eq!(Err(CalcError::DivisionByZero), stack.apply(Operator::Divide));
        assert_eq!([0.0, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], stack.values());
        assert_eq!(2, stack.depth());

        let mut stack = stack_of(OperandMode::Strict, &[-0.0, 5.0]);
        assert_eq!(Err(CalcError::DivisionByZero), stack.apply(Operator::Divide));
    }

    #[test]
    fn strict_needs_two_values() {
        let mut stack = Stack::new(OperandMode::Strict);
        assert_eq!(
            Err(CalcError::InsufficientOperands { available: 0 }),
            stack.apply(Operator::Add)
        );

        stack.push(4.0);
        assert_eq!(
            Err(CalcError::InsufficientOperands { available: 1 }),
            stack.apply(Operator::Multiply)
        );
        assert_eq!(Some(4.0), stack.slots()[0]);
        assert_eq!(1, stack.depth());
    }

    #[test]
    fn legacy_reads_empty_slots_as_zero() {
        let mut stack = Stack::new(OperandMode::Legacy);
        assert_eq!(Ok(0.0), stack.apply(Operator::Add));

        stack.clear();
        stack.push(4.0);
        assert_eq!(Ok(-4.0), stack.apply(Operator::Subtract));
        assert_eq!([-4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], stack.values());

        // 0 / -4 is fine, -4 / 0 is not
        stack.clear();
        stack.push(-4.0);
        assert_eq!(Ok(-0.0), stack.apply(Operator::Divide));
        stack.clear();
        stack.push(-4.0);
        stack.push(0.0);
        assert_eq!(Err(CalcError::DivisionByZero), stack.apply(Operator::Divide));
    }

    #[test]
    fn clear_resets_every_slot() {
        let mut stack = stack_of(OperandMode::Strict, &[1.0, 2.0, 3.0]);
        stack.clear();
        assert_eq!([0.0; STACK_SIZE], stack.values());
        assert_eq!(0, stack.depth());
    }
}
