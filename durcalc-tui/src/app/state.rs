use durcalc::{Mode, Operation, Unit};

/// The four calculator text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    DateA,
    DateB,
    DurationA,
    DurationB,
}

impl InputId {
    pub fn is_duration(self) -> bool {
        matches!(self, InputId::DurationA | InputId::DurationB)
    }

    pub fn label(self) -> &'static str {
        match self {
            InputId::DateA => " First date ",
            InputId::DateB => " Second date ",
            InputId::DurationA => " First duration ",
            InputId::DurationB => " Second duration ",
        }
    }

    pub fn placeholder(self) -> &'static str {
        if self.is_duration() {
            "e.g. 1y3mon20d"
        } else {
            "YYYY-MM-DDTHH:MM"
        }
    }
}

/// Fields shown in `mode`, top to bottom.
pub fn inputs_for(mode: Mode) -> [InputId; 2] {
    match mode {
        Mode::Durations => [InputId::DurationA, InputId::DurationB],
        Mode::DurationToDate => [InputId::DateA, InputId::DurationB],
        Mode::DateDifference => [InputId::DateA, InputId::DateB],
    }
}

/// Field that takes focus when `mode` is selected.
pub fn default_focus(mode: Mode) -> InputId {
    match mode {
        Mode::Durations => InputId::DurationA,
        Mode::DurationToDate | Mode::DateDifference => InputId::DateA,
    }
}

/// A keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dial {
    Digit(u8),
    Token(Unit),
}

impl Dial {
    pub const DIGIT_ROWS: [&'static [u8]; 4] = [&[1, 2, 3], &[4, 5, 6], &[7, 8, 9], &[0]];
    pub const TOKEN_ROWS: [[Unit; 3]; 3] = [
        [Unit::Years, Unit::Quarters, Unit::Months],
        [Unit::Weeks, Unit::Days, Unit::Hours],
        [Unit::Minutes, Unit::Seconds, Unit::Milliseconds],
    ];

    /// Text appended to the focused field.
    pub fn text(self) -> String {
        match self {
            Dial::Digit(d) => d.to_string(),
            Dial::Token(unit) => unit.token().to_string(),
        }
    }

    /// Alt+key shortcut shown on the button.
    pub fn shortcut(self) -> char {
        match self {
            Dial::Digit(d) => char::from(b'0' + d),
            Dial::Token(Unit::Years) => 'y',
            Dial::Token(Unit::Quarters) => 'q',
            Dial::Token(Unit::Months) => 'o',
            Dial::Token(Unit::Weeks) => 'w',
            Dial::Token(Unit::Days) => 'd',
            Dial::Token(Unit::Hours) => 'h',
            Dial::Token(Unit::Minutes) => 'i',
            Dial::Token(Unit::Seconds) => 's',
            Dial::Token(Unit::Milliseconds) => 'm',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Dial> {
        if let Some(d) = c.to_digit(10) {
            return Some(Dial::Digit(d as u8));
        }
        Unit::ALL
            .into_iter()
            .map(Dial::Token)
            .find(|dial| dial.shortcut() == c)
    }
}

/// Something on screen a mouse click can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input(InputId),
    Mode(Mode),
    Operation(Operation),
    Dial(Dial),
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Append to the end of the value and park the cursor there.
    pub fn append(&mut self, s: &str) {
        self.value.push_str(s);
        self.cursor = self.value.len();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let end = self.next_boundary(self.cursor);
        self.value.drain(self.cursor..end);
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p < self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}
