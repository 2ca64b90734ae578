//! Menu strings for a 1602 LCD display.
//!
//! The texts are sized for a 16 column, 2 row display. You can modify these
//! if you have more space.

/// One display row is 16 visible characters wide.
pub const LINE_LEN: usize = 16;

/// Number of rows defined in the menu table.
pub const LINE_COUNT: usize = 10;

/// One renderable display row, always exactly [`LINE_LEN`] bytes of
/// printable 7 bit ASCII, ready for `Display::print`.
pub type MenuLine = [u8; LINE_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    IndexOutOfRange,
}

#[rustfmt::skip]
static MENU_TEXT: [&MenuLine; LINE_COUNT] = [
  //|                |<-- max
    b" Start     Menu ", // 0
    b" File select    ", // 1
    b" Brightness     ", // 2
    b" Speed          ", // 3
    b" Delay (s)      ", // 4
    b" Save config    ", // 5
    b" : NO     : YES ", // 6
    b" Brightness set ", // 7
    b" rescan needed..", // 8
    b"  Config saved! ", // 9
];

/// The role of each row, with the discriminant fixed to its table position
/// so that the display logic and the table can not drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start = 0,
    FileSelect = 1,
    Brightness = 2,
    Speed = 3,
    DelaySeconds = 4,
    SaveConfig = 5,
    YesNo = 6,
    BrightnessSet = 7,
    RescanNeeded = 8,
    ConfigSaved = 9,
}

impl Screen {
    /// Table position of this row.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn text(self) -> &'static MenuLine {
        MENU_TEXT[self as usize]
    }
}

/// Returns the menu row at `index`, or `Error::IndexOutOfRange` if `index`
/// is not below [`LINE_COUNT`].
pub fn line(index: usize) -> Result<&'static MenuLine, Error> {
    MENU_TEXT.get(index).copied().ok_or(Error::IndexOutOfRange)
}

pub fn line_count() -> usize {
    LINE_COUNT
}
