//! HD44780-compatible character LCD (16x4), write-only.
//!
//! The protocol is transmit-and-delay: there is no busy-flag read, every
//! edge is followed by a fixed settle delay long enough to cover the
//! controller's documented minimums.
//!
//! ```text
//!  RS  ──┤ level ├──────────────────────────────────────────
//!  E   ────────────┐‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾┌──────
//!  DB  ──────────────────┤ data ├──────────────
//!        settle   settle        settle      settle
//! ```
//!
//! In 4-bit mode each byte is two strobes, high nibble first.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::drivers::gpio::{Direction, Gpio, Level, Pin, PinId, Port, PortDirection};
use crate::drivers::registers::RegisterFile;
use crate::error::DisplayError;

/// Controller command bytes.
pub mod command {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const TWO_LINES_EIGHT_BIT: u8 = 0x38;
    pub const TWO_LINES_FOUR_BIT: u8 = 0x28;
    pub const FOUR_BIT_INIT1: u8 = 0x33;
    pub const FOUR_BIT_INIT2: u8 = 0x32;
    pub const CURSOR_OFF: u8 = 0x0C;
    pub const CURSOR_ON: u8 = 0x0E;
    pub const SET_CURSOR: u8 = 0x80;
}

/// Controller power-on settle time (datasheet minimum 15 ms).
pub const POWER_ON_SETTLE_MS: u32 = 20;
/// Hold time after every RS/E/data edge.
pub const EDGE_SETTLE_MS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBus {
    /// DB0..DB7 on a whole port.
    Eight { port: Port },
    /// DB4..DB7 on four pins of one port, in bit order.
    Four { port: Port, pins: [Pin; 4] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdWiring {
    pub rs: PinId,
    pub enable: PinId,
    pub bus: DataBus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    R0,
    R1,
    R2,
    R3,
}

impl Row {
    /// DDRAM address of column 0 on this row.
    pub const fn offset(self) -> u8 {
        match self {
            Self::R0 => 0x00,
            Self::R1 => 0x40,
            Self::R2 => 0x10,
            Self::R3 => 0x50,
        }
    }
}

impl TryFrom<u8> for Row {
    type Error = DisplayError;

    fn try_from(row: u8) -> Result<Self, Self::Error> {
        match row {
            0 => Ok(Self::R0),
            1 => Ok(Self::R1),
            2 => Ok(Self::R2),
            3 => Ok(Self::R3),
            _ => Err(DisplayError::InvalidRow(row)),
        }
    }
}

pub fn cursor_address(row: Row, col: u8) -> u8 {
    col.wrapping_add(row.offset())
}

/// Register-select: command vs character data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Command,
    Data,
}

pub struct Lcd {
    wiring: LcdWiring,
}

impl Lcd {
    pub const fn new(wiring: LcdWiring) -> Self {
        Self { wiring }
    }

    pub fn wiring(&self) -> LcdWiring {
        self.wiring
    }

    pub fn init<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D) {
        let mut gpio = Gpio::new(regs);
        gpio.set_direction(self.wiring.rs, Direction::Output);
        gpio.set_direction(self.wiring.enable, Direction::Output);

        delay.delay_ms(POWER_ON_SETTLE_MS);

        let function_set = match self.wiring.bus {
            DataBus::Eight { port } => {
                Gpio::new(regs).set_port_direction(port, PortDirection::AllOutput);
                command::TWO_LINES_EIGHT_BIT
            }
            DataBus::Four { port, pins } => {
                let mut gpio = Gpio::new(regs);
                for pin in pins {
                    gpio.set_direction(PinId::new(port, pin), Direction::Output);
                }
                self.send_command(regs, delay, command::FOUR_BIT_INIT1);
                self.send_command(regs, delay, command::FOUR_BIT_INIT2);
                command::TWO_LINES_FOUR_BIT
            }
        };

        self.send_command(regs, delay, function_set);
        self.send_command(regs, delay, command::CURSOR_OFF);
        self.send_command(regs, delay, command::CLEAR);
        log::info!("lcd: initialised ({:?})", self.wiring.bus);
    }

    pub fn send_command<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D, code: u8) {
        self.transfer(regs, delay, Mode::Command, code);
    }

    pub fn display_character<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D, code: u8) {
        self.transfer(regs, delay, Mode::Data, code);
    }

    /// Emit every byte of `text` up to, not including, the first NUL.
    pub fn display_string<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D, text: &str) {
        for byte in text.bytes().take_while(|&b| b != 0) {
            self.display_character(regs, delay, byte);
        }
    }

    pub fn move_cursor<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D, row: Row, col: u8) {
        self.send_command(regs, delay, cursor_address(row, col) | command::SET_CURSOR);
    }

    /// Numeric-row variant.  A row outside 0..=3 leaves the address at its
    /// zero default, so the cursor lands on the origin.
    pub fn move_cursor_raw<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D, row: u8, col: u8) {
        let address = match Row::try_from(row) {
            Ok(row) => cursor_address(row, col),
            Err(e) => {
                log::warn!("lcd: {e}, cursor to origin");
                0
            }
        };
        self.send_command(regs, delay, address | command::SET_CURSOR);
    }

    pub fn display_string_at<R: RegisterFile, D: DelayNs>(
        &self,
        regs: &mut R,
        delay: &mut D,
        row: Row,
        col: u8,
        text: &str,
    ) {
        self.move_cursor(regs, delay, row, col);
        self.display_string(regs, delay, text);
    }

    pub fn clear<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D) {
        self.send_command(regs, delay, command::CLEAR);
    }

    pub fn home<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D) {
        self.send_command(regs, delay, command::HOME);
    }

    pub fn set_cursor_visible<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D, visible: bool) {
        let code = if visible { command::CURSOR_ON } else { command::CURSOR_OFF };
        self.send_command(regs, delay, code);
    }

    /// Render `value` in base 10.
    pub fn display_integer<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D, value: i32) {
        self.display_string(regs, delay, &format_integer(value));
    }

    // ── Wire protocol ─────────────────────────────────────────

    fn transfer<R: RegisterFile, D: DelayNs>(&self, regs: &mut R, delay: &mut D, mode: Mode, byte: u8) {
        let rs = match mode {
            Mode::Command => Level::Low,
            Mode::Data => Level::High,
        };
        Gpio::new(regs).write_pin(self.wiring.rs, rs);
        delay.delay_ms(EDGE_SETTLE_MS);

        match self.wiring.bus {
            DataBus::Eight { port } => {
                self.strobe(regs, delay, |gpio| gpio.write_port(port, byte));
            }
            DataBus::Four { port, pins } => {
                for nibble in [byte >> 4, byte & 0x0F] {
                    self.strobe(regs, delay, |gpio| {
                        for (bit, pin) in pins.into_iter().enumerate() {
                            let level = Level::from(nibble & (1 << bit) != 0);
                            gpio.write_pin(PinId::new(port, pin), level);
                        }
                    });
                }
            }
        }
    }

    /// One enable pulse: raise E, present data, drop E.  The controller
    /// latches on the falling edge.
    fn strobe<R, D, F>(&self, regs: &mut R, delay: &mut D, put: F)
    where
        R: RegisterFile,
        D: DelayNs,
        F: FnOnce(&mut Gpio<'_, R>),
    {
        let mut gpio = Gpio::new(regs);
        gpio.write_pin(self.wiring.enable, Level::High);
        delay.delay_ms(EDGE_SETTLE_MS);

        put(&mut gpio);
        delay.delay_ms(EDGE_SETTLE_MS);

        gpio.write_pin(self.wiring.enable, Level::Low);
        delay.delay_ms(EDGE_SETTLE_MS);
    }
}

/// Base-10 rendering of any `i32` (at most 11 characters).
pub fn format_integer(value: i32) -> String<12> {
    let mut text = String::new();
    // Cannot overflow: i32::MIN is 11 characters.
    let _ = write!(text, "{value}");
    text
}
