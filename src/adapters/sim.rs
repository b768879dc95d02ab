//! Host-side register file simulation.
//!
//! [`SimRegisters`] stands in for the ATmega32 I/O space in tests and in
//! the `thermofan-sim` binary.  It models just enough peripheral behaviour
//! for the drivers to run unchanged:
//!
//! - the ADC completes a conversion the instant ADSC is written, loading
//!   the data registers from an injectable per-channel analog table;
//! - ADIF is write-one-to-clear;
//! - an optional [`LcdModel`] watches the display's control and data lines
//!   and keeps a DDRAM image that can be read back as text.
//!
//! Every bus write is appended to a trace so tests can assert that a
//! rejected request touched nothing.

use crate::drivers::adc::{ADC_MAX_VALUE, Channel};
use crate::drivers::gpio::{Port, PinId};
use crate::drivers::lcd::{DataBus, LcdWiring, Row, command};
use crate::drivers::registers::{Register, RegisterFile, adcsra, admux};

// ---------------------------------------------------------------------------
// SimRegisters
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SimRegisters {
    bank: [u8; Register::COUNT],
    analog: [u16; 8],
    conversions: u32,
    writes: Vec<(Register, u8)>,
    lcd: Option<LcdModel>,
}

impl SimRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a display controller model wired as `model` describes.
    #[must_use]
    pub fn with_lcd(mut self, model: LcdModel) -> Self {
        self.lcd = Some(model);
        self
    }

    pub fn lcd(&self) -> Option<&LcdModel> {
        self.lcd.as_ref()
    }

    /// Voltage presented on `channel`, as the raw code the converter will
    /// produce.  Clamped to 10 bits.
    pub fn set_analog(&mut self, channel: Channel, raw: u16) {
        self.analog[channel as usize] = raw.min(ADC_MAX_VALUE);
    }

    /// Levels seen on the pins of `port` (PINx).  Not a bus write.
    pub fn set_input_port(&mut self, port: Port, value: u8) {
        self.bank[Register::Input(port).index()] = value;
    }

    /// Number of conversions started so far.
    pub fn conversions(&self) -> u32 {
        self.conversions
    }

    pub fn writes(&self) -> &[(Register, u8)] {
        &self.writes
    }

    pub fn clear_trace(&mut self) {
        self.writes.clear();
    }

    fn on_adcsra_write(&mut self, value: u8) -> u8 {
        let mut stored = value;
        if stored & adcsra::ADIF != 0 {
            stored &= !adcsra::ADIF;
        }
        if stored & (adcsra::ADEN | adcsra::ADSC) == adcsra::ADEN | adcsra::ADSC {
            let mux = self.bank[Register::Admux.index()] & admux::MUX_MASK;
            let sample = self.analog.get(usize::from(mux)).copied().unwrap_or(0);
            self.bank[Register::Adcl.index()] = (sample & 0xFF) as u8;
            self.bank[Register::Adch.index()] = (sample >> 8) as u8;
            self.conversions += 1;
            stored = (stored & !adcsra::ADSC) | adcsra::ADIF;
        }
        stored
    }
}

impl RegisterFile for SimRegisters {
    fn read(&self, reg: Register) -> u8 {
        self.bank[reg.index()]
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.writes.push((reg, value));
        let stored = match reg {
            Register::Adcsra => self.on_adcsra_write(value),
            _ => value,
        };
        self.bank[reg.index()] = stored;

        if let (Register::Latch(_), Some(lcd)) = (reg, self.lcd.as_mut()) {
            lcd.observe(&self.bank);
        }
    }
}

// ---------------------------------------------------------------------------
// LcdModel
// ---------------------------------------------------------------------------

/// Visible columns per row.
pub const LCD_COLUMNS: usize = 16;
const DDRAM_SIZE: usize = 0x80;

/// Minimal HD44780 controller: latches on the E falling edge, interprets
/// clear / home / set-address commands and stores character data.
#[derive(Debug, Clone)]
pub struct LcdModel {
    wiring: LcdWiring,
    enable_was_high: bool,
    pending_high_nibble: Option<u8>,
    ddram: [u8; DDRAM_SIZE],
    address: u8,
    commands: Vec<u8>,
}

impl LcdModel {
    pub fn new(wiring: LcdWiring) -> Self {
        Self {
            wiring,
            enable_was_high: false,
            pending_high_nibble: None,
            ddram: [b' '; DDRAM_SIZE],
            address: 0,
            commands: Vec::new(),
        }
    }

    /// Every command byte received, in order.
    pub fn commands(&self) -> &[u8] {
        &self.commands
    }

    pub fn ddram(&self) -> &[u8; DDRAM_SIZE] {
        &self.ddram
    }

    /// Current DDRAM address (cursor).
    pub fn address(&self) -> u8 {
        self.address
    }

    /// The visible text of `row`.
    pub fn row_text(&self, row: Row) -> String {
        let start = usize::from(row.offset());
        self.ddram[start..start + LCD_COLUMNS]
            .iter()
            .map(|&b| char::from(b))
            .collect()
    }

    fn level(bank: &[u8; Register::COUNT], id: PinId) -> bool {
        bank[Register::Latch(id.port).index()] & id.pin.mask() != 0
    }

    fn observe(&mut self, bank: &[u8; Register::COUNT]) {
        let enable = Self::level(bank, self.wiring.enable);
        let falling = self.enable_was_high && !enable;
        self.enable_was_high = enable;
        if !falling {
            return;
        }

        let is_data = Self::level(bank, self.wiring.rs);
        match self.wiring.bus {
            DataBus::Eight { port } => {
                let byte = bank[Register::Latch(port).index()];
                self.execute(is_data, byte);
            }
            DataBus::Four { port, pins } => {
                let mut nibble = 0;
                for (bit, pin) in pins.into_iter().enumerate() {
                    if Self::level(bank, PinId::new(port, pin)) {
                        nibble |= 1 << bit;
                    }
                }
                match self.pending_high_nibble.take() {
                    None => self.pending_high_nibble = Some(nibble),
                    Some(high) => self.execute(is_data, (high << 4) | nibble),
                }
            }
        }
    }

    fn execute(&mut self, is_data: bool, byte: u8) {
        if is_data {
            self.ddram[usize::from(self.address) % DDRAM_SIZE] = byte;
            self.address = (self.address + 1) % DDRAM_SIZE as u8;
            return;
        }

        self.commands.push(byte);
        if byte & command::SET_CURSOR != 0 {
            self.address = byte & !command::SET_CURSOR;
        } else if byte == command::CLEAR {
            self.ddram = [b' '; DDRAM_SIZE];
            self.address = 0;
        } else if byte & 0xFE == command::HOME {
            self.address = 0;
        }
    }
}
