//! Adapters: concrete implementations of the hexagonal port traits and
//! of the register/delay boundaries the drivers sit on.
//!
//! | Adapter     | Implements         | Connects to                  |
//! |-------------|--------------------|------------------------------|
//! | `hardware`  | SensorPort         | ADC + LM35                   |
//! |             | ActuatorPort       | L293D via GPIO + timer 0     |
//! |             | DisplayPort        | HD44780 LCD                  |
//! | `log_sink`  | EventSink          | `log` facade                 |
//! | `atmega32`  | RegisterFile       | Memory-mapped I/O (AVR only) |
//! | `sim`       | RegisterFile       | In-memory bank (host only)   |
//! | `delay`     | DelayNs            | Busy loop / simulated clock  |

pub mod delay;
pub mod hardware;
pub mod log_sink;

#[cfg(target_arch = "avr")]
pub mod atmega32;

#[cfg(not(target_arch = "avr"))]
pub mod sim;
