//! ThermoFan firmware: main entry point (ATmega32).
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter<Atmega32Registers, BusyDelay>           │
//! │  (Sensor + Actuator + Display)        LogEventSink       │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │         FanController (pure logic)                 │  │
//! │  │  sample · select band · drive fan · render         │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![no_std]
#![no_main]
#![deny(unused_must_use)]

use panic_halt as _;

use thermofan::adapters::atmega32::Atmega32Registers;
use thermofan::adapters::delay::BusyDelay;
use thermofan::adapters::hardware::HardwareAdapter;
use thermofan::adapters::log_sink::LogEventSink;
use thermofan::app::service::FanController;
use thermofan::config::SystemConfig;

#[avr_device::entry]
fn main() -> ! {
    let config = SystemConfig::default();

    // SAFETY: sole owner of the I/O space; nothing else runs before or
    // alongside the control loop and no interrupts are enabled.
    let regs = unsafe { Atmega32Registers::steal() };

    let mut hw = HardwareAdapter::init(regs, BusyDelay::new(), &config);
    let mut sink = LogEventSink::new();

    FanController::new(&config).run(&mut hw, &mut sink)
}
