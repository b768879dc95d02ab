//! End-to-end tests: the real drivers behind `HardwareAdapter`, running
//! on the simulated register file with the LCD controller model attached.
//!
//! Each scenario injects a raw ADC code on the sensor channel, runs one
//! control iteration and checks the motor outputs and what the display
//! actually shows.

use thermofan::adapters::delay::SimDelay;
use thermofan::adapters::hardware::HardwareAdapter;
use thermofan::adapters::log_sink::LogEventSink;
use thermofan::adapters::sim::{LcdModel, SimRegisters};
use thermofan::app::service::FanController;
use thermofan::config::SystemConfig;
use thermofan::drivers::gpio::Port;
use thermofan::drivers::lcd::{DataBus, Row, command};
use thermofan::drivers::motor::MotorState;
use thermofan::drivers::registers::{Register, RegisterFile};
use thermofan::pins;

type SimBoard = HardwareAdapter<SimRegisters, SimDelay>;

fn make_board() -> (SimBoard, FanController, SystemConfig) {
    let config = SystemConfig::default();
    let regs = SimRegisters::new().with_lcd(LcdModel::new(pins::LCD_WIRING));
    let hw = HardwareAdapter::init(regs, SimDelay::new(), &config);
    let ctl = FanController::new(&config);
    (hw, ctl, config)
}

/// Inject `raw` on the sensor channel and run one iteration.
fn step(hw: &mut SimBoard, ctl: &mut FanController, config: &SystemConfig, raw: u16) {
    hw.registers_mut().set_analog(config.sensor_channel, raw);
    ctl.tick(hw, &mut LogEventSink::new());
}

fn row(hw: &SimBoard, row: Row) -> String {
    hw.registers()
        .lcd()
        .expect("board built with an LCD model")
        .row_text(row)
}

/// (IN1, IN2, OCR0)
fn motor_outputs(hw: &SimBoard) -> (bool, bool, u8) {
    let regs = hw.registers();
    let latch = regs.read(Register::Latch(Port::B));
    (
        latch & pins::MOTOR_IN1.pin.mask() != 0,
        latch & pins::MOTOR_IN2.pin.mask() != 0,
        regs.read(Register::Ocr0),
    )
}

// ── Bring-up ──────────────────────────────────────────────────

#[test]
fn init_leaves_blank_display_and_stopped_motor() {
    let (hw, _, _) = make_board();

    let expected: &[u8] = match pins::LCD_WIRING.bus {
        DataBus::Eight { .. } => &[command::TWO_LINES_EIGHT_BIT, command::CURSOR_OFF, command::CLEAR],
        DataBus::Four { .. } => &[
            command::FOUR_BIT_INIT1,
            command::FOUR_BIT_INIT2,
            command::TWO_LINES_FOUR_BIT,
            command::CURSOR_OFF,
            command::CLEAR,
        ],
    };
    let lcd = hw.registers().lcd().expect("lcd attached");
    assert_eq!(lcd.commands(), expected);
    assert_eq!(row(&hw, Row::R0), " ".repeat(16));
    assert_eq!(motor_outputs(&hw), (false, false, 0));
}

#[test]
fn bring_up_order_is_lcd_then_motor_then_adc() {
    let (hw, _, _) = make_board();
    let writes = hw.registers().writes();
    let first = |target: Register| {
        writes
            .iter()
            .position(|(reg, _)| *reg == target)
            .unwrap_or_else(|| panic!("{target:?} never written"))
    };

    let lcd = first(Register::Latch(pins::LCD_E.port));
    let motor = first(Register::Tccr0);
    let adc = first(Register::Admux);
    assert!(lcd < motor, "LCD before motor");
    assert!(motor < adc, "motor before ADC");
}

// ── Band scenarios ────────────────────────────────────────────

#[test]
fn hot_sample_runs_fan_flat_out() {
    let (mut hw, mut ctl, config) = make_board();
    // 500 → 125 °C
    step(&mut hw, &mut ctl, &config, 500);

    assert_eq!(ctl.last_command().state, MotorState::Forward);
    assert_eq!(motor_outputs(&hw), (false, true, 255));
    assert_eq!(row(&hw, Row::R0), "    FAN is ON   ");
    assert_eq!(row(&hw, Row::R1), "    Temp = 125 C");
}

#[test]
fn each_band_sets_its_duty() {
    // (raw sample, °C, compare value)
    let cases = [(380, 95, 191), (260, 65, 128), (124, 31, 64)];
    for (raw, celsius, compare) in cases {
        let (mut hw, mut ctl, config) = make_board();
        step(&mut hw, &mut ctl, &config, raw);

        assert_eq!(motor_outputs(&hw), (false, true, compare), "sample {raw}");
        assert_eq!(row(&hw, Row::R0), "    FAN is ON   ");
        assert_eq!(row(&hw, Row::R1), format!("    Temp = {celsius} C "));
    }
}

#[test]
fn cool_sample_stops_fan() {
    let (mut hw, mut ctl, config) = make_board();
    // 40 → 10 °C
    step(&mut hw, &mut ctl, &config, 40);

    assert_eq!(motor_outputs(&hw), (false, false, 0));
    assert_eq!(row(&hw, Row::R0), "    FAN is OFF  ");
    assert_eq!(row(&hw, Row::R1), "    Temp = 10 C ");
}

// ── Rendering across iterations ───────────────────────────────

#[test]
fn padding_erases_stale_third_digit() {
    let (mut hw, mut ctl, config) = make_board();
    step(&mut hw, &mut ctl, &config, 500);
    assert_eq!(row(&hw, Row::R1), "    Temp = 125 C");

    step(&mut hw, &mut ctl, &config, 380);
    assert_eq!(row(&hw, Row::R1), "    Temp = 95 C ");
}

#[test]
fn single_digit_after_three_digits_keeps_one_stale_column() {
    let (mut hw, mut ctl, config) = make_board();
    step(&mut hw, &mut ctl, &config, 1023);
    assert_eq!(row(&hw, Row::R1), "    Temp = 150 C");

    step(&mut hw, &mut ctl, &config, 0);
    assert_eq!(row(&hw, Row::R1), "    Temp = 0 C C");

    step(&mut hw, &mut ctl, &config, 40);
    assert_eq!(row(&hw, Row::R1), "    Temp = 10 C ");
}

#[test]
fn label_switches_with_the_fan() {
    let (mut hw, mut ctl, config) = make_board();
    step(&mut hw, &mut ctl, &config, 40);
    assert_eq!(row(&hw, Row::R0), "    FAN is OFF  ");

    step(&mut hw, &mut ctl, &config, 260);
    assert_eq!(row(&hw, Row::R0), "    FAN is ON   ");
    assert_eq!(motor_outputs(&hw), (false, true, 128));
}

#[test]
fn every_iteration_takes_exactly_one_conversion() {
    let (mut hw, mut ctl, config) = make_board();
    for raw in [40, 124, 260, 380, 500] {
        step(&mut hw, &mut ctl, &config, raw);
    }
    assert_eq!(hw.registers().conversions(), 5);
    assert_eq!(ctl.iterations(), 5);
}

#[test]
fn display_time_dominates_the_loop() {
    let (mut hw, mut ctl, config) = make_board();
    let before = hw.delay().elapsed_ms();
    step(&mut hw, &mut ctl, &config, 500);
    // Two cursor moves plus 22 characters, at least 4 ms of settle each.
    assert!(hw.delay().elapsed_ms() - before >= 24 * 4);
}
