//! Integration tests for the FanController → ports pipeline.
//!
//! Verify band selection, actuation and status rendering for each
//! temperature band against the recording mock adapter.

use super::mock_hw::{HwCall, LogSink, MockHardware};

use thermofan::app::events::AppEvent;
use thermofan::app::service::FanController;
use thermofan::config::SystemConfig;
use thermofan::control::bands::FanCommand;
use thermofan::drivers::lcd::Row;
use thermofan::drivers::motor::MotorState;

fn make_controller() -> (FanController, LogSink) {
    let mut ctl = FanController::new(&SystemConfig::default());
    let mut sink = LogSink::new();
    ctl.start(&mut sink);
    (ctl, sink)
}

fn run_once(temperature_c: u8) -> (MockHardware, FanCommand) {
    let (mut ctl, mut sink) = make_controller();
    let mut hw = MockHardware::new(temperature_c);
    let command = ctl.tick(&mut hw, &mut sink);
    (hw, command)
}

// ── Band scenarios ────────────────────────────────────────────

#[test]
fn hot_runs_full_speed() {
    let (hw, command) = run_once(125);
    assert_eq!(command.state, MotorState::Forward);
    assert_eq!(command.speed, 100);
    assert_eq!(hw.last_rotation(), Some((MotorState::Forward, 100)));
    assert_eq!(hw.text_on(Row::R0).as_deref(), Some("FAN is ON "));
    assert_eq!(hw.text_on(Row::R1).as_deref(), Some("Temp = 125 C"));
}

#[test]
fn warm_bands_step_down() {
    for (temperature_c, speed) in [(95, 75), (65, 50), (31, 25)] {
        let (hw, command) = run_once(temperature_c);
        assert_eq!(
            command,
            FanCommand {
                state: MotorState::Forward,
                speed
            },
            "at {temperature_c}°C"
        );
        assert_eq!(hw.last_rotation(), Some((MotorState::Forward, speed)));
        assert_eq!(hw.text_on(Row::R0).as_deref(), Some("FAN is ON "));
    }
}

#[test]
fn cool_turns_fan_off() {
    let (hw, command) = run_once(10);
    assert_eq!(command, FanCommand::OFF);
    assert_eq!(hw.last_rotation(), Some((MotorState::Off, 0)));
    assert_eq!(hw.text_on(Row::R0).as_deref(), Some("FAN is OFF"));
    assert_eq!(hw.text_on(Row::R1).as_deref(), Some("Temp = 10 C "));
}

// ── Iteration shape ───────────────────────────────────────────

#[test]
fn tick_samples_then_drives_then_renders() {
    let (hw, _) = run_once(65);
    assert_eq!(hw.calls[0], HwCall::ReadTemperature);
    assert_eq!(
        hw.calls[1],
        HwCall::Rotate {
            state: MotorState::Forward,
            speed: 50
        }
    );
    assert_eq!(
        hw.calls[2],
        HwCall::StringAt {
            row: Row::R0,
            col: 4,
            text: "FAN is ON ".into()
        }
    );
    assert!(!hw.calls.contains(&HwCall::Clear), "status is overdrawn, not cleared");
}

#[test]
fn actuator_is_redriven_every_iteration() {
    let (mut ctl, mut sink) = make_controller();
    let mut hw = MockHardware::new(95);
    for _ in 0..3 {
        ctl.tick(&mut hw, &mut sink);
    }
    assert_eq!(hw.rotations(), vec![(MotorState::Forward, 75); 3]);
    assert_eq!(sink.band_changes(), 1);
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn start_reports_band_count() {
    let (_, sink) = make_controller();
    assert_eq!(sink.events, vec![AppEvent::Started { bands: 4 }]);
}

#[test]
fn band_change_carries_previous_and_new_command() {
    let (mut ctl, mut sink) = make_controller();
    let mut hw = MockHardware::new(125);
    ctl.tick(&mut hw, &mut sink);
    hw.temperature_c = 20;
    ctl.tick(&mut hw, &mut sink);

    let changes: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::BandChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    let full = FanCommand {
        state: MotorState::Forward,
        speed: 100,
    };
    assert_eq!(changes, vec![(FanCommand::OFF, full), (full, FanCommand::OFF)]);
    assert_eq!(ctl.last_command(), FanCommand::OFF);
}

#[test]
fn staying_off_emits_no_band_change() {
    let (mut ctl, mut sink) = make_controller();
    let mut hw = MockHardware::new(5);
    ctl.tick(&mut hw, &mut sink);
    assert_eq!(sink.band_changes(), 0);

    let telemetry = sink.events.iter().find_map(|e| match e {
        AppEvent::Telemetry(t) => Some(*t),
        _ => None,
    });
    let telemetry = telemetry.expect("every tick reports telemetry");
    assert_eq!(telemetry.iteration, 1);
    assert_eq!(telemetry.temperature_c, 5);
    assert_eq!(telemetry.command, FanCommand::OFF);
}
