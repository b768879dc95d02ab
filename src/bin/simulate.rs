//! Host simulation of the ThermoFan board.
//!
//! Runs the real drivers and the control loop against the in-memory
//! register file, feeding the sensor channel from a list of raw ADC
//! samples and printing what the LCD shows after each iteration.
//!
//! ```text
//! thermofan-sim [SAMPLE ...]     # raw 0..=1023, default: a heat-up ramp
//! ```
//! Set `THERMOFAN_LOG=debug` for per-iteration telemetry.

use anyhow::{Context, Result, bail};
use log::{Level, LevelFilter, Log, Metadata, Record, info};

use thermofan::adapters::delay::SimDelay;
use thermofan::adapters::hardware::HardwareAdapter;
use thermofan::adapters::log_sink::LogEventSink;
use thermofan::adapters::sim::{LcdModel, SimRegisters};
use thermofan::app::service::FanController;
use thermofan::config::SystemConfig;
use thermofan::drivers::adc::ADC_MAX_VALUE;
use thermofan::drivers::lcd::Row;
use thermofan::pins;

const DEFAULT_RAMP: [u16; 7] = [40, 124, 260, 380, 500, 380, 40];

// ── stderr logger ─────────────────────────────────────────────

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn parse_level(value: &str) -> Result<LevelFilter> {
    let level = value
        .parse::<Level>()
        .with_context(|| format!("THERMOFAN_LOG={value:?} is not a log level"))?;
    Ok(level.to_level_filter())
}

fn init_logging() -> Result<()> {
    let level = match std::env::var("THERMOFAN_LOG") {
        Ok(v) => parse_level(&v)?,
        Err(_) => LevelFilter::Info,
    };
    log::set_logger(&LOGGER).context("logger already installed")?;
    log::set_max_level(level);
    Ok(())
}

fn parse_samples<I>(args: I) -> Result<Vec<u16>>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.is_empty() {
        return Ok(DEFAULT_RAMP.to_vec());
    }
    args.iter()
        .map(|arg| {
            let raw: u16 = arg
                .parse()
                .with_context(|| format!("sample {arg:?} is not an integer"))?;
            if raw > ADC_MAX_VALUE {
                bail!("sample {raw} exceeds the 10-bit range 0..={ADC_MAX_VALUE}");
            }
            Ok(raw)
        })
        .collect()
}

fn main() -> Result<()> {
    init_logging()?;
    let samples = parse_samples(std::env::args().skip(1))?;
    let config = SystemConfig::default();

    let regs = SimRegisters::new().with_lcd(LcdModel::new(pins::LCD_WIRING));
    let mut hw = HardwareAdapter::init(regs, SimDelay::new(), &config);
    let mut sink = LogEventSink::new();
    let mut controller = FanController::new(&config);
    controller.start(&mut sink);

    for raw in samples {
        hw.registers_mut().set_analog(config.sensor_channel, raw);
        let command = controller.tick(&mut hw, &mut sink);

        let lcd = hw
            .registers()
            .lcd()
            .context("simulated board has no LCD attached")?;
        info!(
            "sample {raw:>4} -> {:?} {:>3}% |{}|{}|",
            command.state,
            command.speed,
            lcd.row_text(Row::R0),
            lcd.row_text(Row::R1),
        );
    }

    info!(
        "{} iterations, {} ms of simulated bus delay",
        controller.iterations(),
        hw.delay().elapsed_ms()
    );
    Ok(())
}
