//! System configuration parameters
//!
//! The fixed, compiled-in constant set for the fan controller.  There is no
//! runtime source of configuration; the serde derives exist so the set can
//! be dumped and compared by tooling.

use serde::{Deserialize, Serialize};

use crate::control::bands::SpeedBand;
use crate::drivers::adc::{AdcConfig, Channel, Prescaler, ReferenceVoltage};
use crate::pins;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Analog sampler ---
    pub adc: AdcConfig,
    /// Channel the LM35 output is wired to.
    pub sensor_channel: Channel,

    // --- Fan bands ---
    /// Speed bands, highest threshold first.  Below the last threshold the
    /// fan is off.
    pub bands: [SpeedBand; 4],
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // 2.56 V internal reference, 125 kHz ADC clock at 1 MHz
            adc: AdcConfig {
                reference: ReferenceVoltage::Internal,
                prescaler: Prescaler::Div8,
            },
            sensor_channel: pins::TEMP_SENSOR_CHANNEL,

            bands: [
                SpeedBand::new(120, 100),
                SpeedBand::new(90, 75),
                SpeedBand::new(60, 50),
                SpeedBand::new(30, 25),
            ],
        }
    }
}
