//! Sensor model: a polled value with running lowest/highest and an
//! optional recorded snapshot, per E1.20's sensor PIDs.

/// Value reported when a sensor does not support recorded-range tracking.
pub const SENSOR_RECORDED_RANGE_UNSUPPORTED: i16 = 0;
/// Value reported when a sensor does not support recorded-value tracking.
pub const SENSOR_RECORDED_UNSUPPORTED: i16 = 0;

/// Static metadata describing a sensor, per SENSOR_DEFINITION.
#[derive(Debug, Clone, Copy)]
pub struct SensorDefinition {
    pub kind: u8,
    pub unit: u8,
    pub prefix: u8,
    pub range_min: i16,
    pub range_max: i16,
    pub normal_min: i16,
    pub normal_max: i16,
    pub recorded_value_support: u8,
    pub description: &'static str,
}

/// A single sensor: its static definition plus the mutable polled state.
pub struct Sensor {
    pub definition: SensorDefinition,
    value: i16,
    lowest: i16,
    highest: i16,
    recorded: i16,
}

/// Bit 0 of `recorded_value_support`: the sensor tracks lowest/highest.
pub const SUPPORTS_RECORDED_RANGE: u8 = 0x01;
/// Bit 1 of `recorded_value_support`: the sensor supports explicit record.
pub const SUPPORTS_RECORDED_VALUE: u8 = 0x02;

impl Sensor {
    pub fn new(definition: SensorDefinition) -> Self {
        Self {
            definition,
            value: 0,
            lowest: 0,
            highest: 0,
            recorded: 0,
        }
    }

    fn supports_range(&self) -> bool {
        self.definition.recorded_value_support & SUPPORTS_RECORDED_RANGE != 0
    }

    fn supports_recorded(&self) -> bool {
        self.definition.recorded_value_support & SUPPORTS_RECORDED_VALUE != 0
    }

    pub fn value(&self) -> i16 {
        self.value
    }

    pub fn lowest(&self) -> i16 {
        if self.supports_range() {
            self.lowest
        } else {
            SENSOR_RECORDED_RANGE_UNSUPPORTED
        }
    }

    pub fn highest(&self) -> i16 {
        if self.supports_range() {
            self.highest
        } else {
            SENSOR_RECORDED_RANGE_UNSUPPORTED
        }
    }

    pub fn recorded(&self) -> i16 {
        if self.supports_recorded() {
            self.recorded
        } else {
            SENSOR_RECORDED_UNSUPPORTED
        }
    }

    /// Polls the sensor (via `poll_fn`), updating the running lowest/highest.
    pub fn fetch_value(&mut self, poll_fn: impl FnOnce() -> i16) -> i16 {
        let value = poll_fn();
        self.value = value;

        if self.lowest == 0 && self.highest == 0 {
            self.lowest = value;
            self.highest = value;
        } else {
            self.lowest = self.lowest.min(value);
            self.highest = self.highest.max(value);
        }

        value
    }

    /// Fetches and snapshots the current value into `recorded`.
    pub fn record(&mut self, poll_fn: impl FnOnce() -> i16) {
        let value = self.fetch_value(poll_fn);
        self.recorded = value;
    }

    /// Resets polled, lowest/highest and recorded state to zero.
    pub fn reset(&mut self) {
        self.value = 0;
        self.lowest = 0;
        self.highest = 0;
        self.recorded = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> SensorDefinition {
        SensorDefinition {
            kind: 0x00,
            unit: 0x01,
            prefix: 0x00,
            range_min: -20,
            range_max: 80,
            normal_min: 0,
            normal_max: 50,
            recorded_value_support: SUPPORTS_RECORDED_RANGE | SUPPORTS_RECORDED_VALUE,
            description: "temperature",
        }
    }

    #[test]
    fn fetch_value_tracks_lowest_and_highest() {
        let mut sensor = Sensor::new(definition());
        sensor.fetch_value(|| 20);
        sensor.fetch_value(|| 5);
        sensor.fetch_value(|| 30);

        assert_eq!(sensor.value(), 30);
        assert_eq!(sensor.lowest(), 5);
        assert_eq!(sensor.highest(), 30);
    }

    #[test]
    fn record_snapshots_current_value() {
        let mut sensor = Sensor::new(definition());
        sensor.fetch_value(|| 12);
        sensor.record(|| 40);
        assert_eq!(sensor.recorded(), 40);
    }

    #[test]
    fn unsupported_recorded_range_reports_sentinel() {
        let mut definition = definition();
        definition.recorded_value_support = 0;
        let mut sensor = Sensor::new(definition);
        sensor.fetch_value(|| 99);

        assert_eq!(sensor.lowest(), SENSOR_RECORDED_RANGE_UNSUPPORTED);
        assert_eq!(sensor.highest(), SENSOR_RECORDED_RANGE_UNSUPPORTED);
        assert_eq!(sensor.recorded(), SENSOR_RECORDED_UNSUPPORTED);
    }

    #[test]
    fn reset_clears_all_tracked_state() {
        let mut sensor = Sensor::new(definition());
        sensor.fetch_value(|| 20);
        sensor.record(|| 20);
        sensor.reset();

        assert_eq!(sensor.value(), 0);
        assert_eq!(sensor.lowest(), 0);
        assert_eq!(sensor.highest(), 0);
        assert_eq!(sensor.recorded(), 0);
    }
}
