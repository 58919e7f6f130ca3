//! Generic E1.37-1 style setting collections (curve, response-time,
//! modulation-frequency) — an ordered list of descriptions, optionally
//! paired with a numeric argument (e.g. a frequency), plus a per-instance
//! "current setting" index.

use crate::types::DataPack;

/// One entry in a [`SettingCollection`]: a human label, optionally paired
/// with a numeric argument (e.g. modulation frequency in Hz).
#[derive(Debug, Clone, Copy)]
pub struct Setting {
    pub description: &'static str,
    pub argument: u32,
}

impl Setting {
    pub const fn new(description: &'static str) -> Self {
        Self {
            description,
            argument: 0,
        }
    }

    pub const fn with_argument(description: &'static str, argument: u32) -> Self {
        Self {
            description,
            argument,
        }
    }
}

/// An immutable, shared collection of settings. `zero_offset` controls
/// whether index 0 is a valid selectable setting (some E1.37-1 PIDs allow
/// "no curve selected" at index 0) or whether settings start at 1.
#[derive(Debug, Clone, Copy)]
pub struct SettingCollection {
    settings: &'static [Setting],
    zero_offset: bool,
}

impl SettingCollection {
    pub const fn new(settings: &'static [Setting], zero_offset: bool) -> Self {
        Self {
            settings,
            zero_offset,
        }
    }

    fn offset(&self) -> u8 {
        if self.zero_offset {
            0
        } else {
            1
        }
    }

    pub fn count(&self) -> u8 {
        self.settings.len() as u8
    }

    pub fn get(&self, index: u8) -> Option<&'static Setting> {
        let offset = self.offset();
        if index < offset {
            return None;
        }

        self.settings.get((index - offset) as usize)
    }
}

/// Per-instance wrapper: a shared [`SettingCollection`] plus the mutable
/// current-setting index.
pub struct SettingManager {
    collection: &'static SettingCollection,
    current: u8,
}

impl SettingManager {
    pub fn new(collection: &'static SettingCollection, current: u8) -> Self {
        Self { collection, current }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    /// Packs `(current + offset) << 8 | count` as the GET response payload.
    pub fn get_value(&self) -> DataPack {
        let offset = self.collection.offset();
        let value = ((self.current + offset) as u16) << 8 | self.collection.count() as u16;
        DataPack::from_slice(&value.to_be_bytes()).unwrap()
    }

    /// Changes the current setting. `index` is validated against
    /// `[offset, count + offset)`.
    pub fn set(&mut self, index: u8) -> Result<(), SettingError> {
        let offset = self.collection.offset();
        let end = offset + self.collection.count();

        if index < offset || index >= end {
            return Err(SettingError::OutOfRange);
        }

        self.current = index - offset;
        Ok(())
    }

    pub fn description(&self, index: u8) -> Option<&'static str> {
        self.collection.get(index).map(|setting| setting.description)
    }

    pub fn argument(&self, index: u8) -> Option<u32> {
        self.collection.get(index).map(|setting| setting.argument)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SettingError {
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    static CURVES: [Setting; 3] = [
        Setting::new("linear"),
        Setting::new("square law"),
        Setting::new("s-curve"),
    ];
    static CURVE_COLLECTION: SettingCollection = SettingCollection::new(&CURVES, false);

    #[test]
    fn get_value_packs_current_and_count() {
        let manager = SettingManager::new(&CURVE_COLLECTION, 0);
        assert_eq!(&manager.get_value()[..], &[0x00, 0x03]);
    }

    #[test]
    fn set_changes_current_within_range() {
        let mut manager = SettingManager::new(&CURVE_COLLECTION, 0);
        manager.set(2).unwrap();
        assert_eq!(manager.current(), 1);
        assert_eq!(manager.description(2), Some("square law"));
    }

    #[test]
    fn set_out_of_range_rejected() {
        let mut manager = SettingManager::new(&CURVE_COLLECTION, 0);
        assert_eq!(manager.set(0).unwrap_err(), SettingError::OutOfRange);
        assert_eq!(manager.set(4).unwrap_err(), SettingError::OutOfRange);
    }

    #[test]
    fn zero_offset_collection_allows_index_zero() {
        static FREQS: [Setting; 2] = [
            Setting::with_argument("1.2kHz", 1200),
            Setting::with_argument("disabled", 0),
        ];
        static FREQ_COLLECTION: SettingCollection = SettingCollection::new(&FREQS, true);

        let mut manager = SettingManager::new(&FREQ_COLLECTION, 0);
        manager.set(0).unwrap();
        manager.set(1).unwrap();
        assert_eq!(manager.set(2).unwrap_err(), SettingError::OutOfRange);
    }
}
