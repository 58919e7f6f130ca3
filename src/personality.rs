//! Personality tables shared, read-only, across responder instances.
//!
//! Personality lists are initialized once (as `&'static` slices) and never
//! mutated; each responder only owns the *index* of its active personality.

use crate::consts::DMX_UNIVERSE_SIZE;

/// A single personality: a DMX footprint and a short human label.
#[derive(Debug, Clone, Copy)]
pub struct Personality {
    pub footprint: u16,
    pub description: &'static str,
}

impl Personality {
    pub const fn new(footprint: u16, description: &'static str) -> Self {
        Self {
            footprint,
            description,
        }
    }
}

/// An immutable, shared collection of personalities. 1-indexed on the wire.
#[derive(Debug, Clone, Copy)]
pub struct PersonalityCollection {
    personalities: &'static [Personality],
}

impl PersonalityCollection {
    pub const fn new(personalities: &'static [Personality]) -> Self {
        Self { personalities }
    }

    pub fn count(&self) -> u8 {
        self.personalities.len() as u8
    }

    /// `personality_number` is 1-indexed; `None` if out of range.
    pub fn get(&self, personality_number: u8) -> Option<&'static Personality> {
        if personality_number == 0 {
            return None;
        }

        self.personalities.get(personality_number as usize - 1)
    }
}

/// Per-instance wrapper around a shared [`PersonalityCollection`] plus the
/// mutable active-personality index.
pub struct PersonalityManager {
    collection: &'static PersonalityCollection,
    active_personality: u8,
}

impl PersonalityManager {
    /// `active_personality` is 1-indexed and must exist in `collection`.
    pub fn new(collection: &'static PersonalityCollection, active_personality: u8) -> Self {
        debug_assert!(collection.get(active_personality).is_some());

        Self {
            collection,
            active_personality,
        }
    }

    pub fn active_personality_number(&self) -> u8 {
        self.active_personality
    }

    pub fn personality_count(&self) -> u8 {
        self.collection.count()
    }

    pub fn active_personality(&self) -> &'static Personality {
        self.collection
            .get(self.active_personality)
            .expect("active personality always refers to a valid entry")
    }

    pub fn active_footprint(&self) -> u16 {
        self.active_personality().footprint
    }

    pub fn get(&self, personality_number: u8) -> Option<&'static Personality> {
        self.collection.get(personality_number)
    }

    /// Activates `personality_number`. Fails if it doesn't exist, or if the
    /// resulting footprint would push the already-configured start address
    /// past the end of the universe.
    pub fn set_active_personality(
        &mut self,
        personality_number: u8,
        start_address: u16,
    ) -> Result<(), PersonalityError> {
        let personality = self
            .collection
            .get(personality_number)
            .ok_or(PersonalityError::NotFound)?;

        if personality.footprint != 0 && start_address != 0xFFFF {
            let end_address = 1 + DMX_UNIVERSE_SIZE - personality.footprint;
            if start_address > end_address {
                return Err(PersonalityError::AddressOutOfRange);
            }
        }

        self.active_personality = personality_number;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PersonalityError {
    NotFound,
    AddressOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    static PERSONALITIES: [Personality; 2] = [
        Personality::new(4, "4 channel"),
        Personality::new(10, "10 channel"),
    ];
    static COLLECTION: PersonalityCollection = PersonalityCollection::new(&PERSONALITIES);

    #[test]
    fn active_defaults_and_switches() {
        let mut manager = PersonalityManager::new(&COLLECTION, 1);
        assert_eq!(manager.active_footprint(), 4);

        manager.set_active_personality(2, 1).unwrap();
        assert_eq!(manager.active_footprint(), 10);
        assert_eq!(manager.active_personality_number(), 2);
    }

    #[test]
    fn out_of_range_personality_rejected() {
        let mut manager = PersonalityManager::new(&COLLECTION, 1);
        assert_eq!(
            manager.set_active_personality(3, 1).unwrap_err(),
            PersonalityError::NotFound
        );
    }

    #[test]
    fn footprint_overrunning_universe_rejected() {
        let mut manager = PersonalityManager::new(&COLLECTION, 1);
        assert_eq!(
            manager.set_active_personality(2, 504).unwrap_err(),
            PersonalityError::AddressOutOfRange
        );
    }

    #[test]
    fn address_near_u16_max_rejected_without_wraparound() {
        let mut manager = PersonalityManager::new(&COLLECTION, 1);
        assert_eq!(
            manager.set_active_personality(2, 65530).unwrap_err(),
            PersonalityError::AddressOutOfRange
        );
    }
}
