//! Venue record as authored in the catalog seed data.

use serde::{Deserialize, Serialize};

use super::{Area, AvailabilityMap, PriceRange, VenueId};
use crate::error::CatalogError;

/// Amenities a venue advertises. Display-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Facilities {
    /// On-site parking.
    pub parking: bool,
    /// Air conditioning.
    pub ac: bool,
    /// Backup generator.
    pub generator: bool,
    /// In-house catering.
    pub catering: bool,
    /// Decoration service.
    pub decoration: bool,
    /// Stage.
    pub stage: bool,
    /// Sound system.
    pub sound_system: bool,
    /// Photography service.
    pub photography: bool,
}

/// A bookable event venue.
///
/// Immutable once loaded into a [`super::VenueCatalog`]. Owner edits never
/// touch `availability`; they live in the override store and are layered on
/// by [`crate::persistence::AvailabilityStore::effective_availability`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Unique venue identifier.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// Service area.
    pub area: Area,
    /// Price range in rupees.
    pub price_range: PriceRange,
    /// Maximum guest count. Always positive.
    pub capacity: u32,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Optional walkthrough video URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Advertised amenities.
    #[serde(default)]
    pub facilities: Facilities,
    /// Owner's contact number in international format.
    #[serde(default)]
    pub whatsapp_number: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Baseline availability authored with the venue.
    #[serde(default)]
    pub availability: AvailabilityMap,
}

impl Venue {
    /// Checks the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidVenue`] for a blank id or name, an
    /// inverted price range, or a zero capacity.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.is_blank() {
            return Err(CatalogError::InvalidVenue("venue id is empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidVenue(format!(
                "venue {} has an empty name",
                self.id
            )));
        }
        if let Err(e) = self.price_range.validate() {
            let reason = format!("venue {}: {e}", self.id);
            return Err(CatalogError::InvalidVenue(reason));
        }
        if self.capacity == 0 {
            return Err(CatalogError::InvalidVenue(format!(
                "venue {} has zero capacity",
                self.id
            )));
        }
        Ok(())
    }

    /// Returns a copy of this venue carrying `availability` instead of the
    /// baseline.
    #[must_use]
    pub fn with_availability(&self, availability: AvailabilityMap) -> Self {
        Self {
            availability,
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{DayRecord, parse_date};

    pub(crate) fn venue(
        id: &str,
        name: &str,
        area: Area,
        price: (u64, u64),
        capacity: u32,
    ) -> Venue {
        Venue {
            id: VenueId::from(id),
            name: name.to_string(),
            area,
            price_range: PriceRange {
                min: price.0,
                max: price.1,
            },
            capacity,
            image: String::new(),
            images: Vec::new(),
            video_url: None,
            facilities: Facilities::default(),
            whatsapp_number: String::new(),
            description: String::new(),
            availability: AvailabilityMap::new(),
        }
    }

    #[test]
    fn valid_venue_passes() {
        let v = venue("1", "Hall", Area::KarachiEast, (100, 200), 50);
        assert!(v.validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let v = venue("1", "Hall", Area::KarachiEast, (100, 200), 0);
        assert!(v.validate().is_err());
    }

    #[test]
    fn inverted_price_is_rejected() {
        let v = venue("1", "Hall", Area::KarachiEast, (300, 200), 10);
        let Err(err) = v.validate() else {
            panic!("expected validation error");
        };
        assert!(err.to_string().contains("venue 1"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let v = venue("1", "  ", Area::KarachiWest, (1, 2), 10);
        assert!(v.validate().is_err());
    }

    #[test]
    fn deserializes_camel_case_seed_record() {
        let raw = r#"{
            "id": "9",
            "name": "Sea Breeze",
            "area": "Karachi West",
            "priceRange": { "min": 150000, "max": 300000 },
            "capacity": 500,
            "whatsappNumber": "+923000000000",
            "facilities": { "parking": true, "soundSystem": true },
            "availability": { "2025-01-15": { "day": true, "night": false } }
        }"#;
        let Ok(v) = serde_json::from_str::<Venue>(raw) else {
            panic!("deserialization failed");
        };
        assert_eq!(v.area, Area::KarachiWest);
        assert!(v.facilities.sound_system);
        assert!(!v.facilities.ac);
        let Ok(d) = parse_date("2025-01-15") else {
            panic!("bad date");
        };
        assert_eq!(v.availability.get(d), Some(&DayRecord::new(true, false)));
    }

    #[test]
    fn with_availability_keeps_other_fields() {
        let v = venue("4", "Hall", Area::KarachiCentral, (1, 2), 10);
        let Ok(d) = parse_date("2025-05-05") else {
            panic!("bad date");
        };
        let map: AvailabilityMap = [(d, DayRecord::new(false, false))].into_iter().collect();
        let replaced = v.with_availability(map);
        assert_eq!(replaced.name, v.name);
        assert_eq!(replaced.availability.len(), 1);
        assert!(v.availability.is_empty());
    }
}
