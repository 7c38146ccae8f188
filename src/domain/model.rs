use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw document as held by the store: field name to JSON value.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Availability of a listing. Transitions happen outside this service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyStatus {
    Available,
    Reserved,
    Sold,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 3] = [
        PropertyStatus::Available,
        PropertyStatus::Reserved,
        PropertyStatus::Sold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Reserved => "Reserved",
            PropertyStatus::Sold => "Sold",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended vocabulary for `Property::property_type`. The stored field is
/// free-form, so this is advisory only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    Penthouse,
    Villa,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::Penthouse,
        PropertyType::Villa,
        PropertyType::Townhouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Villa => "Villa",
            PropertyType::Townhouse => "Townhouse",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub parking: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub balcony: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub furnished: bool,
    #[serde(default)]
    pub view: Option<String>,
}

/// Nearby landmark. `time` is display text ("5 min"), `icon` is resolved by
/// the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProximityItem {
    pub name: String,
    pub time: String,
    pub icon: String,
}

/// Core listing record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub project: String,
    pub location: String,
    pub price: f64,
    pub size: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub status: PropertyStatus,
    #[serde(rename = "type")]
    pub property_type: String,
    pub images: Vec<String>,
    pub description: String,
    pub amenities: Vec<String>,
    pub features: Feature,
    #[serde(default, deserialize_with = "null_as_default")]
    pub proximity: Vec<ProximityItem>,
    #[serde(rename = "handoverDate", default)]
    pub handover_date: Option<String>,
}

impl Property {
    pub fn known_type(&self) -> Option<PropertyType> {
        PropertyType::parse(&self.property_type)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyListResponse {
    pub properties: Vec<Property>,
}

/// Explicit `null` in an optional field means "use the default".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in PropertyStatus::ALL {
            assert_eq!(PropertyStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PropertyStatus::parse("available"), None);
    }

    #[test]
    fn test_serializes_wire_field_names() {
        let property = Property {
            id: "PROP-001".to_string(),
            name: "IL VENTO".to_string(),
            tagline: None,
            project: "IL VENTO".to_string(),
            location: "Dubai Maritime".to_string(),
            price: 5_200_000.0,
            size: 2800.0,
            bedrooms: 3,
            bathrooms: 4,
            status: PropertyStatus::Available,
            property_type: "Residential".to_string(),
            images: vec![],
            description: String::new(),
            amenities: vec![],
            features: Feature::default(),
            proximity: vec![],
            handover_date: Some("Q4 2025".to_string()),
        };

        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["type"], "Residential");
        assert_eq!(json["handoverDate"], "Q4 2025");
        assert_eq!(json["status"], "Available");
        assert!(json["proximity"].as_array().unwrap().is_empty());
        assert_eq!(property.known_type(), None);
    }
}
