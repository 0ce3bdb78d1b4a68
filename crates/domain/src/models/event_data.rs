//! The event-data payload: one schema per event type.
//!
//! An invitation's content is a tagged union keyed by event type. The JSON
//! form keeps the camelCase field names the frontend submits (`eventType`,
//! `familyName`, ...), with the variant-specific fields flattened next to
//! the common ones. Missing optional text fields deserialize to `""` so
//! downstream rendering never sees null; photo references that were never
//! uploaded are omitted from the serialized payload entirely.

use serde::{Deserialize, Serialize};

use super::event_type::{EventType, GENERAL_VARIANT};

fn default_religious_type() -> String {
    GENERAL_VARIANT.to_string()
}

/// Full composed payload for one invitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    #[serde(default = "default_religious_type")]
    pub religious_type: String,

    #[serde(flatten)]
    pub common: CommonFields,

    #[serde(flatten)]
    pub details: EventDetails,
}

impl EventData {
    pub fn event_type(&self) -> EventType {
        self.details.event_type()
    }
}

/// Fields shared by every event type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonFields {
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub event_title: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery_images: Vec<String>,
}

/// Event-type-specific fields, discriminated by the `eventType` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", rename_all = "lowercase")]
pub enum EventDetails {
    Wedding(WeddingDetails),
    Birthday(BirthdayDetails),
    Anniversary(AnniversaryDetails),
    Babyshower(BabyShowerDetails),
    Graduation(GraduationDetails),
    Retirement(RetirementDetails),
}

impl EventDetails {
    pub fn event_type(&self) -> EventType {
        match self {
            EventDetails::Wedding(_) => EventType::Wedding,
            EventDetails::Birthday(_) => EventType::Birthday,
            EventDetails::Anniversary(_) => EventType::Anniversary,
            EventDetails::Babyshower(_) => EventType::Babyshower,
            EventDetails::Graduation(_) => EventType::Graduation,
            EventDetails::Retirement(_) => EventType::Retirement,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingDetails {
    #[serde(default)]
    pub bride_name: String,
    #[serde(default)]
    pub groom_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bride_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groom_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub couple_photo: Option<String>,
    #[serde(default)]
    pub wedding_story: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayDetails {
    #[serde(default)]
    pub birthday_person: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub mother_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday_person_photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnniversaryDetails {
    #[serde(default)]
    pub husband_name: String,
    #[serde(default)]
    pub wife_name: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub marriage_year: String,
    #[serde(default)]
    pub first_milestone: String,
    #[serde(default)]
    pub second_milestone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabyShowerDetails {
    #[serde(default)]
    pub mother_name: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub baby_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub due_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraduationDetails {
    #[serde(default)]
    pub graduate_name: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub achievements: String,
    #[serde(default)]
    pub recognition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduate_photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementDetails {
    #[serde(default)]
    pub honoree_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start_year: String,
    #[serde(default)]
    pub milestone_year: String,
    #[serde(default)]
    pub leadership_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honoree_photo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wedding_payload_round_trips() {
        let payload = json!({
            "eventType": "wedding",
            "religiousType": "hindu",
            "familyName": "Sharma",
            "eventTitle": "Priya & Arjun",
            "eventDate": "2026-11-21",
            "eventTime": "18:00",
            "venue": "Lotus Gardens",
            "address": "12 Temple Road",
            "hostName": "Sharma Family",
            "brideName": "Priya",
            "groomName": "Arjun",
            "weddingStory": "They met at university."
        });

        let data: EventData = serde_json::from_value(payload).unwrap();
        assert_eq!(data.event_type(), EventType::Wedding);
        assert_eq!(data.religious_type, "hindu");
        assert_eq!(data.common.venue, "Lotus Gardens");

        match &data.details {
            EventDetails::Wedding(w) => {
                assert_eq!(w.bride_name, "Priya");
                assert_eq!(w.bride_photo, None);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn missing_optional_fields_default_to_empty_string() {
        let payload = json!({
            "eventType": "birthday",
            "birthdayPerson": "Maya"
        });

        let data: EventData = serde_json::from_value(payload).unwrap();
        assert_eq!(data.religious_type, "general");
        assert_eq!(data.common.description, "");
        assert_eq!(data.common.contact_phone, "");

        match &data.details {
            EventDetails::Birthday(b) => {
                assert_eq!(b.age, "");
                assert_eq!(b.father_name, "");
                assert!(b.birthday_person_photo.is_none());
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn absent_photos_are_omitted_not_null() {
        let data = EventData {
            religious_type: "general".into(),
            common: CommonFields::default(),
            details: EventDetails::Graduation(GraduationDetails {
                graduate_name: "Ravi".into(),
                ..Default::default()
            }),
        };

        let value = serde_json::to_value(&data).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("graduatePhoto"));
        assert!(!obj.contains_key("mainImage"));
        assert_eq!(obj["eventType"], "graduation");
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let payload = json!({ "eventType": "housewarming" });
        assert!(serde_json::from_value::<EventData>(payload).is_err());
    }

    #[test]
    fn each_variant_maps_to_its_event_type() {
        let cases: Vec<(EventDetails, EventType)> = vec![
            (
                EventDetails::Wedding(WeddingDetails::default()),
                EventType::Wedding,
            ),
            (
                EventDetails::Anniversary(AnniversaryDetails::default()),
                EventType::Anniversary,
            ),
            (
                EventDetails::Babyshower(BabyShowerDetails::default()),
                EventType::Babyshower,
            ),
            (
                EventDetails::Retirement(RetirementDetails::default()),
                EventType::Retirement,
            ),
        ];
        for (details, expected) in cases {
            assert_eq!(details.event_type(), expected);
        }
    }
}
