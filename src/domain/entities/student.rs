//! Student entity
//!
//! A resident's record. Created on registration, mutated only by room
//! allocation and approved profile-update applications, removed by an
//! explicit admin delete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Gender;

/// A registered hostel resident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned id, unique among students, immutable
    pub id: u32,
    pub name: String,
    pub gender: Gender,
    pub branch: String,
    pub year: String,
    pub blood_group: String,
    pub caste: String,
    pub contact: String,
    pub email: String,
    pub permanent_address: String,
    pub temporary_address: String,
    pub parent_name: String,
    pub parent_contact: String,
    /// Room currently held, if any (references `Room::room_number`)
    pub room_number: Option<String>,
    pub admission_date: NaiveDate,
    /// URL of the profile photo, if one was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

/// Input for registering a student (everything but the store-assigned id)
///
/// If `room_number` is set the store performs the allocation side effect
/// immediately after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub gender: Gender,
    pub branch: String,
    pub year: String,
    pub blood_group: String,
    pub caste: String,
    pub contact: String,
    pub email: String,
    pub permanent_address: String,
    pub temporary_address: String,
    pub parent_name: String,
    pub parent_contact: String,
    #[serde(default)]
    pub room_number: Option<String>,
    pub admission_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

/// Proposed changes to a student's personal details
///
/// One optional field per mutable attribute, so an invalid field name is a
/// compile-time concern. Room assignment is deliberately absent: allocation
/// must go through `allocate_room` to keep occupancy counts consistent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caste: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

impl StudentPatch {
    /// True when no field is proposed
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.branch.is_none()
            && self.year.is_none()
            && self.blood_group.is_none()
            && self.caste.is_none()
            && self.contact.is_none()
            && self.email.is_none()
            && self.permanent_address.is_none()
            && self.temporary_address.is_none()
            && self.parent_name.is_none()
            && self.parent_contact.is_none()
            && self.profile_photo.is_none()
    }

    /// Field-by-field overwrite; absent fields leave the record untouched
    pub fn apply(&self, student: &mut Student) {
        if let Some(name) = &self.name {
            student.name = name.clone();
        }
        if let Some(branch) = &self.branch {
            student.branch = branch.clone();
        }
        if let Some(year) = &self.year {
            student.year = year.clone();
        }
        if let Some(blood_group) = &self.blood_group {
            student.blood_group = blood_group.clone();
        }
        if let Some(caste) = &self.caste {
            student.caste = caste.clone();
        }
        if let Some(contact) = &self.contact {
            student.contact = contact.clone();
        }
        if let Some(email) = &self.email {
            student.email = email.clone();
        }
        if let Some(permanent_address) = &self.permanent_address {
            student.permanent_address = permanent_address.clone();
        }
        if let Some(temporary_address) = &self.temporary_address {
            student.temporary_address = temporary_address.clone();
        }
        if let Some(parent_name) = &self.parent_name {
            student.parent_name = parent_name.clone();
        }
        if let Some(parent_contact) = &self.parent_contact {
            student.parent_contact = parent_contact.clone();
        }
        if let Some(profile_photo) = &self.profile_photo {
            student.profile_photo = Some(profile_photo.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> Student {
        Student {
            id: 1,
            name: "Aarav Sharma".to_string(),
            gender: Gender::Male,
            branch: "CSE".to_string(),
            year: "2nd".to_string(),
            blood_group: "B+".to_string(),
            caste: "General".to_string(),
            contact: "9876543210".to_string(),
            email: "aarav.sharma1@example.ac.in".to_string(),
            permanent_address: "12, Civil Lines, Nagpur".to_string(),
            temporary_address: "Room B-G01, Boys Hostel".to_string(),
            parent_name: "Mr. Sharma".to_string(),
            parent_contact: "8876543210".to_string(),
            room_number: Some("B-G01".to_string()),
            admission_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            profile_photo: None,
        }
    }

    #[test]
    fn patch_default_is_empty() {
        assert!(StudentPatch::default().is_empty());
    }

    #[test]
    fn patch_with_field_is_not_empty() {
        let patch = StudentPatch {
            contact: Some("999".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_apply_overwrites_only_present_fields() {
        let mut student = sample_student();
        let patch = StudentPatch {
            contact: Some("9999900000".to_string()),
            email: Some("new@example.ac.in".to_string()),
            ..Default::default()
        };

        patch.apply(&mut student);

        assert_eq!(student.contact, "9999900000");
        assert_eq!(student.email, "new@example.ac.in");
        // Everything else untouched
        assert_eq!(student.name, "Aarav Sharma");
        assert_eq!(student.room_number.as_deref(), Some("B-G01"));
        assert_eq!(student.branch, "CSE");
    }

    #[test]
    fn patch_apply_empty_is_identity() {
        let mut student = sample_student();
        let before = student.clone();
        StudentPatch::default().apply(&mut student);
        assert_eq!(student, before);
    }

    #[test]
    fn patch_serde_skips_absent_fields() {
        let patch = StudentPatch {
            contact: Some("9999900000".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, "{\"contact\":\"9999900000\"}");
    }
}
