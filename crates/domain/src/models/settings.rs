//! Admin settings and customer profile models.
//!
//! These are edited locally through a draft and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Administrator profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
}

/// Facility details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySettings {
    pub name: String,
    pub address: String,
    /// Number of enclosures available.
    pub capacity: u32,
    pub operating_hours: String,
}

/// Which channels the admin receives alerts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub daily_reports: bool,
}

/// Operational switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemFlags {
    pub auto_backup: bool,
    pub maintenance_mode: bool,
    pub debug_mode: bool,
}

/// Everything on the admin settings screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
    pub profile: AdminProfile,
    pub facility: FacilitySettings,
    pub notifications: NotificationPreferences,
    pub system: SystemFlags,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            profile: AdminProfile {
                name: "Dr. Amanda".to_string(),
                email: "amanda@reptilecare.com".to_string(),
                phone: "+62 812-3456-7890".to_string(),
                bio: "Reptile veterinarian with 10 years of experience".to_string(),
            },
            facility: FacilitySettings {
                name: "ReptileCare Premium".to_string(),
                address: "Jl. Sudirman No. 123, Jakarta Selatan".to_string(),
                capacity: 50,
                operating_hours: "08:00 - 18:00".to_string(),
            },
            notifications: NotificationPreferences {
                email_notifications: true,
                sms_notifications: false,
                push_notifications: true,
                daily_reports: true,
            },
            system: SystemFlags {
                auto_backup: true,
                maintenance_mode: false,
                debug_mode: false,
            },
        }
    }
}

/// Section of the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsSection {
    Profile,
    Facility,
    Notifications,
    System,
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsSection::Profile => write!(f, "profile"),
            SettingsSection::Facility => write!(f, "facility"),
            SettingsSection::Notifications => write!(f, "notifications"),
            SettingsSection::System => write!(f, "system"),
        }
    }
}

impl AdminSettings {
    /// Sections whose values differ between `self` and `other`.
    pub fn changed_sections(&self, other: &AdminSettings) -> Vec<SettingsSection> {
        let mut changed = Vec::new();
        if self.profile != other.profile {
            changed.push(SettingsSection::Profile);
        }
        if self.facility != other.facility {
            changed.push(SettingsSection::Facility);
        }
        if self.notifications != other.notifications {
            changed.push(SettingsSection::Notifications);
        }
        if self.system != other.system {
            changed.push(SettingsSection::System);
        }
        changed
    }
}

/// Customer-editable contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub owner_id: String,
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,
    /// Optional; blank when the customer never gave one.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AdminSettings::default();
        assert_eq!(settings.profile.name, "Dr. Amanda");
        assert_eq!(settings.facility.capacity, 50);
        assert!(settings.notifications.email_notifications);
        assert!(!settings.notifications.sms_notifications);
        assert!(settings.system.auto_backup);
        assert!(!settings.system.maintenance_mode);
    }

    #[test]
    fn test_changed_sections() {
        let original = AdminSettings::default();
        assert!(original.changed_sections(&original.clone()).is_empty());

        let mut edited = original.clone();
        edited.facility.capacity = 60;
        edited.system.debug_mode = true;
        assert_eq!(
            original.changed_sections(&edited),
            vec![SettingsSection::Facility, SettingsSection::System]
        );
    }

    #[test]
    fn test_customer_profile_validation() {
        let mut profile = CustomerProfile {
            owner_id: "owner1".to_string(),
            name: "Sarah Johnson".to_string(),
            phone: "+62 812-1111-1111".to_string(),
            email: String::new(),
        };
        assert!(profile.validate().is_ok());

        profile.phone = "call me".to_string();
        assert!(profile.validate().is_err());

        profile.phone = "+62 812-1111-1111".to_string();
        profile.name = "  ".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_settings_serialization() {
        let json = serde_json::to_string(&AdminSettings::default()).unwrap();
        assert!(json.contains("\"operatingHours\":\"08:00 - 18:00\""));
        assert!(json.contains("\"maintenanceMode\":false"));
    }

    #[test]
    fn test_settings_section_display() {
        assert_eq!(SettingsSection::Notifications.to_string(), "notifications");
    }
}
