//! The settings page's in-memory preference set. Nothing here is persisted;
//! only the debug logging switch lives in the app config.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Bio,
}

impl ProfileField {
    pub const ALL: &'static [ProfileField] = &[Self::Name, Self::Email, Self::Phone, Self::Bio];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Bio => "Bio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Notifications,
    Appearance,
    Privacy,
    Data,
}

impl Section {
    pub const ALL: &'static [Section] = &[Self::Notifications, Self::Appearance, Self::Privacy, Self::Data];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Notifications => "Notifications",
            Self::Appearance => "Appearance",
            Self::Privacy => "Privacy & Security",
            Self::Data => "Data Management",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    EmailNotifications,
    PushNotifications,
    SmsNotifications,
    AppointmentReminders,
    SystemAlerts,
    DarkMode,
    CompactMode,
    TwoFactorAuth,
    DataSharing,
    ActivityLogging,
    AutoBackup,
}

impl Toggle {
    pub const ALL: &'static [Toggle] = &[
        Self::EmailNotifications,
        Self::PushNotifications,
        Self::SmsNotifications,
        Self::AppointmentReminders,
        Self::SystemAlerts,
        Self::DarkMode,
        Self::CompactMode,
        Self::TwoFactorAuth,
        Self::DataSharing,
        Self::ActivityLogging,
        Self::AutoBackup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email Notifications",
            Self::PushNotifications => "Push Notifications",
            Self::SmsNotifications => "SMS Notifications",
            Self::AppointmentReminders => "Appointment Reminders",
            Self::SystemAlerts => "System Alerts",
            Self::DarkMode => "Dark Mode",
            Self::CompactMode => "Compact Mode",
            Self::TwoFactorAuth => "Two-Factor Authentication",
            Self::DataSharing => "Data Sharing",
            Self::ActivityLogging => "Activity Logging",
            Self::AutoBackup => "Auto Backup",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Self::EmailNotifications
            | Self::PushNotifications
            | Self::SmsNotifications
            | Self::AppointmentReminders
            | Self::SystemAlerts => Section::Notifications,
            Self::DarkMode | Self::CompactMode => Section::Appearance,
            Self::TwoFactorAuth | Self::DataSharing | Self::ActivityLogging => Section::Privacy,
            Self::AutoBackup => Section::Data,
        }
    }

    pub fn in_section(section: Section) -> impl Iterator<Item = Toggle> {
        Self::ALL.iter().copied().filter(move |t| t.section() == section)
    }
}

/// Data retention choices, in months.
pub const RETENTION_CHOICES: &[u8] = &[3, 6, 12, 24];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub appointment_reminders: bool,
    pub system_alerts: bool,
    pub dark_mode: bool,
    pub compact_mode: bool,
    pub two_factor_auth: bool,
    pub data_sharing: bool,
    pub activity_logging: bool,
    pub auto_backup: bool,
    pub data_retention_months: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            name: "Dr.Prachi jain".into(),
            email: "dr.prachi@healthplus.com".into(),
            phone: "+91 98765 43210".into(),
            bio: "Experienced physician specializing in internal medicine".into(),
            email_notifications: true,
            push_notifications: true,
            sms_notifications: false,
            appointment_reminders: true,
            system_alerts: true,
            dark_mode: false,
            compact_mode: false,
            two_factor_auth: false,
            data_sharing: false,
            activity_logging: true,
            auto_backup: true,
            data_retention_months: 12,
        }
    }
}

impl Preferences {
    pub fn profile(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn set_profile(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Bio => &mut self.bio,
        };
        *slot = value;
    }

    fn slot(&mut self, toggle: Toggle) -> &mut bool {
        match toggle {
            Toggle::EmailNotifications => &mut self.email_notifications,
            Toggle::PushNotifications => &mut self.push_notifications,
            Toggle::SmsNotifications => &mut self.sms_notifications,
            Toggle::AppointmentReminders => &mut self.appointment_reminders,
            Toggle::SystemAlerts => &mut self.system_alerts,
            Toggle::DarkMode => &mut self.dark_mode,
            Toggle::CompactMode => &mut self.compact_mode,
            Toggle::TwoFactorAuth => &mut self.two_factor_auth,
            Toggle::DataSharing => &mut self.data_sharing,
            Toggle::ActivityLogging => &mut self.activity_logging,
            Toggle::AutoBackup => &mut self.auto_backup,
        }
    }

    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::EmailNotifications => self.email_notifications,
            Toggle::PushNotifications => self.push_notifications,
            Toggle::SmsNotifications => self.sms_notifications,
            Toggle::AppointmentReminders => self.appointment_reminders,
            Toggle::SystemAlerts => self.system_alerts,
            Toggle::DarkMode => self.dark_mode,
            Toggle::CompactMode => self.compact_mode,
            Toggle::TwoFactorAuth => self.two_factor_auth,
            Toggle::DataSharing => self.data_sharing,
            Toggle::ActivityLogging => self.activity_logging,
            Toggle::AutoBackup => self.auto_backup,
        }
    }

    pub fn toggle(&mut self, toggle: Toggle) {
        let slot = self.slot(toggle);
        *slot = !*slot;
    }

    /// Ignores values outside [`RETENTION_CHOICES`].
    pub fn set_retention(&mut self, months: u8) {
        if RETENTION_CHOICES.contains(&months) {
            self.data_retention_months = months;
        } else {
            log::warn!("Ignoring unsupported retention of {} months", months);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_settings_page() {
        let prefs = Preferences::default();
        assert!(prefs.get(Toggle::EmailNotifications));
        assert!(!prefs.get(Toggle::SmsNotifications));
        assert!(!prefs.get(Toggle::TwoFactorAuth));
        assert!(prefs.get(Toggle::AutoBackup));
        assert_eq!(prefs.data_retention_months, 12);
        assert_eq!(prefs.profile(ProfileField::Email), "dr.prachi@healthplus.com");
    }

    #[test]
    fn toggle_flips_only_its_field() {
        let mut prefs = Preferences::default();
        prefs.toggle(Toggle::DarkMode);
        assert!(prefs.dark_mode);
        assert!(!prefs.compact_mode);
        prefs.toggle(Toggle::DarkMode);
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn every_toggle_has_a_section() {
        let total: usize = Section::ALL.iter().map(|s| Toggle::in_section(*s).count()).sum();
        assert_eq!(total, Toggle::ALL.len());
        assert_eq!(Toggle::in_section(Section::Notifications).count(), 5);
    }

    #[test]
    fn retention_only_accepts_choices() {
        let mut prefs = Preferences::default();
        prefs.set_retention(6);
        assert_eq!(prefs.data_retention_months, 6);
        prefs.set_retention(7);
        assert_eq!(prefs.data_retention_months, 6);
    }

    #[test]
    fn profile_edits() {
        let mut prefs = Preferences::default();
        prefs.set_profile(ProfileField::Name, "Dr. Azmat".into());
        assert_eq!(prefs.profile(ProfileField::Name), "Dr. Azmat");
    }
}
