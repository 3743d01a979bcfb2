//! Display labels for component statuses.
//!
//! The dashboard shows statuses in English or Thai. Labels are presentation
//! only; the lifecycle never looks at them.

use serde::{Deserialize, Serialize};

use crate::status::ComponentStatus;

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
}

/// Human-readable label for `status` in `locale`.
pub fn status_label(status: ComponentStatus, locale: Locale) -> &'static str {
    use ComponentStatus::*;
    match (locale, status) {
        (Locale::En, Planning) => "Planning",
        (Locale::En, Manufactured) => "Manufactured",
        (Locale::En, InTransit) => "In Transit",
        (Locale::En, Transported) => "Transported",
        (Locale::En, Accepted) => "Accepted",
        (Locale::En, Installed) => "Installed",
        (Locale::En, Rejected) => "Rejected",
        (Locale::Th, Planning) => "วางแผนผลิต",
        (Locale::Th, Manufactured) => "ผลิตแล้ว",
        (Locale::Th, InTransit) => "กำลังขนส่ง",
        (Locale::Th, Transported) => "ขนส่งสำเร็จ",
        (Locale::Th, Accepted) => "ตรวจรับแล้ว",
        (Locale::Th, Installed) => "ติดตั้งแล้ว",
        (Locale::Th, Rejected) => "ถูกปฏิเสธ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_label_in_every_locale() {
        for locale in [Locale::En, Locale::Th] {
            for status in ComponentStatus::ALL {
                assert!(!status_label(status, locale).is_empty());
            }
        }
    }

    #[test]
    fn english_labels_are_title_case() {
        assert_eq!(status_label(ComponentStatus::InTransit, Locale::En), "In Transit");
    }

    #[test]
    fn labels_parse_back_to_the_same_status() {
        for status in ComponentStatus::ALL {
            let label = status_label(status, Locale::En);
            assert_eq!(label.parse::<ComponentStatus>(), Ok(status));
        }
    }

    #[test]
    fn locale_defaults_to_english() {
        assert_eq!(Locale::default(), Locale::En);
        let parsed: Locale = serde_json::from_str("\"th\"").unwrap();
        assert_eq!(parsed, Locale::Th);
    }
}
