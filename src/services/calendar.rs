use chrono::{DateTime, Duration, Utc};

use crate::models::interview::Interview;

const UTC_STAMP: &str = "%Y%m%dT%H%M%SZ";

/// Exportable view of a scheduled interview, detached from store state.
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn for_interview(interview: &Interview, candidate_name: &str, job_title: &str) -> Self {
        let start = interview.scheduled_at;
        let end = start + Duration::minutes(interview.duration_minutes.max(1) as i64);
        Self {
            uid: format!("interview-{}@talent-match", interview.id),
            summary: format!("Interview: {} - {}", candidate_name, job_title),
            description: interview.notes.clone(),
            location: match interview.format {
                crate::models::interview::InterviewFormat::Video => "Video call".to_string(),
                crate::models::interview::InterviewFormat::Phone => "Phone".to_string(),
                crate::models::interview::InterviewFormat::InPerson => "On site".to_string(),
            },
            start,
            end,
        }
    }

    /// Literal VCALENDAR blob with `YYYYMMDDTHHMMSSZ` stamps, served as a
    /// downloadable .ics file.
    pub fn to_ics(&self) -> String {
        let lines = [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            "PRODID:-//talent-match//interview//EN".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", self.uid),
            format!("DTSTAMP:{}", Utc::now().format(UTC_STAMP)),
            format!("DTSTART:{}", self.start.format(UTC_STAMP)),
            format!("DTEND:{}", self.end.format(UTC_STAMP)),
            format!("SUMMARY:{}", escape_ics(&self.summary)),
            format!("DESCRIPTION:{}", escape_ics(&self.description)),
            format!("LOCATION:{}", escape_ics(&self.location)),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ];
        lines.join("\r\n")
    }

    pub fn google_calendar_url(&self) -> String {
        format!(
            "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
            urlencoding::encode(&self.summary),
            self.start.format(UTC_STAMP),
            self.end.format(UTC_STAMP),
            urlencoding::encode(&self.description),
            urlencoding::encode(&self.location),
        )
    }

    pub fn outlook_url(&self) -> String {
        format!(
            "https://outlook.live.com/calendar/0/deeplink/compose?subject={}&startdt={}&enddt={}&body={}&location={}",
            urlencoding::encode(&self.summary),
            urlencoding::encode(&self.start.to_rfc3339()),
            urlencoding::encode(&self.end.to_rfc3339()),
            urlencoding::encode(&self.description),
            urlencoding::encode(&self.location),
        )
    }
}

// RFC 5545 text escaping for the few characters that matter here.
fn escape_ics(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interview::{InterviewFormat, InterviewStatus};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn interview() -> Interview {
        Interview {
            id: 7,
            candidate_id: 20,
            job_id: 3,
            scheduled_at: Utc.with_ymd_and_hms(2026, 9, 14, 13, 30, 0).unwrap(),
            duration_minutes: 60,
            format: InterviewFormat::Video,
            participants: vec!["Maria Lindqvist".to_string()],
            notes: "Bring the challenge submission".to_string(),
            status: InterviewStatus::Confirmed,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn field<'a>(ics: &'a str, key: &str) -> &'a str {
        ics.lines()
            .find_map(|l| l.strip_prefix(key))
            .unwrap_or_else(|| panic!("missing {key} in {ics}"))
    }

    #[test]
    fn ics_start_and_end_are_sixty_minutes_apart() {
        let event = CalendarEvent::for_interview(&interview(), "Amina Diallo", "Backend Engineer");
        let ics = event.to_ics();

        assert_eq!(field(&ics, "DTSTART:"), "20260914T133000Z");
        assert_eq!(field(&ics, "DTEND:"), "20260914T143000Z");
    }

    #[test]
    fn ics_summary_names_candidate_and_position() {
        let event = CalendarEvent::for_interview(&interview(), "Amina Diallo", "Backend Engineer");
        let summary = field(&event.to_ics(), "SUMMARY:").to_string();

        assert!(summary.contains("Amina Diallo"));
        assert!(summary.contains("Backend Engineer"));
    }

    #[test]
    fn ics_blob_is_wrapped_in_vcalendar_markers() {
        let ics = CalendarEvent::for_interview(&interview(), "Amina Diallo", "Backend Engineer")
            .to_ics();
        assert!(ics.starts_with("BEGIN:VCALENDAR"));
        assert!(ics.ends_with("END:VCALENDAR"));
    }

    #[test]
    fn deep_links_carry_the_encoded_summary() {
        let event = CalendarEvent::for_interview(&interview(), "Amina Diallo", "Backend Engineer");

        let google = event.google_calendar_url();
        assert!(google.starts_with("https://calendar.google.com/calendar/render"));
        assert!(google.contains("dates=20260914T133000Z/20260914T143000Z"));
        assert!(google.contains("Amina%20Diallo"));

        let outlook = event.outlook_url();
        assert!(outlook.starts_with("https://outlook.live.com/calendar"));
        assert!(outlook.contains("Amina%20Diallo"));
    }
}
