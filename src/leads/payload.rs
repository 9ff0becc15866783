//! Lead payload — the CRM webhook wire format.

use serde::Serialize;

use crate::wizard::registry::FieldId;
use crate::wizard::state::AnswerSet;

/// Source tag attached to every lead coming out of the qualification wizard.
pub const LEAD_SOURCE: &str = "website-qualification-form";

/// Qualification fields rendered into the `notes` string, in order. The
/// optional tail (company, project details) is skipped when empty.
const NOTE_FIELDS: [FieldId; 7] = [
    FieldId::BusinessType,
    FieldId::Revenue,
    FieldId::ProjectType,
    FieldId::Timeline,
    FieldId::Budget,
    FieldId::CompanyName,
    FieldId::ProjectDetails,
];

/// JSON body POSTed to the CRM webhook.
///
/// Built once per completed wizard session, sent once, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone_number: String,
    pub notes: String,
    pub source: &'static str,
}

impl LeadPayload {
    /// Build the payload from a completed answer set.
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let field = |id: FieldId| {
            answers
                .get(&id)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let email = {
            let value = field(FieldId::Email);
            if value.is_empty() { None } else { Some(value) }
        };

        let notes = NOTE_FIELDS
            .iter()
            .filter_map(|id| {
                let value = field(*id);
                if value.is_empty() && id.is_optional() {
                    return None;
                }
                Some(format!("{}: {}", id.label(), value))
            })
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            first_name: field(FieldId::FirstName),
            last_name: field(FieldId::LastName),
            email,
            phone_number: field(FieldId::Phone),
            notes,
            source: LEAD_SOURCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(FieldId, &str)]) -> AnswerSet {
        pairs.iter().map(|(f, v)| (*f, v.to_string())).collect()
    }

    fn qualified() -> AnswerSet {
        answers(&[
            (FieldId::BusinessType, "saas"),
            (FieldId::Revenue, "1m-5m"),
            (FieldId::ProjectType, "automation"),
            (FieldId::Timeline, "asap"),
            (FieldId::Budget, "10k-25k"),
            (FieldId::FirstName, "Jane"),
            (FieldId::LastName, "Doe"),
            (FieldId::Email, "jane@co.com"),
            (FieldId::Phone, "555-1234"),
        ])
    }

    #[test]
    fn notes_join_labeled_answer_lines() {
        let payload = LeadPayload::from_answers(&qualified());
        let lines: Vec<&str> = payload.notes.lines().collect();
        assert_eq!(
            lines,
            [
                "Business Type: saas",
                "Revenue: 1m-5m",
                "Project Type: automation",
                "Timeline: asap",
                "Budget: 10k-25k",
            ]
        );
    }

    #[test]
    fn optional_fields_appear_only_when_answered() {
        let mut set = qualified();
        set.insert(FieldId::CompanyName, "Acme Inc.".to_string());
        let payload = LeadPayload::from_answers(&set);
        assert!(payload.notes.ends_with("Company: Acme Inc."));
        assert!(!payload.notes.contains("Project Details"));
    }

    #[test]
    fn names_and_phone_are_trimmed() {
        let mut set = qualified();
        set.insert(FieldId::FirstName, "  Jane ".to_string());
        set.insert(FieldId::Phone, " 555-1234 ".to_string());
        let payload = LeadPayload::from_answers(&set);
        assert_eq!(payload.first_name, "Jane");
        assert_eq!(payload.phone_number, "555-1234");
    }

    #[test]
    fn empty_email_is_omitted_from_the_wire() {
        let mut set = qualified();
        set.insert(FieldId::Email, String::new());
        let payload = LeadPayload::from_answers(&set);
        assert_eq!(payload.email, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["source"], "website-qualification-form");
        assert_eq!(json["phone_number"], "555-1234");
        assert_eq!(json["first_name"], "Jane");
    }
}
