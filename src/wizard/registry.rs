//! Step registry — the fixed qualification step sequence and its option sets.

use serde::{Deserialize, Serialize};

/// A single answer field collected by the wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    BusinessType,
    Revenue,
    ProjectType,
    Timeline,
    Budget,
    FirstName,
    LastName,
    Email,
    Phone,
    CompanyName,
    ProjectDetails,
}

impl FieldId {
    /// Human-readable label, used in prompts and lead notes.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BusinessType => "Business Type",
            Self::Revenue => "Revenue",
            Self::ProjectType => "Project Type",
            Self::Timeline => "Timeline",
            Self::Budget => "Budget",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::CompanyName => "Company",
            Self::ProjectDetails => "Project Details",
        }
    }

    /// Fields that never block `advance()`.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::CompanyName | Self::ProjectDetails)
    }

    /// Whether this field is the single choice of a selection step
    /// (as opposed to a free-text contact field).
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Self::BusinessType | Self::Revenue | Self::ProjectType | Self::Timeline | Self::Budget
        )
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BusinessType => "business_type",
            Self::Revenue => "revenue",
            Self::ProjectType => "project_type",
            Self::Timeline => "timeline",
            Self::Budget => "budget",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CompanyName => "company_name",
            Self::ProjectDetails => "project_details",
        };
        write!(f, "{s}")
    }
}

/// One screen of the wizard.
///
/// The sequence is fixed and linear: BusinessType → Revenue → ProjectType →
/// Timeline → Budget → Contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    BusinessType,
    Revenue,
    ProjectType,
    Timeline,
    Budget,
    Contact,
}

/// Number of steps in the wizard.
pub const STEP_COUNT: usize = 6;

impl StepId {
    /// Zero-based position in the fixed sequence.
    pub fn index(&self) -> usize {
        match self {
            Self::BusinessType => 0,
            Self::Revenue => 1,
            Self::ProjectType => 2,
            Self::Timeline => 3,
            Self::Budget => 4,
            Self::Contact => 5,
        }
    }

    /// The next step in the linear progression, if any.
    pub fn next(&self) -> Option<StepId> {
        match self {
            Self::BusinessType => Some(Self::Revenue),
            Self::Revenue => Some(Self::ProjectType),
            Self::ProjectType => Some(Self::Timeline),
            Self::Timeline => Some(Self::Budget),
            Self::Budget => Some(Self::Contact),
            Self::Contact => None,
        }
    }

    /// Whether this is the final step before completion.
    pub fn is_last(&self) -> bool {
        matches!(self, Self::Contact)
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BusinessType => "business_type",
            Self::Revenue => "revenue",
            Self::ProjectType => "project_type",
            Self::Timeline => "timeline",
            Self::Budget => "budget",
            Self::Contact => "contact",
        };
        write!(f, "{s}")
    }
}

/// Static definition of one wizard step.
#[derive(Debug, Clone, Copy)]
pub struct StepDefinition {
    pub id: StepId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FieldId],
}

/// A selectable option on a choice step.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

static STEPS: [StepDefinition; STEP_COUNT] = [
    StepDefinition {
        id: StepId::BusinessType,
        title: "What best describes your business?",
        subtitle: "Help us understand who we're working with",
        fields: &[FieldId::BusinessType],
    },
    StepDefinition {
        id: StepId::Revenue,
        title: "What's your current annual revenue?",
        subtitle: "This helps us recommend the right solutions",
        fields: &[FieldId::Revenue],
    },
    StepDefinition {
        id: StepId::ProjectType,
        title: "What do you need help with?",
        subtitle: "Select the area that fits your needs best",
        fields: &[FieldId::ProjectType],
    },
    StepDefinition {
        id: StepId::Timeline,
        title: "When do you need this completed?",
        subtitle: "Helps us prioritize and plan accordingly",
        fields: &[FieldId::Timeline],
    },
    StepDefinition {
        id: StepId::Budget,
        title: "What's your budget for this project?",
        subtitle: "Be honest - this helps us serve you better",
        fields: &[FieldId::Budget],
    },
    StepDefinition {
        id: StepId::Contact,
        title: "Almost there! Let's get your details",
        subtitle: "So we can prepare for our conversation",
        fields: &[
            FieldId::FirstName,
            FieldId::LastName,
            FieldId::Email,
            FieldId::Phone,
            FieldId::CompanyName,
            FieldId::ProjectDetails,
        ],
    },
];

static BUSINESS_TYPES: [ChoiceOption; 6] = [
    ChoiceOption { value: "agency", label: "Agency / Consultancy", description: None },
    ChoiceOption { value: "saas", label: "SaaS / Tech Company", description: None },
    ChoiceOption { value: "ecommerce", label: "E-commerce / Retail", description: None },
    ChoiceOption { value: "real-estate", label: "Real Estate", description: None },
    ChoiceOption { value: "services", label: "Professional Services", description: None },
    ChoiceOption { value: "other", label: "Other", description: None },
];

static REVENUE_OPTIONS: [ChoiceOption; 6] = [
    ChoiceOption { value: "pre-revenue", label: "Pre-revenue / Just starting", description: None },
    ChoiceOption { value: "0-100k", label: "$0 - $100K", description: None },
    ChoiceOption { value: "100k-500k", label: "$100K - $500K", description: None },
    ChoiceOption { value: "500k-1m", label: "$500K - $1M", description: None },
    ChoiceOption { value: "1m-5m", label: "$1M - $5M", description: None },
    ChoiceOption { value: "5m+", label: "$5M+", description: None },
];

static PROJECT_TYPES: [ChoiceOption; 6] = [
    ChoiceOption {
        value: "automation",
        label: "Workflow Automation",
        description: Some("Eliminate manual tasks & busywork"),
    },
    ChoiceOption {
        value: "ai-agents",
        label: "AI Agents / Chatbots",
        description: Some("Intelligent assistants for your business"),
    },
    ChoiceOption {
        value: "integrations",
        label: "System Integrations",
        description: Some("Connect your tools & platforms"),
    },
    ChoiceOption {
        value: "full-stack",
        label: "Full-Stack Development",
        description: Some("Custom apps & platforms"),
    },
    ChoiceOption {
        value: "lead-systems",
        label: "Lead Generation Systems",
        description: Some("Capture, qualify & nurture leads"),
    },
    ChoiceOption {
        value: "consulting",
        label: "Strategy / Consulting",
        description: Some("Not sure yet, need guidance"),
    },
];

static TIMELINE_OPTIONS: [ChoiceOption; 5] = [
    ChoiceOption {
        value: "asap",
        label: "ASAP - Urgent",
        description: Some("Need it yesterday"),
    },
    ChoiceOption {
        value: "1-2-weeks",
        label: "1-2 Weeks",
        description: Some("Quick turnaround"),
    },
    ChoiceOption {
        value: "1-month",
        label: "Within a Month",
        description: Some("Standard timeline"),
    },
    ChoiceOption {
        value: "1-3-months",
        label: "1-3 Months",
        description: Some("Flexible timeline"),
    },
    ChoiceOption {
        value: "exploring",
        label: "Just Exploring",
        description: Some("No rush, gathering info"),
    },
];

static BUDGET_OPTIONS: [ChoiceOption; 6] = [
    ChoiceOption {
        value: "under-1k",
        label: "Under $1,000",
        description: Some("Small project"),
    },
    ChoiceOption {
        value: "1k-5k",
        label: "$1,000 - $5,000",
        description: Some("Starter automation"),
    },
    ChoiceOption {
        value: "5k-10k",
        label: "$5,000 - $10,000",
        description: Some("Full automation system"),
    },
    ChoiceOption {
        value: "10k-25k",
        label: "$10,000 - $25,000",
        description: Some("Enterprise solution"),
    },
    ChoiceOption {
        value: "25k+",
        label: "$25,000+",
        description: Some("Large-scale project"),
    },
    ChoiceOption {
        value: "not-sure",
        label: "Not sure yet",
        description: Some("Need guidance"),
    },
];

/// The fixed wizard step sequence.
pub fn steps() -> &'static [StepDefinition; STEP_COUNT] {
    &STEPS
}

/// Look up a step definition by id.
pub fn step(id: StepId) -> &'static StepDefinition {
    &STEPS[id.index()]
}

/// The enumerated option set of a selection step. `None` for the contact step.
pub fn options_for(step: StepId) -> Option<&'static [ChoiceOption]> {
    match step {
        StepId::BusinessType => Some(&BUSINESS_TYPES),
        StepId::Revenue => Some(&REVENUE_OPTIONS),
        StepId::ProjectType => Some(&PROJECT_TYPES),
        StepId::Timeline => Some(&TIMELINE_OPTIONS),
        StepId::Budget => Some(&BUDGET_OPTIONS),
        StepId::Contact => None,
    }
}

/// The single field a selection step records. `None` for the contact step.
pub fn selection_field(step: StepId) -> Option<FieldId> {
    match step {
        StepId::BusinessType => Some(FieldId::BusinessType),
        StepId::Revenue => Some(FieldId::Revenue),
        StepId::ProjectType => Some(FieldId::ProjectType),
        StepId::Timeline => Some(FieldId::Timeline),
        StepId::Budget => Some(FieldId::Budget),
        StepId::Contact => None,
    }
}
