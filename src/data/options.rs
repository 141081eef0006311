//! Option catalogs and prompts for the Additional Information questionnaires.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

/// Option id that opens the free-text "describe" escape hatch.
pub const OTHER_OPTION_ID: &str = "other";

/// A single selectable item in a questionnaire checklist.
#[derive(Clone, Copy, Debug)]
pub struct OptionItem {
    /// Unique within its list.
    pub id: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

/// The three summary messages a questionnaire can fall back to.
#[derive(Clone, Copy, Debug)]
pub struct SummaryPrompts {
    /// Shown while the Yes/No gate is not "yes".
    pub none: &'static str,
    /// Shown when gate is "yes" but nothing has been entered yet.
    pub choose: &'static str,
    /// Shown when the built label list comes out empty.
    pub empty: &'static str,
}

/// Full configuration for one questionnaire category.
#[derive(Clone, Copy, Debug)]
pub struct QuestionnaireConfig {
    /// Radio-group name, unique per category.
    pub name: &'static str,
    pub legend: &'static str,
    pub description: &'static str,
    pub aria_label: &'static str,
    pub options: &'static [OptionItem],
    pub prompts: SummaryPrompts,
    pub other_placeholder: &'static str,
}

pub static ARRANGEMENT: QuestionnaireConfig = QuestionnaireConfig {
    name: "needs-arrangement",
    legend: "Does the student require any specialized equipment or arrangement?",
    description: "Consider accessibility, mobility, and any classroom layout changes that \
                  help the student access instruction and materials.",
    aria_label: "Specialized equipment or arrangement",
    options: &[
        OptionItem {
            id: "pref-seating",
            label: "Preferential seating / teacher proximity",
            description: Some(
                "Student benefits from a specific location in the classroom (e.g., near \
                 instruction, reduced distractions).",
            ),
        },
        OptionItem {
            id: "ada-access",
            label: "ADA accommodations (wheelchair access, table heights, etc.)",
            description: Some(
                "Physical arrangement changes are required to ensure accessibility to \
                 materials, desks, or pathways.",
            ),
        },
        OptionItem {
            id: "alt-seating",
            label: "Alternative seating or standing options",
            description: Some(
                "Student uses equipment such as wobble stools, standing desks, cushions, \
                 or other flexible seating.",
            ),
        },
        OptionItem {
            id: "additional-support",
            label: "Additional adult support or supervision",
            description: Some(
                "Student requires scheduled staff proximity or support to access \
                 instruction and materials.",
            ),
        },
        OptionItem {
            id: "aac-space",
            label: "Dedicated AAC device or communication area",
            description: Some(
                "Student needs a defined space for augmentative and alternative \
                 communication tools or devices.",
            ),
        },
    ],
    prompts: SummaryPrompts {
        none: "No specialized classroom arrangement is required at this time.",
        choose: "Select all equipment or arrangements that apply.",
        empty: "No specific equipment has been selected.",
    },
    other_placeholder: "Describe the specialized equipment or arrangement",
};

pub static TOILETING: QuestionnaireConfig = QuestionnaireConfig {
    name: "needs-toileting",
    legend: "Toileting & Hygiene Supports",
    description: "Note routines, adult assistance, or accessibility needs that ensure the \
                  student can manage restroom breaks with dignity.",
    aria_label: "Toileting and hygiene supports",
    options: &[
        OptionItem {
            id: "scheduled-breaks",
            label: "Scheduled bathroom breaks",
            description: Some(
                "Student benefits from reminders or a consistent toileting routine during \
                 the school day.",
            ),
        },
        OptionItem {
            id: "visual-supports",
            label: "Visual supports or social stories",
            description: Some(
                "Visual cues, timers, or step-by-step guides are used to promote \
                 independence in hygiene tasks.",
            ),
        },
        OptionItem {
            id: "adaptive-equipment",
            label: "Adaptive equipment and accessibility",
            description: Some(
                "Grab bars, step stools, or alternate facilities are needed to access \
                 restrooms safely.",
            ),
        },
        OptionItem {
            id: "adult-assistance",
            label: "Adult assistance for toileting",
            description: Some(
                "Staff support is required for transfers, clothing management, or hygiene \
                 routines.",
            ),
        },
        OptionItem {
            id: OTHER_OPTION_ID,
            label: "Other (describe)",
            description: None,
        },
    ],
    prompts: SummaryPrompts {
        none: "No toileting or hygiene supports are required at this time.",
        choose: "Select all toileting supports that apply.",
        empty: "No specific toileting supports have been selected.",
    },
    other_placeholder: "Describe the toileting or hygiene support",
};

pub static DAILY_LIVING: QuestionnaireConfig = QuestionnaireConfig {
    name: "needs-daily-living",
    legend: "Daily Living / Self-Help Supports",
    description: "Highlight supports that foster independence with feeding, dressing, and \
                  organization throughout the day.",
    aria_label: "Daily living supports",
    options: &[
        OptionItem {
            id: "feeding-support",
            label: "Feeding support or adaptive utensils",
            description: Some(
                "Student requires specific positioning, utensils, or prompting during \
                 meals or snack time.",
            ),
        },
        OptionItem {
            id: "dressing-support",
            label: "Support for dressing / outerwear",
            description: Some(
                "Assistance is needed with coats, shoes, winter gear, or specialty \
                 clothing fasteners.",
            ),
        },
        OptionItem {
            id: "organization-support",
            label: "Organization of materials",
            description: Some(
                "Student benefits from structured systems for personal items, locker, or \
                 cubby materials.",
            ),
        },
        OptionItem {
            id: "transition-support",
            label: "Arrival / dismissal transitions",
            description: Some(
                "Adult support or visual schedules are required for transportation and \
                 end-of-day routines.",
            ),
        },
        OptionItem {
            id: OTHER_OPTION_ID,
            label: "Other (describe)",
            description: None,
        },
    ],
    prompts: SummaryPrompts {
        none: "No daily living supports are needed within the classroom.",
        choose: "Select all daily living supports that apply.",
        empty: "No specific daily living supports have been selected.",
    },
    other_placeholder: "Describe the daily living support",
};

pub static COMMUNICATION: QuestionnaireConfig = QuestionnaireConfig {
    name: "needs-communication",
    legend: "Communication Devices & Supports",
    description: "Capture how expressive and receptive communication is supported across \
                  the day and any equipment that must travel with the student.",
    aria_label: "Communication devices and supports",
    options: &[
        OptionItem {
            id: "aac-device",
            label: "Dedicated AAC device",
            description: Some(
                "Student uses a speech-generating device or tablet that must be accessible \
                 across settings.",
            ),
        },
        OptionItem {
            id: "picture-exchange",
            label: "Picture exchange / communication board",
            description: Some(
                "Visual symbols or boards accompany instruction, transitions, and social \
                 interactions.",
            ),
        },
        OptionItem {
            id: "sign-support",
            label: "Sign language or gestures",
            description: Some(
                "Staff and peers incorporate sign language, gestures, or cues to support \
                 communication.",
            ),
        },
        OptionItem {
            id: "prompting-support",
            label: "Prompting for communication",
            description: Some(
                "Student benefits from verbal, visual, or tactile prompts to initiate or \
                 respond.",
            ),
        },
        OptionItem {
            id: OTHER_OPTION_ID,
            label: "Other (describe)",
            description: None,
        },
    ],
    prompts: SummaryPrompts {
        none: "No specialized communication devices or supports are required at this time.",
        choose: "Select all communication supports that apply.",
        empty: "No specific communication supports have been selected.",
    },
    other_placeholder: "Describe the communication device or support",
};
