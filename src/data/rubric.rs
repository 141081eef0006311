//! Section/area corpus for the interactive support rubric.
//!
//! Each area carries four leveled descriptions and four matching suggestion
//! sets; index `i` of both arrays refers to the same support tier. Sections
//! end in an empty notes row rendered as part of the grid.

#[cfg(test)]
#[path = "rubric_test.rs"]
mod rubric_test;

/// Support-tier labels used when an area does not override them.
pub static DEFAULT_LEVEL_LABELS: [&str; 4] = [
    "Independent",
    "Minimal > Moderate",
    "Moderate > Maximum",
    "Maximum Supports & Extensive Resources",
];

/// One assessed area within a rubric section.
#[derive(Clone, Copy, Debug)]
pub struct Area {
    pub title: &'static str,
    pub descriptions: &'static [&'static str],
    pub suggestions: &'static [&'static [&'static str]],
    /// Per-area label override; must match `descriptions.len()` to apply.
    pub level_labels: Option<&'static [&'static str]>,
}

impl Area {
    /// Number of labeled support tiers for this area.
    pub fn levels(&self) -> usize {
        self.descriptions.len()
    }

    /// Label for tier `index`, falling back to a numbered placeholder.
    pub fn label(&self, index: usize) -> String {
        let labels = match self.level_labels {
            Some(labels) if labels.len() == self.levels() => labels,
            _ => &DEFAULT_LEVEL_LABELS[..self.levels().min(DEFAULT_LEVEL_LABELS.len())],
        };
        labels
            .get(index)
            .map_or_else(|| format!("Level {}", index + 1), |l| (*l).to_owned())
    }
}

/// A row in a rubric section: an assessed area or the section's notes row.
#[derive(Clone, Copy, Debug)]
pub enum Row {
    Area(Area),
    Notes,
}

/// A titled group of rubric rows.
#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub title: &'static str,
    pub rows: &'static [Row],
}

impl Section {
    /// The assessed areas in this section, skipping notes rows.
    pub fn areas(&self) -> impl Iterator<Item = &'static Area> {
        self.rows.iter().filter_map(|row| match row {
            Row::Area(area) => Some(area),
            Row::Notes => None,
        })
    }
}

pub static SECTIONS: [Section; 3] = [
    Section {
        title: "Independent Functioning",
        rows: &[
            Row::Area(Area {
                title: "Transitions within the school day (i.e. bus, lunch, PE, recess, music, etc.)",
                descriptions: &[
                    "Able to move from one area of the campus to another independently or with minimal assistance (i.e., given explicit instruction and practice, alternate route, peer support, accommodation such as needing a special spot in line).",
                    "Able to move from one area of the campus to another with minimal to moderate assistance (i.e., staff proximity, social stories).",
                    "Able to move to and from some areas of the campus with moderate to maximum assistance (i.e., staff supervision, timers, visual supports).",
                    "Moving around campus is extremely limited – extensive resources and adult assistance is needed for various reasons. Students require handheld assistance to move around campus.",
                ],
                suggestions: &[
                    &["Peer buddy system", "Visual schedules", "Campus maps"],
                    &["Staff check-ins", "Social stories", "Practice walks"],
                    &["Timers", "Adult supervision", "Verbal cues"],
                    &["Handheld guidance", "Assistive devices", "Mobility training"],
                ],
                level_labels: None,
            }),
            Row::Area(Area {
                title: "Daily Routines",
                descriptions: &[
                    "Student can follow daily routines within the classroom independently or with minimal supports while being provided universally designed supports (i.e., clearly labeled cubbies, work boxes, whole classroom schedule, clearly defined zones, use of visual classroom timers, priority seating, proximity support, UDL seating, fidgets).",
                    "Student can follow daily routines within the classroom with minimal to moderate support while being provided universally designed classroom management (i.e., visual schedules/supports with adult prompting).",
                    "Students can follow some daily routines when provided moderate to maximum supports (i.e., personalized schedules, explicit instruction, support for changes in schedule, specific behavioral interventions and visual supports including greater detail and task analysis, verbal prompting during specific routines throughout the day).",
                    "Students have difficulty following most daily routines. Requires maximum support and extensive resources (i.e., ongoing explicit training and maximum adult guidance during daily routine).",
                ],
                suggestions: &[
                    &["Visual schedules", "Priority seating", "Fidgets", "Timers"],
                    &["Adult prompting", "Social stories", "Classroom visuals"],
                    &["Task analysis", "Behavioral interventions", "Frequent verbal prompts"],
                    &["1:1 support", "Continuous adult guidance", "Daily routine training"],
                ],
                level_labels: None,
            }),
            Row::Area(Area {
                title: "Follows Directions",
                descriptions: &[
                    "Student can follow directions independently or with minimal supports on a variety of tasks; responds appropriately most of the time when given a directive (i.e., verbal or visual directions).",
                    "Student can follow directions with minimal to moderate supports on a variety of tasks; responds appropriately most of the time when given a directive and periodic teacher cueing.",
                    "Student can follow directions with moderate to maximum supports on a variety of tasks; responds appropriately some of the time when given a directive and teacher prompting (i.e., task checklist, increased adult cueing).",
                    "Student requires ongoing maximum assistance and extensive resources to follow all directions (i.e., ongoing explicit training and maximum adult guidance to follow directions).",
                ],
                suggestions: &[
                    &["Visual directions", "Verbal prompts", "First/Then boards"],
                    &["Periodic teacher cueing", "Checklists", "Visual reminders"],
                    &["Task checklists", "Frequent adult cueing", "Simple step breakdowns"],
                    &["1:1 support", "Direct instruction", "Frequent repetition"],
                ],
                level_labels: None,
            }),
            Row::Notes,
        ],
    },
    Section {
        title: "Communication",
        rows: &[
            Row::Area(Area {
                title: "Expressive Communication",
                descriptions: &[
                    "Student can use an identified communication method independently or with minimal support.",
                    "Student can use an identified communication method with minimal to moderate support for most of the school day.",
                    "Student can use an identified communication method with moderate to maximum support in some or most situations.",
                    "Team is working to identify the most effective mode; communication requires continuous support and ongoing trials.",
                ],
                suggestions: &[
                    &["Peer modeling", "Opportunities for choice-making", "Natural conversation practice"],
                    &["Sentence starters", "Visual prompts", "Prompt fading plan"],
                    &["Modeled language (Aided/Verbal)", "Communication scripts", "Frequent partner support"],
                    &["Communication inventory/assessment", "Partner-assisted techniques", "High-frequency aided modeling"],
                ],
                level_labels: None,
            }),
            Row::Area(Area {
                title: "Receptive Communication",
                descriptions: &[
                    "Given a task with choices, student can make a selection independently or with minimal support across tasks and follow routine directions.",
                    "Given a task with choices, student can make a selection with minimal to moderate prompts; follows routine directions with minimal to moderate prompting.",
                    "Given a task with choices, student can make a selection with moderate prompts and follows some routine directions with moderate to maximum prompting.",
                    "Given a task with choices, student needs continuous scaffolds to make selections; follows routine directions with maximum prompts from staff; receptive language is limited in number of contexts.",
                ],
                suggestions: &[
                    &["Clear, concise directions", "Check for understanding", "Visual choice boards"],
                    &["First/Then visuals", "Gesture + verbal prompts", "Visual schedules"],
                    &["Task analysis steps", "Errorless teaching trials", "Increased wait time"],
                    &["Partner-assisted response formats", "Highly simplified choices", "Repetition with multi-modal cues"],
                ],
                level_labels: None,
            }),
            Row::Area(Area {
                title: "Social Communication / Pragmatics",
                descriptions: &[
                    "Initiates and uses functional/effective social interactions with staff/peers independently or with minimal support during the majority of the school day.",
                    "Initiates and uses functional/effective social interactions with staff/peers with minimal to moderate support in most situations.",
                    "Initiates or responds to social interactions with staff/peers in known situations with moderate to maximum prompting and use of scripting.",
                    "Does not initiate or respond to social interactions without staff/peer facilitation; interactions require maximum prompting and scripted supports.",
                ],
                suggestions: &[
                    &["Peer buddy/mentors", "Structured social opportunities", "Role play"],
                    &["Sentence stems", "Prompt fading in greetings", "Turn-taking visuals"],
                    &["Social scripts", "Video modeling", "Priming before activities"],
                    &["Partner-assisted interaction routines", "Highly structured practice sets", "Frequent adult mediation"],
                ],
                level_labels: None,
            }),
            Row::Area(Area {
                title: "Augmentative & Alternative Communication (AAC)",
                descriptions: &[
                    "Student is able to use AAC device/tools independently or with minimal support.",
                    "Student is able to use AAC device/tools with minimal to moderate support.",
                    "Student is able to use AAC device/tools with moderate to maximum support (e.g., frequent modeling, aided language input, picture supports).",
                    "Student requires maximum to continuous assistance and partner-aided modeling to use AAC effectively across the majority of the day.",
                ],
                suggestions: &[
                    &["Daily AAC opportunities across settings", "Core/fringe vocabulary growth", "Peer modeling with AAC"],
                    &["Aided language stimulation", "Key-word signs/gestures", "Consistent symbol locations"],
                    &["Partner-prompted trials", "Personalized topic boards", "Environment-specific pages"],
                    &["Partner-assisted scanning", "Yes/No systems", "Intensive modeling with short work/break cycles"],
                ],
                level_labels: None,
            }),
            Row::Notes,
        ],
    },
    Section {
        title: "Behavior",
        rows: &[
            Row::Area(Area {
                title: "Response to Redirection / Adult Support",
                descriptions: &[
                    "Student responds to redirection independently or with minimal support (verbal prompt, visual cue) and minimal staff proximity.",
                    "Student responds to redirection with minimal to moderate support (verbal prompt, visual cue, staff proximity, choices, reminders).",
                    "Student responds to redirection with moderate to maximum support (physical prompt, repeated reminders, staff proximity, incentive).",
                    "Student requires maximum to continuous support and extensive resources (physical prompts, staff proximity at all times, individualized plan, crisis intervention team).",
                ],
                suggestions: &[
                    &["Verbal reminders", "Visual cues", "Staff check-ins"],
                    &["Choice boards", "Timely breaks", "Routine reminders"],
                    &["Physical prompts", "Incentive systems", "Frequent supervision"],
                    &["Crisis plan", "Individualized supports", "Continuous staff proximity"],
                ],
                level_labels: None,
            }),
            Row::Area(Area {
                title: "Self-Regulation / Coping Strategies",
                descriptions: &[
                    "Student uses self-regulation/coping strategies independently or with minimal supports.",
                    "Student uses self-regulation/coping strategies with minimal to moderate supports.",
                    "Student uses self-regulation/coping strategies with moderate to maximum supports.",
                    "Student requires maximum to continuous supports and extensive resources to use self-regulation/coping strategies.",
                ],
                suggestions: &[
                    &["Scheduled sensory breaks", "Calm down corner", "Breathing exercises"],
                    &["Fidget tools", "Visual reminders", "Partial prompts"],
                    &["Direct modeling", "Physical support", "Staff-guided coping"],
                    &["Crisis plan", "Individual behavior plan", "Continuous adult support"],
                ],
                level_labels: None,
            }),
            Row::Area(Area {
                title: "Engagement in Instructional Activities",
                descriptions: &[
                    "Student engages in instructional activities independently or with minimal supports.",
                    "Student engages in instructional activities with minimal to moderate supports.",
                    "Student engages in instructional activities with moderate to maximum supports.",
                    "Student requires maximum to continuous supports and extensive resources to engage in instructional activities.",
                ],
                suggestions: &[
                    &["Peer models", "Routine reminders", "Visual schedules"],
                    &["Frequent breaks", "Staff proximity", "Choice boards"],
                    &["Direct prompts", "Incentive systems", "Physical support"],
                    &["Individualized plan", "Continuous adult support", "Alternative activities"],
                ],
                level_labels: None,
            }),
            Row::Area(Area {
                title: "Physical Safety / Aggression",
                descriptions: &[
                    "Student maintains physical safety independently or with minimal supports.",
                    "Student maintains physical safety with minimal to moderate supports.",
                    "Student maintains physical safety with moderate to maximum supports.",
                    "Student requires maximum to continuous supports and extensive resources to maintain physical safety.",
                ],
                suggestions: &[
                    &["Safety reminders", "Staff check-ins", "Calm down strategies"],
                    &["Staff proximity", "Visual reminders", "Partial prompts"],
                    &["Direct intervention", "Physical support", "Incentive systems"],
                    &["Crisis intervention", "Individual behavior plan", "Continuous adult supervision"],
                ],
                level_labels: None,
            }),
            Row::Notes,
        ],
    },
];
