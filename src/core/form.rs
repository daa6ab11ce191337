//! The briefing record collected by the wizard and the step layout that
//! presents it.

use crate::core::constants::TOTAL_STEPS;
use crate::core::error::CoreError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    AgentName,
    Objective,
    Personality,
    KnowledgeBase,
    Restrictions,
    Users,
    CommonQuestions,
    ResponseFormat,
}

impl FormField {
    /// Every field in record order.
    pub const ALL: [FormField; 10] = [
        FormField::Name,
        FormField::Email,
        FormField::AgentName,
        FormField::Objective,
        FormField::Personality,
        FormField::KnowledgeBase,
        FormField::Restrictions,
        FormField::Users,
        FormField::CommonQuestions,
        FormField::ResponseFormat,
    ];

    /// Stable key used in `data-field` attributes.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::AgentName => "agent_name",
            FormField::Objective => "objective",
            FormField::Personality => "personality",
            FormField::KnowledgeBase => "knowledge_base",
            FormField::Restrictions => "restrictions",
            FormField::Users => "users",
            FormField::CommonQuestions => "common_questions",
            FormField::ResponseFormat => "response_format",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "Email",
            FormField::AgentName => "Agent name",
            FormField::Objective => "Objective",
            FormField::Personality => "Personality",
            FormField::KnowledgeBase => "Knowledge base",
            FormField::Restrictions => "Restrictions",
            FormField::Users => "Audience",
            FormField::CommonQuestions => "Common questions",
            FormField::ResponseFormat => "Response format",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub agent_name: String,
    pub objective: String,
    pub personality: String,
    pub knowledge_base: String,
    pub restrictions: String,
    pub users: String,
    pub common_questions: String,
    pub response_format: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::AgentName => &self.agent_name,
            FormField::Objective => &self.objective,
            FormField::Personality => &self.personality,
            FormField::KnowledgeBase => &self.knowledge_base,
            FormField::Restrictions => &self.restrictions,
            FormField::Users => &self.users,
            FormField::CommonQuestions => &self.common_questions,
            FormField::ResponseFormat => &self.response_format,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::AgentName => &mut self.agent_name,
            FormField::Objective => &mut self.objective,
            FormField::Personality => &mut self.personality,
            FormField::KnowledgeBase => &mut self.knowledge_base,
            FormField::Restrictions => &mut self.restrictions,
            FormField::Users => &mut self.users,
            FormField::CommonQuestions => &mut self.common_questions,
            FormField::ResponseFormat => &mut self.response_format,
        }
    }

    /// Replace one field; returns `false` when the value was already current.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = self.slot_mut(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// `(field, value)` pairs in record order, as shown on the review screen.
    pub fn entries(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().all(|(_, v)| v.is_empty())
    }
}

/// What a single wizard step shows.
#[derive(Clone, Copy, Debug)]
pub struct StepInfo {
    pub title: &'static str,
    pub prompt: &'static str,
    pub fields: &'static [FormField],
}

pub const STEPS: [StepInfo; TOTAL_STEPS] = [
    StepInfo {
        title: "About you",
        prompt: "Who should we contact about this agent?",
        fields: &[FormField::Name, FormField::Email],
    },
    StepInfo {
        title: "Agent name",
        prompt: "What should your agent be called?",
        fields: &[FormField::AgentName],
    },
    StepInfo {
        title: "Objective",
        prompt: "What is the main job this agent should do?",
        fields: &[FormField::Objective],
    },
    StepInfo {
        title: "Personality",
        prompt: "How should it sound: formal, friendly, playful?",
        fields: &[FormField::Personality],
    },
    StepInfo {
        title: "Knowledge base",
        prompt: "Which documents, sites or data should it rely on?",
        fields: &[FormField::KnowledgeBase],
    },
    StepInfo {
        title: "Restrictions",
        prompt: "What must it never say or do?",
        fields: &[FormField::Restrictions],
    },
    StepInfo {
        title: "Audience",
        prompt: "Who will be talking to it?",
        fields: &[FormField::Users],
    },
    StepInfo {
        title: "Common questions",
        prompt: "List the questions it will hear most often.",
        fields: &[FormField::CommonQuestions],
    },
    StepInfo {
        title: "Response format",
        prompt: "Short answers, bullet lists, step-by-step guides?",
        fields: &[FormField::ResponseFormat],
    },
];

#[inline]
pub fn step_info(step: usize) -> Option<&'static StepInfo> {
    STEPS.get(step)
}

/// The step on which `field` is edited.
pub fn step_for_field(field: FormField) -> usize {
    STEPS
        .iter()
        .position(|s| s.fields.contains(&field))
        .unwrap_or(0)
}
