//! Declarative prompt templates.
//!
//! Every task kind maps to one `PromptTemplate`: a header sentence, an ordered
//! list of sections to render from the request's entities, and a closing
//! instruction block. The renderer walks the section list; it holds no
//! task-specific logic of its own.

use serde::Serialize;

use crate::generation::prompts;

/// Every AI task the service can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    ResumeContentForJob,
    ResumeImprovementSuggestions,
    ResumeOptimizations,
    ResumeKeywordExtraction,
    ResumeComprehensiveFeedback,
    PortfolioContentGeneration,
    PortfolioImprovementSuggestions,
    PortfolioDescription,
    PortfolioKeywordExtraction,
    CoverLetter,
    /// Questions from the job alone; every non-empty output line is a question.
    InterviewQuestions,
    /// Questions with optional resume context; only `Q:` / `Question:` lines count.
    InterviewQuestionsWithResume,
    InterviewAnswer,
    InterviewAnswerFromText,
    JobApplicationTips,
}

impl TaskKind {
    pub const ALL: [TaskKind; 15] = [
        TaskKind::ResumeContentForJob,
        TaskKind::ResumeImprovementSuggestions,
        TaskKind::ResumeOptimizations,
        TaskKind::ResumeKeywordExtraction,
        TaskKind::ResumeComprehensiveFeedback,
        TaskKind::PortfolioContentGeneration,
        TaskKind::PortfolioImprovementSuggestions,
        TaskKind::PortfolioDescription,
        TaskKind::PortfolioKeywordExtraction,
        TaskKind::CoverLetter,
        TaskKind::InterviewQuestions,
        TaskKind::InterviewQuestionsWithResume,
        TaskKind::InterviewAnswer,
        TaskKind::InterviewAnswerFromText,
        TaskKind::JobApplicationTips,
    ];

    pub fn template(self) -> &'static PromptTemplate {
        match self {
            TaskKind::ResumeContentForJob => &prompts::RESUME_CONTENT_FOR_JOB,
            TaskKind::ResumeImprovementSuggestions => &prompts::RESUME_IMPROVEMENT_SUGGESTIONS,
            TaskKind::ResumeOptimizations => &prompts::RESUME_OPTIMIZATIONS,
            TaskKind::ResumeKeywordExtraction => &prompts::RESUME_KEYWORD_EXTRACTION,
            TaskKind::ResumeComprehensiveFeedback => &prompts::RESUME_COMPREHENSIVE_FEEDBACK,
            TaskKind::PortfolioContentGeneration => &prompts::PORTFOLIO_CONTENT_GENERATION,
            TaskKind::PortfolioImprovementSuggestions => {
                &prompts::PORTFOLIO_IMPROVEMENT_SUGGESTIONS
            }
            TaskKind::PortfolioDescription => &prompts::PORTFOLIO_DESCRIPTION,
            TaskKind::PortfolioKeywordExtraction => &prompts::PORTFOLIO_KEYWORD_EXTRACTION,
            TaskKind::CoverLetter => &prompts::COVER_LETTER,
            TaskKind::InterviewQuestions => &prompts::INTERVIEW_QUESTIONS,
            TaskKind::InterviewQuestionsWithResume => &prompts::INTERVIEW_QUESTIONS_WITH_RESUME,
            TaskKind::InterviewAnswer => &prompts::INTERVIEW_ANSWER,
            TaskKind::InterviewAnswerFromText => &prompts::INTERVIEW_ANSWER_FROM_TEXT,
            TaskKind::JobApplicationTips => &prompts::JOB_APPLICATION_TIPS,
        }
    }

    /// How the raw completion text for this task is shaped before returning.
    pub fn response_mode(self) -> ResponseMode {
        match self {
            TaskKind::InterviewQuestions => ResponseMode::Questions(QuestionPolicy::Unlabeled),
            TaskKind::InterviewQuestionsWithResume => {
                ResponseMode::Questions(QuestionPolicy::Labeled)
            }
            _ => ResponseMode::Passthrough,
        }
    }
}

/// Response shaping applied by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Raw text returned verbatim.
    Passthrough,
    /// Raw text split into interview question records.
    Questions(QuestionPolicy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPolicy {
    /// Every non-empty trimmed line is a question.
    Unlabeled,
    /// Only lines prefixed `Q:` or `Question:` are questions; the prefix is stripped.
    Labeled,
}

/// A complete prompt recipe for one task kind.
#[derive(Debug)]
pub struct PromptTemplate {
    pub header: &'static str,
    pub sections: &'static [Section],
    pub closing: Closing,
}

/// Closing instruction block: a lead sentence, numbered requirements, and an
/// optional trailing sentence.
#[derive(Debug)]
pub struct Closing {
    pub lead: &'static str,
    pub items: &'static [&'static str],
    pub trailer: Option<&'static str>,
}

/// One renderable piece of a prompt body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// A blank line followed by `Label:`.
    Heading(&'static str),
    /// `Label: value` on its own line.
    Field(Field),
    /// A blank line followed by `Label: value`.
    SpacedField(Field),
    /// The raw job description text, on its own line.
    JobDescriptionText,
    /// Resume `Name`, `Title`, `Summary` lines.
    ResumeIdentity,
    WorkExperience(ExperienceStyle),
    Education,
    Skills(SkillStyle),
    /// Portfolio `Name`, `Title`, `Description` lines.
    PortfolioIdentity,
    PortfolioProjects,
    /// Short resume digest used for interview question generation. Omitted
    /// entirely when no resume accompanies the request.
    CandidateSnapshot,
    /// Flat resume text block. Omitted when the text is empty.
    ResumeText,
}

/// Scalar values a `Field` section can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    JobTitle,
    Company,
    JobDescription,
    Status,
    Question,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::JobTitle => "Job Title",
            Field::Company => "Company",
            Field::JobDescription => "Job Description",
            Field::Status => "Current Status",
            Field::Question => "Question",
        }
    }
}

/// How much of each work experience entry is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceStyle {
    /// Responsibilities and achievements under `Responsibilities:` / `Achievements:` labels.
    Labeled,
    /// Responsibilities then achievements as plain sub-bullets.
    Bulleted,
    /// Responsibilities only, as plain sub-bullets.
    ResponsibilitiesOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillStyle {
    /// `- Name (Level)`
    WithLevel,
    /// `- Name`
    NameOnly,
}
