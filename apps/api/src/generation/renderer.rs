//! Prompt Builder: renders a task request into a single prompt string.
//!
//! Rendering is a read-only projection of the request's entities: inputs are
//! borrowed immutably and the output depends only on them. Absent
//! sub-objects render as empty values and empty collections render their
//! heading with no items. Free text is inserted verbatim.

use chrono::NaiveDate;

use crate::generation::template::{Closing, ExperienceStyle, Field, Section, SkillStyle, TaskKind};
use crate::models::job_application::{ApplicationStatus, JobApplication};
use crate::models::portfolio::Portfolio;
use crate::models::resume::Resume;

/// Label used for an end date that is not set.
pub const PRESENT: &str = "Present";

/// Number of work experiences, taken in list order, included in a candidate snapshot.
const SNAPSHOT_EXPERIENCE_LIMIT: usize = 2;

/// A task plus the entities it reads. One variant per `TaskKind`.
#[derive(Debug, Clone, Copy)]
pub enum TaskRequest<'a> {
    ResumeContentForJob {
        job_description: &'a str,
        resume: &'a Resume,
    },
    ResumeImprovementSuggestions {
        resume: &'a Resume,
    },
    ResumeOptimizations {
        resume: &'a Resume,
    },
    ResumeKeywordExtraction {
        resume: &'a Resume,
    },
    ResumeComprehensiveFeedback {
        resume: &'a Resume,
    },
    PortfolioContentGeneration {
        portfolio: &'a Portfolio,
    },
    PortfolioImprovementSuggestions {
        portfolio: &'a Portfolio,
    },
    PortfolioDescription {
        portfolio: &'a Portfolio,
    },
    PortfolioKeywordExtraction {
        portfolio: &'a Portfolio,
    },
    CoverLetter {
        job_application: &'a JobApplication,
        resume: &'a Resume,
    },
    InterviewQuestions {
        job_application: &'a JobApplication,
    },
    InterviewQuestionsWithResume {
        job_application: &'a JobApplication,
        resume: Option<&'a Resume>,
    },
    InterviewAnswer {
        question: &'a str,
        job_application: &'a JobApplication,
        resume: &'a Resume,
    },
    InterviewAnswerFromText {
        question: &'a str,
        job_title: &'a str,
        resume_text: Option<&'a str>,
    },
    JobApplicationTips {
        job_application: &'a JobApplication,
    },
}

impl<'a> TaskRequest<'a> {
    pub fn kind(&self) -> TaskKind {
        match self {
            TaskRequest::ResumeContentForJob { .. } => TaskKind::ResumeContentForJob,
            TaskRequest::ResumeImprovementSuggestions { .. } => {
                TaskKind::ResumeImprovementSuggestions
            }
            TaskRequest::ResumeOptimizations { .. } => TaskKind::ResumeOptimizations,
            TaskRequest::ResumeKeywordExtraction { .. } => TaskKind::ResumeKeywordExtraction,
            TaskRequest::ResumeComprehensiveFeedback { .. } => {
                TaskKind::ResumeComprehensiveFeedback
            }
            TaskRequest::PortfolioContentGeneration { .. } => TaskKind::PortfolioContentGeneration,
            TaskRequest::PortfolioImprovementSuggestions { .. } => {
                TaskKind::PortfolioImprovementSuggestions
            }
            TaskRequest::PortfolioDescription { .. } => TaskKind::PortfolioDescription,
            TaskRequest::PortfolioKeywordExtraction { .. } => TaskKind::PortfolioKeywordExtraction,
            TaskRequest::CoverLetter { .. } => TaskKind::CoverLetter,
            TaskRequest::InterviewQuestions { .. } => TaskKind::InterviewQuestions,
            TaskRequest::InterviewQuestionsWithResume { .. } => {
                TaskKind::InterviewQuestionsWithResume
            }
            TaskRequest::InterviewAnswer { .. } => TaskKind::InterviewAnswer,
            TaskRequest::InterviewAnswerFromText { .. } => TaskKind::InterviewAnswerFromText,
            TaskRequest::JobApplicationTips { .. } => TaskKind::JobApplicationTips,
        }
    }

    fn context(&self) -> PromptContext<'a> {
        let mut ctx = PromptContext::default();
        match *self {
            TaskRequest::ResumeContentForJob {
                job_description,
                resume,
            } => {
                ctx.job_description = Some(job_description);
                ctx.resume = Some(resume);
            }
            TaskRequest::ResumeImprovementSuggestions { resume }
            | TaskRequest::ResumeOptimizations { resume }
            | TaskRequest::ResumeKeywordExtraction { resume }
            | TaskRequest::ResumeComprehensiveFeedback { resume } => {
                ctx.resume = Some(resume);
            }
            TaskRequest::PortfolioContentGeneration { portfolio }
            | TaskRequest::PortfolioImprovementSuggestions { portfolio }
            | TaskRequest::PortfolioDescription { portfolio }
            | TaskRequest::PortfolioKeywordExtraction { portfolio } => {
                ctx.portfolio = Some(portfolio);
            }
            TaskRequest::CoverLetter {
                job_application,
                resume,
            } => {
                ctx.set_job(job_application);
                ctx.resume = Some(resume);
            }
            TaskRequest::InterviewQuestions { job_application }
            | TaskRequest::JobApplicationTips { job_application } => {
                ctx.set_job(job_application);
            }
            TaskRequest::InterviewQuestionsWithResume {
                job_application,
                resume,
            } => {
                ctx.set_job(job_application);
                ctx.resume = resume;
            }
            TaskRequest::InterviewAnswer {
                question,
                job_application,
                resume,
            } => {
                ctx.set_job(job_application);
                ctx.question = Some(question);
                ctx.resume = Some(resume);
            }
            TaskRequest::InterviewAnswerFromText {
                question,
                job_title,
                resume_text,
            } => {
                ctx.question = Some(question);
                ctx.job_title = Some(job_title);
                ctx.resume_text = resume_text;
            }
        }
        ctx
    }
}

/// Flattened view of everything a section may read.
#[derive(Debug, Default)]
struct PromptContext<'a> {
    resume: Option<&'a Resume>,
    portfolio: Option<&'a Portfolio>,
    job_title: Option<&'a str>,
    company: Option<&'a str>,
    job_description: Option<&'a str>,
    status: Option<ApplicationStatus>,
    question: Option<&'a str>,
    resume_text: Option<&'a str>,
}

impl<'a> PromptContext<'a> {
    fn set_job(&mut self, job: &'a JobApplication) {
        self.job_title = Some(job.job_title.as_str());
        self.company = Some(job.company.as_str());
        self.job_description = Some(job.job_description.as_str());
        self.status = Some(job.status);
    }

    fn field(&self, field: Field) -> String {
        let value = match field {
            Field::JobTitle => self.job_title,
            Field::Company => self.company,
            Field::JobDescription => self.job_description,
            Field::Question => self.question,
            Field::Status => return self.status.map(|s| s.to_string()).unwrap_or_default(),
        };
        value.unwrap_or_default().to_string()
    }
}

#[derive(Default)]
struct PromptWriter {
    buf: String,
}

impl PromptWriter {
    fn line(&mut self, text: impl AsRef<str>) {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// A blank line followed by `Label:`.
    fn heading(&mut self, label: &str) {
        self.line(format!("\n{label}:"));
    }
}

/// Renders the prompt for a task request using its kind's template.
pub fn build_prompt(request: &TaskRequest<'_>) -> String {
    let template = request.kind().template();
    let ctx = request.context();

    let mut out = PromptWriter::default();
    out.line(template.header);
    for section in template.sections {
        render_section(&mut out, *section, &ctx);
    }
    render_closing(&mut out, &template.closing);
    out.buf
}

fn render_section(out: &mut PromptWriter, section: Section, ctx: &PromptContext<'_>) {
    match section {
        Section::Heading(label) => out.heading(label),
        Section::Field(field) => out.line(format!("{}: {}", field.label(), ctx.field(field))),
        Section::SpacedField(field) => {
            out.line(format!("\n{}: {}", field.label(), ctx.field(field)))
        }
        Section::JobDescriptionText => out.line(ctx.job_description.unwrap_or_default()),
        Section::ResumeIdentity => {
            let (name, title, summary) = ctx
                .resume
                .map(|r| (r.full_name(), r.title.as_str(), r.personal_summary()))
                .unwrap_or_default();
            out.line(format!("Name: {name}"));
            out.line(format!("Title: {title}"));
            out.line(format!("Summary: {summary}"));
        }
        Section::WorkExperience(style) => render_work_experience(out, ctx.resume, style),
        Section::Education => render_education(out, ctx.resume),
        Section::Skills(style) => render_skills(out, ctx.resume, style),
        Section::PortfolioIdentity => {
            let (name, title, description) = ctx
                .portfolio
                .map(|p| (p.full_name(), p.title.as_str(), p.description.as_str()))
                .unwrap_or_default();
            out.line(format!("Name: {name}"));
            out.line(format!("Title: {title}"));
            out.line(format!("Description: {description}"));
        }
        Section::PortfolioProjects => render_portfolio_projects(out, ctx.portfolio),
        Section::CandidateSnapshot => {
            if let Some(resume) = ctx.resume {
                render_candidate_snapshot(out, resume);
            }
        }
        Section::ResumeText => {
            if let Some(text) = ctx.resume_text.filter(|t| !t.is_empty()) {
                out.heading("Candidate Resume Information");
                out.line(text);
            }
        }
    }
}

fn render_work_experience(out: &mut PromptWriter, resume: Option<&Resume>, style: ExperienceStyle) {
    out.heading("Work Experience");
    let Some(resume) = resume else { return };

    for exp in &resume.work_experiences {
        out.line(format!(
            "- {} at {} ({} - {})",
            exp.job_title,
            exp.company_name,
            month_year(exp.start_date),
            exp.end_date
                .map(|d| month_year(Some(d)))
                .unwrap_or_else(|| PRESENT.to_string())
        ));

        match style {
            ExperienceStyle::Labeled => {
                sub_list(out, Some("Responsibilities"), &exp.responsibilities);
                sub_list(out, Some("Achievements"), &exp.achievements);
            }
            ExperienceStyle::Bulleted => {
                sub_list(out, None, &exp.responsibilities);
                sub_list(out, None, &exp.achievements);
            }
            ExperienceStyle::ResponsibilitiesOnly => {
                sub_list(out, None, &exp.responsibilities);
            }
        }
    }
}

/// Indented sub-bullets, optionally under an indented label. Nothing is
/// written for an empty list.
fn sub_list(out: &mut PromptWriter, label: Option<&str>, items: &[String]) {
    if items.is_empty() {
        return;
    }
    if let Some(label) = label {
        out.line(format!("  {label}:"));
    }
    for item in items {
        out.line(format!("  - {item}"));
    }
}

fn render_education(out: &mut PromptWriter, resume: Option<&Resume>) {
    out.heading("Education");
    let Some(resume) = resume else { return };

    for edu in &resume.education {
        out.line(format!(
            "- {} in {} from {} ({} - {})",
            edu.degree,
            edu.field_of_study,
            edu.institution,
            year(edu.start_date),
            edu.end_date
                .map(|d| year(Some(d)))
                .unwrap_or_else(|| PRESENT.to_string())
        ));
    }
}

fn render_skills(out: &mut PromptWriter, resume: Option<&Resume>, style: SkillStyle) {
    out.heading("Skills");
    let Some(resume) = resume else { return };

    for skill in &resume.skills {
        match style {
            SkillStyle::WithLevel => out.line(format!("- {} ({})", skill.name, skill.level)),
            SkillStyle::NameOnly => out.line(format!("- {}", skill.name)),
        }
    }
}

fn render_portfolio_projects(out: &mut PromptWriter, portfolio: Option<&Portfolio>) {
    out.heading("Projects");
    let Some(portfolio) = portfolio else { return };

    for project in &portfolio.projects {
        out.line(format!("- {}", project.title));
        out.line(format!("  Description: {}", project.description));
        out.line(format!("  Technologies: {}", project.technologies.join(", ")));
    }
}

fn render_candidate_snapshot(out: &mut PromptWriter, resume: &Resume) {
    out.heading("Candidate Resume Information");
    out.line(format!("Title: {}", resume.title));
    let skills: Vec<&str> = resume.skills.iter().map(|s| s.name.as_str()).collect();
    out.line(format!("Skills: {}", skills.join(", ")));

    out.heading("Work Experience");
    for exp in resume.work_experiences.iter().take(SNAPSHOT_EXPERIENCE_LIMIT) {
        out.line(format!("- {} at {}", exp.job_title, exp.company_name));
    }
}

fn render_closing(out: &mut PromptWriter, closing: &Closing) {
    out.line(format!("\n{}", closing.lead));
    for (i, item) in closing.items.iter().enumerate() {
        out.line(format!("{}. {}", i + 1, item));
    }
    if let Some(trailer) = closing.trailer {
        out.line(format!("\n{trailer}"));
    }
}

/// `Jan 2020`; empty when the date is unset.
pub fn month_year(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

fn year(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y").to_string()).unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job_application::ApplicationStatus;
    use crate::models::portfolio::PortfolioProject;
    use crate::models::resume::{Education, PersonalInfo, Skill, SkillLevel, WorkExperience};

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn sample_resume() -> Resume {
        Resume {
            title: "Senior Engineer".to_string(),
            personal_info: Some(PersonalInfo {
                full_name: "Jane Doe".to_string(),
                summary: "Builds reliable systems.".to_string(),
                ..Default::default()
            }),
            work_experiences: vec![
                WorkExperience {
                    job_title: "Staff Engineer".to_string(),
                    company_name: "Acme".to_string(),
                    start_date: date(2020, 1, 15),
                    end_date: None,
                    responsibilities: vec!["Led platform team".to_string()],
                    achievements: vec!["Cut costs 30%".to_string()],
                    ..Default::default()
                },
                WorkExperience {
                    job_title: "Engineer".to_string(),
                    company_name: "Initech".to_string(),
                    start_date: date(2016, 6, 1),
                    end_date: date(2019, 12, 31),
                    ..Default::default()
                },
                WorkExperience {
                    job_title: "Intern".to_string(),
                    company_name: "Globex".to_string(),
                    start_date: date(2015, 6, 1),
                    end_date: date(2015, 8, 31),
                    ..Default::default()
                },
            ],
            education: vec![Education {
                degree: "BSc".to_string(),
                field_of_study: "Computer Science".to_string(),
                institution: "MIT".to_string(),
                start_date: date(2012, 9, 1),
                end_date: date(2016, 5, 31),
                ..Default::default()
            }],
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    level: SkillLevel::Expert,
                    ..Default::default()
                },
                Skill {
                    name: "SQL".to_string(),
                    level: SkillLevel::Advanced,
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn sample_job() -> JobApplication {
        JobApplication {
            job_title: "Platform Engineer".to_string(),
            company: "Hooli".to_string(),
            job_description: "Run the platform.".to_string(),
            status: ApplicationStatus::PhoneScreen,
            ..Default::default()
        }
    }

    fn sample_portfolio() -> Portfolio {
        Portfolio {
            title: "Jane's Work".to_string(),
            description: "Systems and tooling.".to_string(),
            personal_info: Some(PersonalInfo {
                full_name: "Jane Doe".to_string(),
                ..Default::default()
            }),
            projects: vec![PortfolioProject {
                title: "Cache".to_string(),
                description: "A distributed cache.".to_string(),
                technologies: vec!["Rust".to_string(), "Tokio".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_resume_improvement_prompt_full_text() {
        let mut resume = sample_resume();
        resume.work_experiences.truncate(2);
        let prompt = build_prompt(&TaskRequest::ResumeImprovementSuggestions { resume: &resume });

        let expected = [
            "Analyze the following resume and suggest improvements for better impact and readability:",
            "Name: Jane Doe",
            "Title: Senior Engineer",
            "Summary: Builds reliable systems.",
            "",
            "Work Experience:",
            "- Staff Engineer at Acme (Jan 2020 - Present)",
            "  Responsibilities:",
            "  - Led platform team",
            "  Achievements:",
            "  - Cut costs 30%",
            "- Engineer at Initech (Jun 2016 - Dec 2019)",
            "",
            "Education:",
            "- BSc in Computer Science from MIT (2012 - 2016)",
            "",
            "Skills:",
            "- Rust (Expert)",
            "- SQL (Advanced)",
            "",
            "Please provide specific suggestions to improve this resume, including:",
            "1. Content improvements (better wording, missing information, etc.)",
            "2. Structure improvements",
            "3. Skills presentation",
            "4. Overall impact and readability",
            "",
        ]
        .join("\n");

        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_empty_resume_still_renders_every_heading() {
        let resume = Resume::default();
        let prompt = build_prompt(&TaskRequest::ResumeComprehensiveFeedback { resume: &resume });

        assert!(prompt.contains("Name: \nTitle: \nSummary: \n"));
        assert!(prompt.contains("\nWork Experience:\n\nEducation:\n\nSkills:\n\nPlease provide"));
        assert!(prompt.contains("6. Specific recommendations for improvement\n"));
    }

    #[test]
    fn test_empty_portfolio_renders_projects_heading() {
        let portfolio = Portfolio::default();
        let prompt = build_prompt(&TaskRequest::PortfolioDescription {
            portfolio: &portfolio,
        });
        assert!(prompt.contains("Name: \nTitle: \nDescription: \n\nProjects:\n\nPlease generate"));
    }

    #[test]
    fn test_open_ended_education_renders_present() {
        let mut resume = sample_resume();
        resume.education[0].end_date = None;
        let prompt = build_prompt(&TaskRequest::ResumeImprovementSuggestions { resume: &resume });
        assert!(prompt.contains("- BSc in Computer Science from MIT (2012 - Present)\n"));
    }

    #[test]
    fn test_keyword_prompt_lists_responsibilities_only_and_skips_education() {
        let resume = sample_resume();
        let prompt = build_prompt(&TaskRequest::ResumeKeywordExtraction { resume: &resume });

        assert!(prompt.contains("- Staff Engineer at Acme (Jan 2020 - Present)\n  - Led platform team\n- Engineer"));
        assert!(!prompt.contains("Cut costs 30%"));
        assert!(!prompt.contains("Responsibilities:"));
        assert!(!prompt.contains("Education:"));
        assert!(prompt.contains("5. Certifications and qualifications\n"));
    }

    #[test]
    fn test_feedback_prompt_lists_achievements_without_labels() {
        let resume = sample_resume();
        let prompt = build_prompt(&TaskRequest::ResumeComprehensiveFeedback { resume: &resume });
        assert!(prompt.contains("  - Led platform team\n  - Cut costs 30%\n"));
        assert!(!prompt.contains("Achievements:"));
    }

    #[test]
    fn test_content_for_job_places_description_before_resume() {
        let resume = sample_resume();
        let prompt = build_prompt(&TaskRequest::ResumeContentForJob {
            job_description: "We need Rust.\nRemote OK.",
            resume: &resume,
        });

        assert!(prompt.starts_with(
            "Generate a tailored resume content based on the following job description and the user's resume information:\n\nJob Description:\nWe need Rust.\nRemote OK.\n\nUser's Resume Information:\nName: Jane Doe\n"
        ));
        assert!(prompt.ends_with(
            "\nPlease generate a tailored resume that highlights the most relevant experience and skills for this job. Format the content in a professional way that can be directly used in a resume.\n"
        ));
    }

    #[test]
    fn test_portfolio_content_prompt_with_trailer() {
        let portfolio = sample_portfolio();
        let prompt = build_prompt(&TaskRequest::PortfolioContentGeneration {
            portfolio: &portfolio,
        });

        assert!(prompt.contains(
            "Name: Jane Doe\nTitle: Jane's Work\nDescription: Systems and tooling.\n\nProjects:\n- Cache\n  Description: A distributed cache.\n  Technologies: Rust, Tokio\n"
        ));
        assert!(prompt.ends_with(
            "4. A professional bio that can be used for the homepage\n\nThe content should be engaging, professional, and highlight the person's expertise and achievements.\n"
        ));
    }

    #[test]
    fn test_cover_letter_has_job_and_resume_sections() {
        let resume = sample_resume();
        let job = sample_job();
        let prompt = build_prompt(&TaskRequest::CoverLetter {
            job_application: &job,
            resume: &resume,
        });

        assert!(prompt.contains(
            "\nJob Details:\nJob Title: Platform Engineer\nCompany: Hooli\nJob Description: Run the platform.\n\nResume Information:\nName: Jane Doe\n"
        ));
        assert!(!prompt.contains("Skills:"));
        assert!(prompt.contains("6. Uses a professional tone and format\n"));
    }

    #[test]
    fn test_tips_prompt_includes_status_name() {
        let job = sample_job();
        let prompt = build_prompt(&TaskRequest::JobApplicationTips {
            job_application: &job,
        });
        assert!(prompt.starts_with(
            "Provide tips for the following job application:\nJob Title: Platform Engineer\nCompany: Hooli\nJob Description: Run the platform.\nCurrent Status: PhoneScreen\n\nPlease provide tips on:\n1. "
        ));
    }

    #[test]
    fn test_interview_questions_prompt_asks_for_one_per_line() {
        let job = sample_job();
        let prompt = build_prompt(&TaskRequest::InterviewQuestions {
            job_application: &job,
        });
        assert!(prompt.ends_with(
            "5. Challenging questions that test problem-solving abilities\n\nFormat each question as a separate line with no additional text.\n"
        ));
    }

    #[test]
    fn test_interview_questions_with_resume_snapshot_takes_two_roles() {
        let resume = sample_resume();
        let job = sample_job();
        let prompt = build_prompt(&TaskRequest::InterviewQuestionsWithResume {
            job_application: &job,
            resume: Some(&resume),
        });

        assert!(prompt.contains(
            "\nCandidate Resume Information:\nTitle: Senior Engineer\nSkills: Rust, SQL\n\nWork Experience:\n- Staff Engineer at Acme\n- Engineer at Initech\n\nGenerate 10 likely"
        ));
        assert!(!prompt.contains("Globex"));
        assert!(prompt.contains("5. Format each question on a new line starting with 'Q: '\n"));
    }

    #[test]
    fn test_snapshot_follows_list_order_not_dates() {
        let mut resume = sample_resume();
        resume.work_experiences.reverse();
        let job = sample_job();
        let prompt = build_prompt(&TaskRequest::InterviewQuestionsWithResume {
            job_application: &job,
            resume: Some(&resume),
        });

        assert!(prompt.contains("\nWork Experience:\n- Intern at Globex\n- Engineer at Initech\n"));
        assert!(!prompt.contains("Staff Engineer at Acme"));
    }

    #[test]
    fn test_interview_questions_without_resume_omits_snapshot() {
        let job = sample_job();
        let prompt = build_prompt(&TaskRequest::InterviewQuestionsWithResume {
            job_application: &job,
            resume: None,
        });
        assert!(!prompt.contains("Candidate Resume Information"));
        assert!(prompt.contains("Job Description: Run the platform.\n\nGenerate 10 likely"));
    }

    #[test]
    fn test_structured_interview_answer_prompt() {
        let resume = sample_resume();
        let job = sample_job();
        let prompt = build_prompt(&TaskRequest::InterviewAnswer {
            question: "Why Hooli?",
            job_application: &job,
            resume: &resume,
        });

        assert!(prompt.starts_with(
            "Generate a professional answer to the following interview question based on the resume information:\n\nQuestion: Why Hooli?\n\nJob Title: Platform Engineer\n\nCompany: Hooli\n\nResume Information:\n"
        ));
        assert!(prompt.contains("\nSkills:\n- Rust\n- SQL\n"));
        assert!(!prompt.contains("(Expert)"));
    }

    #[test]
    fn test_flat_interview_answer_with_and_without_resume_text() {
        let with_text = build_prompt(&TaskRequest::InterviewAnswerFromText {
            question: "Tell me about a failure.",
            job_title: "SRE",
            resume_text: Some("10 years on call."),
        });
        assert_eq!(
            with_text,
            [
                "Generate a professional answer to the following interview question:",
                "",
                "Job Title: SRE",
                "",
                "Question: Tell me about a failure.",
                "",
                "Candidate Resume Information:",
                "10 years on call.",
                "",
                "Please provide a professional answer that:",
                "1. Is concise and to the point",
                "2. Uses the STAR method where appropriate (Situation, Task, Action, Result)",
                "3. Highlights relevant skills and experiences",
                "4. Demonstrates value to the employer",
                "5. Sounds natural and conversational",
                "",
            ]
            .join("\n")
        );

        let without_text = build_prompt(&TaskRequest::InterviewAnswerFromText {
            question: "Tell me about a failure.",
            job_title: "SRE",
            resume_text: Some(""),
        });
        assert!(!without_text.contains("Candidate Resume Information"));
    }

    #[test]
    fn test_control_characters_pass_through_verbatim() {
        let mut resume = sample_resume();
        resume.title = "Eng\t\u{7}\r\nineer".to_string();
        let prompt = build_prompt(&TaskRequest::ResumeOptimizations { resume: &resume });
        assert!(prompt.contains("Title: Eng\t\u{7}\r\nineer\n"));
        assert!(prompt.starts_with("Analyze the following resume and suggest optimizations"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let resume = sample_resume();
        let request = TaskRequest::ResumeComprehensiveFeedback { resume: &resume };
        assert_eq!(build_prompt(&request), build_prompt(&request));
    }

    #[test]
    fn test_every_task_kind_has_a_request_variant() {
        let resume = sample_resume();
        let portfolio = sample_portfolio();
        let job = sample_job();
        let requests = [
            TaskRequest::ResumeContentForJob {
                job_description: "jd",
                resume: &resume,
            },
            TaskRequest::ResumeImprovementSuggestions { resume: &resume },
            TaskRequest::ResumeOptimizations { resume: &resume },
            TaskRequest::ResumeKeywordExtraction { resume: &resume },
            TaskRequest::ResumeComprehensiveFeedback { resume: &resume },
            TaskRequest::PortfolioContentGeneration {
                portfolio: &portfolio,
            },
            TaskRequest::PortfolioImprovementSuggestions {
                portfolio: &portfolio,
            },
            TaskRequest::PortfolioDescription {
                portfolio: &portfolio,
            },
            TaskRequest::PortfolioKeywordExtraction {
                portfolio: &portfolio,
            },
            TaskRequest::CoverLetter {
                job_application: &job,
                resume: &resume,
            },
            TaskRequest::InterviewQuestions {
                job_application: &job,
            },
            TaskRequest::InterviewQuestionsWithResume {
                job_application: &job,
                resume: None,
            },
            TaskRequest::InterviewAnswer {
                question: "q",
                job_application: &job,
                resume: &resume,
            },
            TaskRequest::InterviewAnswerFromText {
                question: "q",
                job_title: "t",
                resume_text: None,
            },
            TaskRequest::JobApplicationTips {
                job_application: &job,
            },
        ];

        let kinds: Vec<TaskKind> = requests.iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, TaskKind::ALL.to_vec());
        for request in &requests {
            let prompt = build_prompt(request);
            assert!(prompt.starts_with(request.kind().template().header));
        }
    }

    #[test]
    fn test_month_year_formats_abbreviated_month() {
        assert_eq!(month_year(date(2023, 9, 30)), "Sep 2023");
        assert_eq!(month_year(None), "");
    }
}
