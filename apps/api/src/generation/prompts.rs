// All prompt templates for the Generation module, one per task kind.
// Section order and wording are part of the observable output; change with care.

use crate::generation::template::{
    Closing, ExperienceStyle, Field, PromptTemplate, Section, SkillStyle,
};

const RESUME_BODY_FULL: &[Section] = &[
    Section::ResumeIdentity,
    Section::WorkExperience(ExperienceStyle::Labeled),
    Section::Education,
    Section::Skills(SkillStyle::WithLevel),
];

const PORTFOLIO_BODY: &[Section] = &[Section::PortfolioIdentity, Section::PortfolioProjects];

const JOB_DETAILS: &[Section] = &[
    Section::Field(Field::JobTitle),
    Section::Field(Field::Company),
    Section::Field(Field::JobDescription),
];

const RESUME_IMPROVEMENT_ITEMS: &[&str] = &[
    "Content improvements (better wording, missing information, etc.)",
    "Structure improvements",
    "Skills presentation",
    "Overall impact and readability",
];

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

pub static RESUME_CONTENT_FOR_JOB: PromptTemplate = PromptTemplate {
    header: "Generate a tailored resume content based on the following job description and the user's resume information:",
    sections: &[
        Section::Heading("Job Description"),
        Section::JobDescriptionText,
        Section::Heading("User's Resume Information"),
        Section::ResumeIdentity,
        Section::WorkExperience(ExperienceStyle::Labeled),
        Section::Education,
        Section::Skills(SkillStyle::WithLevel),
    ],
    closing: Closing {
        lead: "Please generate a tailored resume that highlights the most relevant experience and skills for this job. Format the content in a professional way that can be directly used in a resume.",
        items: &[],
        trailer: None,
    },
};

pub static RESUME_IMPROVEMENT_SUGGESTIONS: PromptTemplate = PromptTemplate {
    header: "Analyze the following resume and suggest improvements for better impact and readability:",
    sections: RESUME_BODY_FULL,
    closing: Closing {
        lead: "Please provide specific suggestions to improve this resume, including:",
        items: RESUME_IMPROVEMENT_ITEMS,
        trailer: None,
    },
};

pub static RESUME_OPTIMIZATIONS: PromptTemplate = PromptTemplate {
    header: "Analyze the following resume and suggest optimizations for better impact and readability:",
    sections: RESUME_BODY_FULL,
    closing: Closing {
        lead: "Please provide specific suggestions to improve this resume, including:",
        items: RESUME_IMPROVEMENT_ITEMS,
        trailer: None,
    },
};

pub static RESUME_KEYWORD_EXTRACTION: PromptTemplate = PromptTemplate {
    header: "Extract relevant keywords from the following resume that would be valuable for ATS (Applicant Tracking Systems):",
    sections: &[
        Section::ResumeIdentity,
        Section::WorkExperience(ExperienceStyle::ResponsibilitiesOnly),
        Section::Skills(SkillStyle::WithLevel),
    ],
    closing: Closing {
        lead: "Please extract and categorize keywords from this resume that would be valuable for ATS systems, including:",
        items: &[
            "Technical skills",
            "Soft skills",
            "Industry-specific terminology",
            "Action verbs",
            "Certifications and qualifications",
        ],
        trailer: None,
    },
};

pub static RESUME_COMPREHENSIVE_FEEDBACK: PromptTemplate = PromptTemplate {
    header: "Provide comprehensive AI feedback on the following resume:",
    sections: &[
        Section::ResumeIdentity,
        Section::WorkExperience(ExperienceStyle::Bulleted),
        Section::Education,
        Section::Skills(SkillStyle::WithLevel),
    ],
    closing: Closing {
        lead: "Please provide comprehensive AI feedback on this resume, including:",
        items: &[
            "Overall impression and impact",
            "Content quality and relevance",
            "Structure and organization",
            "Language and tone",
            "ATS compatibility",
            "Specific recommendations for improvement",
        ],
        trailer: None,
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Portfolio
// ────────────────────────────────────────────────────────────────────────────

pub static PORTFOLIO_CONTENT_GENERATION: PromptTemplate = PromptTemplate {
    header: "Generate professional content for a portfolio website based on the following information:",
    sections: PORTFOLIO_BODY,
    closing: Closing {
        lead: "Please generate professional content for the following portfolio sections:",
        items: &[
            "About Me section (250-300 words)",
            "Skills section with brief descriptions of expertise areas",
            "Project descriptions that highlight achievements and technical challenges",
            "A professional bio that can be used for the homepage",
        ],
        trailer: Some("The content should be engaging, professional, and highlight the person's expertise and achievements."),
    },
};

pub static PORTFOLIO_IMPROVEMENT_SUGGESTIONS: PromptTemplate = PromptTemplate {
    header: "Analyze the following portfolio information and suggest improvements for better impact and professional presentation:",
    sections: PORTFOLIO_BODY,
    closing: Closing {
        lead: "Please provide specific suggestions to improve this portfolio, including:",
        items: &[
            "Content improvements for the About section",
            "Better ways to present projects and skills",
            "Additional sections that might enhance the portfolio",
            "Overall structure and organization improvements",
            "Professional branding suggestions",
        ],
        trailer: None,
    },
};

pub static PORTFOLIO_DESCRIPTION: PromptTemplate = PromptTemplate {
    header: "Generate a professional portfolio description based on the following information:",
    sections: PORTFOLIO_BODY,
    closing: Closing {
        lead: "Please generate a compelling portfolio description that:",
        items: &[
            "Highlights key skills and expertise",
            "Showcases professional achievements",
            "Communicates unique value proposition",
            "Is engaging and professional in tone",
            "Is optimized for both human readers and search engines",
        ],
        trailer: None,
    },
};

pub static PORTFOLIO_KEYWORD_EXTRACTION: PromptTemplate = PromptTemplate {
    header: "Extract relevant keywords from the following portfolio information:",
    sections: PORTFOLIO_BODY,
    closing: Closing {
        lead: "Please extract and categorize keywords from this portfolio that would be valuable for SEO and professional branding, including:",
        items: &[
            "Technical skills and technologies",
            "Industry-specific terminology",
            "Professional qualifications",
            "Project types and domains",
            "Career highlights and achievements",
        ],
        trailer: None,
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Job application
// ────────────────────────────────────────────────────────────────────────────

pub static COVER_LETTER: PromptTemplate = PromptTemplate {
    header: "Generate a professional cover letter based on the following job application and resume:",
    sections: &[
        Section::Heading("Job Details"),
        Section::Field(Field::JobTitle),
        Section::Field(Field::Company),
        Section::Field(Field::JobDescription),
        Section::Heading("Resume Information"),
        Section::ResumeIdentity,
        Section::WorkExperience(ExperienceStyle::Bulleted),
    ],
    closing: Closing {
        lead: "Please generate a professional cover letter that:",
        items: &[
            "Addresses the hiring manager or recruiter",
            "Introduces the candidate and their interest in the position",
            "Highlights relevant skills and experiences from the resume that match the job requirements",
            "Explains why the candidate is a good fit for the company and role",
            "Includes a call to action and contact information",
            "Uses a professional tone and format",
        ],
        trailer: None,
    },
};

pub static INTERVIEW_QUESTIONS: PromptTemplate = PromptTemplate {
    header: "Generate potential interview questions for the following job application:",
    sections: JOB_DETAILS,
    closing: Closing {
        lead: "Please generate 10 potential interview questions that might be asked during an interview for this position, including:",
        items: &[
            "Technical questions related to the job requirements",
            "Behavioral questions to assess soft skills",
            "Questions about experience and background",
            "Questions about the company and industry",
            "Challenging questions that test problem-solving abilities",
        ],
        trailer: Some("Format each question as a separate line with no additional text."),
    },
};

pub static INTERVIEW_QUESTIONS_WITH_RESUME: PromptTemplate = PromptTemplate {
    header: "Generate likely interview questions for the following job application:",
    sections: &[
        Section::Field(Field::JobTitle),
        Section::Field(Field::Company),
        Section::Field(Field::JobDescription),
        Section::CandidateSnapshot,
    ],
    closing: Closing {
        lead: "Generate 10 likely interview questions that:",
        items: &[
            "Include technical questions related to the job",
            "Include behavioral questions",
            "Include questions about the candidate's experience",
            "Include questions about the candidate's fit for the role",
            "Format each question on a new line starting with 'Q: '",
        ],
        trailer: None,
    },
};

pub static INTERVIEW_ANSWER: PromptTemplate = PromptTemplate {
    header: "Generate a professional answer to the following interview question based on the resume information:",
    sections: &[
        Section::SpacedField(Field::Question),
        Section::SpacedField(Field::JobTitle),
        Section::SpacedField(Field::Company),
        Section::Heading("Resume Information"),
        Section::ResumeIdentity,
        Section::WorkExperience(ExperienceStyle::Bulleted),
        Section::Skills(SkillStyle::NameOnly),
    ],
    closing: Closing {
        lead: "Please generate a professional, concise, and effective answer to this interview question that highlights relevant experience and skills from the resume.",
        items: &[],
        trailer: None,
    },
};

pub static INTERVIEW_ANSWER_FROM_TEXT: PromptTemplate = PromptTemplate {
    header: "Generate a professional answer to the following interview question:",
    sections: &[
        Section::SpacedField(Field::JobTitle),
        Section::SpacedField(Field::Question),
        Section::ResumeText,
    ],
    closing: Closing {
        lead: "Please provide a professional answer that:",
        items: &[
            "Is concise and to the point",
            "Uses the STAR method where appropriate (Situation, Task, Action, Result)",
            "Highlights relevant skills and experiences",
            "Demonstrates value to the employer",
            "Sounds natural and conversational",
        ],
        trailer: None,
    },
};

pub static JOB_APPLICATION_TIPS: PromptTemplate = PromptTemplate {
    header: "Provide tips for the following job application:",
    sections: &[
        Section::Field(Field::JobTitle),
        Section::Field(Field::Company),
        Section::Field(Field::JobDescription),
        Section::Field(Field::Status),
    ],
    closing: Closing {
        lead: "Please provide tips on:",
        items: &[
            "How to improve the application",
            "What to focus on in interviews",
            "Questions to ask the employer",
            "Research to do about the company",
            "Next steps in the application process",
        ],
        trailer: None,
    },
};
