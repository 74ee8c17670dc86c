//! Skill Taxonomy — the fixed category → canonical skill phrase mapping that
//! drives every lookup in the screening pipeline.
//!
//! Matching throughout the system is case-insensitive substring containment
//! of the canonical phrase inside the subject text. A phrase that happens to
//! be a substring of an unrelated longer word will match; that is accepted
//! behavior, not something this module tries to correct.

/// A named group of related canonical skill phrases.
///
/// Phrases are lowercase, unique within their category, and kept in a fixed
/// order so downstream output (extracted skills, required skills) is stable.
#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

const PROGRAMMING_LANGUAGES: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust", "swift",
    "kotlin", "scala", "r", "matlab", "perl", "shell", "bash", "powershell",
];

const WEB_TECHNOLOGIES: &[&str] = &[
    "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
    "spring", "laravel", "asp.net", "jsp", "servlets", "jquery", "bootstrap", "sass",
];

const DATABASES: &[&str] = &[
    "sql", "mysql", "postgresql", "mongodb", "oracle", "sql server", "sqlite", "redis",
    "cassandra", "dynamodb", "firebase", "elasticsearch", "neo4j",
];

const CLOUD_PLATFORMS: &[&str] = &[
    "aws", "azure", "google cloud", "gcp", "heroku", "digitalocean", "linode", "vultr",
];

const DEVOPS_TOOLS: &[&str] = &[
    "docker", "kubernetes", "jenkins", "git", "github", "gitlab", "bitbucket", "jira",
    "confluence", "terraform", "ansible", "chef", "puppet",
];

const AI_ML_TOOLS: &[&str] = &[
    "machine learning", "ai", "artificial intelligence", "tensorflow", "pytorch",
    "scikit-learn", "keras", "opencv", "nltk", "spacy", "pandas", "numpy",
    "matplotlib", "seaborn",
];

const DATA_ANALYSIS: &[&str] = &[
    "data analysis", "data visualization", "excel", "powerbi", "tableau", "qlik",
    "looker", "apache spark", "hadoop", "kafka", "airflow", "dbt",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "critical thinking",
    "project management", "agile", "scrum", "kanban", "customer service", "sales",
];

/// Immutable skill taxonomy. Built once at startup and shared behind an `Arc`
/// in `AppState`; there are no mutation operations.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
}

impl SkillTaxonomy {
    pub fn new() -> Self {
        Self {
            categories: vec![
                SkillCategory { name: "programming_languages", skills: PROGRAMMING_LANGUAGES },
                SkillCategory { name: "web_technologies", skills: WEB_TECHNOLOGIES },
                SkillCategory { name: "databases", skills: DATABASES },
                SkillCategory { name: "cloud_platforms", skills: CLOUD_PLATFORMS },
                SkillCategory { name: "devops_tools", skills: DEVOPS_TOOLS },
                SkillCategory { name: "ai_ml_tools", skills: AI_ML_TOOLS },
                SkillCategory { name: "data_analysis", skills: DATA_ANALYSIS },
                SkillCategory { name: "soft_skills", skills: SOFT_SKILLS },
            ],
        }
    }

    /// All categories in their fixed order.
    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Canonical skills of one category, or `None` for an unknown category name.
    /// Contract accessor; the pipeline itself iterates `categories()`.
    #[allow(dead_code)]
    pub fn skills_in_category(&self, name: &str) -> Option<&'static [&'static str]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.skills)
    }

    /// The full flattened skill list, category order preserved.
    pub fn all_skills(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().flat_map(|c| c.skills.iter().copied())
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-cases a canonical phrase for display: the first letter of every
/// alphabetic run is uppercased, the rest lowercased. Non-alphabetic
/// characters act as separators, so "node.js" → "Node.Js" and "aws" → "Aws".
pub fn title_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut prev_alpha = false;
    for ch in phrase.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
