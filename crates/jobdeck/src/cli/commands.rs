//! CLI command definitions.
//!
//! `add` is the submit flow for one record, `list` renders the saved
//! deck, `remove` drops one entry by position. The closed-choice flags
//! keep free-form text out of the enum-like fields at this surface; the
//! core types accept any string.

use clap::{Args, Subcommand, ValueEnum};

/// Add command arguments: one flag per form field.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Company logo image URL
    #[arg(long, value_name = "URL")]
    pub logo_url: Option<String>,

    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Mark the posting as new
    #[arg(long)]
    pub new: bool,

    /// Mark the posting as featured
    #[arg(long)]
    pub featured: bool,

    /// Position level
    #[arg(short, long, value_enum)]
    pub position: Option<PositionArg>,

    /// Job type
    #[arg(short = 't', long, value_enum)]
    pub job_type: Option<JobTypeArg>,

    /// Location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Toggle a skill (repeatable; naming a skill twice deselects it)
    #[arg(short, long = "skill", value_enum)]
    pub skill: Vec<SkillArg>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output the raw record array as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Index of the record to remove, as shown by `list`
    pub index: usize,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,
}

/// Position level choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PositionArg {
    /// Junior position
    Junior,
    /// Mid-level position
    Mid,
    /// Senior position
    Senior,
}

impl PositionArg {
    /// The stored field value for this choice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }
}

/// Job type choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JobTypeArg {
    /// Full-time employment
    FullTime,
    /// Part-time employment
    PartTime,
    /// Contract work
    Contract,
}

impl JobTypeArg {
    /// The stored field value for this choice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Contract => "contract",
        }
    }
}

/// Skill choices, named exactly as they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SkillArg {
    /// Python
    #[value(name = "Python", alias = "python")]
    Python,
    /// JavaScript
    #[value(name = "JavaScript", alias = "javascript")]
    JavaScript,
    /// React
    #[value(name = "React", alias = "react")]
    React,
}

impl SkillArg {
    /// The stored skill name for this choice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::React => "React",
        }
    }
}
