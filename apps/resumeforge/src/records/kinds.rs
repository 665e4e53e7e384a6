use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::records::codec::Arity;

/// The three line-oriented entity kinds a resume form carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Experience,
    Education,
    Project,
}

impl RecordKind {
    pub fn arity(self) -> Arity {
        match self {
            RecordKind::Experience | RecordKind::Education => Arity::Five,
            RecordKind::Project => Arity::Seven,
        }
    }

    /// Field names in canonical serialization order.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            RecordKind::Experience => &Experience::FIELDS,
            RecordKind::Education => &Education::FIELDS,
            RecordKind::Project => &Project::FIELDS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Experience => "experience",
            RecordKind::Education => "education",
            RecordKind::Project => "project",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "experience" | "experiences" => Ok(RecordKind::Experience),
            "education" | "educations" => Ok(RecordKind::Education),
            "project" | "projects" => Ok(RecordKind::Project),
            _ => Err(AppError::UnknownRecordKind(s.to_string())),
        }
    }
}

/// A record shape that maps positionally onto a fixed-arity field array.
pub trait LineRecord: Sized {
    const KIND: RecordKind;

    /// Builds the record from decoded fields. Missing positions become `""`;
    /// positions beyond the arity are ignored.
    fn from_fields(fields: Vec<String>) -> Self;

    /// Field values in canonical order.
    fn fields(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Experience {
    pub const FIELDS: [&'static str; 5] =
        ["job_title", "company", "start_date", "end_date", "description"];
}

impl LineRecord for Experience {
    const KIND: RecordKind = RecordKind::Experience;

    fn from_fields(fields: Vec<String>) -> Self {
        let mut it = fields.into_iter();
        Experience {
            job_title: it.next().unwrap_or_default(),
            company: it.next().unwrap_or_default(),
            start_date: it.next().unwrap_or_default(),
            end_date: it.next().unwrap_or_default(),
            description: it.next().unwrap_or_default(),
        }
    }

    fn fields(&self) -> Vec<&str> {
        vec![
            self.job_title.as_str(),
            self.company.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.description.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Education {
    pub const FIELDS: [&'static str; 5] =
        ["degree", "institution", "start_date", "end_date", "description"];
}

impl LineRecord for Education {
    const KIND: RecordKind = RecordKind::Education;

    fn from_fields(fields: Vec<String>) -> Self {
        let mut it = fields.into_iter();
        Education {
            degree: it.next().unwrap_or_default(),
            institution: it.next().unwrap_or_default(),
            start_date: it.next().unwrap_or_default(),
            end_date: it.next().unwrap_or_default(),
            description: it.next().unwrap_or_default(),
        }
    }

    fn fields(&self) -> Vec<&str> {
        vec![
            self.degree.as_str(),
            self.institution.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.description.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub role: String,
    pub technologies: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub link: String,
}

impl Project {
    pub const FIELDS: [&'static str; 7] = [
        "name",
        "role",
        "technologies",
        "start_date",
        "end_date",
        "description",
        "link",
    ];
}

impl LineRecord for Project {
    const KIND: RecordKind = RecordKind::Project;

    fn from_fields(fields: Vec<String>) -> Self {
        let mut it = fields.into_iter();
        Project {
            name: it.next().unwrap_or_default(),
            role: it.next().unwrap_or_default(),
            technologies: it.next().unwrap_or_default(),
            start_date: it.next().unwrap_or_default(),
            end_date: it.next().unwrap_or_default(),
            description: it.next().unwrap_or_default(),
            link: it.next().unwrap_or_default(),
        }
    }

    fn fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.role.as_str(),
            self.technologies.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.description.as_str(),
            self.link.as_str(),
        ]
    }
}
