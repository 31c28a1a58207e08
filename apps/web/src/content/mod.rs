// Content store: profile, skills and resume content, read-only after startup.
// File assets are loaded once; failures degrade to fallbacks instead of aborting.

pub mod assets;

use std::path::Path;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use assets::{load_image, AssetSource, ProfileImage};

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub label: &'static str,
    pub items: Vec<&'static str>,
}

/// A downloadable file with its fixed filename and declared media type.
#[derive(Debug, Clone)]
pub struct Download {
    pub filename: &'static str,
    pub media_type: &'static str,
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub display_text: &'static str,
    pub pdf: Download,
    pub text: Download,
}

const PROFILE: Profile = Profile {
    name: "Mohd Azam",
    title: "Data Scientist — Machine Learning | Analytics | MLOps",
    location: "India",
};

const INTRO: &str = "I build data products and models that turn raw data into actionable insights. \
I enjoy working on end-to-end ML pipelines, exploratory data analysis, visual storytelling, \
and deploying models that solve real-world problems.";

const AREAS: &[&str] = &[
    "Machine Learning",
    "Predictive Modeling",
    "Data Visualization",
    "Feature Engineering",
    "MLOps",
];

const ABOUT: &str = "I am a data scientist with experience in building machine learning models, \
data visualizations, and production-ready data pipelines. I love turning ambiguous problems \
into clean, measurable solutions.";

const EXPERIENCE_SNAPSHOT: &[&str] = &[
    "End-to-end ML model development and deployment",
    "Feature engineering and model explainability",
    "Dashboarding and storytelling with data",
];

const RESUME_SUMMARY: &[&str] = &[
    "Experience: ML models, data pipelines, dashboards",
    "Education: BCA / Relevant degree",
    "Contact: your@email.com",
];

const RESUME_TEXT: &str = "Mohd Azam\nData Scientist\nEmail: your@email.com\n\nExperience:\n- ...";

pub const PDF_FILENAME: &str = "My_resume.pdf";
pub const TEXT_FILENAME: &str = "resume.txt";

pub struct ContentStore {
    profile_image: ProfileImage,
    resume: ResumeDocument,
}

impl ContentStore {
    /// Loads the file assets once. Never fails: a missing image becomes
    /// `ProfileImage::Unavailable`, a missing PDF an empty placeholder.
    pub async fn load(source: &dyn AssetSource, image_path: &Path, resume_pdf_path: &Path) -> Self {
        let image = load_image(source, image_path).await;
        match &image {
            Ok(img) => info!(
                "Profile image loaded ({}, {} bytes)",
                img.media_type,
                img.bytes.len()
            ),
            Err(e) => warn!("Profile image unavailable, using text fallback: {e}"),
        }

        let pdf = match source.read(resume_pdf_path).await {
            Ok(bytes) => {
                info!("Resume PDF loaded ({} bytes)", bytes.len());
                bytes
            }
            Err(e) => {
                warn!("Resume PDF unavailable, serving empty placeholder: {e}");
                Bytes::new()
            }
        };

        Self::new(image.into(), pdf)
    }

    pub fn new(profile_image: ProfileImage, resume_pdf: Bytes) -> Self {
        Self {
            profile_image,
            resume: ResumeDocument {
                display_text: RESUME_TEXT,
                pdf: Download {
                    filename: PDF_FILENAME,
                    media_type: "application/pdf",
                    bytes: resume_pdf,
                },
                text: Download {
                    filename: TEXT_FILENAME,
                    media_type: "text/plain",
                    bytes: Bytes::from_static(RESUME_TEXT.as_bytes()),
                },
            },
        }
    }

    /// Store with no image and an empty PDF, as when both files are missing.
    #[cfg(test)]
    pub fn without_assets() -> Self {
        Self::new(
            ProfileImage::Unavailable {
                reason: "no profile image configured".to_string(),
            },
            Bytes::new(),
        )
    }

    pub fn profile(&self) -> &Profile {
        &PROFILE
    }

    pub fn intro(&self) -> &'static str {
        INTRO
    }

    pub fn areas(&self) -> &'static [&'static str] {
        AREAS
    }

    pub fn about(&self) -> &'static str {
        ABOUT
    }

    pub fn experience_snapshot(&self) -> &'static [&'static str] {
        EXPERIENCE_SNAPSHOT
    }

    pub fn skill_categories(&self) -> Vec<SkillCategory> {
        vec![
            SkillCategory {
                label: "Languages & Libraries",
                items: vec![
                    "Python",
                    "Pandas",
                    "NumPy",
                    "scikit-learn",
                    "TensorFlow / PyTorch",
                    "Altair / Plotly",
                ],
            },
            SkillCategory {
                label: "Tools & Platforms",
                items: vec!["Docker", "AWS / GCP", "Streamlit / Flask", "SQL", "Airflow"],
            },
        ]
    }

    pub fn resume_summary(&self) -> &'static [&'static str] {
        RESUME_SUMMARY
    }

    pub fn resume(&self) -> &ResumeDocument {
        &self.resume
    }

    pub fn profile_image(&self) -> &ProfileImage {
        &self.profile_image
    }
}
