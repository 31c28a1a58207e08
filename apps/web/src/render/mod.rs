// View renderer: (page, content, options) -> render tree. No I/O happens here;
// handlers generate the Projects datasets and pass them in.

pub mod html;
pub mod svg;
pub mod tree;

use tracing::warn;

use crate::contact::{Acknowledgment, ContactField, ContactSubmission, ValidationError};
use crate::content::assets::ProfileImage;
use crate::content::ContentStore;
use crate::demos::iris::{filter_rows, InvalidFilter, IrisRow, Species, FEATURE_NAMES};
use crate::demos::metrics::ModelMetrics;
use crate::demos::ProjectDemo;
use crate::navigation::PageId;

use tree::{Action, Block, ContactForm, FormField, FormStatus, PageView, ProfileCard, Section};

/// Rows shown in the iris preview table.
const IRIS_PREVIEW_ROWS: usize = 5;

pub const PROFILE_IMAGE_HREF: &str = "/assets/profile-image";
pub const RESUME_PDF_HREF: &str = "/downloads/resume.pdf";
pub const RESUME_TEXT_HREF: &str = "/downloads/resume.txt";
pub const CONTACT_ACTION: &str = "/contact";

/// State of the contact form for this render.
#[derive(Debug, Clone, Default)]
pub enum ContactFormState {
    #[default]
    Blank,
    Submitted {
        input: ContactSubmission,
        result: Result<Acknowledgment, ValidationError>,
    },
}

/// Everything besides the static content that a render depends on.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub demos: Vec<ProjectDemo>,
    pub species: Option<Species>,
    pub contact: ContactFormState,
}

impl RenderOptions {
    pub fn with_demos(mut self, demos: Vec<ProjectDemo>) -> Self {
        self.demos = demos;
        self
    }

    /// Applies the species selector. Unknown names fail and leave the filter unset.
    pub fn with_species(mut self, name: &str) -> Result<Self, InvalidFilter> {
        self.species = Some(name.parse()?);
        Ok(self)
    }

    /// Like [`with_species`](Self::with_species), but an unknown name falls back to no filter.
    pub fn with_species_or_none(self, name: Option<&str>) -> Self {
        match name {
            None => self,
            Some(name) => match self.clone().with_species(name) {
                Ok(options) => options,
                Err(e) => {
                    warn!("Ignoring species filter: {e}");
                    self
                }
            },
        }
    }

    pub fn with_contact(mut self, contact: ContactFormState) -> Self {
        self.contact = contact;
        self
    }
}

pub fn render_page(page: PageId, content: &ContentStore, options: &RenderOptions) -> PageView {
    let sections = match page {
        PageId::Home => home(content),
        PageId::About => about(content),
        PageId::Skills => skills(content),
        PageId::Projects => projects(options),
        PageId::Resume => resume(content),
        PageId::Contact => contact(&options.contact),
    };

    let profile = content.profile();
    PageView {
        page,
        title: format!("{} — Data Scientist", profile.name),
        sections,
        footer: vec![
            "Built with Rust. Replace content and projects with your real work.".to_string(),
            format!("© 2025 {}", profile.name),
        ],
    }
}

fn heading(level: u8, text: impl Into<String>) -> Block {
    Block::Heading {
        level,
        text: text.into(),
    }
}

fn paragraph(text: impl Into<String>) -> Block {
    Block::Paragraph { text: text.into() }
}

fn bullets(items: &[&str]) -> Block {
    Block::BulletList {
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn section(blocks: Vec<Block>) -> Section {
    Section {
        anchor: None,
        blocks,
    }
}

fn home(content: &ContentStore) -> Vec<Section> {
    let profile = content.profile();
    let resume = content.resume();

    let hero = section(vec![
        heading(1, format!("Hi — I'm {} 👋", profile.name)),
        heading(3, profile.title),
        paragraph(content.intro()),
        Block::Labelled {
            label: "Areas:".to_string(),
            separator: " ".to_string(),
            text: content.areas().join(", "),
        },
        Block::Actions {
            items: vec![
                Action::Download {
                    label: "Download Resume (PDF)".to_string(),
                    href: RESUME_PDF_HREF.to_string(),
                    filename: resume.pdf.filename.to_string(),
                    media_type: resume.pdf.media_type.to_string(),
                },
                Action::Link {
                    label: "View Projects".to_string(),
                    href: format!("/pages/{}", PageId::Projects.slug()),
                },
                Action::Link {
                    label: "Contact me".to_string(),
                    href: format!("/pages/{}#contact", PageId::Contact.slug()),
                },
            ],
        },
    ]);

    let card = match content.profile_image() {
        ProfileImage::Available { .. } => ProfileCard::Image {
            src: PROFILE_IMAGE_HREF.to_string(),
            caption: profile.name.to_string(),
        },
        ProfileImage::Unavailable { .. } => ProfileCard::Text {
            name: profile.name.to_string(),
            title: profile.title.to_string(),
        },
    };

    vec![hero, section(vec![Block::ProfileCard(card)])]
}

fn about(content: &ContentStore) -> Vec<Section> {
    vec![section(vec![
        heading(2, "About Me"),
        paragraph(content.about()),
        heading(3, "Experience Snapshot"),
        bullets(content.experience_snapshot()),
    ])]
}

fn skills(content: &ContentStore) -> Vec<Section> {
    let mut blocks = vec![heading(2, "Skills & Tools")];
    blocks.extend(content.skill_categories().into_iter().map(|c| Block::SkillPills {
        label: c.label.to_string(),
        items: c.items.iter().map(|s| s.to_string()).collect(),
    }));
    vec![section(blocks)]
}

fn projects(options: &RenderOptions) -> Vec<Section> {
    let mut sections = vec![section(vec![heading(2, "Selected Projects")])];

    for (i, demo) in options.demos.iter().enumerate() {
        let mut blocks = Vec::new();
        if i > 0 {
            blocks.push(Block::Divider);
        }
        blocks.push(heading(3, demo.title()));
        if let Some(text) = demo.description() {
            blocks.push(paragraph(text));
        }

        match demo {
            ProjectDemo::IrisExploration { rows } => {
                blocks.push(species_selector(options.species));
                blocks.push(iris_preview(rows, options.species));
            }
            ProjectDemo::ModelComparison { metrics } => blocks.push(metrics_table(metrics)),
            ProjectDemo::SalesForecast { .. } => {}
        }
        blocks.push(Block::Chart(demo.chart()));
        sections.push(section(blocks));
    }

    sections
}

fn species_selector(selected: Option<Species>) -> Block {
    Block::SpeciesSelector {
        label: "Filter by species".to_string(),
        options: Species::ALL.iter().map(|s| s.to_string()).collect(),
        selected: selected.map(|s| s.to_string()),
        action: format!("/pages/{}", PageId::Projects.slug()),
    }
}

fn iris_preview(rows: &[IrisRow], species: Option<Species>) -> Block {
    let filtered = match species {
        Some(species) => filter_rows(rows, species),
        None => rows.to_vec(),
    };

    let mut columns: Vec<String> = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
    columns.push("target".to_string());

    Block::Table {
        columns,
        rows: filtered
            .iter()
            .take(IRIS_PREVIEW_ROWS)
            .map(|r| {
                let mut cells: Vec<String> = r.features().iter().map(|v| format!("{v:.1}")).collect();
                cells.push(r.species.to_string());
                cells
            })
            .collect(),
    }
}

fn metrics_table(metrics: &[ModelMetrics]) -> Block {
    Block::Table {
        columns: ["model", "accuracy", "f1", "inference_ms"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: metrics
            .iter()
            .map(|m| {
                vec![
                    m.model_name.to_string(),
                    format!("{:.2}", m.accuracy),
                    format!("{:.2}", m.f1),
                    m.inference_ms.to_string(),
                ]
            })
            .collect(),
    }
}

fn resume(content: &ContentStore) -> Vec<Section> {
    let profile = content.profile();
    let text = &content.resume().text;
    vec![section(vec![
        heading(2, "Resume & More"),
        paragraph("Download a PDF resume or view a one-page summary below."),
        Block::Labelled {
            label: profile.name.to_string(),
            separator: " — ".to_string(),
            text: "Data Scientist".to_string(),
        },
        bullets(content.resume_summary()),
        Block::Actions {
            items: vec![Action::Download {
                label: "Download Resume (TXT)".to_string(),
                href: RESUME_TEXT_HREF.to_string(),
                filename: text.filename.to_string(),
                media_type: text.media_type.to_string(),
            }],
        },
    ])]
}

fn contact(state: &ContactFormState) -> Vec<Section> {
    let (input, status, errors) = match state {
        ContactFormState::Blank => (ContactSubmission::default(), None, None),
        ContactFormState::Submitted { input, result } => match result {
            Ok(ack) => (
                // A delivered message clears the form.
                ContactSubmission::default(),
                Some(FormStatus::Sent {
                    message: ack.message.to_string(),
                }),
                None,
            ),
            Err(e) => (
                input.clone(),
                Some(FormStatus::Rejected {
                    message: "Please fix the highlighted fields and send again.".to_string(),
                }),
                Some(e),
            ),
        },
    };

    let field = |field: ContactField, label: &str, multiline: bool, value: &str| FormField {
        field,
        label: label.to_string(),
        multiline,
        value: value.to_string(),
        error: errors
            .and_then(|e| e.message_for(field))
            .map(str::to_string),
    };

    let form = ContactForm {
        action: CONTACT_ACTION.to_string(),
        fields: vec![
            field(ContactField::Name, "Your name", false, &input.name),
            field(ContactField::Email, "Your email", false, &input.email),
            field(ContactField::Message, "Message", true, &input.message),
        ],
        submit_label: "Send message".to_string(),
        status,
    };

    vec![Section {
        anchor: Some("contact".to_string()),
        blocks: vec![
            heading(2, "Contact"),
            paragraph(
                "If you'd like to work together or have questions, reach out — or send a message below.",
            ),
            Block::ContactForm(form),
        ],
    }]
}
