//! Render tree: what a page shows, independent of how it is drawn.

use serde::Serialize;

use crate::contact::ContactField;
use crate::demos::chart::ChartPanel;
use crate::navigation::PageId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub page: PageId,
    pub title: String,
    pub sections: Vec<Section>,
    pub footer: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Anchor id, e.g. `contact`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    /// Bold label, then `separator` and text on one line.
    Labelled {
        label: String,
        separator: String,
        text: String,
    },
    BulletList {
        items: Vec<String>,
    },
    SkillPills {
        label: String,
        items: Vec<String>,
    },
    ProfileCard(ProfileCard),
    Actions {
        items: Vec<Action>,
    },
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Chart(ChartPanel),
    SpeciesSelector {
        label: String,
        options: Vec<String>,
        selected: Option<String>,
        action: String,
    },
    ContactForm(ContactForm),
    Divider,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileCard {
    Image { src: String, caption: String },
    /// Shown when the profile image could not be loaded.
    Text { name: String, title: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    Download {
        label: String,
        href: String,
        filename: String,
        media_type: String,
    },
    Link {
        label: String,
        href: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactForm {
    pub action: String,
    pub fields: Vec<FormField>,
    pub submit_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FormStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub field: ContactField,
    pub label: String,
    pub multiline: bool,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FormStatus {
    Sent { message: String },
    Rejected { message: String },
}

#[cfg(test)]
impl PageView {
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartPanel> {
        self.blocks().filter_map(|b| match b {
            Block::Chart(panel) => Some(panel),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.blocks().next().is_none()
    }
}
