//! HTML document writer for a [`PageView`].

use std::fmt::Write;

use crate::navigation::PageId;
use crate::render::svg::render_chart;
use crate::render::tree::{
    Action, Block, ContactForm, FormStatus, PageView, ProfileCard, Section,
};

const STYLE: &str = r#"
.app { display:flex; min-height:100vh; background:linear-gradient(180deg,#0f172a 0%,#071129 100%); color:#e6eef8; font-family:system-ui,-apple-system,'Segoe UI',sans-serif; margin:0; }
body { margin:0; }
a { color:#8ab4ff; }
.sidebar { width:200px; padding:24px 16px; background:rgba(255,255,255,0.03); }
.sidebar a { display:block; padding:6px 10px; border-radius:8px; text-decoration:none; color:#e6eef8; }
.sidebar a.active { background:rgba(255,255,255,0.08); font-weight:700; }
main { flex:1; padding:30px; max-width:1100px; }
.card { background:rgba(255,255,255,0.04); padding:18px; border-radius:12px; box-shadow:0 6px 18px rgba(2,6,23,0.6); margin-bottom:16px; }
.muted { color:#9fb0d6; }
.skill-pill { display:inline-block; margin:4px 6px; padding:6px 10px; background:rgba(255,255,255,0.03); border-radius:999px; border:1px solid rgba(255,255,255,0.05); }
.actions a { display:inline-block; margin-right:12px; padding:8px 14px; border-radius:8px; border:1px solid rgba(255,255,255,0.15); text-decoration:none; }
.profile img { width:220px; height:220px; object-fit:cover; border-radius:50%; box-shadow:0 4px 15px rgba(0,0,0,0.4); }
table { border-collapse:collapse; margin:8px 0; }
td, th { padding:4px 10px; border-bottom:1px solid rgba(255,255,255,0.08); text-align:left; }
input, textarea { display:block; width:100%; max-width:480px; background:rgba(255,255,255,0.02); color:#e6eef8; border:1px solid rgba(255,255,255,0.15); border-radius:6px; padding:6px; margin:4px 0 10px; }
.field-error { color:#ff8a8a; font-size:0.9em; }
.notice-sent { color:#7ee2a8; }
.notice-rejected { color:#ff8a8a; }
svg.chart { width:100%; max-width:640px; height:auto; }
svg.chart text { fill:#e6eef8; font-size:11px; }
svg.chart .chart-title { font-size:13px; font-weight:700; }
footer { margin-top:32px; color:#9fb0d6; border-top:1px solid rgba(255,255,255,0.08); padding-top:12px; }
@media (max-width: 768px) {
  .app { flex-direction:column; }
  .sidebar { width:auto; }
  h1 { font-size:1.8rem; }
  h2 { font-size:1.4rem; }
  main { padding:15px; }
}
"#;

/// Escapes text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_document(view: &PageView) -> String {
    let mut body = String::new();
    for section in &view.sections {
        write_section(&mut body, section);
    }

    let footer: String = view
        .footer
        .iter()
        .map(|line| format!("<p>{}</p>", escape(line)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="app">
{nav}
<main>
{body}
<footer>{footer}</footer>
</main>
</div>
</body>
</html>"#,
        title = escape(&view.title),
        nav = navigation(view.page),
    )
}

fn navigation(current: PageId) -> String {
    let links: String = PageId::ALL
        .iter()
        .map(|page| {
            let class = if *page == current { " class=\"active\"" } else { "" };
            format!(
                r#"<a href="/pages/{}"{class}>{}</a>"#,
                page.slug(),
                page.label()
            )
        })
        .collect();
    format!(r#"<nav class="sidebar"><h2>Navigation</h2>{links}</nav>"#)
}

fn write_section(out: &mut String, section: &Section) {
    match &section.anchor {
        Some(id) => {
            let _ = write!(out, r#"<section id="{}">"#, escape(id));
        }
        None => out.push_str("<section>"),
    }
    for block in &section.blocks {
        write_block(out, block);
    }
    out.push_str("</section>\n");
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            let _ = write!(out, "<h{level}>{}</h{level}>", escape(text));
        }
        Block::Paragraph { text } => {
            let _ = write!(out, "<p>{}</p>", escape(text));
        }
        Block::Labelled {
            label,
            separator,
            text,
        } => {
            let _ = write!(
                out,
                "<p><strong>{}</strong>{}{}</p>",
                escape(label),
                escape(separator),
                escape(text)
            );
        }
        Block::BulletList { items } => {
            out.push_str("<ul>");
            for item in items {
                let _ = write!(out, "<li>{}</li>", escape(item));
            }
            out.push_str("</ul>");
        }
        Block::SkillPills { label, items } => {
            let _ = write!(out, r#"<div class="card"><strong>{}</strong><div>"#, escape(label));
            for item in items {
                let _ = write!(out, r#"<span class="skill-pill">{}</span>"#, escape(item));
            }
            out.push_str("</div></div>");
        }
        Block::ProfileCard(card) => write_profile_card(out, card),
        Block::Actions { items } => {
            out.push_str(r#"<div class="actions">"#);
            for action in items {
                match action {
                    Action::Download {
                        label,
                        href,
                        filename,
                        ..
                    } => {
                        let _ = write!(
                            out,
                            r#"<a href="{}" download="{}">{}</a>"#,
                            escape(href),
                            escape(filename),
                            escape(label)
                        );
                    }
                    Action::Link { label, href } => {
                        let _ = write!(out, r#"<a href="{}">{}</a>"#, escape(href), escape(label));
                    }
                }
            }
            out.push_str("</div>");
        }
        Block::Table { columns, rows } => {
            out.push_str("<table><thead><tr>");
            for column in columns {
                let _ = write!(out, "<th>{}</th>", escape(column));
            }
            out.push_str("</tr></thead><tbody>");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    let _ = write!(out, "<td>{}</td>", escape(cell));
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table>");
        }
        Block::Chart(panel) => {
            let _ = write!(out, r#"<figure class="card">{}</figure>"#, render_chart(panel));
        }
        Block::SpeciesSelector {
            label,
            options,
            selected,
            action,
        } => {
            let _ = write!(
                out,
                r#"<form method="get" action="{}"><label>{} <select name="species" onchange="this.form.submit()"><option value="">all</option>"#,
                escape(action),
                escape(label)
            );
            for option in options {
                let attr = if selected.as_deref() == Some(option.as_str()) {
                    " selected"
                } else {
                    ""
                };
                let _ = write!(
                    out,
                    r#"<option value="{0}"{attr}>{0}</option>"#,
                    escape(option)
                );
            }
            out.push_str(r#"</select></label><noscript><button type="submit">Apply</button></noscript></form>"#);
        }
        Block::ContactForm(form) => write_contact_form(out, form),
        Block::Divider => out.push_str("<hr>"),
    }
}

fn write_profile_card(out: &mut String, card: &ProfileCard) {
    out.push_str(r#"<div class="card profile" style="text-align:center">"#);
    match card {
        ProfileCard::Image { src, caption } => {
            let _ = write!(
                out,
                r#"<figure><img src="{}" alt="{1}"><figcaption>{1}</figcaption></figure>"#,
                escape(src),
                escape(caption)
            );
        }
        ProfileCard::Text { name, title } => {
            let _ = write!(
                out,
                r#"<h3>{}</h3><p class="muted">{}</p>"#,
                escape(name),
                escape(title)
            );
        }
    }
    out.push_str("</div>");
}

fn write_contact_form(out: &mut String, form: &ContactForm) {
    match &form.status {
        Some(FormStatus::Sent { message }) => {
            let _ = write!(out, r#"<p class="notice-sent">{}</p>"#, escape(message));
        }
        Some(FormStatus::Rejected { message }) => {
            let _ = write!(out, r#"<p class="notice-rejected">{}</p>"#, escape(message));
        }
        None => {}
    }

    let _ = write!(
        out,
        r#"<form class="card" method="post" action="{}">"#,
        escape(&form.action)
    );
    for field in &form.fields {
        let name = field.field.as_str();
        let _ = write!(out, r#"<label for="{name}">{}</label>"#, escape(&field.label));
        if field.multiline {
            let _ = write!(
                out,
                r#"<textarea id="{name}" name="{name}" rows="5">{}</textarea>"#,
                escape(&field.value)
            );
        } else {
            let _ = write!(
                out,
                r#"<input id="{name}" name="{name}" value="{}">"#,
                escape(&field.value)
            );
        }
        if let Some(error) = &field.error {
            let _ = write!(out, r#"<p class="field-error">{}</p>"#, escape(error));
        }
    }
    let _ = write!(
        out,
        r#"<button type="submit">{}</button></form>"#,
        escape(&form.submit_label)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::demos::generate_project_demos;
    use crate::render::{render_page, RenderOptions};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn document(page: PageId, options: &RenderOptions) -> String {
        render_document(&render_page(page, &ContentStore::without_assets(), options))
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_navigation_marks_current_page() {
        let html = document(PageId::About, &RenderOptions::default());
        assert!(html.contains(r#"<a href="/pages/about" class="active">About</a>"#));
        assert!(html.contains(r#"<a href="/pages/home">Home</a>"#));
    }

    #[test]
    fn test_home_text_fallback_rendered() {
        let html = document(PageId::Home, &RenderOptions::default());
        assert!(html.contains("<h3>Mohd Azam</h3>"));
        assert!(!html.contains("<img"));
        assert!(html.contains(r#"download="My_resume.pdf""#));
    }

    #[test]
    fn test_projects_document_embeds_three_charts() {
        let options = RenderOptions::default()
            .with_demos(generate_project_demos(&mut StdRng::seed_from_u64(9)));
        let html = document(PageId::Projects, &options);
        assert_eq!(html.matches("<svg class=\"chart").count(), 3);
        assert!(html.contains(r#"<select name="species""#));
    }

    #[test]
    fn test_contact_document_has_form_fields() {
        let html = document(PageId::Contact, &RenderOptions::default());
        assert!(html.contains(r#"<section id="contact">"#));
        assert!(html.contains(r#"<input id="name" name="name" value="">"#));
        assert!(html.contains(r#"<input id="email" name="email" value="">"#));
        assert!(html.contains(r#"<textarea id="message" name="message""#));
    }

    #[test]
    fn test_resume_name_line_uses_dash_separator() {
        let html = document(PageId::Resume, &RenderOptions::default());
        assert!(html.contains("<p><strong>Mohd Azam</strong> — Data Scientist</p>"));
        assert!(!html.contains("Mohd Azam:"));
    }

    #[test]
    fn test_home_areas_line_keeps_colon_in_label() {
        let html = document(PageId::Home, &RenderOptions::default());
        assert!(html.contains("<p><strong>Areas:</strong> "));
    }

    #[test]
    fn test_footer_present() {
        let html = document(PageId::Skills, &RenderOptions::default());
        assert!(html.contains("© 2025 Mohd Azam"));
        assert!(html.contains(r#"<span class="skill-pill">Airflow</span>"#));
    }
}
