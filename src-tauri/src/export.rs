//! Markdown export of a brainstorm result.
//!
//! Produces a human-readable document: a header block with the three inputs
//! followed by the trends and pain-points sections.
//!
//! TODO: extend the export to steps 3-11 (ideas through roadmap); the
//! layout for the grouped and tabular sections is still undecided.

use chrono::{DateTime, Utc};

use crate::agent::types::BrainstormResult;

/// Render the export document.
pub fn render_markdown(
    result: &BrainstormResult,
    industry: &str,
    problem: &str,
    trend: &str,
) -> String {
    let mut doc = String::new();

    doc.push_str("# Brainstorm Report\n\n");
    doc.push_str(&format!("- **Industry:** {}\n", industry));
    doc.push_str(&format!("- **Problem:** {}\n", problem));
    doc.push_str(&format!("- **Trend:** {}\n\n", trend));

    doc.push_str("## Market Trends\n\n");
    if result.trends.is_empty() {
        doc.push_str("_No trends returned._\n");
    } else {
        for item in &result.trends {
            doc.push_str(&format!(
                "- **{}** ({}/100): {}\n",
                item.name, item.relevance, item.description
            ));
        }
    }
    doc.push('\n');

    doc.push_str("## Customer Pain Points\n\n");
    if result.pain_points.is_empty() {
        doc.push_str("_No pain points returned._\n");
    } else {
        for point in &result.pain_points {
            match &point.affected_segment {
                Some(segment) => doc.push_str(&format!(
                    "- **{}** ({}): {}\n",
                    point.title, segment, point.description
                )),
                None => doc.push_str(&format!("- **{}**: {}\n", point.title, point.description)),
            }
        }
    }
    doc.push('\n');

    doc
}

/// Filename embedding a sanitized industry slug and a timestamp.
pub fn suggested_filename(industry: &str, now: DateTime<Utc>) -> String {
    let slug = slugify(industry);
    let slug = if slug.is_empty() {
        "brainstorm".to_string()
    } else {
        slug
    };
    format!("ideaforge-{}-{}.md", slug, now.format("%Y%m%d-%H%M%S"))
}

/// Lowercase, alphanumerics kept, everything else collapsed to single dashes.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
