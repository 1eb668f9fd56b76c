//! Plain-text formatting of the static content sections.

use crate::core::error::CommandError;
use crate::models::{Content, Project, Theme};

const RULE_WIDTH: usize = 60;
const BAR_CELLS: usize = 20;
const PREVIEW_LEN: usize = 100;

fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(RULE_WIDTH))
}

pub fn about(content: &Content) -> String {
    let p = &content.profile;
    let paragraphs = content
        .about
        .description
        .iter()
        .map(|para| format!("  {}", para))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{}\n{}\n{}\n\n{}\n\n{}\n\nLocation:  {}\nAge:       {}\nEducation: {}\nFreelance: {}",
        heading("About Me"),
        p.name,
        p.role,
        content.about.tagline,
        paragraphs,
        p.city,
        p.age,
        p.degree,
        p.freelance
    )
}

pub fn skills(content: &Content, detailed: bool) -> String {
    let mut out = heading("Technical Skills");
    out.push('\n');

    if detailed {
        let rows: Vec<String> = content
            .skills
            .iter()
            .map(|skill| {
                let filled = (usize::from(skill.level) / 5).min(BAR_CELLS);
                format!(
                    "{:<20} [{}{}] {}%",
                    skill.name,
                    "█".repeat(filled),
                    "░".repeat(BAR_CELLS - filled),
                    skill.level
                )
            })
            .collect();
        out.push_str(&rows.join("\n"));
    } else {
        let rows: Vec<String> = content
            .skills
            .iter()
            .map(|skill| format!("  • {} ({}%)", skill.name, skill.level))
            .collect();
        out.push_str(&rows.join("\n"));
        out.push_str("\n\nTip: Use 'skills --list' for a detailed view");
    }
    out
}

fn preview(description: &str) -> String {
    if description.chars().count() > PREVIEW_LEN {
        let cut: String = description.chars().take(PREVIEW_LEN).collect();
        format!("{}...", cut)
    } else {
        description.to_string()
    }
}

pub fn projects(content: &Content) -> String {
    let mut out = heading("Portfolio Projects");
    for (i, project) in content.projects.iter().enumerate() {
        out.push_str(&format!(
            "\n[{}] {}\n    {}\n    {}\n",
            i + 1,
            project.title,
            preview(&project.description),
            project.url
        ));
    }
    out.push_str("\nTip: Use 'projects [number]' to view details");
    out
}

/// Look up a project by its 1-based position, given as the raw token.
pub fn project_detail(content: &Content, raw: &str) -> Result<String, CommandError> {
    let project = raw
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| content.projects.get(idx))
        .ok_or_else(|| CommandError::ProjectIndexOutOfRange(raw.to_string()))?;

    Ok(format_project(project))
}

fn format_project(project: &Project) -> String {
    format!(
        "{}\nDescription:\n  {}\n\nTechnologies:\n  {}\n\nLive URL:\n  {}",
        heading(&project.title),
        project.description,
        project.tech.join(", "),
        project.url
    )
}

pub fn experience(content: &Content) -> String {
    let mut out = heading("Work Experience");
    for exp in &content.experience {
        out.push_str(&format!(
            "\n{}\n{} | {}\n\n",
            exp.title, exp.period, exp.location
        ));
        for h in &exp.highlights {
            out.push_str(&format!("  ✓ {}\n", h));
        }
    }
    out.trim_end().to_string()
}

pub fn services(content: &Content) -> String {
    let mut out = heading("Services I Offer");
    for service in &content.services {
        out.push_str(&format!("\n▸ {}\n  {}\n", service.title, service.description));
    }
    out.trim_end().to_string()
}

pub fn contact(content: &Content) -> String {
    let p = &content.profile;
    format!(
        "{}\nEmail:    {}\nPhone:    {}\nLocation: {}\nChat:     {}\n\nUse 'social' to see all social media links",
        heading("Contact Information"),
        p.email,
        p.phone,
        p.city,
        p.chat
    )
}

pub fn social(content: &Content) -> String {
    let p = &content.profile;
    format!(
        "{}\nGitHub:    {}\nLinkedIn:  {}\nWebsite:   {}",
        heading("Social Media Links"),
        p.github,
        p.linkedin,
        p.website
    )
}

pub fn stats(content: &Content) -> String {
    let s = &content.stats;
    format!(
        "{}\nHappy Clients:        {}\nCompleted Projects:   {}\nHours of Work:        {}",
        heading("Statistics"),
        s.happy_clients,
        s.completed_projects,
        s.hours_of_work
    )
}

pub fn resume() -> String {
    format!(
        "{}\nUse the following commands to explore my resume:\n  • about      - Personal information\n  • skills     - Technical skills\n  • experience - Work experience\n  • projects   - Portfolio projects\n  • services   - Services I offer",
        heading("Resume")
    )
}

pub fn themes() -> String {
    let names: Vec<String> = Theme::ALL
        .iter()
        .map(|t| match t {
            Theme::Default => format!("  • {} (green)", t),
            _ => format!("  • {}", t),
        })
        .collect();
    format!(
        "Available themes:\n{}\n\nTheme changing coming soon!",
        names.join("\n")
    )
}

pub const HACK: &str = "Initializing hack sequence...\n[████████████████████] 100%\nACCESS DENIED\nJust kidding! But nice attempt 😄";

pub const SUDO_DENIED: &str =
    "🛑 Nice try, hacker! 🛑\nPermission denied. You don't have the power here! 😎";
