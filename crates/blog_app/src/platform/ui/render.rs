use std::fmt::Write;

use blog_core::{AppViewModel, Page};

use super::constants::*;

pub fn render(view: &AppViewModel) -> String {
    match view.page {
        Page::Blog => render_blog(view),
        Page::Admin => render_admin(view),
    }
}

fn render_blog(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  {BLOG_HEADING}");
    let _ = writeln!(out, "  {BLOG_TAGLINE}");
    let _ = writeln!(out, "  [admin] Generate New Articles");
    let _ = writeln!(out, "{RULE}");

    if view.loading {
        let _ = writeln!(out, "  {LOADING}");
        return out;
    }
    if view.articles.is_empty() {
        let _ = writeln!(out, "  {BLOG_EMPTY}");
        let _ = writeln!(out, "  {BLOG_EMPTY_HINT}");
        return out;
    }

    for article in &view.articles {
        let _ = writeln!(out, "{THIN_RULE}");
        let _ = writeln!(out, "[{}] {}", article.index, article.title);
        let _ = writeln!(out, "    {}   (delete {})", article.date, article.index);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", article.content);
    }
    let _ = writeln!(out, "{THIN_RULE}");
    out
}

fn render_admin(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  <- Back to Blog [blog]");
    let _ = writeln!(out, "  {ADMIN_HEADING}");
    let _ = writeln!(out, "  {ADMIN_TAGLINE}");
    let _ = writeln!(out, "{RULE}");

    let _ = writeln!(out, "{LABEL_TITLES}:");
    write_field(&mut out, &view.titles_input, TITLES_PLACEHOLDER);
    let _ = writeln!(out, "{LABEL_DETAILS}:");
    write_field(&mut out, &view.details_input, DETAILS_PLACEHOLDER);
    let _ = writeln!(out);

    if view.generating {
        let _ = writeln!(out, "  ... {GENERATING}");
        let _ = writeln!(out, "  {GENERATING_HINT}");
    } else if view.can_generate {
        let _ = writeln!(out, "  [generate] Generate Articles");
    } else {
        let _ = writeln!(out, "  [generate] Generate Articles (add titles first)");
    }

    if view.article_count > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "Existing Articles ({})", view.article_count);
        for article in &view.articles {
            let _ = writeln!(out, "  [{}] {}", article.index, article.title);
        }
    }
    out
}

fn write_field(out: &mut String, value: &str, placeholder: &str) {
    if value.trim().is_empty() {
        let _ = writeln!(out, "  | ({placeholder})");
        return;
    }
    for line in value.lines() {
        let _ = writeln!(out, "  | {line}");
    }
}
