//! Server-rendered post detail page.

use axum::extract::{Path, State};
use axum::response::Html;

use inkpost_core::error::AppError;
use inkpost_entity::post::Post;

use crate::extractors::parse_uuid;
use crate::state::AppState;

const POST_TEMPLATE: &str = include_str!("../../templates/post_details.html");

/// GET /post/{id}
pub async fn post_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_uuid(&id)?;
    let post = state.post_service.get(id).await?;
    Ok(Html(render_post(POST_TEMPLATE, &post)))
}

/// Substitutes the `${post.*}` placeholders in `template` in one pass, so
/// substituted text is never rescanned. Every value is HTML-escaped;
/// unknown placeholders are left as-is.
pub fn render_post(template: &str, post: &Post) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${post.") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };
        let value = match &tail[2..end] {
            "post.title" => Some(&post.title),
            "post.content" => Some(&post.content),
            "post.author" => Some(&post.author),
            "post.timestamp" => Some(&post.timestamp),
            "post.imageUrl" => Some(&post.image_url),
            _ => None,
        };
        match value {
            Some(v) => out.push_str(&escape_html(v)),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
