//! Render command - print each item's body the way the loop renders it

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use pressloop_core::ResultCursor;
use pressloop_core::render::{RenderOptions, RenderedBody, render_body};
use std::path::PathBuf;

/// Render every item of `feed`
///
/// # Arguments
///
/// * `feed` - Feed file to iterate
/// * `page` - Page to render for each item, clamped per item
/// * `full` - Render the full view instead of the teaser view
/// * `json` - Output as JSON if true
/// * `config` - Optional explicit configuration file
/// * `verbose` - Enable verbose output if true
pub fn run(
    feed: PathBuf,
    page: i64,
    full: bool,
    json: bool,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(&feed, config, verbose)?;
    let rendered = render_feed(&ctx, page, full);

    if json {
        return print_json(&rendered);
    }

    if ctx.verbose {
        println!(
            "{} Rendering {} item(s) from {}",
            "→".cyan(),
            rendered.len(),
            feed.display()
        );
    }

    if rendered.is_empty() {
        println!("{} No items in feed", "!".yellow());
        return Ok(());
    }

    for body in &rendered {
        render_human(body)?;
    }

    Ok(())
}

fn render_feed(ctx: &Context, page: i64, full: bool) -> Vec<RenderedBody> {
    let options = RenderOptions::from(&ctx.config.render);
    let mut cursor = ResultCursor::new(&ctx.loop_context, ctx.items.clone());
    let mut rendered = Vec::with_capacity(cursor.len());

    cursor.walk(&ctx.hooks, |_, context| {
        context.set_page(page);
        context.show_more(full);
        rendered.extend(render_body(context, &ctx.hooks, &options));
    });

    rendered
}

fn render_human(body: &RenderedBody) -> Result<()> {
    let position = format!("#{} page {}/{}", body.item_id, body.page, body.pages);
    print_text(&format!(
        "{} {} {}",
        "■".cyan(),
        body.title.bold(),
        position.dimmed()
    ))?;
    print_text(&body.body)?;
    print_text("")?;
    Ok(())
}
