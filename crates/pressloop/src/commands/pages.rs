//! Pages command - show how each item is segmented

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use pressloop_core::ResultCursor;
use serde::Serialize;
use std::path::PathBuf;

/// Segmentation of one item
#[derive(Debug, Serialize)]
struct ItemPages {
    id: u64,
    title: String,
    pages: Vec<PageSummary>,
}

/// One page and its teaser split
#[derive(Debug, Serialize)]
struct PageSummary {
    number: usize,
    has_more_marker: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    more_label: Option<String>,
    teaser_suppressed: bool,
    chars: usize,
}

/// List pages and more-markers of every item in `feed`
pub fn run(feed: PathBuf, json: bool, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let ctx = Context::new(&feed, config, verbose)?;
    let summaries = summarize(&ctx);

    if json {
        return print_json(&summaries);
    }

    if summaries.is_empty() {
        println!("{} No items in feed", "!".yellow());
        return Ok(());
    }

    for item in &summaries {
        print_text(&format!(
            "{} {} (#{}): {} page(s)",
            "✓".green().bold(),
            item.title.bold(),
            item.id,
            item.pages.len()
        ))?;

        for page in &item.pages {
            let mut line = format!("  {:>3}  {} chars", page.number, page.chars);
            if page.has_more_marker {
                let label = page.more_label.as_deref().unwrap_or("default label");
                line.push_str(&format!("  more: {}", label.cyan()));
            }
            if page.teaser_suppressed {
                line.push_str(&format!("  {}", "noteaser".yellow()));
            }
            print_text(&line)?;
        }
    }

    Ok(())
}

fn summarize(ctx: &Context) -> Vec<ItemPages> {
    let markers = ctx.loop_context.markers();
    let mut cursor = ResultCursor::new(&ctx.loop_context, ctx.items.clone());
    let mut summaries = Vec::with_capacity(cursor.len());

    cursor.walk(&ctx.hooks, |item, context| {
        let pages = context
            .pages()
            .iter()
            .enumerate()
            .map(|(index, page)| {
                let split = markers.split_teaser(page);
                PageSummary {
                    number: index + 1,
                    has_more_marker: split.has_more_marker,
                    more_label: (!split.label.is_empty()).then_some(split.label),
                    teaser_suppressed: split.suppressed,
                    chars: page.chars().count(),
                }
            })
            .collect();

        summaries.push(ItemPages {
            id: item.id,
            title: item.title.clone(),
            pages,
        });
    });

    summaries
}
