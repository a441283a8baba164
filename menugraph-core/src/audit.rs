use crate::detect::classify;
use crate::graph::assemble;
use crate::report::{MenuReport, report};
use indicatif::{ProgressBar, ProgressStyle};
use menugraph_fetcher::{FetchError, PageEnvelope, PageSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Options for configuring an audit run
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    pub show_progress_bars: bool,
}

/// Callback invoked after each page arrives with `(page, pages_needed)`
pub type AuditProgressCallback = Arc<dyn Fn(u32, u32) + Send + Sync>;

/// Work out how many pages the first response says there are.
pub fn pages_needed(first: &PageEnvelope) -> Result<u32, FetchError> {
    let pagination = first.pagination.ok_or_else(|| FetchError::MalformedPage {
        page: 1,
        reason: "missing pagination".to_string(),
    })?;

    pagination
        .pages_needed()
        .ok_or_else(|| FetchError::MalformedPage {
            page: 1,
            reason: format!("per_page is 0 with total {}", pagination.total),
        })
}

/// Fetch every page, one at a time, in page order.
///
/// Page 1 is requested once and its result reused. The first failure aborts
/// the loop and nothing fetched so far is returned.
pub async fn fetch_all_pages<S: PageSource>(
    source: &S,
    progress_callback: Option<AuditProgressCallback>,
) -> Result<Vec<PageEnvelope>, FetchError> {
    let first = source.fetch_page(1).await?;
    let needed = pages_needed(&first)?;
    info!("Pagination reports {} page(s)", needed);

    if needed == 0 {
        if !first.menus.is_empty() {
            warn!(
                "Page 1 carries {} menus but reports a total of 0; ignoring them",
                first.menus.len()
            );
        }
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    pages.push(first);
    if let Some(ref callback) = progress_callback {
        callback(1, needed);
    }

    for page in 2..=needed {
        let envelope = source.fetch_page(page).await?;
        pages.push(envelope);
        if let Some(ref callback) = progress_callback {
            callback(page, needed);
        }
    }

    Ok(pages)
}

/// Execute a full audit: fetch, assemble, classify, report.
pub async fn execute_audit<S: PageSource>(
    source: &S,
    options: AuditOptions,
) -> Result<MenuReport, FetchError> {
    let AuditOptions { show_progress_bars } = options;

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Fetching page 1...");
        Some(Arc::new(pb))
    } else {
        None
    };

    let progress_callback: Option<AuditProgressCallback> = progress_bar.clone().map(|pb| {
        Arc::new(move |page: u32, needed: u32| {
            pb.set_message(format!("Fetched page {}/{}", page, needed));
        }) as AuditProgressCallback
    });

    let pages = fetch_all_pages(source, progress_callback).await;

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }
    let pages = pages?;

    let graph = assemble(&pages);
    let results = classify(&graph);
    let menu_report = report(&results);

    info!(
        "Classified {} menus: {} valid, {} invalid",
        menu_report.total(),
        menu_report.valid_menus.len(),
        menu_report.invalid_menus.len()
    );

    Ok(menu_report)
}
