use crate::cli::SplitMethod;
use crate::output::OutputPlan;
use crate::page_range::{chunk_spans, resolve_token, PageSpan, RangeError};
use crate::pdf::PdfDocument;
use anyhow::Result;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    pub ordinal: usize,
    pub path: PathBuf,
    pub span: PageSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRange {
    pub ordinal: usize,
    pub error: RangeError,
}

/// What a split produced. Ordinals are 1-based.
#[derive(Debug, Default)]
pub struct SplitReport {
    pub created: Vec<CreatedFile>,
    pub skipped: Vec<SkippedRange>,
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    prefix: &str,
    method: SplitMethod,
) -> Result<()> {
    let input = input.as_ref();

    if !input.exists() {
        println!("Error: Input file '{}' not found.", input.display());
        return Ok(());
    }

    info!(input = %input.display(), ?method, "dispatching split");

    let report = match method {
        SplitMethod::ByCount(pages_per_file) => {
            split_by_page_count(input, &output_dir, pages_per_file, prefix)?
        }
        SplitMethod::ByRanges(ranges) => split_by_ranges(input, &output_dir, &ranges, prefix)?,
    };

    for file in &report.created {
        debug!(
            ordinal = file.ordinal,
            path = %file.path.display(),
            pages = %file.span.display_range(),
            "created"
        );
    }
    for skipped in &report.skipped {
        debug!(ordinal = skipped.ordinal, reason = %skipped.error, "skipped");
    }
    println!("PDF splitting complete!");

    Ok(())
}

/// Split `input` into consecutive files of `pages_per_file` pages each
pub fn split_by_page_count<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    pages_per_file: NonZeroU32,
    prefix: &str,
) -> Result<SplitReport> {
    let input = input.as_ref();
    let plan = OutputPlan::new(output_dir, prefix);
    plan.prepare()?;

    let doc = PdfDocument::open(input)?;
    let total_pages = doc.page_count();
    let spans = chunk_spans(total_pages, pages_per_file);

    println!(
        "Splitting {} ({} pages) into {} files...",
        input.display(),
        total_pages,
        spans.len()
    );

    let mut report = SplitReport::default();
    for (i, span) in spans.into_iter().enumerate() {
        report.created.push(write_span(&doc, &plan, i + 1, span)?);
    }

    Ok(report)
}

/// Split `input` into one file per valid "start-end" token. A skipped
/// token still uses up its ordinal, so names line up with the token list.
pub fn split_by_ranges<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    ranges: &[String],
    prefix: &str,
) -> Result<SplitReport> {
    let input = input.as_ref();
    let plan = OutputPlan::new(output_dir, prefix);
    plan.prepare()?;

    let doc = PdfDocument::open(input)?;
    let total_pages = doc.page_count();

    println!(
        "Splitting {} ({} pages) into {} files...",
        input.display(),
        total_pages,
        ranges.len()
    );

    let mut report = SplitReport::default();
    for (i, token) in ranges.iter().enumerate() {
        let ordinal = i + 1;
        match resolve_token(token, total_pages) {
            Ok(span) => report.created.push(write_span(&doc, &plan, ordinal, span)?),
            Err(error) => {
                debug!(token = %token, ordinal, "skipping page range");
                println!("Warning: {}", error);
                report.skipped.push(SkippedRange { ordinal, error });
            }
        }
    }

    Ok(report)
}

fn write_span(
    doc: &PdfDocument,
    plan: &OutputPlan,
    ordinal: usize,
    span: PageSpan,
) -> Result<CreatedFile> {
    let path = plan.path_for(ordinal);
    debug!(ordinal, start = span.start, end = span.end, "writing output");

    let mut new_doc = doc.extract_span(span)?;
    PdfDocument::save(&mut new_doc, &path)?;

    println!(
        "Created: {} (Pages {})",
        path.display(),
        span.display_range()
    );

    Ok(CreatedFile {
        ordinal,
        path,
        span,
    })
}
