//! Benchmarks for the sanitize + highlight hot paths
//!
//! Run with: cargo bench

use madam::{highlight_content, sanitize, HighlightMarker};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const LINE: &str = "A man a plan a canal Panama wow 1221 hello madam, level";

#[divan::bench(args = [100, 1_000, 10_000])]
fn sanitize_paste(line_count: usize) {
    let raw = format!("{}\n", LINE).repeat(line_count);
    divan::black_box(sanitize(&raw));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn highlight_snapshot(line_count: usize) {
    let raw = format!("{}\n", LINE).repeat(line_count);
    let lines = sanitize(&raw);
    let marker = HighlightMarker::default();

    divan::black_box(highlight_content(&lines, &marker));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn paste_to_mirror(line_count: usize) {
    let raw = format!("{}&nbsp;<{}>\n", LINE, LINE).repeat(line_count);
    let marker = HighlightMarker::default();

    let lines = sanitize(&raw);
    divan::black_box(highlight_content(&lines, &marker));
}
