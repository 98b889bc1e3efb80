pub use indicatif::ProgressBar;
pub use indicatif::ProgressStyle;

/// Progress bar for `size` rows, hidden unless informational logging is on.
pub fn for_rows(size: usize, prefix: &str) -> ProgressBar {
    if !log::log_enabled!(log::Level::Info) {
        return ProgressBar::hidden();
    }

    let template = format!("{}{}", prefix, "{wide_bar} {pos}/{len} [{elapsed} elapsed; {eta} left]");

    let progress = ProgressBar::new(size as u64);
    progress.set_draw_delta(u64::max(1, size as u64 / 1000));
    progress.set_style(ProgressStyle::default_bar().template(&template));

    progress
}
