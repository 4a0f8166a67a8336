use indicatif::{ProgressBar, ProgressStyle};
use refold::engine::progress::{Progress, ProgressCallback};

pub fn design_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} designs {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> "),
    );
    bar
}

pub fn progress_callback(bar: &ProgressBar) -> ProgressCallback<'static> {
    let bar = bar.clone();
    Box::new(move |event| match event {
        Progress::SearchStart { total } => bar.set_length(total),
        Progress::DesignAccepted { .. } => bar.inc(1),
        Progress::SearchFinish => bar.finish_with_message("done"),
        Progress::Message(text) => bar.set_message(text),
    })
}
