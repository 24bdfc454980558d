use indicatif::ProgressStyle;
use tracing::{info_span, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str = "[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}";

/// A span carrying a progress bar for `len` units of work. Returns `None` when there is
/// nothing to do.
///
/// The bar is drawn by the `IndicatifLayer` installed in [`crate::utils::logging`] while
/// the span is entered. Without that layer the span is inert.
pub fn progress_span(len: u64, msg: &str) -> Option<Span> {
    if len == 0 {
        return None;
    }

    let span = info_span!("progress");
    if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
        span.pb_set_style(&style.progress_chars("##-"));
    }
    span.pb_set_length(len);
    span.pb_set_message(msg);

    Some(span)
}
