//! Markdown rendering for CMS article bodies.

use comrak::{ComrakOptions, markdown_to_html as comrak_render};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    // CMS content is untrusted; raw HTML stays escaped.
    options.render.unsafe_ = false;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    comrak_render(md, &MARKDOWN_OPTIONS)
}
