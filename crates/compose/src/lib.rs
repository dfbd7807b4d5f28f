//! Printable document composition.
//!
//! Wraps rendered body HTML in a full document shell: a `@page` rule sized
//! to a named paper preset, page margins, and (for live printing only) a
//! script that opens the browser print dialog on load and closes the
//! window afterwards. The same shell without the script serves as the
//! in-app preview document, e.g. for an iframe's `srcDoc`.

mod margins;
mod paper;

pub use margins::{DEFAULT_MARGIN_MM, Margins};
pub use paper::{PaperPreset, preset};

/// Options for [`compose`].
#[derive(Debug, Clone, Copy)]
pub struct ComposeOptions<'a> {
    /// Paper preset key; unknown keys fall back to A4.
    pub paper_size: &'a str,
    /// Page margins; every side defaults to 10mm when absent.
    pub margin: Option<Margins>,
    /// When true, the document triggers the print dialog on load.
    pub auto_print: bool,
}

/// The fire-and-forget print trigger. Printing success is never observed;
/// the window just closes itself shortly after the dialog returns.
const AUTO_PRINT_SCRIPT: &str = "<script>\n  window.onload = function () {\n    window.focus();\n    window.print();\n    setTimeout(function () { window.close(); }, 500);\n  };\n</script>\n";

/// Composes a complete printable HTML document around `body_html`.
///
/// The body markup is embedded verbatim; it is the renderer's output and
/// already carries whatever structure the template author wrote.
pub fn compose(body_html: &str, options: &ComposeOptions) -> String {
    let preset = paper::preset(options.paper_size);
    let margin = options.margin.unwrap_or_default().css();
    let script = if options.auto_print { AUTO_PRINT_SCRIPT } else { "" };

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <style>\n  \
           @page {{ size: {width} auto; margin: {margin}; }}\n  \
           * {{ box-sizing: border-box; }}\n  \
           body {{ margin: {margin}; width: {width}; font-family: Arial, sans-serif; }}\n\
         </style>\n\
         </head>\n\
         <body class=\"{body_class}\">\n\
         {body_html}\n\
         {script}</body>\n\
         </html>\n",
        width = preset.width,
        margin = margin,
        body_class = preset.body_class,
        body_html = body_html,
        script = script,
    )
}
