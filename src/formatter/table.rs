//! Table mode: arrays of objects as nested lists
//!
//! Every object of the array becomes one `<li>` holding its elements, and the
//! whole array is wrapped in a single `<ul>`. An array found under a key is
//! rendered the same way and placed inside that key's element, so nesting
//! goes as deep as the data does.

use super::{expect_mapping, HtmlFormatter};
use crate::conversion::ConversionResult;
use crate::parser::DataNode;

impl HtmlFormatter<'_> {
    pub(super) fn render_table(
        &mut self,
        items: &[DataNode],
        out: &mut String,
    ) -> ConversionResult<()> {
        out.push_str("<ul>");
        for (index, item) in items.iter().enumerate() {
            let entries = expect_mapping(index, item)?;
            out.push_str("<li>");
            // nested arrays come back through render_sequence as markup
            self.render_mapping(entries, out)?;
            out.push_str("</li>");
        }
        out.push_str("</ul>");
        Ok(())
    }
}
