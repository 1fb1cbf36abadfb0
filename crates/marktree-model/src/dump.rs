//! Human-readable tree dump used by `Markup::debug_description`.
//!
//! ```text
//! Document
//! ├─ Heading level: 1
//! │  └─ Text "Title"
//! └─ Paragraph
//!    └─ Text "Body"
//! ```

use serde::{Deserialize, Serialize};

use crate::data::MarkupData;
use crate::markup::Markup;
use crate::nodes::{
    AnyMarkup, CodeBlock, Heading, Image, InlineCode, Link, ListItem, OrderedList, Text,
};
use crate::raw::Checkbox;
use crate::visitor::MarkupVisitor;

/// What to print next to each node besides its kind and payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpOptions {
    /// Append `@line:col-line:col` for nodes with a range.
    pub print_source_locations: bool,
    /// Append `root #N index I`.
    pub print_identifiers: bool,
    /// Append `childCount: N` for nodes with children.
    pub print_child_count: bool,
}

pub(crate) fn debug_description(data: &MarkupData, options: &DumpOptions) -> String {
    let mut writer = DebugWriter {
        options,
        out: String::new(),
        line_prefix: String::new(),
        child_indent: String::new(),
    };
    AnyMarkup::from_data(data.clone()).accept(&mut writer);
    writer.out
}

struct DebugWriter<'o> {
    options: &'o DumpOptions,
    out: String,
    /// Connector drawn before the next node's name.
    line_prefix: String,
    /// Indentation inherited by the next node's children.
    child_indent: String,
}

impl DebugWriter<'_> {
    fn write_node(&mut self, markup: &dyn Markup, details: Option<String>) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out.push_str(&self.line_prefix);
        self.out.push_str(markup.kind().name());
        if let Some(details) = details {
            self.out.push(' ');
            self.out.push_str(&details);
        }
        if self.options.print_source_locations {
            if let Some(range) = markup.range() {
                self.out.push_str(&format!(" @{}-{}", range.start, range.end));
            }
        }
        if self.options.print_identifiers {
            self.out.push_str(&format!(
                " root {} index {}",
                markup.root_id(),
                markup.index_in_parent()
            ));
        }
        let count = markup.child_count();
        if self.options.print_child_count && count > 0 {
            self.out.push_str(&format!(" childCount: {count}"));
        }

        let indent = std::mem::take(&mut self.child_indent);
        for (index, child) in markup.children().enumerate() {
            let last = index + 1 == count;
            self.line_prefix = format!("{indent}{}", if last { "└─ " } else { "├─ " });
            self.child_indent = format!("{indent}{}", if last { "   " } else { "│  " });
            child.accept(self);
        }
        self.child_indent = indent;
    }
}

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

impl MarkupVisitor for DebugWriter<'_> {
    type Result = ();

    fn default_visit(&mut self, markup: &dyn Markup) {
        self.write_node(markup, None);
    }

    fn visit_text(&mut self, text: &Text) {
        self.write_node(text, Some(quoted(text.string())));
    }

    fn visit_inline_code(&mut self, inline_code: &InlineCode) {
        self.write_node(inline_code, Some(format!("`{}`", inline_code.code())));
    }

    fn visit_heading(&mut self, heading: &Heading) {
        self.write_node(heading, Some(format!("level: {}", heading.level())));
    }

    fn visit_link(&mut self, link: &Link) {
        let mut details = Vec::new();
        if let Some(destination) = link.destination() {
            details.push(format!("destination: {}", quoted(destination)));
        }
        if let Some(title) = link.title() {
            details.push(format!("title: {}", quoted(title)));
        }
        self.write_node(link, (!details.is_empty()).then(|| details.join(" ")));
    }

    fn visit_image(&mut self, image: &Image) {
        let mut details = Vec::new();
        if let Some(source) = image.source() {
            details.push(format!("source: {}", quoted(source)));
        }
        if let Some(title) = image.title() {
            details.push(format!("title: {}", quoted(title)));
        }
        self.write_node(image, (!details.is_empty()).then(|| details.join(" ")));
    }

    fn visit_list_item(&mut self, list_item: &ListItem) {
        let details = list_item.checkbox().map(|checkbox| match checkbox {
            Checkbox::Checked => "checkbox: [x]".to_string(),
            Checkbox::Unchecked => "checkbox: [ ]".to_string(),
        });
        self.write_node(list_item, details);
    }

    fn visit_ordered_list(&mut self, ordered_list: &OrderedList) {
        self.write_node(
            ordered_list,
            Some(format!("startIndex: {}", ordered_list.start_index())),
        );
    }

    fn visit_code_block(&mut self, code_block: &CodeBlock) {
        let details = match code_block.language() {
            Some(language) => format!("language: {language} {}", quoted(code_block.code())),
            None => quoted(code_block.code()),
        };
        self.write_node(code_block, Some(details));
    }
}
