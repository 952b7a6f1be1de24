//! Minimal markdown writer shared by every report renderer.

/// Accumulates a markdown document section by section.
#[derive(Debug)]
pub(crate) struct Markdown {
    out: String,
}

impl Markdown {
    /// Start a document with a level-one heading.
    pub(crate) fn new(title: &str) -> Self {
        Self {
            out: format!("# {title}\n"),
        }
    }

    /// Level-two heading, preceded by a blank line.
    pub(crate) fn section(&mut self, heading: &str) -> &mut Self {
        self.out.push_str(&format!("\n## {heading}\n"));
        self
    }

    /// `- **label:** value`
    pub(crate) fn field(&mut self, label: &str, value: impl std::fmt::Display) -> &mut Self {
        self.out.push_str(&format!("- **{label}:** {value}\n"));
        self
    }

    /// Indented `  - **label:** value` under the previous item.
    pub(crate) fn sub_field(&mut self, label: &str, value: impl std::fmt::Display) -> &mut Self {
        self.out.push_str(&format!("  - **{label}:** {value}\n"));
        self
    }

    /// Plain list item.
    pub(crate) fn item(&mut self, text: impl std::fmt::Display) -> &mut Self {
        self.out.push_str(&format!("- {text}\n"));
        self
    }

    /// Pipe table. Cells containing `|` are escaped.
    pub(crate) fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> &mut Self {
        let rule: Vec<String> = headers
            .iter()
            .map(|h| "-".repeat(h.chars().count().max(3)))
            .collect();

        self.out.push_str(&row_line(headers.iter().copied()));
        self.out.push_str(&row_line(rule.iter().map(String::as_str)));
        for row in rows {
            self.out.push_str(&row_line(row.iter().map(String::as_str)));
        }
        self
    }

    /// Fenced block holding preformatted text.
    pub(crate) fn code_block(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&format!("```\n{}\n```\n", text.trim_end()));
        self
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

fn row_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<String> = cells.map(|c| c.replace('|', "\\|")).collect();
    format!("| {} |\n", cells.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_layout() {
        let mut md = Markdown::new("Title");
        md.section("Info").field("Rows", 3).item("note");
        assert_eq!(md.finish(), "# Title\n\n## Info\n- **Rows:** 3\n- note\n");
    }

    #[test]
    fn test_table_escapes_pipes() {
        let mut md = Markdown::new("T");
        md.table(&["Value", "N"], &[vec!["a|b".to_string(), "1".to_string()]]);
        assert_eq!(
            md.finish(),
            "# T\n| Value | N |\n| ----- | --- |\n| a\\|b | 1 |\n"
        );
    }
}
