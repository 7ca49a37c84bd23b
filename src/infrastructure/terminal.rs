//! Terminal canvas: draws reveal steps as an indented, coloured outline.

use std::io::Write;

use colored::Colorize;

use crate::domain::{Explanation, RevealStep};
use crate::infrastructure::traits::Canvas;

pub struct TerminalCanvas<W: Write> {
    out: W,
    show_edges: bool,
    explain: bool,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_edges: false,
            explain: true,
        }
    }

    pub fn with_edges(mut self, show_edges: bool) -> Self {
        self.show_edges = show_edges;
        self
    }

    pub fn with_explanations(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        writeln!(self.out)
    }

    fn draw_edge(&mut self, from: &str, to: &str) -> std::io::Result<()> {
        if self.show_edges {
            writeln!(self.out, "{}", format!("{from} -> {to}").dimmed())?;
        }
        Ok(())
    }

    fn draw_node(&mut self, step: &RevealStep) -> std::io::Result<()> {
        let label = if step.has_antigen() {
            step.label.red().bold()
        } else {
            step.label.yellow().bold()
        };
        match step.depth {
            0 => writeln!(self.out, "{}", label)?,
            depth => writeln!(self.out, "{}└── {}", "    ".repeat(depth - 1), label)?,
        }
        self.out.flush()
    }

    fn show_explanation(&mut self, explanation: Explanation) -> std::io::Result<()> {
        if self.explain {
            writeln!(self.out, "      {} {}", "why:".cyan(), explanation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeKind;

    fn step(depth: usize, label: &str) -> RevealStep {
        RevealStep {
            index: 0,
            depth,
            label: label.to_string(),
            kind: NodeKind::ChildGroup,
            parent_label: None,
            explanation: None,
        }
    }

    #[test]
    fn given_nested_step_when_drawing_then_indents_by_depth() {
        colored::control::set_override(false);
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.draw_node(&step(0, "root")).unwrap();
        canvas.draw_node(&step(2, "O-")).unwrap();
        let text = String::from_utf8(canvas.into_inner()).unwrap();
        assert_eq!(text, "root\n    └── O-\n");
    }

    #[test]
    fn given_edges_disabled_when_drawing_edge_then_writes_nothing() {
        let mut canvas = TerminalCanvas::new(Vec::new()).with_explanations(false);
        canvas.draw_edge("a", "b").unwrap();
        canvas.show_explanation(Explanation::RhDominant).unwrap();
        assert!(canvas.into_inner().is_empty());
    }
}
