//! Document model for generated Go source.
//!
//! Fragments are built as indentation-aware `Block`s and composed into
//! a `Module`, which is rendered to text exactly once. Nothing here
//! knows about descriptors; it only keeps emitted code structurally
//! sound so an external formatter is a polish step, not a requirement.

/// One fragment of generated code: an ordered list of lines with
/// relative indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    indent: usize,
    text: String,
}

impl Block {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the block's base level.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line {
            indent: 0,
            text: text.into(),
        });
        self
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Append another block at the same level.
    pub fn append(&mut self, other: Block) -> &mut Self {
        self.lines.extend(other.lines);
        self
    }

    /// Append another block one level deeper.
    pub fn indented(&mut self, other: Block) -> &mut Self {
        for mut line in other.lines {
            // Keep blank lines flush left.
            if !line.text.is_empty() {
                line.indent += 1;
            }
            self.lines.push(line);
        }
        self
    }

    /// Whether the block holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the block with tab indentation.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, base: usize) {
        for line in &self.lines {
            if line.text.is_empty() {
                out.push('\n');
                continue;
            }
            for _ in 0..base + line.indent {
                out.push('\t');
            }
            out.push_str(&line.text);
            out.push('\n');
        }
    }
}

/// A complete generated source module: preamble plus an ordered list
/// of declarations.
#[derive(Debug, Clone)]
pub struct Module {
    header: String,
    package: String,
    imports: Vec<String>,
    anchors: Vec<String>,
    decls: Vec<Block>,
}

/// Warning carried at the top of every generated file.
const GENERATED_HEADER: &str =
    "// This file was generated as part of a build step and shouldn't be manually modified";

impl Module {
    /// Create a module for the given Go package.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            header: GENERATED_HEADER.to_string(),
            package: package.into(),
            imports: Vec::new(),
            anchors: Vec::new(),
            decls: Vec::new(),
        }
    }

    /// Add one import path.
    pub fn import(&mut self, path: impl Into<String>) -> &mut Self {
        self.imports.push(path.into());
        self
    }

    /// Add one keep-alive anchor expression, emitted as `_ = <expr>`.
    pub fn anchor(&mut self, expr: impl Into<String>) -> &mut Self {
        self.anchors.push(expr.into());
        self
    }

    /// Add a top-level declaration.
    pub fn decl(&mut self, block: Block) -> &mut Self {
        self.decls.push(block);
        self
    }

    /// Render the whole module to source text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header);
        out.push('\n');
        out.push_str(&format!("package {}\n", self.package));

        if !self.imports.is_empty() {
            out.push_str("\nimport (\n");
            for path in &self.imports {
                out.push_str(&format!("\t\"{}\"\n", path));
            }
            out.push_str(")\n");
        }

        if !self.anchors.is_empty() {
            out.push_str("\nvar (\n");
            for expr in &self.anchors {
                out.push_str(&format!("\t_ = {}\n", expr));
            }
            out.push_str(")\n");
        }

        for decl in &self.decls {
            if decl.is_empty() {
                continue;
            }
            out.push('\n');
            decl.render_into(&mut out, 0);
        }

        out
    }
}
