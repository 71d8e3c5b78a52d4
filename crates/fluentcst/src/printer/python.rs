//! Python source serializer for fluentcst trees.

use std::fmt::Write as _;

use itertools::Itertools;

use crate::ast::{
    Arg, DictElement, Expr, Ident, Literal, Module, Stmt, StmtAnnAssign, StmtAssign,
    StmtClassDef, StmtImportFrom,
};
use crate::error::{Error, Result};
use crate::printer::{AstSerializer, PrintOptions};

#[derive(Clone, Debug, Default)]
pub struct PythonSerializer {
    options: PrintOptions,
}

impl PythonSerializer {
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }
}

impl AstSerializer for PythonSerializer {
    fn serialize_module(&self, node: &Module) -> Result<String> {
        let mut emitter = PythonEmitter::new(&self.options);
        for stmt in &node.body {
            emitter.emit_stmt(stmt)?;
        }
        Ok(emitter.finish())
    }

    fn serialize_stmt(&self, node: &Stmt) -> Result<String> {
        let mut emitter = PythonEmitter::new(&self.options);
        emitter.emit_stmt(node)?;
        Ok(emitter.finish())
    }

    fn serialize_expr(&self, node: &Expr) -> Result<String> {
        PythonEmitter::new(&self.options).render_expr(node)
    }
}

struct PythonEmitter<'a> {
    code: String,
    indent: usize,
    options: &'a PrintOptions,
}

impl<'a> PythonEmitter<'a> {
    fn new(options: &'a PrintOptions) -> Self {
        Self {
            code: String::new(),
            indent: 0,
            options,
        }
    }

    fn finish(self) -> String {
        self.code
    }

    fn emit_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::ImportFrom(import) => self.emit_import_from(import),
            Stmt::ClassDef(def) => self.emit_class_def(def),
            Stmt::Assign(assign) => self.emit_assign(assign),
            Stmt::AnnAssign(assign) => self.emit_ann_assign(assign),
            Stmt::Expr(expr) => {
                let rendered = self.render_expr(expr)?;
                self.push_line(&rendered);
                Ok(())
            }
            Stmt::Pass => {
                self.push_line("pass");
                Ok(())
            }
        }
    }

    fn emit_import_from(&mut self, import: &StmtImportFrom) -> Result<()> {
        if import.names.is_empty() {
            return Err(Error::Serialize(
                "import statement without imported names".to_string(),
            ));
        }
        let module = self.render_expr(&import.module)?;
        let names = import
            .names
            .iter()
            .map(|name| self.render_ident(name))
            .collect::<Result<Vec<_>>>()?;
        self.push_line(&format!("from {} import {}", module, names.join(", ")));
        Ok(())
    }

    fn emit_class_def(&mut self, def: &StmtClassDef) -> Result<()> {
        let mut header = format!("class {}", self.render_ident(&def.name)?);
        if !def.bases.is_empty() {
            let bases = self.render_list(&def.bases)?;
            header.push_str(&format!("({})", bases));
        }
        header.push(':');
        self.push_line(&header);

        self.indent += 1;
        if def.body.is_empty() {
            self.push_line("pass");
        }
        for stmt in &def.body {
            self.emit_stmt(stmt)?;
        }
        self.indent -= 1;
        Ok(())
    }

    fn emit_assign(&mut self, assign: &StmtAssign) -> Result<()> {
        let target = self.render_ident(&assign.target)?;
        let value = self.render_expr(&assign.value)?;
        self.push_line(&format!("{} = {}", target, value));
        Ok(())
    }

    fn emit_ann_assign(&mut self, assign: &StmtAnnAssign) -> Result<()> {
        let target = self.render_ident(&assign.target)?;
        let annotation = self.render_expr(&assign.annotation.value)?;
        self.push_line(&format!("{}: {}", target, annotation));
        Ok(())
    }

    fn render_expr(&self, expr: &Expr) -> Result<String> {
        match expr {
            Expr::Literal(literal) => Ok(self.render_literal(literal)),
            Expr::Name(name) => self.render_ident(name),
            Expr::Attribute(attr) => Ok(format!(
                "{}.{}",
                self.render_expr(&attr.value)?,
                self.render_ident(&attr.attr)?
            )),
            Expr::Subscript(sub) => Ok(format!(
                "{}[{}]",
                self.render_expr(&sub.value)?,
                self.render_expr(&sub.index)?
            )),
            Expr::BinOr(binop) => Ok(format!(
                "{} | {}",
                self.render_expr(&binop.lhs)?,
                self.render_expr(&binop.rhs)?
            )),
            Expr::List(list) => Ok(format!("[{}]", self.render_list(&list.elements)?)),
            Expr::Dict(dict) => {
                let entries = dict
                    .elements
                    .iter()
                    .map(|element| self.render_dict_element(element))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{{{}}}", entries.iter().join(", ")))
            }
            Expr::Call(call) => {
                let args = call
                    .args
                    .iter()
                    .map(|arg| self.render_arg(arg))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!(
                    "{}({})",
                    self.render_expr(&call.func)?,
                    args.iter().join(", ")
                ))
            }
        }
    }

    fn render_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::String(s) => escape_string(s, self.options.quote.delimiter()),
            Literal::Int(i) => i.to_string(),
            Literal::Bool(true) => "True".to_string(),
            Literal::Bool(false) => "False".to_string(),
        }
    }

    fn render_ident(&self, ident: &Ident) -> Result<String> {
        if ident.name.is_empty() {
            return Err(Error::Serialize("empty identifier".to_string()));
        }
        Ok(ident.name.clone())
    }

    fn render_list(&self, exprs: &[Expr]) -> Result<String> {
        let rendered = exprs
            .iter()
            .map(|expr| self.render_expr(expr))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.iter().join(", "))
    }

    fn render_dict_element(&self, element: &DictElement) -> Result<String> {
        Ok(format!(
            "{}: {}",
            self.render_expr(&element.key)?,
            self.render_expr(&element.value)?
        ))
    }

    fn render_arg(&self, arg: &Arg) -> Result<String> {
        let value = self.render_expr(&arg.value)?;
        match &arg.keyword {
            Some(keyword) => Ok(format!("{} = {}", self.render_ident(keyword)?, value)),
            None => Ok(value),
        }
    }

    fn push_line(&mut self, line: &str) {
        for _ in 0..self.indent * self.options.indent_size {
            self.code.push(' ');
        }
        self.code.push_str(line);
        self.code.push('\n');
    }
}

/// Quote `input` with `delimiter`, escaping the delimiter, backslashes and
/// control characters.
pub(crate) fn escape_string(input: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push(delimiter);
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch == delimiter => {
                out.push('\\');
                out.push(ch);
            }
            ch if ch.is_control() => {
                let _ = write!(out, "\\x{:02x}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out.push(delimiter);
    out
}
