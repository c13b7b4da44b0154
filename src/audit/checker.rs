use crate::audit::result::AuditItem;
use crate::locator::Locator;
use crate::rules::expression;
use ruff_python_ast::visitor::Visitor;
use ruff_python_ast::{self as ast, Expr, Stmt};

pub struct Checker<'a> {
    pub audit_results: Vec<AuditItem>,
    pub locator: &'a Locator<'a>,
}

impl<'a> Checker<'a> {
    pub fn new(locator: &'a Locator<'a>) -> Self {
        Self {
            audit_results: Vec::new(),
            locator,
        }
    }

    pub fn visit_body(&mut self, body: &'a [Stmt]) {
        for stmt in body {
            self.visit_stmt(stmt);
        }
    }
}

impl<'a> Visitor<'a> for Checker<'a> {
    fn visit_expr(&mut self, expr: &'a Expr) {
        // Analyze before descending: a finding on an outer node must precede
        // findings produced by its children.
        expression::analyze(expr, self);
        ast::visitor::walk_expr(self, expr);
    }
}
