//! AST visitor for lint rule execution.

use crate::context::{ElementContext, LintContext};
use crate::rule::{Rule, RuleEntry};
use lumen_relief::ast::{ChildNode, ElementNode, RootNode};

/// Visit the AST top-down and run all rules
pub struct LintVisitor<'a, 'ctx, 'rules> {
    ctx: &'ctx mut LintContext<'a>,
    rules: &'rules [RuleEntry],
}

impl<'a, 'ctx, 'rules> LintVisitor<'a, 'ctx, 'rules> {
    /// Create a new visitor
    #[inline]
    pub fn new(ctx: &'ctx mut LintContext<'a>, rules: &'rules [RuleEntry]) -> Self {
        Self { ctx, rules }
    }

    /// Visit the root node and traverse the AST
    #[inline]
    pub fn visit_root(&mut self, root: &RootNode) {
        self.for_each_rule(|rule, ctx| rule.run_on_root(ctx, root));

        for child in root.children.iter() {
            self.visit_child(child);
        }
    }

    #[inline]
    fn visit_child(&mut self, node: &ChildNode) {
        match node {
            ChildNode::Element(el) => self.visit_element(el),
            ChildNode::Fragment(fragment) => {
                for child in fragment.children.iter() {
                    self.visit_child(child);
                }
            }
            ChildNode::Text(_) | ChildNode::ExpressionContainer(_) | ChildNode::Spread(_) => {}
        }
    }

    fn visit_element(&mut self, el: &ElementNode) {
        self.ctx.push_element(ElementContext::new(el.tag()));

        self.for_each_rule(|rule, ctx| rule.enter_element(ctx, el));

        for child in el.children.iter() {
            self.visit_child(child);
        }

        self.for_each_rule(|rule, ctx| rule.exit_element(ctx, el));

        self.ctx.pop_element();
    }

    /// Call `f` for every enabled rule, with the context pointed at that rule
    #[inline]
    fn for_each_rule(&mut self, mut f: impl FnMut(&dyn Rule, &mut LintContext<'a>)) {
        let rules = self.rules;
        for entry in rules {
            if !self.ctx.is_rule_enabled(entry.name()) {
                continue;
            }
            self.ctx.current_rule = entry.name();
            self.ctx.current_severity = entry.severity;
            f(entry.rule.as_ref(), self.ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::rule::{RuleCategory, RuleMeta};
    use lumen_relief::ast::SourceLocation;
    use std::sync::{Arc, Mutex};

    static META: RuleMeta = RuleMeta {
        name: "test/record-parents",
        description: "Records each element with its parent",
        category: RuleCategory::Accessibility,
        default_severity: Severity::Warning,
    };

    type Seen = Arc<Mutex<Vec<(String, Option<String>)>>>;

    struct RecordParents {
        seen: Seen,
    }

    impl Rule for RecordParents {
        fn meta(&self) -> &'static RuleMeta {
            &META
        }

        fn enter_element(&self, ctx: &mut LintContext<'_>, element: &ElementNode) {
            let parent = ctx.parent_element().map(|p| p.tag.to_string());
            self.seen
                .lock()
                .unwrap()
                .push((element.tag().into_owned(), parent));
        }
    }

    fn visit(root: &RootNode) -> Vec<(String, Option<String>)> {
        let seen = Seen::default();
        let entries = [RuleEntry {
            rule: Box::new(RecordParents { seen: seen.clone() }),
            severity: Severity::Warning,
        }];
        let mut ctx = LintContext::new("test.json");
        LintVisitor::new(&mut ctx, &entries).visit_root(root);
        let seen = seen.lock().unwrap().clone();
        seen
    }

    #[test]
    fn test_walks_through_fragments_with_parents() {
        let link = ElementNode::new("a", SourceLocation::STUB)
            .with_child(ElementNode::new("img", SourceLocation::STUB));
        let root = RootNode::new().with_child(
            ElementNode::new("nav", SourceLocation::STUB)
                .with_child(ChildNode::fragment([ChildNode::from(link)])),
        );

        assert_eq!(
            visit(&root),
            vec![
                ("nav".to_string(), None),
                ("a".to_string(), Some("nav".to_string())),
                ("img".to_string(), Some("a".to_string())),
            ]
        );
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let seen = Seen::default();
        let entries = [RuleEntry {
            rule: Box::new(RecordParents { seen: seen.clone() }),
            severity: Severity::Warning,
        }];
        let enabled = lumen_carton::FxHashSet::default();
        let mut ctx = LintContext::new("test.json");
        ctx.set_enabled_rules(Some(&enabled));

        let root = RootNode::new().with_child(ElementNode::new("a", SourceLocation::STUB));
        LintVisitor::new(&mut ctx, &entries).visit_root(&root);
        assert!(seen.lock().unwrap().is_empty());
    }
}
