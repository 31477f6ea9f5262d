//! Node factory: one constructor per syntactic construct.
//!
//! Grammar actions call these bottom-up as sub-expressions reduce. Every
//! constructor allocates a tagged node, stamps it with the scanner position
//! at call time (after the construct's final token), takes ownership of its
//! child arguments, and returns the new node as the reduction value.
//! Nothing here validates semantic correctness.

use std::rc::Rc;

use crate::{
    linker,
    literal::{parse_float_literal, parse_int_literal},
    nodes::{BinOpKind, Modifier, NodeKind, NodeRef, TypeTag},
    scan::Scanner,
    session::ParseSession,
};

impl<S: Scanner> ParseSession<S> {
    pub fn int_lit(&mut self, text: &str) -> NodeRef {
        let (text, kind) = parse_int_literal(text);
        self.alloc(NodeKind::IntLit { text, kind })
    }

    pub fn float_lit(&mut self, text: &str) -> NodeRef {
        let (text, kind) = parse_float_literal(text);
        self.alloc(NodeKind::FloatLit { text, kind })
    }

    pub fn str_lit(&mut self, text: &str) -> NodeRef {
        self.alloc(NodeKind::StrLit {
            text: text.to_string(),
        })
    }

    pub fn bool_lit(&mut self, value: bool) -> NodeRef {
        self.alloc(NodeKind::BoolLit { value })
    }

    pub fn modifier(&mut self, modifier: Modifier) -> NodeRef {
        self.alloc(NodeKind::Modifier { modifier })
    }

    pub fn type_node(
        &mut self,
        tag: TypeTag,
        name: Option<&str>,
        ext: Option<NodeRef>,
    ) -> NodeRef {
        self.alloc(NodeKind::Type {
            tag,
            name: name.map(ToString::to_string),
            ext,
        })
    }

    pub fn bin_op(&mut self, op: BinOpKind, lhs: NodeRef, rhs: NodeRef) -> NodeRef {
        self.alloc(NodeKind::BinOp { op, lhs, rhs })
    }

    pub fn ret(&mut self, expr: Option<NodeRef>) -> NodeRef {
        self.alloc(NodeKind::Ret { expr })
    }

    pub fn var(&mut self, name: &str) -> NodeRef {
        self.alloc(NodeKind::Var {
            name: name.to_string(),
        })
    }

    pub fn func_call(&mut self, name: &str, args: Option<NodeRef>) -> NodeRef {
        self.alloc(NodeKind::FuncCall {
            name: name.to_string(),
            args,
        })
    }

    pub fn let_binding(
        &mut self,
        name: &str,
        modifiers: Option<NodeRef>,
        ty: Option<NodeRef>,
        value: Option<NodeRef>,
    ) -> NodeRef {
        self.alloc(NodeKind::LetBinding {
            name: name.to_string(),
            modifiers,
            ty,
            value,
        })
    }

    pub fn var_decl(
        &mut self,
        name: &str,
        modifiers: Option<NodeRef>,
        ty: Option<NodeRef>,
        value: Option<NodeRef>,
    ) -> NodeRef {
        self.alloc(NodeKind::VarDecl {
            name: name.to_string(),
            modifiers,
            ty,
            value,
        })
    }

    pub fn var_assign(&mut self, target: NodeRef, value: NodeRef) -> NodeRef {
        self.alloc(NodeKind::VarAssign { target, value })
    }

    pub fn if_node(
        &mut self,
        cond: NodeRef,
        body: Option<NodeRef>,
        else_arm: Option<NodeRef>,
    ) -> NodeRef {
        self.alloc(NodeKind::If {
            cond,
            body,
            else_arm: std::cell::RefCell::new(else_arm),
        })
    }

    pub fn func_decl(
        &mut self,
        name: &str,
        modifiers: Option<NodeRef>,
        ret_ty: Option<NodeRef>,
        params: Option<NodeRef>,
        body: Option<NodeRef>,
    ) -> NodeRef {
        self.alloc(NodeKind::FuncDecl {
            name: name.to_string(),
            modifiers,
            ret_ty,
            params,
            body,
        })
    }

    pub fn data_decl(&mut self, name: &str, body: Option<NodeRef>) -> NodeRef {
        self.alloc(NodeKind::DataDecl {
            name: name.to_string(),
            body,
        })
    }

    /// Emits one `NamedVal` node per identifier in `vars`, all sharing the
    /// type annotation `ty`. This backs the shorthand for declaring several
    /// variables of one type, e.g. `i32 a b c`.
    ///
    /// The first `NamedVal` takes `ty` itself; every later one receives an
    /// independent deep copy, never a second owner of the same instance.
    /// The input `Var` chain is consumed: its names are absorbed into the
    /// returned chain and the nodes dropped.
    ///
    /// # Panics
    ///
    /// Panics if `vars` is not a chain of `Var` nodes or `ty` is not a
    /// `Type` node.
    pub fn named_val(&mut self, vars: NodeRef, ty: NodeRef) -> NodeRef {
        assert!(
            matches!(ty.kind, NodeKind::Type { .. }),
            "named_val expects a type annotation, got {}",
            ty.kind_name()
        );
        let NodeKind::Var { name } = &vars.kind else {
            panic!(
                "named_val expects a chain of variable nodes, got {}",
                vars.kind_name()
            );
        };

        let head = self.alloc(NodeKind::NamedVal {
            name: name.clone(),
            ty: Some(Rc::clone(&ty)),
        });
        let mut tail = Rc::clone(&head);
        let mut cursor = vars.next();
        while let Some(var) = cursor {
            let NodeKind::Var { name } = &var.kind else {
                panic!(
                    "named_val expects a chain of variable nodes, got {}",
                    var.kind_name()
                );
            };
            let ty_copy = self.clone_type(&ty);
            let named = self.alloc(NodeKind::NamedVal {
                name: name.clone(),
                ty: Some(ty_copy),
            });
            tail = linker::link_next(&tail, named);
            cursor = var.next();
        }
        drop(vars);
        head
    }

    /// Allocates an independent copy of a `Type` node: same tag and name,
    /// extension type deep-copied recursively. The copy shares nothing
    /// with the original.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is not a `Type` node.
    pub fn clone_type(&mut self, ty: &NodeRef) -> NodeRef {
        let NodeKind::Type { tag, name, ext } = &ty.kind else {
            panic!("clone_type on non-type node {}", ty.kind_name());
        };
        let tag = *tag;
        let name = name.clone();
        let ext_copy = ext.clone().map(|e| self.clone_type(&e));
        self.alloc(NodeKind::Type {
            tag,
            name,
            ext: ext_copy,
        })
    }
}
