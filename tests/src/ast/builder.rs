use std::rc::Rc;

use aster_ast::linker::{link_else, link_next};
use aster_ast::literal::{FloatKind, IntKind};
use aster_ast::nodes::{BinOpKind, Modifier, NodeKind, NodeRef, TypeTag, siblings};

use crate::utils::new_session;

#[test]
fn test_int_lit_resolves_suffix() {
    let mut sess = new_session();
    let node = sess.int_lit("100u16");
    match &node.kind {
        NodeKind::IntLit { text, kind } => {
            assert_eq!(text, "100");
            assert_eq!(*kind, IntKind::U16);
        }
        other => panic!("expected IntLit, got {other:?}"),
    }
}

#[test]
fn test_float_lit_resolves_suffix() {
    let mut sess = new_session();
    let node = sess.float_lit("3.14f64");
    match &node.kind {
        NodeKind::FloatLit { text, kind } => {
            assert_eq!(text, "3.14");
            assert_eq!(*kind, FloatKind::F64);
        }
        other => panic!("expected FloatLit, got {other:?}"),
    }
}

#[test]
fn test_leaf_constructors() {
    let mut sess = new_session();
    let s = sess.str_lit("hello");
    let b = sess.bool_lit(true);
    let m = sess.modifier(Modifier::Mut);
    assert!(matches!(&s.kind, NodeKind::StrLit { text } if text == "hello"));
    assert!(matches!(b.kind, NodeKind::BoolLit { value: true }));
    assert!(matches!(
        m.kind,
        NodeKind::Modifier {
            modifier: Modifier::Mut
        }
    ));
}

#[test]
fn test_type_node_with_extension() {
    let mut sess = new_session();
    let elem = sess.type_node(TypeTag::I32, None, None);
    let vec = sess.type_node(TypeTag::Named, Some("Vec"), Some(elem));
    match &vec.kind {
        NodeKind::Type { tag, name, ext } => {
            assert_eq!(*tag, TypeTag::Named);
            assert_eq!(name.as_deref(), Some("Vec"));
            let ext = ext.as_ref().expect("extension type is owned");
            assert!(matches!(
                ext.kind,
                NodeKind::Type {
                    tag: TypeTag::I32,
                    ..
                }
            ));
        }
        other => panic!("expected Type, got {other:?}"),
    }
}

fn type_parts(node: &NodeRef) -> (TypeTag, Option<String>, Option<NodeRef>) {
    match &node.kind {
        NodeKind::Type { tag, name, ext } => (*tag, name.clone(), ext.clone()),
        other => panic!("expected Type, got {other:?}"),
    }
}

fn named_val_parts(node: &NodeRef) -> (String, NodeRef) {
    match &node.kind {
        NodeKind::NamedVal { name, ty } => {
            (name.clone(), ty.clone().expect("declared value has a type"))
        }
        other => panic!("expected NamedVal, got {other:?}"),
    }
}

#[test]
fn test_named_val_emits_one_node_per_identifier() {
    // i32 a b c
    let mut sess = new_session();
    let a = sess.var("a");
    let b = sess.var("b");
    let c = sess.var("c");
    link_next(&link_next(&a, b), c);
    let ty = sess.type_node(TypeTag::I32, None, None);

    let head = sess.named_val(a, ty.clone());
    let chain: Vec<NodeRef> = siblings(Some(head)).collect();
    assert_eq!(chain.len(), 3);

    let names: Vec<String> = chain.iter().map(|n| named_val_parts(n).0).collect();
    assert_eq!(names, ["a", "b", "c"]);

    // The first declaration takes the annotation itself; the rest get
    // independent copies equal in tag, never a second owner.
    let (_, first_ty) = named_val_parts(&chain[0]);
    assert!(Rc::ptr_eq(&first_ty, &ty));
    for later in &chain[1..] {
        let (_, later_ty) = named_val_parts(later);
        assert!(!Rc::ptr_eq(&later_ty, &ty));
        assert_eq!(type_parts(&later_ty).0, TypeTag::I32);
    }

    // Back-references hold inside the emitted chain.
    assert!(Rc::ptr_eq(&chain[1].prev().unwrap(), &chain[0]));
    assert!(Rc::ptr_eq(&chain[2].prev().unwrap(), &chain[1]));
}

#[test]
fn test_named_val_deep_copies_extension_type() {
    let mut sess = new_session();
    let a = sess.var("a");
    let b = sess.var("b");
    link_next(&a, b);
    let elem = sess.type_node(TypeTag::I32, None, None);
    let ty = sess.type_node(TypeTag::Named, Some("Vec"), Some(elem.clone()));

    let head = sess.named_val(a, ty);
    let chain: Vec<NodeRef> = siblings(Some(head)).collect();
    let (_, second_ty) = named_val_parts(&chain[1]);
    let (tag, name, ext) = type_parts(&second_ty);
    assert_eq!(tag, TypeTag::Named);
    assert_eq!(name.as_deref(), Some("Vec"));

    let ext = ext.expect("extension type must be copied, not dropped");
    assert!(!Rc::ptr_eq(&ext, &elem));
    assert_eq!(type_parts(&ext).0, TypeTag::I32);
}

#[test]
fn test_named_val_single_identifier() {
    let mut sess = new_session();
    let a = sess.var("only");
    let ty = sess.type_node(TypeTag::U8, None, None);
    let head = sess.named_val(a, ty.clone());

    assert!(head.next().is_none());
    let (name, got_ty) = named_val_parts(&head);
    assert_eq!(name, "only");
    assert!(Rc::ptr_eq(&got_ty, &ty));
}

#[test]
#[should_panic(expected = "expects a chain of variable nodes")]
fn test_named_val_rejects_non_variable_chain() {
    let mut sess = new_session();
    let lit = sess.int_lit("1");
    let ty = sess.type_node(TypeTag::I32, None, None);
    let _ = sess.named_val(lit, ty);
}

#[test]
#[should_panic(expected = "expects a type annotation")]
fn test_named_val_rejects_non_type_annotation() {
    let mut sess = new_session();
    let a = sess.var("a");
    let not_ty = sess.int_lit("1");
    let _ = sess.named_val(a, not_ty);
}

#[test]
#[should_panic(expected = "clone_type on non-type node")]
fn test_clone_type_rejects_non_type() {
    let mut sess = new_session();
    let lit = sess.bool_lit(false);
    let _ = sess.clone_type(&lit);
}

#[test]
fn test_if_elif_else_assembly() {
    // if a { } elif b { } else { }
    let mut sess = new_session();
    let cond_a = sess.var("a");
    let first = sess.if_node(cond_a, None, None);
    let cond_b = sess.var("b");
    let elif = sess.if_node(cond_b, None, None);
    let always = sess.bool_lit(true);
    let last = sess.if_node(always, None, None);

    link_else(&first, elif.clone());
    link_else(&elif, last.clone());

    let second = first.else_arm().unwrap();
    assert!(Rc::ptr_eq(&second, &elif));
    assert!(Rc::ptr_eq(&second.else_arm().unwrap(), &last));
}

#[test]
fn test_function_assembly_through_block_roots() {
    // fn add: i32 (a b: i32) = return a + b
    let mut sess = new_session();

    let param_a = sess.var("a");
    let param_b = sess.var("b");
    link_next(&param_a, param_b);
    let param_ty = sess.type_node(TypeTag::I32, None, None);
    let params = sess.named_val(param_a, param_ty);

    // Body block opens: its first statement becomes the tracked root.
    let lhs = sess.var("a");
    let rhs = sess.var("b");
    let sum = sess.bin_op(BinOpKind::Add, lhs, rhs);
    let ret = sess.ret(Some(sum));
    sess.push_root(ret);

    // Block reduction completes; the enclosing rule retrieves the body.
    let body = sess.pop_root();
    let ret_ty = sess.type_node(TypeTag::I32, None, None);
    let func = sess.func_decl("add", None, Some(ret_ty), Some(params), Some(body));

    assert_eq!(sess.root_depth(), 0);
    let body = func.block_body().expect("function owns its body");
    assert!(matches!(body.kind, NodeKind::Ret { .. }));
    match &func.kind {
        NodeKind::FuncDecl { name, params, .. } => {
            assert_eq!(name, "add");
            let params: Vec<NodeRef> = siblings(params.clone()).collect();
            assert_eq!(params.len(), 2);
        }
        other => panic!("expected FuncDecl, got {other:?}"),
    }
    assert!(sess.finish().is_ok());
}

#[test]
fn test_finished_tree_serializes_to_json() -> anyhow::Result<()> {
    let mut sess = new_session();
    sess.scanner().advance_to(2, 9);
    let value = sess.int_lit("5i8");
    let ty = sess.type_node(TypeTag::I8, None, None);
    let decl = sess.var_decl("x", None, Some(ty), Some(value));

    let json = serde_json::to_string_pretty(&*decl)?;
    assert!(json.contains("\"VarDecl\""));
    assert!(json.contains("\"IntLit\""));
    assert!(json.contains("\"row\": 2"));
    // Back-references are weak and never serialized.
    assert!(!json.contains("\"prev\""));
    Ok(())
}
