use crate::editor::Editor;
use crate::node::stamped::NodeId;
use crate::tests::util::id_of_number;

#[test]
fn load_then_render_round_trips() {
    let mut editor = Editor::new();
    editor.load("(10 + 20) * (30 - 15) / 5").unwrap();

    assert_eq!(editor.render(), "(10 + 20) * (30 - 15) / 5");
    assert!(editor.diagnostics().is_empty());
    assert_eq!(editor.node_count(), 11);
}

#[test]
fn parse_failure_clears_the_current_tree() {
    let mut editor = Editor::new();
    editor.load("1 + 2").unwrap();
    assert!(editor.tree().is_some());

    assert!(editor.load("1 +").is_err());
    assert!(editor.tree().is_none());
    assert_eq!(editor.render(), "");
    assert_eq!(editor.node_count(), 0);
    assert_eq!(editor.tree_depth(), 0);
}

#[test]
fn select_and_delete_through_the_editor() {
    let mut editor = Editor::new();
    editor.load("3 + 4").unwrap();

    let target = id_of_number(editor.tree().unwrap(), 3.0);
    editor.select(Some(&target));
    assert_eq!(
        editor.selected_node().map(|n| n.id.clone()),
        Some(target.clone())
    );

    editor.delete(&target);
    assert_eq!(editor.render(), "4");
    assert!(editor.selected_node().is_none());
}

#[test]
fn commands_on_an_empty_editor_are_no_ops() {
    let mut editor = Editor::new();

    editor.select(Some(&NodeId::from("anything")));
    editor.delete(&NodeId::from("anything"));

    assert_eq!(editor.render(), "");
    assert!(editor.diagnostics().is_empty());
    assert!(editor.selected_node().is_none());
}

#[test]
fn adopt_raw_replaces_the_tree_wholesale() {
    let mut editor = Editor::new();

    editor.adopt_raw(num!(1) + num!(2));
    assert_eq!(editor.render(), "1 + 2");

    editor.adopt_raw(num!(9));
    assert_eq!(editor.render(), "9");

    editor.clear();
    assert!(editor.tree().is_none());
}
