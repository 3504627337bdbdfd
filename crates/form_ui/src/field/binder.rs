//! Attaches registration bindings to the bindable nodes of an uncontrolled field.

use form_state::{FieldRules, RegisterField};
use leptos::Signal;

use super::node::{FieldNode, NodeProps};

/// Everything the binder needs besides the node tree.
pub struct BindScope<'a> {
    /// Name of the enclosing field; nodes without their own name register under it.
    pub field_name: Option<&'a str>,
    /// Rules passed to every registration.
    pub rules: &'a FieldRules,
    /// Invalid flag handed to every bound node.
    pub invalid: Signal<bool>,
    /// Registration target. Without one the tree is returned as is.
    pub registrar: Option<&'a dyn RegisterField>,
}

/// Walks `nodes` depth first and binds every eligible node.
///
/// Inputs, selects and custom nodes with a resolvable name are registered; their
/// explicit props are layered over the registration, which is layered over the
/// computed id and invalid flag. Only the first bound node in the whole walk
/// receives the field name as its id.
pub fn bind_nodes(scope: &BindScope<'_>, nodes: Vec<FieldNode>) -> Vec<FieldNode> {
    let Some(registrar) = scope.registrar else {
        return nodes;
    };
    let mut binder = Binder {
        scope,
        registrar,
        id_assigned: false,
    };
    binder.bind_all(nodes)
}

struct Binder<'s, 'a> {
    scope: &'s BindScope<'a>,
    registrar: &'a dyn RegisterField,
    id_assigned: bool,
}

impl Binder<'_, '_> {
    fn bind_all(&mut self, nodes: Vec<FieldNode>) -> Vec<FieldNode> {
        nodes.into_iter().map(|node| self.bind(node)).collect()
    }

    fn bind(&mut self, node: FieldNode) -> FieldNode {
        match node {
            FieldNode::Input(mut input) => {
                input.props = self.bind_props(input.props);
                FieldNode::Input(input)
            }
            FieldNode::Select(mut select) => {
                select.props = self.bind_props(select.props);
                FieldNode::Select(select)
            }
            FieldNode::Custom(mut custom) => {
                custom.children = self.bind_all(std::mem::take(&mut custom.children));
                custom.props = self.bind_props(custom.props);
                FieldNode::Custom(custom)
            }
            FieldNode::Container(mut container) => {
                container.children = self.bind_all(std::mem::take(&mut container.children));
                FieldNode::Container(container)
            }
            FieldNode::Text(text) => FieldNode::Text(text),
        }
    }

    fn bind_props(&mut self, explicit: NodeProps) -> NodeProps {
        let Some(name) = explicit
            .name
            .clone()
            .or_else(|| self.scope.field_name.map(str::to_string))
        else {
            return explicit;
        };

        let registration = self.registrar.register(&name, self.scope.rules);

        let mut computed = NodeProps::new().with_error(self.scope.invalid);
        if !self.id_assigned {
            self.id_assigned = true;
            computed.id = Some(self.scope.field_name.unwrap_or(name.as_str()).to_string());
        }

        explicit.layered_over(NodeProps::from(registration).layered_over(computed))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use form_state::{FormHandle, FormOptions, SetValueOptions};
    use leptos::{Callback, Callable, SignalGetUntracked};
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::field::node::{ContainerNode, ContainerTag, CustomNode, InputNode, NodeShape};

    #[derive(Debug, Default, Clone, Serialize, Deserialize)]
    struct Contact {
        email: String,
        phone: String,
        note: String,
    }

    fn scope<'a>(
        field_name: Option<&'a str>,
        rules: &'a FieldRules,
        registrar: Option<&'a dyn RegisterField>,
    ) -> BindScope<'a> {
        BindScope {
            field_name,
            rules,
            invalid: Signal::derive(|| false),
            registrar,
        }
    }

    fn ids(nodes: &[FieldNode]) -> Vec<Option<String>> {
        let mut found = Vec::new();
        for node in nodes {
            if let Some(props) = node.props() {
                found.push(props.id.clone());
            }
            found.extend(ids(node.children()));
        }
        found
    }

    fn custom(kind: &'static str) -> CustomNode {
        CustomNode::new(kind, |_, children| children)
    }

    #[test]
    fn missing_registrar_returns_tree_unchanged() {
        let _ = leptos::create_runtime();
        let rules = FieldRules::new();
        let tree = vec![FieldNode::from(InputNode::new())];

        let bound = bind_nodes(&scope(Some("email"), &rules, None), tree.clone());

        assert_eq!(
            bound.iter().map(FieldNode::shape).collect::<Vec<_>>(),
            tree.iter().map(FieldNode::shape).collect::<Vec<_>>()
        );
    }

    #[test]
    fn single_input_is_registered_under_the_field_name() {
        let _ = leptos::create_runtime();
        let form = FormHandle::new(FormOptions::with_defaults(Contact {
            email: "a@b.c".to_string(),
            ..Contact::default()
        }));
        let rules = FieldRules::new().required(true);

        let bound = bind_nodes(
            &scope(Some("email"), &rules, Some(&form)),
            vec![InputNode::new().into()],
        );

        assert_eq!(
            bound[0].shape(),
            NodeShape::Element {
                kind: "input",
                id: Some("email".to_string()),
                name: Some("email".to_string()),
                value: Some("a@b.c".to_string()),
                invalid: false,
                has_on_change: true,
                has_on_blur: true,
                children: Vec::new(),
            }
        );
        assert_eq!(form.registered_fields(), vec!["email".to_string()]);
    }

    #[test]
    fn bound_value_follows_set_value_and_reset() {
        let _ = leptos::create_runtime();
        let form = FormHandle::new(FormOptions::with_defaults(Contact {
            email: "a@b.c".to_string(),
            ..Contact::default()
        }));
        let rules = FieldRules::new();
        let bound = bind_nodes(
            &scope(Some("email"), &rules, Some(&form)),
            vec![InputNode::new().into()],
        );
        let value = || {
            bound[0]
                .props()
                .and_then(|props| props.value.as_ref())
                .map(|value| value.get_untracked())
        };

        form.set_value("email", "new@x.y", SetValueOptions::default());
        assert_eq!(value(), Some("new@x.y".to_string()));

        form.reset();
        assert_eq!(value(), Some("a@b.c".to_string()));
    }

    #[test]
    fn binding_twice_is_idempotent() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Contact>::new(FormOptions::default());
        let rules = FieldRules::new();
        let tree = vec![
            FieldNode::from(ContainerNode::new(
                ContainerTag::Div,
                vec![FieldNode::text("Email"), InputNode::new().into()],
            )),
        ];
        let scope = scope(Some("email"), &rules, Some(&form));

        let first = bind_nodes(&scope, tree.clone());
        let second = bind_nodes(&scope, tree);

        assert_eq!(
            first.iter().map(FieldNode::shape).collect::<Vec<_>>(),
            second.iter().map(FieldNode::shape).collect::<Vec<_>>()
        );
        assert_eq!(form.registered_fields(), vec!["email".to_string()]);
    }

    #[test]
    fn only_the_first_bound_node_gets_the_id() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Contact>::new(FormOptions::default());
        let rules = FieldRules::new();
        let tree = vec![
            FieldNode::from(InputNode::new()),
            ContainerNode::new(
                ContainerTag::Span,
                vec![InputNode::new().name("phone").into()],
            )
            .into(),
            custom("picker").name("note").into(),
        ];

        let bound = bind_nodes(&scope(Some("email"), &rules, Some(&form)), tree);

        assert_eq!(ids(&bound), vec![Some("email".to_string()), None, None]);
    }

    #[test]
    fn nested_children_are_bound_before_their_parent() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Contact>::new(FormOptions::default());
        let rules = FieldRules::new();
        let tree = vec![custom("group")
            .name("note")
            .children(vec![InputNode::new().name("phone").into()])
            .into()];

        let bound = bind_nodes(&scope(Some("email"), &rules, Some(&form)), tree);

        let child = bound[0].children()[0].props().expect("child props");
        assert_eq!(child.id.as_deref(), Some("email"));
        assert_eq!(bound[0].props().and_then(|props| props.id.clone()), None);
    }

    #[test]
    fn explicit_name_wins_over_the_field_name() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Contact>::new(FormOptions::default());
        let rules = FieldRules::new();

        let bound = bind_nodes(
            &scope(Some("email"), &rules, Some(&form)),
            vec![InputNode::new().name("phone").into()],
        );

        assert_eq!(
            bound[0].props().and_then(|props| props.name.clone()),
            Some("phone".to_string())
        );
        assert_eq!(form.registered_fields(), vec!["phone".to_string()]);
    }

    #[test]
    fn nodes_without_any_name_are_left_alone() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Contact>::new(FormOptions::default());
        let rules = FieldRules::new();

        let bound = bind_nodes(
            &scope(None, &rules, Some(&form)),
            vec![custom("submit").into()],
        );

        assert_eq!(
            bound[0].shape(),
            NodeShape::Element {
                kind: "submit",
                id: None,
                name: None,
                value: None,
                invalid: false,
                has_on_change: false,
                has_on_blur: false,
                children: Vec::new(),
            }
        );
        assert!(form.registered_fields().is_empty());
    }

    #[test]
    fn containers_and_text_are_never_registered() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Contact>::new(FormOptions::default());
        let rules = FieldRules::new();
        let tree = vec![
            FieldNode::text("hint"),
            ContainerNode::new(ContainerTag::Label, Vec::new()).into(),
        ];

        let bound = bind_nodes(&scope(Some("email"), &rules, Some(&form)), tree);

        assert_eq!(bound.len(), 2);
        assert!(bound.iter().all(|node| node.props().is_none()));
        assert!(form.registered_fields().is_empty());
    }

    #[test]
    fn explicit_on_change_replaces_the_registered_listener() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Contact>::new(FormOptions::default());
        let rules = FieldRules::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let seen = Rc::clone(&seen);
            Callback::new(move |value: String| seen.borrow_mut().push(value))
        };

        let bound = bind_nodes(
            &scope(Some("email"), &rules, Some(&form)),
            vec![InputNode::new()
                .props(NodeProps::new().with_on_change(on_change))
                .into()],
        );
        let props = bound[0].props().expect("props");
        props.on_change.expect("listener").call("x@y.z".to_string());

        assert_eq!(*seen.borrow(), vec!["x@y.z".to_string()]);
        assert_eq!(form.get_value("email").as_deref(), Some(""));
        assert!(props.on_blur.is_some());
    }

    #[test]
    fn bound_nodes_follow_the_invalid_flag() {
        let _ = leptos::create_runtime();
        let form = FormHandle::<Contact>::new(FormOptions::default());
        let rules = FieldRules::new();
        let bind_scope = BindScope {
            field_name: Some("email"),
            rules: &rules,
            invalid: Signal::derive(|| true),
            registrar: Some(&form),
        };

        let bound = bind_nodes(&bind_scope, vec![InputNode::new().into()]);

        let invalid = bound[0]
            .props()
            .and_then(|props| props.error)
            .map(|error| error.get_untracked());
        assert_eq!(invalid, Some(true));
    }
}
