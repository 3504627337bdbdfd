//! Typed node tree rendered inside a field.
//!
//! Uncontrolled fields describe their content as [`FieldNode`] values instead of
//! opaque views so the binder can find inputs, attach registration bindings and
//! rebuild the tree before anything is mounted.

use std::rc::Rc;

use form_state::FieldRegistration;
use leptos::html::ElementDescriptor;
use leptos::*;

use crate::primitives::{bool_token, merge_layout_class, render_input};

/// Props shared by every bindable node.
///
/// `None` means "not set"; layering fills unset slots from a lower layer.
#[derive(Clone, Default)]
pub struct NodeProps {
    /// DOM id.
    pub id: Option<String>,
    /// Field name the node registers under.
    pub name: Option<String>,
    /// Displayed value.
    pub value: Option<MaybeSignal<String>>,
    /// Invalid styling flag.
    pub error: Option<MaybeSignal<bool>>,
    /// Receives the new text on input.
    pub on_change: Option<Callback<String>>,
    /// Receives focus loss.
    pub on_blur: Option<Callback<()>>,
    /// Extra DOM attributes, applied in order.
    pub attrs: Vec<(&'static str, String)>,
}

impl NodeProps {
    /// Empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the DOM id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the field name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the displayed value.
    pub fn with_value(mut self, value: impl Into<MaybeSignal<String>>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the invalid flag.
    pub fn with_error(mut self, error: impl Into<MaybeSignal<bool>>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Sets the change listener.
    pub fn with_on_change(mut self, on_change: Callback<String>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    /// Sets the blur listener.
    pub fn with_on_blur(mut self, on_blur: Callback<()>) -> Self {
        self.on_blur = Some(on_blur);
        self
    }

    /// Adds or replaces a DOM attribute.
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value.into());
        self
    }

    /// Fills every slot left unset in `self` from `lower`.
    pub fn layered_over(self, lower: NodeProps) -> NodeProps {
        let mut merged = NodeProps {
            id: self.id.or(lower.id),
            name: self.name.or(lower.name),
            value: self.value.or(lower.value),
            error: self.error.or(lower.error),
            on_change: self.on_change.or(lower.on_change),
            on_blur: self.on_blur.or(lower.on_blur),
            attrs: lower.attrs,
        };
        for (name, value) in self.attrs {
            merged.set_attr(name, value);
        }
        merged
    }

    fn set_attr(&mut self, name: &'static str, value: String) {
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }
}

impl From<FieldRegistration> for NodeProps {
    fn from(registration: FieldRegistration) -> Self {
        Self {
            id: None,
            name: Some(registration.name),
            value: Some(MaybeSignal::Dynamic(registration.value)),
            error: None,
            on_change: Some(registration.on_change),
            on_blur: Some(registration.on_blur),
            attrs: Vec::new(),
        }
    }
}

#[derive(Clone, Default)]
/// Native text input.
pub struct InputNode {
    /// Native `type`; `text` when unset.
    pub input_type: Option<&'static str>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Extra class appended to the input class.
    pub layout_class: Option<&'static str>,
    /// Explicit props; they win over anything the binder computes.
    pub props: NodeProps,
}

impl InputNode {
    /// Plain text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers under `name` instead of the field name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.props.name = Some(name.into());
        self
    }

    /// Sets the native input type.
    pub fn input_type(mut self, input_type: &'static str) -> Self {
        self.input_type = Some(input_type);
        self
    }

    /// Sets the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Appends a layout class.
    pub fn layout_class(mut self, layout_class: &'static str) -> Self {
        self.layout_class = Some(layout_class);
        self
    }

    /// Replaces the explicit props.
    pub fn props(mut self, props: NodeProps) -> Self {
        self.props = props;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One `<option>` of a [`SelectNode`].
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
}

impl SelectOption {
    /// Builds an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Default)]
/// Native select.
pub struct SelectNode {
    /// Options in display order.
    pub options: Vec<SelectOption>,
    /// Explicit props.
    pub props: NodeProps,
}

impl SelectNode {
    /// Select with the given options.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            props: NodeProps::default(),
        }
    }

    /// Registers under `name` instead of the field name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.props.name = Some(name.into());
        self
    }

    /// Replaces the explicit props.
    pub fn props(mut self, props: NodeProps) -> Self {
        self.props = props;
        self
    }
}

/// Renders a custom node from its final props and its rendered children.
pub type RenderCustom = Rc<dyn Fn(NodeProps, View) -> View>;

#[derive(Clone)]
/// Caller-rendered component that still takes part in binding.
pub struct CustomNode {
    /// Short kind label, used in diagnostics and structural comparisons.
    pub kind: &'static str,
    /// Explicit props.
    pub props: NodeProps,
    /// Nested nodes, bound before the node itself.
    pub children: Vec<FieldNode>,
    render: RenderCustom,
}

impl CustomNode {
    /// Custom node rendered by `render`.
    pub fn new(kind: &'static str, render: impl Fn(NodeProps, View) -> View + 'static) -> Self {
        Self {
            kind,
            props: NodeProps::default(),
            children: Vec::new(),
            render: Rc::new(render),
        }
    }

    /// Registers under `name` instead of the field name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.props.name = Some(name.into());
        self
    }

    /// Replaces the explicit props.
    pub fn props(mut self, props: NodeProps) -> Self {
        self.props = props;
        self
    }

    /// Replaces the nested nodes.
    pub fn children(mut self, children: Vec<FieldNode>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element used by a [`ContainerNode`].
pub enum ContainerTag {
    /// `<div>`.
    Div,
    /// `<span>`.
    Span,
    /// `<label>`.
    Label,
}

impl Default for ContainerTag {
    fn default() -> Self {
        Self::Div
    }
}

impl ContainerTag {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Label => "label",
        }
    }
}

#[derive(Clone, Default)]
/// Structural wrapper; never bound itself.
pub struct ContainerNode {
    /// Element to render.
    pub tag: ContainerTag,
    /// Class attribute.
    pub class: Option<&'static str>,
    /// Nested nodes.
    pub children: Vec<FieldNode>,
}

impl ContainerNode {
    /// Wrapper around `children`.
    pub fn new(tag: ContainerTag, children: Vec<FieldNode>) -> Self {
        Self {
            tag,
            class: None,
            children,
        }
    }

    /// Sets the class attribute.
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

#[derive(Clone)]
/// Content of an uncontrolled field.
pub enum FieldNode {
    /// Native text input.
    Input(InputNode),
    /// Native select.
    Select(SelectNode),
    /// Caller-rendered component.
    Custom(CustomNode),
    /// Structural wrapper.
    Container(ContainerNode),
    /// Plain text.
    Text(String),
}

impl FieldNode {
    /// Plain text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Explicit props of a bindable node.
    pub fn props(&self) -> Option<&NodeProps> {
        match self {
            Self::Input(node) => Some(&node.props),
            Self::Select(node) => Some(&node.props),
            Self::Custom(node) => Some(&node.props),
            Self::Container(_) | Self::Text(_) => None,
        }
    }

    /// Nested nodes.
    pub fn children(&self) -> &[FieldNode] {
        match self {
            Self::Custom(node) => &node.children,
            Self::Container(node) => &node.children,
            Self::Input(_) | Self::Select(_) | Self::Text(_) => &[],
        }
    }

    /// Plain-data description of the node, read without subscribing.
    pub fn shape(&self) -> NodeShape {
        match self {
            Self::Text(text) => NodeShape::Text(text.clone()),
            Self::Container(node) => NodeShape::Element {
                kind: node.tag.token(),
                id: None,
                name: None,
                value: None,
                invalid: false,
                has_on_change: false,
                has_on_blur: false,
                children: node.children.iter().map(FieldNode::shape).collect(),
            },
            Self::Input(InputNode { props, .. }) => element_shape("input", props, &[]),
            Self::Select(SelectNode { props, .. }) => element_shape("select", props, &[]),
            Self::Custom(node) => element_shape(node.kind, &node.props, &node.children),
        }
    }
}

impl From<InputNode> for FieldNode {
    fn from(node: InputNode) -> Self {
        Self::Input(node)
    }
}

impl From<SelectNode> for FieldNode {
    fn from(node: SelectNode) -> Self {
        Self::Select(node)
    }
}

impl From<CustomNode> for FieldNode {
    fn from(node: CustomNode) -> Self {
        Self::Custom(node)
    }
}

impl From<ContainerNode> for FieldNode {
    fn from(node: ContainerNode) -> Self {
        Self::Container(node)
    }
}

impl From<&'static str> for FieldNode {
    fn from(text: &'static str) -> Self {
        Self::text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Structural snapshot of a [`FieldNode`], comparable with `==`.
pub enum NodeShape {
    /// Element node.
    Element {
        /// Element or custom kind.
        kind: &'static str,
        /// DOM id.
        id: Option<String>,
        /// Field name.
        name: Option<String>,
        /// Current value.
        value: Option<String>,
        /// Current invalid flag.
        invalid: bool,
        /// Whether a change listener is attached.
        has_on_change: bool,
        /// Whether a blur listener is attached.
        has_on_blur: bool,
        /// Nested shapes.
        children: Vec<NodeShape>,
    },
    /// Text node.
    Text(String),
}

fn element_shape(kind: &'static str, props: &NodeProps, children: &[FieldNode]) -> NodeShape {
    NodeShape::Element {
        kind,
        id: props.id.clone(),
        name: props.name.clone(),
        value: props.value.as_ref().map(|value| value.get_untracked()),
        invalid: props
            .error
            .map(|error| error.get_untracked())
            .unwrap_or_default(),
        has_on_change: props.on_change.is_some(),
        has_on_blur: props.on_blur.is_some(),
        children: children.iter().map(FieldNode::shape).collect(),
    }
}

pub(crate) fn with_attrs<E: ElementDescriptor + 'static>(
    element: HtmlElement<E>,
    attrs: Vec<(&'static str, String)>,
) -> HtmlElement<E> {
    attrs
        .into_iter()
        .fold(element, |element, (name, value)| element.attr(name, value))
}

impl IntoView for FieldNode {
    fn into_view(self) -> View {
        match self {
            Self::Input(node) => render_input(
                node.layout_class,
                node.input_type.unwrap_or("text"),
                node.placeholder,
                MaybeSignal::Static(false),
                node.props,
            ),
            Self::Select(node) => render_select(node),
            Self::Custom(node) => {
                let children = render_nodes(node.children);
                (node.render)(node.props, children)
            }
            Self::Container(node) => render_container(node),
            Self::Text(text) => text.into_view(),
        }
    }
}

/// Renders a list of nodes in order.
pub fn render_nodes(nodes: Vec<FieldNode>) -> View {
    nodes.into_iter().map(IntoView::into_view).collect_view()
}

fn render_select(node: SelectNode) -> View {
    let NodeProps {
        id,
        name,
        value,
        error,
        on_change,
        on_blur,
        attrs,
    } = node.props;
    let value = value.unwrap_or_default();
    let error = error.unwrap_or_default();

    let select = view! {
        <select
            class="ui-select"
            id=id
            name=name
            prop:value=move || value.get()
            aria-invalid=move || bool_token(error.get())
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-invalid=move || bool_token(error.get())
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(event_target_value(&ev));
                }
            }
            on:blur=move |_| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(());
                }
            }
        >
            {node
                .options
                .into_iter()
                .map(|option| view! { <option value=option.value>{option.label}</option> })
                .collect_view()}
        </select>
    };
    with_attrs(select, attrs).into_view()
}

fn render_container(node: ContainerNode) -> View {
    let class = merge_layout_class("ui-field-group", node.class);
    let children = render_nodes(node.children);
    match node.tag {
        ContainerTag::Div => view! { <div class=class>{children}</div> }.into_view(),
        ContainerTag::Span => view! { <span class=class>{children}</span> }.into_view(),
        ContainerTag::Label => view! { <label class=class>{children}</label> }.into_view(),
    }
}
