use std::fmt;
use std::sync::Arc;

use veneer_markup::{Element, Node, render_fragment};

use crate::theme::ThemeVariantKind;

/// Shared callback that flips the active theme.
pub type ThemeToggle = Arc<dyn Fn() + Send + Sync>;

/// The theme state a provider publishes to its descendants.
///
/// Context travels explicitly: a provider receives its parent's context as
/// an argument and hands the one it returns to whatever renders below it.
/// [`ThemeContext::empty`] is the state outside any provider; consumers
/// treat the absent fields as a valid "no theme" state.
#[derive(Clone, Default)]
pub struct ThemeContext {
    theme: Option<String>,
    toggle: Option<ThemeToggle>,
}

impl ThemeContext {
    /// The context outside any provider: no theme, no toggle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The active theme name, if a provider is in scope.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// The nearest toggle callback, if any provider supplied one.
    pub fn toggle(&self) -> Option<&ThemeToggle> {
        self.toggle.as_ref()
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("theme", &self.theme)
            .field("toggle", &self.toggle.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Scopes a theme to a subtree of rendered markup.
///
/// The outermost provider renders its children untouched, leaving global
/// `:root` variables authoritative. Every nested provider wraps its
/// children in an element carrying `data-theme`, so
/// `[data-theme]` selectors can override tokens for that subtree only.
pub struct ThemeProvider {
    theme: String,
    tag: String,
    class_name: Option<String>,
    toggle: Option<ThemeToggle>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl ThemeProvider {
    /// Creates a provider for the default `dark` theme rendering a
    /// generic container.
    pub fn new() -> Self {
        Self {
            theme: "dark".to_owned(),
            tag: "div".to_owned(),
            class_name: None,
            toggle: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the theme name published to descendants.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Sets the theme from a typed builtin variant.
    pub fn variant(self, variant: ThemeVariantKind) -> Self {
        self.theme(variant.attr())
    }

    /// Overrides the wrapper element's tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the wrapper element's `class` attribute.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Supplies the toggle callback published to descendants. Without
    /// one, the parent context's callback is passed through.
    pub fn toggle(mut self, toggle: impl Fn() + Send + Sync + 'static) -> Self {
        self.toggle = Some(Arc::new(toggle));
        self
    }

    /// Adds a passthrough attribute to the wrapper element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a sequence of child nodes.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Renders against the parent context.
    ///
    /// A provider is the root exactly when its parent context carries no
    /// theme. The root case renders the children with no wrapper; the
    /// nested case wraps them in the configured element with `class`,
    /// `data-theme`, and the passthrough attributes, in that order.
    pub fn render(self, parent: &ThemeContext) -> RenderedProvider {
        let context = ThemeContext {
            theme: Some(self.theme.clone()),
            toggle: self.toggle.or_else(|| parent.toggle.clone()),
        };

        let is_root_provider = parent.theme.is_none();

        if is_root_provider {
            return RenderedProvider {
                nodes: self.children,
                context,
            };
        }

        // Nested providers need a wrapper to override theme tokens.
        let mut wrapper = Element::new(self.tag);

        if let Some(class_name) = self.class_name {
            wrapper = wrapper.class(class_name);
        }

        wrapper = wrapper.attr("data-theme", self.theme);

        for (name, value) in self.attrs {
            wrapper = wrapper.attr(name, value);
        }

        RenderedProvider {
            nodes: vec![wrapper.children(self.children).into()],
            context,
        }
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// A provider's rendered output plus the context it publishes.
pub struct RenderedProvider {
    nodes: Vec<Node>,
    context: ThemeContext,
}

impl RenderedProvider {
    /// The rendered nodes: the bare children for a root provider, a
    /// single wrapper element for a nested one.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The context to hand to everything rendered below this provider.
    pub fn context(&self) -> &ThemeContext {
        &self.context
    }

    /// Serializes the rendered nodes to markup.
    pub fn to_html(&self) -> String {
        render_fragment(&self.nodes)
    }
}
