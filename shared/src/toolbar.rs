// Composition entry point.
//
// The host picks one of three modes explicitly:
//   Default     -> fragments arranged by the caller-supplied default renderer
//   Custom(f)   -> fragments handed to `f`, whatever it returns is the toolbar
//   PreRendered -> finished output returned untouched, no fragments built

use std::fmt;
use std::rc::Rc;

use crate::actions::ActionProvider;
use crate::error::ToolbarError;
use crate::keymap::KeyMap;
use crate::models::FragmentSet;
use crate::slots::SlotBuilder;

/// Host-supplied arrangement of a `FragmentSet`.
pub struct Composer<O>(Rc<dyn Fn(FragmentSet) -> O>);

impl<O> Composer<O> {
    pub fn new(compose: impl Fn(FragmentSet) -> O + 'static) -> Self {
        Self(Rc::new(compose))
    }

    pub fn compose(&self, fragments: FragmentSet) -> O {
        (self.0)(fragments)
    }
}

impl<O> Clone for Composer<O> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<O> PartialEq for Composer<O> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<O> fmt::Debug for Composer<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Composer(..)")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarContent<O> {
    Default,
    Custom(Composer<O>),
    PreRendered(O),
}

impl<O> Default for ToolbarContent<O> {
    fn default() -> Self {
        ToolbarContent::Default
    }
}

impl<O> ToolbarContent<O> {
    pub fn custom(compose: impl Fn(FragmentSet) -> O + 'static) -> Self {
        ToolbarContent::Custom(Composer::new(compose))
    }
}

/// Renders one toolbar pass.
///
/// The provider is only consulted when fragments are needed; a missing
/// provider is an error in the `Default` and `Custom` modes.
pub fn render_toolbar<O: Clone>(
    content: &ToolbarContent<O>,
    provider: Option<&dyn ActionProvider>,
    keymap: &KeyMap,
    render_default: impl FnOnce(FragmentSet) -> O,
) -> Result<O, ToolbarError> {
    let composer = match content {
        ToolbarContent::PreRendered(output) => {
            tracing::debug!("Toolbar: using pre-rendered content");
            return Ok(output.clone());
        }
        ToolbarContent::Default => None,
        ToolbarContent::Custom(composer) => Some(composer),
    };

    let provider = provider.ok_or(ToolbarError::MissingActionRegistry)?;
    let fragments = SlotBuilder::new(keymap).build(&provider.actions())?;

    Ok(match composer {
        Some(composer) => {
            tracing::debug!("Toolbar: using custom composition");
            composer.compose(fragments)
        }
        None => {
            tracing::debug!("Toolbar: using default layout");
            render_default(fragments)
        }
    })
}
