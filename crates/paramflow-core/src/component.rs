//! Component traits implemented by navigation targets and callers

use crate::context::Context;
use crate::extras::Extras;

/// A full-screen component that owns a launch [`Context`].
///
/// Generated screen dispatchers accept any `Screen` as a launch caller and
/// use its context directly.
pub trait Screen {
    /// The launch context owned by this screen
    fn context(&self) -> &Context;
}

/// A component embedded in a screen.
///
/// Launching from a subview routes through the enclosing screen's context.
pub trait Subview {
    /// The screen this subview is attached to
    fn screen(&self) -> &dyn Screen;
}

/// A floating component anchored to a screen (dialogs, sheets).
///
/// Behaves like [`Subview`] for launch purposes but is attached outside
/// the screen's regular view tree.
pub trait Overlay {
    /// The screen this overlay is anchored to
    fn screen(&self) -> &dyn Screen;
}

/// A component configured through an attached argument bag rather than
/// launched.
///
/// Generated subview builders construct the component, attach the bag, and
/// read it back through [`ViewComponent::args`].
pub trait ViewComponent {
    /// Attach the configuration arguments to this component
    fn attach_args(&mut self, args: Extras);

    /// The attached arguments, if any were set
    fn args(&self) -> Option<&Extras>;
}
